//! TicketFanGrub - storefront client for event ticketing
//!
//! This crate drives the TicketFanGrub purchase flow against the ticketing
//! backend: joining an event queue, watching the queue position, browsing
//! the seat map (with a built-in demo catalog when the backend is down),
//! holding up to four seats, and completing checkout before the hold runs out.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
