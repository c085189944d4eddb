//! Domain layer containing storefront types and view logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, money, timestamps, errors)
//! - `queue` - Groups and queue modes
//! - `seating` - Sections, seats, the selection and the demo catalog
//! - `checkout` - Holds, countdown, and the checkout cart

pub mod checkout;
pub mod foundation;
pub mod queue;
pub mod seating;
