//! Command and query handlers, grouped by the part of the flow they serve.
//!
//! Each handler takes its ports as `Arc<dyn _>` and reports where the user
//! goes next as a [`Navigation`](crate::application::Navigation).

pub mod checkout;
pub mod queue;
pub mod seating;
