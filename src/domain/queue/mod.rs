//! Queue domain - groups and how they join.

mod group;
mod mode;

pub use group::Group;
pub use mode::QueueMode;
