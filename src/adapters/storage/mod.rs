//! Storage Adapters
//!
//! Implementations of the CartStore port for the checkout hand-off.
//!
//! ## Available Adapters
//!
//! - **FileCartStore** - Stores the cart as a JSON file on disk
//! - **InMemoryCartStore** - Stores the cart in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileCartStore, InMemoryCartStore};
//!
//! // CLI: file-based storage
//! let store = FileCartStore::new(".ticketfangrub/checkout_data.json");
//!
//! // Testing: in-memory storage
//! let store = InMemoryCartStore::new();
//! ```

mod file_cart_store;
mod in_memory_cart_store;

pub use file_cart_store::FileCartStore;
pub use in_memory_cart_store::InMemoryCartStore;
