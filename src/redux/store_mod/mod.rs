pub mod async_store;
pub mod async_store_state_machine;

// Re-export the following modules:
pub use async_store::*;
pub use async_store_state_machine::*;
