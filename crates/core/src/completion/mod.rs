//! Completion status tracking: ports and the union-merged store

pub mod ports;
pub mod store;

pub use ports::CompletionBackend;
pub use store::CompletionStore;
