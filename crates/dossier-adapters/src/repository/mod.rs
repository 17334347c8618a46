//! Application repository adapters.

pub mod memory;

pub use memory::InMemoryApplicationRepository;
