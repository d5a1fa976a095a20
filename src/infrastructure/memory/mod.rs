//! In-process storage backend.
//!
//! [`MemoryStore`] implements both repository traits. Data lives only as long
//! as the process; it is meant for local development and tests.

mod memory_store;

pub use memory_store::MemoryStore;
