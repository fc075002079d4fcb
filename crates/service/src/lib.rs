//! Service layer: the in-memory store behind the HTTP handlers.
//! - `storage` holds the `Storage` seam and its in-process implementation.
//! - `limit` resolves leaderboard request sizes.
//! - Errors are reported through `errors::ServiceError`.

pub mod errors;
pub mod limit;
pub mod storage;

pub use storage::{MemStorage, Storage};
