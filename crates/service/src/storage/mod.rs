//! Storage abstractions for the service layer
//!
//! `Storage` is the seam handlers depend on; `MemStorage` is the in-process
//! implementation. Operations are async so a persistent backend can be
//! swapped in without touching callers.

use async_trait::async_trait;
use models::{Account, NewAccount, NewScore, Note, ScoreEntry};

use crate::errors::ServiceError;

pub mod mem_store;
pub mod seed;
pub mod sequence;

pub use mem_store::MemStorage;

#[async_trait]
pub trait Storage: Send + Sync {
    async fn get_account(&self, id: u64) -> Result<Option<Account>, ServiceError>;

    /// First account with this username, in creation order.
    async fn get_account_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, ServiceError>;

    /// Store a new account. Duplicate usernames are accepted.
    async fn create_account(&self, input: NewAccount) -> Result<Account, ServiceError>;

    /// Like `create_account`, but fails with `ServiceError::Conflict` if the
    /// username is already taken.
    async fn create_account_unique(&self, input: NewAccount) -> Result<Account, ServiceError>;

    /// Highest scores first, at most `limit` entries. Equal scores keep
    /// submission order.
    async fn get_top_scores(&self, limit: usize) -> Result<Vec<ScoreEntry>, ServiceError>;

    async fn add_score(&self, input: NewScore) -> Result<ScoreEntry, ServiceError>;

    /// All notes in creation order.
    async fn get_all_notes(&self) -> Result<Vec<Note>, ServiceError>;
}
