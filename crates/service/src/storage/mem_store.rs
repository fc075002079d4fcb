use std::collections::BTreeMap;

use async_trait::async_trait;
use models::{Account, NewAccount, NewNote, NewScore, Note, ScoreEntry};
use tokio::sync::RwLock;
use tracing::debug;

use super::{seed, sequence::IdSequence, Storage};
use crate::errors::ServiceError;

/// In-memory store for accounts, scores and notes.
///
/// Each entity kind lives in its own id-keyed `BTreeMap`. Ids are reserved
/// while the map's write lock is held, so iteration order is creation order.
/// Nothing survives a restart; a fresh store always starts with the seed notes.
pub struct MemStorage {
    accounts: RwLock<BTreeMap<u64, Account>>,
    scores: RwLock<BTreeMap<u64, ScoreEntry>>,
    notes: RwLock<BTreeMap<u64, Note>>,
    account_ids: IdSequence,
    score_ids: IdSequence,
    note_ids: IdSequence,
}

impl MemStorage {
    /// Empty store with the default notes seeded as ids 1..=4.
    pub fn new() -> Self {
        let note_ids = IdSequence::new();
        let notes = seed::default_notes()
            .into_iter()
            .map(|input: NewNote| {
                let id = note_ids.next_id();
                (id, input.into_note(id))
            })
            .collect::<BTreeMap<_, _>>();
        debug!(notes = notes.len(), "seeded default notes");

        Self {
            accounts: RwLock::new(BTreeMap::new()),
            scores: RwLock::new(BTreeMap::new()),
            notes: RwLock::new(notes),
            account_ids: IdSequence::new(),
            score_ids: IdSequence::new(),
            note_ids,
        }
    }

    /// Id the next seeded or created note would receive.
    pub fn next_note_id(&self) -> u64 {
        self.note_ids.peek()
    }

    fn insert_account(&self, map: &mut BTreeMap<u64, Account>, input: NewAccount) -> Account {
        let id = self.account_ids.next_id();
        let account = input.into_account(id);
        map.insert(id, account.clone());
        account
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn get_account(&self, id: u64) -> Result<Option<Account>, ServiceError> {
        let map = self.accounts.read().await;
        Ok(map.get(&id).cloned())
    }

    async fn get_account_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, ServiceError> {
        let map = self.accounts.read().await;
        Ok(map.values().find(|a| a.username == username).cloned())
    }

    async fn create_account(&self, input: NewAccount) -> Result<Account, ServiceError> {
        let mut map = self.accounts.write().await;
        Ok(self.insert_account(&mut map, input))
    }

    async fn create_account_unique(&self, input: NewAccount) -> Result<Account, ServiceError> {
        let mut map = self.accounts.write().await;
        if map.values().any(|a| a.username == input.username) {
            return Err(ServiceError::conflict("account", &input.username));
        }
        Ok(self.insert_account(&mut map, input))
    }

    async fn get_top_scores(&self, limit: usize) -> Result<Vec<ScoreEntry>, ServiceError> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let map = self.scores.read().await;
        let mut entries: Vec<ScoreEntry> = map.values().cloned().collect();
        // stable: ties stay in ascending id order
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(limit);
        Ok(entries)
    }

    async fn add_score(&self, input: NewScore) -> Result<ScoreEntry, ServiceError> {
        let mut map = self.scores.write().await;
        let id = self.score_ids.next_id();
        let entry = input.into_entry(id);
        map.insert(id, entry.clone());
        Ok(entry)
    }

    async fn get_all_notes(&self) -> Result<Vec<Note>, ServiceError> {
        let map = self.notes.read().await;
        Ok(map.values().cloned().collect())
    }
}
