use serde::{Deserialize, Serialize};

/// Registered account. `username` is unique by convention only; see
/// `service::storage::Storage::create_account_unique` for the enforcing path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Account {
    pub id: u64,
    pub username: String,
    /// Opaque credential, never serialised.
    #[serde(skip_serializing)]
    pub password: String,
}

/// Registration input: everything but the id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
}

impl NewAccount {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }

    pub fn into_account(self, id: u64) -> Account {
        Account { id, username: self.username, password: self.password }
    }
}
