//! Entity types shared by the store and the HTTP layer, plus the schema
//! checks applied to client input before it reaches the store.

pub mod errors;
pub mod validation;
pub mod account;
pub mod score;
pub mod note;

pub use account::{Account, NewAccount};
pub use note::{NewNote, Note};
pub use score::{NewScore, ScoreEntry};
