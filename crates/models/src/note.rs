use serde::{Deserialize, Serialize};

/// Dated note shown by the client; `is_highlighted` is `0` or `1` on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: u64,
    pub date: String,
    pub content: String,
    pub is_highlighted: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNote {
    pub date: String,
    pub content: String,
    #[serde(default)]
    pub is_highlighted: Option<u8>,
}

impl NewNote {
    pub fn into_note(self, id: u64) -> Note {
        Note {
            id,
            date: self.date,
            content: self.content,
            is_highlighted: self.is_highlighted.unwrap_or(0),
        }
    }
}
