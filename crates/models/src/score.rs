use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ModelError;
use crate::validation::{type_name, ValidationErrors, ValidationIssue};

pub const WALLET_ADDRESS: &str = "walletAddress";
pub const SCORE: &str = "score";

/// Leaderboard entry as stored and returned to clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    pub id: u64,
    pub wallet_address: String,
    pub score: i64,
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewScore {
    pub wallet_address: String,
    pub score: i64,
    pub created_at: String,
}

impl NewScore {
    pub fn into_entry(self, id: u64) -> ScoreEntry {
        ScoreEntry {
            id,
            wallet_address: self.wallet_address,
            score: self.score,
            created_at: self.created_at,
        }
    }
}

/// Validate a submitted score body and stamp it with `created_at`.
///
/// Only `walletAddress` (string) and `score` (integer) are read; any other
/// field, including a client supplied `createdAt`, is ignored. All issues are
/// collected before returning.
pub fn parse_submission(
    body: &Value,
    created_at: impl Into<String>,
) -> Result<NewScore, ModelError> {
    let Some(obj) = body.as_object() else {
        let issue = ValidationIssue::invalid_type("", "object", type_name(body));
        return Err(ValidationErrors::from(issue).into());
    };

    let mut errors = ValidationErrors::default();

    let wallet_address = match obj.get(WALLET_ADDRESS) {
        None => {
            errors.push(ValidationIssue::required(WALLET_ADDRESS, "string"));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            errors.push(ValidationIssue::invalid_type(WALLET_ADDRESS, "string", type_name(other)));
            None
        }
    };

    let score = match obj.get(SCORE) {
        None => {
            errors.push(ValidationIssue::required(SCORE, "number"));
            None
        }
        Some(Value::Number(n)) => match integer_score(n) {
            Ok(v) => Some(v),
            Err(issue) => {
                errors.push(issue);
                None
            }
        },
        Some(other) => {
            errors.push(ValidationIssue::invalid_type(SCORE, "number", type_name(other)));
            None
        }
    };

    match (wallet_address, score) {
        (Some(wallet_address), Some(score)) => Ok(NewScore {
            wallet_address,
            score,
            created_at: created_at.into(),
        }),
        _ => Err(errors.into()),
    }
}

fn integer_score(n: &serde_json::Number) -> Result<i64, ValidationIssue> {
    if let Some(v) = n.as_i64() {
        return Ok(v);
    }
    match n.as_f64() {
        Some(f) if f.fract() != 0.0 => {
            Err(ValidationIssue::invalid_type(SCORE, "integer", "float"))
        }
        Some(f) if f < 0.0 => Err(ValidationIssue::too_small(SCORE, i64::MIN)),
        _ => Err(ValidationIssue::too_big(SCORE, i64::MAX)),
    }
}
