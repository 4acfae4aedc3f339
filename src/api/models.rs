// API request and response models
// Author: Gabriel Demetrios Lafis

use serde::{Deserialize, Serialize};

/// Action selector choosing which aggregation strategy processes the batch.
///
/// The variant names are wire-format constants and must match the
/// `actionType` literals exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ActionType {
    CountByGender,
    CountByCountry,
    CountPasswordComplexity,
}

impl ActionType {
    /// Wire name of the field each user record must carry for this action
    pub fn required_field(&self) -> &'static str {
        match self {
            ActionType::CountByGender => "gender",
            ActionType::CountByCountry => "nat",
            ActionType::CountPasswordComplexity => "login.password",
        }
    }
}

/// Request to aggregate a batch of user records
#[derive(Debug, Clone, Deserialize)]
pub struct CensusRequest {
    #[serde(rename = "actionType")]
    pub action_type: ActionType,
    pub users: Vec<User>,
    pub top: Option<i64>,
}

/// A single user record.
///
/// Generator-produced records carry many more fields than the ones
/// aggregated here; unknown fields are ignored on decode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct User {
    pub gender: Option<String>,
    pub nat: Option<String>,
    pub login: Option<Login>,
}

/// Login credentials block of a user record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Login {
    pub password: Option<String>,
}

/// One aggregated output record: a distinct category and its count or score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationRecord {
    pub name: String,
    pub value: i64,
}

impl AggregationRecord {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        AggregationRecord {
            name: name.into(),
            value,
        }
    }
}
