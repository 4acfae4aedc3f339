// Field extractors for user records
// Author: Gabriel Demetrios Lafis

use crate::api::models::{ActionType, User};

/// Extract the `gender` literal from a user record
pub fn gender(user: &User) -> Option<&str> {
    user.gender.as_deref()
}

/// Extract the `nat` country code token from a user record
pub fn nationality(user: &User) -> Option<&str> {
    user.nat.as_deref()
}

/// Extract the raw `login.password` string from a user record
pub fn password(user: &User) -> Option<&str> {
    user.login.as_ref().and_then(|login| login.password.as_deref())
}

/// Select the extractor matching an action type.
///
/// Extractors are pure accessors; on a validated batch they are total,
/// since validation has already rejected any record missing the field.
pub fn for_action(action_type: ActionType) -> fn(&User) -> Option<&str> {
    match action_type {
        ActionType::CountByGender => gender,
        ActionType::CountByCountry => nationality,
        ActionType::CountPasswordComplexity => password,
    }
}
