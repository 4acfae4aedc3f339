// Request validation for census batches
// Author: Gabriel Demetrios Lafis

use crate::api::models::{ActionType, CensusRequest};
use super::{extract, ProcessingError};

/// The closed set of accepted gender literals
pub const GENDERS: [&str; 3] = ["male", "female", "other"];

/// Validate the shape of a decoded census request.
///
/// Validation is all-or-nothing: one bad record fails the whole batch,
/// there is no skip-and-continue. The `top` bound against the distinct
/// category count is checked later by the dispatcher, once the
/// aggregation result is known.
pub fn validate(request: &CensusRequest) -> Result<(), ProcessingError> {
    if request.users.is_empty() {
        return Err(ProcessingError::EmptyBatch);
    }

    let extractor = extract::for_action(request.action_type);

    for (index, user) in request.users.iter().enumerate() {
        let value = extractor(user).ok_or_else(|| {
            ProcessingError::MissingField(format!(
                "user at index {} is missing required field '{}'",
                index,
                request.action_type.required_field()
            ))
        })?;

        // Gender is a closed vocabulary; country codes and passwords are
        // accepted as-is and become their own categories.
        if request.action_type == ActionType::CountByGender && !GENDERS.contains(&value) {
            return Err(ProcessingError::InvalidValue(format!(
                "user at index {} has invalid gender '{}'",
                index, value
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::User;

    fn gender_request(genders: &[&str]) -> CensusRequest {
        CensusRequest {
            action_type: ActionType::CountByGender,
            users: genders
                .iter()
                .map(|g| User {
                    gender: Some(g.to_string()),
                    ..User::default()
                })
                .collect(),
            top: None,
        }
    }

    #[test]
    fn test_validate_accepts_closed_gender_set() {
        let request = gender_request(&["male", "female", "other"]);
        assert!(validate(&request).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_batch() {
        let request = gender_request(&[]);
        assert!(matches!(validate(&request), Err(ProcessingError::EmptyBatch)));
    }

    #[test]
    fn test_validate_rejects_unknown_gender_literal() {
        for bad in ["M", "F", "unknown", "Male", ""] {
            let request = gender_request(&["male", bad]);
            assert!(
                matches!(validate(&request), Err(ProcessingError::InvalidValue(_))),
                "gender '{}' should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_validate_rejects_missing_field_on_any_record() {
        let mut request = gender_request(&["male", "female"]);
        request.users.push(User::default());
        assert!(matches!(
            validate(&request),
            Err(ProcessingError::MissingField(_))
        ));
    }

    #[test]
    fn test_validate_accepts_unrecognized_country_codes() {
        let request = CensusRequest {
            action_type: ActionType::CountByCountry,
            users: vec![
                User {
                    nat: Some("US".to_string()),
                    ..User::default()
                },
                User {
                    nat: Some("USA".to_string()),
                    ..User::default()
                },
            ],
            top: None,
        };
        assert!(validate(&request).is_ok());
    }

    #[test]
    fn test_validate_accepts_empty_password() {
        let request = CensusRequest {
            action_type: ActionType::CountPasswordComplexity,
            users: vec![User {
                login: Some(crate::api::models::Login {
                    password: Some(String::new()),
                }),
                ..User::default()
            }],
            top: None,
        };
        assert!(validate(&request).is_ok());
    }
}
