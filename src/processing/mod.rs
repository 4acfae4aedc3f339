// Processing module: validation and aggregation engine
// Author: Gabriel Demetrios Lafis

pub mod aggregate;
pub mod extract;
pub mod rank;
pub mod validate;

use std::error::Error;
use std::fmt;

use log::debug;

use crate::api::models::{ActionType, AggregationRecord, CensusRequest};

/// Represents an error in the processing module.
///
/// Every variant is a request-validation failure; the transport layer
/// maps all of them to a 400 response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingError {
    EmptyBatch,
    MissingField(String),
    InvalidValue(String),
    InvalidTop(String),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProcessingError::EmptyBatch => write!(f, "'users' must be a non-empty array"),
            ProcessingError::MissingField(msg) => write!(f, "Missing field: {}", msg),
            ProcessingError::InvalidValue(msg) => write!(f, "Invalid value: {}", msg),
            ProcessingError::InvalidTop(msg) => write!(f, "Invalid top: {}", msg),
        }
    }
}

impl Error for ProcessingError {}

/// Run the full engine on a decoded request.
///
/// Sequencing is validate, extract, aggregate, then gate `top` against
/// the distinct category count, then rank. The `top` bound can only be
/// checked after aggregation, since the distinct count is not known
/// before; the aggregated result is reused for ranking rather than
/// recomputed. Past validation the engine is pure and cannot fail.
pub fn run(request: &CensusRequest) -> Result<Vec<AggregationRecord>, ProcessingError> {
    validate::validate(request)?;

    let extractor = extract::for_action(request.action_type);
    let values = request.users.iter().filter_map(extractor);

    let records = match request.action_type {
        ActionType::CountByGender | ActionType::CountByCountry => {
            aggregate::count_categories(values)
        }
        ActionType::CountPasswordComplexity => aggregate::score_passwords(values),
    };

    debug!(
        "aggregated {} users into {} categories",
        request.users.len(),
        records.len()
    );

    match request.top {
        None => Ok(records),
        Some(top) => {
            if top <= 0 || top as usize >= records.len() {
                return Err(ProcessingError::InvalidTop(format!(
                    "'top' must be greater than 0 and less than the number of \
                     distinct categories ({}), got {}",
                    records.len(),
                    top
                )));
            }
            Ok(rank::top_n(records, top as usize))
        }
    }
}
