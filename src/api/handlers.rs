// API request handlers
// Author: Gabriel Demetrios Lafis

use actix_web::{web, HttpResponse, Responder};
use log::debug;

use crate::processing;
use super::{models::CensusRequest, ApiError};

/// Aggregate a census batch.
///
/// The JSON extractor rejects malformed bodies (missing body, unknown
/// actionType, non-integer top) before this handler runs; everything
/// else is validated by the engine. Success is a JSON array of
/// `{name, value}` records.
pub async fn census(payload: web::Json<CensusRequest>) -> Result<impl Responder, ApiError> {
    let request = payload.into_inner();

    debug!(
        "census request: {:?} over {} users, top {:?}",
        request.action_type,
        request.users.len(),
        request.top
    );

    let records = processing::run(&request)?;

    Ok(HttpResponse::Ok().json(records))
}
