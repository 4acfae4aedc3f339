// Census Toy Service
// Author: Gabriel Demetrios Lafis

//! # Census Toy Service
//!
//! A small aggregation service written in Rust. It accepts a batch of
//! user records together with an action selector, validates the batch
//! strictly, and returns aggregated counts or scores as `{name, value}`
//! records.
//!
//! ## Features
//!
//! - Counting users by gender (closed vocabulary) or by country code
//! - Scoring password complexity per distinct password string
//! - Optional top-N truncation of the result, ordered by value
//! - All-or-nothing request validation with a uniform 400 boundary
//! - REST API for remote access
//!
//! ## Example
//!
//! ```rust
//! use census_toy_service::{
//!     api::models::{ActionType, CensusRequest, User},
//!     processing,
//! };
//!
//! // Build a batch
//! let request = CensusRequest {
//!     action_type: ActionType::CountByGender,
//!     users: vec![
//!         User { gender: Some("male".to_string()), ..User::default() },
//!         User { gender: Some("female".to_string()), ..User::default() },
//!         User { gender: Some("male".to_string()), ..User::default() },
//!     ],
//!     top: None,
//! };
//!
//! // Run the engine
//! let records = processing::run(&request).unwrap();
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].name, "male");
//! assert_eq!(records[0].value, 2);
//! ```

pub mod api;
pub mod processing;
pub mod utils;

// Re-export main types
pub use api::models::{ActionType, AggregationRecord, CensusRequest, Login, User};
pub use api::Server;
pub use utils::Config;
