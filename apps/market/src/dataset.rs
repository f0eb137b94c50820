//! Decode boundary for the bundled listings file.
//!
//! The file is a JSON object with a top-level `Cars` array. Anything else is
//! reported as a [`DatasetError`] so callers can fall back to an empty dataset
//! instead of letting a malformed document reach the aggregation code.

use serde_json::Value;
use thiserror::Error;

use crate::domain::CarRecord;

/// File name the dashboard loads when nothing else is configured.
pub const DEFAULT_DATASET_FILE: &str = "taladrod-cars.json";

/// Top-level key holding the listings.
pub const CARS_KEY: &str = "Cars";

#[derive(Debug, Error)]
pub enum DatasetError {
    /// The resource could not be fetched or read at all.
    #[error("dataset unavailable: {0}")]
    Unavailable(String),

    #[error("dataset is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("dataset root must be an object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("dataset has no `Cars` field")]
    MissingCars,

    #[error("dataset `Cars` field must be an array, found {found}")]
    CarsNotAnArray { found: &'static str },

    #[error("car at index {index} is malformed: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Parses the raw dataset text into typed listings.
pub fn decode_dataset(raw: &str) -> Result<Vec<CarRecord>, DatasetError> {
    let document: Value = serde_json::from_str(raw).map_err(DatasetError::InvalidJson)?;
    decode_document(document)
}

/// Same as [`decode_dataset`] for an already parsed document.
pub fn decode_document(document: Value) -> Result<Vec<CarRecord>, DatasetError> {
    let mut root = match document {
        Value::Object(root) => root,
        other => {
            return Err(DatasetError::NotAnObject {
                found: kind_of(&other),
            })
        }
    };

    let cars = match root.remove(CARS_KEY) {
        None => return Err(DatasetError::MissingCars),
        Some(Value::Array(cars)) => cars,
        Some(other) => {
            return Err(DatasetError::CarsNotAnArray {
                found: kind_of(&other),
            })
        }
    };

    cars.into_iter()
        .enumerate()
        .map(|(index, car)| {
            serde_json::from_value::<CarRecord>(car)
                .map_err(|source| DatasetError::InvalidRecord { index, source })
        })
        .collect()
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
