//! Extraction of emails and passwords from raw search responses.
//!
//! The API does not encode `email` and `password` uniformly: a record may
//! carry a single string, a list of strings, or something else entirely.
//! Each value is decoded once into a [`FieldValue`] and anything that is not
//! text is dropped without failing the parse.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::ExtractedResults;

/// Response parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed JSON: {0}")]
    MalformedJson(String),

    #[error("results field not found or not an array")]
    MissingResultsArray,
}

/// Shape of one per-record value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Absent,
    Text(&'a str),
    TextList(Vec<&'a str>),
    Other,
}

impl<'a> FieldValue<'a> {
    /// Decode `key` from a record.
    pub fn decode(record: &'a Map<String, Value>, key: &str) -> Self {
        match record.get(key) {
            None => FieldValue::Absent,
            Some(Value::String(s)) => FieldValue::Text(s.as_str()),
            Some(Value::Array(items)) => {
                FieldValue::TextList(items.iter().filter_map(Value::as_str).collect())
            }
            Some(_) => FieldValue::Other,
        }
    }

    fn append_to(self, out: &mut Vec<String>) {
        match self {
            FieldValue::Text(s) => out.push(s.to_string()),
            FieldValue::TextList(items) => out.extend(items.into_iter().map(str::to_string)),
            FieldValue::Absent | FieldValue::Other => {}
        }
    }
}

/// Parse a raw response body and extract its emails and passwords.
pub fn extract_results(body: &[u8]) -> Result<ExtractedResults, ParseError> {
    let doc: Value =
        serde_json::from_slice(body).map_err(|e| ParseError::MalformedJson(e.to_string()))?;

    let records = doc
        .get("results")
        .and_then(Value::as_array)
        .ok_or(ParseError::MissingResultsArray)?;

    let mut extracted = ExtractedResults {
        total: records.len(),
        ..Default::default()
    };

    for record in records.iter().filter_map(Value::as_object) {
        FieldValue::decode(record, "email").append_to(&mut extracted.emails);
        FieldValue::decode(record, "password").append_to(&mut extracted.passwords);
    }

    Ok(extracted)
}
