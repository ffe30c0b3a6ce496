//! Normalization and validation of caller-supplied search input.

use thiserror::Error;

use crate::models::is_valid_field;

/// Validation error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid field: {0}")]
    InvalidField(String),

    #[error("at least one search field is required")]
    NoFields,
}

/// Split a comma-delimited list into trimmed, lowercase, non-empty entries.
///
/// The output keeps input order. Running it again over the joined output
/// yields the same list.
pub fn split_and_trim(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Check every field against the catalog, failing on the first unknown one.
pub fn verify_fields<S: AsRef<str>>(fields: &[S]) -> Result<(), ValidationError> {
    if let Some(bad) = fields.iter().find(|f| !is_valid_field(f.as_ref())) {
        return Err(ValidationError::InvalidField(bad.as_ref().to_string()));
    }
    Ok(())
}

/// Normalize and validate a raw field list.
///
/// Repeated fields collapse to their first occurrence.
pub fn normalize_fields(raw: &str) -> Result<Vec<String>, ValidationError> {
    let mut fields: Vec<String> = Vec::new();
    for field in split_and_trim(raw) {
        if !fields.contains(&field) {
            fields.push(field);
        }
    }

    verify_fields(fields.as_slice())?;

    if fields.is_empty() {
        return Err(ValidationError::NoFields);
    }
    Ok(fields)
}
