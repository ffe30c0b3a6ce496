//! Search request model.

use serde::{Deserialize, Serialize};

use crate::utils::{normalize_fields, split_and_trim, ValidationError};

/// A validated search request, serialized as the API's request body.
///
/// Unset optional flags and empty category lists are left out of the JSON
/// entirely; the API treats a missing key differently from `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    term: String,

    fields: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    categories: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    wildcard: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    case_sensitive: Option<bool>,
}

impl SearchRequest {
    /// Build a request from raw command-line style input.
    ///
    /// `raw_fields` and `raw_categories` are comma-delimited. Fields must all
    /// be catalog members; the first unknown one aborts the build. `term` is
    /// taken as given, rejecting an empty term is up to the caller.
    pub fn build(
        term: impl Into<String>,
        raw_fields: &str,
        raw_categories: &str,
        wildcard: Option<bool>,
        case_sensitive: Option<bool>,
    ) -> Result<Self, ValidationError> {
        let fields = normalize_fields(raw_fields)?;

        Ok(Self {
            term: term.into(),
            fields,
            categories: split_and_trim(raw_categories),
            wildcard,
            case_sensitive,
        })
    }

    /// Search term
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Fields to search, never empty
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Category filters, empty when none were supplied
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn wildcard(&self) -> Option<bool> {
        self.wildcard
    }

    pub fn case_sensitive(&self) -> Option<bool> {
        self.case_sensitive
    }

    /// Serialize to the JSON request body.
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}
