//! Values extracted from a search response.

use serde::{Deserialize, Serialize};

/// Emails and passwords pulled out of a response, with the record count.
///
/// Lists keep document order and duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedResults {
    /// Number of elements in the `results` array, malformed ones included
    pub total: usize,

    pub emails: Vec<String>,

    pub passwords: Vec<String>,
}

impl ExtractedResults {
    /// Whether the response matched nothing at all
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
