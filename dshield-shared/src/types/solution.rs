//! Solutions catalog entry.

use serde::{Deserialize, Serialize};

/// One demo product advertised by `GET /api/solutions`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SolutionItem {
    pub key: String,
    pub title: String,
    pub summary: String,
}

impl SolutionItem {
    pub fn new(key: &str, title: &str, summary: &str) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            summary: summary.to_string(),
        }
    }
}
