//! Word-list file locations.

use serde::{Deserialize, Serialize};

fn default_exclusion_file() -> String {
    "bad-verbs.txt".to_string()
}

fn default_queue_file() -> String {
    "verbs.txt".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Append-only list of rejected lemmas.
    #[serde(default = "default_exclusion_file")]
    pub exclusion_file: String,

    /// Pre-vetted lemmas awaiting review.
    #[serde(default = "default_queue_file")]
    pub queue_file: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            exclusion_file: default_exclusion_file(),
            queue_file: default_queue_file(),
        }
    }
}
