//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::text::Language;

/// Engine and query configuration
///
/// Fixed for the lifetime of one built engine; every document of a catalog is
/// processed with the same settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Stop-word list applied before weighting
    #[serde(default)]
    pub language: Language,

    /// Snowball stemming for the selected language (default false)
    #[serde(default)]
    pub stemming: bool,

    /// Number of recommendations when the caller does not ask for a count
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Largest count the CLI accepts
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,

    /// Candidates scoring below this are dropped (default 0.0)
    #[serde(default)]
    pub min_score: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            stemming: false,
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            min_score: 0.0,
        }
    }
}

fn default_limit() -> usize {
    3
}

fn default_max_limit() -> usize {
    10
}
