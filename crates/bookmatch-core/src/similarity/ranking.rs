//! Neighbour ranking over one similarity row

use serde::{Deserialize, Serialize};

/// How many neighbours to return and how similar they must be
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendOptions {
    /// Maximum number of results
    pub limit: usize,
    /// Minimum score a candidate needs (inclusive)
    pub min_score: f64,
}

impl RecommendOptions {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            min_score: 0.0,
        }
    }

    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self::new(3)
    }
}

/// Rank every row except `query` by descending score, ties by ascending row
pub fn rank(scores: &[f64], query: usize, options: &RecommendOptions) -> Vec<(usize, f64)> {
    if options.limit == 0 {
        return Vec::new();
    }

    let mut candidates: Vec<(usize, f64)> = scores
        .iter()
        .copied()
        .enumerate()
        .filter(|&(row, score)| row != query && score >= options.min_score)
        .collect();

    candidates.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    candidates.truncate(options.limit);
    candidates
}
