//! Similarity engine: TF-IDF vectors, all-pairs cosine similarity and
//! nearest-neighbour recommendations
//!
//! An [`EngineState`] is built once per catalog and is immutable afterwards.
//! Reloading a catalog means building a new state and dropping the old one.

mod matrix;
mod ranking;
mod tfidf;
mod vocabulary;

pub use matrix::SimilarityMatrix;
pub use ranking::RecommendOptions;
pub use tfidf::{idf, TermWeightMatrix};
pub use vocabulary::{TermCounts, Vocabulary};

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::{Catalog, CatalogRecord};
use crate::config::EngineConfig;
use crate::document::Document;
use crate::error::{BookmatchError, Result};
use crate::text::Tokenizer;
use crate::trace_time;

/// One ranked neighbour of a query book
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation<'a> {
    /// 1-based position in the result
    pub rank: usize,
    /// Catalog row of the recommended book
    #[serde(skip)]
    pub row: usize,
    #[serde(flatten)]
    pub record: &'a CatalogRecord,
    /// Cosine similarity to the query (0.0 to 1.0)
    pub score: f64,
}

/// Summary of one build
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineStats {
    pub records: usize,
    pub vocabulary_size: usize,
    pub non_zero_weights: usize,
    pub catalog_fingerprint: String,
    pub built_at: DateTime<Utc>,
    #[serde(rename = "build_ms", serialize_with = "serialize_millis")]
    pub build_duration: Duration,
}

fn serialize_millis<S: serde::Serializer>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64() * 1000.0)
}

/// Vectorized catalog ready to answer queries
///
/// Read-only after [`build`]; share it across threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct EngineState {
    config: EngineConfig,
    catalog: Catalog,
    documents: Vec<Document>,
    vocabulary: Vocabulary,
    weights: TermWeightMatrix,
    similarity: SimilarityMatrix,
    stats: EngineStats,
}

/// Vectorize `catalog` and compute its similarity matrix
///
/// Fails with `EmptyCatalog` for zero records and `EmptyVocabulary` when
/// stop-word removal leaves no terms in any document. Nothing is returned on
/// failure.
#[tracing::instrument(skip_all, fields(records = catalog.len(), language = %config.language, stemming = config.stemming))]
pub fn build(catalog: Catalog, config: &EngineConfig) -> Result<EngineState> {
    let start = Instant::now();

    if catalog.is_empty() {
        return Err(BookmatchError::EmptyCatalog);
    }

    let tokenizer = Tokenizer::new(config.language, config.stemming)?;

    let documents = catalog
        .records()
        .iter()
        .enumerate()
        .map(|(row, record)| Document::build(row, record))
        .collect::<Vec<_>>();

    let counts: Vec<TermCounts> = documents
        .iter()
        .map(|doc| {
            let mut counts = TermCounts::new();
            for term in tokenizer.tokenize(doc.text()) {
                *counts.entry(term).or_insert(0) += 1;
            }
            counts
        })
        .collect();
    trace_time!(start, "tokenize", documents = documents.len());

    let vocabulary = Vocabulary::from_counts(&counts);
    if vocabulary.is_empty() {
        return Err(BookmatchError::EmptyVocabulary);
    }

    let weights = TermWeightMatrix::from_counts(&counts, &vocabulary);
    debug!(
        vocabulary = vocabulary.len(),
        non_zero = weights.non_zero(),
        elapsed = ?start.elapsed(),
        "vectorize"
    );

    let similarity = SimilarityMatrix::from_weights(&weights);
    debug!(size = similarity.size(), elapsed = ?start.elapsed(), "similarity");

    let stats = EngineStats {
        records: catalog.len(),
        vocabulary_size: vocabulary.len(),
        non_zero_weights: weights.non_zero(),
        catalog_fingerprint: catalog.fingerprint(),
        built_at: Utc::now(),
        build_duration: start.elapsed(),
    };
    info!(
        records = stats.records,
        vocabulary = stats.vocabulary_size,
        elapsed = ?stats.build_duration,
        "engine_built"
    );

    Ok(EngineState {
        config: config.clone(),
        catalog,
        documents,
        vocabulary,
        weights,
        similarity,
        stats,
    })
}

impl EngineState {
    /// Same as the free function [`build`]
    pub fn build(catalog: Catalog, config: &EngineConfig) -> Result<Self> {
        build(catalog, config)
    }

    /// Top `n` books most similar to `title`
    ///
    /// An unknown title yields an empty result rather than an error. The query
    /// book never appears in its own result.
    pub fn recommend(&self, title: &str, n: usize) -> Vec<Recommendation<'_>> {
        self.recommend_with(title, &RecommendOptions::new(n))
    }

    /// [`EngineState::recommend`] with an additional score threshold
    pub fn recommend_with(
        &self,
        title: &str,
        options: &RecommendOptions,
    ) -> Vec<Recommendation<'_>> {
        let Some(query) = self.catalog.position(title) else {
            debug!(title, "recommend_unknown_title");
            return Vec::new();
        };

        ranking::rank(self.similarity.row(query), query, options)
            .into_iter()
            .enumerate()
            .filter_map(|(i, (row, score))| {
                self.catalog.get(row).map(|record| Recommendation {
                    rank: i + 1,
                    row,
                    record,
                    score,
                })
            })
            .collect()
    }

    /// Cosine similarity between two books, `None` if either title is unknown
    pub fn similarity(&self, title_a: &str, title_b: &str) -> Option<f64> {
        let a = self.catalog.position(title_a)?;
        let b = self.catalog.position(title_b)?;
        Some(self.similarity.get(a, b))
    }

    /// The `k` highest-weighted terms of a book, heaviest first
    ///
    /// Ties are ordered by term. `None` if the title is unknown.
    pub fn top_terms(&self, title: &str, k: usize) -> Option<Vec<(&str, f64)>> {
        let row = self.catalog.position(title)?;
        let mut terms: Vec<(&str, f64)> = self
            .weights
            .row(row)
            .iter()
            .filter_map(|&(column, weight)| {
                self.vocabulary.term(column).map(|term| (term, weight))
            })
            .collect();
        terms.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        terms.truncate(k);
        Some(terms)
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn records(&self) -> &[CatalogRecord] {
        self.catalog.records()
    }

    /// Record titled `title` (first match)
    pub fn record(&self, title: &str) -> Option<&CatalogRecord> {
        self.catalog.position(title).and_then(|row| self.catalog.get(row))
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn term_weights(&self) -> &TermWeightMatrix {
        &self.weights
    }

    pub fn similarity_matrix(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn stats(&self) -> &EngineStats {
        &self.stats
    }
}
