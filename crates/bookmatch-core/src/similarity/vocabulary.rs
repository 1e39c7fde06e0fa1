//! Catalog vocabulary: term columns and document frequencies

use std::collections::{BTreeMap, HashMap};

/// Per-document raw term counts, keyed by term in lexicographic order
pub type TermCounts = BTreeMap<String, usize>;

/// Every term that occurs in at least one document
///
/// Column order is lexicographic so that identical catalogs always produce the
/// same matrix layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
    columns: HashMap<String, usize>,
    doc_freq: Vec<usize>,
}

impl Vocabulary {
    /// Collect terms and document frequencies from per-document counts
    pub fn from_counts(documents: &[TermCounts]) -> Self {
        let mut df: BTreeMap<&str, usize> = BTreeMap::new();
        for counts in documents {
            for term in counts.keys() {
                *df.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        let mut terms = Vec::with_capacity(df.len());
        let mut columns = HashMap::with_capacity(df.len());
        let mut doc_freq = Vec::with_capacity(df.len());
        for (column, (term, freq)) in df.into_iter().enumerate() {
            terms.push(term.to_string());
            columns.insert(term.to_string(), column);
            doc_freq.push(freq);
        }

        Vocabulary {
            terms,
            columns,
            doc_freq,
        }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Column of `term`, if it occurs in the catalog
    pub fn column(&self, term: &str) -> Option<usize> {
        self.columns.get(term).copied()
    }

    /// Term stored at `column`
    pub fn term(&self, column: usize) -> Option<&str> {
        self.terms.get(column).map(String::as_str)
    }

    /// Number of documents containing the term at `column`
    pub fn doc_freq(&self, column: usize) -> usize {
        self.doc_freq.get(column).copied().unwrap_or(0)
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}
