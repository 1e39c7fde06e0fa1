//! TF-IDF term weighting

use super::vocabulary::{TermCounts, Vocabulary};

/// Sparse document × term matrix of L2-normalized TF-IDF weights
///
/// Each row holds `(column, weight)` pairs in ascending column order. Zero
/// weights are not stored.
#[derive(Debug, Clone, PartialEq)]
pub struct TermWeightMatrix {
    rows: Vec<Vec<(usize, f64)>>,
    columns: usize,
}

/// `ln(N / df)`; zero for terms present in every document
pub fn idf(total_docs: usize, doc_freq: usize) -> f64 {
    if doc_freq == 0 {
        return 0.0;
    }
    (total_docs as f64 / doc_freq as f64).ln()
}

impl TermWeightMatrix {
    /// Weight every (document, term) pair as `tf × ln(N / df)` and normalize rows
    ///
    /// A row whose weights are all zero (every term occurs in every document)
    /// stays empty.
    pub fn from_counts(documents: &[TermCounts], vocabulary: &Vocabulary) -> Self {
        let total_docs = documents.len();
        let idfs: Vec<f64> = (0..vocabulary.len())
            .map(|column| idf(total_docs, vocabulary.doc_freq(column)))
            .collect();

        let rows = documents
            .iter()
            .map(|counts| {
                // BTreeMap iteration plus lexicographic columns keeps rows sorted
                let mut row: Vec<(usize, f64)> = counts
                    .iter()
                    .filter_map(|(term, &tf)| {
                        let column = vocabulary.column(term)?;
                        let weight = tf as f64 * idfs[column];
                        (weight > 0.0).then_some((column, weight))
                    })
                    .collect();
                normalize(&mut row);
                row
            })
            .collect();

        TermWeightMatrix {
            rows,
            columns: vocabulary.len(),
        }
    }

    /// (documents, vocabulary size)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns)
    }

    pub fn row(&self, index: usize) -> &[(usize, f64)] {
        self.rows.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Count of stored non-zero weights
    pub fn non_zero(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Weight at (row, column), zero when absent
    pub fn get(&self, row: usize, column: usize) -> f64 {
        let entries = self.row(row);
        entries
            .binary_search_by_key(&column, |&(c, _)| c)
            .map(|pos| entries[pos].1)
            .unwrap_or(0.0)
    }

    /// Dot product of two rows by merging their sorted entries
    pub fn dot(&self, a: usize, b: usize) -> f64 {
        let (left, right) = (self.row(a), self.row(b));
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < left.len() && j < right.len() {
            let (ca, wa) = left[i];
            let (cb, wb) = right[j];
            match ca.cmp(&cb) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += wa * wb;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

fn normalize(row: &mut [(usize, f64)]) {
    let norm = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for (_, w) in row.iter_mut() {
            *w /= norm;
        }
    }
}
