//! Dense all-pairs cosine similarity

use rayon::prelude::*;

use super::tfidf::TermWeightMatrix;

/// Square, symmetric matrix of cosine similarities in `[0, 1]`
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Dot every pair of normalized rows
    ///
    /// Only the upper triangle is computed; it is mirrored into the lower
    /// half. The diagonal is 1.0 even for rows with no weighted terms.
    pub fn from_weights(weights: &TermWeightMatrix) -> Self {
        let (size, _) = weights.shape();

        let upper: Vec<Vec<f64>> = (0..size)
            .into_par_iter()
            .map(|i| {
                ((i + 1)..size)
                    .map(|j| weights.dot(i, j).clamp(0.0, 1.0))
                    .collect()
            })
            .collect();

        let mut values = vec![0.0; size * size];
        for (i, row) in upper.iter().enumerate() {
            values[i * size + i] = 1.0;
            for (offset, &score) in row.iter().enumerate() {
                let j = i + 1 + offset;
                values[i * size + j] = score;
                values[j * size + i] = score;
            }
        }

        SimilarityMatrix { size, values }
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Similarity of rows `i` and `j`
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is not below [`SimilarityMatrix::size`].
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(j < self.size, "column {j} out of range for size {}", self.size);
        self.values[i * self.size + j]
    }

    /// Full similarity row for `i`
    ///
    /// # Panics
    ///
    /// Panics if `i` is not below [`SimilarityMatrix::size`].
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.size..(i + 1) * self.size]
    }
}
