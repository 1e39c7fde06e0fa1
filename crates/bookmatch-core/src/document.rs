//! Composite text documents built from catalog records

use crate::catalog::CatalogRecord;

/// Text the engine vectorizes for one catalog row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    row: usize,
    text: String,
}

impl Document {
    /// Join author, genre and description (in that order) with single spaces
    ///
    /// Blank fields never reach this point: [`CatalogRecord`] rejects them
    /// with `MissingField` when it is constructed.
    pub fn build(row: usize, record: &CatalogRecord) -> Self {
        let text = [record.author(), record.genre(), record.description()].join(" ");
        Document { row, text }
    }

    /// Row of the source record in its catalog
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
