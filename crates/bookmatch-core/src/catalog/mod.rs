//! Book catalog: typed records and the ordered collection the engine is built from

mod loader;

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::{BookmatchError, Result};

pub use loader::{load_csv, LoadOptions, REQUIRED_COLUMNS};

/// One untyped catalog row as it comes out of ingestion
///
/// Any field may be absent; [`CatalogRecord::try_from`] enforces the schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
}

/// A validated book: every text field present and non-blank
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CatalogRecord {
    title: String,
    author: String,
    genre: String,
    description: String,
}

impl CatalogRecord {
    /// Build a record, trimming every field
    ///
    /// Blank fields fail with `MissingField`.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self> {
        Self::try_from(RawRecord {
            title: Some(title.into()),
            author: Some(author.into()),
            genre: Some(genre.into()),
            description: Some(description.into()),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl TryFrom<RawRecord> for CatalogRecord {
    type Error = BookmatchError;

    fn try_from(raw: RawRecord) -> Result<Self> {
        let title = required(raw.title, "title", "<untitled>")?;
        let author = required(raw.author, "author", &title)?;
        let genre = required(raw.genre, "genre", &title)?;
        let description = required(raw.description, "description", &title)?;

        Ok(CatalogRecord {
            title,
            author,
            genre,
            description,
        })
    }
}

fn required(value: Option<String>, field: &str, record: &str) -> Result<String> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(BookmatchError::missing_field(record, field)),
    }
}

impl fmt::Display for CatalogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.author)
    }
}

/// Ordered set of records; row position is the record's identity inside an engine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<CatalogRecord>,
    positions: HashMap<String, usize>,
}

impl Catalog {
    /// Wrap records in their given order
    ///
    /// Duplicate titles are kept; lookups resolve to the first row.
    pub fn from_records(records: Vec<CatalogRecord>) -> Self {
        let mut positions = HashMap::with_capacity(records.len());
        for (row, record) in records.iter().enumerate() {
            positions.entry(record.title.clone()).or_insert(row);
        }
        Catalog { records, positions }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    pub fn get(&self, row: usize) -> Option<&CatalogRecord> {
        self.records.get(row)
    }

    /// Row of the first record titled exactly `title`
    pub fn position(&self, title: &str) -> Option<usize> {
        self.positions.get(title).copied()
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.title.as_str())
    }

    /// Hex sha256 over every row in order
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for record in &self.records {
            for field in [
                &record.title,
                &record.author,
                &record.genre,
                &record.description,
            ] {
                hasher.update(field.as_bytes());
                hasher.update([0x1f]);
            }
            hasher.update([0x1e]);
        }
        hex::encode(hasher.finalize())
    }
}

impl FromIterator<CatalogRecord> for Catalog {
    fn from_iter<I: IntoIterator<Item = CatalogRecord>>(iter: I) -> Self {
        Catalog::from_records(iter.into_iter().collect())
    }
}
