//! CSV catalog ingestion

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use super::{Catalog, CatalogRecord, RawRecord};
use crate::error::{BookmatchError, Result};

/// Columns every catalog file must provide
pub const REQUIRED_COLUMNS: [&str; 4] = ["title", "author", "genre", "description"];

/// Options for [`load_csv`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Keep rows whose title repeats an earlier row instead of failing
    pub allow_duplicates: bool,
}

/// Column positions of the required fields in one file
struct ColumnMap {
    title: usize,
    author: usize,
    genre: usize,
    description: usize,
}

impl ColumnMap {
    fn from_headers(path: &Path, headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };

        let missing: Vec<String> = REQUIRED_COLUMNS
            .into_iter()
            .filter(|&name| find(name).is_none())
            .map(String::from)
            .collect();
        if !missing.is_empty() {
            return Err(BookmatchError::Schema {
                path: path.to_path_buf(),
                missing,
            });
        }

        Ok(ColumnMap {
            title: find("title").unwrap_or_default(),
            author: find("author").unwrap_or_default(),
            genre: find("genre").unwrap_or_default(),
            description: find("description").unwrap_or_default(),
        })
    }

    fn extract(&self, row: &StringRecord) -> RawRecord {
        let cell = |idx: usize| row.get(idx).map(str::to_string);
        RawRecord {
            title: cell(self.title),
            author: cell(self.author),
            genre: cell(self.genre),
            description: cell(self.description),
        }
    }
}

/// Load a catalog from a CSV file with a header row
///
/// Header names are matched case-insensitively and extra columns are ignored.
/// Rows keep file order. Fails with `Schema` when required columns are absent,
/// `MissingField` on blank cells and `DuplicateTitle` on repeated titles unless
/// [`LoadOptions::allow_duplicates`] is set.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_csv(path: &Path, options: &LoadOptions) -> Result<Catalog> {
    if !path.exists() {
        return Err(BookmatchError::CatalogNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)
        .map_err(|e| BookmatchError::io_operation("open catalog", path.display(), e))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file);

    let columns = ColumnMap::from_headers(path, reader.headers()?)?;

    let mut records = Vec::new();
    let mut first_seen: HashMap<String, usize> = HashMap::new();
    let mut row = StringRecord::new();

    while reader.read_record(&mut row)? {
        let line = row.position().map_or(0, |p| p.line() as usize);
        let record = CatalogRecord::try_from(columns.extract(&row)).map_err(|e| match e {
            BookmatchError::MissingField { record, field } => BookmatchError::MissingField {
                record: format!("{} on line {}", record, line),
                field,
            },
            other => other,
        })?;

        match first_seen.get(record.title()) {
            Some(&first_line) if !options.allow_duplicates => {
                return Err(BookmatchError::DuplicateTitle {
                    title: record.title().to_string(),
                    first_row: first_line,
                    row: line,
                });
            }
            Some(_) => {
                debug!(title = record.title(), line, "duplicate_title_kept");
            }
            None => {
                first_seen.insert(record.title().to_string(), line);
            }
        }

        records.push(record);
    }

    info!(records = records.len(), "catalog_loaded");
    Ok(Catalog::from_records(records))
}
