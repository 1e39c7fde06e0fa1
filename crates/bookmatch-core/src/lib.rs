//! Bookmatch Core Library
//!
//! Content-based book recommendations: catalog records are reduced to
//! composite documents, weighted with TF-IDF and compared by cosine
//! similarity.

pub mod catalog;
pub mod config;
pub mod document;
pub mod error;
pub mod logging;
pub mod similarity;
pub mod text;

pub use catalog::{Catalog, CatalogRecord};
pub use config::EngineConfig;
pub use error::{BookmatchError, Result};
pub use similarity::{build, EngineState, RecommendOptions, Recommendation};
