//! CLI commands for bookmatch

pub mod dispatch;
pub mod format;
pub mod info;
pub mod interactive;
pub mod list;
pub mod recommend;
pub mod similarity;
pub mod terms;
