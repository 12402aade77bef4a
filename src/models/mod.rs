//! Data models for the Rusmark ingest pipeline

pub mod record;
pub mod report;

pub use record::{BibliographicRecord, SemanticField};
pub use report::{BatchReport, FileFailure, FileReport};
