//! Rusmark catalog ingest
//!
//! Parses library-catalog exports in the Rusmark tagged text format into
//! structured bibliographic records and converts them to JSON for
//! downstream import.

pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod rusmark;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use models::BibliographicRecord;
pub use rusmark::{parse, parse_sequential};
