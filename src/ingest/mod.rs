//! Catalog directory ingest
//!
//! Converts Rusmark text exports to JSON files, one sibling `.json` per
//! `.txt`. All logging for the pipeline happens here; the parser core stays
//! silent.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::AppResult;
use crate::models::{BatchReport, BibliographicRecord, FileFailure, FileReport};
use crate::rusmark;

/// Read a catalog file tolerating invalid UTF-8; exports occasionally carry
/// mixed encodings, and bad sequences are replaced rather than rejected.
fn read_lossy(path: &Path) -> AppResult<(String, bool)> {
    let bytes = fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok((text, false)),
        Err(err) => Ok((String::from_utf8_lossy(err.as_bytes()).into_owned(), true)),
    }
}

fn is_catalog_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("txt"))
        .unwrap_or(false)
}

/// Serialize records as pretty-printed JSON. serde_json writes UTF-8, so
/// Cyrillic text lands in the file unescaped.
pub fn write_json(records: &[BibliographicRecord], path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    Ok(())
}

/// Parse one catalog export and write its JSON rendition next to it.
pub fn process_file(path: &Path) -> AppResult<FileReport> {
    let (content, lossy) = read_lossy(path)?;
    let records = rusmark::parse(&content);

    let mut warnings = Vec::new();
    if lossy {
        warnings.push("invalid UTF-8 sequences replaced during decode".to_string());
    }
    if records.is_empty() {
        warnings.push("no records found".to_string());
    }

    let output = path.with_extension("json");
    write_json(&records, &output)?;

    tracing::info!(
        file = %path.display(),
        records = records.len(),
        "Converted catalog file"
    );

    Ok(FileReport {
        file: path.to_path_buf(),
        output,
        records: records.len(),
        warnings,
    })
}

/// Convert every `.txt` export under `dir` (extension matched
/// case-insensitively). A failing file is logged and skipped so one bad
/// export does not abort the batch.
pub fn process_dir(dir: &Path) -> AppResult<BatchReport> {
    let started_at = Utc::now();

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| is_catalog_file(path))
        .collect();
    paths.sort();

    if paths.is_empty() {
        tracing::warn!(dir = %dir.display(), "No .txt catalog files found");
    }

    let mut files = Vec::new();
    let mut failed = Vec::new();
    for path in paths {
        match process_file(&path) {
            Ok(report) => files.push(report),
            Err(err) => {
                tracing::error!(file = %path.display(), error = %err, "Catalog file failed");
                failed.push(FileFailure {
                    file: path,
                    error: err.to_string(),
                });
            }
        }
    }

    Ok(BatchReport {
        started_at,
        finished_at: Utc::now(),
        files,
        failed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const DUMP: &str = "#200: ^AКосмос\n#700: ^AГагарин^BЮ.А.\n*****\n#606: ^AИстория\n*****";

    #[test]
    fn test_process_file_writes_sibling_json() {
        let dir = tempfile::tempdir().unwrap();
        let txt = dir.path().join("csl.TXT");
        fs::write(&txt, DUMP).unwrap();

        let report = process_file(&txt).unwrap();
        assert_eq!(report.records, 2);
        assert_eq!(report.output, dir.path().join("csl.json"));

        let written = fs::read_to_string(&report.output).unwrap();
        let parsed: Vec<BibliographicRecord> = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].title.as_deref(), Some("Космос"));
        // Cyrillic must land unescaped.
        assert!(written.contains("Космос"));
    }

    #[test]
    fn test_process_file_lossy_decode_warns() {
        let dir = tempfile::tempdir().unwrap();
        let txt = dir.path().join("bad.txt");
        let mut bytes = b"#606: ^A".to_vec();
        bytes.push(0xFF);
        bytes.extend_from_slice("История".as_bytes());
        fs::write(&txt, bytes).unwrap();

        let report = process_file(&txt).unwrap();
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("invalid UTF-8")));
    }

    #[test]
    fn test_process_dir_skips_non_txt_and_continues() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), DUMP).unwrap();
        fs::write(dir.path().join("b.TXT"), "#601: ^PАкадемия\n*****").unwrap();
        fs::write(dir.path().join("notes.md"), "ignored").unwrap();

        let report = process_dir(dir.path()).unwrap();
        assert_eq!(report.files.len(), 2);
        assert!(report.failed.is_empty());
        assert_eq!(report.records_total(), 3);
    }

    #[test]
    fn test_missing_dir_is_an_error() {
        assert!(process_dir(Path::new("/nonexistent-rusmark-dir")).is_err());
    }
}
