//! YAML export
//!
//! Dumps the whole ledger document to YAML for human-readable backup. The
//! output is the same shape as the JSON store, so it reads naturally next
//! to the persisted file.

use std::io::Write;
use std::path::Path;

use crate::error::{LedgerError, LedgerResult};
use crate::storage::LedgerDocument;

/// Export the full ledger document as YAML with a small comment header
pub fn export_full_yaml<W: Write>(document: &LedgerDocument, writer: &mut W) -> LedgerResult<()> {
    writeln!(writer, "# tenge-ledger full export")
        .map_err(|e| LedgerError::Persistence(e.to_string()))?;
    writeln!(
        writer,
        "# Generated: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )
    .map_err(|e| LedgerError::Persistence(e.to_string()))?;
    writeln!(writer, "# App version: {}", env!("CARGO_PKG_VERSION"))
        .map_err(|e| LedgerError::Persistence(e.to_string()))?;
    writeln!(writer).map_err(|e| LedgerError::Persistence(e.to_string()))?;

    serde_yaml::to_writer(writer, document)?;
    Ok(())
}

/// Export the full document to a file, creating parent directories
pub fn write_document_yaml(path: &Path, document: &LedgerDocument) -> LedgerResult<()> {
    super::ensure_parent_dir(path)?;
    let mut file = std::fs::File::create(path)?;
    export_full_yaml(document, &mut file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, MonthKey};

    #[test]
    fn test_yaml_export_contains_data() {
        let mut document = LedgerDocument::default();
        let month = document.month_mut("2025-01".parse::<MonthKey>().unwrap());
        month.income = 100000.0;
        month.categories.push(Category::new("Food", 0.0, None));

        let mut out = Vec::new();
        export_full_yaml(&document, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("# tenge-ledger full export"));
        assert!(text.contains("2025-01"));
        assert!(text.contains("Food"));
        assert!(text.contains("100000"));
    }

    #[test]
    fn test_yaml_roundtrips_without_comments() {
        let mut document = LedgerDocument::default();
        document
            .month_mut("2025-02".parse::<MonthKey>().unwrap())
            .income = 42.5;

        let mut out = Vec::new();
        export_full_yaml(&document, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let body: String = text
            .lines()
            .filter(|line| !line.starts_with('#'))
            .collect::<Vec<_>>()
            .join("\n");
        let back: LedgerDocument = serde_yaml::from_str(&body).unwrap();
        assert_eq!(
            back.month("2025-02".parse::<MonthKey>().unwrap())
                .unwrap()
                .income,
            42.5
        );
    }
}
