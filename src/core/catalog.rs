//! Badge catalog parsing.
//!
//! The catalog is a markdown document where every `###` heading introduces a
//! pipe-delimited table. Each table row becomes one [`BadgeRecord`] keyed by the
//! table's header cells.

use crate::domain::model::{BadgeRecord, Catalog, RowOutcome, Section, SkipReason, TableMode};
use crate::utils::error::Result;

pub const HEADING_MARKER: &str = "###";

/// Code points allowed to survive in a heading label.
const LABEL_ALLOWED: std::ops::RangeInclusive<u32> = 1..=124;

#[derive(Debug, Clone, Default)]
pub struct ParsedCatalog {
    pub records: Catalog,
    pub skipped: Vec<SkippedRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub section: String,
    pub line: String,
    pub reason: SkipReason,
}

/// Strips the heading marker and drops characters outside the allow-list.
pub fn heading_label(line: &str) -> String {
    line.trim_matches(|c: char| c == '#' || c == ' ')
        .chars()
        .filter(|c| LABEL_ALLOWED.contains(&(*c as u32)))
        .collect::<String>()
        .trim()
        .to_string()
}

pub fn split_sections(document: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current: Option<Section> = None;

    for line in document.split('\n') {
        if line.starts_with(HEADING_MARKER) {
            if let Some(section) = current.take() {
                sections.push(section);
            }
            current = Some(Section {
                label: heading_label(line),
                lines: Vec::new(),
            });
        } else if let Some(section) = current.as_mut() {
            section.lines.push(line.to_string());
        }
    }

    // 最後一個區段在文件結尾時也要收進來
    if let Some(section) = current {
        sections.push(section);
    }

    sections
}

/// Cells of a `| a | b |` row, without the empty fields outside the outer pipes.
fn split_row(line: &str) -> Vec<String> {
    let segments: Vec<&str> = line.split('|').collect();
    if segments.len() < 2 {
        return Vec::new();
    }
    segments[1..segments.len() - 1]
        .iter()
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// Parses the block under one heading.
///
/// The first and last lines of the block are dropped as blank fencing, the
/// next line is the header and the one after it the separator row. Every
/// remaining line yields one [`RowOutcome`].
pub fn parse_table_rows(lines: &[String], mode: TableMode) -> Vec<RowOutcome> {
    if lines.len() < 3 {
        return Vec::new();
    }
    let body = &lines[1..lines.len() - 1];
    let header = split_row(&body[0]);

    body.iter()
        .skip(2)
        .map(|line| {
            let values = split_row(line);
            if values.is_empty() || header.is_empty() {
                return RowOutcome::Skipped {
                    line: line.clone(),
                    reason: SkipReason::Empty,
                };
            }
            if mode == TableMode::Strict && values.len() != header.len() {
                return RowOutcome::Skipped {
                    line: line.clone(),
                    reason: SkipReason::ColumnMismatch {
                        expected: header.len(),
                        found: values.len(),
                    },
                };
            }
            let record: BadgeRecord = header.iter().cloned().zip(values).collect();
            RowOutcome::Record(record)
        })
        .collect()
}

pub fn parse_catalog_with_mode(document: &str, mode: TableMode) -> ParsedCatalog {
    let mut parsed = ParsedCatalog::default();

    for section in split_sections(document) {
        for outcome in parse_table_rows(&section.lines, mode) {
            match outcome {
                RowOutcome::Record(record) => parsed.records.push(record),
                RowOutcome::Skipped { line, reason } => parsed.skipped.push(SkippedRow {
                    section: section.label.clone(),
                    line,
                    reason,
                }),
            }
        }
    }

    parsed
}

/// Best-effort parse of every table in the document.
pub fn parse_catalog(document: &str) -> Catalog {
    parse_catalog_with_mode(document, TableMode::Lenient).records
}

pub fn catalog_to_json(catalog: &[BadgeRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(catalog)?)
}
