use serde::ser::{Serialize, SerializeMap, Serializer};

pub const NAME_COLUMN: &str = "Name";
pub const BADGE_COLUMN: &str = "Badge";

/// One table row: column header to cell text, in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadgeRecord {
    fields: Vec<(String, String)>,
}

impl BadgeRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later duplicates of a header overwrite the earlier value in place.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(key, _)| *key == column) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == column)
            .map(|(_, value)| value.as_str())
    }

    pub fn name(&self) -> Option<&str> {
        self.get(NAME_COLUMN)
    }

    pub fn badge(&self) -> Option<&str> {
        self.get(BADGE_COLUMN)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for BadgeRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = BadgeRecord::new();
        for (column, value) in iter {
            record.insert(column, value);
        }
        record
    }
}

impl Serialize for BadgeRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (column, value) in &self.fields {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

/// A heading label and the raw lines beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub label: String,
    pub lines: Vec<String>,
}

pub type Catalog = Vec<BadgeRecord>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    ColumnMismatch { expected: usize, found: usize },
    Empty,
}

/// Outcome of parsing a single data row of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Record(BadgeRecord),
    Skipped { line: String, reason: SkipReason },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TableMode {
    /// Zip rows against the header and keep whatever pairs up.
    #[default]
    Lenient,
    /// Skip rows whose column count differs from the header.
    Strict,
}

/// README as stored in the hosted repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmeFile {
    pub path: String,
    pub sha: String,
    pub content: String,
}

/// Everything `extract` pulls from the outside world.
#[derive(Debug, Clone)]
pub struct ExtractedDocuments {
    pub readme: ReadmeFile,
    pub catalog_markdown: String,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub readme: ReadmeFile,
    pub catalog: Catalog,
    pub selected: Vec<String>,
    pub unmatched: Vec<String>,
    pub new_content: String,
}

impl TransformResult {
    pub fn changed(&self) -> bool {
        self.new_content != self.readme.content
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Committed { path: String },
    Unchanged,
    DryRun { content: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_columns_overwrite_in_place() {
        let record: BadgeRecord = vec![("Name", "Go"), ("Badge", "a"), ("Name", "Rust")]
            .into_iter()
            .collect();
        assert_eq!(record.len(), 2);
        assert_eq!(record.name(), Some("Rust"));
        let columns: Vec<_> = record.columns().map(|(k, _)| k).collect();
        assert_eq!(columns, vec!["Name", "Badge"]);
    }

    #[test]
    fn test_record_serializes_in_header_order() {
        let record: BadgeRecord = vec![("Name", "Python"), ("Badge", "![Python](url)")]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"Name":"Python","Badge":"![Python](url)"}"#);
    }
}
