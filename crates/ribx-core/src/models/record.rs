//! Per-file result records handed to the output writers.

use serde::Serialize;

/// One row of batch output: a file name and the IBAN found in it, if any.
///
/// Records are immutable once created and collected in file discovery
/// order; the ordered sequence is the sole artifact the batch produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRecord {
    /// Base name of the processed file.
    #[serde(rename = "FILE_NAME")]
    pub file_name: String,

    /// The single valid IBAN, or `None` when no candidate validated.
    #[serde(rename = "IBAN")]
    pub iban: Option<String>,
}

impl ResultRecord {
    /// Create a new record.
    pub fn new(file_name: impl Into<String>, iban: Option<String>) -> Self {
        Self {
            file_name: file_name.into(),
            iban,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serializes_with_output_column_names() {
        let record = ResultRecord::new("rib.pdf", Some("FR7630006000011234567890189".into()));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "FILE_NAME": "rib.pdf",
                "IBAN": "FR7630006000011234567890189",
            })
        );
    }

    #[test]
    fn test_absent_iban_serializes_as_null() {
        let record = ResultRecord::new("empty.pdf", None);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["IBAN"], serde_json::Value::Null);
    }
}
