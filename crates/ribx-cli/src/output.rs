//! Output writers for the batch result table.

use std::path::Path;

use ribx_core::ResultRecord;

/// Output format for the result table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Two-column CSV (default)
    Csv,
    /// Excel workbook
    #[value(alias = "xls", alias = "excel")]
    Xlsx,
    /// Pretty-printed, index-keyed JSON
    Json,
}

impl OutputFormat {
    /// File extension for the default output path.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Xlsx => "xlsx",
            OutputFormat::Json => "json",
        }
    }
}

/// Serialize the ordered record sequence to `path`.
pub fn write(records: &[ResultRecord], format: OutputFormat, path: &Path) -> anyhow::Result<()> {
    match format {
        OutputFormat::Csv => write_csv(records, path),
        OutputFormat::Xlsx => write_xlsx(records, path),
        OutputFormat::Json => write_json(records, path),
    }
}

fn write_csv(records: &[ResultRecord], path: &Path) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["FILE_NAME", "IBAN"])?;
    for record in records {
        wtr.write_record([
            record.file_name.as_str(),
            record.iban.as_deref().unwrap_or(""),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

fn write_xlsx(records: &[ResultRecord], path: &Path) -> anyhow::Result<()> {
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();

    sheet.write_string(0, 0, "FILE_NAME")?;
    sheet.write_string(0, 1, "IBAN")?;

    for (index, record) in records.iter().enumerate() {
        let row = (index + 1) as u32;
        sheet.write_string(row, 0, record.file_name.as_str())?;
        if let Some(iban) = &record.iban {
            sheet.write_string(row, 1, iban.as_str())?;
        }
    }

    workbook.save(path)?;
    Ok(())
}

fn write_json(records: &[ResultRecord], path: &Path) -> anyhow::Result<()> {
    // Index-keyed object: {"0": {"FILE_NAME": ..., "IBAN": ...}, ...}
    let mut table = serde_json::Map::new();
    for (index, record) in records.iter().enumerate() {
        table.insert(index.to_string(), serde_json::to_value(record)?);
    }

    let json = serde_json::to_string_pretty(&serde_json::Value::Object(table))?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<ResultRecord> {
        vec![
            ResultRecord::new("a.pdf", Some("FR7630006000011234567890189".to_string())),
            ResultRecord::new("b.pdf", None),
        ]
    }

    #[test]
    fn test_csv_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        write(&sample_records(), OutputFormat::Csv, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("FILE_NAME,IBAN"));
        assert_eq!(lines.next(), Some("a.pdf,FR7630006000011234567890189"));
        assert_eq!(lines.next(), Some("b.pdf,"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_json_output_is_index_keyed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        write(&sample_records(), OutputFormat::Json, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["0"]["FILE_NAME"], "a.pdf");
        assert_eq!(value["0"]["IBAN"], "FR7630006000011234567890189");
        assert_eq!(value["1"]["FILE_NAME"], "b.pdf");
        assert_eq!(value["1"]["IBAN"], serde_json::Value::Null);
        // Pretty-printed, not a single line.
        assert!(content.lines().count() > 1);
    }

    #[test]
    fn test_xlsx_output_writes_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");

        write(&sample_records(), OutputFormat::Xlsx, &path).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_extension_matches_format() {
        assert_eq!(OutputFormat::Csv.extension(), "csv");
        assert_eq!(OutputFormat::Xlsx.extension(), "xlsx");
        assert_eq!(OutputFormat::Json.extension(), "json");
    }
}
