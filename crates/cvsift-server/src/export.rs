//! CSV serialization of extraction batches.

use cvsift_core::{Error, ExtractedRecord, Result};

/// CSV column order for exports. `file_name` stays internal.
pub const CSV_HEADER: [&str; 4] = ["name", "age", "education", "language"];

/// Serialize records to UTF-8 CSV bytes with a header row, rows in
/// insertion order.
pub fn records_to_csv(records: &[ExtractedRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(CSV_HEADER)
        .map_err(|e| Error::Csv(e.to_string()))?;

    for record in records {
        writer
            .write_record([
                record.name.as_str(),
                record.age.as_str(),
                record.education.as_str(),
                record.language.as_str(),
            ])
            .map_err(|e| Error::Csv(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| Error::Csv(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, age: &str) -> ExtractedRecord {
        ExtractedRecord {
            name: name.to_string(),
            age: age.to_string(),
            education: "Bachelor".to_string(),
            language: "English".to_string(),
            file_name: "cv.pdf".to_string(),
            processed_at: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_header_and_row_order() {
        let records = vec![record("John Smith", "29"), record("Jane Doe", "34")];
        let csv = String::from_utf8(records_to_csv(&records).unwrap()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "name,age,education,language");
        assert!(lines[1].starts_with("John Smith,29"));
        assert!(lines[2].starts_with("Jane Doe,34"));
        // file_name never leaks into the export
        assert!(!csv.contains("cv.pdf"));
    }

    #[test]
    fn test_empty_batch_is_header_only() {
        let csv = String::from_utf8(records_to_csv(&[]).unwrap()).unwrap();
        assert_eq!(csv.trim_end(), "name,age,education,language");
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let mut r = record("John Smith", "29");
        r.education = "Bachelor, State University".to_string();
        let csv = String::from_utf8(records_to_csv(&[r]).unwrap()).unwrap();
        assert!(csv.contains("\"Bachelor, State University\""));
    }
}
