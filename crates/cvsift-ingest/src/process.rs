//! Per-document processing pipeline: bytes → text → language → fields.

use tracing::{debug, info, warn};

use crate::{extract, file, language};
use cvsift_core::{BatchError, Error, ExtractedRecord, Result};

/// One uploaded document awaiting processing.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Result of a batch run: records for processed documents, errors for the
/// rest. Both preserve input order.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub records: Vec<ExtractedRecord>,
    pub errors: Vec<BatchError>,
}

/// Runs the extract → detect → extract-fields pipeline over documents,
/// one at a time.
#[derive(Debug, Default, Clone, Copy)]
pub struct Processor;

impl Processor {
    pub fn new() -> Self {
        Self
    }

    /// Process a single document into a record.
    ///
    /// Text extraction failures propagate; language detection and field
    /// extraction degrade to sentinels instead of failing.
    pub fn process(&self, file_name: &str, bytes: &[u8]) -> Result<ExtractedRecord> {
        let ext = file_name
            .rsplit('.')
            .next()
            .filter(|e| *e != file_name)
            .ok_or_else(|| Error::UnsupportedFormat(file_name.to_string()))?;

        let text = file::extract_text(bytes, ext)?;
        debug!("Extracted {} chars from {}", text.len(), file_name);

        let lang = language::detect_language(&text);
        let fields = extract::extract_fields(&text, lang);

        Ok(ExtractedRecord {
            name: fields.name,
            age: fields.age,
            education: fields.education,
            language: lang.display_name().to_string(),
            file_name: file_name.to_string(),
            processed_at: chrono::Utc::now().to_rfc3339(),
        })
    }

    /// Process an ordered batch sequentially. Each document is fully
    /// processed before the next begins; a failure is recorded per file
    /// and never aborts the rest.
    pub fn process_batch(&self, documents: &[SourceDocument]) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();

        for doc in documents {
            match self.process(&doc.file_name, &doc.bytes) {
                Ok(record) => outcome.records.push(record),
                Err(e) => {
                    warn!("Error processing {}: {}", doc.file_name, e);
                    outcome.errors.push(BatchError {
                        file_name: doc.file_name.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        info!(
            "Batch complete: {} processed, {} failed",
            outcome.records.len(),
            outcome.errors.len()
        );
        outcome
    }
}
