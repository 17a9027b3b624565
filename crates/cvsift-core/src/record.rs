//! Shared data model: language codes and per-document extraction records.

use serde::{Deserialize, Serialize};

/// Languages the extraction heuristics understand. Anything else is
/// `Unknown` and gets sentinel treatment downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    En,
    Es,
    Fr,
    Nl,
    Unknown,
}

impl LanguageCode {
    /// ISO-639-1 code, or `"unknown"`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::Nl => "nl",
            Self::Unknown => "unknown",
        }
    }

    /// Human-readable name shown in the results table.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Spanish",
            Self::Fr => "French",
            Self::Nl => "Dutch",
            Self::Unknown => "Unknown",
        }
    }

}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// One row of extraction output. Created once per successfully processed
/// document, immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedRecord {
    pub name: String,
    pub age: String,
    pub education: String,
    /// Display name of the detected language (e.g., "English").
    pub language: String,
    /// Source file name. Kept on the record but excluded from the
    /// displayed table and the CSV export.
    pub file_name: String,
    /// RFC3339 timestamp of when the document was processed.
    pub processed_at: String,
}

/// A per-file processing failure. Failed documents produce one of these
/// instead of a record; the batch continues.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchError {
    pub file_name: String,
    pub error: String,
}
