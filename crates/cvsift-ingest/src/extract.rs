//! Heuristic field extraction — regex chains and entity heuristics that
//! pull a name, age, and education summary out of raw resume text.
//!
//! Extraction never fails: every rule chain degrades to a fixed sentinel
//! string when nothing matches.

pub mod age;
pub mod education;
pub mod name;

use serde::{Deserialize, Serialize};

use cvsift_core::LanguageCode;

/// Combined extraction result for one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub name: String,
    pub age: String,
    pub education: String,
}

/// Run all field extractions on a text.
pub fn extract_fields(text: &str, language: LanguageCode) -> ExtractedFields {
    ExtractedFields {
        name: name::extract_name(text, language),
        age: age::extract_age(text),
        education: education::extract_education(text, language),
    }
}
