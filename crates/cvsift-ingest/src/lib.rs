//! CVSift Ingest — text extraction, language detection, field extraction,
//! per-document processing pipeline.

pub mod extract;
pub mod file;
pub mod language;
pub mod process;

pub use extract::{extract_fields, ExtractedFields};
pub use file::FileType;
pub use language::detect_language;
pub use process::{BatchOutcome, Processor, SourceDocument};
