//! CVSift Core — shared data model, configuration, error types.

pub mod config;
pub mod error;
pub mod record;

pub use config::{CvSiftConfig, DataPaths};
pub use error::{Error, Result};
pub use record::{BatchError, ExtractedRecord, LanguageCode};
