//! Shared application state.

use parking_lot::RwLock;

use cvsift_core::{BatchError, CvSiftConfig, ExtractedRecord};
use cvsift_ingest::Processor;

/// Shared application state accessible from all route handlers.
///
/// Records accumulate across uploads in insertion order; there is no
/// persistence beyond the server process.
pub struct AppState {
    pub config: CvSiftConfig,
    pub processor: Processor,
    pub records: RwLock<Vec<ExtractedRecord>>,
    pub errors: RwLock<Vec<BatchError>>,
}

impl AppState {
    pub fn new(config: CvSiftConfig) -> Self {
        Self {
            config,
            processor: Processor::new(),
            records: RwLock::new(Vec::new()),
            errors: RwLock::new(Vec::new()),
        }
    }
}
