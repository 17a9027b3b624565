//! Offline batch mode — process local resume files and write a CSV.

use std::path::{Path, PathBuf};

use cvsift_ingest::{Processor, SourceDocument};

use crate::export;

pub struct BatchReport {
    pub processed: usize,
    pub failed: usize,
    pub output: PathBuf,
    pub errors: Vec<String>,
}

/// Process files in the given order and write the CSV to `output`.
pub fn run_batch(files: &[PathBuf], output: &Path) -> std::io::Result<BatchReport> {
    let mut documents = Vec::new();
    let mut errors = Vec::new();

    for path in files {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();
        match std::fs::read(path) {
            Ok(bytes) => documents.push(SourceDocument { file_name, bytes }),
            Err(e) => errors.push(format!("{}: {}", path.display(), e)),
        }
    }

    let outcome = Processor::new().process_batch(&documents);
    for err in &outcome.errors {
        errors.push(format!("{}: {}", err.file_name, err.error));
    }

    let csv = export::records_to_csv(&outcome.records)
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    std::fs::write(output, csv)?;

    Ok(BatchReport {
        processed: outcome.records.len(),
        failed: errors.len(),
        output: output.to_path_buf(),
        errors,
    })
}

pub fn print_report(report: &BatchReport) {
    println!("=== CVSift Batch Report ===");
    println!();
    println!("Processed:          {}", report.processed);
    println!("Failed:             {}", report.failed);
    println!("Output:             {}", report.output.display());

    if !report.errors.is_empty() {
        println!();
        println!("Errors:");
        for e in &report.errors {
            println!("  - {}", e);
        }
    }
}
