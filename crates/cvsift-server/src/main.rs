//! CVSift — resume ingestion server with heuristic field extraction.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod batch;
mod export;
mod routes;
mod state;

use state::AppState;

fn resolve_data_dir() -> PathBuf {
    std::env::var("CVSIFT_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    // Handle CLI subcommands
    if args.len() > 1 {
        match args[1].as_str() {
            "--process" | "process" => {
                if args.len() < 3 {
                    eprintln!("Usage: cvsift process <resume-files...> [-o output.csv]");
                    std::process::exit(1);
                }
                let (files, output) = parse_process_args(&args[2..]);
                let report = batch::run_batch(&files, &output)?;
                batch::print_report(&report);
                std::process::exit(if report.processed > 0 { 0 } else { 1 });
            }
            "--help" | "-h" | "help" => {
                println!("CVSift — resume ingestion and field extraction");
                println!();
                println!("Usage: cvsift [command]");
                println!();
                println!("Commands:");
                println!("  (none)                            Start the server");
                println!("  process <files...> [-o out.csv]   Batch-process local files to CSV");
                println!("  help                              Show this help message");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'cvsift help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    // Normal server startup
    let data_dir = resolve_data_dir();
    info!("Data directory: {}", data_dir.display());

    let config = cvsift_core::CvSiftConfig::from_env(&data_dir)?;
    let port = config.port;

    let state = Arc::new(AppState::new(config));
    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("CVSift server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn parse_process_args(args: &[String]) -> (Vec<PathBuf>, PathBuf) {
    let mut files = Vec::new();
    let mut output = PathBuf::from("extracted_data.csv");

    let mut i = 0;
    while i < args.len() {
        if args[i] == "-o" && i + 1 < args.len() {
            output = PathBuf::from(&args[i + 1]);
            i += 2;
        } else {
            files.push(PathBuf::from(&args[i]));
            i += 1;
        }
    }

    (files, output)
}
