//! Content renamer - entry point

use anyhow::Result;

fn main() -> Result<()> {
    // Logging to stderr keeps stdout clean for JSON output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    // Environment variables
    dotenvy::dotenv().ok();

    content_renamer::cli::run()
}
