//! Command-line front end.

use crate::batch::{BatchRenamer, ProcessResult};
use crate::config::RenamerConfig;
use crate::keywords::KeywordSet;
use crate::oplog::OperationLog;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "content_renamer")]
#[command(version)]
#[command(about = "Rename documents after the title found in their content", long_about = None)]
struct Cli {
    #[command(flatten)]
    options: RunOptions,

    #[command(subcommand)]
    command: Commands,
}

/// Overrides for the environment/default configuration
#[derive(Args)]
struct RunOptions {
    /// Keyword file whose entries boost a block
    #[arg(long, global = true, value_name = "FILE")]
    match_file: Option<PathBuf>,

    /// Keyword file whose entries penalise a block
    #[arg(long, global = true, value_name = "FILE")]
    ignore_file: Option<PathBuf>,

    /// Maximum characters before the marker
    #[arg(long, global = true, allow_negative_numbers = true)]
    length_limit: Option<i64>,

    /// Maximum number of blocks read per document
    #[arg(long, global = true, allow_negative_numbers = true)]
    line_limit: Option<i64>,

    /// Operation log written when renaming
    #[arg(long, global = true, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the name proposed for one document
    Title {
        /// Document or JSON block export
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print scored blocks and name as JSON
        #[arg(long)]
        json: bool,
    },

    /// Propose (or apply) new names for every document in a directory
    Rename {
        #[arg(value_name = "DIR")]
        directory: PathBuf,

        /// Rename the files in place instead of printing a plan
        #[arg(long)]
        apply: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
}

impl RunOptions {
    fn resolve(&self) -> Result<RenamerConfig> {
        let mut config = RenamerConfig::from_env()?;

        if let Some(path) = &self.match_file {
            config.match_file = path.clone();
        }
        if let Some(path) = &self.ignore_file {
            config.ignore_file = path.clone();
        }
        if let Some(value) = self.length_limit {
            config.set_length_limit(value)?;
        }
        if let Some(value) = self.line_limit {
            config.set_line_limit(value)?;
        }
        if let Some(path) = &self.log_file {
            config.log_file = path.clone();
        }

        Ok(config)
    }
}

/// Parse arguments and run the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.options.resolve()?;

    let match_keywords = load_keywords(&config.match_file, "match")?;
    let ignore_keywords = load_keywords(&config.ignore_file, "ignore")?;
    tracing::debug!(
        matches = match_keywords.len(),
        ignores = ignore_keywords.len(),
        "keywords loaded"
    );

    let renamer = BatchRenamer::new(&config, match_keywords, ignore_keywords)?;

    match cli.command {
        Commands::Title { file, json } => {
            let candidate = renamer
                .propose(&file)
                .with_context(|| format!("no name for {}", file.display()))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&candidate)?);
            } else {
                println!("{}", candidate.name);
            }
        }
        Commands::Rename {
            directory,
            apply,
            json,
        } => {
            let mut renamer = renamer.with_apply(apply);
            if apply {
                renamer = renamer.with_log(OperationLog::new(&config.log_file));
            }
            let results = renamer
                .run(&directory)
                .with_context(|| format!("failed to process {}", directory.display()))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print_results(&results, apply);
            }
        }
    }

    Ok(())
}

fn load_keywords(path: &Path, kind: &str) -> Result<KeywordSet> {
    KeywordSet::load(path)
        .with_context(|| format!("failed to load {} keywords from {}", kind, path.display()))
}

fn print_results(results: &[ProcessResult], applied: bool) {
    for result in results {
        match (&result.new_name, &result.error) {
            (Some(new_name), _) => {
                println!("{} {} -> {}", "✓".green(), result.original.dimmed(), new_name);
            }
            (None, Some(error)) if result.skipped => {
                println!("{} {}: {}", "-".yellow(), result.original, error.yellow());
            }
            (None, error) => {
                let error = error.as_deref().unwrap_or("unknown error");
                println!("{} {}: {}", "✗".red(), result.original, error.red());
            }
        }
    }

    let renamed = results.iter().filter(|r| r.success).count();
    let skipped = results.iter().filter(|r| r.skipped).count();
    let failed = results.len() - renamed - skipped;

    println!();
    println!(
        "{} renamed, {} skipped, {} failed",
        renamed.to_string().green(),
        skipped.to_string().yellow(),
        failed.to_string().red()
    );
    if !applied && renamed > 0 {
        println!("{}", "Dry run: pass --apply to rename the files.".dimmed());
    }
}
