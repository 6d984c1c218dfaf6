//! Command-line interface for the scraper.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::validate_publication_number;
use crate::document::download_document;
use crate::error::{Result, ScraperError};

/// Patent Scraper - Fetch structured patent records from Google Patents.
#[derive(Parser)]
#[command(name = "patent-scraper")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a patent by publication number and output the record as JSON.
    Fetch {
        /// Publication number (e.g., US9145048B2)
        number: String,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch {
            number,
            output,
            compact,
        } => fetch_command(&number, output.as_deref(), compact),
    }
}

/// Execute the fetch command.
fn fetch_command(number: &str, output: Option<&std::path::Path>, compact: bool) -> Result<()> {
    // Validate input before making HTTP requests
    validate_publication_number(number)?;

    // Validate the output directory exists before downloading
    if let Some(path) = output {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(ScraperError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("Output directory does not exist: {}", parent.display()),
                )));
            }
        }
    }

    eprintln!(
        "{} {}",
        style("Fetching").bold(),
        style(number).cyan()
    );

    // Create progress spinner
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Downloading document page...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let document = match download_document(number) {
        Ok(document) => document,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    eprintln!(
        "  Title: {}",
        style(document.title.as_deref().unwrap_or("(none)")).green()
    );
    eprintln!("  Inventors: {}", document.inventors.len());
    eprintln!("  Claims: {}", document.claims.len());
    eprintln!(
        "  Citations: {} backward, {} forward",
        document.backward_citations.len(),
        document.forward_citations.len()
    );

    let json = if compact {
        serde_json::to_string(&document)?
    } else {
        serde_json::to_string_pretty(&document)?
    };

    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            eprintln!();
            eprintln!("{} {}", style("Saved to:").green().bold(), path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
