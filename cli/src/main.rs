//! docx2txt CLI - batch Word document text extraction.
//!
//! Converts every `.docx` file in a source directory into a `.txt` file in a
//! destination directory, reporting per-file success or failure.

use clap::Parser;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

/// Batch-convert Word documents to plain-text files
#[derive(Parser)]
#[command(
    name = "docx2txt",
    version,
    about = "Extract plain text from a directory of Word documents",
    long_about = "docx2txt - batch Word document text extraction.\n\n\
                  Converts every .docx file directly under SOURCE_DIR into a \
                  .txt file under DEST_DIR (created if absent), one output per \
                  input, paragraphs joined with newlines. A file that fails to \
                  convert is reported and the rest of the batch continues."
)]
struct Cli {
    /// Directory to scan for .docx files (non-recursive)
    source_dir: PathBuf,

    /// Directory to write .txt files into (created if absent)
    dest_dir: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> docx2txt::Result<()> {
    std::fs::create_dir_all(&cli.dest_dir)?;
    let inputs = docx2txt::batch::discover_inputs(&cli.source_dir)?;

    if inputs.is_empty() {
        println!(
            "{} No .docx files found in {}",
            "!".yellow().bold(),
            cli.source_dir.display()
        );
        return Ok(());
    }

    let pb = create_progress_bar(inputs.len() as u64);

    let mut converted = 0usize;
    let mut failed = 0usize;
    for file_name in &inputs {
        pb.println(format!("Extracting {}...", file_name.bold()));

        match docx2txt::batch::convert_file(&cli.source_dir, &cli.dest_dir, file_name) {
            Ok(out_path) => {
                let saved = out_path
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .into_owned();
                pb.println(format!("{} Saved to {}", "✓".green().bold(), saved));
                converted += 1;
            }
            Err(e) => {
                pb.println(format!(
                    "{} Error reading {}: {}",
                    "✗".red().bold(),
                    file_name,
                    e
                ));
                failed += 1;
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    println!(
        "{} {} converted, {} failed, output in {}",
        "✓".green().bold(),
        converted,
        failed,
        cli.dest_dir.display()
    );

    Ok(())
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:30.blue} {pos}/{len} {msg}")
            .unwrap(),
    );
    pb
}
