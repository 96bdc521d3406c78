//! Batch conversion of a directory of Word documents to plain-text files.
//!
//! One output file per qualifying input, best-effort: a file that fails to
//! convert is reported and the batch moves on to the next one. Only setup
//! failures (destination directory cannot be created, source directory
//! cannot be read) abort the run.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Suffix a qualifying input file name must end with (case-sensitive).
pub const DOCX_SUFFIX: &str = ".docx";

/// Extension of the written output files.
pub const TEXT_EXTENSION: &str = "txt";

/// Outcome of one file's conversion attempt.
///
/// The result carries the output path on success and the error detail on
/// failure; a failure never implies anything about the other files.
#[derive(Debug)]
pub struct FileReport {
    /// Input file name (no directory component).
    pub file_name: String,
    /// Output path on success, error on failure.
    pub result: std::result::Result<PathBuf, Error>,
}

impl FileReport {
    /// True if this file converted successfully.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Compute the output file name for an input file name.
///
/// The `.docx` suffix is replaced with `.txt`; a name without the suffix
/// gets `.txt` appended (discovery never produces one, but the function is
/// total).
pub fn output_name(input_name: &str) -> String {
    match input_name.strip_suffix(DOCX_SUFFIX) {
        Some(stem) => format!("{}.{}", stem, TEXT_EXTENSION),
        None => format!("{}.{}", input_name, TEXT_EXTENSION),
    }
}

/// List qualifying file names directly under `source_dir`.
///
/// Non-recursive, case-sensitive `.docx` suffix match, sorted for
/// deterministic processing order. An empty result is valid.
pub fn discover_inputs(source_dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(source_dir)? {
        let entry = entry?;
        // Non-Unicode names can't carry the suffix; skip them
        if let Some(name) = entry.file_name().to_str() {
            if name.ends_with(DOCX_SUFFIX) {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}

/// Convert a single named file from `source_dir` into `dest_dir`.
///
/// Writes the newline-joined paragraph text, UTF-8 encoded, to
/// `<dest_dir>/<stem>.txt`, overwriting any existing file at that path.
/// Returns the output path.
pub fn convert_file(source_dir: &Path, dest_dir: &Path, file_name: &str) -> Result<PathBuf> {
    let mut parser = crate::docx::DocxParser::open(source_dir.join(file_name))?;
    let doc = parser.parse()?;

    let out_path = dest_dir.join(output_name(file_name));
    fs::write(&out_path, doc.plain_text())?;
    Ok(out_path)
}

/// Convert every qualifying file under `source_dir` into `dest_dir`.
///
/// Creates `dest_dir` (and parents) if absent; an existing directory is not
/// an error. Each discovered file is attempted exactly once, in sorted name
/// order, and its outcome recorded; per-file failures do not stop the batch.
///
/// # Example
///
/// ```no_run
/// use docx2txt::batch::convert_dir;
///
/// let reports = convert_dir("docs".as_ref(), "extracted".as_ref())?;
/// for report in &reports {
///     match &report.result {
///         Ok(path) => println!("{} -> {}", report.file_name, path.display()),
///         Err(e) => eprintln!("{}: {}", report.file_name, e),
///     }
/// }
/// # Ok::<(), docx2txt::Error>(())
/// ```
pub fn convert_dir(source_dir: &Path, dest_dir: &Path) -> Result<Vec<FileReport>> {
    fs::create_dir_all(dest_dir)?;

    let inputs = discover_inputs(source_dir)?;
    let mut reports = Vec::with_capacity(inputs.len());
    for file_name in inputs {
        let result = convert_file(source_dir, dest_dir, &file_name);
        reports.push(FileReport { file_name, result });
    }
    Ok(reports)
}
