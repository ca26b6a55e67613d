//! Batch orchestration
//!
//! Enumerates the input files and collects one entity per file, strictly
//! sequentially. Per-file problems are logged to the injected log sink and
//! skipped; a dangling attribute aborts the run. Emission happens after
//! collection so a failed run never creates an output file.

use crate::extractor::{extract_entity, Extraction};
use crate::model::Entity;
use crate::scanner::ScanError;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// File extension picked up when the input path is a directory.
pub const SOURCE_EXTENSION: &str = "cs";

/// Errors that end the run with a diagnostic.
#[derive(Debug)]
pub enum RunError {
    /// The input directory contains no matching source files.
    NoFilesFound(PathBuf),
    /// Every file was processed but none contributed an entity.
    NoEntities,
    Scan(ScanError),
    Io(io::Error),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::NoFilesFound(dir) => {
                write!(f, "No files found in {}", dir.display())
            }
            RunError::NoEntities => write!(f, "No entities found - aborting"),
            RunError::Scan(e) => write!(f, "{}", e),
            RunError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for RunError {}

impl From<ScanError> for RunError {
    fn from(e: ScanError) -> Self {
        RunError::Scan(e)
    }
}

impl From<io::Error> for RunError {
    fn from(e: io::Error) -> Self {
        RunError::Io(e)
    }
}

/// Process every input file in order and collect the extracted entities.
///
/// Progress and skip reasons go to `log`; the caller owns the output sink
/// and renders the returned entities itself. Zero collected entities is an
/// error so the exit policy stays at the top level.
pub fn collect_entities<L: Write>(input: &Path, log: &mut L) -> Result<Vec<Entity>, RunError> {
    let files = input_files(input)?;

    let mut entities = Vec::new();
    for path in &files {
        let display_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        write!(log, "Processing {}...", display_name)?;
        match extract_entity(path)? {
            Extraction::Entity(entity) => {
                writeln!(log, "{}...DONE", entity.name)?;
                entities.push(entity);
            }
            Extraction::Skipped(skip) => {
                writeln!(log, "{} - skipping", skip)?;
            }
        }
    }

    if entities.is_empty() {
        return Err(RunError::NoEntities);
    }
    writeln!(log, "{} entities collected", entities.len())?;
    Ok(entities)
}

/// The files the input path designates: the file itself, or every
/// `*.cs` directly inside the directory (non-recursive), in sorted order.
fn input_files(input: &Path) -> Result<Vec<PathBuf>, RunError> {
    if !input.is_dir() {
        return Ok(vec![input.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(input)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION) {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(RunError::NoFilesFound(input.to_path_buf()));
    }
    Ok(files)
}
