//! Per-file entity extraction
//!
//! Orchestrates one file: find the class name, drain annotated properties,
//! regroup their attributes into indexes. Each file yields either an entity
//! or a skip reason; skips are recoverable and the batch moves on, while
//! `ScanError` propagates up so the single top-level handler decides the
//! run's fate (scanning code never terminates the process).

use crate::model::{group_indexes, Entity};
use crate::patterns::match_class_declaration;
use crate::scanner::{next_property, ScanError};
use crate::source::SourceLines;
use std::fmt;
use std::io::{self, BufRead};
use std::path::Path;

/// Result of scanning one file.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Entity(Entity),
    Skipped(Skip),
}

/// Why a file contributed no entity. Recoverable; the run continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    NoClass,
    NoAnnotatedProperties,
    NoIndexes,
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skip::NoClass => write!(f, "class name couldn't be found"),
            Skip::NoAnnotatedProperties => {
                write!(f, "no properties with [Index] attributes found")
            }
            Skip::NoIndexes => write!(f, "no indexes found"),
        }
    }
}

/// Extract zero or one entity from the file at `path`.
///
/// The line source is scoped to this call and released on every exit path.
pub fn extract_entity(path: &Path) -> Result<Extraction, ScanError> {
    let mut source = SourceLines::open(path)?;
    extract_from_source(&mut source)
}

/// The testable core of [`extract_entity`], over any line source.
pub fn extract_from_source<R: BufRead>(
    source: &mut SourceLines<R>,
) -> Result<Extraction, ScanError> {
    let Some(class_name) = find_class_name(source)? else {
        return Ok(Extraction::Skipped(Skip::NoClass));
    };

    let mut properties = Vec::new();
    while let Some(property) = next_property(source)? {
        properties.push(property);
    }
    if properties.is_empty() {
        return Ok(Extraction::Skipped(Skip::NoAnnotatedProperties));
    }

    let indexes = group_indexes(&properties);
    if indexes.is_empty() {
        return Ok(Extraction::Skipped(Skip::NoIndexes));
    }
    Ok(Extraction::Entity(Entity::new(class_name, indexes)))
}

/// Scan forward to the first class declaration; later ones are never seen
/// because the property scanner only recognizes its own two line shapes.
fn find_class_name<R: BufRead>(source: &mut SourceLines<R>) -> io::Result<Option<String>> {
    while let Some(line) = source.next_line()? {
        if let Some(name) = match_class_declaration(&line) {
            return Ok(Some(name));
        }
    }
    Ok(None)
}
