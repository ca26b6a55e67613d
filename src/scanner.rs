//! Property scanner
//!
//! Folds consecutive `[Index]` attribute lines into the auto-property that
//! follows them. Attributes accumulate onto a pending group until a property
//! line claims the whole group; properties without attributes are discarded
//! and every other line is ignored. Input that ends with attributes still
//! pending violates the scanning invariant and aborts the entire run.

use crate::model::{IndexAnnotation, Property};
use crate::patterns::{match_auto_property, match_index_annotation, AnnotationMatch};
use crate::source::SourceLines;
use std::fmt;
use std::io::{self, BufRead};

/// Errors that abort scanning.
#[derive(Debug)]
pub enum ScanError {
    /// An `[Index]` attribute was declared but never followed by a
    /// recognizable property before end of input. Unrecoverable: the
    /// whole run stops, not just the current file.
    DanglingAnnotation { index_name: String, line: usize },
    Io(io::Error),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::DanglingAnnotation { index_name, line } => write!(
                f,
                "[Index(\"{}\")] near line {} is not followed by a property",
                index_name, line
            ),
            ScanError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ScanError {}

impl From<io::Error> for ScanError {
    fn from(e: io::Error) -> Self {
        ScanError::Io(e)
    }
}

/// Scan forward to the next annotated auto-property.
///
/// Returns `Ok(None)` at normal end of input. Each pending attribute is
/// bound to the claiming property's name at construction time, so the
/// returned annotations are never half-linked.
pub fn next_property<R: BufRead>(
    source: &mut SourceLines<R>,
) -> Result<Option<Property>, ScanError> {
    let mut pending: Vec<AnnotationMatch> = Vec::new();

    while let Some(line) = source.next_line()? {
        if let Some(annotation) = match_index_annotation(&line) {
            // consecutive attribute lines stack onto the same property
            pending.push(annotation);
            continue;
        }
        if let Some(property) = match_auto_property(&line) {
            if pending.is_empty() {
                // property without [Index] attributes is irrelevant
                continue;
            }
            let annotations = pending
                .drain(..)
                .map(|m| IndexAnnotation {
                    index_name: m.index_name,
                    order: m.order,
                    property_name: property.name.clone(),
                })
                .collect();
            return Ok(Some(Property {
                name: property.name,
                annotations,
            }));
        }
        // anything else is noise between declarations
    }

    if let Some(first) = pending.first() {
        return Err(ScanError::DanglingAnnotation {
            index_name: first.index_name.clone(),
            line: source.line_number(),
        });
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn source(text: &str) -> SourceLines<Cursor<&str>> {
        SourceLines::new(Cursor::new(text))
    }

    #[test]
    fn attribute_then_property_yields_one_property() {
        let mut lines = source(
            "[Index(\"IX_Foo_Bar\")]\n\
             public int Bar { get; set; }\n",
        );
        let property = next_property(&mut lines).unwrap().unwrap();
        assert_eq!(property.name, "Bar");
        assert_eq!(property.annotations.len(), 1);
        assert_eq!(property.annotations[0].index_name, "IX_Foo_Bar");
        assert_eq!(property.annotations[0].property_name, "Bar");
        assert!(next_property(&mut lines).unwrap().is_none());
    }

    #[test]
    fn consecutive_attributes_stack_onto_one_property() {
        let mut lines = source(
            "[Index(\"IX_A\")]\n\
             [Index(\"IX_B\", Order = 1)]\n\
             public int Stamp { get; set; }\n",
        );
        let property = next_property(&mut lines).unwrap().unwrap();
        assert_eq!(property.annotations.len(), 2);
        assert_eq!(property.annotations[0].index_name, "IX_A");
        assert_eq!(property.annotations[1].index_name, "IX_B");
        assert_eq!(property.annotations[1].order, Some(1));
        // both bound to the same owner
        assert!(property
            .annotations
            .iter()
            .all(|a| a.property_name == "Stamp"));
    }

    #[test]
    fn unannotated_properties_are_discarded() {
        let mut lines = source(
            "public int Ignored { get; set; }\n\
             [Index(\"IX_A\")]\n\
             public int Kept { get; set; }\n\
             public int AlsoIgnored { get; set; }\n",
        );
        let property = next_property(&mut lines).unwrap().unwrap();
        assert_eq!(property.name, "Kept");
        assert!(next_property(&mut lines).unwrap().is_none());
    }

    #[test]
    fn unrecognized_lines_between_attribute_and_property_are_ignored() {
        let mut lines = source(
            "[Index(\"IX_A\")]\n\
             // a comment the patterns don't know\n\
             public int Bar { get; set; }\n",
        );
        let property = next_property(&mut lines).unwrap().unwrap();
        assert_eq!(property.name, "Bar");
    }

    #[test]
    fn exhausted_input_without_pending_attributes_is_not_found() {
        let mut lines = source("// nothing to see\n");
        assert!(next_property(&mut lines).unwrap().is_none());
    }

    #[test]
    fn dangling_attribute_is_a_fatal_error_not_a_skip() {
        let mut lines = source("[Index(\"IX_Orphan\")]\n");
        match next_property(&mut lines) {
            Err(ScanError::DanglingAnnotation { index_name, line }) => {
                assert_eq!(index_name, "IX_Orphan");
                assert_eq!(line, 1);
            }
            other => panic!("expected DanglingAnnotation, got {:?}", other),
        }
    }
}
