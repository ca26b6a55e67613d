//! # amele
//!
//! Converts EF6 attribute-based index declarations into EF Core fluent
//! model-building code.
//!
//! The scanner is deliberately not a C# parser: it reads each source file as
//! a forward-only stream of trimmed lines and recognizes exactly three line
//! shapes with anchored regular expressions (class declarations, `[Index]`
//! attributes, single-line auto-properties). Consecutive attribute lines are
//! folded onto the property that follows them, then all attributes of one
//! class are regrouped by index name into multi-column indexes.
//!
//! Pipeline:
//!
//! ```text
//! files -> SourceLines -> PropertyScanner -> extract_entity -> emit
//! ```
//!
//! Multi-line attributes or properties, nested classes, and anything else
//! the three patterns don't anticipate are ignored or skipped; see the
//! `patterns` module for the exact shapes.

pub mod emit;
pub mod extractor;
pub mod model;
pub mod patterns;
pub mod run;
pub mod scanner;
pub mod source;
