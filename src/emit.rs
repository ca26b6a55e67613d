//! Output rendering
//!
//! Renders the collected entities into an injected sink. Two formats: the
//! default fluent model-building code (fixed header/footer around one
//! statement per entity/index pair) and a JSON dump of the extracted model
//! for inspection. Names pass through verbatim; no identifier validation.

use crate::model::Entity;
use std::io::{self, Write};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// EF Core fluent model-building statements wrapped in boilerplate.
    Fluent,
    /// The extracted entities as pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Look up a format by its command-line name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "fluent" => Some(OutputFormat::Fluent),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    /// Names accepted by [`OutputFormat::from_name`], for usage messages.
    pub fn names() -> &'static [&'static str] {
        &["fluent", "json"]
    }
}

/// Render `entities` in `format` into `sink`.
pub fn emit<W: Write>(entities: &[Entity], format: OutputFormat, sink: &mut W) -> io::Result<()> {
    match format {
        OutputFormat::Fluent => emit_fluent(entities, sink),
        OutputFormat::Json => emit_json(entities, sink),
    }
}

/// Write the fluent model-building statements with fixed header/footer.
///
/// Entities keep collection order and each entity's indexes keep their
/// encounter order, one blank line before every statement block.
pub fn emit_fluent<W: Write>(entities: &[Entity], sink: &mut W) -> io::Result<()> {
    writeln!(sink, "// <auto-generated>")?;
    writeln!(
        sink,
        "// Do not use this file directly but merge the code into your own modelbuilding code"
    )?;
    writeln!(sink)?;
    writeln!(sink, "public class HedeContext: DbContext")?;
    writeln!(sink, "{{")?;
    writeln!(sink, "    public void OnModelBuilding(ModelBuilder builder)")?;
    writeln!(sink, "    {{")?;

    for entity in entities {
        for index in &entity.indexes {
            writeln!(sink)?;
            writeln!(sink, "        builder.Entity<{}>()", entity.name)?;
            writeln!(
                sink,
                "            .HasIndex(e => {})",
                field_expression(&index.field_names)
            )?;
            writeln!(sink, "            .HasName(\"{}\");", index.name)?;
        }
    }

    writeln!(sink, "    }}")?;
    writeln!(sink, "}}")?;
    Ok(())
}

fn emit_json<W: Write>(entities: &[Entity], sink: &mut W) -> io::Result<()> {
    let rendered = serde_json::to_string_pretty(entities)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    writeln!(sink, "{}", rendered)
}

/// `e.Field` for a single column, `new { e.F1, e.F2 }` for a composite.
fn field_expression(field_names: &[String]) -> String {
    match field_names {
        [single] => format!("e.{}", single),
        many => {
            let accessors: Vec<String> = many.iter().map(|f| format!("e.{}", f)).collect();
            format!("new {{ {} }}", accessors.join(", "))
        }
    }
}
