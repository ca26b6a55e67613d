//! Command-line interface for amele
//! This binary scans entity source files for EF6 [Index] attributes and emits
//! the equivalent EF Core fluent model-building code.
//!
//! Usage:
//!   amele `<input>` [--output `<file>`] [--format `<format>`]
//!
//! `<input>` is a folder (every .cs file directly inside it) or a single
//! source file. Without --output the generated code goes to stdout; progress
//! and diagnostics always go to stderr.

use amele::emit::{emit, OutputFormat};
use amele::run::collect_entities;
use clap::{Arg, Command};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

fn main() {
    let matches = Command::new("amele")
        .version(env!("CARGO_PKG_VERSION"))
        .about("EF6 to EF Core Index attribute converter")
        .arg(
            Arg::new("input")
                .help("A folder where entity source code resides, or a single source file")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("File to create with the generated code (default: stdout)"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: 'fluent' or 'json'")
                .default_value("fluent"),
        )
        .get_matches();

    eprintln!(
        "amele v{} - EF6 to EF Core Index attribute converter",
        env!("CARGO_PKG_VERSION")
    );

    // missing input is a usage error with exit code 1, so it is checked
    // here rather than left to clap
    let Some(input) = matches.get_one::<String>("input") else {
        eprintln!("input isn't specified. Use --help for command-line help");
        std::process::exit(1);
    };
    let format_name = matches
        .get_one::<String>("format")
        .expect("format has a default");
    let format = OutputFormat::from_name(format_name).unwrap_or_else(|| {
        eprintln!(
            "Unknown format '{}'. Available formats: {}",
            format_name,
            OutputFormat::names().join(", ")
        );
        std::process::exit(1);
    });

    let mut log = io::stderr();
    let entities = collect_entities(Path::new(input), &mut log).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    // the sink is opened only after collection succeeded, so a failed run
    // never leaves an output file behind
    match matches.get_one::<String>("output") {
        Some(path) => {
            eprint!("Writing model builder code to {}...", path);
            let mut file = File::create(path).unwrap_or_else(|e| {
                eprintln!("\nError creating {}: {}", path, e);
                std::process::exit(1);
            });
            write_output(&entities, format, &mut file);
            eprintln!("DONE");
        }
        None => {
            let mut stdout = io::stdout();
            write_output(&entities, format, &mut stdout);
        }
    }
    eprintln!("Operation complete.");
}

fn write_output<W: Write>(entities: &[amele::model::Entity], format: OutputFormat, sink: &mut W) {
    if let Err(e) = emit(entities, format, sink) {
        eprintln!("Error writing output: {}", e);
        std::process::exit(1);
    }
}
