//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Schema file, or `-` for stdin (positional).
pub fn schema_path_arg() -> Arg {
    Arg::new("schema_path")
        .value_name("SCHEMA")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Schema file (JSON), or '-' to read stdin")
}

/// Type names to generate (positional, repeatable).
pub fn types_arg() -> Arg {
    Arg::new("types")
        .value_name("TYPES")
        .num_args(0..)
        .help("Types to generate; none or '*' selects every tagged struct")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Output file (default: bencode_gen.rs next to the schema)")
}

/// Overwrite files that were not generated (-f/--force).
pub fn force_arg() -> Arg {
    Arg::new("force")
        .short('f')
        .long("force")
        .action(ArgAction::SetTrue)
        .help("Overwrite the output file even if it was not generated")
}

/// Don't write anything (-n/--dry-run).
pub fn dry_run_arg() -> Arg {
    Arg::new("dry_run")
        .short('n')
        .long("dry-run")
        .action(ArgAction::SetTrue)
        .help("Don't write any files")
}

/// Skip rustfmt (--no-format).
pub fn no_format_arg() -> Arg {
    Arg::new("no_format")
        .long("no-format")
        .action(ArgAction::SetTrue)
        .help("Don't run rustfmt on the generated file")
}

/// Module path of the runtime helpers (--runtime-crate).
pub fn runtime_crate_arg() -> Arg {
    Arg::new("runtime_crate")
        .long("runtime-crate")
        .value_name("PATH")
        .help("Module path providing Bencode and the write helpers")
}

/// Show plans before constant folding (--unfolded).
pub fn unfolded_arg() -> Arg {
    Arg::new("unfolded")
        .long("unfolded")
        .action(ArgAction::SetTrue)
        .help("Show plans before adjacent literals are merged")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .help("Verbosity level (-v for debug logging, -vv for trace)")
}
