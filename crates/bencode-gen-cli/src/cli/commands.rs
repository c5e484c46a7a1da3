//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Args every command takes: the schema, the type selection and logging/color.
fn with_common_args(cmd: Command) -> Command {
    cmd.arg(schema_path_arg())
        .arg(types_arg())
        .arg(verbose_arg())
        .arg(color_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("bencode-gen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate bencode encoders for Rust types described by a schema")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
        .subcommand(dump_command())
        .subcommand(check_command())
}

/// Generate a Rust source file with `Bencode` impls.
pub fn generate_command() -> Command {
    let cmd = Command::new("generate")
        .about("Generate bencode encoders")
        .override_usage("  bencode-gen generate <SCHEMA> [TYPES]... [-o <FILE>]")
        .after_help(
            r#"EXAMPLES:
  bencode-gen generate schema.json              # every tagged struct
  bencode-gen generate schema.json Torrent Peer # named types only
  bencode-gen generate schema.json -n -v        # show what would be written
  cat schema.json | bencode-gen generate - -o src/bencode_gen.rs"#,
        )
        .arg(output_file_arg())
        .arg(force_arg())
        .arg(dry_run_arg())
        .arg(no_format_arg())
        .arg(runtime_crate_arg());

    with_common_args(cmd)
}

/// Print encoding plans.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show the encoding plan of each type")
        .override_usage("  bencode-gen dump <SCHEMA> [TYPES]... [--unfolded]")
        .after_help(
            r#"EXAMPLES:
  bencode-gen dump schema.json                  # folded plans
  bencode-gen dump schema.json Torrent --unfolded"#,
        )
        .arg(unfolded_arg());

    with_common_args(cmd)
}

/// Compile without writing anything.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a schema and compile its types")
        .override_usage("  bencode-gen check <SCHEMA> [TYPES]... [--strict]")
        .after_help(
            r#"EXAMPLES:
  bencode-gen check schema.json                 # errors only fail
  bencode-gen check schema.json --strict        # warnings fail too"#,
        )
        .arg(strict_arg());

    with_common_args(cmd)
}
