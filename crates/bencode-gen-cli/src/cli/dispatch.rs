//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::generate::GenerateArgs;

pub struct GenerateParams {
    pub schema_path: PathBuf,
    pub types: Vec<String>,
    pub output: Option<PathBuf>,
    pub force: bool,
    pub dry_run: bool,
    pub no_format: bool,
    pub runtime_crate: Option<String>,
    pub color: ColorChoice,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema_path: schema_path(m),
            types: types(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            force: m.get_flag("force"),
            dry_run: m.get_flag("dry_run"),
            no_format: m.get_flag("no_format"),
            runtime_crate: m.get_one::<String>("runtime_crate").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            schema_path: p.schema_path,
            types: p.types,
            output: p.output,
            force: p.force,
            dry_run: p.dry_run,
            format: !p.no_format,
            runtime_crate: p.runtime_crate,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub schema_path: PathBuf,
    pub types: Vec<String>,
    pub unfolded: bool,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema_path: schema_path(m),
            types: types(m),
            unfolded: m.get_flag("unfolded"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            schema_path: p.schema_path,
            types: p.types,
            fold: !p.unfolded,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub schema_path: PathBuf,
    pub types: Vec<String>,
    pub strict: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema_path: schema_path(m),
            types: types(m),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            schema_path: p.schema_path,
            types: p.types,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

fn schema_path(m: &ArgMatches) -> PathBuf {
    // Required by clap; "-" is only a fallback for direct callers.
    m.get_one::<PathBuf>("schema_path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}

fn types(m: &ArgMatches) -> Vec<String> {
    m.get_many::<String>("types")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
