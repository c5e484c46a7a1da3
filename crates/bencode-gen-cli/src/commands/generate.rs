use std::path::{Path, PathBuf};

use bencode_gen_compiler::{Backend, GenerateOutput, Generator, RustBackend, RustConfig, Schema};

use super::output::{check_overwrite, default_output_path, write_output};
use super::schema_loader::load_schema_or_exit;

pub struct GenerateArgs {
    pub schema_path: PathBuf,
    pub types: Vec<String>,
    pub output: Option<PathBuf>,
    pub force: bool,
    pub dry_run: bool,
    pub format: bool,
    pub runtime_crate: Option<String>,
    pub color: bool,
}

impl GenerateArgs {
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.schema_path))
    }

    pub fn rust_config(&self) -> RustConfig {
        match &self.runtime_crate {
            Some(path) => RustConfig::new().runtime(path.as_str()),
            None => RustConfig::new(),
        }
    }
}

pub fn run(args: GenerateArgs) {
    let schema = load_schema_or_exit(&args.schema_path, args.color);
    let out_path = args.output_path();
    log::info!(
        "Generating encoders for {} ({})",
        schema_name(&args.schema_path),
        out_path.display()
    );

    let output = Generator::new(&schema).generate(&args.types);
    if !output.diagnostics.is_empty() {
        eprint!("{}", output.diagnostics.render_colored(args.color));
    }
    if !output.is_success() {
        eprintln!(
            "error: {} of {} types failed to compile; nothing written",
            output.failures.len(),
            output.failures.len() + output.types.len()
        );
        std::process::exit(1);
    }
    if output.types.is_empty() {
        log::info!("Skipping {}: no valid types found", schema_name(&args.schema_path));
        return;
    }

    let source = render_source(&schema, &output, args.rust_config());
    let names = type_names(&output);
    if args.dry_run {
        log::info!("Would write {} with encoders for {}", out_path.display(), names);
        return;
    }

    let written = check_overwrite(&out_path, args.force)
        .and_then(|()| write_output(&out_path, &source, args.format));
    if let Err(err) = written {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
    log::info!("Wrote {} with encoders for {}", out_path.display(), names);
}

pub fn render_source(schema: &Schema, output: &GenerateOutput, config: RustConfig) -> String {
    RustBackend::new(config).render(schema.module(), &output.types)
}

pub fn type_names(output: &GenerateOutput) -> String {
    output
        .types
        .iter()
        .map(|t| t.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn schema_name(path: &Path) -> String {
    if path.as_os_str() == "-" {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}
