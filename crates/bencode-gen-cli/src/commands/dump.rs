use std::path::PathBuf;

use bencode_gen_compiler::{Backend, DumpBackend, Generator, GeneratorConfig};

use super::schema_loader::load_schema_or_exit;

pub struct DumpArgs {
    pub schema_path: PathBuf,
    pub types: Vec<String>,
    pub fold: bool,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let schema = load_schema_or_exit(&args.schema_path, args.color);
    // Plans of aliases are still worth inspecting even though no Rust impl is emitted.
    let config = GeneratorConfig::new().fold(args.fold).alias_roots(true);
    let output = Generator::with_config(&schema, config).generate(&args.types);

    if !output.diagnostics.is_empty() {
        eprint!("{}", output.diagnostics.render_colored(args.color));
    }
    print!(
        "{}",
        DumpBackend::new()
            .colored(args.color)
            .render(schema.module(), &output.types)
    );

    if !output.is_success() {
        std::process::exit(1);
    }
}
