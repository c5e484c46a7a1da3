use std::path::PathBuf;

use bencode_gen_compiler::Generator;

use super::schema_loader::load_schema_or_exit;

pub struct CheckArgs {
    pub schema_path: PathBuf,
    pub types: Vec<String>,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let schema = load_schema_or_exit(&args.schema_path, args.color);
    let output = Generator::new(&schema).generate(&args.types);
    let diagnostics = &output.diagnostics;

    let is_valid = if args.strict {
        !diagnostics.has_errors() && !diagnostics.has_warnings()
    } else {
        output.is_success()
    };

    if !diagnostics.is_empty() {
        eprint!("{}", diagnostics.render_colored(args.color));
    }
    if !is_valid {
        std::process::exit(1);
    }
    log::debug!("{} types compiled", output.types.len());
}
