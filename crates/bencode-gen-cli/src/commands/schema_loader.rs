use std::fs;
use std::io::{self, Read};
use std::path::Path;

use bencode_gen_compiler::{Error, Schema};

/// Read the schema text from a file, or stdin for `-`.
pub fn load_schema_source(path: &Path) -> Result<String, String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read stdin: {}", e))?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(|e| format!("failed to read '{}': {}", path.display(), e))
}

/// Parse and lower a schema. Errors come back rendered for the terminal.
pub fn parse_schema(source: &str, color: bool) -> Result<Schema, String> {
    match Schema::parse(source) {
        Ok(schema) => Ok(schema),
        Err(Error::Schema(diagnostics)) => Err(diagnostics.render_colored(color)),
        Err(err) => Err(format!("error: {err}\n")),
    }
}

/// Load a schema or exit with its errors printed.
pub fn load_schema_or_exit(path: &Path, color: bool) -> Schema {
    let source = load_schema_source(path).unwrap_or_else(|msg| {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    });
    parse_schema(&source, color).unwrap_or_else(|rendered| {
        eprint!("{}", rendered);
        std::process::exit(1);
    })
}
