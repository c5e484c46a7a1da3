//! Test utilities and shared schema fixtures.

use bencode_gen_core::Colors;
use bencode_gen_plan::dump;
use indoc::indoc;

use crate::emit::{Backend, RustBackend, RustConfig};
use crate::generator::{GenerateOutput, Generator, GeneratorConfig};
use crate::schema::Schema;
use crate::Error;

/// A torrent-like schema touching every descriptor variant.
pub const TORRENT: &str = indoc! {r#"
    {"types": [
        {"name": "Torrent", "struct": [
            {"name": "Announce", "type": "str", "tag": "announce"},
            {"name": "Info", "type": "Info", "embedded": true},
            {"name": "Peers", "type": "Vec<Option<Peer>>", "tag": "peers,omitempty"},
            {"name": "Private", "type": "bool", "tag": "private"},
            {"name": "Ttl", "type": "duration"},
            {"name": "Sig", "type": "Signature"}
        ]},
        {"name": "Info", "struct": [
            {"name": "PieceLength", "type": "i64"},
            {"name": "Files", "type": "Map<PeerId, u32>"}
        ]},
        {"name": "Peer", "struct": [
            {"name": "Ip", "type": "str"},
            {"name": "Port", "type": "u16"}
        ]},
        {"name": "PeerId", "type": "str"},
        {"name": "Signature", "native": true}
    ]}
"#};

/// The two-field example: `{Name: "hi", Count: 0}` encodes as `d4:name2:hie`.
pub const ITEM: &str = indoc! {r#"
    {"types": [
        {"name": "Item", "struct": [
            {"name": "Name", "type": "str"},
            {"name": "Count", "type": "i64", "tag": "count,omitempty"}
        ]}
    ]}
"#};

pub fn schema(json: &str) -> Schema {
    match Schema::parse(json) {
        Ok(schema) => schema,
        Err(Error::Schema(diagnostics)) => panic!("schema errors:\n{}", diagnostics.render()),
        Err(err) => panic!("{err}"),
    }
}

/// Compile the requested types. Alias roots are allowed so single type
/// expressions can be tested without a wrapping struct.
pub fn generate_with(json: &str, names: &[&str], config: GeneratorConfig) -> GenerateOutput {
    let schema = schema(json);
    let names: Vec<String> = names.iter().map(|n| n.to_string()).collect();
    Generator::with_config(&schema, config.alias_roots(true)).generate(&names)
}

pub fn generate(json: &str, names: &[&str]) -> GenerateOutput {
    generate_with(json, names, GeneratorConfig::new())
}

/// Folded plans of the requested types.
pub fn dump_plans(json: &str, names: &[&str]) -> String {
    let output = generate(json, names);
    assert!(output.is_success(), "{}", output.diagnostics.render());
    dump(&output.plans(), Colors::OFF)
}

pub fn dump_unfolded(json: &str, names: &[&str]) -> String {
    let output = generate_with(json, names, GeneratorConfig::new().fold(false));
    assert!(output.is_success(), "{}", output.diagnostics.render());
    dump(&output.plans(), Colors::OFF)
}

/// Rust source for the requested types, with a fixed version in the header.
pub fn rust_source(json: &str, names: &[&str]) -> String {
    let schema = schema(json);
    let names: Vec<String> = names.iter().map(|n| n.to_string()).collect();
    let config = GeneratorConfig::new().alias_roots(true);
    let output = Generator::with_config(&schema, config).generate(&names);
    assert!(output.is_success(), "{}", output.diagnostics.render());
    RustBackend::new(RustConfig::new().version("test")).render(schema.module(), &output.types)
}

pub fn diagnostics(json: &str, names: &[&str]) -> String {
    generate(json, names).diagnostics.render()
}
