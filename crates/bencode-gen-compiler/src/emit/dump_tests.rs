use indoc::indoc;

use crate::emit::{Backend, DumpBackend};
use crate::generator::{Generator, GeneratorConfig};
use crate::test_utils::schema;

#[test]
fn dump_with_module_line() {
    let schema = schema(indoc! {r#"
        {"module": "tracker", "types": [
            {"name": "Ping", "struct": [{"name": "Id", "type": "u32", "tag": "id"}]},
            {"name": "Pong", "struct": [{"name": "Ok", "type": "bool", "tag": "ok"}]}
        ]}
    "#});
    let output = Generator::new(&schema).generate(&[]);
    let text = DumpBackend::new().render(schema.module(), &output.types);
    insta::assert_snapshot!(text, @r#"
    # module tracker

    Ping
      literal "d2:idi"
      int     x.Id
      literal "ee"

    Pong
      literal "d2:oki"
      bool    x.Ok
      literal "ee"
    "#);
}

#[test]
fn dump_colored() {
    let schema = schema(r#"{"types": [{"name": "S", "type": "str"}]}"#);
    let config = GeneratorConfig::new().alias_roots(true);
    let output = Generator::with_config(&schema, config).generate(&["S".to_string()]);
    let text = DumpBackend::new().colored(true).render(None, &output.types);
    assert!(text.starts_with("\x1b[34mS\x1b[0m\n"));
}
