//! Core emitter: header, imports and one impl per plan.

use std::fmt::Write as _;

use bencode_gen_core::utils::escape_bytes;
use bencode_gen_plan::plan::combined_features;
use bencode_gen_plan::{EmptinessTest, Instruction};

use super::Config;
use super::place::Places;
use crate::generator::GeneratedType;

const INDENT: &str = "    ";

/// Rust emitter for a set of generated types.
pub struct Emitter<'a> {
    config: &'a Config,
    places: Places<'a>,
    /// Current nesting level inside an impl body
    level: usize,
    /// Output buffer
    output: String,
}

impl<'a> Emitter<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            places: Places::new(&config.runtime),
            level: 0,
            output: String::new(),
        }
    }

    pub fn emit(mut self, module: Option<&str>, types: &[GeneratedType]) -> String {
        self.emit_header(module, types);
        for generated in types {
            self.output.push('\n');
            self.emit_impl(generated);
        }
        self.output
    }

    fn emit_header(&mut self, module: Option<&str>, types: &[GeneratedType]) {
        let rt = &self.config.runtime;
        let features = combined_features(types.iter().map(|t| &t.plan));

        if self.config.header {
            writeln!(
                self.output,
                "// Code generated by bencode-gen {} DO NOT EDIT.",
                self.config.version
            )
            .unwrap();
            if let Some(module) = module {
                writeln!(self.output, "// Schema module: {module}").unwrap();
            }
            self.output.push('\n');
        }

        self.output.push_str("use std::io::{self, Write};\n\n");
        writeln!(self.output, "use {rt}::Bencode;").unwrap();
        if features.needs_sort {
            writeln!(self.output, "use {rt}::sorted_keys;").unwrap();
        }
        if features.needs_format {
            self.output.push_str("#[allow(unused_imports)]\n");
            writeln!(self.output, "use {rt}::{{write_int, write_string}};").unwrap();
        }
    }

    fn emit_impl(&mut self, generated: &GeneratedType) {
        writeln!(self.output, "impl Bencode for {} {{", generated.name).unwrap();
        self.level = 1;
        self.line("fn write_bencode(&self, w: &mut dyn Write) -> io::Result<()> {");
        self.level += 1;
        self.emit_body(&generated.plan.instructions);
        self.line("Ok(())");
        self.level -= 1;
        self.line("}");
        self.level = 0;
        self.output.push_str("}\n");
    }

    fn emit_body(&mut self, instructions: &[Instruction]) {
        for instr in instructions {
            self.emit_instruction(instr);
        }
    }

    fn emit_instruction(&mut self, instr: &Instruction) {
        let rt = self.config.runtime.clone();
        match instr {
            Instruction::Literal(bytes) => {
                self.line(&format!("w.write_all(b\"{}\")?;", escape_bytes(bytes)));
            }
            Instruction::WriteBool(sel) => {
                let value = self.places.value(sel);
                self.line(&format!("{rt}::write_bool(w, {value})?;"));
            }
            Instruction::WriteInt(sel) => {
                let value = self.places.reference(sel);
                self.line(&format!("write_int(w, {value})?;"));
            }
            Instruction::WriteString(sel) => {
                let value = self.places.reference(sel);
                self.line(&format!("write_string(w, {value})?;"));
            }
            Instruction::WriteNative(sel) => {
                let value = self.places.reference(sel);
                self.line(&format!("Bencode::write_bencode({value}, w)?;"));
            }
            Instruction::List {
                selector,
                depth,
                body,
            } => {
                let list = self.places.receiver(selector);
                self.block(&format!("for i{depth} in {list}.iter() {{"), body, None);
            }
            Instruction::Map {
                selector,
                depth,
                key_cast,
                body,
            } => {
                let map = self.places.receiver(selector);
                let cast = key_cast
                    .as_ref()
                    .map(|ty| format!("let k{depth}: &{ty} = k{depth};"));
                self.block(
                    &format!("for k{depth} in sorted_keys({map}.keys()) {{"),
                    body,
                    cast,
                );
            }
            Instruction::Conditional {
                selector,
                test,
                body,
            } => {
                let receiver = self.places.receiver(selector);
                let value = self.places.value(selector);
                let condition = match test {
                    EmptinessTest::Len => format!("!{receiver}.is_empty()"),
                    EmptinessTest::Nil => format!("{receiver}.is_some()"),
                    EmptinessTest::False => value,
                    EmptinessTest::Zero => format!("{value} != 0"),
                    EmptinessTest::ZeroDuration => format!("!{receiver}.is_zero()"),
                };
                self.block(&format!("if {condition} {{"), body, None);
            }
        }
    }

    fn block(&mut self, open: &str, body: &[Instruction], prelude: Option<String>) {
        self.line(open);
        self.level += 1;
        if let Some(prelude) = prelude {
            self.line(&prelude);
        }
        self.emit_body(body);
        self.level -= 1;
        self.line("}");
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.level {
            self.output.push_str(INDENT);
        }
        self.output.push_str(text);
        self.output.push('\n');
    }
}
