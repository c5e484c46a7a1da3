//! Human-readable plan dump for debugging and snapshot tests.
//!
//! One instruction per line, container bodies indented under their header:
//!
//! ```text
//! Torrent
//!   literal "d8:announce"
//!   string  x.Announce
//!   if      len(x.Comment) != 0
//!     literal "7:comment"
//!     string  x.Comment
//!   literal "e"
//! ```

use std::fmt::Write as _;

use bencode_gen_core::Colors;
use bencode_gen_core::utils::escape_bytes;

use crate::instruction::Instruction;
use crate::plan::Plan;

const MNEMONIC_WIDTH: usize = 8;

/// Dump every plan, separated by blank lines.
pub fn dump(plans: &[Plan], colors: Colors) -> String {
    let mut out = String::new();
    for (i, plan) in plans.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        dump_plan(&mut out, plan, colors);
    }
    out
}

pub fn dump_plan(out: &mut String, plan: &Plan, colors: Colors) {
    writeln!(out, "{}", colors.paint(colors.blue, &plan.name)).unwrap();
    dump_body(out, &plan.instructions, 1, colors);
}

fn dump_body(out: &mut String, instructions: &[Instruction], level: usize, colors: Colors) {
    for instr in instructions {
        let indent = "  ".repeat(level);
        let mnemonic = format!("{:<MNEMONIC_WIDTH$}", instr.mnemonic());
        write!(out, "{indent}{}", colors.paint(colors.dim, &mnemonic)).unwrap();
        dump_operand(out, instr, colors);
        out.push('\n');
        if let Some(body) = instr.body() {
            dump_body(out, body, level + 1, colors);
        }
    }
}

fn dump_operand(out: &mut String, instr: &Instruction, colors: Colors) {
    match instr {
        Instruction::Literal(bytes) => {
            let quoted = format!("\"{}\"", escape_bytes(bytes));
            out.push_str(&colors.paint(colors.green, &quoted));
        }
        Instruction::WriteBool(sel)
        | Instruction::WriteInt(sel)
        | Instruction::WriteString(sel)
        | Instruction::WriteNative(sel) => write!(out, "{sel}").unwrap(),
        Instruction::List {
            selector, depth, ..
        } => write!(out, "i{depth} in {selector}").unwrap(),
        Instruction::Map {
            selector,
            depth,
            key_cast,
            ..
        } => {
            write!(out, "k{depth} in sorted({selector})").unwrap();
            if let Some(cast) = key_cast {
                write!(out, " as {}", colors.paint(colors.blue, cast)).unwrap();
            }
        }
        Instruction::Conditional { selector, test, .. } => {
            out.push_str(&test.present_condition(selector));
        }
    }
}
