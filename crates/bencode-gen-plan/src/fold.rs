//! Constant folding: merge runs of adjacent literals.
//!
//! Folding never moves bytes across a non-literal instruction and recurses
//! into container bodies, so the encoded output is unchanged.

use crate::instruction::Instruction;

pub fn fold(instructions: Vec<Instruction>) -> Vec<Instruction> {
    let mut out = Vec::with_capacity(instructions.len());
    let mut pending: Vec<u8> = Vec::new();

    for instr in instructions {
        match instr {
            Instruction::Literal(bytes) => pending.extend_from_slice(&bytes),
            mut other => {
                flush(&mut out, &mut pending);
                if let Some(body) = other.body_mut() {
                    *body = fold(std::mem::take(body));
                }
                out.push(other);
            }
        }
    }
    flush(&mut out, &mut pending);
    out
}

// Empty literals write nothing and are dropped.
fn flush(out: &mut Vec<Instruction>, pending: &mut Vec<u8>) {
    if !pending.is_empty() {
        out.push(Instruction::Literal(std::mem::take(pending)));
    }
}
