//! Plan instruction set.

use crate::selector::Selector;

/// How an omitempty field decides it has nothing to write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EmptinessTest {
    /// Strings, lists, arrays and maps: empty when length is zero.
    Len,
    /// Optional references: empty when absent.
    Nil,
    /// Booleans: empty when false.
    False,
    /// Numbers: empty when zero.
    Zero,
    /// Durations: empty when no time has elapsed.
    ZeroDuration,
}

impl EmptinessTest {
    /// Condition under which the field is written, in dump notation.
    pub fn present_condition(self, selector: &Selector) -> String {
        match self {
            EmptinessTest::Len => format!("len({selector}) != 0"),
            EmptinessTest::Nil => format!("{selector} != nil"),
            EmptinessTest::False => selector.to_string(),
            EmptinessTest::Zero | EmptinessTest::ZeroDuration => format!("{selector} != 0"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Bytes known at generation time.
    Literal(Vec<u8>),
    WriteBool(Selector),
    /// Decimal digits only; the `i`/`e` framing is in surrounding literals.
    WriteInt(Selector),
    /// `<len>:<bytes>`.
    WriteString(Selector),
    /// The value writes its own encoding.
    WriteNative(Selector),
    /// Run `body` once per element, binding `i{depth}`.
    List {
        selector: Selector,
        depth: u16,
        body: Vec<Instruction>,
    },
    /// Run `body` once per key in ascending byte order, binding `k{depth}`.
    Map {
        selector: Selector,
        depth: u16,
        /// Declared key type, when the key is not a bare string.
        key_cast: Option<String>,
        body: Vec<Instruction>,
    },
    /// Run `body` only when the value is not empty.
    Conditional {
        selector: Selector,
        test: EmptinessTest,
        body: Vec<Instruction>,
    },
}

impl Instruction {
    pub fn literal(bytes: impl AsRef<[u8]>) -> Self {
        Instruction::Literal(bytes.as_ref().to_vec())
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Instruction::Literal(_))
    }

    pub fn mnemonic(&self) -> &'static str {
        match self {
            Instruction::Literal(_) => "literal",
            Instruction::WriteBool(_) => "bool",
            Instruction::WriteInt(_) => "int",
            Instruction::WriteString(_) => "string",
            Instruction::WriteNative(_) => "native",
            Instruction::List { .. } => "for",
            Instruction::Map { .. } => "map",
            Instruction::Conditional { .. } => "if",
        }
    }

    pub fn selector(&self) -> Option<&Selector> {
        match self {
            Instruction::Literal(_) => None,
            Instruction::WriteBool(sel)
            | Instruction::WriteInt(sel)
            | Instruction::WriteString(sel)
            | Instruction::WriteNative(sel) => Some(sel),
            Instruction::List { selector, .. }
            | Instruction::Map { selector, .. }
            | Instruction::Conditional { selector, .. } => Some(selector),
        }
    }

    pub fn body(&self) -> Option<&[Instruction]> {
        match self {
            Instruction::List { body, .. }
            | Instruction::Map { body, .. }
            | Instruction::Conditional { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn body_mut(&mut self) -> Option<&mut Vec<Instruction>> {
        match self {
            Instruction::List { body, .. }
            | Instruction::Map { body, .. }
            | Instruction::Conditional { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Visit every instruction, containers before their bodies.
pub fn walk<'a>(instructions: &'a [Instruction], visit: &mut impl FnMut(&'a Instruction)) {
    for instr in instructions {
        visit(instr);
        if let Some(body) = instr.body() {
            walk(body, visit);
        }
    }
}
