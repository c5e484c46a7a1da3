//! Plan interpreter.

use std::borrow::Cow;
use std::io::Write;

use bencode_gen_core::runtime::{write_bool, write_int, write_string};
use bencode_gen_plan::{EmptinessTest, Instruction, Plan, Selector};

use super::error::RuntimeError;
use super::value::Value;

pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Executes one plan against one value.
///
/// Loop variables live in per-depth slots, mirroring the `i0`/`k0` names
/// the plan's selectors use.
pub struct VM<'v> {
    root: &'v Value,
    elems: Vec<Option<&'v Value>>,
    keys: Vec<Option<&'v Value>>,
}

impl<'v> VM<'v> {
    /// Encode `value` with `plan`.
    pub fn execute(plan: &Plan, value: &'v Value) -> RuntimeResult<Vec<u8>> {
        let mut out = Vec::new();
        Self::execute_into(plan, value, &mut out)?;
        Ok(out)
    }

    pub fn execute_into(plan: &Plan, value: &'v Value, w: &mut dyn Write) -> RuntimeResult<()> {
        log::debug!("executing plan for {}", plan.name);
        let mut vm = VM {
            root: value,
            elems: Vec::new(),
            keys: Vec::new(),
        };
        vm.run(&plan.instructions, w)
    }

    fn run(&mut self, instructions: &[Instruction], w: &mut dyn Write) -> RuntimeResult<()> {
        for instr in instructions {
            log::trace!("{} {:?}", instr.mnemonic(), instr.selector());
            match instr {
                Instruction::Literal(bytes) => w.write_all(bytes)?,
                Instruction::WriteBool(sel) => match &*self.resolve(sel)? {
                    Value::Bool(b) => write_bool(w, *b)?,
                    other => return Err(mismatch(sel, "bool", other)),
                },
                Instruction::WriteInt(sel) => match &*self.resolve(sel)? {
                    Value::Int(n) => write_int(w, n)?,
                    other => return Err(mismatch(sel, "int", other)),
                },
                Instruction::WriteString(sel) => match &*self.resolve(sel)? {
                    Value::Str(bytes) => write_string(w, bytes)?,
                    other => return Err(mismatch(sel, "string", other)),
                },
                Instruction::WriteNative(sel) => match &*self.resolve(sel)? {
                    Value::Native(bytes) => w.write_all(bytes)?,
                    other => return Err(mismatch(sel, "native", other)),
                },
                Instruction::List {
                    selector,
                    depth,
                    body,
                } => {
                    let list = self.borrowed(selector)?;
                    let Value::List(items) = list else {
                        return Err(mismatch(selector, "list", list));
                    };
                    for item in items {
                        bind(&mut self.elems, *depth, Some(item));
                        self.run(body, w)?;
                    }
                    bind(&mut self.elems, *depth, None);
                }
                Instruction::Map {
                    selector,
                    depth,
                    body,
                    ..
                } => {
                    let map = self.borrowed(selector)?;
                    let Value::Map(pairs) = map else {
                        return Err(mismatch(selector, "map", map));
                    };
                    let mut keys = Vec::with_capacity(pairs.len());
                    for (key, _) in pairs {
                        match key {
                            Value::Str(bytes) => keys.push((bytes.as_slice(), key)),
                            other => return Err(mismatch(selector, "string key", other)),
                        }
                    }
                    keys.sort_by(|a, b| a.0.cmp(b.0));
                    for (_, key) in keys {
                        bind(&mut self.keys, *depth, Some(key));
                        self.run(body, w)?;
                    }
                    bind(&mut self.keys, *depth, None);
                }
                Instruction::Conditional {
                    selector,
                    test,
                    body,
                } => {
                    if self.is_present(selector, *test)? {
                        self.run(body, w)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn is_present(&self, selector: &Selector, test: EmptinessTest) -> RuntimeResult<bool> {
        let value = self.resolve(selector)?;
        let present = match (test, &*value) {
            (EmptinessTest::Len, Value::Str(bytes)) => !bytes.is_empty(),
            (EmptinessTest::Len, Value::List(items)) => !items.is_empty(),
            (EmptinessTest::Len, Value::Map(pairs)) => !pairs.is_empty(),
            (EmptinessTest::Nil, Value::Null) => false,
            (EmptinessTest::Nil, _) => true,
            (EmptinessTest::False, Value::Bool(b)) => *b,
            (EmptinessTest::Zero, Value::Int(n)) => *n != 0,
            (EmptinessTest::ZeroDuration, Value::Duration(d)) => !d.is_zero(),
            (EmptinessTest::Len, other) => return Err(mismatch(selector, "sized value", other)),
            (EmptinessTest::False, other) => return Err(mismatch(selector, "bool", other)),
            (EmptinessTest::Zero, other) => return Err(mismatch(selector, "number", other)),
            (EmptinessTest::ZeroDuration, other) => {
                return Err(mismatch(selector, "duration", other));
            }
        };
        Ok(present)
    }

    /// The value a selector addresses. Only `Seconds` produces a new value.
    fn resolve(&self, sel: &Selector) -> RuntimeResult<Cow<'v, Value>> {
        match sel {
            Selector::Root => Ok(Cow::Borrowed(self.root)),
            Selector::Field(base, name) => {
                let owner = self.borrowed(base)?;
                if !matches!(owner, Value::Struct(_)) {
                    return Err(mismatch(base, "struct", owner));
                }
                owner
                    .field(name)
                    .map(Cow::Borrowed)
                    .ok_or_else(|| RuntimeError::MissingField {
                        selector: base.to_string(),
                        field: name.clone(),
                    })
            }
            Selector::Deref(base) => {
                let value = self.resolve(base)?;
                if matches!(*value, Value::Null) {
                    return Err(RuntimeError::NilDereference {
                        selector: base.to_string(),
                    });
                }
                Ok(value)
            }
            Selector::Seconds(base) => match &*self.resolve(base)? {
                Value::Duration(d) => Ok(Cow::Owned(Value::Int(d.as_secs().into()))),
                other => Err(mismatch(base, "duration", other)),
            },
            Selector::Elem(depth) => lookup(&self.elems, *depth, sel).map(Cow::Borrowed),
            Selector::Key(depth) => lookup(&self.keys, *depth, sel).map(Cow::Borrowed),
            Selector::Value(base, depth) => {
                let map = self.borrowed(base)?;
                let key = lookup(&self.keys, *depth, &Selector::Key(*depth))?;
                let Value::Map(pairs) = map else {
                    return Err(mismatch(base, "map", map));
                };
                pairs
                    .iter()
                    .find(|(k, _)| k == key)
                    .map(|(_, v)| Cow::Borrowed(v))
                    .ok_or_else(|| RuntimeError::MissingKey {
                        selector: sel.to_string(),
                    })
            }
        }
    }

    /// Like `resolve`, for selectors that must point into the input value.
    fn borrowed(&self, sel: &Selector) -> RuntimeResult<&'v Value> {
        match self.resolve(sel)? {
            Cow::Borrowed(value) => Ok(value),
            Cow::Owned(value) => Err(mismatch(sel, "addressable value", &value)),
        }
    }
}

fn bind<'v>(slots: &mut Vec<Option<&'v Value>>, depth: u16, value: Option<&'v Value>) {
    let i = usize::from(depth);
    if slots.len() <= i {
        slots.resize(i + 1, None);
    }
    slots[i] = value;
}

fn lookup<'v>(slots: &[Option<&'v Value>], depth: u16, sel: &Selector) -> RuntimeResult<&'v Value> {
    slots
        .get(usize::from(depth))
        .copied()
        .flatten()
        .ok_or_else(|| RuntimeError::UnboundVariable {
            name: sel.to_string(),
        })
}

fn mismatch(sel: &Selector, expected: &'static str, found: &Value) -> RuntimeError {
    RuntimeError::TypeMismatch {
        selector: sel.to_string(),
        expected,
        found: found.kind(),
    }
}
