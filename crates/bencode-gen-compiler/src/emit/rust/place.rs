//! Selector rendering.
//!
//! Three forms are needed. A place expression names the value itself
//! (`self.count`, `(*i0)`), a reference borrows it (`&self.count`, `i0`) and a
//! receiver is what a method call is made on (`self.peers`, `i0`). Loop
//! variables are already references, so they skip the extra `&`.
//!
//! `value` is a place without the outer parentheses, for argument and
//! condition positions where they would be flagged as unused.

use bencode_gen_plan::Selector;

pub(super) struct Places<'a> {
    runtime: &'a str,
}

impl<'a> Places<'a> {
    pub(super) fn new(runtime: &'a str) -> Self {
        Self { runtime }
    }

    pub(super) fn place(&self, sel: &Selector) -> String {
        match sel {
            Selector::Field(base, name) => format!("{}.{name}", self.receiver(base)),
            Selector::Seconds(base) => format!("{}.as_secs()", self.receiver(base)),
            // Indexing auto-derefs, so the base never needs a `*`.
            Selector::Value(base, depth) => format!("{}[k{depth}]", self.receiver(base)),
            Selector::Root | Selector::Deref(_) | Selector::Elem(_) | Selector::Key(_) => {
                format!("({})", self.value(sel))
            }
        }
    }

    pub(super) fn value(&self, sel: &Selector) -> String {
        match sel {
            Selector::Root => "*self".to_string(),
            Selector::Deref(base) => {
                format!("*{}::deref({})?", self.runtime, self.reference(base))
            }
            Selector::Elem(depth) => format!("*i{depth}"),
            Selector::Key(depth) => format!("*k{depth}"),
            _ => self.place(sel),
        }
    }

    pub(super) fn reference(&self, sel: &Selector) -> String {
        match sel.binding() {
            Some(var) => var,
            None if *sel == Selector::Root => "self".to_string(),
            None => format!("&{}", self.place(sel)),
        }
    }

    pub(super) fn receiver(&self, sel: &Selector) -> String {
        match sel.binding() {
            Some(var) => var,
            None if *sel == Selector::Root => "self".to_string(),
            None => self.place(sel),
        }
    }
}
