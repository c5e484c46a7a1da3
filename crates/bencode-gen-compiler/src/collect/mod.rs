//! Field collection: parse tags and flatten embedded structs.

mod fields;
mod tag;

#[cfg(test)]
mod fields_tests;
#[cfg(test)]
mod tag_tests;

pub use fields::{Field, collect_fields, has_tagged_field};
pub use tag::{Tag, TagError, parse_tag};
