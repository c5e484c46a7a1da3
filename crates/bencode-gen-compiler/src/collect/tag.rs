//! Struct tag syntax: `name(,option)*`.
//!
//! The only option is `omitempty`. An empty name means "use the derived name".

use std::ops::Range;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    /// Explicit output name; `None` when the tag leaves it empty.
    pub name: Option<String>,
    pub omit_empty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagError {
    pub message: String,
    /// Byte range within the tag text.
    pub range: Range<usize>,
    pub label: &'static str,
}

impl std::fmt::Display for TagError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for TagError {}

pub fn parse_tag(raw: &str) -> Result<Tag, TagError> {
    if let Some((pos, c)) = raw.char_indices().find(|(_, c)| c.is_control() || *c == '"') {
        return Err(TagError {
            message: format!("unexpected character {c:?}"),
            range: pos..pos + c.len_utf8(),
            label: "not allowed in tags",
        });
    }

    let mut segments = raw.split(',');
    let name = segments.next().unwrap_or_default();
    let mut tag = Tag {
        name: (!name.is_empty()).then(|| name.to_string()),
        omit_empty: false,
    };

    let mut offset = name.len() + 1;
    for option in segments {
        match option {
            "" => {
                return Err(TagError {
                    message: "empty option".to_string(),
                    range: offset - 1..offset,
                    label: "nothing after this comma",
                });
            }
            "omitempty" => tag.omit_empty = true,
            other => {
                return Err(TagError {
                    message: format!("unknown option `{other}`"),
                    range: offset..offset + other.len(),
                    label: "unknown option",
                });
            }
        }
        offset += option.len() + 1;
    }

    Ok(tag)
}
