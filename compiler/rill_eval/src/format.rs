//! Locale-invariant string formatting service.
//!
//! Templates use `{N}` placeholders for positional arguments and `{{`/`}}`
//! escapes for literal braces. Rendering never consults a locale: integers
//! are plain decimal, booleans are `true`/`false`.

use std::fmt;

use crate::Value;

/// Error from [`format_invariant`].
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum FormatError {
    /// A `{` without a matching `}` or a stray `}` at this byte offset.
    UnmatchedBrace { at: usize },
    /// A `{...}` whose content is not a decimal argument index.
    BadPlaceholder { at: usize },
    /// A placeholder index with no corresponding argument.
    ArgumentOutOfRange { index: usize },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnmatchedBrace { at } => {
                write!(f, "unmatched brace at byte {at} in format template")
            }
            FormatError::BadPlaceholder { at } => {
                write!(f, "malformed placeholder at byte {at} in format template")
            }
            FormatError::ArgumentOutOfRange { index } => {
                write!(f, "format template references missing argument {index}")
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Render a value for formatting, without any quoting.
///
/// Quoting of string-typed members is the template's business, not the
/// renderer's. The absence value renders as nothing, and a record renders
/// as an opaque marker: a nested record's text goes through its own
/// synthesized `to_string`, dispatched by the member table, which is
/// outside this service.
pub fn render(value: &Value) -> String {
    match value {
        Value::Int(v) => v.to_string(),
        Value::Bool(v) => v.to_string(),
        Value::Str(s) => s.clone(),
        Value::Char(c) => c.to_string(),
        Value::Unit => String::from("()"),
        Value::Absent => String::new(),
        Value::Record(_) => String::from("<record>"),
    }
}

/// Expand a template against positional arguments.
pub fn format_invariant(template: &str, args: &[Value]) -> Result<String, FormatError> {
    let bytes = template.as_bytes();
    let mut out = String::with_capacity(template.len());
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'{' if bytes.get(pos + 1) == Some(&b'{') => {
                out.push('{');
                pos += 2;
            }
            b'}' if bytes.get(pos + 1) == Some(&b'}') => {
                out.push('}');
                pos += 2;
            }
            b'{' => {
                let start = pos + 1;
                let mut end = start;
                while end < bytes.len() && bytes[end].is_ascii_digit() {
                    end += 1;
                }
                if end == start {
                    return Err(FormatError::BadPlaceholder { at: pos });
                }
                if bytes.get(end) != Some(&b'}') {
                    return Err(FormatError::UnmatchedBrace { at: pos });
                }
                let index: usize = template[start..end]
                    .parse()
                    .map_err(|_| FormatError::BadPlaceholder { at: pos })?;
                let arg = args
                    .get(index)
                    .ok_or(FormatError::ArgumentOutOfRange { index })?;
                out.push_str(&render(arg));
                pos = end + 1;
            }
            b'}' => return Err(FormatError::UnmatchedBrace { at: pos }),
            _ => {
                // Copy one whole UTF-8 character.
                let ch_len = template[pos..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
                out.push_str(&template[pos..pos + ch_len]);
                pos += ch_len;
            }
        }
    }

    Ok(out)
}
