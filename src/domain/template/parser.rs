//! Page template parsing.
//!
//! Templates use the field-action subset of Go's `text/template` syntax:
//!
//! ```text
//! <title>{{.Title}}</title>
//! {{/* body rendered from markdown */}}
//! {{- .DocBody -}}
//! ```
//!
//! Field names are not checked here; a field the composer does not supply is
//! reported when the template is executed.

use thiserror::Error;

const OPEN_DELIM: &str = "{{";
const CLOSE_DELIM: &str = "}}";
const RIGHT_TRIM_CLOSE: &str = "-}}";
const COMMENT_OPEN: &str = "/*";
const COMMENT_CLOSE: &str = "*/";

/// A parsed piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text copied to the output.
    Text(String),
    /// Placeholder replaced by the named field's value.
    Field(String),
}

/// Errors raised while parsing template source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateParseError {
    #[error("unclosed action starting at byte {offset}")]
    UnclosedAction { offset: usize },

    #[error("unclosed comment starting at byte {offset}")]
    UnclosedComment { offset: usize },

    #[error("empty action at byte {offset}")]
    EmptyAction { offset: usize },

    #[error("unsupported action '{action}' at byte {offset}")]
    UnsupportedAction { offset: usize, action: String },
}

/// A parsed, reusable page template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTemplate {
    name: String,
    segments: Vec<Segment>,
}

impl RenderTemplate {
    /// Parses template source into a reusable template named `name`.
    pub fn parse(name: impl Into<String>, source: &str) -> Result<Self, TemplateParseError> {
        let mut segments = Vec::new();
        let mut text = String::new();
        let mut rest = source;
        let mut offset = 0;

        while let Some(start) = rest.find(OPEN_DELIM) {
            // A left trim marker only reaches the text run right before its action.
            let run_start = text.len();
            text.push_str(&rest[..start]);
            let open = offset + start;
            let after_open = &rest[start + OPEN_DELIM.len()..];

            let body = strip_left_trim_marker(after_open);
            if body.is_some() {
                let kept = run_start + text[run_start..].trim_end_matches(is_space).len();
                text.truncate(kept);
            }
            let body = body.unwrap_or(after_open);

            let (action_len, trim_right) = match body.strip_prefix(COMMENT_OPEN) {
                Some(comment) => {
                    let (len, trim_right) = comment_len(comment, open)?;
                    (COMMENT_OPEN.len() + len, trim_right)
                }
                None => {
                    let end = body
                        .find(CLOSE_DELIM)
                        .ok_or(TemplateParseError::UnclosedAction { offset: open })?;
                    let inner = &body[..end];
                    let (inner, trim_right) = match strip_right_trim_marker(inner) {
                        Some(stripped) => (stripped, true),
                        None => (inner, false),
                    };
                    let field = parse_field(inner.trim_matches(is_space), open)?;
                    if !text.is_empty() {
                        segments.push(Segment::Text(std::mem::take(&mut text)));
                    }
                    segments.push(Segment::Field(field.to_string()));
                    (end + CLOSE_DELIM.len(), trim_right)
                }
            };

            let consumed = start + OPEN_DELIM.len() + (after_open.len() - body.len()) + action_len;
            rest = &rest[consumed..];
            offset += consumed;
            if trim_right {
                let trimmed = rest.trim_start_matches(is_space);
                offset += rest.len() - trimmed.len();
                rest = trimmed;
            }
        }

        text.push_str(rest);
        if !text.is_empty() {
            segments.push(Segment::Text(text));
        }

        Ok(Self {
            name: name.into(),
            segments,
        })
    }

    /// Name the template was parsed under.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Field names referenced by the template, in order of appearance.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Field(name) => Some(name.as_str()),
            Segment::Text(_) => None,
        })
    }

    /// Returns true if the template has at least one placeholder for `field`.
    pub fn references(&self, field: &str) -> bool {
        self.fields().any(|name| name == field)
    }

    /// Returns the entries of `required` the template never references.
    pub fn missing_fields<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|field| !self.references(field))
            .collect()
    }
}

/// Whitespace as the trim markers understand it.
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// `{{- ` trims whitespace before the action. Returns the action body after
/// the dash and its one whitespace character.
fn strip_left_trim_marker(after_open: &str) -> Option<&str> {
    let stripped = after_open.strip_prefix('-')?;
    let mut chars = stripped.chars();
    chars.next().filter(|c| is_space(*c))?;
    Some(chars.as_str())
}

/// ` -}}` trims whitespace after the action; the dash must be preceded by whitespace.
fn strip_right_trim_marker(inner: &str) -> Option<&str> {
    let stripped = inner.strip_suffix('-')?;
    stripped.ends_with(is_space).then_some(stripped)
}

/// Length of a comment after its `/*`, through the closing delimiter, and
/// whether that delimiter carries a right trim marker.
///
/// The comment ends at the first `*/`, which must be followed directly by
/// `}}` or ` -}}`; a `}}` inside the comment text does not close it.
fn comment_len(comment: &str, offset: usize) -> Result<(usize, bool), TemplateParseError> {
    let unclosed = TemplateParseError::UnclosedComment { offset };
    let close = comment.find(COMMENT_CLOSE).ok_or(unclosed.clone())?;
    let after = &comment[close + COMMENT_CLOSE.len()..];

    if after.starts_with(CLOSE_DELIM) {
        return Ok((close + COMMENT_CLOSE.len() + CLOSE_DELIM.len(), false));
    }
    let mut chars = after.chars();
    match chars.next() {
        Some(c) if is_space(c) && chars.as_str().starts_with(RIGHT_TRIM_CLOSE) => Ok((
            close + COMMENT_CLOSE.len() + c.len_utf8() + RIGHT_TRIM_CLOSE.len(),
            true,
        )),
        _ => Err(unclosed),
    }
}

fn parse_field(action: &str, offset: usize) -> Result<&str, TemplateParseError> {
    if action.is_empty() {
        return Err(TemplateParseError::EmptyAction { offset });
    }

    let unsupported = || TemplateParseError::UnsupportedAction {
        offset,
        action: action.to_string(),
    };

    let name = action.strip_prefix('.').ok_or_else(unsupported)?;
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return Err(unsupported()),
    }
    if !chars.all(|c| c.is_alphanumeric() || c == '_') {
        return Err(unsupported());
    }
    Ok(name)
}
