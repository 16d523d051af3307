//! Front matter parsing.
//!
//! Content files may start with a YAML block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: Getting Started
//! layout: docs
//! ---
//!
//! # Getting Started
//! ```
//!
//! The block is parsed with `serde_yaml` into a key/value mapping. All keys are
//! kept; the recognized ones (`title`, `date`, `author`, `email`, `layout`)
//! have typed accessors that accept any scalar and normalize it to a string.

use serde_json::{Map, Value};

/// Errors emitted while extracting front matter.
///
/// These are fatal for the build: a page whose header cannot be parsed has no
/// trustworthy metadata.
#[derive(Debug, thiserror::Error)]
pub enum FrontMatterError {
    /// Opening `---` without a closing fence.
    #[error("unterminated front matter block: expected closing '---'")]
    Unterminated,
    /// YAML failed to parse.
    #[error("invalid front matter YAML: {0}")]
    Parse(String),
    /// Top-level YAML node was not a mapping.
    #[error("front matter must be a YAML mapping")]
    InvalidRoot,
}

/// Declared key/value metadata of a content file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrontMatter {
    fields: Map<String, Value>,
}

impl FrontMatter {
    /// Parse a YAML block (without fences).
    ///
    /// Empty content yields an empty mapping.
    pub fn from_yaml(block: &str) -> Result<Self, FrontMatterError> {
        if block.trim().is_empty() {
            return Ok(Self::default());
        }

        let yaml: serde_yaml::Value =
            serde_yaml::from_str(block).map_err(|e| FrontMatterError::Parse(e.to_string()))?;
        let json =
            serde_json::to_value(yaml).map_err(|e| FrontMatterError::Parse(e.to_string()))?;

        match json {
            Value::Null => Ok(Self::default()),
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(FrontMatterError::InvalidRoot),
        }
    }

    /// Raw value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Scalar value for a key as a string.
    ///
    /// Strings, numbers and booleans are accepted. Empty strings, nulls and
    /// structured values count as absent.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Declared page title.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        self.get_str("title")
    }

    /// Declared publication date.
    #[must_use]
    pub fn date(&self) -> Option<String> {
        self.get_str("date")
    }

    /// Declared author name.
    #[must_use]
    pub fn author(&self) -> Option<String> {
        self.get_str("author")
    }

    /// Declared author email.
    #[must_use]
    pub fn email(&self) -> Option<String> {
        self.get_str("email")
    }

    /// Declared layout identifier.
    #[must_use]
    pub fn layout(&self) -> Option<String> {
        self.get_str("layout")
    }

    /// True if no keys were declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Split a content file into its front matter and body.
///
/// Leading blank lines and a UTF-8 BOM are skipped. A file that does not start
/// with a `---` fence has empty front matter and the whole input as body.
pub fn split_front_matter(source: &str) -> Result<(FrontMatter, &str), FrontMatterError> {
    let text = source.strip_prefix('\u{feff}').unwrap_or(source);

    let mut lines = text.split_inclusive('\n');
    let mut offset = 0;

    // Find the opening fence
    loop {
        let Some(line) = lines.next() else {
            return Ok((FrontMatter::default(), source));
        };
        offset += line.len();
        if line.trim().is_empty() {
            continue;
        }
        if !is_fence(line) {
            return Ok((FrontMatter::default(), source));
        }
        break;
    }

    let block_start = offset;
    for line in lines {
        if is_fence(line) {
            let block = &text[block_start..offset];
            let body = &text[offset + line.len()..];
            return Ok((FrontMatter::from_yaml(block)?, body));
        }
        offset += line.len();
    }

    Err(FrontMatterError::Unterminated)
}

fn is_fence(line: &str) -> bool {
    line.trim_end_matches(['\r', '\n']) == "---"
}
