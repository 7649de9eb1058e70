//! Optional validation of the model output into a [`GeneratedPost`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PostError {
    #[error("model output is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("model output must be a JSON object")]
    NotAnObject,
    #[error("model output is missing \"{0}\"")]
    MissingField(&'static str),
}

/// Topic used when the post has no text.
pub const DEFAULT_TOPIC: &str = "Technical content";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPost {
    pub post_text: String,
    pub image_prompt: String,
}

impl GeneratedPost {
    /// Parse raw model output. Tolerates a surrounding markdown code fence;
    /// non-string values are stringified and both fields are trimmed.
    pub fn parse(raw: &str) -> Result<Self, PostError> {
        let value: Value = serde_json::from_str(strip_code_fence(raw))?;
        let obj = value.as_object().ok_or(PostError::NotAnObject)?;
        let field = |key: &'static str| {
            obj.get(key)
                .map(|v| match v {
                    Value::String(s) => s.trim().to_string(),
                    other => other.to_string(),
                })
                .ok_or(PostError::MissingField(key))
        };
        Ok(Self {
            post_text: field("post_text")?,
            image_prompt: field("image_prompt")?,
        })
    }

    /// Short topic: the first non-empty line of the post, cut to at most
    /// `max_len` characters (ending in `...` when there is room for it).
    /// An empty post yields [`DEFAULT_TOPIC`].
    pub fn topic(&self, max_len: usize) -> String {
        let line = self
            .post_text
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .unwrap_or(DEFAULT_TOPIC);
        if line.chars().count() <= max_len {
            return line.to_string();
        }
        if max_len < 3 {
            return line.chars().take(max_len).collect();
        }
        let cut: String = line.chars().take(max_len - 3).collect();
        format!("{}...", cut.trim_end())
    }
}

/// Remove a leading ```` ``` ```` / ```` ```json ```` line and a trailing
/// ```` ``` ```` line, if present.
pub fn strip_code_fence(raw: &str) -> &str {
    let text = raw.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let body = match rest.find('\n') {
        Some(i) => &rest[i + 1..],
        None => return text,
    };
    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}
