//! Turns a raw upstream reply body into one flat suggestion string.
//!
//! Upstream replies arrive either as a single JSON document or as an
//! SSE-style stream of `data:` lines. Both paths produce the same output
//! shape: the concatenation, in arrival order, of every choice's content.

use serde::Deserialize;

/// One decodable unit of an upstream reply: zero or more choices, each
/// carrying a full-turn `message`, an incremental `delta`, or neither.
/// Absent fields contribute nothing; they are never an error.
#[derive(Debug, Deserialize)]
struct Fragment {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceContent>,
    delta: Option<ChoiceContent>,
}

#[derive(Debug, Deserialize)]
struct ChoiceContent {
    content: Option<String>,
}

impl Choice {
    fn delta_content(&self) -> Option<&str> {
        self.delta.as_ref().and_then(|c| c.content.as_deref())
    }

    fn message_content(&self) -> Option<&str> {
        self.message.as_ref().and_then(|c| c.content.as_deref())
    }
}

/// Normalize a raw upstream body into a suggestion string.
///
/// A body starting with `data:` takes the streaming path; anything else
/// parses as a single JSON document. Only the non-streaming path can
/// fail: a malformed stream line is skipped, a malformed document is an
/// error.
pub fn normalize(raw: &str) -> Result<String, serde_json::Error> {
    if raw.starts_with("data:") {
        Ok(normalize_stream(raw))
    } else {
        normalize_document(raw)
    }
}

fn normalize_stream(raw: &str) -> String {
    let mut suggestion = String::new();
    for line in raw.lines() {
        let Some(payload) = line.strip_prefix("data: ") else {
            continue;
        };
        let payload = payload.trim();
        if payload == "[DONE]" {
            break;
        }
        match serde_json::from_str::<Fragment>(payload) {
            Ok(fragment) => {
                for choice in &fragment.choices {
                    // Streamed fragments carry tokens in `delta`; fall back
                    // to `message` for upstreams that send full turns.
                    if let Some(content) =
                        choice.delta_content().or_else(|| choice.message_content())
                    {
                        suggestion.push_str(content);
                    }
                }
            }
            Err(e) => {
                tracing::warn!("Skipping malformed stream line: {e}");
            }
        }
    }
    suggestion
}

fn normalize_document(raw: &str) -> Result<String, serde_json::Error> {
    let fragment: Fragment = serde_json::from_str(raw)?;
    let mut suggestion = String::new();
    for choice in &fragment.choices {
        if let Some(content) = choice.message_content().or_else(|| choice.delta_content()) {
            suggestion.push_str(content);
        }
    }
    Ok(suggestion)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_concatenates_deltas() {
        let raw = "data: {\"choices\":[{\"delta\":{\"content\":\"Hello\"}}]}\n\
                   data: {\"choices\":[{\"delta\":{\"content\":\" world\"}}]}\n\
                   data: [DONE]\n";
        assert_eq!(normalize(raw).unwrap(), "Hello world");
    }

    #[test]
    fn test_stream_stops_at_done() {
        let raw = "data: {\"choices\":[{\"delta\":{\"content\":\"kept\"}}]}\n\
                   data: [DONE]\n\
                   data: {\"choices\":[{\"delta\":{\"content\":\"dropped\"}}]}\n";
        assert_eq!(normalize(raw).unwrap(), "kept");
    }

    #[test]
    fn test_stream_skips_malformed_lines() {
        let raw = "data: {\"choices\":[{\"delta\":{\"content\":\"a\"}}]}\n\
                   data: {not json}\n\
                   data: {\"choices\":[{\"delta\":{\"content\":\"b\"}}]}\n\
                   data: [DONE]\n";
        assert_eq!(normalize(raw).unwrap(), "ab");
    }

    #[test]
    fn test_stream_prefers_delta_over_message() {
        let raw = "data: {\"choices\":[{\"delta\":{\"content\":\"d\"},\"message\":{\"content\":\"m\"}}]}\n\
                   data: [DONE]\n";
        assert_eq!(normalize(raw).unwrap(), "d");
    }

    #[test]
    fn test_stream_falls_back_to_message() {
        let raw = "data: {\"choices\":[{\"message\":{\"content\":\"full turn\"}}]}\n\
                   data: [DONE]\n";
        assert_eq!(normalize(raw).unwrap(), "full turn");
    }

    #[test]
    fn test_document_extracts_message_content() {
        let raw = r#"{"choices":[{"message":{"content":"e4 is strong"}}]}"#;
        assert_eq!(normalize(raw).unwrap(), "e4 is strong");
    }

    #[test]
    fn test_document_prefers_message_over_delta() {
        let raw = r#"{"choices":[{"message":{"content":"m"},"delta":{"content":"d"}}]}"#;
        assert_eq!(normalize(raw).unwrap(), "m");
    }

    #[test]
    fn test_document_concatenates_choices() {
        let raw = r#"{"choices":[{"message":{"content":"a"}},{"delta":{"content":"b"}}]}"#;
        assert_eq!(normalize(raw).unwrap(), "ab");
    }

    #[test]
    fn test_absent_fields_contribute_nothing() {
        let raw = r#"{"choices":[{"index":0},{"message":{}},{"message":{"content":"x"}}]}"#;
        assert_eq!(normalize(raw).unwrap(), "x");
    }

    #[test]
    fn test_document_without_choices_is_empty() {
        assert_eq!(normalize(r#"{"id":"cmpl-1"}"#).unwrap(), "");
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(normalize("not json at all").is_err());
    }

    #[test]
    fn test_data_prefix_always_selects_stream_path() {
        // Unparseable stream bodies normalize to empty rather than erroring.
        assert_eq!(normalize("data: {broken}\n").unwrap(), "");
        assert_eq!(normalize("data: [DONE]\n").unwrap(), "");
    }
}
