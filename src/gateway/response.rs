//! Defensive response-shape probing.
//!
//! The gateway is a third-party service whose body schema is not under our
//! control, so the known shapes are probed in a fixed order and anything
//! unrecognizable degrades to a serialized or empty string — never an error.

use serde_json::Value;

/// The response shapes the gateway has been observed to return, in probe
/// order. `Unstructured` is the terminal fallback: the whole body,
/// re-serialized.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape {
    /// `candidates[0].content`
    Candidates(String),
    /// `output[0].content`
    Output(String),
    /// `outputs[0].content[0].text`, or `outputs[0].content` when it is a
    /// plain string
    Outputs(String),
    /// The body was not JSON, or was a bare JSON string.
    Raw(String),
    /// A JSON body matching none of the known shapes.
    Unstructured(Value),
}

impl ResponseShape {
    pub fn into_text(self) -> String {
        match self {
            Self::Candidates(text) | Self::Output(text) | Self::Outputs(text) | Self::Raw(text) => {
                text
            }
            Self::Unstructured(value) => value.to_string(),
        }
    }
}

/// Classify a raw response body into one of the known shapes.
pub fn classify(body: &str) -> ResponseShape {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => return ResponseShape::Raw(body.to_string()),
    };

    if let Some(text) = candidates_content(&value) {
        return ResponseShape::Candidates(text);
    }
    if let Some(text) = output_content(&value) {
        return ResponseShape::Output(text);
    }
    if let Some(text) = outputs_content(&value) {
        return ResponseShape::Outputs(text);
    }
    if let Value::String(text) = value {
        return ResponseShape::Raw(text);
    }
    ResponseShape::Unstructured(value)
}

/// Extract the generated text from a raw response body.
pub fn extract_text(body: &str) -> String {
    classify(body).into_text()
}

/// A non-empty `candidates` array claims the response outright: a first
/// element without a `content` field yields an empty string rather than
/// falling through to the later shapes.
fn candidates_content(value: &Value) -> Option<String> {
    let first = value.get("candidates")?.as_array()?.first()?;
    Some(
        first
            .get("content")
            .map(stringify_content)
            .unwrap_or_default(),
    )
}

fn output_content(value: &Value) -> Option<String> {
    let first = value.get("output")?.as_array()?.first()?;
    Some(stringify_content(first.get("content")?))
}

fn outputs_content(value: &Value) -> Option<String> {
    let content = value.get("outputs")?.as_array()?.first()?.get("content")?;
    if let Some(text) = content
        .as_array()
        .and_then(|items| items.first())
        .and_then(|item| item.get("text"))
        .and_then(Value::as_str)
    {
        return Some(text.to_string());
    }
    Some(stringify_content(content))
}

/// Content fields are usually strings; anything else is re-serialized so a
/// schema drift still yields something rather than nothing.
fn stringify_content(content: &Value) -> String {
    match content {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_shape_wins_first() {
        let body = r#"{"candidates":[{"content":"hello"}],"output":[{"content":"ignored"}]}"#;
        assert_eq!(classify(body), ResponseShape::Candidates("hello".into()));
        assert_eq!(extract_text(body), "hello");
    }

    #[test]
    fn empty_candidates_array_falls_through() {
        let body = r#"{"candidates":[],"output":[{"content":"from output"}]}"#;
        assert_eq!(extract_text(body), "from output");
    }

    #[test]
    fn nonempty_candidates_without_content_still_claims_the_response() {
        let body = r#"{"candidates":[{"role":"model"}],"output":[{"content":"not reached"}]}"#;
        assert_eq!(classify(body), ResponseShape::Candidates(String::new()));
        assert_eq!(extract_text(body), "");
    }

    #[test]
    fn output_shape() {
        let body = r#"{"output":[{"content":"generated"}]}"#;
        assert_eq!(classify(body), ResponseShape::Output("generated".into()));
    }

    #[test]
    fn outputs_shape_prefers_nested_text() {
        let body = r#"{"outputs":[{"content":[{"text":"nested"}]}]}"#;
        assert_eq!(classify(body), ResponseShape::Outputs("nested".into()));
    }

    #[test]
    fn outputs_shape_plain_string_content() {
        let body = r#"{"outputs":[{"content":"plain"}]}"#;
        assert_eq!(classify(body), ResponseShape::Outputs("plain".into()));
    }

    #[test]
    fn bare_json_string_is_raw() {
        let body = r#""just text""#;
        assert_eq!(classify(body), ResponseShape::Raw("just text".into()));
    }

    #[test]
    fn non_json_body_is_raw() {
        let body = "plain prose, not json";
        assert_eq!(classify(body), ResponseShape::Raw(body.into()));
    }

    #[test]
    fn unknown_object_serializes_whole_body() {
        let body = r#"{"something":"else"}"#;
        let shape = classify(body);
        assert!(matches!(shape, ResponseShape::Unstructured(_)));
        assert_eq!(shape.into_text(), r#"{"something":"else"}"#);
    }

    #[test]
    fn null_content_degrades_to_empty_string() {
        let body = r#"{"candidates":[{"content":null}]}"#;
        assert_eq!(extract_text(body), "");
    }
}
