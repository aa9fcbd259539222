//! Opaque message payload.

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("payload is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("payload is empty")]
    Empty,
}

/// Message body as received from the producer.
///
/// The queue never looks inside. The raw JSON text is kept as-is (minus
/// surrounding whitespace) so consumers receive exactly what was sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(Box<RawValue>);

impl Payload {
    /// Take the first JSON value in `bytes`; anything after it is ignored.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, PayloadError> {
        let first = serde_json::Deserializer::from_slice(bytes)
            .into_iter::<Box<RawValue>>()
            .next()
            .ok_or(PayloadError::Empty)??;
        Ok(Self(first))
    }

    /// `text` must be exactly one JSON value.
    pub fn from_json(text: impl Into<String>) -> Result<Self, PayloadError> {
        Ok(Self(RawValue::from_string(text.into())?))
    }

    pub fn as_str(&self) -> &str {
        self.0.get()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.as_str().as_bytes()
    }
}

impl PartialEq for Payload {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Payload {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::object(r#"{"test":"test"}"#)]
    #[case::spaced_object(r#"{ "b" : 2,   "a": [1, 2.50, null] }"#)]
    #[case::string(r#""{\"test\": \"test\"}""#)]
    #[case::number("1.000")]
    #[case::null("null")]
    fn keeps_raw_text(#[case] text: &str) {
        let payload = Payload::from_slice(text.as_bytes()).unwrap();
        assert_eq!(payload.as_str(), text);
        assert_eq!(payload.as_bytes(), text.as_bytes());

        let serialized = serde_json::to_string(&payload).unwrap();
        assert_eq!(serialized, text);
    }

    #[rstest]
    #[case::empty("")]
    #[case::whitespace_only("  \n")]
    #[case::truncated(r#"{"test": "#)]
    #[case::bare_word("hello")]
    #[case::garbage_before_value(r#"x {"a":1}"#)]
    fn rejects_malformed_json(#[case] text: &str) {
        assert!(Payload::from_slice(text.as_bytes()).is_err());
        assert!(Payload::from_json(text).is_err());
    }

    #[rstest]
    #[case::trailing_word(r#"{"a":1} trailing"#, r#"{"a":1}"#)]
    #[case::second_value("1 2", "1")]
    #[case::two_objects(r#"{"a":1}{"b":2}"#, r#"{"a":1}"#)]
    #[case::leading_whitespace("\n  [true] ", "[true]")]
    fn from_slice_keeps_first_value(#[case] body: &str, #[case] expected: &str) {
        let payload = Payload::from_slice(body.as_bytes()).unwrap();
        assert_eq!(payload.as_str(), expected);
    }

    #[test]
    fn empty_body_reports_empty() {
        assert!(matches!(Payload::from_slice(b""), Err(PayloadError::Empty)));
        assert!(matches!(
            Payload::from_slice(b"{"),
            Err(PayloadError::InvalidJson(_))
        ));
    }

    #[test]
    fn from_json_rejects_trailing_content() {
        assert!(Payload::from_json("1 2").is_err());
        assert!(Payload::from_json(r#"{"a":1} trailing"#).is_err());
    }

    #[test]
    fn equality_is_textual() {
        let a = Payload::from_json(r#"{"a":1}"#).unwrap();
        let b = Payload::from_json(r#"{"a":1}"#).unwrap();
        let c = Payload::from_json(r#"{"a": 1}"#).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
