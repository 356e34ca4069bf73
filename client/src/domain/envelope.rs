//! Decoding of the GraphQL `{data, errors}` response envelope.
//!
//! Bytes are decoded into transport DTOs first, then normalised into a
//! [`GraphQlOutcome`] in one pass. Only the first root field inside `data`
//! is consumed: servers return one key per requested root field, and every
//! operation in this crate requests exactly one. With several keys the first
//! in `serde_json` map order is used, which is deterministic but carries no
//! further meaning.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

/// Normalised outcome of one GraphQL response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphQlOutcome<T> {
    /// The root field decoded into `T`. Any accompanying errors are dropped.
    Success(T),
    /// No usable root object. Carries server error messages in server order,
    /// possibly none.
    Failure(Vec<String>),
}

impl<T> GraphQlOutcome<T> {
    /// Return whether the response produced a root object.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Raised when a response body is not a GraphQL envelope whose root field
/// matches the expected type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("graphql response decode failed: {message}")]
pub struct EnvelopeDecodeError {
    /// Parser or shape mismatch description.
    pub message: String,
}

impl EnvelopeDecodeError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct EnvelopeDto {
    #[serde(default)]
    data: Option<Map<String, Value>>,
    #[serde(default)]
    errors: Option<Vec<ErrorDto>>,
}

#[derive(Debug, Deserialize)]
struct ErrorDto {
    message: String,
}

impl EnvelopeDto {
    fn into_outcome<T: DeserializeOwned>(self) -> Result<GraphQlOutcome<T>, EnvelopeDecodeError> {
        if let Some(object) = self.data.map(first_root_object::<T>).transpose()?.flatten() {
            return Ok(GraphQlOutcome::Success(object));
        }

        let messages = self
            .errors
            .unwrap_or_default()
            .into_iter()
            .map(|error| error.message)
            .collect();
        Ok(GraphQlOutcome::Failure(messages))
    }
}

fn first_root_object<T: DeserializeOwned>(
    data: Map<String, Value>,
) -> Result<Option<T>, EnvelopeDecodeError> {
    let Some((field, value)) = data.into_iter().next() else {
        return Ok(None);
    };
    if value.is_null() {
        return Ok(None);
    }
    serde_json::from_value(value).map(Some).map_err(|error| {
        EnvelopeDecodeError::new(format!(
            "root field `{field}` does not match the expected shape: {error}"
        ))
    })
}

/// Decode a raw response body into a typed outcome.
///
/// # Errors
///
/// Returns [`EnvelopeDecodeError`] when the body is not a JSON object, when
/// `data` or `errors` have the wrong shape, or when the root field cannot be
/// decoded into `T`. These are never folded into
/// [`GraphQlOutcome::Failure`].
///
/// # Examples
///
/// ```
/// use graphql_client_core::domain::{GraphQlOutcome, decode_envelope};
///
/// let outcome = decode_envelope::<String>(br#"{"errors":[{"message":"not found"}]}"#)
///     .expect("valid envelope");
/// assert_eq!(outcome, GraphQlOutcome::Failure(vec!["not found".to_owned()]));
/// ```
pub fn decode_envelope<T: DeserializeOwned>(
    body: &[u8],
) -> Result<GraphQlOutcome<T>, EnvelopeDecodeError> {
    // Parse as a map first so a top-level array cannot fill the DTO positionally.
    let raw: Map<String, Value> = serde_json::from_slice(body).map_err(|error| {
        EnvelopeDecodeError::new(format!("invalid GraphQL JSON payload: {error}"))
    })?;
    let envelope: EnvelopeDto = serde_json::from_value(Value::Object(raw))
        .map_err(|error| EnvelopeDecodeError::new(format!("invalid GraphQL envelope: {error}")))?;
    envelope.into_outcome()
}
