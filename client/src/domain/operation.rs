//! Typed GraphQL operations and their JSON wire encoding.

use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;
use thiserror::Error;

/// Raised when operation variables cannot be serialised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to encode operation variables: {message}")]
pub struct EncodeError {
    /// Serialiser failure description.
    pub message: String,
}

/// One GraphQL query or mutation: literal document text plus variables.
///
/// `Output` is the type the root field decodes into. The document is not
/// parsed or validated; keeping it consistent with `Input` and `Output` is
/// the caller's contract.
pub struct Operation<Input, Output> {
    input: Input,
    operation_string: String,
    output: PhantomData<fn() -> Output>,
}

impl<Input, Output> Operation<Input, Output> {
    /// Build an operation from its variables and document text.
    #[must_use]
    pub fn new(input: Input, operation_string: impl Into<String>) -> Self {
        Self {
            input,
            operation_string: operation_string.into(),
            output: PhantomData,
        }
    }

    /// Variables sent alongside the document.
    #[must_use]
    pub const fn input(&self) -> &Input {
        &self.input
    }

    /// Literal GraphQL document text.
    #[must_use]
    pub fn operation_string(&self) -> &str {
        &self.operation_string
    }
}

impl<Input: Serialize, Output> Operation<Input, Output> {
    /// Serialise the operation into its wire request.
    ///
    /// The body is a JSON object with exactly two keys: `variables` and
    /// `query`. The query text is embedded verbatim as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] when `Input` fails to serialise.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphql_client_core::domain::Operation;
    /// use serde_json::json;
    ///
    /// let operation: Operation<_, ()> = Operation::new(json!({"id": "7"}), "{ ping }");
    /// let request = operation.encode().expect("encodes");
    /// let body: serde_json::Value = serde_json::from_slice(request.body()).expect("json");
    /// assert_eq!(body, json!({"variables": {"id": "7"}, "query": "{ ping }"}));
    /// ```
    pub fn encode(&self) -> Result<WireRequest, EncodeError> {
        let body = serde_json::to_vec(&WireBody {
            variables: &self.input,
            query: &self.operation_string,
        })
        .map_err(|error| EncodeError {
            message: error.to_string(),
        })?;
        Ok(WireRequest { body })
    }
}

impl<Input: Clone, Output> Clone for Operation<Input, Output> {
    fn clone(&self) -> Self {
        Self {
            input: self.input.clone(),
            operation_string: self.operation_string.clone(),
            output: PhantomData,
        }
    }
}

impl<Input: PartialEq, Output> PartialEq for Operation<Input, Output> {
    fn eq(&self, other: &Self) -> bool {
        self.input == other.input && self.operation_string == other.operation_string
    }
}

impl<Input: fmt::Debug, Output> fmt::Debug for Operation<Input, Output> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("input", &self.input)
            .field("operation_string", &self.operation_string)
            .finish()
    }
}

#[derive(Serialize)]
struct WireBody<'a, Input> {
    variables: &'a Input,
    query: &'a str,
}

/// Encoded HTTP request for one operation.
///
/// Always sent as `POST` with `Content-Type: application/json`; the target
/// endpoint belongs to the transport adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireRequest {
    body: Vec<u8>,
}

impl WireRequest {
    /// HTTP method used for every GraphQL request.
    pub const METHOD: &'static str = "POST";
    /// Content type of the encoded body.
    pub const CONTENT_TYPE: &'static str = "application/json";

    /// Encoded JSON body.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Consume the request, returning the encoded body.
    #[must_use]
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}
