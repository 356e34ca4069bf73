//! Executes typed operations through the transport port.
//!
//! One `execute` call owns its whole request/response lifecycle. The executor
//! keeps no per-call state, so a single instance can serve concurrent calls
//! without locking.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use super::envelope::{EnvelopeDecodeError, GraphQlOutcome, decode_envelope};
use super::operation::{EncodeError, Operation};
use super::ports::{GraphQlTransport, GraphQlTransportError};

/// Classified failure of one operation execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecuteError {
    /// Variables could not be serialised; nothing was sent.
    #[error(transparent)]
    Encode(#[from] EncodeError),
    /// The request failed before a response arrived.
    #[error(transparent)]
    Transport(#[from] GraphQlTransportError),
    /// The server answered with an empty body.
    #[error("graphql response contained no data")]
    EmptyResponse,
    /// The body was not a GraphQL envelope matching the output type.
    #[error(transparent)]
    Decode(#[from] EnvelopeDecodeError),
    /// The envelope decoded but held no usable root object.
    #[error("graphql server reported errors: [{}]", .messages.join("; "))]
    Server {
        /// Server-supplied messages in server order, possibly empty.
        messages: Vec<String>,
    },
}

impl ExecuteError {
    /// Return whether retrying the same operation might succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Runs operations against one GraphQL endpoint.
#[derive(Clone)]
pub struct OperationExecutor {
    transport: Arc<dyn GraphQlTransport>,
}

impl OperationExecutor {
    /// Build an executor over a transport adapter.
    #[must_use]
    pub fn new(transport: Arc<dyn GraphQlTransport>) -> Self {
        Self { transport }
    }

    /// Execute one operation and decode its root field into `Output`.
    ///
    /// Exactly one request is sent, and only when encoding succeeds. Nothing
    /// is retried.
    ///
    /// # Errors
    ///
    /// - [`ExecuteError::Encode`] when the variables do not serialise.
    /// - [`ExecuteError::Transport`] when the transport fails.
    /// - [`ExecuteError::EmptyResponse`] when the body is empty.
    /// - [`ExecuteError::Decode`] when the body is not a matching envelope.
    /// - [`ExecuteError::Server`] when the envelope has no root object.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let executor = OperationExecutor::new(Arc::new(transport));
    /// match executor.execute(&catalogue::fetch_post("1")).await {
    ///     Ok(post) => assert_eq!(post.id(), "1"),
    ///     Err(ExecuteError::Server { messages }) => eprintln!("{messages:?}"),
    ///     Err(other) => return Err(other.into()),
    /// }
    /// ```
    pub async fn execute<Input, Output>(
        &self,
        operation: &Operation<Input, Output>,
    ) -> Result<Output, ExecuteError>
    where
        Input: Serialize + Sync,
        Output: DeserializeOwned,
    {
        let request = operation.encode()?;
        debug!(body_bytes = request.body().len(), "sending graphql operation");

        let response = self.transport.send(&request).await?;
        debug!(
            status = response.status,
            body_bytes = response.body.len(),
            "received graphql response"
        );

        if response.body.trim_ascii().is_empty() {
            return Err(ExecuteError::EmptyResponse);
        }

        match decode_envelope::<Output>(&response.body)? {
            GraphQlOutcome::Success(object) => Ok(object),
            GraphQlOutcome::Failure(messages) => {
                warn!(
                    status = response.status,
                    messages = ?messages,
                    "graphql server returned no data"
                );
                Err(ExecuteError::Server { messages })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    //! Executor failure mapping with a mocked transport.

    use super::*;
    use crate::domain::catalogue::fetch_post;
    use crate::domain::ports::{GraphQlHttpResponse, MockGraphQlTransport};
    use crate::domain::{Post, WireRequest};
    use rstest::rstest;

    const POST_BODY: &str = r#"{"data":{"post":{"id":"1","title":"t","body":"b"}}}"#;

    fn reply(status: u16, body: &str) -> GraphQlHttpResponse {
        GraphQlHttpResponse {
            status,
            body: body.as_bytes().to_vec(),
        }
    }

    fn executor_replying(
        result: Result<GraphQlHttpResponse, GraphQlTransportError>,
    ) -> OperationExecutor {
        let mut transport = MockGraphQlTransport::new();
        transport
            .expect_send()
            .times(1)
            .return_once(move |_| result);
        OperationExecutor::new(Arc::new(transport))
    }

    #[tokio::test]
    async fn success_returns_root_object() {
        let executor = executor_replying(Ok(reply(200, POST_BODY)));
        let post = executor
            .execute(&fetch_post("1"))
            .await
            .expect("execution should succeed");
        assert_eq!(post.id(), "1");
        assert_eq!(post.title(), "t");
        assert_eq!(post.body(), "b");
    }

    #[tokio::test]
    async fn sends_the_encoded_operation() {
        let expected = fetch_post("9").encode().expect("fetch_post should encode");
        let mut transport = MockGraphQlTransport::new();
        transport
            .expect_send()
            .withf(move |request: &WireRequest| *request == expected)
            .times(1)
            .return_once(|_| Ok(reply(200, POST_BODY)));

        OperationExecutor::new(Arc::new(transport))
            .execute(&fetch_post("9"))
            .await
            .expect("execution should succeed");
    }

    #[rstest]
    #[case::connection(GraphQlTransportError::transport("connection refused"))]
    #[case::timeout(GraphQlTransportError::timeout("deadline elapsed"))]
    #[tokio::test]
    async fn transport_failure_is_surfaced_unchanged(#[case] failure: GraphQlTransportError) {
        let executor = executor_replying(Err(failure.clone()));
        let error = executor
            .execute(&fetch_post("1"))
            .await
            .expect_err("execution should fail");
        assert_eq!(error, ExecuteError::Transport(failure));
        assert!(error.is_retryable());
    }

    #[rstest]
    #[case::no_bytes("")]
    #[case::whitespace(" \r\n\t")]
    #[tokio::test]
    async fn empty_body_is_distinct_from_malformed_json(#[case] body: &str) {
        let executor = executor_replying(Ok(reply(200, body)));
        let error = executor
            .execute(&fetch_post("1"))
            .await
            .expect_err("execution should fail");
        assert_eq!(error, ExecuteError::EmptyResponse);
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let executor = executor_replying(Ok(reply(200, "<html>bad gateway</html>")));
        let error = executor
            .execute(&fetch_post("1"))
            .await
            .expect_err("execution should fail");
        assert!(matches!(error, ExecuteError::Decode(_)), "got {error:?}");
        assert!(!error.is_retryable());
    }

    #[rstest]
    #[case::errors_only(r#"{"errors":[{"message":"not found"}]}"#, &["not found"])]
    #[case::nothing(r#"{"data":null,"errors":null}"#, &[])]
    #[case::null_root(r#"{"data":{"post":null},"errors":[{"message":"a"},{"message":"b"}]}"#, &["a", "b"])]
    #[tokio::test]
    async fn envelope_failure_is_a_server_error(#[case] body: &str, #[case] expected: &[&str]) {
        let executor = executor_replying(Ok(reply(200, body)));
        let error = executor
            .execute(&fetch_post("1"))
            .await
            .expect_err("execution should fail");
        assert_eq!(
            error,
            ExecuteError::Server {
                messages: expected.iter().map(|message| (*message).to_owned()).collect(),
            }
        );
    }

    #[tokio::test]
    async fn error_status_with_envelope_is_still_decoded() {
        let executor = executor_replying(Ok(reply(
            400,
            r#"{"errors":[{"message":"Variable \"$id\" of required type \"ID!\" was not provided."}]}"#,
        )));
        let error = executor
            .execute(&fetch_post("1"))
            .await
            .expect_err("execution should fail");
        assert!(
            matches!(&error, ExecuteError::Server { messages } if messages.len() == 1),
            "got {error:?}"
        );
    }

    #[tokio::test]
    async fn encode_failure_sends_nothing() {
        struct RefusingVariables;

        impl Serialize for RefusingVariables {
            fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
                Err(serde::ser::Error::custom("variables refused"))
            }
        }

        let mut transport = MockGraphQlTransport::new();
        transport.expect_send().times(0);
        let executor = OperationExecutor::new(Arc::new(transport));

        let operation: Operation<_, Post> = Operation::new(RefusingVariables, "{ ping }");
        let error = executor
            .execute(&operation)
            .await
            .expect_err("execution should fail");
        assert!(matches!(error, ExecuteError::Encode(_)), "got {error:?}");
    }

    #[test]
    fn server_error_display_lists_messages() {
        let error = ExecuteError::Server {
            messages: vec!["one".to_owned(), "two".to_owned()],
        };
        assert_eq!(
            error.to_string(),
            "graphql server reported errors: [one; two]"
        );
    }
}
