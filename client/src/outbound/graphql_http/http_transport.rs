//! Reqwest-backed GraphQL transport adapter.
//!
//! This adapter owns transport details only: the endpoint, request headers,
//! timeout, and transport error mapping. Response bodies are handed back
//! untouched; envelope decoding belongs to the domain.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::WireRequest;
use crate::domain::ports::{GraphQlHttpResponse, GraphQlTransport, GraphQlTransportError};

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("graphql-client-core/", env!("CARGO_PKG_VERSION"));

/// GraphQL transport that POSTs every request to one fixed endpoint.
///
/// The inner reqwest client is shared by all calls; cloning the adapter
/// shares its connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestGraphQlTransport {
    client: Client,
    endpoint: Url,
    user_agent: String,
}

impl ReqwestGraphQlTransport {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    /// ```rust,ignore
    /// let transport = ReqwestGraphQlTransport::new(endpoint, Duration::from_secs(30))?;
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_user_agent(endpoint, timeout, DEFAULT_USER_AGENT)
    }

    /// Build an adapter that identifies itself with `user_agent`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_user_agent(
        endpoint: Url,
        timeout: Duration,
        user_agent: impl Into<String>,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            user_agent: user_agent.into(),
        })
    }

    /// Endpoint every request is sent to.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl GraphQlTransport for ReqwestGraphQlTransport {
    async fn send(
        &self,
        request: &WireRequest,
    ) -> Result<GraphQlHttpResponse, GraphQlTransportError> {
        debug!(endpoint = %self.endpoint, "posting graphql request");
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, WireRequest::CONTENT_TYPE)
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, self.user_agent.as_str())
            .body(request.body().to_vec())
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            warn!(
                status = status.as_u16(),
                reply = %reply_summary(body.as_ref()),
                "graphql endpoint returned non-success status"
            );
        }

        Ok(GraphQlHttpResponse {
            status: status.as_u16(),
            body: body.to_vec(),
        })
    }
}

fn map_transport_error(error: reqwest::Error) -> GraphQlTransportError {
    let detail = error.to_string();
    if error.is_timeout() {
        return GraphQlTransportError::timeout(detail);
    }
    if error.is_connect() {
        return GraphQlTransportError::transport(format!("cannot connect to endpoint: {detail}"));
    }
    GraphQlTransportError::transport(detail)
}

const SUMMARY_CHAR_LIMIT: usize = 160;

/// Summarise a non-success reply for logging.
///
/// GraphQL envelopes are reduced to their error messages; anything else is
/// shown as whitespace-collapsed text, cut at `SUMMARY_CHAR_LIMIT` chars.
fn reply_summary(body: &[u8]) -> String {
    let messages = serde_json::from_slice::<Value>(body)
        .ok()
        .as_ref()
        .and_then(|value| value.get("errors"))
        .and_then(Value::as_array)
        .map(|errors| {
            errors
                .iter()
                .filter_map(|error| error.get("message").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .join("; ")
        })
        .filter(|joined| !joined.is_empty());
    let text = messages.map_or_else(
        || {
            String::from_utf8_lossy(body)
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        },
        |joined| format!("graphql errors: {joined}"),
    );
    let mut chars = text.chars();
    let head = chars.by_ref().take(SUMMARY_CHAR_LIMIT).collect::<String>();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network helpers.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::collapses_whitespace(b"<html>\n  <body>502</body>\n</html>".as_slice(), "<html> <body>502</body> </html>")]
    #[case::empty(b"".as_slice(), "")]
    #[case::invalid_utf8(b"bad \xff byte".as_slice(), "bad \u{fffd} byte")]
    #[case::envelope_messages(
        br#"{"errors":[{"message":"bad id"},{"message":"denied"}]}"#.as_slice(),
        "graphql errors: bad id; denied"
    )]
    #[case::envelope_without_messages(br#"{"errors":[]}"#.as_slice(), r#"{"errors":[]}"#)]
    fn replies_are_summarised(#[case] body: &[u8], #[case] expected: &str) {
        assert_eq!(reply_summary(body), expected);
    }

    #[test]
    fn long_summaries_are_truncated() {
        let body = "\u{e9}".repeat(500);
        let summary = reply_summary(body.as_bytes());
        assert_eq!(summary.chars().count(), SUMMARY_CHAR_LIMIT + 3);
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn adapter_keeps_configured_endpoint() {
        let endpoint = Url::parse("https://graphql.example.test/api").expect("valid URL");
        let transport = ReqwestGraphQlTransport::new(endpoint.clone(), Duration::from_secs(5))
            .expect("client should build");
        assert_eq!(transport.endpoint(), &endpoint);
        assert_eq!(transport.user_agent, DEFAULT_USER_AGENT);
    }
}
