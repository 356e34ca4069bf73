//! Driven port for delivering encoded GraphQL requests.
//!
//! The domain owns the request and response shapes so the executor stays
//! independent of any HTTP client.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::WireRequest;

/// Raw HTTP reply to one GraphQL request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GraphQlHttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body bytes; empty when the server sent none.
    pub body: Vec<u8>,
}

impl GraphQlHttpResponse {
    /// Return whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_success_status(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

define_port_error! {
    /// Errors surfaced before any response body was received.
    pub enum GraphQlTransportError {
        /// Connection, DNS, TLS, or I/O failure.
        Transport => "graphql transport failed: {message}",
        /// The request did not complete within the configured timeout.
        Timeout => "graphql request timed out: {message}",
    }
}

impl GraphQlTransportError {
    /// Return whether the failure was a timeout.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

/// Port for sending one encoded operation to the GraphQL endpoint.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GraphQlTransport: Send + Sync {
    /// POST `request` to the endpoint and return the raw reply.
    ///
    /// Implementations issue exactly one request per call and never retry.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use graphql_client_core::domain::catalogue::fetch_post;
    /// use graphql_client_core::domain::ports::GraphQlTransport;
    ///
    /// let request = fetch_post("1").encode()?;
    /// let response = transport.send(&request).await?;
    /// assert!(response.is_success_status());
    /// ```
    async fn send(
        &self,
        request: &WireRequest,
    ) -> Result<GraphQlHttpResponse, GraphQlTransportError>;
}
