//! Typed GraphQL operations over HTTP.
//!
//! This crate turns a typed [`Operation`](domain::Operation) into a JSON wire
//! request, sends it through a [`GraphQlTransport`](domain::ports::GraphQlTransport)
//! port, and decodes the `{data, errors}` response envelope into either the
//! typed root object or a classified [`ExecuteError`](domain::ExecuteError).
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use graphql_client_core::domain::{OperationExecutor, catalogue};
//! use graphql_client_core::outbound::graphql_http::ReqwestGraphQlTransport;
//! use url::Url;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let endpoint = Url::parse("https://graphqlzero.almansi.me/api")?;
//! let transport = ReqwestGraphQlTransport::new(endpoint, Duration::from_secs(30))?;
//! let executor = OperationExecutor::new(Arc::new(transport));
//!
//! let post = executor.execute(&catalogue::fetch_post("1")).await?;
//! assert_eq!(post.id(), "1");
//! # Ok(())
//! # }
//! ```

pub mod domain;
pub mod outbound;
pub mod settings;
#[cfg(feature = "test-support")]
pub mod test_support;

pub use settings::ClientSettings;
