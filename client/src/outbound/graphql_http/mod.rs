//! GraphQL HTTP outbound adapters.
//!
//! This module provides the reqwest implementation of the
//! `GraphQlTransport` port.

mod http_transport;

pub use http_transport::{DEFAULT_USER_AGENT, ReqwestGraphQlTransport};
