//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod graphql_transport;

#[cfg(test)]
pub use graphql_transport::MockGraphQlTransport;
pub use graphql_transport::{GraphQlHttpResponse, GraphQlTransport, GraphQlTransportError};
