//! Domain core: operations, envelope decoding, and execution.
//!
//! Nothing in this module depends on an HTTP client. Outbound traffic goes
//! through the [`ports::GraphQlTransport`] port, implemented by adapters in
//! `crate::outbound`.

pub mod catalogue;
mod envelope;
mod executor;
mod operation;
pub mod ports;
mod post;

pub use envelope::{EnvelopeDecodeError, GraphQlOutcome, decode_envelope};
pub use executor::{ExecuteError, OperationExecutor};
pub use operation::{EncodeError, Operation, WireRequest};
pub use post::Post;
