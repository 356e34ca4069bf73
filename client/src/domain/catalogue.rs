//! Named constructors for the operations this client knows how to run.
//!
//! Each factory is pure: it performs no I/O and returns the same operation
//! for the same arguments.

use serde::Serialize;

use super::{Operation, Post};

/// Document fetching one post by identifier.
pub const FETCH_POST_QUERY: &str = "query Post($id: ID!) {
  post(id: $id) {
    id
    title
    body
  }
}";

/// Variables for operations keyed by a single `ID!` argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdInput {
    /// Identifier bound to `$id`.
    pub id: String,
}

/// Build the operation that fetches one post by identifier.
///
/// ```
/// use graphql_client_core::domain::catalogue::{FETCH_POST_QUERY, fetch_post};
///
/// let operation = fetch_post("1");
/// assert_eq!(operation.input().id, "1");
/// assert_eq!(operation.operation_string(), FETCH_POST_QUERY);
/// ```
#[must_use]
pub fn fetch_post(id: impl Into<String>) -> Operation<IdInput, Post> {
    Operation::new(IdInput { id: id.into() }, FETCH_POST_QUERY)
}
