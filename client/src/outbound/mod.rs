//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! Adapters are thin translators between domain types and transport
//! representations. They contain no decoding or classification logic.

pub mod graphql_http;
