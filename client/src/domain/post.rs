//! Blog post entity returned by the post queries.

use serde::Deserialize;

/// A post as returned by the server.
///
/// Posts only come from decoded responses, so there is no public
/// constructor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Post {
    id: String,
    title: String,
    body: String,
}

impl Post {
    /// Server-assigned identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Post title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Post body text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}
