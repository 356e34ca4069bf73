//! Client settings loaded via OrthoConfig.
//!
//! Every field is optional; the accessors fall back to the defaults used by
//! the library, so an empty configuration targets the public demo endpoint.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Deserializer};
use url::Url;

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://graphqlzero.almansi.me/api";
const DEFAULT_POST_ID: &str = "1";

/// Settings for the HTTP transport and the `fetch-post` host.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "GRAPHQL_CLIENT")]
pub struct ClientSettings {
    /// GraphQL endpoint URL.
    pub endpoint: Option<String>,
    /// Whole-request timeout in seconds.
    #[ortho_config(default = 30)]
    pub timeout_seconds: u64,
    /// User agent sent with every request.
    pub user_agent: Option<String>,
    /// Post identifier fetched by the `fetch-post` host.
    #[serde(default, deserialize_with = "deserialize_post_id")]
    pub post_id: Option<String>,
}

/// Identifiers arrive as text from files and flags but as numbers from
/// environment variables such as `GRAPHQL_CLIENT_POST_ID=1`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPostId {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

fn deserialize_post_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawPostId>::deserialize(deserializer)?;
    Ok(raw.map(|id| match id {
        RawPostId::Text(text) => text,
        RawPostId::Unsigned(number) => number.to_string(),
        RawPostId::Signed(number) => number.to_string(),
    }))
}

impl ClientSettings {
    /// Return the configured endpoint, falling back to [`DEFAULT_ENDPOINT`].
    ///
    /// # Errors
    ///
    /// Returns the parse error when the configured endpoint is not a URL.
    pub fn endpoint(&self) -> Result<Url, url::ParseError> {
        Url::parse(self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT))
    }

    /// Return the request timeout, clamped to at least one second.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.max(1))
    }

    /// Return the configured user agent, if any.
    #[must_use]
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    /// Return the post identifier to fetch, falling back to `"1"`.
    #[must_use]
    pub fn post_id(&self) -> &str {
        self.post_id.as_deref().unwrap_or(DEFAULT_POST_ID)
    }
}
