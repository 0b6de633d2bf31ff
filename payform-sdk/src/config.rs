//! Connection configuration for the order service.

use url::Url;

/// Process-wide connection settings for the order service.
///
/// Built once at startup from CLI arguments / environment and handed to the
/// order client at construction. There is no mid-session refresh; rotating
/// the token means rebuilding the client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Root URL of the order service.
    pub base_url: Url,
    /// Static bearer token attached to every request.
    pub token: String,
}

impl ApiConfig {
    /// Create a new `ApiConfig`.
    pub fn new(base_url: Url, token: impl Into<String>) -> Self {
        Self {
            base_url,
            token: token.into(),
        }
    }
}
