use std::time::Duration;

use url::Url;

use crate::error::Result;

/// Public Humanity API endpoint
pub const DEFAULT_BASE_URL: &str = "https://www.humanity.com/api/";

/// Value sent in the `origin` header on every request
pub const DEFAULT_ORIGIN: &str = "https://www.humanity.com";

/// Endpoint settings for a [`HumanityClient`](crate::HumanityClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// URL every envelope is POSTed to
    pub base_url: Url,

    /// `origin` header value
    pub origin: String,

    /// Overall request timeout. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Config pointing at `base_url`, keeping the default origin.
    pub fn with_base_url(base_url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            base_url: Url::parse(base_url.as_ref())?,
            ..Self::default()
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            origin: DEFAULT_ORIGIN.to_string(),
            timeout: None,
        }
    }
}
