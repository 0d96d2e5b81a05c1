use crate::client::core::PredictionClient;
use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::{Error, Result};
use reqwest::Proxy;

/// Builder for [`PredictionClient`].
///
/// Keep this surface area small: no retry, timeout or cancellation knobs.
/// Requests run until the transport's own defaults end them.
pub struct PredictionClientBuilder {
    base_url: Option<String>,
    proxy_url: Option<String>,
    user_agent: Option<String>,
    http_client: Option<reqwest::Client>,
}

impl PredictionClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            proxy_url: None,
            user_agent: None,
            http_client: None,
        }
    }

    /// Start from a loaded configuration.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            base_url: Some(config.base_url.clone()),
            proxy_url: config.proxy_url.clone(),
            user_agent: Some(config.user_agent.clone()),
            http_client: None,
        }
    }

    /// Base URL of the prediction service. Defaults to `http://localhost:5000`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn proxy_url(mut self, url: impl Into<String>) -> Self {
        self.proxy_url = Some(url.into());
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Use a preconfigured HTTP client. Proxy and user agent settings are then ignored.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> Result<PredictionClient> {
        let base_url = self
            .base_url
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let user_agent = self
                    .user_agent
                    .unwrap_or_else(|| ClientConfig::default().user_agent);
                let mut builder = reqwest::Client::builder().user_agent(user_agent);
                if let Some(proxy_url) = &self.proxy_url {
                    match Proxy::all(proxy_url.as_str()) {
                        Ok(proxy) => builder = builder.proxy(proxy),
                        Err(e) => {
                            tracing::warn!(proxy = %proxy_url, error = %e, "ignoring invalid proxy URL")
                        }
                    }
                }
                builder.build().map_err(|e| {
                    Error::configuration(format!("Failed to create HTTP client: {}", e))
                })?
            }
        };

        Ok(PredictionClient::from_parts(http_client, base_url))
    }
}

impl Default for PredictionClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
