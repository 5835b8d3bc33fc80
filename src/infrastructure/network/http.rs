// HTTP transport backed by reqwest
use crate::domain::error::DictionaryError;
use crate::domain::traits::{HttpResponse, HttpTransport};
use crate::infrastructure::config::Config;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Build the HTTP client from config.
///
/// Without `timeout_secs` reqwest's own defaults apply.
pub fn create_client(config: &Config) -> Result<Client, DictionaryError> {
    let mut builder = Client::builder().user_agent(config.user_agent.as_str());

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    if let Some(proxy) = config.http_proxy.as_deref().filter(|p| !p.is_empty()) {
        let proxy = reqwest::Proxy::all(proxy)
            .map_err(|e| DictionaryError::Config(format!("Invalid http_proxy: {}", e)))?;
        builder = builder.proxy(proxy);
    }

    builder.build().map_err(DictionaryError::Transport)
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_config(config: &Config) -> Result<Self, DictionaryError> {
        Ok(Self::new(create_client(config)?))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<HttpResponse, DictionaryError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(DictionaryError::Transport)?;

        let status = response.status().as_u16();
        // `bytes` consumes the response, so the connection is released whether
        // draining succeeds or not.
        let body = response.bytes().await.map_err(DictionaryError::Read)?;

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}
