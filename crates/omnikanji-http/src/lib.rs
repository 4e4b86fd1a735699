use std::time::Duration;

use async_trait::async_trait;
use omnikanji_core::{Transport, TransportError};

const USER_AGENT: &str = concat!("omnikanji/", env!("CARGO_PKG_VERSION"));

/// `Transport` over a shared reqwest client
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        tracing::debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::Network {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| TransportError::Body {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        tracing::debug!("GET {url}: {} bytes", body.len());
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        let client = HttpClient::new(Duration::from_secs(2)).unwrap();

        // Port 9 (discard) on localhost is closed in test environments
        let err = client.fetch("http://127.0.0.1:9/kanji").await.unwrap_err();

        match err {
            TransportError::Network { url, .. } => assert_eq!(url, "http://127.0.0.1:9/kanji"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn malformed_url_is_a_network_error() {
        let client = HttpClient::new(Duration::from_secs(2)).unwrap();

        let err = client.fetch("not a url").await.unwrap_err();

        assert!(matches!(err, TransportError::Network { .. }));
    }
}
