//! HTTP transport for CloudStack API

use std::sync::Arc;
use std::time::Duration;

use url::Url;

use super::error::ApiError;
use super::params::Params;
use super::response::ResponseDecoder;
use super::signer::RequestSigner;

#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub request_timeout: Duration,
    pub connection_timeout: Duration,
    pub tcp_keepalive: Option<Duration>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            connection_timeout: Duration::from_secs(10),
            tcp_keepalive: Some(Duration::from_secs(30)),
        }
    }
}

impl TransportConfig {
    pub fn build_client(&self, insecure: bool) -> Result<reqwest::Client, reqwest::Error> {
        let mut builder = reqwest::Client::builder()
            .danger_accept_invalid_certs(insecure)
            .timeout(self.request_timeout)
            .connect_timeout(self.connection_timeout);

        if let Some(keepalive) = self.tcp_keepalive {
            builder = builder.tcp_keepalive(keepalive);
        }

        builder.build()
    }
}

/// Sends signed commands to the management server endpoint
pub(crate) struct Transport {
    http_client: reqwest::Client,
    base_url: Url,
    signer: Arc<dyn RequestSigner>,
    http_get_only: bool,
}

impl Transport {
    pub(crate) fn new(
        http_client: reqwest::Client,
        base_url: Url,
        signer: Arc<dyn RequestSigner>,
        http_get_only: bool,
    ) -> Self {
        Self {
            http_client,
            base_url,
            signer,
            http_get_only,
        }
    }

    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Send one command and return the raw body of a 2xx response.
    pub(crate) async fn send(
        &self,
        command: &str,
        mut params: Params,
        mutating: bool,
    ) -> Result<String, ApiError> {
        params.set("command", command);
        params.set("response", "json");
        self.signer.sign(&mut params)?;

        let use_post = mutating && !self.http_get_only;
        let method = if use_post { "POST" } else { "GET" };
        tracing::debug!(command, method, "Sending request to {}", self.base_url);

        let request = if use_post {
            self.http_client
                .post(self.base_url.clone())
                .form(&params.pairs())
        } else {
            self.http_client
                .get(self.base_url.clone())
                .query(&params.pairs())
        };

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(command, "Response status: {}", status);

        let text = response.text().await?;

        if status.is_success() {
            return Ok(text);
        }

        tracing::warn!(command, "API error response: {}", text);
        Err(ResponseDecoder::extract_error(status.as_u16(), &text))
    }
}
