use async_trait::async_trait;
use reqwest::header::ACCEPT;
use sourcewatch_application::ports::{ProbeResponse, SourceProber};
use sourcewatch_domain::{DataSource, DomainError};
use std::error::Error;
use std::sync::LazyLock;
use tracing::debug;

/// Shared HTTP client with connection pooling.
///
/// No client-level timeout: the health checker bounds each probe itself.
static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .use_rustls_tls()
        .pool_max_idle_per_host(4)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

const JSON_CONTENT_TYPE: &str = "application/json";

/// Probes data sources over HTTP(S) with a plain `GET`.
#[derive(Clone)]
pub struct HttpSourceProber {
    client: reqwest::Client,
}

impl HttpSourceProber {
    pub fn new() -> Self {
        Self {
            client: SHARED_CLIENT.clone(),
        }
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpSourceProber {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SourceProber for HttpSourceProber {
    async fn probe(&self, source: &DataSource) -> Result<ProbeResponse, DomainError> {
        debug!(source = %source.id, url = %source.url, "Sending probe");

        let response = self
            .client
            .get(&source.url)
            .header(ACCEPT, JSON_CONTENT_TYPE)
            .send()
            .await
            .map_err(|e| DomainError::Network(describe(&e)))?;

        let status = response.status();
        if !status.is_success() {
            return Ok(ProbeResponse::HttpError {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| DomainError::Network(describe(&e)))?;

        let body = serde_json::from_slice(&body).map_err(|e| {
            DomainError::InvalidResponse(format!("{} returned invalid JSON: {}", source.id, e))
        })?;

        debug!(source = %source.id, status = status.as_u16(), "Probe response parsed");

        Ok(ProbeResponse::Success { body })
    }
}

/// Flattens a reqwest error and its causes into one line.
fn describe(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
