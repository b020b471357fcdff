use async_trait::async_trait;
use serde_json::Value;
use sourcewatch_domain::{DataSource, DomainError};

/// What a remote endpoint answered.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeResponse {
    /// 2xx with a JSON body.
    Success { body: Value },
    /// Any status outside the success range; the body is not read.
    HttpError { status: u16, reason: String },
}

#[async_trait]
pub trait SourceProber: Send + Sync {
    /// Issues one `GET` against the source.
    ///
    /// Transport failures and unparseable bodies are returned as `Err`.
    async fn probe(&self, source: &DataSource) -> Result<ProbeResponse, DomainError>;
}
