use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Raw response of a document fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedDocument {
    pub url: String,
    /// HTTP status; kept for diagnostics only, non-2xx is not an error by itself
    pub status: u16,
    pub body: String,
}

impl FetchedDocument {
    pub fn new(url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status,
            body: body.into(),
        }
    }

    /// First `max_chars` characters of the body, for error reports
    pub fn body_prefix(&self, max_chars: usize) -> String {
        self.body.chars().take(max_chars).collect()
    }
}

#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// GET `url` and return its body. Transport failures are errors; HTTP
    /// status codes are reported, not interpreted.
    async fn fetch(&self, url: &str) -> AppResult<FetchedDocument>;
}
