use crate::modules::versions::traits::{DocumentFetcher, FetchedDocument};
use crate::shared::{
    errors::{AppError, AppResult},
    utils::LogContext,
};
use async_trait::async_trait;
use reqwest::Client;

/// titledb's raw GitHub mirror is fetched with a regular browser user agent
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Plain GET fetcher: no timeout, no retry, status codes passed through
pub struct HttpDocumentFetcher {
    client: Client,
}

impl HttpDocumentFetcher {
    pub fn new() -> AppResult<Self> {
        Self::with_user_agent(BROWSER_USER_AGENT)
    }

    pub fn with_user_agent(user_agent: &str) -> AppResult<Self> {
        Ok(Self {
            client: Self::create_http_client(user_agent)?,
        })
    }

    fn create_http_client(user_agent: &str) -> AppResult<Client> {
        Client::builder().user_agent(user_agent).build().map_err(|e| {
            AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e))
        })
    }
}

#[async_trait]
impl DocumentFetcher for HttpDocumentFetcher {
    async fn fetch(&self, url: &str) -> AppResult<FetchedDocument> {
        LogContext::fetch(url, None, None);

        let response =
            self.client.get(url).send().await.map_err(|e| {
                AppError::ExternalServiceError(format!("HTTP request failed: {}", e))
            })?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        LogContext::fetch(url, Some(status), Some(body.len()));
        Ok(FetchedDocument::new(url, status, body))
    }
}
