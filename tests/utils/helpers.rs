use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use title_versions_lib::modules::versions::{DocumentFetcher, FetchedDocument, VersionsService};
use title_versions_lib::shared::{AppError, AppResult, SyncConfig};

pub const CNMTS_URL: &str = "https://titledb.test/cnmts.json";
pub const NAMES_URL: &str = "https://titledb.test/US.en.json";
pub const VERSIONS_URL: &str = "https://titledb.test/versions.json";

/// In-memory fetcher serving fixed bodies and recording request order
#[derive(Default)]
pub struct StaticFetcher {
    documents: HashMap<String, (u16, String)>,
    requests: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serve(mut self, url: &str, body: impl Into<String>) -> Self {
        self.documents.insert(url.to_string(), (200, body.into()));
        self
    }

    pub fn serve_status(mut self, url: &str, status: u16, body: impl Into<String>) -> Self {
        self.documents.insert(url.to_string(), (status, body.into()));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentFetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> AppResult<FetchedDocument> {
        self.requests.lock().unwrap().push(url.to_string());
        match self.documents.get(url) {
            Some((status, body)) => Ok(FetchedDocument::new(url, *status, body.clone())),
            None => Err(AppError::ExternalServiceError(format!(
                "Failed to connect to {}",
                url
            ))),
        }
    }
}

pub fn test_config(dir: &Path) -> SyncConfig {
    SyncConfig {
        cnmts_url: CNMTS_URL.to_string(),
        names_url: NAMES_URL.to_string(),
        versions_url: VERSIONS_URL.to_string(),
        json_path: dir.join("versions.json"),
        dir_path: dir.join("versions"),
    }
}

pub fn build_service(fetcher: Arc<StaticFetcher>, dir: &Path) -> VersionsService {
    VersionsService::new(fetcher, test_config(dir))
}

pub fn read_json(path: &Path) -> serde_json::Value {
    let raw = std::fs::read_to_string(path).expect("output file should exist");
    serde_json::from_str(&raw).expect("output file should be valid JSON")
}
