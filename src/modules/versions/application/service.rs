use crate::modules::versions::domain::{MergedRecords, NameMapping, RecordMerger, VersionReducer};
use crate::modules::versions::infrastructure::persistence::{ChangeDetector, VersionsWriter};
use crate::modules::versions::traits::{DocumentFetcher, FetchedDocument};
use crate::shared::{
    config::SyncConfig,
    errors::{AppError, AppResult},
    utils::{LogContext, TimedOperation},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, warn};

/// How much of a bad names response is echoed into the log
const RESPONSE_PREFIX_CHARS: usize = 500;

/// Outcome of one sync run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    pub base_titles: usize,
    pub title_files: usize,
    pub changed: bool,
}

/// Runs the fetch -> merge -> reduce -> detect change -> write pipeline
pub struct VersionsService {
    fetcher: Arc<dyn DocumentFetcher>,
    config: SyncConfig,
}

impl VersionsService {
    pub fn new(fetcher: Arc<dyn DocumentFetcher>, config: SyncConfig) -> Self {
        Self { fetcher, config }
    }

    /// Rebuild both outputs. Files are written whether or not anything changed,
    /// but an empty merge leaves the previous outputs untouched.
    pub async fn update_versions(&self) -> AppResult<SyncReport> {
        let timer = TimedOperation::new("fetch title sources");
        let merged = match self.fetch_merged_records().await {
            Ok(merged) => merged,
            Err(e) => {
                if e.is_malformed_document() {
                    error!("Invalid JSON file!");
                }
                LogContext::error_with_context(&e, "Continuing without title records");
                MergedRecords::new()
            }
        };
        let names = self.fetch_name_mapping().await?;
        timer.finish_with_info(&format!("{} title ids, {} names", merged.len(), names.len()));

        if merged.is_empty() {
            warn!("No title records to process, keeping previous outputs");
            return Ok(SyncReport {
                base_titles: 0,
                title_files: 0,
                changed: false,
            });
        }

        let timer = TimedOperation::new("reduce versions");
        let aggregate = VersionReducer::reduce(&merged, &names)?;
        timer.finish_with_info(&format!("{} base titles", aggregate.len()));

        let changed = ChangeDetector::new(&self.config.json_path).has_changed(&aggregate)?;

        let timer = TimedOperation::new("write versions");
        let writer = VersionsWriter::from_config(&self.config);
        writer.write_aggregate(&aggregate)?;
        let title_files = writer.write_title_files(&aggregate)?;
        timer.finish();

        LogContext::sync_summary(aggregate.len(), title_files, changed);
        Ok(SyncReport {
            base_titles: aggregate.len(),
            title_files,
            changed,
        })
    }

    /// Content metadata merged over the explicit versions document
    pub async fn fetch_merged_records(&self) -> AppResult<MergedRecords> {
        let cnmts = self.fetcher.fetch(&self.config.cnmts_url).await?;
        let versions = self.fetcher.fetch(&self.config.versions_url).await?;

        let cnmts: Value = serde_json::from_str(&cnmts.body)?;
        let versions: Value = serde_json::from_str(&versions.body)?;
        RecordMerger::merge(cnmts, versions)
    }

    /// Names are required: a bad document is logged with context and returned as fatal
    pub async fn fetch_name_mapping(&self) -> AppResult<NameMapping> {
        let document = self.fetcher.fetch(&self.config.names_url).await?;

        serde_json::from_str::<Value>(&document.body)
            .map_err(AppError::from)
            .and_then(NameMapping::from_document)
            .map_err(|e| {
                for line in decode_failure_lines(&document, &e) {
                    error!("{}", line);
                }
                AppError::InvalidJson {
                    url: document.url.clone(),
                    status: document.status,
                    message: e.to_string(),
                }
            })
    }
}

/// Log lines describing a names document that could not be decoded
fn decode_failure_lines(document: &FetchedDocument, err: &AppError) -> [String; 3] {
    [
        format!("JSON decode error from {}: {}", document.url, err),
        format!("Response status: {}", document.status),
        format!(
            "Response (first {} chars): {}",
            RESPONSE_PREFIX_CHARS,
            document.body_prefix(RESPONSE_PREFIX_CHARS)
        ),
    ]
}
