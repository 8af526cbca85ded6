pub mod modules;
pub mod shared;

use modules::versions::{HttpDocumentFetcher, SyncReport, VersionsService};
use shared::{utils::init_logger, AppResult, SyncConfig};
use std::sync::Arc;
use tracing::info;

/// One full sync run with configuration taken from the environment
pub async fn run() -> AppResult<SyncReport> {
    // Load environment variables
    dotenvy::dotenv().ok();
    init_logger();

    let config = SyncConfig::from_env()?;
    info!(
        "Syncing versions into {} and {}",
        config.json_path.display(),
        config.dir_path.display()
    );

    let fetcher = Arc::new(HttpDocumentFetcher::new()?);
    VersionsService::new(fetcher, config).update_versions().await
}
