use crate::modules::versions::domain::BaseAggregate;
use crate::shared::errors::{AppError, AppResult};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::info;

/// Compares a freshly reduced aggregate with the one persisted by the last run
pub struct ChangeDetector {
    json_path: PathBuf,
}

impl ChangeDetector {
    pub fn new(json_path: impl Into<PathBuf>) -> Self {
        Self {
            json_path: json_path.into(),
        }
    }

    /// True when no previous aggregate exists or it differs by JSON value.
    /// An unreadable or unparseable previous file is an error.
    pub fn has_changed(&self, aggregate: &BaseAggregate) -> AppResult<bool> {
        let previous = match self.load_previous()? {
            Some(previous) => previous,
            None => {
                info!("File doesn't exist");
                return Ok(true);
            }
        };

        if previous != aggregate.to_json_value()? {
            info!("{} changed", self.json_path.display());
            return Ok(true);
        }
        Ok(false)
    }

    fn load_previous(&self) -> AppResult<Option<Value>> {
        let raw = match fs::read_to_string(&self.json_path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(AppError::io(&self.json_path, e)),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }
}
