use crate::modules::versions::domain::entities::{MergedRecords, VersionEntries};
use crate::shared::errors::{AppError, AppResult};
use serde_json::Value;
use tracing::warn;

/// Merges content metadata records with explicit version records
///
/// Both documents map title id -> version -> entry. For a title present in both,
/// the result is the shallow union of the two version maps with the primary
/// (content metadata) entries winning.
pub struct RecordMerger;

impl RecordMerger {
    /// Merge `primary` over `fallback`
    ///
    /// Result order: primary titles in document order, then titles only found in
    /// `fallback`. Within a title present in both, fallback versions come first,
    /// followed by versions only the primary has.
    pub fn merge(primary: Value, fallback: Value) -> AppResult<MergedRecords> {
        let primary = Self::into_titles(primary, "content metadata")?;
        let fallback = Self::into_titles(fallback, "versions")?;

        let mut merged: MergedRecords = primary
            .into_iter()
            .map(|(tid, value)| {
                let versions = Self::into_versions(&tid, value);
                (tid, versions)
            })
            .collect();

        for (tid, value) in fallback {
            let mut union = Self::into_versions(&tid, value);
            match merged.get_mut(&tid) {
                Some(existing) => {
                    for (version, entry) in std::mem::take(existing) {
                        union.insert(version, entry);
                    }
                    *existing = union;
                }
                None => {
                    merged.insert(tid, union);
                }
            }
        }

        Ok(merged)
    }

    fn into_titles(document: Value, source: &str) -> AppResult<serde_json::Map<String, Value>> {
        match document {
            Value::Object(titles) => Ok(titles),
            other => Err(AppError::InvalidDocument(format!(
                "{} document is not a JSON object (found {})",
                source,
                json_type_name(&other)
            ))),
        }
    }

    fn into_versions(tid: &str, value: Value) -> VersionEntries {
        match value {
            Value::Object(versions) => versions,
            other => {
                warn!(
                    "Title {} has no version map (found {}), treating as empty",
                    tid,
                    json_type_name(&other)
                );
                VersionEntries::new()
            }
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
