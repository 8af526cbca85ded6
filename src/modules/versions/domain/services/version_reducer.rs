use crate::modules::versions::domain::entities::{
    BaseAggregate, BaseRecord, MergedRecords, NameMapping,
};
use crate::modules::versions::domain::value_objects::BaseTitleId;
use crate::shared::errors::{AppError, AppResult};
use serde_json::Value;

/// Build ids are truncated to this many characters before uppercasing
pub const BUILD_ID_LEN: usize = 16;

/// Reduces merged title records into one record per base title
pub struct VersionReducer;

impl VersionReducer {
    /// Group `merged` by base title id
    ///
    /// The title name is looked up once, when a base is first seen. `latest` is
    /// recomputed from zero for every title id and overwrites the value left by
    /// an earlier title id of the same base, so the last title id processed for
    /// a base decides its `latest`.
    pub fn reduce(merged: &MergedRecords, names: &NameMapping) -> AppResult<BaseAggregate> {
        let mut aggregate = BaseAggregate::new();

        for (tid, versions) in merged {
            let base = BaseTitleId::from_title_id(tid);
            let record = aggregate.record_mut_or_insert_with(base, |base| {
                BaseRecord::new(names.get(base.as_str()).map(str::to_string))
            });

            let mut latest = 0;
            for (ver, entry) in versions {
                if let Some((version, build_id)) = extract_build_entry(entry) {
                    record.insert_build(version, build_id);
                }
                latest = latest.max(parse_version_key(ver)?);
            }
            record.set_latest(latest);
        }

        Ok(aggregate)
    }
}

/// Uppercased first 16 characters of the first content entry's `buildId`
///
/// `None` when `contentEntries` is missing, not a list or empty, or when the
/// first entry has no string `buildId`.
pub fn extract_build_id(entry: &Value) -> Option<String> {
    let first = entry.get("contentEntries")?.as_array()?.first()?;
    let build_id = first.get("buildId")?.as_str()?;
    let truncated: String = build_id.chars().take(BUILD_ID_LEN).collect();
    Some(truncated.to_uppercase())
}

/// The entry's own `version` field as output key text
pub fn version_label(entry: &Value) -> Option<String> {
    match entry.get("version")? {
        Value::Number(number) => Some(number.to_string()),
        Value::String(text) => Some(text.clone()),
        _ => None,
    }
}

/// `(version, build_id)` pair to record for a version entry, if it resolves
pub fn extract_build_entry(entry: &Value) -> Option<(String, String)> {
    let build_id = extract_build_id(entry)?;
    let version = version_label(entry)?;
    Some((version, build_id))
}

/// Integer value of a version key. Surrounding whitespace, a sign, leading zeros and
/// single underscores between digits (`1_000`) are accepted. Negative values count as
/// zero; positive values must fit in a `u64`.
pub fn parse_version_key(ver: &str) -> AppResult<u64> {
    let trimmed = ver.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let well_formed = digits
        .split('_')
        .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()));
    if !well_formed {
        return Err(AppError::InvalidVersionKey(format!(
            "'{}' is not an integer",
            ver
        )));
    }
    if negative {
        return Ok(0);
    }

    digits.replace('_', "").parse().map_err(|e| {
        AppError::InvalidVersionKey(format!("'{}' is out of range: {}", ver, e))
    })
}
