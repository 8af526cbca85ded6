//! Per-base-title version record and the aggregate of all of them

use crate::modules::versions::domain::value_objects::BaseTitleId;
use crate::shared::errors::AppResult;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

pub const TITLE_KEY: &str = "title";
pub const LATEST_KEY: &str = "latest";

/// Versions known for one base title
///
/// Serializes as a flat object: `title` (when known), one `"<version>": "<BUILD_ID>"`
/// pair per resolved build, and `latest`. Keys come out sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseRecord {
    title: Option<String>,
    builds: BTreeMap<String, String>,
    latest: u64,
}

impl BaseRecord {
    pub fn new(title: Option<String>) -> Self {
        Self {
            title,
            builds: BTreeMap::new(),
            latest: 0,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }

    pub fn builds(&self) -> &BTreeMap<String, String> {
        &self.builds
    }

    pub fn build_id(&self, version: &str) -> Option<&str> {
        self.builds.get(version).map(String::as_str)
    }

    /// Record the build id for a version, replacing any earlier one
    pub fn insert_build(&mut self, version: String, build_id: String) {
        self.builds.insert(version, build_id);
    }

    pub fn set_latest(&mut self, latest: u64) {
        self.latest = latest;
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum RecordField<'a> {
    Text(&'a str),
    Number(u64),
}

impl Serialize for BaseRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Insertion order mirrors how the record is filled: title, builds, latest.
        // A build keyed like a reserved field therefore loses to `latest` but wins over `title`.
        let mut fields: BTreeMap<&str, RecordField<'_>> = BTreeMap::new();
        if let Some(title) = &self.title {
            fields.insert(TITLE_KEY, RecordField::Text(title));
        }
        for (version, build_id) in &self.builds {
            fields.insert(version.as_str(), RecordField::Text(build_id));
        }
        fields.insert(LATEST_KEY, RecordField::Number(self.latest));
        fields.serialize(serializer)
    }
}

/// All base records of a run, keyed and ordered by base title id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BaseAggregate {
    records: BTreeMap<BaseTitleId, BaseRecord>,
}

impl BaseAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record for `base`, created with `init` on first sight
    pub fn record_mut_or_insert_with<F>(&mut self, base: BaseTitleId, init: F) -> &mut BaseRecord
    where
        F: FnOnce(&BaseTitleId) -> BaseRecord,
    {
        self.records.entry(base).or_insert_with_key(|key| init(key))
    }

    pub fn get(&self, base: &str) -> Option<&BaseRecord> {
        self.records.get(base)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BaseTitleId, &BaseRecord)> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// JSON value of the aggregate as it is persisted
    pub fn to_json_value(&self) -> AppResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}
