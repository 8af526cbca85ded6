//! JSON document builders shaped like the titledb sources

use serde_json::{json, Map, Value};

/// Content metadata / versions style document: title id -> version -> entry
#[derive(Default)]
pub struct TitleDocument {
    titles: Map<String, Value>,
}

impl TitleDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Version entry with a build id in its first content entry
    pub fn with_build(mut self, tid: &str, version: u64, build_id: &str) -> Self {
        self.insert(
            tid,
            version,
            json!({
                "version": version,
                "contentEntries": [{ "buildId": build_id, "type": 1 }]
            }),
        );
        self
    }

    /// Version entry with no content entries at all
    pub fn with_empty_entries(mut self, tid: &str, version: u64) -> Self {
        self.insert(tid, version, json!({ "version": version, "contentEntries": [] }));
        self
    }

    /// Version entry as the versions source usually carries it (no build data)
    pub fn with_bare_version(mut self, tid: &str, version: u64) -> Self {
        self.insert(tid, version, json!({ "version": version }));
        self
    }

    fn insert(&mut self, tid: &str, version: u64, entry: Value) {
        let versions = self
            .titles
            .entry(tid.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(versions) = versions {
            versions.insert(version.to_string(), entry);
        }
    }

    pub fn to_body(&self) -> String {
        Value::Object(self.titles.clone()).to_string()
    }
}

/// Localized names document: nsuId -> { id, name }
pub fn names_body(entries: &[(&str, &str)]) -> String {
    let document: Map<String, Value> = entries
        .iter()
        .enumerate()
        .map(|(i, (id, name))| {
            (
                format!("7001000000{:04}", i),
                json!({ "id": id, "name": name, "region": "US" }),
            )
        })
        .collect();
    Value::Object(document).to_string()
}
