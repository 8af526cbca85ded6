use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Version number (text) -> version entry, in source document order
pub type VersionEntries = Map<String, Value>;

/// Title id -> version entries, in merge order
pub type MergedRecords = IndexMap<String, VersionEntries>;
