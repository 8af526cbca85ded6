use crate::shared::errors::{AppError, AppResult};
use serde_json::Value;
use std::collections::HashMap;

/// Title id -> display name, built once from the localized names document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameMapping {
    names: HashMap<String, String>,
}

impl NameMapping {
    /// Build from a names document: `{ "<any>": { "id": "...", "name": "..." }, ... }`
    ///
    /// Entries without a string `id` and a string `name` are skipped.
    /// Later entries win on duplicate ids.
    pub fn from_document(document: Value) -> AppResult<Self> {
        let Value::Object(entries) = document else {
            return Err(AppError::InvalidDocument(
                "names document is not a JSON object".to_string(),
            ));
        };

        let names = entries
            .into_iter()
            .filter_map(|(_, entry)| {
                let id = entry.get("id")?.as_str()?;
                let name = entry.get("name")?.as_str()?;
                Some((id.to_string(), name.to_string()))
            })
            .collect();

        Ok(Self { names })
    }

    pub fn get(&self, title_id: &str) -> Option<&str> {
        self.names.get(title_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for NameMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            names: iter
                .into_iter()
                .map(|(id, name)| (id.into(), name.into()))
                .collect(),
        }
    }
}
