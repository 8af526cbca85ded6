//! Base title identifier derived from any title or update identifier

use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;

/// Number of leading title id characters shared by a base title and its updates
const BASE_PREFIX_LEN: usize = 13;
const BASE_SUFFIX: &str = "000";

/// Identifier that groups every update of a title under its base title
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct BaseTitleId(String);

impl BaseTitleId {
    /// Uppercased first 13 characters of `title_id` followed by `000`.
    /// Shorter ids are used whole.
    pub fn from_title_id(title_id: &str) -> Self {
        let prefix: String = title_id.chars().take(BASE_PREFIX_LEN).collect();
        Self(format!("{}{}", prefix.to_uppercase(), BASE_SUFFIX))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseTitleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BaseTitleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets keyed collections be queried with a plain `&str`
impl Borrow<str> for BaseTitleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
