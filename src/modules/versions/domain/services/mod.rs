pub mod record_merger;
pub mod version_reducer;

pub use record_merger::RecordMerger;
pub use version_reducer::{
    extract_build_entry, extract_build_id, parse_version_key, version_label, VersionReducer,
};
