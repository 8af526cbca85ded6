pub mod base_record;
pub mod name_mapping;
pub mod title_records;

pub use base_record::{BaseAggregate, BaseRecord, LATEST_KEY, TITLE_KEY};
pub use name_mapping::NameMapping;
pub use title_records::{MergedRecords, VersionEntries};
