pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::{
    BaseAggregate, BaseRecord, MergedRecords, NameMapping, VersionEntries, LATEST_KEY, TITLE_KEY,
};
pub use services::{RecordMerger, VersionReducer};
pub use value_objects::BaseTitleId;
