pub mod service;

pub use service::{SyncReport, VersionsService};
