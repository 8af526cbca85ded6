pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod traits;

// Re-exports for easy external access
pub use application::{SyncReport, VersionsService};
pub use domain::{BaseAggregate, BaseRecord, BaseTitleId, NameMapping};
pub use infrastructure::HttpDocumentFetcher;
pub use traits::{DocumentFetcher, FetchedDocument};
