pub mod http;
pub mod persistence;

// Re-export commonly used types
pub use http::HttpDocumentFetcher;
pub use persistence::{ChangeDetector, VersionsWriter};
