pub mod document_fetcher;

pub use document_fetcher::{HttpDocumentFetcher, BROWSER_USER_AGENT};
