pub mod base_title_id;

pub use base_title_id::BaseTitleId;
