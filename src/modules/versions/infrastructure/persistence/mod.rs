pub mod change_detector;
pub mod json_writer;

pub use change_detector::ChangeDetector;
pub use json_writer::{to_pretty_json, write_pretty_json, VersionsWriter};
