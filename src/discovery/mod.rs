pub mod collector;
pub mod walker;

pub use collector::{Discovery, SkippedFile, TestCollector};
pub use walker::{is_test_file, walk_test_files};
