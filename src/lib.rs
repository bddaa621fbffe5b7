//! gotest-picker
//!
//! Finds Go tests and `t.Run` subtests by scanning `_test.go` files line by
//! line, turns each into an anchored `go test -run` selector, and hands the
//! list to a fuzzy finder so one can be picked and run.

pub mod app;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod output;
pub mod runner;
pub mod scanner;
pub mod select;

pub use discovery::{Discovery, TestCollector};
pub use error::{Error, Result};
pub use scanner::TestScanner;
