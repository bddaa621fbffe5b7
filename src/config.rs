pub const TEST_FILE_SUFFIX: &str = "_test.go";

pub const EXCLUDED_DIRS: &[&str] = &["testdata", "vendor"];

/// Directory name prefixes that `go test ./...` never descends into.
pub const IGNORED_DIR_PREFIXES: &[char] = &['.', '_'];

pub const TARGET_SUFFIX: &str = "/...";

pub const GO_COMMAND: &str = "go";
pub const GO_TEST_ARGS: &[&str] = &["test", "-v"];
pub const GO_RUN_FLAG: &str = "-run";

pub const DEFAULT_FINDER: &str = "fzf";

pub const FINDER_ENV: &str = "GOTEST_PICKER_FINDER";
pub const GO_ENV: &str = "GOTEST_PICKER_GO";

pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;
