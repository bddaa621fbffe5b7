mod formatter;

pub use formatter::{ListOutput, OutputFormatter};
