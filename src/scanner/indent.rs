/// gofmt indents with tabs; spaces are not counted.
pub const INDENT_UNIT: char = '\t';

/// Number of contiguous [`INDENT_UNIT`]s at the start of `line`.
pub fn count_indents(line: &str) -> usize {
    line.chars().take_while(|&c| c == INDENT_UNIT).count()
}
