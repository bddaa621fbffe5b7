use regex::Regex;

/// `func TestXxx(t *testing.T) {`
const DECLARATION_PATTERN: &str = r"func (Test.+)\(t \*testing.T\) \{";

/// `t.Run("name", func(t *testing.T) {`
const SUBTEST_PATTERN: &str = r#"t.Run\("(.+)", func\(t \*testing.T\) \{"#;

/// What a single source line opens, if anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMatch<'a> {
    /// A top-level test function with its declared name.
    Declaration(&'a str),
    /// A `t.Run` call with its raw display name.
    Subtest(&'a str),
}

/// The two line recognizers used by the scanner.
///
/// Compiled once and handed to [`TestScanner`](super::TestScanner); matching
/// is purely line-local and never looks at neighbouring lines.
#[derive(Debug, Clone)]
pub struct TestPatterns {
    declaration: Regex,
    subtest: Regex,
}

impl TestPatterns {
    pub fn new() -> Self {
        Self {
            declaration: Regex::new(DECLARATION_PATTERN).expect("static regex must compile"),
            subtest: Regex::new(SUBTEST_PATTERN).expect("static regex must compile"),
        }
    }

    /// Declarations win over subtests when a line happens to match both.
    pub fn match_line<'a>(&self, line: &'a str) -> Option<LineMatch<'a>> {
        if let Some(name) = first_capture(&self.declaration, line) {
            return Some(LineMatch::Declaration(name));
        }
        first_capture(&self.subtest, line).map(LineMatch::Subtest)
    }
}

impl Default for TestPatterns {
    fn default() -> Self {
        Self::new()
    }
}

fn first_capture<'a>(re: &Regex, line: &'a str) -> Option<&'a str> {
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
