/// A position within a source document.
///
/// Both `line` and `col` are 1-based: the first character of a document is at
/// `1:1`. Columns count characters, not bytes.
///
/// This is a pure data struct with no mutation methods; the
/// [`Lexer`](crate::Lexer) is responsible for computing position values as it
/// scans input.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SourcePosition {
    line: usize,
    col: usize,
}

impl SourcePosition {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    /// The 1-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// The 1-based column number (in characters).
    pub fn col(&self) -> usize {
        self.col
    }
}

impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}
