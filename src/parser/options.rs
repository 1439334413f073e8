//! Parsing options and configuration.

/// Options for extracting comment blocks from source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Token that opens a block comment.
    pub block_start: String,

    /// Token that closes a block comment.
    pub block_end: String,

    /// Character that introduces a tag line inside a block.
    pub tag_marker: char,

    /// Whether a marker followed by an invalid tag name is an error.
    ///
    /// Off by default: unmatched lines are silently skipped.
    pub strict: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults (`/* ... */` blocks, `@` tags).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the block comment delimiters.
    pub fn with_delimiters(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.block_start = start.into();
        self.block_end = end.into();
        self
    }

    /// Set the tag marker character.
    pub fn with_tag_marker(mut self, marker: char) -> Self {
        self.tag_marker = marker;
        self
    }

    /// Enable strict mode (malformed tag lines become errors).
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Enable lenient mode (skip malformed tag lines). This is the default.
    pub fn lenient(mut self) -> Self {
        self.strict = false;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            block_start: "/*".to_string(),
            block_end: "*/".to_string(),
            tag_marker: '@',
            strict: false,
        }
    }
}
