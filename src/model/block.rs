//! Comment block and tag entry types.

use serde::{Deserialize, Serialize};

/// One `@name content` annotation extracted from a comment block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagEntry {
    /// Tag name as written, identifier characters only (`\w+`).
    pub name: String,

    /// Everything from the first non-whitespace after the name to end of line.
    pub content: String,
}

impl TagEntry {
    /// Create a new tag entry.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// The tag name with only its first character uppercased, for display.
    ///
    /// `param` becomes `Param`; `RETURNVALUE` stays `RETURNVALUE`. The
    /// remainder of the name is never touched.
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// The inner text of one block comment, with its extracted tags.
///
/// Blocks appear in the order they occur in the source text; tags appear in
/// the order they occur within the block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentBlock {
    /// Raw inner text between the block delimiters.
    pub raw: String,

    /// Tags extracted from the block, in source order.
    pub tags: Vec<TagEntry>,
}

impl CommentBlock {
    /// Create a block from its raw inner text, with no tags yet.
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            tags: Vec::new(),
        }
    }

    /// Add a tag entry to the block.
    pub fn add_tag(&mut self, tag: TagEntry) {
        self.tags.push(tag);
    }

    /// Whether the block contains at least one recognized tag.
    ///
    /// Untagged blocks are carried in the model but contribute nothing to
    /// rendered output.
    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }

    /// Number of tags in the block.
    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }
}
