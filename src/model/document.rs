//! Document-level types.

use super::CommentBlock;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The extracted documentation of one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Extraction metadata (source path, counts).
    pub metadata: Metadata,

    /// Comment blocks in order of appearance in the source text.
    pub blocks: Vec<CommentBlock>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            metadata: Metadata::default(),
            blocks: Vec::new(),
        }
    }

    /// Add a block to the document, keeping the metadata counts current.
    pub fn add_block(&mut self, block: CommentBlock) {
        self.metadata.block_count += 1;
        self.metadata.tag_count += block.tag_count();
        self.blocks.push(block);
    }

    /// Number of extracted blocks, tagged or not.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Total number of tags across all blocks.
    pub fn tag_count(&self) -> usize {
        self.blocks.iter().map(CommentBlock::tag_count).sum()
    }

    /// Blocks that carry at least one tag, in source order.
    ///
    /// Renderers iterate this: untagged blocks contribute no output.
    pub fn tagged_blocks(&self) -> impl Iterator<Item = &CommentBlock> {
        self.blocks.iter().filter(|b| b.has_tags())
    }

    /// Check if the document has any blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Extraction metadata.
///
/// Deliberately carries no timestamps: rendered output must be byte-identical
/// across runs on the same input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Path of the source file, when the document came from one.
    pub source: Option<PathBuf>,

    /// Number of comment blocks found.
    pub block_count: usize,

    /// Total number of tags found.
    pub tag_count: usize,
}
