//! Two-stage comment extraction: block bodies, then tag lines.

use log::{debug, trace};
use regex::Regex;

use super::ParseOptions;
use crate::error::{Error, Result};
use crate::model::{CommentBlock, Document, TagEntry};

/// Extracts tagged comment blocks from source text.
///
/// The two stages are independent and individually testable:
/// [`extract_blocks`](CommentExtractor::extract_blocks) finds block comment
/// bodies, [`extract_tags`](CommentExtractor::extract_tags) finds `@name
/// content` pairs inside one body. [`parse`](CommentExtractor::parse)
/// composes them into a [`Document`].
#[derive(Debug)]
pub struct CommentExtractor {
    options: ParseOptions,
    block_pattern: Regex,
    tag_pattern: Regex,
}

impl CommentExtractor {
    /// Create an extractor for the given options.
    ///
    /// Delimiters and the tag marker are regex-escaped, so any literal tokens
    /// are accepted; the compiled patterns cannot fail.
    pub fn new(options: ParseOptions) -> Self {
        let block_pattern = Regex::new(&format!(
            "{}([\\s\\S]*?){}",
            regex::escape(&options.block_start),
            regex::escape(&options.block_end),
        ))
        .unwrap();
        let tag_pattern = Regex::new(&format!(
            "{}(\\w+)\\s+(.*)",
            regex::escape(&options.tag_marker.to_string()),
        ))
        .unwrap();

        Self {
            options,
            block_pattern,
            tag_pattern,
        }
    }

    /// The options this extractor was built with.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Find all block comment bodies in `text`, in order of appearance.
    ///
    /// Matching is non-overlapping and non-greedy: each start delimiter pairs
    /// with the nearest following end delimiter, so blocks never nest. A start
    /// delimiter with no end delimiter after it yields nothing. An empty block
    /// yields an empty string.
    pub fn extract_blocks<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let blocks: Vec<&str> = self
            .block_pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .collect();
        debug!("extracted {} comment block(s)", blocks.len());
        blocks
    }

    /// Find all `{marker}name content` pairs in one block body, in order.
    ///
    /// Matching is not line-anchored: any non-overlapping occurrence counts.
    /// The name is `\w+`; the content runs to the end of the line. A marker
    /// not followed by a valid name produces no entry.
    pub fn extract_tags(&self, block: &str) -> Vec<TagEntry> {
        self.tag_pattern
            .captures_iter(block)
            .filter_map(|caps| match (caps.get(1), caps.get(2)) {
                (Some(name), Some(content)) => {
                    trace!("tag @{}", name.as_str());
                    Some(TagEntry::new(name.as_str(), content.as_str()))
                }
                _ => None,
            })
            .collect()
    }

    /// Run both stages over `text` and assemble a [`Document`].
    ///
    /// Never errors in lenient mode (the default). In strict mode, a tag
    /// marker that does not begin a valid tag and is not part of another
    /// tag's content is reported as [`Error::MalformedTag`].
    pub fn parse(&self, text: &str) -> Result<Document> {
        let mut doc = Document::new();
        for (index, raw) in self.extract_blocks(text).into_iter().enumerate() {
            let mut block = CommentBlock::new(raw);
            for tag in self.extract_tags(raw) {
                block.add_tag(tag);
            }
            if self.options.strict {
                self.check_strict(index, raw)?;
            }
            doc.add_block(block);
        }
        debug!(
            "parsed document: {} block(s), {} tag(s)",
            doc.block_count(),
            doc.tag_count()
        );
        Ok(doc)
    }

    /// Strict-mode validation for one block body.
    ///
    /// A marker occurrence is malformed when it neither starts a tag match
    /// nor falls inside one (markers inside another tag's content are fine).
    fn check_strict(&self, block_index: usize, raw: &str) -> Result<()> {
        let spans: Vec<(usize, usize)> = self
            .tag_pattern
            .find_iter(raw)
            .map(|m| (m.start(), m.end()))
            .collect();

        for (pos, _) in raw.match_indices(self.options.tag_marker) {
            let covered = spans.iter().any(|&(start, end)| pos >= start && pos < end);
            if !covered {
                let line = raw[..pos]
                    .rfind('\n')
                    .map(|i| &raw[i + 1..])
                    .unwrap_or(raw)
                    .lines()
                    .next()
                    .unwrap_or("")
                    .trim();
                return Err(Error::MalformedTag {
                    block: block_index,
                    line: line.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Default for CommentExtractor {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}
