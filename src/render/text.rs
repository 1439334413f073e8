//! Plain text rendering for extracted documentation.

use crate::error::Result;
use crate::model::Document;

use super::RenderOptions;

/// Convert a document to plain text.
///
/// One `Name: content` line per tag, a blank line between blocks. Untagged
/// blocks are omitted, same as the HTML renderer.
pub fn to_text(doc: &Document, _options: &RenderOptions) -> Result<String> {
    let sections: Vec<String> = doc
        .tagged_blocks()
        .map(|block| {
            block
                .tags
                .iter()
                .map(|tag| format!("{}: {}", tag.display_name(), tag.content))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect();

    Ok(sections.join("\n\n"))
}
