//! Static HTML rendering for extracted documentation.

use crate::error::Result;
use crate::model::Document;

use super::RenderOptions;

/// Convert a document to a complete HTML page.
///
/// Output is deterministic: the same document and options always produce the
/// same bytes. Blocks without tags are omitted entirely. Tag content is
/// emitted verbatim, without HTML escaping.
pub fn to_html(doc: &Document, options: &RenderOptions) -> Result<String> {
    Ok(HtmlRenderer::new(options).render(doc))
}

/// Renders a [`Document`] into the fixed HTML skeleton.
pub struct HtmlRenderer<'a> {
    options: &'a RenderOptions,
}

impl<'a> HtmlRenderer<'a> {
    /// Create a renderer with the given options.
    pub fn new(options: &'a RenderOptions) -> Self {
        Self { options }
    }

    /// Render the full page: doctype, head, heading, one container per
    /// tagged block.
    pub fn render(&self, doc: &Document) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str(&format!("<title>{}</title>\n", self.options.title));
        html.push_str("</head>\n<body>\n");
        html.push_str(&format!("<h1>{}</h1>\n", self.options.title));

        for block in doc.tagged_blocks() {
            html.push_str(&format!(
                "<div class='{}'>\n<ul>\n",
                self.options.container_class
            ));
            for tag in &block.tags {
                html.push_str(&format!(
                    "  <li><strong>{}:</strong> {}</li>\n",
                    tag.display_name(),
                    tag.content
                ));
            }
            html.push_str("</ul>\n</div>\n");
        }

        html.push_str("</body>\n</html>");
        html
    }
}
