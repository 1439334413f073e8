//! # tagdoc
//!
//! Extract tagged comment blocks from source files into HTML documentation.
//!
//! This library scans source text for block comments (`/* ... */` by
//! default), pulls `@tag content` lines out of each one, and renders the
//! result as a static HTML page, plain text, or JSON.
//!
//! ## Quick Start
//!
//! ```no_run
//! use tagdoc::{parse_file, render};
//!
//! fn main() -> tagdoc::Result<()> {
//!     // Parse a source file
//!     let doc = parse_file("samba.h")?;
//!
//!     // Convert to HTML
//!     let options = render::RenderOptions::default();
//!     let html = render::to_html(&doc, &options)?;
//!     println!("{}", html);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Two-stage extraction**: block comments first, tag lines second, each
//!   stage usable and testable on its own
//! - **Multiple output formats**: HTML, plain text, JSON
//! - **Configurable markers**: block delimiters and tag marker are options,
//!   not constants
//! - **Lenient by default**: lines that do not parse as tags are skipped,
//!   untagged blocks are omitted from output; an opt-in strict mode rejects
//!   malformed tag lines
//! - **Deterministic output**: identical input always yields identical bytes

pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{CommentBlock, Document, Metadata, TagEntry};
pub use parser::{CommentExtractor, ParseOptions};
pub use render::{JsonFormat, RenderOptions};

use std::fs;
use std::path::{Path, PathBuf};

/// Parse a source file and return the extracted documentation.
///
/// # Example
///
/// ```no_run
/// use tagdoc::parse_file;
///
/// let doc = parse_file("samba.h").unwrap();
/// println!("Blocks: {}", doc.block_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    parse_file_with_options(path, ParseOptions::default())
}

/// Parse a source file with custom options.
///
/// A missing file is reported as [`Error::InputNotFound`]; any other read
/// failure surfaces as [`Error::Io`].
///
/// # Example
///
/// ```no_run
/// use tagdoc::{parse_file_with_options, ParseOptions};
///
/// let options = ParseOptions::new().with_tag_marker('\\');
/// let doc = parse_file_with_options("kernel.c", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::from_read(e, path))?;
    let mut doc = CommentExtractor::new(options).parse(&text)?;
    doc.metadata.source = Some(path.to_path_buf());
    Ok(doc)
}

/// Parse documentation out of a string.
///
/// # Example
///
/// ```
/// use tagdoc::parse_str;
///
/// let doc = parse_str("/* @param x the input */").unwrap();
/// assert_eq!(doc.tag_count(), 1);
/// ```
pub fn parse_str(text: &str) -> Result<Document> {
    CommentExtractor::default().parse(text)
}

/// Parse documentation out of a string with custom options.
pub fn parse_str_with_options(text: &str, options: ParseOptions) -> Result<Document> {
    CommentExtractor::new(options).parse(text)
}

/// Convert a source file straight to an HTML page at default options.
///
/// # Example
///
/// ```no_run
/// use tagdoc::to_html;
///
/// let html = to_html("samba.h").unwrap();
/// std::fs::write("documentation.html", html).unwrap();
/// ```
pub fn to_html<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_html(&doc, &RenderOptions::default())
}

/// Read `input`, extract its documentation, and write the HTML to `output`.
///
/// The output file is created or overwritten only after rendering has
/// completed in memory; a failed run leaves no partial output. Parent
/// directories of `output` are created as needed. Returns the output path.
pub fn generate<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<PathBuf> {
    generate_with_options(
        input,
        output,
        ParseOptions::default(),
        &RenderOptions::default(),
    )
}

/// [`generate`] with explicit parse and render options.
pub fn generate_with_options<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    parse_options: ParseOptions,
    render_options: &RenderOptions,
) -> Result<PathBuf> {
    let doc = parse_file_with_options(input, parse_options)?;
    let html = render::to_html(&doc, render_options)?;

    let output = output.as_ref();
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(output, html)?;
    Ok(output.to_path_buf())
}

/// Builder for extracting and rendering documentation.
///
/// # Example
///
/// ```no_run
/// use tagdoc::Tagdoc;
///
/// let html = Tagdoc::new()
///     .with_tag_marker('@')
///     .with_title("API Reference")
///     .parse("samba.h")?
///     .to_html()?;
/// # Ok::<(), tagdoc::Error>(())
/// ```
pub struct Tagdoc {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Tagdoc {
    /// Create a new Tagdoc builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Set the block comment delimiters.
    pub fn with_delimiters(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.parse_options = self.parse_options.with_delimiters(start, end);
        self
    }

    /// Set the tag marker character.
    pub fn with_tag_marker(mut self, marker: char) -> Self {
        self.parse_options = self.parse_options.with_tag_marker(marker);
        self
    }

    /// Enable strict mode (malformed tag lines become errors).
    pub fn strict(mut self) -> Self {
        self.parse_options = self.parse_options.strict();
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_title(title);
        self
    }

    /// Set the container CSS class.
    pub fn with_container_class(mut self, class: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_container_class(class);
        self
    }

    /// Parse a source file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<TagdocResult> {
        let document = parse_file_with_options(path, self.parse_options)?;
        Ok(TagdocResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse documentation out of a string.
    pub fn parse_str(self, text: &str) -> Result<TagdocResult> {
        let document = CommentExtractor::new(self.parse_options).parse(text)?;
        Ok(TagdocResult {
            document,
            render_options: self.render_options,
        })
    }
}

impl Default for Tagdoc {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a source file.
pub struct TagdocResult {
    /// The extracted document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl TagdocResult {
    /// Convert to HTML.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.document, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagdoc_builder() {
        let tagdoc = Tagdoc::new().strict().with_title("API Reference");

        assert!(tagdoc.parse_options.strict);
        assert_eq!(tagdoc.render_options.title, "API Reference");
    }

    #[test]
    fn test_tagdoc_builder_default() {
        let builder = Tagdoc::default();
        assert!(!builder.parse_options.strict);
        assert_eq!(builder.render_options.title, "Documentation");
    }

    #[test]
    fn test_tagdoc_builder_chained() {
        let builder = Tagdoc::new()
            .with_delimiters("(**", "*)")
            .with_tag_marker('#')
            .with_container_class("entry");

        assert_eq!(builder.parse_options.block_start, "(**");
        assert_eq!(builder.parse_options.tag_marker, '#');
        assert_eq!(builder.render_options.container_class, "entry");
    }

    #[test]
    fn test_parse_str_end_to_end() {
        let result = Tagdoc::new()
            .parse_str("/* @param x the input\n@return the output */")
            .unwrap();
        assert_eq!(result.document().tag_count(), 2);

        let html = result.to_html().unwrap();
        assert!(html.contains("<strong>Param:</strong> x the input"));
        assert!(html.contains("<strong>Return:</strong> the output"));
    }

    // ==================== Edge Case Tests ====================

    #[test]
    fn test_parse_str_no_delimiters() {
        let doc = parse_str("plain C code, no comments at all").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_parse_str_unterminated_block() {
        let doc = parse_str("/* @param x never closed").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_parse_str_empty_block() {
        let doc = parse_str("/**/").unwrap();
        assert_eq!(doc.block_count(), 1);
        assert_eq!(doc.tag_count(), 0);
    }

    #[test]
    fn test_parse_str_idempotent() {
        let input = "/* @param a one */\n/* @param b two */";
        let first = parse_str(input).unwrap();
        let second = parse_str(input).unwrap();
        assert_eq!(first, second);

        let options = RenderOptions::default();
        let html_a = render::to_html(&first, &options).unwrap();
        let html_b = render::to_html(&second, &options).unwrap();
        assert_eq!(html_a, html_b);
    }

    #[test]
    fn test_parse_file_missing_input() {
        let result = parse_file("definitely/not/here.h");
        assert!(matches!(result, Err(Error::InputNotFound(_))));
    }
}
