//! Comment block extraction.

mod extractor;
mod options;

pub use extractor::CommentExtractor;
pub use options::ParseOptions;
