//! Document model types for extracted comment documentation.
//!
//! This module defines the intermediate representation that bridges comment
//! extraction and output rendering. The model is format-agnostic: the same
//! [`Document`] feeds the HTML, text, and JSON renderers.

mod block;
mod document;

pub use block::{CommentBlock, TagEntry};
pub use document::{Document, Metadata};
