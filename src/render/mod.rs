//! Rendering module for converting documents to various output formats.

mod html;
mod json;
mod options;
mod text;

pub use html::{to_html, HtmlRenderer};
pub use json::{to_json, JsonFormat};
pub use options::RenderOptions;
pub use text::to_text;
