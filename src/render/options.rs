//! Rendering options and configuration.

/// Options for rendering document content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Document title, used for `<title>` and the top-level heading.
    pub title: String,

    /// CSS class on each block container element.
    pub container_class: String,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the container CSS class.
    pub fn with_container_class(mut self, class: impl Into<String>) -> Self {
        self.container_class = class.into();
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "Documentation".to_string(),
            container_class: "doc-block".to_string(),
        }
    }
}
