/// Configuration options for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Emit the space between the tag name and `>` even when a container has
    /// no attributes (`<div ></div>`)
    pub space_before_empty_attributes: bool,
}

/// Default configuration keeps the separator space
impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            space_before_empty_attributes: true,
        }
    }
}

impl RenderConfig {
    /// Configuration that drops the separator space on attribute-less tags
    pub fn compact() -> Self {
        Self {
            space_before_empty_attributes: false,
        }
    }
}

/// Trait for producing the markup of a node and its subtree
pub trait Render {
    /// Appends the markup for `self` to `output`.
    ///
    /// Containers recurse once per nesting level, so stack use grows with
    /// tree depth.
    fn render_into(&self, output: &mut String, config: &RenderConfig);

    fn render_with(&self, config: &RenderConfig) -> String {
        let mut output = String::new();
        self.render_into(&mut output, config);
        output
    }

    fn render(&self) -> String {
        self.render_with(&RenderConfig::default())
    }
}
