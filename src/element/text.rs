use crate::render::{Render, RenderConfig};

/// Leaf node holding literal text
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TextElement {
    text: String,
}

impl TextElement {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl Render for TextElement {
    /// Text is written verbatim; markup characters are not escaped
    fn render_into(&self, output: &mut String, _config: &RenderConfig) {
        output.push_str(&self.text);
    }
}
