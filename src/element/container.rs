use indexmap::IndexMap;
use tracing::trace;

use super::Element;
use crate::render::{Render, RenderConfig};

/// Tagged node with attributes and ordered children
#[derive(Clone, Debug)]
pub struct ContainerElement {
    tag_name: String,
    attributes: IndexMap<String, String>,
    children: Vec<Element>,
}

impl ContainerElement {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Inserts or overwrites `name`. An overwritten attribute keeps its
    /// original position.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        trace!(tag = %self.tag_name, %name, %value, "set attribute");
        self.attributes.insert(name, value);
    }

    pub fn append_child(&mut self, child: impl Into<Element>) {
        self.children.push(child.into());
        trace!(
            tag = %self.tag_name,
            children = self.children.len(),
            "appended child"
        );
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_child(mut self, child: impl Into<Element>) -> Self {
        self.append_child(child);
        self
    }

    fn render_attributes(&self, output: &mut String) {
        for (index, (name, value)) in self.attributes.iter().enumerate() {
            if index > 0 {
                output.push(' ');
            }
            output.push_str(name);
            output.push_str("=\"");
            output.push_str(value);
            output.push('"');
        }
    }
}

/// Attribute order is part of the rendered output, so it takes part in
/// equality too
impl PartialEq for ContainerElement {
    fn eq(&self, other: &Self) -> bool {
        self.tag_name == other.tag_name
            && self.attributes.iter().eq(other.attributes.iter())
            && self.children == other.children
    }
}

impl Eq for ContainerElement {}

impl Render for ContainerElement {
    fn render_into(&self, output: &mut String, config: &RenderConfig) {
        output.push('<');
        output.push_str(&self.tag_name);
        if !self.attributes.is_empty() || config.space_before_empty_attributes {
            output.push(' ');
        }
        self.render_attributes(output);
        output.push('>');

        for child in &self.children {
            child.render_into(output, config);
        }

        output.push_str("</");
        output.push_str(&self.tag_name);
        output.push('>');
    }
}
