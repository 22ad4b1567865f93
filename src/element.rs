//! Element tree nodes
//!
//! An [`Element`] is either a tagged [`ContainerElement`] or a leaf
//! [`TextElement`]. Containers own their children; `append_child` moves the
//! child in, so a node can never sit under two parents.

mod container;
mod text;

pub use container::ContainerElement;
pub use text::TextElement;

use indexmap::IndexMap;
use std::fmt;
use tracing::warn;

use crate::error::{Error, Operation, Result};
use crate::render::{Render, RenderConfig};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Element {
    Container(ContainerElement),
    Text(TextElement),
}

impl Element {
    pub fn container(tag_name: impl Into<String>) -> Self {
        Self::Container(ContainerElement::new(tag_name))
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(TextElement::new(text))
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Self::Container(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Tag name of a container, `None` for text
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Self::Container(element) => Some(element.tag_name()),
            Self::Text(_) => None,
        }
    }

    pub fn attributes(&self) -> Option<&IndexMap<String, String>> {
        match self {
            Self::Container(element) => Some(element.attributes()),
            Self::Text(_) => None,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            Self::Container(element) => element.attribute(name),
            Self::Text(_) => None,
        }
    }

    /// Children of a container; always empty for text
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Container(element) => element.children(),
            Self::Text(_) => &[],
        }
    }

    /// Inserts or overwrites an attribute.
    ///
    /// Text nodes carry no attributes and return
    /// [`Error::UnsupportedOperation`], leaving the node unchanged.
    pub fn set_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<()> {
        match self {
            Self::Container(element) => {
                element.set_attribute(name, value);
                Ok(())
            }
            Self::Text(_) => {
                let name: String = name.into();
                warn!(%name, "rejected attribute on text node");
                Err(Error::unsupported(Operation::SetAttribute))
            }
        }
    }

    /// Appends `child` after the existing children.
    ///
    /// Text nodes cannot hold children and return
    /// [`Error::UnsupportedOperation`]; the rejected child is dropped.
    pub fn append_child(&mut self, child: impl Into<Self>) -> Result<()> {
        match self {
            Self::Container(element) => {
                element.append_child(child);
                Ok(())
            }
            Self::Text(_) => {
                warn!("rejected child on text node");
                Err(Error::unsupported(Operation::AppendChild))
            }
        }
    }
}

impl Render for Element {
    fn render_into(&self, output: &mut String, config: &RenderConfig) {
        match self {
            Self::Container(element) => element.render_into(output, config),
            Self::Text(element) => element.render_into(output, config),
        }
    }
}

impl From<ContainerElement> for Element {
    fn from(element: ContainerElement) -> Self {
        Self::Container(element)
    }
}

impl From<TextElement> for Element {
    fn from(element: TextElement) -> Self {
        Self::Text(element)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_with_attribute() -> Result<()> {
        let mut div = Element::container("div");
        div.set_attribute("class", "x")?;
        div.append_child(Element::text("hi"))?;
        assert_eq!(div.render(), r#"<div class="x">hi</div>"#);
        Ok(())
    }

    #[test]
    fn test_text_rejects_mutation() {
        let mut text = Element::text("plain");

        let err = text.set_attribute("class", "x");
        assert_eq!(err, Err(Error::unsupported(Operation::SetAttribute)));

        let err = text.append_child(Element::text("more"));
        assert_eq!(err, Err(Error::unsupported(Operation::AppendChild)));

        assert_eq!(text.render(), "plain");
        assert!(text.children().is_empty());
    }

    #[test]
    fn test_accessors() -> Result<()> {
        let mut li = Element::container("li");
        li.set_attribute("id", "first")?;
        li.append_child(TextElement::new("A"))?;

        assert!(li.is_container());
        assert_eq!(li.tag_name(), Some("li"));
        assert_eq!(li.attribute("id"), Some("first"));
        assert_eq!(li.attribute("missing"), None);
        assert_eq!(li.children(), &[Element::text("A")]);

        let text = Element::text("A");
        assert!(text.is_text());
        assert_eq!(text.tag_name(), None);
        assert_eq!(text.attributes(), None);
        Ok(())
    }

    #[test]
    fn test_display_matches_render() -> Result<()> {
        let mut ul = Element::container("ul");
        ul.append_child(ContainerElement::new("li").with_child(TextElement::new("A")))?;
        assert_eq!(ul.to_string(), ul.render());
        assert_eq!(format!("{ul}"), "<ul ><li >A</li></ul>");
        Ok(())
    }
}
