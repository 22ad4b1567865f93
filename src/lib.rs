//! elemtree: a minimal in-memory element tree rendered to markup
//!
//! This crate provides:
//! - Container elements with a tag name, ordered attributes and children
//! - Text elements rendered verbatim
//! - A lock-guarded handle for sharing a tree across threads
//!
//! Nothing is escaped and tag names are not validated.
//!
//! # Examples
//! ```
//! use elemtree::{Element, Render, Result};
//!
//! fn example() -> Result<()> {
//!     let mut div = Element::container("div");
//!     div.set_attribute("class", "x")?;
//!     div.append_child(Element::text("hi"))?;
//!     assert_eq!(div.render(), r#"<div class="x">hi</div>"#);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![forbid(unsafe_code)]

use tracing::{debug, instrument};

pub mod element;
pub mod error;
pub mod render;
pub mod shared;

// Re-exports
pub use element::{ContainerElement, Element, TextElement};
pub use error::{Error, Operation, Result};
pub use render::{Render, RenderConfig};
pub use shared::SharedElement;

/// Builds the welcome document: an outer element with a `class` attribute
/// wrapping an `h1` heading
#[instrument(level = "debug")]
pub fn welcome_document(tag_name: &str, class: &str, heading: &str) -> Element {
    let document = ContainerElement::new(tag_name)
        .with_attribute("class", class)
        .with_child(ContainerElement::new("h1").with_child(TextElement::new(heading)));

    debug!("welcome document built");
    document.into()
}
