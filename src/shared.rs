//! Thread-shareable element handle
//!
//! [`Element`] is plain owned data; mutating one tree from several threads
//! needs a lock. [`SharedElement`] holds the node behind an `RwLock` so a
//! render never observes a half-applied mutation.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::element::Element;
use crate::error::Result;
use crate::render::{Render, RenderConfig};

#[derive(Clone, Debug)]
pub struct SharedElement {
    inner: Arc<RwLock<Element>>,
}

impl SharedElement {
    pub fn new(element: impl Into<Element>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(element.into())),
        }
    }

    pub fn set_attribute(
        &self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<()> {
        self.inner.write().set_attribute(name, value)
    }

    pub fn append_child(&self, child: impl Into<Element>) -> Result<()> {
        self.inner.write().append_child(child)
    }

    pub fn render(&self) -> String {
        self.inner.read().render()
    }

    pub fn render_with(&self, config: &RenderConfig) -> String {
        self.inner.read().render_with(config)
    }

    /// Owned copy of the current tree
    pub fn snapshot(&self) -> Element {
        self.inner.read().clone()
    }

    /// Unwraps the element when this is the last handle, otherwise clones it
    pub fn into_inner(self) -> Element {
        match Arc::try_unwrap(self.inner) {
            Ok(lock) => lock.into_inner(),
            Err(shared) => {
                let guard = shared.read();
                Element::clone(&guard)
            }
        }
    }

    /// True when both handles point at the same node
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl From<Element> for SharedElement {
    fn from(element: Element) -> Self {
        Self::new(element)
    }
}
