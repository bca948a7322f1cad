//! Shadow roots: private subtrees with their own style sheet.
//!
//! A component owns a [`ShadowRoot`] and mutates it freely. The page sees the
//! subtree only when it is composed into the host element for layout and
//! rendering. Composition marks the host as a shadow boundary, so the page's
//! sheet stops there, and the root's sheet is applied to its own children only.

use crate::element::{find_element, find_element_mut, Content, Element};
use crate::style_sheet::StyleSheet;

#[derive(Debug, Clone, Default)]
pub struct ShadowRoot {
    host_id: String,
    sheet: StyleSheet,
    children: Vec<Element>,
}

impl ShadowRoot {
    pub fn new(host_id: impl Into<String>) -> Self {
        Self {
            host_id: host_id.into(),
            sheet: StyleSheet::new(),
            children: Vec::new(),
        }
    }

    pub fn host_id(&self) -> &str {
        &self.host_id
    }

    /// Replace the root's style sheet.
    pub fn adopt_style_sheet(&mut self, sheet: StyleSheet) {
        self.sheet = sheet;
    }

    pub fn style_sheet(&self) -> &StyleSheet {
        &self.sheet
    }

    pub fn append_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Detach a top-level child by ID.
    pub fn remove_child(&mut self, id: &str) -> Option<Element> {
        let index = self.children.iter().position(|c| c.id == id)?;
        Some(self.children.remove(index))
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Find an element anywhere in the shadow tree.
    pub fn find(&self, id: &str) -> Option<&Element> {
        self.children.iter().find_map(|c| find_element(c, id))
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.children.iter_mut().find_map(|c| find_element_mut(c, id))
    }

    /// Build the host element as the page should render it.
    ///
    /// Light-DOM children of `host` are not rendered; there is no slotting.
    pub fn compose(&self, mut host: Element) -> Element {
        host.id = self.host_id.clone();
        host.shadow_host = true;
        host.content = Content::Children(self.children.clone());
        self.sheet.apply_within(&mut host);
        host
    }
}
