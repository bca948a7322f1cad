//! Tag-based style sheets.
//!
//! A sheet is an ordered list of rules; later rules win. Applying a sheet walks
//! the tree and stops at shadow hosts, so a sheet never reaches into another
//! component's private subtree.

use crate::element::{Content, Element};
use crate::types::{Offset, Position, Rgb};

/// A descendant-combinator selector such as `"ul"` or `"li img"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    compounds: Vec<String>,
}

impl Selector {
    pub fn parse(source: &str) -> Self {
        Self {
            compounds: source.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// `ancestors` lists tags from the styling root down to the parent.
    pub fn matches(&self, tag: &str, ancestors: &[&str]) -> bool {
        let Some((last, rest)) = self.compounds.split_last() else {
            return false;
        };
        if last != tag {
            return false;
        }

        // Right-to-left, each remaining compound must appear further up.
        let mut remaining = ancestors;
        for compound in rest.iter().rev() {
            match remaining.iter().rposition(|a| a == compound) {
                Some(index) => remaining = &remaining[..index],
                None => return false,
            }
        }
        true
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Declarations {
    pub position: Option<Position>,
    pub top: Option<Offset>,
    pub left: Option<Offset>,
    pub width: Option<u16>,
    pub min_width: Option<u16>,
    pub max_width: Option<u16>,
    pub z_index: Option<i16>,
    pub foreground: Option<Rgb>,
    pub background: Option<Rgb>,
    pub bold: Option<bool>,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn top(mut self, top: Offset) -> Self {
        self.top = Some(top);
        self
    }

    pub fn left(mut self, left: Offset) -> Self {
        self.left = Some(left);
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn min_width(mut self, min_width: u16) -> Self {
        self.min_width = Some(min_width);
        self
    }

    pub fn max_width(mut self, max_width: u16) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn z_index(mut self, z_index: i16) -> Self {
        self.z_index = Some(z_index);
        self
    }

    pub fn foreground(mut self, color: Rgb) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn background(mut self, color: Rgb) -> Self {
        self.background = Some(color);
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    fn apply_to(&self, element: &mut Element) {
        if let Some(position) = self.position {
            element.position = position;
        }
        if let Some(top) = self.top {
            element.top = Some(top);
        }
        if let Some(left) = self.left {
            element.left = Some(left);
        }
        if let Some(width) = self.width {
            element.width = Some(width);
        }
        if let Some(min_width) = self.min_width {
            element.min_width = Some(min_width);
        }
        if let Some(max_width) = self.max_width {
            element.max_width = Some(max_width);
        }
        if let Some(z_index) = self.z_index {
            element.z_index = Some(z_index);
        }
        if let Some(fg) = self.foreground {
            element.style.foreground = Some(fg);
        }
        if let Some(bg) = self.background {
            element.style.background = Some(bg);
        }
        if let Some(bold) = self.bold {
            element.style.text_style.bold = bold;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub selector: Selector,
    pub declarations: Declarations,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    rules: Vec<Rule>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, selector: &str, declarations: Declarations) -> Self {
        self.rules.push(Rule {
            selector: Selector::parse(selector),
            declarations,
        });
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply the sheet to `root` and its light-tree descendants.
    pub fn apply(&self, root: &mut Element) {
        if self.rules.is_empty() {
            return;
        }
        let mut ancestors = Vec::new();
        self.apply_element(root, &mut ancestors);
    }

    /// Apply the sheet to the children of `host` only. Used by shadow roots,
    /// whose rules must not match the host element itself.
    pub fn apply_within(&self, host: &mut Element) {
        if self.rules.is_empty() {
            return;
        }
        let mut ancestors = Vec::new();
        if let Content::Children(children) = &mut host.content {
            for child in children {
                self.apply_element(child, &mut ancestors);
            }
        }
    }

    fn apply_element(&self, element: &mut Element, ancestors: &mut Vec<&'static str>) {
        for rule in &self.rules {
            if rule.selector.matches(element.tag, ancestors) {
                rule.declarations.apply_to(element);
            }
        }

        if element.shadow_host {
            return;
        }

        if let Content::Children(children) = &mut element.content {
            ancestors.push(element.tag);
            for child in children {
                self.apply_element(child, ancestors);
            }
            ancestors.pop();
        }
    }
}
