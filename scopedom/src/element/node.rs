use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::{Direction, Offset, Position, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub tag: &'static str,
    pub id: String,

    pub content: Content,

    // Box
    pub width: Option<u16>,
    pub min_width: Option<u16>,
    pub max_width: Option<u16>,

    // Positioning
    pub position: Position,
    pub top: Option<Offset>,
    pub left: Option<Offset>,
    /// `None` inherits the stacking level of the nearest ancestor that sets one.
    pub z_index: Option<i16>,

    // Flow
    pub direction: Direction,
    pub gap: u16,

    pub style: Style,

    // Interaction
    pub clickable: bool,
    /// Keyboard input goes to this element's text content instead of the host.
    pub captures_input: bool,

    /// Marks the boundary of a shadow root. Style sheets applied from outside
    /// stop here; the subtree below is styled only by its own sheet.
    pub shadow_host: bool,

    pub attributes: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            tag: "div",
            id: generate_id("el"),
            content: Content::None,
            width: None,
            min_width: None,
            max_width: None,
            position: Position::Static,
            top: None,
            left: None,
            z_index: None,
            direction: Direction::Column,
            gap: 0,
            style: Style::default(),
            clickable: false,
            captures_input: false,
            shadow_host: false,
            attributes: HashMap::new(),
        }
    }
}

impl Element {
    /// Create an empty element with the given tag.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            id: generate_id(tag),
            ..Default::default()
        }
    }

    pub fn text(tag: &'static str, content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::new(tag)
        }
    }

    pub fn row(tag: &'static str) -> Self {
        Self {
            direction: Direction::Row,
            ..Self::new(tag)
        }
    }

    /// Create a text input element with the cursor at the end of `value`.
    pub fn input(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            content: Content::Input {
                cursor: value.len(),
                value,
                placeholder: String::new(),
            },
            captures_input: true,
            ..Self::new("input")
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
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

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
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

    pub fn z_index(mut self, z_index: i16) -> Self {
        self.z_index = Some(z_index);
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn shadow_host(mut self, shadow_host: bool) -> Self {
        self.shadow_host = shadow_host;
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        if let Content::Input { placeholder, .. } = &mut self.content {
            *placeholder = text.into();
        }
        self
    }

    /// Set the cursor of an input element. Ignored for other content.
    pub fn cursor(mut self, position: usize) -> Self {
        if let Content::Input { value, cursor, .. } = &mut self.content {
            *cursor = position.min(value.len());
        }
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        for child in new_children {
            self.push_child(child);
        }
        self
    }

    /// Append a child, replacing any non-children content.
    pub fn push_child(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
    }

    /// Remove the direct child with the given ID.
    pub fn remove_child(&mut self, id: &str) -> Option<Element> {
        let Content::Children(children) = &mut self.content else {
            return None;
        };
        let index = children.iter().position(|c| c.id == id)?;
        Some(children.remove(index))
    }
}
