mod rect;

pub use rect::Rect;

use std::collections::HashMap;

use crate::element::{Content, Element};
use crate::text::{display_width, to_cells};
use crate::types::{Direction, Position};

/// Computed rectangles keyed by element ID.
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    rects: HashMap<String, Rect>,
}

impl LayoutResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: String, rect: Rect) {
        self.rects.insert(id, rect);
    }

    pub fn get(&self, id: &str) -> Option<&Rect> {
        self.rects.get(id)
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

/// Lay out `root` inside `available`. Nothing is placed outside `available`.
pub fn layout(root: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    let (_, height) = measure(root);
    let rect = Rect::new(
        available.x,
        available.y,
        root.width.map_or(available.width, |w| w.min(available.width)),
        height.min(available.height),
    );
    place(root, rect, available, &mut result);
    result
}

/// Intrinsic (width, height) of an element including in-flow children.
pub fn measure(element: &Element) -> (u16, u16) {
    let (content_width, height) = match &element.content {
        Content::None => (0, 0),
        Content::Text(text) => (to_cells(display_width(text)), 1),
        Content::Input {
            value, placeholder, ..
        } => {
            let shown = if value.is_empty() { placeholder } else { value };
            // One extra cell for the cursor.
            (to_cells(display_width(shown)).saturating_add(1), 1)
        }
        Content::Children(children) => {
            let mut in_flow = children
                .iter()
                .filter(|c| c.position == Position::Static)
                .map(measure)
                .peekable();
            if in_flow.peek().is_none() {
                (0, 0)
            } else {
                let sizes: Vec<(u16, u16)> = in_flow.collect();
                let gaps = element.gap.saturating_mul(to_cells(sizes.len() - 1));
                match element.direction {
                    Direction::Column => (
                        sizes.iter().map(|s| s.0).max().unwrap_or(0),
                        sizes.iter().map(|s| s.1).fold(gaps, u16::saturating_add),
                    ),
                    Direction::Row => (
                        sizes.iter().map(|s| s.0).fold(gaps, u16::saturating_add),
                        sizes.iter().map(|s| s.1).max().unwrap_or(0),
                    ),
                }
            }
        }
    };

    (clamp_width(element, element.width.unwrap_or(content_width)), height)
}

fn clamp_width(element: &Element, width: u16) -> u16 {
    let mut width = width;
    if let Some(max) = element.max_width {
        width = width.min(max);
    }
    if let Some(min) = element.min_width {
        width = width.max(min);
    }
    width
}

fn place(element: &Element, rect: Rect, viewport: Rect, result: &mut LayoutResult) {
    result.insert(element.id.clone(), rect);

    let Content::Children(children) = &element.content else {
        return;
    };

    let mut cursor_x = rect.x;
    let mut cursor_y = rect.y;

    for child in children {
        let (width, height) = measure(child);

        let child_rect = match child.position {
            Position::Absolute => {
                let x = rect.x.saturating_add(child.left.map_or(0, |o| o.resolve(rect.width)));
                let y = rect.y.saturating_add(child.top.map_or(0, |o| o.resolve(rect.height)));
                Rect::new(x, y, width, height).intersection(&viewport)
            }
            Position::Static => {
                let width = match element.direction {
                    // Column children stretch across the parent unless sized.
                    Direction::Column if child.width.is_none() => clamp_width(child, rect.width),
                    _ => width,
                };
                let placed = Rect::new(cursor_x, cursor_y, width, height)
                    .intersection(&Rect::new(rect.x, rect.y, rect.width, u16::MAX - rect.y))
                    .intersection(&viewport);
                match element.direction {
                    Direction::Column => {
                        cursor_y = cursor_y.saturating_add(height).saturating_add(element.gap)
                    }
                    Direction::Row => {
                        cursor_x = cursor_x.saturating_add(width).saturating_add(element.gap)
                    }
                }
                placed
            }
        };

        place(child, child_rect, viewport, result);
    }
}
