use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{char_width, display_width, to_cells, truncate_to_width};
use crate::types::{Rgb, TextStyle};

/// An element queued for painting with its resolved stacking level.
struct RenderItem<'a> {
    element: &'a Element,
    z_index: i16,
    tree_order: usize,
    foreground: Rgb,
}

/// Paint `root` into `buf` using a layout computed for the same tree.
///
/// Elements paint in ascending `z_index`, then tree order. An element without
/// its own `z_index` shares its nearest ancestor's, so a whole overlay subtree
/// stays above lower layers.
pub fn render_to_buffer(root: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    let mut items = Vec::new();
    collect(root, 0, Rgb::WHITE, &mut items);
    // Stable: equal z keeps tree order.
    items.sort_by_key(|item| (item.z_index, item.tree_order));

    let area = buf.area();
    for item in &items {
        let Some(rect) = layout.get(&item.element.id) else {
            continue;
        };
        let rect = rect.intersection(&area);
        if rect.is_empty() {
            continue;
        }
        paint(item, rect, buf);
    }
}

fn collect<'a>(element: &'a Element, inherited_z: i16, inherited_fg: Rgb, items: &mut Vec<RenderItem<'a>>) {
    let z_index = element.z_index.unwrap_or(inherited_z);
    let foreground = element.style.foreground.unwrap_or(inherited_fg);
    items.push(RenderItem {
        element,
        z_index,
        tree_order: items.len(),
        foreground,
    });

    for child in element.content.children() {
        collect(child, z_index, foreground, items);
    }
}

fn paint(item: &RenderItem<'_>, rect: Rect, buf: &mut Buffer) {
    let element = item.element;

    if let Some(bg) = element.style.background {
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                if let Some(cell) = buf.get_mut(x, y) {
                    *cell = Cell { bg, ..Cell::default() };
                }
            }
        }
    }

    match &element.content {
        Content::Text(text) => {
            draw_text(buf, rect, text, item.foreground, element.style.text_style);
        }
        Content::Input {
            value,
            cursor,
            placeholder,
        } => {
            let mut style = element.style.text_style;
            style.underline = true;
            if value.is_empty() {
                let mut dim = style;
                dim.dim = true;
                draw_text(buf, rect, placeholder, item.foreground, dim);
            } else {
                draw_text(buf, rect, value, item.foreground, style);
            }
            let before = value.get(..*cursor).map_or(0, display_width);
            let cursor_x = rect.x.saturating_add(to_cells(before));
            if cursor_x < rect.right() {
                if let Some(cell) = buf.get_mut(cursor_x, rect.y) {
                    cell.style.reverse = true;
                }
            }
        }
        Content::None | Content::Children(_) => {}
    }
}

fn draw_text(buf: &mut Buffer, rect: Rect, text: &str, fg: Rgb, style: TextStyle) {
    let shown = truncate_to_width(text, rect.width as usize);
    let mut x = rect.x;
    for ch in shown.chars() {
        let width = char_width(ch) as u16;
        if width == 0 {
            continue;
        }
        if x.saturating_add(width) > rect.right() {
            break;
        }
        if let Some(cell) = buf.get_mut(x, rect.y) {
            cell.char = ch;
            cell.fg = fg;
            cell.style = style;
            cell.wide_continuation = false;
        }
        if width == 2 {
            if let Some(cell) = buf.get_mut(x + 1, rect.y) {
                cell.wide_continuation = true;
            }
        }
        x += width;
    }
}
