use crate::element::Element;
use crate::layout::LayoutResult;

/// Find the topmost interactive element at the given coordinates.
///
/// "Topmost" follows paint order: highest inherited `z_index`, then latest in
/// tree order. Clickable elements and text inputs are interactive.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    let mut best: Option<(i16, usize, &str)> = None;
    let mut order = 0;
    visit(layout, root, x, y, 0, &mut order, &mut best);
    best.map(|(_, _, id)| id.to_string())
}

fn visit<'a>(
    layout: &LayoutResult,
    element: &'a Element,
    x: u16,
    y: u16,
    inherited_z: i16,
    order: &mut usize,
    best: &mut Option<(i16, usize, &'a str)>,
) {
    let z = element.z_index.unwrap_or(inherited_z);
    let tree_order = *order;
    *order += 1;

    let interactive = element.clickable || element.captures_input;
    if interactive && layout.get(&element.id).is_some_and(|r| r.contains(x, y)) {
        let on_top = best.is_none_or(|(bz, bo, _)| (z, tree_order) > (bz, bo));
        if on_top {
            *best = Some((z, tree_order, element.id.as_str()));
        }
    }

    // Absolutely positioned children can sit outside their parent's box, so
    // descend regardless of whether the parent contains the point.
    for child in element.content.children() {
        visit(layout, child, x, y, z, order, best);
    }
}
