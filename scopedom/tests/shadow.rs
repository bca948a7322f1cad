use scopedom::element::find_element;
use scopedom::{
    layout, render_to_buffer, Buffer, Declarations, Element, Offset, Position, Rect, Rgb,
    ShadowRoot, StyleSheet,
};

const RED: Rgb = Rgb::new(255, 0, 0);
const GREEN: Rgb = Rgb::new(0, 255, 0);
const BLUE: Rgb = Rgb::new(0, 0, 255);

fn host_sheet() -> StyleSheet {
    StyleSheet::new()
        .rule("img", Declarations::new().foreground(RED).max_width(2))
        .rule("ul", Declarations::new().background(BLUE))
}

fn widget_root() -> ShadowRoot {
    let mut root = ShadowRoot::new("picker");
    root.adopt_style_sheet(
        StyleSheet::new()
            .rule(
                "ul",
                Declarations::new()
                    .position(Position::Absolute)
                    .left(Offset::Percent(50.0))
                    .top(Offset::Cells(0))
                    .min_width(32)
                    .z_index(10000),
            )
            .rule("li img", Declarations::new().foreground(GREEN).max_width(6))
            .rule("image-explorer", Declarations::new().background(GREEN)),
    );
    root.append_child(
        Element::new("ul").id("list").child(
            Element::row("li")
                .id("item")
                .child(Element::text("img", "thumbnail").id("thumb").clickable(true)),
        ),
    );
    root
}

fn page(root: &ShadowRoot) -> Element {
    let mut page = Element::new("body")
        .id("page")
        .child(root.compose(Element::new("image-explorer")))
        .child(Element::text("p", ".".repeat(80)).id("text").clickable(true))
        .child(Element::text("img", "host-image").id("host-img"));
    host_sheet().apply(&mut page);
    page
}

// ============================================================================
// Style isolation
// ============================================================================

#[test]
fn test_host_rules_do_not_reach_shadow_content() {
    let page = page(&widget_root());

    let thumb = find_element(&page, "thumb").unwrap();
    assert_eq!(thumb.style.foreground, Some(GREEN));
    assert_eq!(thumb.max_width, Some(6));

    let list = find_element(&page, "list").unwrap();
    assert_eq!(list.style.background, None, "host ul rule leaked into shadow tree");
}

#[test]
fn test_shadow_rules_do_not_reach_host_content() {
    let page = page(&widget_root());

    let host_img = find_element(&page, "host-img").unwrap();
    assert_eq!(host_img.style.foreground, Some(RED));
    assert_eq!(host_img.max_width, Some(2));
}

#[test]
fn test_shadow_rules_do_not_match_host_element() {
    let page = page(&widget_root());

    let host = find_element(&page, "picker").unwrap();
    assert!(host.shadow_host);
    assert_eq!(host.style.background, None);
}

#[test]
fn test_host_light_children_are_replaced() {
    let root = widget_root();
    let host = root.compose(Element::new("image-explorer").child(Element::text("p", "light")));

    assert_eq!(host.content.children().len(), 1);
    assert_eq!(host.content.children()[0].id, "list");
}

// ============================================================================
// Tree operations
// ============================================================================

#[test]
fn test_remove_child_detaches_subtree() {
    let mut root = widget_root();
    assert!(root.find("thumb").is_some());

    let removed = root.remove_child("list").unwrap();
    assert_eq!(removed.id, "list");
    assert!(root.is_empty());
    assert!(root.find("thumb").is_none());
    assert!(root.remove_child("list").is_none());
}

#[test]
fn test_find_mut_edits_nested_element() {
    let mut root = widget_root();
    root.find_mut("thumb").unwrap().clickable = false;
    assert!(!root.find("thumb").unwrap().clickable);
}

// ============================================================================
// Overlay placement and painting
// ============================================================================

#[test]
fn test_overlay_is_centered_with_min_width() {
    let page = page(&widget_root());
    let layout = layout(&page, Rect::from_size(80, 5));

    assert_eq!(layout.get("list"), Some(&Rect::new(40, 0, 32, 1)));
    assert_eq!(layout.get("thumb"), Some(&Rect::new(40, 0, 6, 1)));
}

#[test]
fn test_overlay_paints_above_later_host_content() {
    let page = page(&widget_root());
    let layout = layout(&page, Rect::from_size(80, 5));
    let mut buf = Buffer::new(80, 5);
    render_to_buffer(&page, &layout, &mut buf);

    let row = buf.row_text(0);
    let overlay: String = row.chars().skip(40).take(6).collect();
    assert_eq!(overlay, "thumb…");
    assert_eq!(buf.get(40, 0).unwrap().fg, GREEN);
    assert_eq!(&row[..40], &".".repeat(40));
}

#[test]
fn test_hit_test_prefers_overlay() {
    let page = page(&widget_root());
    let layout = layout(&page, Rect::from_size(80, 5));

    assert_eq!(scopedom::hit_test(&layout, &page, 41, 0), Some("thumb".to_string()));
    assert_eq!(scopedom::hit_test(&layout, &page, 10, 0), Some("text".to_string()));
    assert_eq!(scopedom::hit_test(&layout, &page, 10, 4), None);
}
