//! The host page the explorer is embedded in.

use image_explorer::{DATA_IMAGES_URL, ImageDescriptor, ImageExplorer};
use scopedom::{Declarations, Element, Rgb, StyleSheet};

pub const HOST_ID: &str = "post-image-picker";

/// Page-level state and markup.
pub struct Page {
    images_url: String,
    pub selected: Option<ImageDescriptor>,
    pub status: String,
}

impl Page {
    pub fn new(images_url: impl Into<String>) -> Self {
        Self {
            images_url: images_url.into(),
            selected: None,
            status: "Press i to insert an image, q to quit.".to_string(),
        }
    }

    /// The `<image-explorer>` element as written in the page, before the
    /// component composes its shadow tree into it.
    pub fn host(&self) -> Element {
        Element::new(image_explorer::TAG)
            .id(HOST_ID)
            .attr(DATA_IMAGES_URL, &self.images_url)
    }

    pub fn element(&self, explorer: &ImageExplorer) -> Element {
        let selection = match &self.selected {
            Some(image) => Element::text("img", format!("Selected: {} ({})", image.link, image.name)),
            None => Element::text("p", "No image selected"),
        };

        let mut root = Element::new("body")
            .id("page")
            .gap(1)
            .child(explorer.element(self.host()))
            .child(Element::text("h1", "Image Explorer"))
            .child(Element::text("p", format!("Source: {}", self.images_url)))
            .child(selection)
            .child(Element::text("p", self.status.clone()));

        style_sheet().apply(&mut root);
        root
    }
}

/// Page styles. These never reach the explorer's own list.
fn style_sheet() -> StyleSheet {
    StyleSheet::new()
        .rule("h1", Declarations::new().bold(true).foreground(Rgb::new(250, 179, 135)))
        .rule("p", Declarations::new().foreground(Rgb::new(166, 173, 200)))
        .rule("img", Declarations::new().foreground(Rgb::new(166, 227, 161)))
}
