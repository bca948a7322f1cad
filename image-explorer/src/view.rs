//! Element tree for the open list.
//!
//! Each interactive element is paired with the [`Action`] it triggers when the
//! tree is built, so dispatch never has to read state back out of the tree.

use std::collections::HashMap;

use scopedom::{Element, TextInputData};

use crate::descriptor::ImageDescriptor;
use crate::error::FetchError;

pub const LIST_ID: &str = "image-explorer-list";
pub const MANUAL_INPUT_ID: &str = "image-explorer-link";
pub const INSERT_BUTTON_ID: &str = "image-explorer-insert";
pub const NOTICE_ID: &str = "image-explorer-notice";

const THUMBNAIL_GLYPH: &str = "▣";
const LINK_PLACEHOLDER: &str = "https://…";

pub fn thumbnail_id(index: usize) -> String {
    format!("image-explorer-thumb-{index}")
}

/// What a click or submit on a bound element does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Select this listed image.
    Pick(ImageDescriptor),
    /// Select the manual input's current value as an external image.
    InsertManual,
    /// The manual link input; clicking it selects nothing.
    ManualInput,
}

/// A built list and the actions bound to its element IDs.
pub struct ListView {
    pub element: Element,
    pub bindings: HashMap<String, Action>,
}

/// Build the list: one item per image (or a notice if loading failed),
/// then the manual-entry row.
pub fn build_list(listing: &Result<Vec<ImageDescriptor>, FetchError>, manual: &TextInputData) -> ListView {
    let mut bindings = HashMap::new();
    let mut list = Element::new("ul").id(LIST_ID);

    match listing {
        Ok(images) => {
            for (index, image) in images.iter().enumerate() {
                let id = thumbnail_id(index);
                list.push_child(Element::row("li").child(thumbnail(&id, image)));
                bindings.insert(id, Action::Pick(image.clone()));
            }
        }
        Err(_) => {
            list.push_child(
                Element::row("li").child(Element::text("p", "Could not load images").id(NOTICE_ID)),
            );
        }
    }

    list.push_child(manual_row(manual));
    bindings.insert(MANUAL_INPUT_ID.to_string(), Action::ManualInput);
    bindings.insert(INSERT_BUTTON_ID.to_string(), Action::InsertManual);

    ListView {
        element: list,
        bindings,
    }
}

fn thumbnail(id: &str, image: &ImageDescriptor) -> Element {
    Element::text("img", format!("{THUMBNAIL_GLYPH} {}", image.label()))
        .id(id)
        .clickable(true)
        .attr("src", &image.link)
        .attr("alt", &image.name)
        .attr("aria-label", &image.name)
}

fn manual_row(manual: &TextInputData) -> Element {
    Element::row("li")
        .gap(1)
        .child(manual_input(manual))
        .child(Element::text("button", "Insert").id(INSERT_BUTTON_ID).clickable(true))
}

/// The manual-entry input reflecting `manual`.
pub fn manual_input(manual: &TextInputData) -> Element {
    Element::input(manual.text.clone())
        .id(MANUAL_INPUT_ID)
        .attr("type", "text")
        .attr("name", "link")
        .placeholder(LINK_PLACEHOLDER)
        .cursor(manual.cursor)
}
