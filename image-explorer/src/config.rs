//! Widget configuration read from the host element.

use std::time::Duration;

use scopedom::{Declarations, Element, Offset, Position, Rgb, StyleSheet};
use url::Url;

use crate::error::FetchError;

/// Host attribute holding the image list endpoint.
pub const DATA_IMAGES_URL: &str = "data-images-url";

const DEFAULT_LIST_MIN_WIDTH: u16 = 32;
const DEFAULT_THUMBNAIL_MAX_WIDTH: u16 = 24;
const OVERLAY_Z_INDEX: i16 = 10000;

/// Settings for one explorer instance.
///
/// Only `images_url` comes from the host element; the rest are defaults a
/// host may override before attaching.
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    /// Endpoint returning the JSON image list. May be relative to `base_url`.
    pub images_url: String,
    /// Base for resolving a relative `images_url`.
    pub base_url: Option<Url>,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Minimum width of the overlay list, in cells.
    pub list_min_width: u16,
    /// Maximum width of a thumbnail tile, in cells.
    pub thumbnail_max_width: u16,
}

impl ExplorerConfig {
    pub fn new(images_url: impl Into<String>) -> Self {
        Self {
            images_url: images_url.into(),
            base_url: None,
            timeout: None,
            list_min_width: DEFAULT_LIST_MIN_WIDTH,
            thumbnail_max_width: DEFAULT_THUMBNAIL_MAX_WIDTH,
        }
    }

    /// Read the configuration from the host's attributes. A missing
    /// `data-images-url` yields an empty URL, which fails at fetch time.
    pub fn from_host(host: &Element) -> Self {
        Self::new(host.get_attr(DATA_IMAGES_URL).unwrap_or_default())
    }

    pub fn base_url(mut self, base: Url) -> Self {
        self.base_url = Some(base);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn list_min_width(mut self, width: u16) -> Self {
        self.list_min_width = width;
        self
    }

    pub fn thumbnail_max_width(mut self, width: u16) -> Self {
        self.thumbnail_max_width = width;
        self
    }

    /// The absolute endpoint URL.
    pub fn resolved_url(&self) -> Result<Url, FetchError> {
        if self.images_url.trim().is_empty() {
            return Err(FetchError::InvalidUrl(format!("missing {DATA_IMAGES_URL}")));
        }
        match Url::parse(&self.images_url) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => match &self.base_url {
                Some(base) => base
                    .join(&self.images_url)
                    .map_err(|e| FetchError::InvalidUrl(format!("{}: {e}", self.images_url))),
                None => Err(FetchError::InvalidUrl(format!(
                    "{}: relative URL without a base",
                    self.images_url
                ))),
            },
            Err(e) => Err(FetchError::InvalidUrl(format!("{}: {e}", self.images_url))),
        }
    }

    /// Rules injected into the widget's shadow root.
    pub fn style_sheet(&self) -> StyleSheet {
        StyleSheet::new()
            .rule(
                "ul",
                Declarations::new()
                    .position(Position::Absolute)
                    .top(Offset::Cells(0))
                    .left(Offset::Percent(50.0))
                    .min_width(self.list_min_width)
                    .z_index(OVERLAY_Z_INDEX)
                    .background(Rgb::new(30, 30, 46)),
            )
            .rule(
                "li img",
                Declarations::new()
                    .max_width(self.thumbnail_max_width)
                    .foreground(Rgb::new(137, 180, 250)),
            )
            .rule("button", Declarations::new().bold(true))
            .rule("p", Declarations::new().foreground(Rgb::new(243, 139, 168)))
    }
}
