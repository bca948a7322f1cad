//! A selectable image list rendered inside a shadow root.
//!
//! [`ImageExplorer`] fetches a JSON array of image descriptors from the URL in
//! its host element's `data-images-url` attribute, renders them as clickable
//! thumbnails followed by a row for typing an external link, and hands the
//! user's choice to a one-shot callback.
//!
//! # Example
//!
//! ```ignore
//! use image_explorer::{ImageExplorer, registry};
//! use scopedom::Element;
//!
//! let host = Element::new("image-explorer")
//!     .id("picker")
//!     .attr("data-images-url", "https://blog.example/images.json");
//!
//! let mut explorer = registry::create_as::<ImageExplorer>(image_explorer::TAG)?;
//! explorer.initialize(&host)?;
//! explorer.show(|image| println!("picked {}", image.link))?;
//! ```

pub mod config;
pub mod descriptor;
pub mod error;
pub mod registry;
pub mod source;
pub mod view;
pub mod wakeup;
pub mod widget;

pub use config::{DATA_IMAGES_URL, ExplorerConfig};
pub use descriptor::{EXTERNAL_IMAGE_NAME, ImageDescriptor};
pub use error::{ExplorerError, FetchError, RegistryError};
pub use registry::{Component, ComponentRegistration};
pub use source::{HttpImageSource, ImageSource, StaticImageSource};
pub use widget::{EventOutcome, ExplorerState, ImageExplorer, TAG};
