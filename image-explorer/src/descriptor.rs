use serde::{Deserialize, Deserializer, Serialize};

/// Name given to descriptors built from a typed-in link.
pub const EXTERNAL_IMAGE_NAME: &str = "external image";

/// One selectable image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    /// URL or URI of the image resource.
    pub link: String,
    /// Display and alt label. Absent or null in the listing means empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ImageDescriptor {
    pub fn new(link: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            name: name.into(),
        }
    }

    /// A descriptor for a link the user typed in.
    pub fn external(link: impl Into<String>) -> Self {
        Self::new(link, EXTERNAL_IMAGE_NAME)
    }

    /// Text shown on the thumbnail tile.
    pub fn label(&self) -> &str {
        if self.name.is_empty() { &self.link } else { &self.name }
    }
}
