//! Where the image list comes from.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use url::Url;

use crate::config::ExplorerConfig;
use crate::descriptor::ImageDescriptor;
use crate::error::FetchError;

/// Provides the list of selectable images.
#[async_trait]
pub trait ImageSource: Send + Sync {
    async fn fetch_images(&self) -> Result<Vec<ImageDescriptor>, FetchError>;
}

/// Fetches the list with a GET request to a JSON endpoint.
#[derive(Debug, Clone)]
pub struct HttpImageSource {
    url: Url,
    http_client: Client,
    timeout: Option<Duration>,
}

impl HttpImageSource {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            http_client: Client::new(),
            timeout: None,
        }
    }

    pub fn from_config(config: &ExplorerConfig) -> Result<Self, FetchError> {
        let mut source = Self::new(config.resolved_url()?);
        source.timeout = config.timeout;
        Ok(source)
    }

    /// Use a preconfigured client (proxies, cookies, headers).
    pub fn with_client(mut self, client: Client) -> Self {
        self.http_client = client;
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl ImageSource for HttpImageSource {
    async fn fetch_images(&self) -> Result<Vec<ImageDescriptor>, FetchError> {
        debug!("GET {}", self.url);

        let mut request = self.http_client.get(self.url.clone());
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                message: body,
            });
        }

        parse_descriptors(&body)
    }
}

/// Decode a JSON array of image descriptors.
pub fn parse_descriptors(body: &str) -> Result<Vec<ImageDescriptor>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::parse_with_body(e.to_string(), body))
}

/// A fixed list, for demos and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticImageSource {
    images: Vec<ImageDescriptor>,
}

impl StaticImageSource {
    pub fn new(images: Vec<ImageDescriptor>) -> Self {
        Self { images }
    }
}

#[async_trait]
impl ImageSource for StaticImageSource {
    async fn fetch_images(&self) -> Result<Vec<ImageDescriptor>, FetchError> {
        Ok(self.images.clone())
    }
}

/// Stands in when the configured endpoint is unusable, so the failure takes
/// the same path as a failed request.
#[derive(Debug, Clone)]
pub(crate) struct UnavailableSource {
    reason: String,
}

impl UnavailableSource {
    pub(crate) fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl ImageSource for UnavailableSource {
    async fn fetch_images(&self) -> Result<Vec<ImageDescriptor>, FetchError> {
        Err(FetchError::InvalidUrl(self.reason.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_listing() {
        let images = parse_descriptors(
            r#"[{"link": "/media/a.png", "name": "a"}, {"link": "/media/b.png"}]"#,
        )
        .unwrap();
        assert_eq!(
            images,
            vec![
                ImageDescriptor::new("/media/a.png", "a"),
                ImageDescriptor::new("/media/b.png", ""),
            ]
        );
    }

    #[test]
    fn rejects_non_array() {
        let err = parse_descriptors(r#"{"link": "a.png"}"#).unwrap_err();
        match err {
            FetchError::Parse { body, .. } => assert_eq!(body.as_deref(), Some(r#"{"link": "a.png"}"#)),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_entries_without_link() {
        assert!(parse_descriptors(r#"[{"name": "nameless"}]"#).is_err());
    }
}
