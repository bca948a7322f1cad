//! Widget lifecycle errors

/// Precondition failures of the [`ImageExplorer`](crate::ImageExplorer) API.
#[derive(Debug, thiserror::Error)]
pub enum ExplorerError {
    /// `initialize` was called on an attached widget.
    #[error("Image explorer is already attached to '{0}'")]
    AlreadyInitialized(String),

    /// `show` was called before `initialize`.
    #[error("Image explorer is not attached to a host element")]
    NotInitialized,

    /// `show` was called outside a tokio runtime.
    #[error("No async runtime available to fetch images")]
    NoRuntime,
}
