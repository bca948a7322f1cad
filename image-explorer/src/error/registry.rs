//! Component registry errors

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A factory is already registered under this tag.
    #[error("Component '{0}' is already defined")]
    AlreadyDefined(String),

    /// No factory is registered under this tag.
    #[error("Unknown component '{0}'")]
    UnknownTag(String),

    /// The tag's factory builds a different component type.
    #[error("Component '{0}' is not of the requested type")]
    TypeMismatch(String),
}
