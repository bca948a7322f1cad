//! Error types

mod explorer;
mod fetch;
mod registry;

pub use explorer::*;
pub use fetch::*;
pub use registry::*;
