//! Supported mail apps and their URL schemes

mod registry;

pub use registry::{AppEntry, AppId, ComposeDialect, ComposePath, REGISTRY};
