//! maillink - Open installed mail apps from a host application
//!
//! This crate provides the platform-independent logic for:
//! - The registry of supported mail apps (URL schemes, titles, compose dialects)
//! - Installed-app detection through a host-provided scheme prober
//! - Resolving a single app: explicit choice, sole installed app, or picker
//! - Building app-specific compose URLs
//!
//! Platform capabilities are injected through the traits in [`platform`];
//! [`ffi`] exposes everything to Swift/Kotlin via UniFFI.

uniffi::setup_scaffolding!();

pub mod apps;
pub mod compose;
pub mod desktop;
pub mod error;
pub mod ffi;
pub mod launcher;
pub mod options;
pub mod platform;
pub mod probe;
pub mod resolve;
pub mod settings;

pub use apps::{AppEntry, AppId, ComposeDialect, ComposePath, REGISTRY};
pub use compose::{build_compose_url, compose_link};
pub use desktop::{StaticProber, SystemLauncher};
pub use error::LinkError;
pub use launcher::MailLauncher;
pub use options::{ComposeOptions, PromptOptions};
pub use platform::{Choice, ChoicePicker, ChoiceRequest, SchemeProber, UrlLauncher};
pub use probe::{installed_apps, is_app_installed, is_installed};
pub use resolve::{ask_app_choice, choice_request, resolve};
pub use settings::{InstalledApps, PromptDefaults};
