//! FFI-friendly type wrappers for UniFFI export
//!
//! These types convert internal Rust types to FFI-compatible versions:
//! - `AppId` → `String` (kebab-case id)
//! - `usize` indices → `u32`
//! - `Choice` → raw picker index, as native action sheets report it

use crate::apps::AppId;
use crate::error::LinkError;
use crate::options::{ComposeOptions, PromptOptions};
use crate::platform::ChoiceRequest;
use crate::settings::PromptDefaults;

// ============================================================================
// Error Types
// ============================================================================

/// FFI-friendly error type
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum MailLinkError {
    #[error("Invalid options: {message}")]
    InvalidOptions { message: String },

    #[error("No mail app available")]
    NoAppAvailable,

    #[error("Probe failed: {message}")]
    ProbeFailed { message: String },

    #[error("Launch failed: {message}")]
    LaunchFailed { message: String },

    #[error("Callback error: {message}")]
    Callback { message: String },
}

impl From<LinkError> for MailLinkError {
    fn from(e: LinkError) -> Self {
        match e {
            LinkError::InvalidOptions(message) => MailLinkError::InvalidOptions { message },
            LinkError::NoAppAvailable => MailLinkError::NoAppAvailable,
            LinkError::Probe(message) => MailLinkError::ProbeFailed { message },
            LinkError::Launch(message) => MailLinkError::LaunchFailed { message },
        }
    }
}

impl From<uniffi::UnexpectedUniFFICallbackError> for MailLinkError {
    fn from(e: uniffi::UnexpectedUniFFICallbackError) -> Self {
        MailLinkError::Callback { message: e.reason }
    }
}

// ============================================================================
// App Types
// ============================================================================

/// FFI-friendly registry row
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct FfiMailApp {
    /// Kebab-case id, e.g. "apple-mail"
    pub id: String,
    pub title: String,
    /// Scheme used for probing and for opening the inbox
    pub scheme: String,
    /// Prefix of compose URLs ("mailto:" for Apple Mail)
    pub compose_prefix: String,
}

impl From<AppId> for FfiMailApp {
    fn from(app: AppId) -> Self {
        Self {
            id: app.as_str().to_string(),
            title: app.title().to_string(),
            scheme: app.scheme().to_string(),
            compose_prefix: app.launch_prefix().to_string(),
        }
    }
}

// ============================================================================
// Options
// ============================================================================

/// FFI-friendly options bundle
#[derive(Debug, Clone, Default, PartialEq, Eq, uniffi::Record)]
pub struct FfiComposeOptions {
    pub app: Option<String>,
    pub to: Option<String>,
    pub cc: Option<String>,
    pub bcc: Option<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
    pub title: Option<String>,
    pub message: Option<String>,
    pub cancel_label: Option<String>,
    pub remove_text: bool,
}

impl From<FfiComposeOptions> for ComposeOptions {
    fn from(o: FfiComposeOptions) -> Self {
        Self {
            app: o.app,
            to: o.to,
            cc: o.cc,
            bcc: o.bcc,
            subject: o.subject,
            body: o.body,
            prompt: PromptOptions {
                title: o.title,
                message: o.message,
                cancel_label: o.cancel_label,
                remove_text: o.remove_text,
            },
        }
    }
}

impl From<ComposeOptions> for FfiComposeOptions {
    fn from(o: ComposeOptions) -> Self {
        Self {
            app: o.app,
            to: o.to,
            cc: o.cc,
            bcc: o.bcc,
            subject: o.subject,
            body: o.body,
            title: o.prompt.title,
            message: o.prompt.message,
            cancel_label: o.prompt.cancel_label,
            remove_text: o.prompt.remove_text,
        }
    }
}

/// FFI-friendly default picker text
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct FfiPromptDefaults {
    pub title: String,
    pub message: String,
    pub cancel_label: String,
}

impl From<FfiPromptDefaults> for PromptDefaults {
    fn from(d: FfiPromptDefaults) -> Self {
        Self {
            title: d.title,
            message: d.message,
            cancel_label: d.cancel_label,
        }
    }
}

// ============================================================================
// Platform Callbacks
// ============================================================================

/// Action sheet contents handed to the native picker
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct FfiChoiceRequest {
    /// App titles followed by the cancel label
    pub options: Vec<String>,
    pub cancel_index: u32,
    pub title: Option<String>,
    pub message: Option<String>,
}

impl From<ChoiceRequest> for FfiChoiceRequest {
    fn from(r: ChoiceRequest) -> Self {
        Self {
            options: r.options,
            cancel_index: r.cancel_index as u32,
            title: r.title,
            message: r.message,
        }
    }
}

/// Asks the OS whether a URL scheme can be opened
///
/// iOS implements this with `UIApplication.canOpenURL`; the schemes must be
/// listed in `LSApplicationQueriesSchemes`.
#[uniffi::export(with_foreign)]
#[async_trait::async_trait]
pub trait MailSchemeProber: Send + Sync {
    async fn can_open(&self, scheme: String) -> Result<bool, MailLinkError>;
}

/// Hands a URL to the OS
#[uniffi::export(with_foreign)]
#[async_trait::async_trait]
pub trait MailUrlOpener: Send + Sync {
    async fn open_url(&self, url: String) -> Result<(), MailLinkError>;
}

/// Shows a native action sheet
#[uniffi::export(with_foreign)]
#[async_trait::async_trait]
pub trait MailAppPicker: Send + Sync {
    /// Returns the tapped index, or `request.cancel_index` when dismissed
    async fn present_choice(&self, request: FfiChoiceRequest) -> u32;
}

// ============================================================================
// Log Callback
// ============================================================================

/// Log level for FFI callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<log::Level> for FfiLogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => FfiLogLevel::Error,
            log::Level::Warn => FfiLogLevel::Warn,
            log::Level::Info => FfiLogLevel::Info,
            log::Level::Debug => FfiLogLevel::Debug,
            log::Level::Trace => FfiLogLevel::Trace,
        }
    }
}

impl From<FfiLogLevel> for log::Level {
    fn from(level: FfiLogLevel) -> Self {
        match level {
            FfiLogLevel::Error => log::Level::Error,
            FfiLogLevel::Warn => log::Level::Warn,
            FfiLogLevel::Info => log::Level::Info,
            FfiLogLevel::Debug => log::Level::Debug,
            FfiLogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Callback interface for receiving log messages from Rust
///
/// Swift should implement this using os_log/Logger for unified logging.
#[uniffi::export(callback_interface)]
pub trait LogCallback: Send + Sync {
    /// Called when a log message is emitted
    ///
    /// # Arguments
    /// * `level` - The log level (error, warn, info, debug, trace)
    /// * `target` - The logging target (typically module path, e.g., "maillink::resolve")
    /// * `message` - The log message
    fn on_log(&self, level: FfiLogLevel, target: String, message: String);
}
