//! FFI bindings for UniFFI export
//!
//! This module provides Swift/Kotlin bindings for the maillink crate via UniFFI.
//!
//! ## Usage from Swift
//!
//! ```swift
//! import MailLinkFFI
//!
//! // Route Rust logs into os_log
//! initLogging(callback: myLogCallback, maxLevel: .info)
//!
//! // Wire the platform capabilities once
//! let linker = MailLinker(
//!     prober: CanOpenUrlProber(),      // UIApplication.canOpenURL
//!     opener: UrlOpener(),             // UIApplication.open
//!     picker: ActionSheetPicker(),     // UIAlertController(.actionSheet)
//!     promptDefaults: nil
//! )
//!
//! // Let the user pick a client and open a prefilled draft
//! let app = try await linker.openComposer(options: FfiComposeOptions(
//!     app: nil, to: "support@example.com", cc: nil, bcc: nil,
//!     subject: "Feedback", body: nil,
//!     title: nil, message: nil, cancelLabel: nil, removeText: false
//! ))
//! ```

mod logging;
mod service;
mod types;

// Re-export all FFI types and the MailLinker
pub use logging::{clear_log_callback, init_logging, set_log_callback, set_log_level};
pub use service::*;
pub use types::*;
