//! Static table of supported mail apps
//!
//! Every [`AppId`] has exactly one row in [`REGISTRY`], stored at the index of
//! its declaration order. Adding an app means adding a variant and a row.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LinkError;

/// Identifier of a supported mail client
///
/// Declaration order is registry order: it drives both the probing order and
/// the order of entries in the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppId {
    AppleMail,
    Gmail,
    Inbox,
    Spark,
    Airmail,
    Outlook,
}

/// Where the path segment of a compose URL comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposePath {
    /// The recipient itself is the path (`mailto:` style)
    Recipient,
    /// A fixed path such as `co` or `compose`
    Fixed(&'static str),
}

/// Per-app query parameter names for the compose screen
///
/// A `None` key means the app has no such parameter and the field is never
/// emitted for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposeDialect {
    pub path: ComposePath,
    pub to: Option<&'static str>,
    pub cc: Option<&'static str>,
    pub bcc: Option<&'static str>,
    pub subject: Option<&'static str>,
    pub body: Option<&'static str>,
}

/// One row of the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppEntry {
    pub id: AppId,
    /// Scheme used to probe installability and to open the inbox
    pub scheme: &'static str,
    /// Prefix used when opening the compose screen
    pub launch_prefix: &'static str,
    /// Label shown in the picker
    pub title: &'static str,
    pub dialect: Option<ComposeDialect>,
}

/// The registry, in [`AppId`] declaration order
pub static REGISTRY: [AppEntry; 6] = [
    AppEntry {
        id: AppId::AppleMail,
        scheme: "message://",
        launch_prefix: "mailto:",
        title: "Mail",
        dialect: Some(ComposeDialect {
            path: ComposePath::Recipient,
            to: None,
            cc: Some("cc"),
            bcc: Some("bcc"),
            subject: Some("subject"),
            body: Some("body"),
        }),
    },
    AppEntry {
        id: AppId::Gmail,
        scheme: "googlegmail://",
        launch_prefix: "googlegmail://",
        title: "Gmail",
        dialect: Some(ComposeDialect {
            path: ComposePath::Fixed("co"),
            to: Some("to"),
            cc: Some("cc"),
            bcc: Some("bcc"),
            subject: Some("subject"),
            body: Some("body"),
        }),
    },
    AppEntry {
        id: AppId::Inbox,
        scheme: "inbox-gmail://",
        launch_prefix: "inbox-gmail://",
        title: "Inbox",
        dialect: Some(ComposeDialect {
            path: ComposePath::Fixed("compose"),
            to: Some("to"),
            cc: Some("cc"),
            bcc: Some("bcc"),
            subject: Some("subject"),
            body: Some("body"),
        }),
    },
    AppEntry {
        id: AppId::Spark,
        scheme: "readdle-spark://",
        launch_prefix: "readdle-spark://",
        title: "Spark",
        dialect: Some(ComposeDialect {
            path: ComposePath::Fixed("compose"),
            to: Some("recipient"),
            cc: None,
            bcc: None,
            subject: Some("subject"),
            body: Some("body"),
        }),
    },
    AppEntry {
        id: AppId::Airmail,
        scheme: "airmail://",
        launch_prefix: "airmail://",
        title: "Airmail",
        dialect: Some(ComposeDialect {
            path: ComposePath::Fixed("compose"),
            to: Some("to"),
            cc: None,
            bcc: None,
            subject: Some("subject"),
            body: Some("htmlBody"),
        }),
    },
    AppEntry {
        id: AppId::Outlook,
        scheme: "ms-outlook://",
        launch_prefix: "ms-outlook://",
        title: "Outlook",
        dialect: Some(ComposeDialect {
            path: ComposePath::Fixed("compose"),
            to: Some("to"),
            cc: None,
            bcc: None,
            subject: Some("subject"),
            body: Some("body"),
        }),
    },
];

impl AppId {
    /// All apps in registry order
    pub const ALL: [AppId; 6] = [
        AppId::AppleMail,
        AppId::Gmail,
        AppId::Inbox,
        AppId::Spark,
        AppId::Airmail,
        AppId::Outlook,
    ];

    /// Parse a kebab-case identifier such as `apple-mail`
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|app| app.as_str() == id)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AppId::AppleMail => "apple-mail",
            AppId::Gmail => "gmail",
            AppId::Inbox => "inbox",
            AppId::Spark => "spark",
            AppId::Airmail => "airmail",
            AppId::Outlook => "outlook",
        }
    }

    /// Registry row for this app
    pub fn entry(self) -> &'static AppEntry {
        &REGISTRY[self as usize]
    }

    pub fn scheme(self) -> &'static str {
        self.entry().scheme
    }

    pub fn title(self) -> &'static str {
        self.entry().title
    }

    pub fn dialect(self) -> Option<&'static ComposeDialect> {
        self.entry().dialect.as_ref()
    }

    pub fn launch_prefix(self) -> &'static str {
        self.entry().launch_prefix
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for AppId {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| LinkError::InvalidOptions(format!("unknown app \"{s}\"")))
    }
}
