//! Per-call options for opening a mail app

use serde::{Deserialize, Serialize};

use crate::apps::AppId;
use crate::error::{LinkError, Result};

/// Customization of the app picker
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PromptOptions {
    pub title: Option<String>,
    pub message: Option<String>,
    pub cancel_label: Option<String>,
    /// Show the picker without title and message
    pub remove_text: bool,
}

/// Options bundle for `open_inbox` / `open_composer`
///
/// Deserializes from the camelCase JSON a host app would pass, e.g.
/// `{"app": "gmail", "to": "a@b.com", "cancelLabel": "Never mind"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComposeOptions {
    /// Explicit app; empty is the same as absent
    pub app: Option<String>,
    pub to: Option<String>,
    pub cc: Option<String>,
    pub bcc: Option<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
    #[serde(flatten)]
    pub prompt: PromptOptions,
}

impl ComposeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an options bundle from JSON
    ///
    /// Anything other than a JSON object is rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| LinkError::InvalidOptions(format!("options are not valid JSON: {e}")))?;
        if !value.is_object() {
            return Err(LinkError::InvalidOptions(
                "options must be an object".to_string(),
            ));
        }
        serde_json::from_value(value).map_err(|e| LinkError::InvalidOptions(e.to_string()))
    }

    /// The explicitly requested app, if any
    ///
    /// An absent or empty `app` means "let the user choose". Any other value
    /// must name a known app.
    pub fn explicit_app(&self) -> Result<Option<AppId>> {
        match self.app.as_deref() {
            None | Some("") => Ok(None),
            Some(id) => id.parse().map(Some),
        }
    }

    /// Copy with every compose field percent-encoded
    ///
    /// URL building never encodes; call this first when field values may
    /// contain reserved characters.
    pub fn percent_encoded(&self) -> Self {
        let encode = |field: &Option<String>| {
            field
                .as_deref()
                .map(|value| urlencoding::encode(value).into_owned())
        };
        Self {
            app: self.app.clone(),
            to: encode(&self.to),
            cc: encode(&self.cc),
            bcc: encode(&self.bcc),
            subject: encode(&self.subject),
            body: encode(&self.body),
            prompt: self.prompt.clone(),
        }
    }

    pub fn app(mut self, app: impl Into<String>) -> Self {
        self.app = Some(app.into());
        self
    }

    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    pub fn cc(mut self, cc: impl Into<String>) -> Self {
        self.cc = Some(cc.into());
        self
    }

    pub fn bcc(mut self, bcc: impl Into<String>) -> Self {
        self.bcc = Some(bcc.into());
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn prompt(mut self, prompt: PromptOptions) -> Self {
        self.prompt = prompt;
        self
    }
}
