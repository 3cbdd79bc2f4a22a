//! MailLinker facade for UniFFI export
//!
//! Adapts the foreign prober, opener and picker to the platform traits and
//! exposes the launcher operations as async methods.

use std::sync::Arc;

use async_trait::async_trait;

use crate::apps::AppId;
use crate::error::LinkError;
use crate::ffi::types::*;
use crate::launcher::MailLauncher;
use crate::options::{ComposeOptions, PromptOptions};
use crate::platform::{Choice, ChoicePicker, ChoiceRequest, SchemeProber, UrlLauncher};

// ============================================================================
// Foreign Adapters
// ============================================================================

struct ForeignProber(Arc<dyn MailSchemeProber>);

#[async_trait]
impl SchemeProber for ForeignProber {
    async fn can_open(&self, scheme: &str) -> Result<bool, LinkError> {
        self.0
            .can_open(scheme.to_string())
            .await
            .map_err(|e| LinkError::Probe(e.to_string()))
    }
}

struct ForeignOpener(Arc<dyn MailUrlOpener>);

#[async_trait]
impl UrlLauncher for ForeignOpener {
    async fn open_url(&self, url: &str) -> Result<(), LinkError> {
        self.0.open_url(url.to_string()).await.map_err(|e| match e {
            MailLinkError::LaunchFailed { message } | MailLinkError::Callback { message } => {
                LinkError::Launch(message)
            }
            other => LinkError::Launch(other.to_string()),
        })
    }
}

struct ForeignPicker(Arc<dyn MailAppPicker>);

#[async_trait]
impl ChoicePicker for ForeignPicker {
    async fn present_choice(&self, request: ChoiceRequest) -> Choice {
        let cancel_index = request.cancel_index;
        let index = self.0.present_choice(FfiChoiceRequest::from(request)).await;
        Choice::from_index(index as usize, cancel_index)
    }
}

// ============================================================================
// MailLinker
// ============================================================================

/// Main service object for opening mail apps
///
/// This is the entry point for Swift/Kotlin code. The host supplies the
/// platform capabilities once; every call then resolves an app on its own.
#[derive(uniffi::Object)]
pub struct MailLinker {
    launcher: MailLauncher,
}

#[uniffi::export]
impl MailLinker {
    /// Create a new MailLinker from host-provided platform capabilities
    ///
    /// # Arguments
    /// * `prober` - Answers whether a URL scheme can be opened
    /// * `opener` - Opens a URL
    /// * `picker` - Shows an action sheet when several apps are installed
    /// * `prompt_defaults` - Picker text used when a call leaves it unset
    #[uniffi::constructor]
    pub fn new(
        prober: Arc<dyn MailSchemeProber>,
        opener: Arc<dyn MailUrlOpener>,
        picker: Arc<dyn MailAppPicker>,
        prompt_defaults: Option<FfiPromptDefaults>,
    ) -> Arc<Self> {
        let mut launcher = MailLauncher::new(
            Arc::new(ForeignProber(prober)),
            Arc::new(ForeignOpener(opener)),
            Arc::new(ForeignPicker(picker)),
        );
        if let Some(defaults) = prompt_defaults {
            launcher = launcher.with_prompt_defaults(defaults.into());
        }
        Arc::new(Self { launcher })
    }

    /// Whether the app is installed; `false` for unknown ids and probe errors
    pub async fn is_app_installed(&self, app_id: String) -> bool {
        self.launcher.is_app_installed(&app_id).await
    }

    /// Installed apps in registry order
    pub async fn installed_apps(&self) -> Vec<FfiMailApp> {
        self.launcher
            .installed_apps()
            .await
            .into_iter()
            .map(FfiMailApp::from)
            .collect()
    }

    /// Let the user pick an installed app
    ///
    /// Returns the chosen app id, or `None` if nothing is installed or the
    /// picker was dismissed.
    pub async fn ask_app_choice(
        &self,
        title: Option<String>,
        message: Option<String>,
        cancel_label: Option<String>,
        remove_text: bool,
    ) -> Option<String> {
        let prompt = PromptOptions {
            title,
            message,
            cancel_label,
            remove_text,
        };
        self.launcher
            .ask_app_choice(&prompt)
            .await
            .map(|app| app.as_str().to_string())
    }

    /// Open a mail app at its inbox
    ///
    /// Returns the id of the app that was opened.
    pub async fn open_inbox(&self, options: FfiComposeOptions) -> Result<String, MailLinkError> {
        let app = self.launcher.open_inbox(&options.into()).await?;
        Ok(app.as_str().to_string())
    }

    /// Open a mail app at a prefilled compose screen
    ///
    /// Returns the id of the app that was opened.
    pub async fn open_composer(
        &self,
        options: FfiComposeOptions,
    ) -> Result<String, MailLinkError> {
        let app = self.launcher.open_composer(&options.into()).await?;
        Ok(app.as_str().to_string())
    }
}

// ============================================================================
// Free Functions
// ============================================================================

/// List every supported app in registry order
#[uniffi::export]
pub fn list_mail_apps() -> Vec<FfiMailApp> {
    AppId::ALL.into_iter().map(FfiMailApp::from).collect()
}

/// Build the full compose URL for an app without opening it
#[uniffi::export]
pub fn compose_url_for(
    app_id: String,
    options: FfiComposeOptions,
) -> Result<String, MailLinkError> {
    let app: AppId = app_id.parse()?;
    Ok(crate::compose::compose_link(app, &options.into()))
}

/// Parse a JSON options bundle as sent by a JavaScript or web host
#[uniffi::export]
pub fn parse_compose_options(json: String) -> Result<FfiComposeOptions, MailLinkError> {
    let options = ComposeOptions::from_json(&json)?;
    Ok(FfiComposeOptions::from(options))
}

/// Percent-encode the compose fields of an options bundle
#[uniffi::export]
pub fn percent_encode_options(options: FfiComposeOptions) -> FfiComposeOptions {
    let options = ComposeOptions::from(options);
    FfiComposeOptions::from(options.percent_encoded())
}
