//! MailLauncher facade
//!
//! Wires a prober, a URL launcher and a picker together and exposes the
//! high-level operations: open the inbox, open a prefilled compose screen.

use std::sync::Arc;

use log::{info, warn};

use crate::apps::AppId;
use crate::compose::compose_link;
use crate::error::Result;
use crate::options::{ComposeOptions, PromptOptions};
use crate::platform::{ChoicePicker, SchemeProber, UrlLauncher};
use crate::settings::PromptDefaults;
use crate::{probe, resolve};

/// Entry point for opening mail apps
///
/// Holds no per-call state: every operation resolves its app from scratch.
pub struct MailLauncher {
    prober: Arc<dyn SchemeProber>,
    launcher: Arc<dyn UrlLauncher>,
    picker: Arc<dyn ChoicePicker>,
    defaults: PromptDefaults,
}

impl MailLauncher {
    /// Create a launcher with the built-in prompt text
    pub fn new(
        prober: Arc<dyn SchemeProber>,
        launcher: Arc<dyn UrlLauncher>,
        picker: Arc<dyn ChoicePicker>,
    ) -> Self {
        Self {
            prober,
            launcher,
            picker,
            defaults: PromptDefaults::default(),
        }
    }

    /// Builder method to replace the default prompt text
    pub fn with_prompt_defaults(mut self, defaults: PromptDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn prompt_defaults(&self) -> &PromptDefaults {
        &self.defaults
    }

    /// Whether the app named `app_id` is installed; `false` for unknown ids
    pub async fn is_app_installed(&self, app_id: &str) -> bool {
        probe::is_installed(self.prober.as_ref(), app_id).await
    }

    /// All installed apps in registry order
    pub async fn installed_apps(&self) -> Vec<AppId> {
        probe::installed_apps(self.prober.as_ref()).await
    }

    /// Let the user pick an installed app
    pub async fn ask_app_choice(&self, prompt: &PromptOptions) -> Option<AppId> {
        resolve::ask_app_choice(
            self.prober.as_ref(),
            self.picker.as_ref(),
            prompt,
            &self.defaults,
        )
        .await
    }

    /// Resolve the app `options` target without opening it
    pub async fn resolve(&self, options: &ComposeOptions) -> Result<AppId> {
        resolve::resolve(
            self.prober.as_ref(),
            self.picker.as_ref(),
            options,
            &self.defaults,
        )
        .await
    }

    /// Open the resolved app at its inbox
    ///
    /// Returns the app that was opened.
    pub async fn open_inbox(&self, options: &ComposeOptions) -> Result<AppId> {
        let app = self.resolve(options).await?;
        self.launch(app, app.scheme()).await?;
        Ok(app)
    }

    /// Open the resolved app at a prefilled compose screen
    ///
    /// Returns the app that was opened.
    pub async fn open_composer(&self, options: &ComposeOptions) -> Result<AppId> {
        let app = self.resolve(options).await?;
        let url = compose_link(app, options);
        self.launch(app, &url).await?;
        Ok(app)
    }

    async fn launch(&self, app: AppId, url: &str) -> Result<()> {
        info!("Opening {} with {}", app, url);
        self.launcher.open_url(url).await.inspect_err(|e| {
            warn!("Failed to open {}: {}", app, e);
        })
    }
}
