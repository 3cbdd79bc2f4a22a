//! Desktop implementations of the platform traits
//!
//! Desktop shells can't ask the OS which URL schemes are registered, so
//! installation is declared up front (see [`crate::settings::InstalledApps`]).

use async_trait::async_trait;

use crate::apps::AppId;
use crate::error::{LinkError, Result};
use crate::platform::{SchemeProber, UrlLauncher};

/// Opens URLs with the system handler via the `open` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

#[async_trait]
impl UrlLauncher for SystemLauncher {
    async fn open_url(&self, url: &str) -> Result<()> {
        open::that(url).map_err(|e| LinkError::Launch(format!("{url}: {e}")))
    }
}

/// Reports a fixed set of apps as installed
#[derive(Debug, Default, Clone)]
pub struct StaticProber {
    installed: Vec<AppId>,
}

impl StaticProber {
    pub fn new(installed: impl IntoIterator<Item = AppId>) -> Self {
        Self {
            installed: installed.into_iter().collect(),
        }
    }
}

#[async_trait]
impl SchemeProber for StaticProber {
    async fn can_open(&self, scheme: &str) -> Result<bool> {
        Ok(self.installed.iter().any(|app| app.scheme() == scheme))
    }
}
