//! Installed-app detection
//!
//! Probe failures are indistinguishable from "not installed": callers only
//! care whether an app can be used.

use log::debug;

use crate::apps::AppId;
use crate::platform::SchemeProber;

/// Check whether the app named by `app_id` is installed
///
/// Unknown ids return `false` without touching the prober.
pub async fn is_installed(prober: &dyn SchemeProber, app_id: &str) -> bool {
    match AppId::parse(app_id) {
        Some(app) => is_app_installed(prober, app).await,
        None => {
            debug!("Unknown mail app \"{}\", not probing", app_id);
            false
        }
    }
}

/// Check whether `app` is installed
pub async fn is_app_installed(prober: &dyn SchemeProber, app: AppId) -> bool {
    match prober.can_open(app.scheme()).await {
        Ok(installed) => {
            debug!("Probed {} ({}): installed={}", app, app.scheme(), installed);
            installed
        }
        Err(e) => {
            debug!("Probe for {} failed, treating as not installed: {}", app, e);
            false
        }
    }
}

/// All installed apps in registry order
///
/// Probes run one at a time, each awaited before the next.
pub async fn installed_apps(prober: &dyn SchemeProber) -> Vec<AppId> {
    let mut installed = Vec::new();
    for app in AppId::ALL {
        if is_app_installed(prober, app).await {
            installed.push(app);
        }
    }
    installed
}
