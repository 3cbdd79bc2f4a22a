//! Picking the single app to open
//!
//! Resolution order:
//! 1. An explicit `app` in the options wins, with no probing at all
//! 2. Otherwise every app is probed in registry order
//! 3. One installed app is used directly; several are offered in a picker
//!
//! No result at the end is [`LinkError::NoAppAvailable`].

use log::{debug, info};

use crate::apps::AppId;
use crate::error::{LinkError, Result};
use crate::options::{ComposeOptions, PromptOptions};
use crate::platform::{Choice, ChoicePicker, ChoiceRequest, SchemeProber};
use crate::probe::installed_apps;
use crate::settings::PromptDefaults;

/// Build the action sheet for `apps`
///
/// Titles follow the order of `apps`; the cancel label is always last. When
/// `remove_text` is set the sheet has neither title nor message.
pub fn choice_request(
    apps: &[AppId],
    prompt: &PromptOptions,
    defaults: &PromptDefaults,
) -> ChoiceRequest {
    let cancel_label = prompt
        .cancel_label
        .clone()
        .unwrap_or_else(|| defaults.cancel_label.clone());

    let mut options: Vec<String> = apps.iter().map(|app| app.title().to_string()).collect();
    let cancel_index = options.len();
    options.push(cancel_label);

    let (title, message) = if prompt.remove_text {
        (None, None)
    } else {
        (
            Some(prompt.title.clone().unwrap_or_else(|| defaults.title.clone())),
            Some(prompt.message.clone().unwrap_or_else(|| defaults.message.clone())),
        )
    };

    ChoiceRequest {
        options,
        cancel_index,
        title,
        message,
    }
}

/// Let the user pick among the installed apps
///
/// Returns `None` when nothing is installed or the picker is cancelled. A
/// single installed app is returned without showing the picker.
pub async fn ask_app_choice(
    prober: &dyn SchemeProber,
    picker: &dyn ChoicePicker,
    prompt: &PromptOptions,
    defaults: &PromptDefaults,
) -> Option<AppId> {
    let available = installed_apps(prober).await;

    match available.as_slice() {
        [] => {
            debug!("No mail apps installed");
            None
        }
        [only] => {
            debug!("Only {} is installed, skipping picker", only);
            Some(*only)
        }
        _ => {
            let request = choice_request(&available, prompt, defaults);
            let cancel_index = request.cancel_index;
            match picker.present_choice(request).await {
                Choice::Selected(index) if index != cancel_index => {
                    let chosen = available.get(index).copied();
                    debug!("Picker returned index {} ({:?})", index, chosen);
                    chosen
                }
                _ => {
                    debug!("Picker cancelled");
                    None
                }
            }
        }
    }
}

/// Resolve the app targeted by `options`
pub async fn resolve(
    prober: &dyn SchemeProber,
    picker: &dyn ChoicePicker,
    options: &ComposeOptions,
    defaults: &PromptDefaults,
) -> Result<AppId> {
    if let Some(app) = options.explicit_app()? {
        info!("Using explicitly requested app {}", app);
        return Ok(app);
    }

    let app = ask_app_choice(prober, picker, &options.prompt, defaults)
        .await
        .ok_or(LinkError::NoAppAvailable)?;
    info!("Resolved mail app {}", app);
    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_request_uses_defaults() {
        let request = choice_request(
            &[AppId::Gmail, AppId::Outlook],
            &PromptOptions::default(),
            &PromptDefaults::default(),
        );

        assert_eq!(request.options, ["Gmail", "Outlook", "Cancel"]);
        assert_eq!(request.cancel_index, 2);
        assert_eq!(request.title.as_deref(), Some("Open mail app"));
        assert_eq!(request.message.as_deref(), Some("Which app would you like to open?"));
    }

    #[test]
    fn test_choice_request_caller_text_wins() {
        let prompt = PromptOptions {
            title: Some("Mail".to_string()),
            message: Some("Pick".to_string()),
            cancel_label: Some("Not now".to_string()),
            remove_text: false,
        };
        let request = choice_request(&[AppId::AppleMail, AppId::Spark], &prompt, &PromptDefaults::default());

        assert_eq!(request.options, ["Mail", "Spark", "Not now"]);
        assert_eq!(request.title.as_deref(), Some("Mail"));
        assert_eq!(request.message.as_deref(), Some("Pick"));
    }

    #[test]
    fn test_choice_request_remove_text() {
        let prompt = PromptOptions {
            title: Some("ignored".to_string()),
            cancel_label: Some("Close".to_string()),
            remove_text: true,
            ..Default::default()
        };
        let request = choice_request(&[AppId::Gmail, AppId::Airmail], &prompt, &PromptDefaults::default());

        assert_eq!(request.options, ["Gmail", "Airmail", "Close"]);
        assert_eq!(request.title, None);
        assert_eq!(request.message, None);
    }
}
