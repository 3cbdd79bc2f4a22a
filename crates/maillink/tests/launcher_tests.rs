//! Integration tests for the maillink crate
//!
//! These tests drive MailLauncher end to end against recording fakes of the
//! platform capabilities.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use maillink::{
    AppId, Choice, ChoicePicker, ChoiceRequest, ComposeOptions, LinkError, MailLauncher,
    PromptDefaults, PromptOptions, SchemeProber, UrlLauncher,
};
use tokio_test::block_on;

/// Prober reporting a fixed set of apps, recording every scheme it sees
#[derive(Default)]
struct RecordingProber {
    installed: Vec<AppId>,
    failing: Vec<AppId>,
    calls: Mutex<Vec<String>>,
}

impl RecordingProber {
    fn with_installed(installed: &[AppId]) -> Arc<Self> {
        Arc::new(Self {
            installed: installed.to_vec(),
            ..Default::default()
        })
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl SchemeProber for RecordingProber {
    async fn can_open(&self, scheme: &str) -> maillink::error::Result<bool> {
        self.calls.lock().unwrap().push(scheme.to_string());
        if self.failing.iter().any(|app| app.scheme() == scheme) {
            return Err(LinkError::Probe(format!("{scheme} not queryable")));
        }
        Ok(self.installed.iter().any(|app| app.scheme() == scheme))
    }
}

/// Launcher recording opened URLs, optionally failing every call
#[derive(Default)]
struct RecordingLauncher {
    fail: bool,
    opened: Mutex<Vec<String>>,
}

impl RecordingLauncher {
    fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

#[async_trait]
impl UrlLauncher for RecordingLauncher {
    async fn open_url(&self, url: &str) -> maillink::error::Result<()> {
        if self.fail {
            return Err(LinkError::Launch("no handler".to_string()));
        }
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

/// Picker answering with a scripted choice
struct ScriptedPicker {
    answer: Choice,
    requests: Mutex<Vec<ChoiceRequest>>,
}

impl ScriptedPicker {
    fn answering(answer: Choice) -> Arc<Self> {
        Arc::new(Self {
            answer,
            requests: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<ChoiceRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChoicePicker for ScriptedPicker {
    async fn present_choice(&self, request: ChoiceRequest) -> Choice {
        self.requests.lock().unwrap().push(request);
        self.answer
    }
}

struct Harness {
    prober: Arc<RecordingProber>,
    launcher: Arc<RecordingLauncher>,
    picker: Arc<ScriptedPicker>,
    mail: MailLauncher,
}

fn harness(prober: Arc<RecordingProber>, answer: Choice) -> Harness {
    harness_with(prober, Arc::new(RecordingLauncher::default()), answer)
}

fn harness_with(
    prober: Arc<RecordingProber>,
    launcher: Arc<RecordingLauncher>,
    answer: Choice,
) -> Harness {
    let picker = ScriptedPicker::answering(answer);
    let mail = MailLauncher::new(prober.clone(), launcher.clone(), picker.clone());
    Harness {
        prober,
        launcher,
        picker,
        mail,
    }
}

#[test]
fn test_unknown_app_is_never_probed() {
    let h = harness(RecordingProber::with_installed(&AppId::ALL), Choice::Cancelled);

    for id in ["yahoo", "hotmail", "", "apple_mail"] {
        assert!(!block_on(h.mail.is_app_installed(id)));
    }
    assert_eq!(h.prober.call_count(), 0);
}

#[test]
fn test_probe_failure_reads_as_not_installed() {
    let prober = Arc::new(RecordingProber {
        installed: vec![AppId::Gmail],
        failing: vec![AppId::Gmail],
        ..Default::default()
    });
    let h = harness(prober, Choice::Cancelled);

    assert!(!block_on(h.mail.is_app_installed("gmail")));
    assert_eq!(h.prober.call_count(), 1);
}

#[test]
fn test_explicit_app_skips_probing() {
    let h = harness(RecordingProber::with_installed(&[]), Choice::Cancelled);

    let app = block_on(h.mail.resolve(&ComposeOptions::new().app("gmail"))).unwrap();
    assert_eq!(app, AppId::Gmail);
    assert_eq!(h.prober.call_count(), 0);
    assert!(h.picker.requests().is_empty());
}

#[test]
fn test_unknown_explicit_app_is_invalid() {
    let h = harness(RecordingProber::with_installed(&AppId::ALL), Choice::Cancelled);

    let err = block_on(h.mail.resolve(&ComposeOptions::new().app("yahoo"))).unwrap_err();
    assert!(matches!(err, LinkError::InvalidOptions(_)));
    assert_eq!(h.prober.call_count(), 0);

    let err = block_on(h.mail.open_composer(&ComposeOptions::new().app("yahoo"))).unwrap_err();
    assert!(matches!(err, LinkError::InvalidOptions(_)));
    assert!(h.launcher.opened().is_empty());
}

#[test]
fn test_empty_app_means_no_explicit_app() {
    let h = harness(RecordingProber::with_installed(&[AppId::Outlook]), Choice::Cancelled);

    let app = block_on(h.mail.resolve(&ComposeOptions::new().app(""))).unwrap();
    assert_eq!(app, AppId::Outlook);
    assert_eq!(h.prober.call_count(), AppId::ALL.len());
}

#[test]
fn test_single_installed_app_skips_picker() {
    let h = harness(RecordingProber::with_installed(&[AppId::Spark]), Choice::Cancelled);

    let app = block_on(h.mail.resolve(&ComposeOptions::new())).unwrap();
    assert_eq!(app, AppId::Spark);
    assert!(h.picker.requests().is_empty());
}

#[test]
fn test_nothing_installed_is_no_app_available() {
    let h = harness(RecordingProber::with_installed(&[]), Choice::Selected(0));

    let err = block_on(h.mail.open_inbox(&ComposeOptions::new())).unwrap_err();
    assert_eq!(err, LinkError::NoAppAvailable);
    assert!(h.picker.requests().is_empty());
    assert!(h.launcher.opened().is_empty());
}

#[test]
fn test_picker_selection_maps_back_to_app() {
    let h = harness(
        RecordingProber::with_installed(&[AppId::Outlook, AppId::Gmail]),
        Choice::Selected(1),
    );

    let options = ComposeOptions::new().prompt(PromptOptions {
        cancel_label: Some("Dismiss".to_string()),
        ..Default::default()
    });
    let app = block_on(h.mail.resolve(&options)).unwrap();
    assert_eq!(app, AppId::Outlook);

    let requests = h.picker.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].options, ["Gmail", "Outlook", "Dismiss"]);
    assert_eq!(requests[0].cancel_index, 2);
    assert_eq!(requests[0].title.as_deref(), Some("Open mail app"));
}

#[test]
fn test_picker_cancel_is_no_app_available() {
    let h = harness(
        RecordingProber::with_installed(&[AppId::Gmail, AppId::Outlook]),
        Choice::Cancelled,
    );

    let err = block_on(h.mail.open_composer(&ComposeOptions::new())).unwrap_err();
    assert_eq!(err, LinkError::NoAppAvailable);
    assert!(h.launcher.opened().is_empty());
}

#[test]
fn test_picker_returning_cancel_index_is_cancel() {
    let h = harness(
        RecordingProber::with_installed(&[AppId::Gmail, AppId::Outlook]),
        Choice::Selected(2),
    );

    assert_eq!(block_on(h.mail.ask_app_choice(&PromptOptions::default())), None);
}

#[test]
fn test_remove_text_hides_title_and_message() {
    let h = harness(
        RecordingProber::with_installed(&[AppId::AppleMail, AppId::Airmail]),
        Choice::Selected(0),
    );

    let prompt = PromptOptions {
        title: Some("Choose".to_string()),
        message: Some("Which one?".to_string()),
        remove_text: true,
        ..Default::default()
    };
    assert_eq!(block_on(h.mail.ask_app_choice(&prompt)), Some(AppId::AppleMail));

    let request = &h.picker.requests()[0];
    assert_eq!(request.options, ["Mail", "Airmail", "Cancel"]);
    assert_eq!(request.title, None);
    assert_eq!(request.message, None);
}

#[test]
fn test_custom_prompt_defaults() {
    let prober = RecordingProber::with_installed(&[AppId::Gmail, AppId::Spark]);
    let picker = ScriptedPicker::answering(Choice::Cancelled);
    let mail = MailLauncher::new(prober, Arc::new(RecordingLauncher::default()), picker.clone())
        .with_prompt_defaults(PromptDefaults {
            title: "Mail öffnen".to_string(),
            message: "Welche App?".to_string(),
            cancel_label: "Abbrechen".to_string(),
        });

    assert_eq!(block_on(mail.ask_app_choice(&PromptOptions::default())), None);

    let request = &picker.requests()[0];
    assert_eq!(request.options, ["Gmail", "Spark", "Abbrechen"]);
    assert_eq!(request.title.as_deref(), Some("Mail öffnen"));
    assert_eq!(request.message.as_deref(), Some("Welche App?"));
}

#[test]
fn test_open_inbox_uses_registry_scheme() {
    let h = harness(RecordingProber::with_installed(&[]), Choice::Cancelled);

    block_on(h.mail.open_inbox(&ComposeOptions::new().app("apple-mail"))).unwrap();
    block_on(h.mail.open_inbox(&ComposeOptions::new().app("outlook").subject("ignored"))).unwrap();

    assert_eq!(h.launcher.opened(), ["message://", "ms-outlook://"]);
}

#[test]
fn test_open_composer_urls() {
    let h = harness(RecordingProber::with_installed(&[]), Choice::Cancelled);

    let gmail = ComposeOptions::new().app("gmail").to("a@b.com").subject("Hi");
    let apple = ComposeOptions::new().app("apple-mail").to("a@b.com").subject("Hi");

    assert_eq!(block_on(h.mail.open_composer(&gmail)).unwrap(), AppId::Gmail);
    assert_eq!(block_on(h.mail.open_composer(&apple)).unwrap(), AppId::AppleMail);

    assert_eq!(
        h.launcher.opened(),
        ["googlegmail://co?to=a@b.com&subject=Hi", "mailto:a@b.com?subject=Hi"]
    );
}

#[test]
fn test_open_composer_after_picker() {
    let h = harness(
        RecordingProber::with_installed(&[AppId::Spark, AppId::Airmail]),
        Choice::Selected(1),
    );

    let options = ComposeOptions::new().to("a@b.com").body("Hello");
    assert_eq!(block_on(h.mail.open_composer(&options)).unwrap(), AppId::Airmail);
    assert_eq!(h.launcher.opened(), ["airmail://compose?to=a@b.com&htmlBody=Hello"]);
}

#[test]
fn test_launch_failure_propagates() {
    let launcher = Arc::new(RecordingLauncher {
        fail: true,
        ..Default::default()
    });
    let h = harness_with(RecordingProber::with_installed(&[]), launcher, Choice::Cancelled);

    let err = block_on(h.mail.open_inbox(&ComposeOptions::new().app("gmail"))).unwrap_err();
    assert_eq!(err, LinkError::Launch("no handler".to_string()));
}

#[test]
fn test_installed_apps_registry_order() {
    let h = harness(
        RecordingProber::with_installed(&[AppId::Outlook, AppId::Inbox, AppId::AppleMail]),
        Choice::Cancelled,
    );

    assert_eq!(
        block_on(h.mail.installed_apps()),
        [AppId::AppleMail, AppId::Inbox, AppId::Outlook]
    );
}

#[test]
fn test_json_options_end_to_end() {
    let h = harness(RecordingProber::with_installed(&[]), Choice::Cancelled);

    let options =
        ComposeOptions::from_json(r#"{"app": "spark", "to": "a@b.com", "subject": "Hi"}"#).unwrap();
    block_on(h.mail.open_composer(&options)).unwrap();
    assert_eq!(h.launcher.opened(), ["readdle-spark://compose?recipient=a@b.com&subject=Hi"]);

    let err = ComposeOptions::from_json(r#""gmail""#).unwrap_err();
    assert!(matches!(err, LinkError::InvalidOptions(_)));
}
