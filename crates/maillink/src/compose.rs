//! Compose URL construction
//!
//! Values are concatenated raw. Use [`ComposeOptions::percent_encoded`] first
//! when they may contain reserved characters.

use crate::apps::{AppId, ComposePath};
use crate::options::ComposeOptions;

/// Build `<path>?<params>` for `app`'s compose screen
///
/// Parameters follow the order to, cc, bcc, subject, body and are only
/// emitted when the app's dialect has a key for them and the value is
/// non-empty. The `?` is present even without parameters.
pub fn build_compose_url(app: AppId, options: &ComposeOptions) -> String {
    let Some(dialect) = app.dialect() else {
        return String::new();
    };

    let path = match dialect.path {
        ComposePath::Recipient => options.to.as_deref().unwrap_or(""),
        ComposePath::Fixed(path) => path,
    };

    let fields = [
        (dialect.to, &options.to),
        (dialect.cc, &options.cc),
        (dialect.bcc, &options.bcc),
        (dialect.subject, &options.subject),
        (dialect.body, &options.body),
    ];

    let params: Vec<String> = fields
        .into_iter()
        .filter_map(|(key, value)| {
            let key = key?;
            let value = value.as_deref().filter(|v| !v.is_empty())?;
            Some(format!("{key}={value}"))
        })
        .collect();

    format!("{}?{}", path, params.join("&"))
}

/// Full URL that opens `app` at its compose screen
pub fn compose_link(app: AppId, options: &ComposeOptions) -> String {
    format!("{}{}", app.launch_prefix(), build_compose_url(app, options))
}
