//! mailpick - Open a mail app from the command line
//!
//! Usage:
//!   mailpick list
//!   mailpick installed [app...]
//!   mailpick inbox [options-json]
//!   mailpick compose [options-json]
//!
//! Options use the same JSON bundle as mobile hosts, e.g.
//! `mailpick compose '{"to": "a@b.com", "subject": "Hi"}'`.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use log::{error, info, warn};
use maillink::{
    AppId, ComposeOptions, InstalledApps, MailLauncher, PromptDefaults, StaticProber,
    SystemLauncher,
};

mod picker;

use picker::TerminalPicker;

const USAGE: &str = "usage: mailpick <list | installed [app...] | inbox [json] | compose [json]>";

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    // Bootstrap config directory
    if let Err(e) = config::init() {
        error!("Failed to initialize config directory: {}", e);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run(&args).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: &[String]) -> Result<()> {
    let (command, rest) = args.split_first().context(USAGE)?;

    match command.as_str() {
        "list" => {
            let installed = InstalledApps::load()?;
            for app in AppId::ALL {
                let marker = if installed.apps.contains(&app) { "*" } else { " " };
                println!("{} {:<11} {:<8} {}", marker, app, app.title(), app.scheme());
            }
            Ok(())
        }
        "installed" => {
            let apps = rest
                .iter()
                .map(|id| id.parse::<AppId>())
                .collect::<Result<Vec<_>, _>>()?;
            let path = InstalledApps { apps }.save()?;
            info!("Saved installed apps to {}", path.display());
            Ok(())
        }
        "inbox" => {
            let options = parse_options(rest)?;
            let app = launcher()?.open_inbox(&options).await?;
            info!("Opened {} inbox", app.title());
            Ok(())
        }
        "compose" => {
            let options = parse_options(rest)?;
            let app = launcher()?.open_composer(&options).await?;
            info!("Opened {} composer", app.title());
            Ok(())
        }
        other => bail!("unknown command \"{}\"\n{}", other, USAGE),
    }
}

fn parse_options(rest: &[String]) -> Result<ComposeOptions> {
    match rest {
        [] => Ok(ComposeOptions::default()),
        [json] => Ok(ComposeOptions::from_json(json)?),
        _ => bail!("expected a single JSON options argument\n{}", USAGE),
    }
}

fn launcher() -> Result<MailLauncher> {
    let installed = InstalledApps::load()?;
    if installed.apps.is_empty() {
        warn!("No installed apps configured; run `mailpick installed <app...>` first");
    }

    let defaults = PromptDefaults::load().unwrap_or_else(|e| {
        warn!("Ignoring prompt defaults: {:#}", e);
        PromptDefaults::default()
    });

    Ok(MailLauncher::new(
        Arc::new(StaticProber::new(installed.apps)),
        Arc::new(SystemLauncher),
        Arc::new(TerminalPicker),
    )
    .with_prompt_defaults(defaults))
}
