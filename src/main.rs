// SPDX-License-Identifier: MPL-2.0

//! Command line front end for the player popup pipeline.
//!
//! ```bash
//! pdga-profiler links https://www.pdga.com/tour/event/12345
//! pdga-profiler preview /player/12345
//! pdga-profiler init-config
//! ```

use std::future::Future;
use std::process;
use std::time::Duration;

use bpaf::Bpaf;
use pdga_profiler::app::{HoverController, HoverState};
use pdga_profiler::config::{APP_NAME, IS_DEVEL};
use pdga_profiler::pdga::links::find_player_links;
use pdga_profiler::pdga::{FetchError, HttpProfileSource, ProfileRef, ProfileSource};
use pdga_profiler::runtime;
use pdga_profiler::state::ProfilerSettings;
use pdga_profiler::state::settings::SettingsError;
use pdga_profiler::ui::PopupDocument;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

// ---------------------------------------------------------------------------
// CLI parsing
// ---------------------------------------------------------------------------

/// Player profile popups for PDGA pages
#[derive(Debug, Clone, Bpaf)]
#[bpaf(options, version)]
struct Cli {
    /// Log debug output
    #[bpaf(short, long)]
    verbose: bool,

    #[bpaf(external(command))]
    command: Command,
}

#[derive(Debug, Clone, Bpaf)]
enum Command {
    /// List the player links a page would get popups for
    #[bpaf(command)]
    Links {
        /// Page URL or path to a saved HTML file
        #[bpaf(positional("PAGE"))]
        page: String,
    },

    /// Hover a player link and print the popup it produces
    #[bpaf(command)]
    Preview {
        /// Pointer x in viewport pixels
        #[bpaf(long, argument("PX"), fallback(100.0))]
        cursor_x: f64,

        /// Pointer y in viewport pixels
        #[bpaf(long, argument("PX"), fallback(200.0))]
        cursor_y: f64,

        /// Viewport height in pixels
        #[bpaf(long, argument("PX"), fallback(900.0))]
        viewport_height: f64,

        /// Rendered popup height in pixels
        #[bpaf(long, argument("PX"), fallback(360.0))]
        popup_height: f64,

        /// Give up after this many seconds
        #[bpaf(long, argument("SECONDS"), fallback(30u64))]
        wait: u64,

        /// Player link href, e.g. /player/12345
        #[bpaf(positional("REFERENCE"))]
        reference: String,
    },

    /// Write the default settings file
    #[bpaf(command("init-config"))]
    InitConfig,
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("no popup was shown for {0} (see log for details)")]
    NoPopup(String),
    #[error("could not show {reference}: {reason}")]
    PreviewFailed { reference: String, reason: String },
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

async fn list_links(settings: &ProfilerSettings, page: &str) -> Result<(), CliError> {
    let html = if std::path::Path::new(page).exists() {
        std::fs::read_to_string(page).map_err(|source| CliError::Read {
            path: page.to_string(),
            source,
        })?
    } else {
        HttpProfileSource::new(settings)?.get_text(page).await?
    };

    let links = find_player_links(&html);
    tracing::info!(count = links.len(), "found player links");
    for link in links {
        let profile = ProfileRef::with_settings(&link.href, settings)?;
        println!("{profile}\t{}", link.text);
    }
    Ok(())
}

struct PreviewArgs {
    reference: String,
    cursor_x: f64,
    cursor_y: f64,
    viewport_height: f64,
    popup_height: f64,
    wait: Duration,
}

/// Forwards every failed fetch so `preview` can stop waiting for a popup
/// that will never appear.
struct ReportingSource {
    inner: HttpProfileSource,
    failures: mpsc::UnboundedSender<String>,
}

impl ProfileSource for ReportingSource {
    fn fetch(&self, profile: &ProfileRef) -> impl Future<Output = Result<String, FetchError>> + Send {
        let pending = self.inner.fetch(profile);
        let failures = self.failures.clone();
        async move {
            let result = pending.await;
            if let Err(e) = &result {
                let _ = failures.send(e.to_string());
            }
            result
        }
    }
}

async fn preview(settings: &ProfilerSettings, args: PreviewArgs) -> Result<(), CliError> {
    let (failures, mut failed) = mpsc::unbounded_channel();
    let source = ReportingSource {
        inner: HttpProfileSource::new(settings)?,
        failures,
    };
    let popup = PopupDocument::new(args.viewport_height, args.popup_height);
    let controller = HoverController::new(source, popup, settings);

    controller.on_link_enter(&args.reference, args.cursor_x, args.cursor_y);

    // The pipeline runs detached; poll until the popup shows up or the
    // fetch reports a failure.
    let deadline = tokio::time::Instant::now() + args.wait;
    while controller.state() != HoverState::Visible {
        if tokio::time::Instant::now() >= deadline {
            return Err(CliError::NoPopup(args.reference));
        }
        tokio::select! {
            Some(reason) = failed.recv() => {
                return Err(CliError::PreviewFailed {
                    reference: args.reference.clone(),
                    reason,
                });
            }
            _ = tokio::time::sleep(Duration::from_millis(50)) => {}
        }
    }

    let html = controller.popup().lock().unwrap().outer_html();
    println!("{html}");
    Ok(())
}

fn init_config(settings: &ProfilerSettings) -> Result<(), CliError> {
    settings.save()?;
    if let Some(path) = ProfilerSettings::settings_path() {
        eprintln!("Settings written to {}", path.display());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn init_tracing(verbose: bool) {
    let default = if verbose || IS_DEVEL {
        "pdga_profiler=debug"
    } else {
        "pdga_profiler=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = cli().run();
    init_tracing(cli.verbose);
    tracing::debug!("{APP_NAME} {}", env!("CARGO_PKG_VERSION"));

    let settings = ProfilerSettings::load();

    let result = match cli.command {
        Command::Links { page } => runtime::block_on(list_links(&settings, &page)),
        Command::Preview {
            cursor_x,
            cursor_y,
            viewport_height,
            popup_height,
            wait,
            reference,
        } => {
            let args = PreviewArgs {
                reference,
                cursor_x,
                cursor_y,
                viewport_height,
                popup_height,
                wait: Duration::from_secs(wait),
            };
            runtime::block_on(preview(&settings, args))
        }
        Command::InitConfig => init_config(&settings),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    /// Answers a single request with the given status and body.
    fn serve_once(status: u16, body: &'static str) -> String {
        let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();
        thread::spawn(move || {
            if let Ok(request) = server.recv() {
                let response = tiny_http::Response::from_string(body).with_status_code(status);
                let _ = request.respond(response);
            }
        });
        format!("http://{addr}")
    }

    fn settings(origin: String) -> ProfilerSettings {
        ProfilerSettings {
            origin,
            show_delay_ms: 0,
            request_timeout_secs: Some(5),
            ..ProfilerSettings::default()
        }
    }

    fn args(reference: &str, wait: Duration) -> PreviewArgs {
        PreviewArgs {
            reference: reference.to_string(),
            cursor_x: 100.0,
            cursor_y: 200.0,
            viewport_height: 900.0,
            popup_height: 360.0,
            wait,
        }
    }

    #[tokio::test]
    async fn test_preview_shows_profile() {
        let origin = serve_once(200, r#"<h1 id="page-title">Jane Doe</h1>"#);
        let result = preview(&settings(origin), args("/player/42", Duration::from_secs(10))).await;
        assert!(result.is_ok(), "{result:?}");
    }

    #[tokio::test]
    async fn test_preview_fails_fast_on_fetch_error() {
        let origin = serve_once(404, "missing");
        let started = std::time::Instant::now();

        let result = preview(&settings(origin), args("/player/0", Duration::from_secs(30))).await;

        match result {
            Err(CliError::PreviewFailed { reference, reason }) => {
                assert_eq!(reference, "/player/0");
                assert!(reason.contains("404"), "{reason}");
            }
            other => panic!("expected fetch failure, got {other:?}"),
        }
        assert!(started.elapsed() < Duration::from_secs(10));
    }

    #[tokio::test]
    async fn test_preview_gives_up_at_deadline() {
        let result = preview(
            &ProfilerSettings::default(),
            args("/player/42", Duration::ZERO),
        )
        .await;
        assert!(matches!(result, Err(CliError::NoPopup(reference)) if reference == "/player/42"));
    }
}
