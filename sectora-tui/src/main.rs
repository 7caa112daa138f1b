//! Terminal UI for sectora: register delivery sectors and find the ones open near you.

mod app;
mod feed;
mod input;
mod ui;

use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
    time::Duration as StdDuration,
};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use reqwest::Client;
use sectora_core::{
    model::Coordinates,
    ports::PortError,
    service::SectorService,
    store::SectorAction,
};
use sectora_provider_http as http;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::app::{App, SectorForm};
use crate::feed::FeedEvent;
use crate::input::Action;

#[derive(Debug, Parser)]
#[command(
    name = "sectora",
    about = "Manage delivery sectors and see which ones serve your location right now",
    version
)]
struct Cli {
    /// Root URL of the sectors REST API
    #[arg(long, env = "SECTORA_API_URL", default_value = http::DEFAULT_BASE_URL)]
    api_url: String,

    /// Observer latitude in decimal degrees
    #[arg(long, env = "SECTORA_LAT", allow_hyphen_values = true, requires = "lng")]
    lat: Option<f64>,

    /// Observer longitude in decimal degrees
    #[arg(long, env = "SECTORA_LNG", allow_hyphen_values = true, requires = "lat")]
    lng: Option<f64>,

    /// Seconds between background refreshes of the sector list
    #[arg(long, env = "SECTORA_REFRESH_SECS", default_value_t = 15)]
    refresh_secs: u64,

    /// File receiving log output while the terminal UI is active
    #[arg(long, env = "SECTORA_LOG_FILE", default_value = "sectora.log")]
    log_file: PathBuf,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_err| EnvFilter::new("sectora=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    // HTTP + service setup
    let client = Client::builder().user_agent("sectora/0.1").build()?;
    let service = Arc::new(SectorService::new(http::port(client, cli.api_url.clone())));
    info!(api_url = %cli.api_url, "starting sectora");

    // App state
    let position = cli.lat.zip(cli.lng).map(|(lat, lng)| Coordinates::new(lat, lng));
    let app = App::new(Arc::clone(&service), position);

    // Background refresh delivering full snapshots
    let (tx, rx) = mpsc::unbounded_channel();
    let poller = feed::spawn(service, StdDuration::from_secs(cli.refresh_secs.max(1)), tx);

    // Terminal init
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let res = run(&mut terminal, app, rx).await;
    poller.abort();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    mut snapshots: mpsc::UnboundedReceiver<FeedEvent>,
) -> Result<()> {
    // Initial fetch; the backend may take a while to wake up
    app.is_loading = true;
    terminal.draw(|frame| ui::draw(frame, &app))?;
    reload(&mut app).await;

    loop {
        while let Ok(event) = snapshots.try_recv() {
            feed::apply(&mut app.store, event);
        }

        // Draw current UI
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Poll for input (non-blocking, small timeout to keep CPU low)
        if event::poll(StdDuration::from_millis(100))?
            && let CEvent::Key(key) = event::read()?
        {
            match input::handle_key_event(key, &mut app) {
                Action::Quit => break,
                Action::None => {}
                Action::Reload => {
                    app.is_loading = true;
                    terminal.draw(|frame| ui::draw(frame, &app))?;
                    reload(&mut app).await;
                }
                Action::SubmitSector => {
                    app.is_loading = true;
                    app.error_message = None;
                    terminal.draw(|frame| ui::draw(frame, &app))?;
                    submit(&mut app).await;
                }
            }
        }
    }

    Ok(())
}

// One-shot fetch; unlike push snapshots an empty result replaces the list.
async fn reload(app: &mut App) {
    let res = app.service.load().await;
    app.is_loading = false;
    match res {
        Ok(sectors) => {
            app.store.apply(SectorAction::Replace(sectors));
            app.store.clear_error();
            app.sector_list_index = 0;
        }
        Err(err) => app.store.apply(SectorAction::Failed(err.to_string())),
    }
}

async fn submit(app: &mut App) {
    let draft = app.form.to_draft();
    let res = app.service.register(&draft).await;

    app.is_loading = false;
    match res {
        Ok(sectors) => {
            app.store.apply(SectorAction::Replace(sectors));
            app.store.clear_error();
            app.form = SectorForm::default();
            app.info_message = Some(format!("Sector {} registered", draft.name.trim()));
        }
        Err(PortError::Invalid(errors)) => {
            app.form.errors = errors;
        }
        Err(err) => {
            warn!(%err, "sector registration failed");
            app.store.apply(SectorAction::Failed(err.to_string()));
            app.error_message = Some(format!("Could not register sector: {err}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex as StdMutex;

    use async_trait::async_trait;
    use sectora_core::{PortError, Sector, SectorId, SectorPort};

    use super::*;

    // `list` always fails; `create` stores and succeeds.
    #[derive(Default)]
    struct FlakyPort {
        sectors: StdMutex<Vec<Sector>>,
    }

    #[async_trait]
    impl SectorPort for FlakyPort {
        async fn list(&self) -> Result<Vec<Sector>, PortError> {
            Err(PortError::Internal("backend down".into()))
        }

        async fn create(&self, sector: &Sector) -> Result<Vec<Sector>, PortError> {
            let mut sectors = self
                .sectors
                .lock()
                .map_err(|err| PortError::Internal(err.to_string()))?;
            let mut stored = sector.clone();
            stored.id = Some(SectorId(format!("id-{}", sectors.len())));
            sectors.push(stored);
            Ok(sectors.clone())
        }
    }

    fn app() -> App {
        let service = SectorService::new(Arc::new(FlakyPort::default()));
        App::new(Arc::new(service), None)
    }

    fn fill_form(app: &mut App) {
        app.form = SectorForm {
            name: "Centro".into(),
            address: "Calle 26".into(),
            lat: "4.710989".into(),
            lng: "-74.072092".into(),
            from: "08:00".into(),
            to: "20:00".into(),
            ..SectorForm::default()
        };
    }

    #[tokio::test]
    async fn failed_reload_records_store_error() {
        let mut app = app();
        app.is_loading = true;
        reload(&mut app).await;

        assert!(!app.is_loading, "loading flag reset");
        assert_eq!(app.store.error(), Some("Internal error: backend down"));
        assert!(app.store.sectors().is_empty(), "nothing loaded");
    }

    #[tokio::test]
    async fn successful_submit_clears_earlier_fetch_error() {
        let mut app = app();
        reload(&mut app).await;
        assert!(app.store.error().is_some(), "reload failed first");

        fill_form(&mut app);
        submit(&mut app).await;

        assert_eq!(app.store.sectors().len(), 1);
        assert_eq!(app.info_message.as_deref(), Some("Sector Centro registered"));
        assert!(app.store.error().is_none(), "stale fetch error cleared");
        assert!(app.form.name.is_empty(), "form reset after registering");
    }

    #[tokio::test]
    async fn invalid_submit_keeps_form_and_shows_field_errors() {
        let mut app = app();
        fill_form(&mut app);
        app.form.to = "07:00".into();
        submit(&mut app).await;

        assert_eq!(app.form.name, "Centro", "typed values kept");
        assert!(app.form.errors.schedule_to.is_some(), "order error shown");
        assert!(app.store.sectors().is_empty(), "nothing registered");
        assert!(app.info_message.is_none(), "no success message");
    }
}
