// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Playlist Player TUI.
//!
//! A terminal music playlist: click a card to play its track, with transport
//! controls, a seekable progress bar and a volume slider.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns the terminal, the playlist controller and the
//!   event loop.
//! * The **Audio Worker** owns the MPV context and reports playback progress
//!   back as events.
//! * **Input and Tick Threads** capture keyboard and mouse input and drive
//!   periodic redraws.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is restored even when the event loop fails. Communication
//! between the threads is handled via `std::sync::mpsc` channels.

mod components;
mod config;
mod controller;
mod events;
mod model;
mod player;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing::{error, info};

use crate::{
    components::DeckView,
    config::AppConfig,
    controller::PlaylistController,
    events::{AppEvent, process_events},
    model::catalog::Catalog,
    player::AudioPlayer,
    theme::Theme,
};

const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Application state, generic over the playback engine.
struct App<E = AudioPlayer> {
    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub controller: PlaylistController<E, DeckView>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();

        let catalog = Catalog::from_config(config);
        let deck = DeckView::new(&catalog);
        let audio_player = AudioPlayer::new(event_tx.clone())?;

        let mut controller = PlaylistController::new(catalog, audio_player, deck, config.initial_volume());
        controller
            .initialize()
            .context("Failed to initialise playlist")?;

        Ok(Self {
            theme: Theme::default(),
            event_tx,
            event_rx,
            controller,
        })
    }
}

/// The entry point of the application.
///
/// Loads the configuration, starts logging, builds the application state and
/// manages the terminal lifecycle around the event loop.
fn main() -> Result<()> {
    let config = config::load_config();

    let _log_guard = util::logging::init_logging(&config.log_dir())?;
    info!(version = env!("CARGO_PKG_VERSION"), "Starting playdeck");

    let mut app = App::new(&config).context("Failed to initalise application")?;
    info!(tracks = app.controller.catalog().len(), "Playlist ready");

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    if let Err(e) = &res {
        error!(error = ?e, "Application error");
    }

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// Enables raw mode, switches to the alternate screen buffer and turns on
/// mouse capture so clicks reach the application.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This is best-effort and does not return a result, as it runs during
/// cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

/// Starts the input and tick threads and enters the main event loop.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Translate raw terminal input to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                Ok(Event::Resize(..)) => AppEvent::Tick,
                _ => continue,
            };
            if tx_input.send(event).is_err() {
                break;
            }
        }
    });

    // Periodic tick, the minimum redraw rate of the UI.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    process_events(terminal, app)
}
