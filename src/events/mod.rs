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

//! Application event distribution.
//!
//! This module binds every input the application receives to the playlist
//! controller: keyboard and mouse input from the terminal, and notifications
//! from the audio worker.
//!
//! # Architecture
//!
//! 1. **Capture**: Events arrive as [`AppEvent`]s through an `mpsc` channel.
//! 2. **Process**: [`process_events`] routes each one to a handler, which
//!    calls into the [`PlaylistController`](crate::controller::PlaylistController).
//! 3. **Render**: After each event the UI is re-drawn.
//!
//! User input is also reported to the controller as an interaction, after the
//! input's own handler has run, which is what eventually unlocks audio.

mod handlers;
mod key_handlers;
mod mouse_handlers;

use handlers::*;
use key_handlers::process_key_event;
use mouse_handlers::process_mouse_event;

use std::io::Stdout;

use anyhow::{Result, bail};
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tracing::info;

use crate::{
    App,
    player::{PlayOutcome, RequestId},
    render::draw,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),

    PlaySettled {
        request: RequestId,
        outcome: PlayOutcome,
    },
    TimeChanged(f64),
    MetadataLoaded(f64),
    TrackEnded,

    Tick,

    ExitApplication,

    FatalError(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a quit event is received or the event channel
/// is closed.
///
/// # Errors
///
/// Returns an error on a fatal worker failure, if the playback engine can no
/// longer be reached, or if drawing fails.
pub(crate) fn process_events(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        match event {
            AppEvent::ExitApplication => {
                info!("Exit requested");
                break;
            }
            AppEvent::FatalError(message) => bail!(message),
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::Mouse(mouse) => process_mouse_event(app, mouse)?,
            AppEvent::PlaySettled { request, outcome } => handle_play_settled(app, request, outcome)?,
            AppEvent::TimeChanged(seconds) => handle_time_changed(app, seconds),
            AppEvent::MetadataLoaded(duration) => handle_metadata_loaded(app, duration),
            AppEvent::TrackEnded => handle_track_ended(app)?,
            AppEvent::Tick => {}
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}
