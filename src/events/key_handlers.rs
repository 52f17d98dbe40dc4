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

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::{App, events::AppEvent, player::PlaybackEngine};

use super::handlers::*;

/// Maps keyboard input to playlist actions.
///
/// While a notice is shown the key only dismisses it. Every key press counts
/// as a user interaction once it has been handled.
///
/// # Errors
///
/// Returns an error if the playback engine can no longer be reached.
pub(super) fn process_key_event<E: PlaybackEngine>(app: &mut App<E>, key: KeyEvent) -> Result<()> {
    if app.controller.surface().has_notice() {
        app.controller.dismiss_notice();
    } else {
        process_global_key_event(app, key)?;
    }

    app.controller.notice_interaction();
    Ok(())
}

fn process_global_key_event<E: PlaybackEngine>(app: &mut App<E>, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Char(' ') => handle_toggle_play_pause(app)?,
        KeyCode::Char('n') => handle_play_next(app)?,
        KeyCode::Char('p') => handle_play_previous(app)?,

        // Card selection
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Char('l') | KeyCode::Right => {
            app.controller.surface_mut().select_next()
        }
        KeyCode::Char('k') | KeyCode::Up | KeyCode::Char('h') | KeyCode::Left => {
            app.controller.surface_mut().select_previous()
        }
        KeyCode::Enter => {
            if let Some(index) = app.controller.surface().selected {
                handle_play_track(app, index)?;
            }
        }

        KeyCode::Char('-') => handle_volume_step(app, false)?,
        KeyCode::Char('=') | KeyCode::Char('+') => handle_volume_step(app, true)?,

        _ => {}
    }

    Ok(())
}
