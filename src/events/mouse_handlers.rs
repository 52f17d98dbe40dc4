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
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::{App, components::HitTarget, player::PlaybackEngine};

use super::handlers::*;

/// Routes mouse input to the control under the pointer.
///
/// Any button press counts as a user interaction once it has been handled.
/// While a notice is shown, a press only dismisses it.
///
/// # Errors
///
/// Returns an error if the playback engine can no longer be reached.
pub(super) fn process_mouse_event<E: PlaybackEngine>(app: &mut App<E>, mouse: MouseEvent) -> Result<()> {
    match mouse.kind {
        MouseEventKind::Down(button) => {
            if app.controller.surface().has_notice() {
                app.controller.dismiss_notice();
            } else if button == MouseButton::Left {
                process_click(app, mouse.column, mouse.row)?;
            }
            app.controller.notice_interaction();
        }

        MouseEventKind::Drag(MouseButton::Left) => {
            if !app.controller.surface().has_notice() {
                let drag = app.controller.surface().hit_map.volume_drag(mouse.column, mouse.row);
                if let Some(volume) = drag {
                    handle_volume(app, volume)?;
                }
            }
        }

        MouseEventKind::ScrollDown => app.controller.surface_mut().select_next(),
        MouseEventKind::ScrollUp => app.controller.surface_mut().select_previous(),

        _ => {}
    }

    Ok(())
}

fn process_click<E: PlaybackEngine>(app: &mut App<E>, column: u16, row: u16) -> Result<()> {
    let Some(target) = app.controller.surface().hit_map.target_at(column, row) else {
        return Ok(());
    };

    match target {
        HitTarget::Card(index) | HitTarget::PlayAffordance(index) => {
            app.controller.surface_mut().select(index);
            handle_play_track(app, index)
        }
        HitTarget::Previous => handle_play_previous(app),
        HitTarget::PlayPause => handle_toggle_play_pause(app),
        HitTarget::Next => handle_play_next(app),
        HitTarget::ProgressBar(ratio) => handle_seek(app, ratio),
        HitTarget::VolumeSlider(volume) => handle_volume(app, volume),
    }
}
