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
use tracing::{debug, error};

use crate::{
    App,
    controller::{self, PlaylistError},
    player::{PlayOutcome, PlaybackEngine, RequestId},
};

const VOLUME_STEP: f64 = 0.05;

/// Contains a controller result.
///
/// Rejected playback is logged, locked audio and out of range requests are
/// expected and only traced. An unreachable engine is propagated.
pub(super) fn settle(result: controller::Result<()>) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(PlaylistError::Engine(e)) => Err(e),
        Err(e @ PlaylistError::PlaybackRejected { .. }) => {
            error!(error = %e, "Playback failed");
            Ok(())
        }
        Err(e) => {
            debug!(error = %e, "Request ignored");
            Ok(())
        }
    }
}

pub(super) fn handle_play_settled<E: PlaybackEngine>(
    app: &mut App<E>,
    request: RequestId,
    outcome: PlayOutcome,
) -> Result<()> {
    settle(app.controller.on_play_settled(request, outcome))
}

pub(super) fn handle_time_changed<E: PlaybackEngine>(app: &mut App<E>, seconds: f64) {
    app.controller.on_time_update(seconds);
}

pub(super) fn handle_metadata_loaded<E: PlaybackEngine>(app: &mut App<E>, duration: f64) {
    app.controller.on_metadata_loaded(duration);
}

pub(super) fn handle_track_ended<E: PlaybackEngine>(app: &mut App<E>) -> Result<()> {
    settle(app.controller.on_track_ended())
}

pub(super) fn handle_play_track<E: PlaybackEngine>(app: &mut App<E>, index: usize) -> Result<()> {
    settle(app.controller.play_track(index))
}

pub(super) fn handle_toggle_play_pause<E: PlaybackEngine>(app: &mut App<E>) -> Result<()> {
    settle(app.controller.toggle_play_pause())
}

pub(super) fn handle_play_next<E: PlaybackEngine>(app: &mut App<E>) -> Result<()> {
    settle(app.controller.play_next())
}

pub(super) fn handle_play_previous<E: PlaybackEngine>(app: &mut App<E>) -> Result<()> {
    settle(app.controller.play_previous())
}

pub(super) fn handle_seek<E: PlaybackEngine>(app: &mut App<E>, ratio: f64) -> Result<()> {
    settle(app.controller.on_progress_bar_click(ratio))
}

pub(super) fn handle_volume<E: PlaybackEngine>(app: &mut App<E>, volume: f64) -> Result<()> {
    settle(app.controller.on_volume_change(volume))
}

/// Keyboard volume steps, restricted to the slider's range.
pub(super) fn handle_volume_step<E: PlaybackEngine>(app: &mut App<E>, up: bool) -> Result<()> {
    let current = app.controller.state().volume;
    let delta = if up { VOLUME_STEP } else { -VOLUME_STEP };
    let volume = ((current + delta) * 100.0).round() / 100.0;
    handle_volume(app, volume.clamp(0.0, 1.0))
}
