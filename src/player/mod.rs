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

//! Audio playback engine.
//!
//! The [`PlaybackEngine`] trait is the capability the playlist controller
//! drives. Starting playback has a deferred outcome: [`PlaybackEngine::play`]
//! only issues the request, and the engine later reports success or failure
//! with an [`AppEvent::PlaySettled`] carrying the same [`RequestId`].
//!
//! [`AudioPlayer`] implements the trait on top of a background worker thread
//! that owns the MPV context, so audio operations never block the UI thread.

mod commands;
#[cfg(test)]
pub(crate) mod testing;

use std::sync::mpsc;

use anyhow::Result;

use crate::{events::AppEvent, player::commands::AudioPlayerCommand};

/// Identifies one play request so that its settlement can be matched up.
pub(crate) type RequestId = u64;

/// Outcome of a play request, the error carries the engine's reason.
pub(crate) type PlayOutcome = std::result::Result<(), String>;

/// An audio object that plays one source at a time.
///
/// Notifications (time progress, metadata, end of track, play settlement) are
/// delivered asynchronously as [`AppEvent`]s rather than through this trait.
pub(crate) trait PlaybackEngine {
    /// Replaces the current source. The next [`play`](Self::play) starts it
    /// from the beginning.
    fn set_source(&mut self, url: &str) -> Result<()>;

    /// Requests playback of the current source, resuming if it is already
    /// loaded.
    fn play(&mut self, request: RequestId) -> Result<()>;

    fn pause(&mut self) -> Result<()>;

    /// Moves the playback position to `position` seconds.
    fn seek(&mut self, position: f64) -> Result<()>;

    /// Sets the output volume, `0.0` to `1.0`.
    fn set_volume(&mut self, volume: f64) -> Result<()>;
}

/// A handle to the MPV playback engine.
///
/// This struct acts as a command proxy; it does not perform audio processing
/// itself but instead sends instructions to a background worker thread.
pub(crate) struct AudioPlayer {
    /// Channel for sending commands to the background worker thread.
    command_tx: mpsc::Sender<AudioPlayerCommand>,
}

impl AudioPlayer {
    /// Spawns the audio worker thread and returns a new player handle.
    ///
    /// # Arguments
    ///
    /// * `event_tx` - A channel to send engine notifications (progress,
    ///   metadata, settlements, errors) back to the main event loop.
    pub(crate) fn new(event_tx: mpsc::Sender<AppEvent>) -> Result<Self> {
        let (command_tx, command_rx) = mpsc::channel::<AudioPlayerCommand>();

        commands::spawn_player_worker(command_rx, event_tx);

        Ok(Self { command_tx })
    }
}

impl PlaybackEngine for AudioPlayer {
    fn set_source(&mut self, url: &str) -> Result<()> {
        self.command_tx
            .send(AudioPlayerCommand::SetSource(url.to_string()))?;
        Ok(())
    }

    fn play(&mut self, request: RequestId) -> Result<()> {
        self.command_tx.send(AudioPlayerCommand::Play(request))?;
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.command_tx.send(AudioPlayerCommand::Pause)?;
        Ok(())
    }

    fn seek(&mut self, position: f64) -> Result<()> {
        self.command_tx.send(AudioPlayerCommand::Seek(position))?;
        Ok(())
    }

    fn set_volume(&mut self, volume: f64) -> Result<()> {
        self.command_tx.send(AudioPlayerCommand::SetVolume(volume))?;
        Ok(())
    }
}
