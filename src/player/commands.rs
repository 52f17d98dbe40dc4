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

//! MPV-backed audio worker.
//!
//! The worker owns the `libmpv` context and runs two loops in turn:
//! 1. **Command Channel**: drains [`AudioPlayerCommand`]s sent by
//!    [`AudioPlayer`](super::AudioPlayer).
//! 2. **Event Channel**: translates MPV events into [`AppEvent`]s for the
//!    main loop.
//!
//! # Play settlement
//!
//! Playing a newly set source issues `loadfile` and leaves the request
//! pending. It settles successfully when MPV reports `FileLoaded`, or fails
//! when the load command is refused or the file ends with an error. Playing
//! the source that is already loaded just unpauses and settles at once.
//!
//! MPV refusing a command is logged and does not stop the worker. Only a
//! failed setup or a closed channel ends it.

use anyhow::{Context, Result};
use mpv::Format;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};
use tracing::{debug, warn};

use crate::{
    events::AppEvent,
    player::{PlayOutcome, RequestId},
};

/// MPV volume that corresponds to a volume of `1.0`.
const MPV_FULL_VOLUME: f64 = 100.0;

/// How long to wait for an MPV event before checking for commands again.
const EVENT_WAIT_SECS: f64 = 0.05;

#[derive(Debug)]
pub(crate) enum AudioPlayerCommand {
    SetSource(String),
    Play(RequestId),
    Pause,
    Seek(f64),
    SetVolume(f64),
}

/// The MPV operations the command loop needs.
trait MpvControl {
    fn run_command(&mut self, args: &[&str]) -> Result<()>;
    fn set_paused(&mut self, paused: bool) -> Result<()>;
    /// Volume on MPV's `0..100` scale.
    fn set_volume_percent(&mut self, volume: f64) -> Result<()>;
}

impl MpvControl for mpv::MpvHandler {
    fn run_command(&mut self, args: &[&str]) -> Result<()> {
        self.command(args).context(format!("MPV refused {:?}", args))
    }

    fn set_paused(&mut self, paused: bool) -> Result<()> {
        self.set_property("pause", paused)
            .context("Failed to set pause")
    }

    fn set_volume_percent(&mut self, volume: f64) -> Result<()> {
        self.set_property("volume", volume)
            .context(format!("Failed to set volume {}", volume))
    }
}

#[derive(Debug, Default)]
struct WorkerState {
    /// Source requested by the controller.
    source: Option<String>,
    /// Source currently loaded into MPV, if any.
    loaded: Option<String>,
    /// Play request waiting for the loaded file to start.
    pending: Option<RequestId>,
}

/// Spawns the audio worker thread to process playback commands.
///
/// If the internal worker returns an error, it is caught here and broadcast as
/// a fatal application event.
pub(crate) fn spawn_player_worker(command_rx: Receiver<AudioPlayerCommand>, event_tx: Sender<AppEvent>) {
    let error_tx = event_tx.clone();

    thread::spawn(move || {
        if let Err(e) = audio_player_worker(command_rx, event_tx) {
            let _ = error_tx.send(AppEvent::FatalError(format!("MPV worker failure: {:?}", e)));
        }
    });
}

/// The primary execution loop for the audio player backend.
///
/// # Errors
///
/// Returns an error if the MPV context fails to initialize or if the main loop
/// has gone away.
fn audio_player_worker(command_rx: Receiver<AudioPlayerCommand>, event_tx: Sender<AppEvent>) -> Result<()> {
    let mut handler = (|| {
        let mut builder = mpv::MpvHandlerBuilder::new().context("Failed to create MPV builder")?;
        builder
            .set_option("vo", "null")
            .context("Failed to set no video output")?;
        builder.build().context("Failed to build MPV handler")
    })()?;

    handler
        .observe_property::<f64>("duration", 0)
        .context("Failed to observe duration")?;
    handler
        .observe_property::<f64>("time-pos", 0)
        .context("Failed to observe time-pos")?;

    let mut state = WorkerState::default();

    loop {
        process_commands(&mut handler, &command_rx, &mut state, &event_tx)?;
        process_mpv_events(&mut handler, &mut state, &event_tx)?;
    }
}

/// Drains and executes all pending commands from the application channel.
///
/// A closed command channel means the application is shutting down.
fn process_commands<H: MpvControl>(
    handler: &mut H,
    command_rx: &Receiver<AudioPlayerCommand>,
    state: &mut WorkerState,
    event_tx: &Sender<AppEvent>,
) -> Result<()> {
    while let Ok(command) = command_rx.try_recv() {
        match command {
            AudioPlayerCommand::SetSource(url) => {
                // Forces a reload on the next play, even for the same url
                state.source = Some(url);
                state.loaded = None;
            }
            AudioPlayerCommand::Play(request) => play(handler, state, request, event_tx)?,
            AudioPlayerCommand::Pause => {
                if let Err(e) = handler.set_paused(true) {
                    warn!(error = ?e, "Pause refused");
                }
            }
            AudioPlayerCommand::Seek(position) => {
                if let Err(e) = handler.run_command(&["seek", &position.to_string(), "absolute"]) {
                    warn!(position, error = ?e, "Seek refused");
                }
            }
            AudioPlayerCommand::SetVolume(volume) => {
                if let Err(e) = handler.set_volume_percent(volume * MPV_FULL_VOLUME) {
                    warn!(volume, error = ?e, "Volume change refused");
                }
            }
        }
    }

    Ok(())
}

fn play<H: MpvControl>(
    handler: &mut H,
    state: &mut WorkerState,
    request: RequestId,
    event_tx: &Sender<AppEvent>,
) -> Result<()> {
    let Some(source) = state.source.clone() else {
        return settle(event_tx, request, Err("No source set".to_string()));
    };

    if state.loaded.as_deref() == Some(source.as_str()) {
        let outcome = handler.set_paused(false).map_err(|e| format!("{:#}", e));
        return settle(event_tx, request, outcome);
    }

    if let Err(e) = handler.run_command(&["loadfile", &source, "replace"]) {
        // Nothing may keep playing once a track request has failed
        if let Err(e) = handler.run_command(&["stop"]) {
            warn!(error = ?e, "Stop refused");
        }
        state.loaded = None;
        return settle(event_tx, request, Err(format!("{:#}", e)));
    }
    if let Err(e) = handler.set_paused(false) {
        warn!(error = ?e, "Unpause refused");
    }

    // Any earlier pending request is superseded by this load
    state.loaded = Some(source);
    state.pending = Some(request);

    Ok(())
}

fn settle(event_tx: &Sender<AppEvent>, request: RequestId, outcome: PlayOutcome) -> Result<()> {
    if let Err(reason) = &outcome {
        warn!(request, %reason, "Play request failed");
    }

    event_tx
        .send(AppEvent::PlaySettled { request, outcome })
        .context("Failed to send play settlement")
}

/// Polls for MPV events and publishes engine notifications.
fn process_mpv_events(handler: &mut mpv::MpvHandler, state: &mut WorkerState, event_tx: &Sender<AppEvent>) -> Result<()> {
    let Some(mpv_event) = handler.wait_event(EVENT_WAIT_SECS) else {
        return Ok(());
    };

    let app_event = match mpv_event {
        mpv::Event::PropertyChange { name, change, .. } => match (name, change) {
            ("duration", Format::Double(duration)) => Some(AppEvent::MetadataLoaded(duration)),
            ("time-pos", Format::Double(seconds)) if seconds >= 0.0 => Some(AppEvent::TimeChanged(seconds)),
            _ => None,
        },
        mpv::Event::FileLoaded => state.pending.take().map(|request| {
            debug!(request, "File loaded");
            AppEvent::PlaySettled { request, outcome: Ok(()) }
        }),
        mpv::Event::EndFile(Ok(mpv::EndFileReason::MPV_END_FILE_REASON_EOF)) => {
            state.loaded = None;
            Some(AppEvent::TrackEnded)
        }
        mpv::Event::EndFile(Err(e)) => {
            state.loaded = None;
            let reason = format!("{:?}", e);
            warn!(%reason, "Playback ended with an error");
            state.pending.take().map(|request| AppEvent::PlaySettled {
                request,
                outcome: Err(reason),
            })
        }
        _ => None,
    };

    if let Some(event) = app_event {
        event_tx.send(event).context("Failed to send event")?;
    }

    Ok(())
}
