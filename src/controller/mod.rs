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

//! Playlist controller.
//!
//! The [`PlaylistController`] is the only stateful logic in the application.
//! It translates user interactions and engine notifications into engine
//! commands and surface updates.
//!
//! # Play requests
//!
//! Starting playback is a request/settlement pair. A request leaves the
//! player in a pending state (the transport button is disabled) and only the
//! matching [`on_play_settled`](PlaylistController::on_play_settled) moves it
//! to playing. A newer request supersedes an older one; a settlement for a
//! superseded request is ignored.
//!
//! # Audio unlock
//!
//! No playback is attempted until the first user interaction has been
//! reported through [`notice_interaction`](PlaylistController::notice_interaction).

mod error;

pub(crate) use error::{PlaylistError, Result};

use tracing::{debug, info};

use crate::{
    components::{Surface, TransportState},
    model::catalog::Catalog,
    player::{PlayOutcome, PlaybackEngine, RequestId},
    util::format::format_time,
};

pub(crate) const AUDIO_LOCKED_NOTICE: &str = "Please click anywhere first to enable audio";

/// What a play request asks the engine to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PlayTarget {
    /// Load and start the track at this catalog index.
    Track(usize),
    /// Resume the loaded track.
    Resume,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PendingPlay {
    pub(crate) request: RequestId,
    pub(crate) target: PlayTarget,
}

/// Settled playback state, a pending request does not change it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PlaybackPhase {
    Stopped,
    Playing,
    Paused,
}

#[derive(Clone, Debug)]
pub(crate) struct PlayerState {
    /// Catalog index of the last successfully started track.
    pub(crate) current_index: Option<usize>,
    pub(crate) phase: PlaybackPhase,
    pub(crate) pending: Option<PendingPlay>,
    /// Latched by the first user interaction, never reset.
    pub(crate) audio_unlocked: bool,
    pub(crate) volume: f64,
    /// Duration of the current source, once its metadata has loaded.
    pub(crate) duration: Option<f64>,
}

impl PlayerState {
    fn new(volume: f64) -> Self {
        Self {
            current_index: None,
            phase: PlaybackPhase::Stopped,
            pending: None,
            audio_unlocked: false,
            volume,
            duration: None,
        }
    }

    pub(crate) fn is_playing(&self) -> bool {
        self.phase == PlaybackPhase::Playing
    }
}

pub(crate) struct PlaylistController<E, S> {
    catalog: Catalog,
    engine: E,
    surface: S,
    state: PlayerState,
    last_request: RequestId,
}

impl<E: PlaybackEngine, S: Surface> PlaylistController<E, S> {
    pub(crate) fn new(catalog: Catalog, engine: E, surface: S, volume: f64) -> Self {
        Self {
            catalog,
            engine,
            surface,
            state: PlayerState::new(volume),
            last_request: 0,
        }
    }

    /// Prepares the surface and engine before the first event is handled.
    ///
    /// Every card gets its overlay play button, and the initial volume is
    /// applied to both the engine and the slider.
    pub(crate) fn initialize(&mut self) -> Result<()> {
        for index in 0..self.catalog.len() {
            self.surface.insert_play_affordance(index);
        }

        let volume = self.state.volume;
        self.engine.set_volume(volume)?;
        self.surface.set_volume(volume);

        self.surface.set_progress(0.0);
        self.surface.set_elapsed(format_time(0.0));
        self.surface.set_duration(format_time(0.0));
        self.refresh_transport();

        Ok(())
    }

    pub(crate) fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub(crate) fn state(&self) -> &PlayerState {
        &self.state
    }

    pub(crate) fn surface(&self) -> &S {
        &self.surface
    }

    pub(crate) fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[cfg(test)]
    pub(crate) fn engine(&self) -> &E {
        &self.engine
    }

    /// Reports a user interaction. Only the first one has any effect.
    pub(crate) fn notice_interaction(&mut self) {
        if !self.state.audio_unlocked {
            self.state.audio_unlocked = true;
            info!("Audio unlocked by user interaction");
        }
    }

    pub(crate) fn dismiss_notice(&mut self) {
        self.surface.dismiss_notice();
    }

    /// Requests playback of the track at `index`.
    ///
    /// The track only becomes current once the request settles.
    ///
    /// # Errors
    ///
    /// * [`PlaylistError::AudioLocked`] before the first user interaction,
    ///   after showing a notice.
    /// * [`PlaylistError::IndexOutOfRange`] if `index` is not in the catalog.
    pub(crate) fn play_track(&mut self, index: usize) -> Result<()> {
        if !self.state.audio_unlocked {
            self.surface.show_notice(AUDIO_LOCKED_NOTICE);
            return Err(PlaylistError::AudioLocked);
        }

        let track = self.catalog.get(index).ok_or(PlaylistError::IndexOutOfRange {
            index,
            len: self.catalog.len(),
        })?;

        self.engine.set_source(&track.audio_url)?;
        self.state.duration = None;

        self.request_play(PlayTarget::Track(index))
    }

    /// Pauses when playing, otherwise resumes. Before any track has played
    /// this starts the first one.
    pub(crate) fn toggle_play_pause(&mut self) -> Result<()> {
        if self.state.pending.is_some() {
            debug!("Play request in flight, ignoring toggle");
            return Ok(());
        }

        if self.state.current_index.is_none() {
            return self.play_track(0);
        }

        match self.state.phase {
            PlaybackPhase::Playing => {
                self.engine.pause()?;
                self.state.phase = PlaybackPhase::Paused;
                self.refresh_transport();
                Ok(())
            }
            PlaybackPhase::Paused | PlaybackPhase::Stopped => self.request_play(PlayTarget::Resume),
        }
    }

    pub(crate) fn play_next(&mut self) -> Result<()> {
        let base = self.navigation_base();
        let index = self
            .catalog
            .next_index(base)
            .ok_or(PlaylistError::IndexOutOfRange { index: base, len: 0 })?;
        self.play_track(index)
    }

    pub(crate) fn play_previous(&mut self) -> Result<()> {
        let base = self.navigation_base();
        let index = self
            .catalog
            .previous_index(base)
            .ok_or(PlaylistError::IndexOutOfRange { index: base, len: 0 })?;
        self.play_track(index)
    }

    /// Seeks to `ratio` of the way through the current track.
    ///
    /// Ignored until the track's duration is known.
    pub(crate) fn on_progress_bar_click(&mut self, ratio: f64) -> Result<()> {
        let Some(duration) = self.known_duration() else {
            debug!(ratio, "Duration unknown, ignoring seek");
            return Ok(());
        };

        if !ratio.is_finite() {
            return Ok(());
        }

        self.engine.seek(ratio.clamp(0.0, 1.0) * duration)?;
        Ok(())
    }

    /// Applies a volume slider change. The slider restricts its own range.
    pub(crate) fn on_volume_change(&mut self, volume: f64) -> Result<()> {
        self.state.volume = volume;
        self.engine.set_volume(volume)?;
        self.surface.set_volume(volume);
        Ok(())
    }

    /// Settles the play request `request`.
    ///
    /// # Errors
    ///
    /// Returns [`PlaylistError::PlaybackRejected`] if the engine refused to
    /// play. The current track stays current, but a rejected track has
    /// already replaced it in the engine, so it is stopped and set up to
    /// restart on the next resume.
    pub(crate) fn on_play_settled(&mut self, request: RequestId, outcome: PlayOutcome) -> Result<()> {
        let Some(pending) = self.state.pending.filter(|p| p.request == request) else {
            debug!(request, "Ignoring superseded play settlement");
            return Ok(());
        };
        self.state.pending = None;

        let result = match outcome {
            Ok(()) => {
                if let PlayTarget::Track(index) = pending.target {
                    self.state.current_index = Some(index);
                    if let Some(track) = self.catalog.get(index) {
                        self.surface.show_now_playing(track);
                    }
                    self.surface.mark_current(Some(index));
                }
                self.state.phase = PlaybackPhase::Playing;
                Ok(())
            }
            Err(reason) => match pending.target {
                PlayTarget::Track(index) => {
                    self.restore_current_source()?;
                    Err(PlaylistError::PlaybackRejected {
                        index: Some(index),
                        reason,
                    })
                }
                PlayTarget::Resume => Err(PlaylistError::PlaybackRejected { index: None, reason }),
            },
        };

        self.refresh_transport();
        result
    }

    pub(crate) fn on_time_update(&mut self, current_time: f64) {
        let Some(duration) = self.known_duration() else {
            return;
        };

        self.surface.set_progress(current_time / duration * 100.0);
        self.surface.set_elapsed(format_time(current_time));
    }

    pub(crate) fn on_metadata_loaded(&mut self, duration: f64) {
        self.state.duration = Some(duration);
        self.surface.set_duration(format_time(duration));
    }

    /// Moves on to the next track, wrapping from the last to the first.
    ///
    /// Ignored while the user's own track request is in flight.
    pub(crate) fn on_track_ended(&mut self) -> Result<()> {
        if let Some(PendingPlay {
            target: PlayTarget::Track(index),
            ..
        }) = self.state.pending
        {
            debug!(index, "Track request in flight, ignoring end of track");
            return Ok(());
        }

        self.state.phase = PlaybackPhase::Stopped;
        self.refresh_transport();
        self.play_next()
    }

    fn request_play(&mut self, target: PlayTarget) -> Result<()> {
        self.last_request += 1;
        let request = self.last_request;

        self.state.pending = Some(PendingPlay { request, target });
        self.refresh_transport();

        debug!(request, ?target, "Requesting playback");
        self.engine.play(request)?;

        Ok(())
    }

    fn restore_current_source(&mut self) -> Result<()> {
        self.state.phase = PlaybackPhase::Stopped;
        self.surface.set_progress(0.0);
        self.surface.set_elapsed(format_time(0.0));
        self.surface.set_duration(format_time(0.0));

        if let Some(track) = self.state.current_index.and_then(|i| self.catalog.get(i)) {
            self.engine.set_source(&track.audio_url)?;
        }
        Ok(())
    }

    // Next and previous count from the track being requested, if any, so
    // repeated presses keep moving.
    fn navigation_base(&self) -> usize {
        match self.state.pending {
            Some(PendingPlay {
                target: PlayTarget::Track(index),
                ..
            }) => index,
            _ => self.state.current_index.unwrap_or(0),
        }
    }

    fn known_duration(&self) -> Option<f64> {
        self.state.duration.filter(|d| d.is_finite() && *d > 0.0)
    }

    fn refresh_transport(&mut self) {
        let transport = if self.state.pending.is_some() {
            TransportState::Pending
        } else if self.state.is_playing() {
            TransportState::Pause
        } else {
            TransportState::Play
        };
        self.surface.set_transport(transport);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::Track,
        player::testing::{EngineCall, FakeEngine},
    };

    #[derive(Default)]
    struct RecordingSurface {
        affordances: Vec<usize>,
        current: Option<usize>,
        now_playing: Option<Track>,
        progress: Option<f64>,
        elapsed: Option<String>,
        duration: Option<String>,
        transport: Option<TransportState>,
        volume: Option<f64>,
        notice: Option<String>,
    }

    impl Surface for RecordingSurface {
        fn insert_play_affordance(&mut self, index: usize) {
            self.affordances.push(index);
        }

        fn mark_current(&mut self, index: Option<usize>) {
            self.current = index;
        }

        fn show_now_playing(&mut self, track: &Track) {
            self.now_playing = Some(track.clone());
        }

        fn set_progress(&mut self, percent: f64) {
            self.progress = Some(percent);
        }

        fn set_elapsed(&mut self, text: String) {
            self.elapsed = Some(text);
        }

        fn set_duration(&mut self, text: String) {
            self.duration = Some(text);
        }

        fn set_transport(&mut self, state: TransportState) {
            self.transport = Some(state);
        }

        fn set_volume(&mut self, volume: f64) {
            self.volume = Some(volume);
        }

        fn show_notice(&mut self, text: &str) {
            self.notice = Some(text.to_string());
        }

        fn dismiss_notice(&mut self) {
            self.notice = None;
        }
    }

    type TestController = PlaylistController<FakeEngine, RecordingSurface>;

    fn track(name: &str) -> Track {
        Track::new(name, &format!("{name} artist"), &format!("{name}.jpg"), &format!("{name}.mp3"))
    }

    fn controller(names: &[&str]) -> TestController {
        let catalog = Catalog::new(names.iter().map(|n| track(n)).collect());
        let mut c = PlaylistController::new(catalog, FakeEngine::default(), RecordingSurface::default(), 0.8);
        c.initialize().unwrap();
        c.surface.progress = None;
        c.surface.elapsed = None;
        c.engine.calls.clear();
        c
    }

    fn unlocked(names: &[&str]) -> TestController {
        let mut c = controller(names);
        c.notice_interaction();
        c
    }

    fn last_request(c: &TestController) -> RequestId {
        c.engine.last_request().expect("no play request issued")
    }

    fn play_and_settle(c: &mut TestController, index: usize) {
        c.play_track(index).unwrap();
        let request = last_request(c);
        c.on_play_settled(request, Ok(())).unwrap();
    }

    #[test]
    fn initialize_adds_affordances_and_applies_volume() {
        let catalog = Catalog::new(vec![track("a"), track("b"), track("c")]);
        let mut c = PlaylistController::new(catalog, FakeEngine::default(), RecordingSurface::default(), 0.8);
        c.initialize().unwrap();

        assert_eq!(c.surface.affordances, vec![0, 1, 2]);
        assert_eq!(c.engine.calls, vec![EngineCall::SetVolume(0.8)]);
        assert_eq!(c.surface.volume, Some(0.8));
        assert_eq!(c.surface.elapsed.as_deref(), Some("0:00"));
        assert_eq!(c.surface.transport, Some(TransportState::Play));
        assert_eq!(c.state.current_index, None);
        assert!(!c.state.is_playing());
        assert!(!c.state.audio_unlocked);
    }

    #[test]
    fn playing_any_track_marks_exactly_that_card() {
        let mut c = unlocked(&["a", "b", "c"]);
        for index in 0..3 {
            play_and_settle(&mut c, index);
            assert_eq!(c.state.current_index, Some(index));
            assert_eq!(c.surface.current, Some(index));
            assert!(c.state.is_playing());
        }
        assert_eq!(c.surface.now_playing.as_ref().unwrap().title, "c");
    }

    #[test]
    fn track_becomes_current_only_once_settled() {
        let mut c = unlocked(&["a", "b"]);
        c.play_track(1).unwrap();

        assert_eq!(
            c.engine.calls,
            vec![EngineCall::SetSource("b.mp3".to_string()), EngineCall::Play(1)]
        );
        assert_eq!(c.state.current_index, None);
        assert!(!c.state.is_playing());
        assert_eq!(c.surface.transport, Some(TransportState::Pending));

        c.on_play_settled(1, Ok(())).unwrap();
        assert_eq!(c.state.current_index, Some(1));
        assert_eq!(c.surface.transport, Some(TransportState::Pause));
    }

    #[test]
    fn locked_audio_refuses_playback_with_notice() {
        let mut c = controller(&["a", "b"]);

        let result = c.play_track(1);

        assert!(matches!(result, Err(PlaylistError::AudioLocked)));
        assert_eq!(c.surface.notice.as_deref(), Some(AUDIO_LOCKED_NOTICE));
        assert_eq!(c.state.current_index, None);
        assert!(c.engine.calls.is_empty());

        c.dismiss_notice();
        assert_eq!(c.surface.notice, None);
    }

    #[test]
    fn unlock_is_idempotent() {
        let mut c = controller(&["a"]);
        c.notice_interaction();
        play_and_settle(&mut c, 0);
        c.notice_interaction();

        assert!(c.state.audio_unlocked);
        assert_eq!(c.state.current_index, Some(0));
        assert!(c.state.is_playing());
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut c = unlocked(&["a", "b"]);

        let result = c.play_track(2);

        assert!(matches!(
            result,
            Err(PlaylistError::IndexOutOfRange { index: 2, len: 2 })
        ));
        assert!(c.engine.calls.is_empty());
        assert_eq!(c.state.pending, None);
    }

    #[test]
    fn next_and_previous_wrap_around() {
        let mut c = unlocked(&["a", "b"]);
        play_and_settle(&mut c, 1);

        c.play_next().unwrap();
        c.on_play_settled(last_request(&c), Ok(())).unwrap();
        assert_eq!(c.state.current_index, Some(0));

        c.play_previous().unwrap();
        c.on_play_settled(last_request(&c), Ok(())).unwrap();
        assert_eq!(c.state.current_index, Some(1));
    }

    #[test]
    fn repeated_next_counts_from_the_pending_track() {
        let mut c = unlocked(&["a", "b", "c"]);
        play_and_settle(&mut c, 0);

        c.play_next().unwrap();
        c.play_next().unwrap();

        assert_eq!(
            c.state.pending.map(|p| p.target),
            Some(PlayTarget::Track(2))
        );
    }

    #[test]
    fn navigation_on_empty_catalog_is_a_no_op() {
        let mut c = unlocked(&[]);
        assert!(matches!(c.play_next(), Err(PlaylistError::IndexOutOfRange { .. })));
        assert!(matches!(c.play_previous(), Err(PlaylistError::IndexOutOfRange { .. })));
        assert!(matches!(c.toggle_play_pause(), Err(PlaylistError::IndexOutOfRange { .. })));
        assert!(c.engine.calls.is_empty());
    }

    #[test]
    fn toggle_with_nothing_loaded_plays_first_track() {
        let mut c = unlocked(&["a", "b"]);

        c.toggle_play_pause().unwrap();

        assert_eq!(
            c.engine.calls,
            vec![EngineCall::SetSource("a.mp3".to_string()), EngineCall::Play(1)]
        );
        assert_eq!(c.state.pending.map(|p| p.target), Some(PlayTarget::Track(0)));
    }

    #[test]
    fn toggle_with_nothing_loaded_respects_audio_lock() {
        let mut c = controller(&["a"]);
        assert!(matches!(c.toggle_play_pause(), Err(PlaylistError::AudioLocked)));
        assert_eq!(c.surface.notice.as_deref(), Some(AUDIO_LOCKED_NOTICE));
    }

    #[test]
    fn toggle_pauses_then_resumes_on_settlement() {
        let mut c = unlocked(&["a"]);
        play_and_settle(&mut c, 0);
        c.engine.calls.clear();

        c.toggle_play_pause().unwrap();
        assert_eq!(c.engine.calls, vec![EngineCall::Pause]);
        assert_eq!(c.state.phase, PlaybackPhase::Paused);
        assert_eq!(c.surface.transport, Some(TransportState::Play));

        c.toggle_play_pause().unwrap();
        let request = last_request(&c);
        assert_eq!(c.state.phase, PlaybackPhase::Paused);
        assert_eq!(c.surface.transport, Some(TransportState::Pending));

        c.on_play_settled(request, Ok(())).unwrap();
        assert_eq!(c.state.phase, PlaybackPhase::Playing);
        assert_eq!(c.surface.transport, Some(TransportState::Pause));
        assert_eq!(c.engine.calls.iter().filter(|call| matches!(call, EngineCall::SetSource(_))).count(), 0);
    }

    #[test]
    fn toggle_is_ignored_while_request_in_flight() {
        let mut c = unlocked(&["a"]);
        c.play_track(0).unwrap();
        let calls = c.engine.calls.len();

        c.toggle_play_pause().unwrap();

        assert_eq!(c.engine.calls.len(), calls);
    }

    #[test]
    fn rejected_resume_stays_paused() {
        let mut c = unlocked(&["a"]);
        play_and_settle(&mut c, 0);
        c.toggle_play_pause().unwrap();
        c.toggle_play_pause().unwrap();

        let result = c.on_play_settled(last_request(&c), Err("autoplay blocked".to_string()));

        assert!(matches!(result, Err(PlaylistError::PlaybackRejected { index: None, .. })));
        assert_eq!(c.state.phase, PlaybackPhase::Paused);
        assert_eq!(c.surface.transport, Some(TransportState::Play));
    }

    #[test]
    fn rejected_track_leaves_previous_state() {
        let mut c = unlocked(&["a", "b"]);
        play_and_settle(&mut c, 0);

        c.play_track(1).unwrap();
        let result = c.on_play_settled(last_request(&c), Err("unsupported format".to_string()));

        match result {
            Err(PlaylistError::PlaybackRejected { index, reason }) => {
                assert_eq!(index, Some(1));
                assert_eq!(reason, "unsupported format");
            }
            other => panic!("unexpected result {other:?}"),
        }
        assert_eq!(c.state.current_index, Some(0));
        assert_eq!(c.surface.current, Some(0));
        assert_eq!(c.surface.now_playing.as_ref().unwrap().title, "a");
        assert_eq!(c.state.phase, PlaybackPhase::Stopped);
        assert_eq!(c.surface.transport, Some(TransportState::Play));
        assert_eq!(c.state.pending, None);
    }

    #[test]
    fn resume_after_rejected_track_restarts_the_current_one() {
        let mut c = unlocked(&["a", "b"]);
        play_and_settle(&mut c, 0);
        c.play_track(1).unwrap();
        c.on_play_settled(last_request(&c), Err("unsupported format".to_string()))
            .unwrap_err();
        assert_eq!(
            c.engine.calls.last(),
            Some(&EngineCall::SetSource("a.mp3".to_string()))
        );
        c.engine.calls.clear();

        // Stopped, so a single toggle resumes without pausing first
        c.toggle_play_pause().unwrap();
        assert_eq!(c.engine.calls, vec![EngineCall::Play(last_request(&c))]);

        c.on_play_settled(last_request(&c), Ok(())).unwrap();
        assert!(c.state.is_playing());
        assert_eq!(c.state.current_index, Some(0));
        assert_eq!(c.surface.current, Some(0));
        assert_eq!(c.surface.now_playing.as_ref().unwrap().title, "a");
    }

    #[test]
    fn rejected_first_track_leaves_nothing_to_restore() {
        let mut c = unlocked(&["a", "b"]);
        c.play_track(1).unwrap();
        let request = last_request(&c);
        c.engine.calls.clear();

        c.on_play_settled(request, Err("not found".to_string())).unwrap_err();

        assert!(c.engine.calls.is_empty());
        assert_eq!(c.state.current_index, None);
        assert_eq!(c.state.phase, PlaybackPhase::Stopped);
    }

    #[test]
    fn end_of_track_does_not_override_a_chosen_track() {
        let mut c = unlocked(&["a", "b", "c"]);
        play_and_settle(&mut c, 0);
        c.play_track(1).unwrap();
        let request = last_request(&c);
        let calls = c.engine.calls.len();

        c.on_track_ended().unwrap();

        assert_eq!(c.engine.calls.len(), calls);
        assert_eq!(c.state.pending.map(|p| p.target), Some(PlayTarget::Track(1)));

        c.on_play_settled(request, Ok(())).unwrap();
        assert_eq!(c.state.current_index, Some(1));
    }

    #[test]
    fn superseded_settlement_is_ignored() {
        let mut c = unlocked(&["a", "b"]);
        c.play_track(0).unwrap();
        let first = last_request(&c);
        c.play_track(1).unwrap();
        let second = last_request(&c);

        c.on_play_settled(first, Ok(())).unwrap();
        assert_eq!(c.state.current_index, None);
        assert_eq!(c.surface.transport, Some(TransportState::Pending));

        c.on_play_settled(second, Ok(())).unwrap();
        assert_eq!(c.state.current_index, Some(1));
    }

    #[test]
    fn time_update_waits_for_known_duration() {
        let mut c = unlocked(&["a"]);
        play_and_settle(&mut c, 0);

        c.on_time_update(30.0);
        assert_eq!(c.surface.progress, None);

        c.on_metadata_loaded(0.0);
        c.on_time_update(30.0);
        assert_eq!(c.surface.progress, None);

        c.on_metadata_loaded(f64::NAN);
        c.on_time_update(30.0);
        assert_eq!(c.surface.progress, None);

        c.on_metadata_loaded(200.0);
        assert_eq!(c.surface.duration.as_deref(), Some("3:20"));
        c.on_time_update(50.0);
        assert_eq!(c.surface.progress, Some(25.0));
        assert_eq!(c.surface.elapsed.as_deref(), Some("0:50"));
    }

    #[test]
    fn new_source_forgets_old_duration() {
        let mut c = unlocked(&["a", "b"]);
        play_and_settle(&mut c, 0);
        c.on_metadata_loaded(200.0);

        c.play_track(1).unwrap();
        c.on_time_update(10.0);

        assert_eq!(c.state.duration, None);
        assert_eq!(c.surface.progress, None);
    }

    #[test]
    fn progress_click_seeks_proportionally() {
        let mut c = unlocked(&["a"]);
        play_and_settle(&mut c, 0);
        c.engine.calls.clear();

        c.on_progress_bar_click(0.5).unwrap();
        assert!(c.engine.calls.is_empty());

        c.on_metadata_loaded(200.0);
        c.on_progress_bar_click(0.5).unwrap();
        c.on_progress_bar_click(f64::NAN).unwrap();
        assert_eq!(c.engine.calls, vec![EngineCall::Seek(100.0)]);
    }

    #[test]
    fn volume_change_reaches_engine_and_slider() {
        let mut c = controller(&["a"]);
        c.on_volume_change(0.3).unwrap();

        assert_eq!(c.engine.calls, vec![EngineCall::SetVolume(0.3)]);
        assert_eq!(c.surface.volume, Some(0.3));
        assert_eq!(c.state.volume, 0.3);
    }

    #[test]
    fn ended_track_loops_to_the_start() {
        let mut c = controller(&["a", "b"]);
        c.notice_interaction();

        play_and_settle(&mut c, 1);
        assert_eq!(c.surface.now_playing.as_ref().unwrap().title, "b");
        assert_eq!(c.surface.current, Some(1));

        c.on_track_ended().unwrap();
        assert_eq!(c.state.phase, PlaybackPhase::Stopped);
        assert_eq!(c.engine.calls.last(), Some(&EngineCall::Play(last_request(&c))));
        assert!(c.engine.calls.contains(&EngineCall::SetSource("a.mp3".to_string())));

        c.on_play_settled(last_request(&c), Ok(())).unwrap();
        assert_eq!(c.state.current_index, Some(0));
        assert_eq!(c.surface.now_playing.as_ref().unwrap().title, "a");
        assert_eq!(c.surface.current, Some(0));
    }
}
