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

//! Presentation surface.
//!
//! The playlist controller only ever writes to the screen through the
//! [`Surface`] trait. [`DeckView`] is the terminal implementation: it keeps
//! the state the renderer draws and the hit map used to route mouse clicks.

mod deck;

pub(crate) use deck::{DeckView, HitTarget};

use crate::model::Track;

/// What the play/pause transport button shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TransportState {
    /// Nothing is playing, pressing the button starts playback.
    Play,
    /// Audio is playing, pressing the button pauses.
    Pause,
    /// A play request is in flight, the button is disabled.
    Pending,
}

pub(crate) trait Surface {
    /// Adds the overlay play button to the card at `index`.
    fn insert_play_affordance(&mut self, index: usize);

    /// Marks the card at `index` as the current one and unmarks every other
    /// card. `None` unmarks all of them.
    fn mark_current(&mut self, index: Option<usize>);

    fn show_now_playing(&mut self, track: &Track);

    /// Sets the progress bar fill, `0.0` to `100.0`.
    fn set_progress(&mut self, percent: f64);

    fn set_elapsed(&mut self, text: String);

    fn set_duration(&mut self, text: String);

    fn set_transport(&mut self, state: TransportState);

    /// Moves the volume slider, `0.0` to `1.0`.
    fn set_volume(&mut self, volume: f64);

    /// Shows a blocking notice until it is dismissed.
    fn show_notice(&mut self, text: &str);

    fn dismiss_notice(&mut self);
}
