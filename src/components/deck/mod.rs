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

//! Terminal presentation surface.
//!
//! [`DeckView`] holds everything the renderer needs: the media cards, the
//! "now playing" panel, the transport, progress and volume controls, and
//! the notice popup. It separates what is shown (written by the controller
//! through [`Surface`]) from where it was last drawn ([`HitMap`], written by
//! the renderer and read when routing mouse clicks).

mod hit;

use hit::HitMap;
pub(crate) use hit::HitTarget;

use crate::{
    components::{Surface, TransportState},
    model::{Track, catalog::Catalog},
};

pub(crate) struct CardView {
    pub(crate) title: String,
    pub(crate) artist: String,
    pub(crate) cover_url: String,
    pub(crate) has_play_affordance: bool,
    pub(crate) is_current: bool,
}

pub(crate) struct DeckView {
    pub(crate) cards: Vec<CardView>,
    /// Keyboard cursor, independent of the current card.
    pub(crate) selected: Option<usize>,
    pub(crate) now_playing: Option<Track>,
    pub(crate) progress: f64,
    pub(crate) elapsed: String,
    pub(crate) duration: String,
    pub(crate) transport: TransportState,
    pub(crate) volume: f64,
    pub(crate) notice: Option<String>,
    pub(crate) hit_map: HitMap,
}

impl DeckView {
    /// Creates one card per catalog track.
    pub(crate) fn new(catalog: &Catalog) -> Self {
        let cards: Vec<CardView> = catalog
            .tracks()
            .iter()
            .map(|track| CardView {
                title: track.title.clone(),
                artist: track.artist.clone(),
                cover_url: track.cover_url.clone(),
                has_play_affordance: false,
                is_current: false,
            })
            .collect();

        Self {
            selected: if catalog.is_empty() { None } else { Some(0) },
            cards,
            now_playing: None,
            progress: 0.0,
            elapsed: String::new(),
            duration: String::new(),
            transport: TransportState::Play,
            volume: 0.0,
            notice: None,
            hit_map: HitMap::default(),
        }
    }

    pub(crate) fn select_next(&mut self) {
        let len = self.cards.len();
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 < len => i + 1,
            Some(_) => 0,
            None => 0,
        });
    }

    pub(crate) fn select_previous(&mut self) {
        let len = self.cards.len();
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        });
    }

    pub(crate) fn select(&mut self, index: usize) {
        if index < self.cards.len() {
            self.selected = Some(index);
        }
    }

    pub(crate) fn has_notice(&self) -> bool {
        self.notice.is_some()
    }
}

impl Surface for DeckView {
    fn insert_play_affordance(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.has_play_affordance = true;
        }
    }

    fn mark_current(&mut self, index: Option<usize>) {
        for (i, card) in self.cards.iter_mut().enumerate() {
            card.is_current = Some(i) == index;
        }
    }

    fn show_now_playing(&mut self, track: &Track) {
        self.now_playing = Some(track.clone());
    }

    fn set_progress(&mut self, percent: f64) {
        self.progress = percent;
    }

    fn set_elapsed(&mut self, text: String) {
        self.elapsed = text;
    }

    fn set_duration(&mut self, text: String) {
        self.duration = text;
    }

    fn set_transport(&mut self, state: TransportState) {
        self.transport = state;
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
    }

    fn show_notice(&mut self, text: &str) {
        self.notice = Some(text.to_string());
    }

    fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
