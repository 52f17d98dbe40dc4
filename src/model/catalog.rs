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

//! The track catalog.
//!
//! The catalog is a fixed, ordered sequence of tracks loaded once at startup.
//! Its order defines the wrap-around order used by next and previous.

use std::path::Path;

use tracing::{info, warn};

use crate::{config::AppConfig, model::Track, model::scan::scan_media_dir};

#[derive(Debug, Clone, Default)]
pub(crate) struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    pub(crate) fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    /// Builds the catalog described by the application configuration.
    ///
    /// Tracks listed explicitly in the configuration win. When there are
    /// none, every configured media directory is scanned in order.
    pub(crate) fn from_config(config: &AppConfig) -> Self {
        if !config.tracks.is_empty() {
            info!(count = config.tracks.len(), "Loaded catalog from configuration");
            return Self::new(config.tracks.clone());
        }

        let tracks: Vec<Track> = config
            .media_dirs
            .iter()
            .flat_map(|dir| scan_media_dir(Path::new(dir)))
            .collect();

        if tracks.is_empty() {
            warn!("Catalog is empty, nothing to play");
        } else {
            info!(count = tracks.len(), "Loaded catalog from media directories");
        }

        Self::new(tracks)
    }

    pub(crate) fn len(&self) -> usize {
        self.tracks.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub(crate) fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub(crate) fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Index after `from`, wrapping from the last track to the first.
    pub(crate) fn next_index(&self, from: usize) -> Option<usize> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        Some((from % len + 1) % len)
    }

    /// Index before `from`, wrapping from the first track to the last.
    pub(crate) fn previous_index(&self, from: usize) -> Option<usize> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        Some((from % len + len - 1) % len)
    }
}
