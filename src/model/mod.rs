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

//! Domain models.
//!
//! A [`Track`] is a plain value; its identity is its position in the
//! [`catalog::Catalog`].

pub(crate) mod catalog;
pub(crate) mod scan;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub cover_url: String,
    pub audio_url: String,
}

impl Track {
    pub(crate) fn new(title: &str, artist: &str, cover_url: &str, audio_url: &str) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
            cover_url: cover_url.to_string(),
            audio_url: audio_url.to_string(),
        }
    }
}
