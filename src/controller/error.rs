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

//! Playlist controller errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum PlaylistError {
    /// Playback was requested before the first user interaction.
    #[error("Audio is locked until the first user interaction")]
    AudioLocked,

    /// A track index outside the catalog, including any index into an empty
    /// catalog.
    #[error("Track index {index} out of range for a catalog of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The engine refused to start playback. `index` is `None` for a resume.
    #[error("Playback of track {index:?} rejected: {reason}")]
    PlaybackRejected { index: Option<usize>, reason: String },

    /// The engine could not be reached at all.
    #[error(transparent)]
    Engine(#[from] anyhow::Error),
}

pub(crate) type Result<T> = std::result::Result<T, PlaylistError>;
