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

//! Media directory scanning.
//!
//! Builds catalog tracks from the audio files found beneath a directory. It
//! uses `WalkDir` for the traversal and `Lofty` to read title and artist tags.
//!
//! Files without readable tags are still included: the title falls back to
//! the file stem and the artist to [`UNKNOWN_ARTIST`]. A `cover.*` or
//! `folder.*` image next to the file is used as the cover reference.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use lofty::prelude::*;
use lofty::probe::Probe;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::model::Track;

const AUDIO_EXTENSIONS: &[&str] = &["mp3", "flac", "ogg", "m4a", "wav", "opus"];
const COVER_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];
const COVER_STEMS: &[&str] = &["cover", "folder"];

const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Recursively scans `root` for audio files, in file name order.
///
/// Unreadable directory entries are skipped with a warning, a missing root
/// simply yields no tracks.
pub(crate) fn scan_media_dir(root: &Path) -> Vec<Track> {
    let mut cover_cache: HashMap<PathBuf, String> = HashMap::new();
    let mut tracks = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(root = %root.display(), error = %e, "Skipping unreadable entry");
                continue;
            }
        };

        let path = entry.path();
        if !entry.file_type().is_file() || !has_extension(path, AUDIO_EXTENSIONS) {
            continue;
        }

        let cover_url = match path.parent() {
            Some(dir) => cover_cache
                .entry(dir.to_path_buf())
                .or_insert_with(|| find_cover(dir))
                .clone(),
            None => String::new(),
        };

        tracks.push(read_track(path, cover_url));
    }

    debug!(root = %root.display(), count = tracks.len(), "Scanned media directory");

    tracks
}

fn read_track(path: &Path, cover_url: String) -> Track {
    let fallback_title = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let (title, artist) = match Probe::open(path).and_then(|p| p.read()) {
        Ok(tagged_file) => match tagged_file.primary_tag().or_else(|| tagged_file.first_tag()) {
            Some(tag) => (
                tag.title().map(|t| t.to_string()),
                tag.artist().map(|a| a.to_string()),
            ),
            None => (None, None),
        },
        Err(e) => {
            debug!(path = %path.display(), error = %e, "No readable tags");
            (None, None)
        }
    };

    Track {
        title: title.unwrap_or(fallback_title),
        artist: artist.unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
        cover_url,
        audio_url: path.to_string_lossy().to_string(),
    }
}

fn find_cover(dir: &Path) -> String {
    let Ok(entries) = fs::read_dir(dir) else {
        return String::new();
    };

    let mut covers: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| has_extension(p, COVER_EXTENSIONS))
        .filter(|p| {
            p.file_stem()
                .map(|s| COVER_STEMS.contains(&s.to_string_lossy().to_lowercase().as_str()))
                .unwrap_or(false)
        })
        .collect();

    covers.sort();
    covers
        .first()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .map(|ext| extensions.contains(&ext.to_string_lossy().to_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_files_fall_back_to_file_stem() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b-side.MP3"), b"garbage").unwrap();
        fs::write(dir.path().join("a-side.flac"), b"garbage").unwrap();
        fs::write(dir.path().join("notes.txt"), b"not audio").unwrap();

        let tracks = scan_media_dir(dir.path());

        let titles: Vec<&str> = tracks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["a-side", "b-side"]);
        assert!(tracks.iter().all(|t| t.artist == UNKNOWN_ARTIST));
        assert!(tracks[0].audio_url.ends_with("a-side.flac"));
    }

    #[test]
    fn picks_up_cover_image_beside_tracks() {
        let dir = tempfile::tempdir().unwrap();
        let album = dir.path().join("album");
        fs::create_dir(&album).unwrap();
        fs::write(album.join("song.mp3"), b"garbage").unwrap();
        fs::write(album.join("Cover.jpg"), b"image").unwrap();
        fs::write(dir.path().join("loose.mp3"), b"garbage").unwrap();

        let tracks = scan_media_dir(dir.path());
        assert_eq!(tracks.len(), 2);

        let song = tracks.iter().find(|t| t.title == "song").unwrap();
        assert!(song.cover_url.ends_with("Cover.jpg"));

        let loose = tracks.iter().find(|t| t.title == "loose").unwrap();
        assert_eq!(loose.cover_url, "");
    }

    #[test]
    fn missing_root_yields_no_tracks() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scan_media_dir(&dir.path().join("missing")).is_empty());
    }
}
