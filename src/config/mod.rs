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

//! Application configuration.
//!
//! This module manages the application configuration file, which also
//! carries the track catalog.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::model::Track;

const CONFIG_NAME: &str = "playdeck";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    /// Initial volume, `0.0` to `1.0`.
    pub volume: f64,
    pub log_dir: Option<PathBuf>,
    /// Scanned for tracks when `tracks` is set to an empty list.
    pub media_dirs: Vec<String>,
    pub tracks: Vec<Track>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            volume: 1.0,
            log_dir: None,
            media_dirs: vec![],
            tracks: vec![
                Track::new(
                    "Sahiba",
                    "Aditya Rikhari",
                    "https://i.scdn.co/image/ab67616d00001e020a47bbe7141fdfe0eb2cdba7",
                    "assets/music/sahiba.mp3",
                ),
                Track::new(
                    "Shree Hanuman Chalisa",
                    "Hariharan",
                    "https://i.scdn.co/image/ab67616d00001e026d9a2050e82ce05424dca5aa",
                    "assets/music/hanuman_chalisa.mp3",
                ),
            ],
        }
    }
}

impl AppConfig {
    /// The configured volume restricted to `0.0..=1.0`, or the default if it
    /// is not a number.
    pub(crate) fn initial_volume(&self) -> f64 {
        if self.volume.is_finite() {
            self.volume.clamp(0.0, 1.0)
        } else {
            warn!(volume = self.volume, "Ignoring configured volume");
            Self::default().volume
        }
    }

    /// Directory for the diagnostic log, next to the configuration file
    /// unless overridden.
    pub(crate) fn log_dir(&self) -> PathBuf {
        if let Some(dir) = &self.log_dir {
            return dir.clone();
        }

        confy::get_configuration_file_path(CONFIG_NAME, None)
            .ok()
            .and_then(|path| path.parent().map(|p| p.join("logs")))
            .unwrap_or_else(|| PathBuf::from("logs"))
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_two_tracks() {
        let config = AppConfig::default();
        assert_eq!(config.tracks.len(), 2);
        assert_eq!(config.tracks[0].title, "Sahiba");
        assert_eq!(config.tracks[1].artist, "Hariharan");
        assert_eq!(config.volume, 1.0);
    }

    #[test]
    fn explicit_log_dir_wins() {
        let config = AppConfig {
            log_dir: Some(PathBuf::from("/tmp/playdeck-logs")),
            ..AppConfig::default()
        };
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/playdeck-logs"));
    }

    #[test]
    fn initial_volume_is_clamped_and_finite() {
        let volume = |volume| AppConfig { volume, ..AppConfig::default() }.initial_volume();
        assert_eq!(volume(0.4), 0.4);
        assert_eq!(volume(2.5), 1.0);
        assert_eq!(volume(-1.0), 0.0);
        assert_eq!(volume(f64::NAN), 1.0);
        assert_eq!(volume(f64::INFINITY), 1.0);
    }

    #[test]
    fn nan_volume_from_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("playdeck.toml");
        std::fs::write(&path, "volume = nan\n").unwrap();

        let config: AppConfig = confy::load_path(&path).unwrap();
        assert!(config.volume.is_nan());
        assert_eq!(config.initial_volume(), 1.0);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("playdeck.toml");
        std::fs::write(&path, "volume = 0.5\n").unwrap();

        let config: AppConfig = confy::load_path(&path).unwrap();
        assert_eq!(config.volume, 0.5);
        assert_eq!(config.tracks.len(), 2);
    }

    #[test]
    fn tracks_and_media_dirs_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("playdeck.toml");
        std::fs::write(
            &path,
            r#"
media_dirs = ["/srv/music"]

[[tracks]]
title = "Intro"
artist = "Band"
audio_url = "intro.ogg"
"#,
        )
        .unwrap();

        let config: AppConfig = confy::load_path(&path).unwrap();
        assert_eq!(config.media_dirs, vec!["/srv/music".to_string()]);
        assert_eq!(config.tracks, vec![Track::new("Intro", "Band", "", "intro.ogg")]);
    }
}
