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

//! Visual styling and color configuration for the TUI.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) gauge_track_colour: Color,
    pub(crate) disabled_colour: Color,

    pub(crate) card_title_fg: Color,
    pub(crate) card_artist_fg: Color,
    pub(crate) card_cover_fg: Color,
    pub(crate) card_selected_border: Color,
    pub(crate) card_current_border: Color,

    pub(crate) notice_border: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(24, 24, 24),
            accent_colour: Color::Rgb(30, 215, 96),
            border_colour: Color::Rgb(83, 83, 83),
            gauge_track_colour: Color::Rgb(64, 64, 64),
            disabled_colour: Color::Rgb(110, 110, 110),

            card_title_fg: Color::Rgb(255, 255, 255),
            card_artist_fg: Color::Rgb(179, 179, 179),
            card_cover_fg: Color::Rgb(110, 110, 110),
            card_selected_border: Color::Rgb(255, 255, 255),
            card_current_border: Color::Rgb(30, 215, 96),

            notice_border: Color::Rgb(250, 189, 47),
        }
    }
}
