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

//! User interface rendering logic.
//!
//! This module translates the [`DeckView`](crate::components::DeckView) into
//! `ratatui` widgets. It is responsible for layout management, widget
//! styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event. Each frame also rebuilds the deck's hit map, so
//! mouse clicks are always resolved against what is actually on screen.

mod cards;
mod icons;
mod notice;
mod player;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::{
    App,
    render::{cards::draw_cards, notice::draw_notice, player::draw_player},
};

const HELP_TEXT: &str =
    "space play/pause  n next  p previous  enter play selected  -/= volume  q quit";

/// Renders the user interface to the terminal frame.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, the deck's hit
///   map is rebuilt while drawing.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();
    let theme = app.theme;

    f.render_widget(
        Block::default().style(Style::default().bg(theme.background_colour)),
        area,
    );

    // Outer layout: header, cards, player, footer
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(7),
            Constraint::Length(1),
        ])
        .split(area);

    let deck = app.controller.surface_mut();
    deck.hit_map.clear();

    let header = Line::from(vec![
        Span::styled(" playdeck ", Style::default().add_modifier(Modifier::BOLD)).fg(theme.accent_colour),
        Span::raw(format!("{} tracks", deck.cards.len())).fg(theme.card_artist_fg),
    ]);
    f.render_widget(Paragraph::new(header), outer[0]);

    draw_cards(f, outer[1], deck, &theme);
    draw_player(f, outer[2], deck, &theme);

    f.render_widget(
        Paragraph::new(format!(" {}", HELP_TEXT)).fg(theme.disabled_colour),
        outer[3],
    );

    if let Some(text) = &deck.notice {
        draw_notice(f, area, text, &theme);
    }
}
