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

//! Render the player panel.
//!
//! This module renders the "now playing" information, the transport buttons,
//! the volume slider and the progress bar, recording where each control was
//! drawn.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::{
    components::{DeckView, TransportState},
    render::icons::{ICON_NEXT, ICON_NOTE, ICON_PAUSE, ICON_PENDING, ICON_PLAY, ICON_PREV, ICON_VOLUME},
    theme::Theme,
};

const BUTTON_WIDTH: u16 = 5;

/// Renders the main player widget including track info and controls.
pub(crate) fn draw_player(f: &mut Frame, area: Rect, deck: &mut DeckView, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner_area);

    draw_now_playing(f, chunks[0], deck, theme);
    draw_controls(f, chunks[2], deck, theme);

    let position_gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(theme.accent_colour)
                .bg(theme.gauge_track_colour),
        )
        .ratio((deck.progress / 100.0).clamp(0.0, 1.0))
        .label("")
        .use_unicode(true);
    f.render_widget(position_gauge, chunks[4]);
    deck.hit_map.progress = Some(chunks[4]);
}

fn draw_now_playing(f: &mut Frame, area: Rect, deck: &DeckView, theme: &Theme) {
    let info_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(16)])
        .split(area);

    let bold = Style::default().add_modifier(Modifier::BOLD);

    let track_line = match &deck.now_playing {
        Some(track) => Line::from(vec![
            Span::styled(format!("{} ", ICON_NOTE), bold).fg(Color::White),
            Span::styled(&track.title, bold).fg(theme.accent_colour),
            Span::raw(" by "),
            Span::styled(&track.artist, bold).fg(theme.accent_colour),
            Span::raw("  "),
            Span::raw(&track.cover_url).fg(theme.card_cover_fg),
        ]),
        None => Line::from("Nothing playing").fg(theme.disabled_colour),
    };
    f.render_widget(Paragraph::new(track_line), info_chunks[0]);

    let time_line = Line::from(vec![
        Span::styled(&deck.elapsed, bold).fg(theme.accent_colour),
        Span::styled(" / ", bold).fg(Color::White),
        Span::styled(&deck.duration, bold).fg(theme.accent_colour),
    ]);
    f.render_widget(
        Paragraph::new(time_line).alignment(Alignment::Right),
        info_chunks[1],
    );
}

fn draw_controls(f: &mut Frame, area: Rect, deck: &mut DeckView, theme: &Theme) {
    let control_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(20),
            Constraint::Length(5),
        ])
        .split(area);

    let button = |icon: &str, colour: Color| {
        Paragraph::new(format!(" {} ", icon))
            .alignment(Alignment::Center)
            .style(Style::default().fg(colour).add_modifier(Modifier::BOLD))
    };

    let (play_icon, play_colour) = match deck.transport {
        TransportState::Play => (ICON_PLAY, theme.accent_colour),
        TransportState::Pause => (ICON_PAUSE, theme.accent_colour),
        TransportState::Pending => (ICON_PENDING, theme.disabled_colour),
    };

    f.render_widget(button(ICON_PREV, Color::White), control_chunks[0]);
    f.render_widget(button(play_icon, play_colour), control_chunks[1]);
    f.render_widget(button(ICON_NEXT, Color::White), control_chunks[2]);

    deck.hit_map.previous = Some(control_chunks[0]);
    deck.hit_map.play_pause = Some(control_chunks[1]);
    deck.hit_map.next = Some(control_chunks[2]);

    let volume = deck.volume.clamp(0.0, 1.0);

    f.render_widget(Paragraph::new(ICON_VOLUME).fg(Color::White), control_chunks[4]);

    let volume_gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(theme.accent_colour)
                .bg(theme.gauge_track_colour),
        )
        .ratio(volume)
        .label("")
        .use_unicode(true);
    f.render_widget(volume_gauge, control_chunks[5]);
    deck.hit_map.volume = Some(control_chunks[5]);

    let volume_label = Paragraph::new(format!("{}%", (volume * 100.0).round() as u16))
        .alignment(Alignment::Right)
        .fg(Color::White);
    f.render_widget(volume_label, control_chunks[6]);
}
