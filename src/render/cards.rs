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

//! Render the media card grid.
//!
//! Cards flow left to right in as many columns as fit. When there are more
//! rows than fit on screen, the grid scrolls to keep the selected card
//! visible.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::DeckView,
    render::icons::{ICON_NOTE, ICON_PLAY},
    theme::Theme,
};

const CARD_WIDTH: u16 = 30;
const CARD_HEIGHT: u16 = 5;
const AFFORDANCE_WIDTH: u16 = 3;

pub(crate) fn draw_cards(f: &mut Frame, area: Rect, deck: &mut DeckView, theme: &Theme) {
    let block = Block::default().padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if deck.cards.is_empty() {
        let empty = Paragraph::new("No tracks in the catalog")
            .alignment(Alignment::Center)
            .fg(theme.disabled_colour);
        f.render_widget(empty, inner);
        return;
    }

    if inner.width == 0 || inner.height < CARD_HEIGHT {
        return;
    }

    let columns = (inner.width / CARD_WIDTH).max(1);
    let visible_rows = (inner.height / CARD_HEIGHT).max(1) as usize;
    let card_width = inner.width / columns;

    let selected_row = deck.selected.unwrap_or(0) / columns as usize;
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    for (index, card) in deck.cards.iter().enumerate() {
        let row = index / columns as usize;
        if row < first_row || row >= first_row + visible_rows {
            continue;
        }
        let column = (index % columns as usize) as u16;

        let rect = Rect::new(
            inner.x + column * card_width,
            inner.y + (row - first_row) as u16 * CARD_HEIGHT,
            card_width,
            CARD_HEIGHT,
        )
        .intersection(inner);

        let is_selected = deck.selected == Some(index);

        let border_style = if card.is_current {
            Style::default().fg(theme.card_current_border)
        } else if is_selected {
            Style::default().fg(theme.card_selected_border)
        } else {
            Style::default().fg(theme.border_colour)
        };

        let mut card_block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .padding(Padding::horizontal(1));
        if card.is_current {
            card_block = card_block.title(format!(" {} Now playing ", ICON_NOTE));
        }
        if is_selected {
            card_block = card_block.border_style(border_style.add_modifier(Modifier::BOLD));
        }

        let card_inner = card_block.inner(rect);
        f.render_widget(card_block, rect);

        let lines = vec![
            Line::from(card.title.as_str()).style(
                Style::default()
                    .fg(theme.card_title_fg)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(card.artist.as_str()).fg(theme.card_artist_fg),
            Line::from(card.cover_url.as_str()).fg(theme.card_cover_fg),
        ];
        f.render_widget(Paragraph::new(lines), card_inner);

        if card.has_play_affordance && card_inner.width > AFFORDANCE_WIDTH {
            let affordance = Rect::new(
                card_inner.right() - AFFORDANCE_WIDTH,
                card_inner.y,
                AFFORDANCE_WIDTH,
                1,
            );
            let button = Paragraph::new(format!(" {} ", ICON_PLAY)).style(
                Style::default()
                    .fg(Color::Black)
                    .bg(theme.accent_colour),
            );
            f.render_widget(button, affordance);
            deck.hit_map.affordances.push((index, affordance));
        }

        deck.hit_map.cards.push((index, rect));
    }
}
