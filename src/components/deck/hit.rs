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

//! Mouse hit testing.
//!
//! The renderer records where each clickable element was drawn in the last
//! frame; clicks are resolved against those rectangles.

use ratatui::layout::{Position, Rect};

/// The element under a mouse click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum HitTarget {
    Card(usize),
    PlayAffordance(usize),
    Previous,
    PlayPause,
    Next,
    /// Horizontal click position as a fraction of the bar width.
    ProgressBar(f64),
    /// Slider value under the pointer, `0.0` at the left end, `1.0` at the
    /// right end.
    VolumeSlider(f64),
}

#[derive(Debug, Default)]
pub(crate) struct HitMap {
    pub(crate) cards: Vec<(usize, Rect)>,
    pub(crate) affordances: Vec<(usize, Rect)>,
    pub(crate) previous: Option<Rect>,
    pub(crate) play_pause: Option<Rect>,
    pub(crate) next: Option<Rect>,
    pub(crate) progress: Option<Rect>,
    pub(crate) volume: Option<Rect>,
}

impl HitMap {
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }

    /// Resolves the element at a screen cell.
    ///
    /// Play affordances sit on top of their card and win over it.
    pub(crate) fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);

        if let Some((index, _)) = self.affordances.iter().find(|(_, r)| r.contains(position)) {
            return Some(HitTarget::PlayAffordance(*index));
        }
        if let Some((index, _)) = self.cards.iter().find(|(_, r)| r.contains(position)) {
            return Some(HitTarget::Card(*index));
        }

        let inside = |rect: Option<Rect>| rect.filter(|r| r.contains(position));

        if inside(self.previous).is_some() {
            return Some(HitTarget::Previous);
        }
        if inside(self.play_pause).is_some() {
            return Some(HitTarget::PlayPause);
        }
        if inside(self.next).is_some() {
            return Some(HitTarget::Next);
        }
        if let Some(bar) = inside(self.progress) {
            let ratio = f64::from(column - bar.x) / f64::from(bar.width);
            return Some(HitTarget::ProgressBar(ratio));
        }
        if let Some(slider) = inside(self.volume) {
            return Some(HitTarget::VolumeSlider(slider_value(slider, column)));
        }

        None
    }

    /// Slider value for a drag, which may leave the slider horizontally.
    ///
    /// Returns `None` unless the drag is on the slider's row.
    pub(crate) fn volume_drag(&self, column: u16, row: u16) -> Option<f64> {
        let slider = self.volume?;
        if row < slider.y || row >= slider.y + slider.height {
            return None;
        }
        Some(slider_value(slider, column))
    }
}

// The slider's own range restriction: the ends map to exactly 0 and 1.
fn slider_value(slider: Rect, column: u16) -> f64 {
    let span = slider.width.saturating_sub(1).max(1);
    let offset = column.saturating_sub(slider.x).min(span);
    f64::from(offset) / f64::from(span)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> HitMap {
        HitMap {
            cards: vec![(0, Rect::new(0, 0, 20, 5)), (1, Rect::new(20, 0, 20, 5))],
            affordances: vec![(0, Rect::new(16, 1, 3, 1)), (1, Rect::new(36, 1, 3, 1))],
            previous: Some(Rect::new(0, 10, 5, 1)),
            play_pause: Some(Rect::new(5, 10, 5, 1)),
            next: Some(Rect::new(10, 10, 5, 1)),
            progress: Some(Rect::new(0, 12, 40, 1)),
            volume: Some(Rect::new(30, 10, 11, 1)),
        }
    }

    #[test]
    fn affordance_wins_over_its_card() {
        let m = map();
        assert_eq!(m.target_at(17, 1), Some(HitTarget::PlayAffordance(0)));
        assert_eq!(m.target_at(2, 2), Some(HitTarget::Card(0)));
        assert_eq!(m.target_at(25, 4), Some(HitTarget::Card(1)));
    }

    #[test]
    fn resolves_transport_buttons() {
        let m = map();
        assert_eq!(m.target_at(1, 10), Some(HitTarget::Previous));
        assert_eq!(m.target_at(7, 10), Some(HitTarget::PlayPause));
        assert_eq!(m.target_at(14, 10), Some(HitTarget::Next));
        assert_eq!(m.target_at(20, 10), None);
    }

    #[test]
    fn progress_ratio_is_offset_over_width() {
        let m = map();
        assert_eq!(m.target_at(0, 12), Some(HitTarget::ProgressBar(0.0)));
        assert_eq!(m.target_at(10, 12), Some(HitTarget::ProgressBar(0.25)));
        assert_eq!(m.target_at(39, 12), Some(HitTarget::ProgressBar(39.0 / 40.0)));
    }

    #[test]
    fn volume_slider_spans_zero_to_one() {
        let m = map();
        assert_eq!(m.target_at(30, 10), Some(HitTarget::VolumeSlider(0.0)));
        assert_eq!(m.target_at(35, 10), Some(HitTarget::VolumeSlider(0.5)));
        assert_eq!(m.target_at(40, 10), Some(HitTarget::VolumeSlider(1.0)));
    }

    #[test]
    fn volume_drag_clamps_outside_the_slider() {
        let m = map();
        assert_eq!(m.volume_drag(10, 10), Some(0.0));
        assert_eq!(m.volume_drag(70, 10), Some(1.0));
        assert_eq!(m.volume_drag(35, 11), None);
    }

    #[test]
    fn cleared_map_hits_nothing() {
        let mut m = map();
        m.clear();
        assert_eq!(m.target_at(1, 1), None);
        assert_eq!(m.volume_drag(35, 10), None);
    }
}
