//! Shared scrollbar for the entity tables.
//!
//! All three tables render as a bordered list with a header row. When the
//! collection overflows the viewport, a one-column scrollbar strip is carved
//! out of the right border so every table scrolls and looks the same.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

#[derive(Default)]
pub struct ScrollbarHelper {
    state: ScrollbarState,
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self {
            state: ScrollbarState::new(0),
        }
    }

    /// Rows that fit inside the borders of `rect`.
    pub fn viewport_rows(rect: Rect) -> usize {
        rect.height.saturating_sub(2) as usize
    }

    /// Split `rect` into a content area and, when `rows` overflow the
    /// viewport, a scrollbar strip inside the border.
    pub fn split(rect: Rect, rows: usize) -> (Rect, Option<Rect>) {
        if rows <= Self::viewport_rows(rect) {
            return (rect, None);
        }
        let content = Rect {
            width: rect.width.saturating_sub(1),
            ..rect
        };
        let strip = Rect {
            x: rect.x + rect.width.saturating_sub(1),
            y: rect.y + 1,
            width: 1,
            height: rect.height.saturating_sub(2),
        };
        (content, Some(strip))
    }

    /// Sync the thumb with the current selection before rendering.
    pub fn update(&mut self, rows: usize, position: usize, viewport: usize) {
        self.state = self
            .state
            .content_length(rows)
            .viewport_content_length(viewport)
            .position(position);
    }

    pub fn render(&mut self, f: &mut Frame, strip: Option<Rect>) {
        let Some(area) = strip else {
            return;
        };
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("█")
            .style(Style::default().fg(Color::DarkGray))
            .thumb_style(Style::default().fg(Color::Gray));

        f.render_stateful_widget(scrollbar, area, &mut self.state);
    }
}
