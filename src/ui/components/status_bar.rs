//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::models::EntityKind;
use crate::ui::notifications::{Notification, Severity};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(
        f: &mut Frame,
        area: ratatui::layout::Rect,
        notification: Option<&Notification>,
        busy_jobs: usize,
        active_tab: EntityKind,
    ) {
        let (status_text, status_color) = if let Some(notification) = notification {
            let color = match notification.severity {
                Severity::Error => Color::Red,
                Severity::Success => Color::Green,
                Severity::Info => Color::White,
            };
            (notification.message.clone(), color)
        } else if busy_jobs > 0 {
            ("🔄 Talking to the server...".to_string(), Color::Yellow)
        } else {
            // Show helpful shortcuts for the active tab
            let hints = match active_tab {
                EntityKind::Leads => {
                    "a: add • e: edit • d: delete • f/F: filter • x: clear • r: refresh • ?: help • q: quit"
                }
                EntityKind::Companies | EntityKind::Partners => {
                    "a: add • e: edit • d: delete • r: refresh • ?: help • q: quit"
                }
            };
            (hints.to_string(), Color::Gray)
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
