//! Top tab strip switching between the three record collections.

use crate::models::EntityKind;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Tabs,
    Frame,
};

pub fn render_tab_bar(f: &mut Frame, area: Rect, active: EntityKind) {
    let selected = EntityKind::ALL
        .iter()
        .position(|kind| *kind == active)
        .unwrap_or(0);
    let titles: Vec<String> = EntityKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| format!(" {}:{} ", i + 1, kind.title()))
        .collect();

    let tabs = Tabs::new(titles)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .select(selected);
    f.render_widget(tabs, area);
}
