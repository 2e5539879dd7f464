use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll_offset: usize, scrollbar_state: &mut ScrollbarState) {
    let help_content = r"
ESTATELIST - Real Estate CRM Client
===================================

TABS
----
Tab         Next tab
Shift+Tab   Previous tab
1/2/3       Jump to Leads / Companies / Channel Partners

NAVIGATION
----------
j/k or ↑/↓  Move row selection (down/up)

RECORDS
-------
a           Add a record in the active tab
e           Edit the selected record
d           Delete the selected record (with confirmation)
r           Refresh every collection from the server

LEAD FILTERS (Leads tab only)
-----------------------------
f           Cycle the company filter
F           Cycle the channel partner filter
x           Clear both filters

FORMS
-----
Tab / Shift+Tab   Move between fields
Left/Right        Change a select field's value
Enter             Validate and save
Esc               Cancel without saving

Required fields are checked when you save, never while
typing. Phone numbers must be exactly 10 digits.

GENERAL CONTROLS
----------------
?           Toggle this help panel
L           Show the activity log
q           Quit application
Ctrl+C      Quit application

HELP PANEL SCROLLING
--------------------
j/k         Scroll help content down/up
PageUp/Down Page through help content
Home/End    Jump to top/bottom

Press 'Esc', '?' or 'q' to close this help panel
";

    let help_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, help_area);

    let margin_x = 2;
    let margin_y = 1;
    let help_content_area = Rect::new(
        help_area.x + margin_x,
        help_area.y + margin_y,
        help_area.width.saturating_sub(margin_x * 2),
        help_area.height.saturating_sub(margin_y * 2),
    );

    let lines: Vec<&str> = help_content.lines().collect();
    let total_lines = lines.len();
    let visible_height = help_content_area.height.saturating_sub(2) as usize;

    let max_scroll = total_lines.saturating_sub(visible_height);
    let clamped_offset = scroll_offset.min(max_scroll);

    *scrollbar_state = scrollbar_state
        .content_length(total_lines)
        .viewport_content_length(visible_height)
        .position(clamped_offset);

    let visible_lines: Vec<&str> = lines
        .iter()
        .skip(clamped_offset)
        .take(visible_height)
        .copied()
        .collect();

    let help_text = visible_lines.join("\n");

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("📖 Help - Press 'Esc', '?' or 'q' to close")
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(help_paragraph, help_content_area);

    if total_lines > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(Color::Gray))
            .thumb_style(Style::default().fg(Color::White));

        f.render_stateful_widget(scrollbar, help_content_area, scrollbar_state);
    }
}
