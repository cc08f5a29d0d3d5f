use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use super::help_content;
use super::help_state::HelpPopupState;
use crate::theme;
use crate::widgets::popup;

const HELP_POPUP_WIDTH: u16 = 64;
const HELP_POPUP_PADDING: u16 = 4; // borders (2) + footer (2)

/// Render the help popup (centered modal with keyboard shortcuts)
pub fn render_help_popup(state: &mut HelpPopupState, frame: &mut Frame) {
    let frame_area = frame.area();
    if frame_area.width < 20 || frame_area.height < 10 {
        return;
    }

    let ideal_height = help_content::HELP_ENTRIES.len() as u16 + HELP_POPUP_PADDING;
    let popup_width = HELP_POPUP_WIDTH.min(frame_area.width);
    let popup_height = ideal_height.min(frame_area.height);

    let popup_area = popup::centered_popup(frame_area, popup_width, popup_height);
    popup::clear_area(frame, popup_area);

    let mut lines: Vec<Line> = Vec::new();
    for (key, desc) in help_content::HELP_ENTRIES {
        if key.is_empty() && desc.is_empty() {
            lines.push(Line::from(""));
        } else if key.is_empty() {
            // Section header
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    *desc,
                    Style::default()
                        .fg(theme::help::SECTION)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        } else {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<14}", key),
                    Style::default()
                        .fg(theme::help::KEY)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*desc, Style::default().fg(theme::help::DESC)),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  {}", help_content::HELP_FOOTER),
        Style::default().fg(theme::help::FOOTER),
    )));

    let content_height = lines.len() as u32;
    let visible_height = popup_height.saturating_sub(2);
    state.scroll.update_bounds(content_height, visible_height);

    let widget = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Keyboard Shortcuts ")
                .border_style(Style::default().fg(theme::help::BORDER))
                .style(Style::default().bg(theme::help::BG)),
        )
        .scroll((state.scroll.offset, 0));

    frame.render_widget(widget, popup_area);
}
