use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

use super::state::MAX_PURPOSE_CHARS;
use crate::app::App;
use crate::messages;
use crate::theme;
use crate::widgets::popup;

const PURPOSE_POPUP_WIDTH: u16 = 64;
const PURPOSE_POPUP_HEIGHT: u16 = 14;
const EDITOR_ROWS: u16 = 6;

/// Render the purpose editor surface.
pub fn render_purpose(app: &mut App, frame: &mut Frame) {
    let frame_area = frame.area();
    if frame_area.width < 30 || frame_area.height < PURPOSE_POPUP_HEIGHT {
        return;
    }

    let width = PURPOSE_POPUP_WIDTH.min(frame_area.width.saturating_sub(4));
    let popup_area = popup::centered_popup(frame_area, width, PURPOSE_POPUP_HEIGHT);
    popup::clear_area(frame, popup_area);

    let title = format!(
        " {} {} ",
        messages::localize("purpose.title_for", "Edit Purpose for"),
        app.purpose.channel_label
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(theme::purpose::BORDER))
        .style(Style::default().bg(theme::purpose::BG));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let layout = Layout::vertical([
        Constraint::Length(2),               // body text
        Constraint::Length(EDITOR_ROWS + 2), // editor with borders
        Constraint::Length(1),               // error line
        Constraint::Length(1),               // counter + footer hint
    ])
    .split(inner);

    let body = messages::localize(
        "purpose.body",
        "Describe how this channel should be used. This text appears in the channel list and helps others decide whether to join.",
    );
    frame.render_widget(
        Paragraph::new(body)
            .style(Style::default().fg(theme::purpose::BODY))
            .wrap(ratatui::widgets::Wrap { trim: true }),
        layout[0],
    );

    app.purpose.textarea.set_cursor_style(theme::palette::CURSOR);
    app.purpose
        .textarea
        .set_cursor_line_style(Style::default());
    app.purpose.textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::purpose::BORDER)),
    );
    frame.render_widget(&app.purpose.textarea, layout[1]);

    if let Some(error) = &app.purpose.error {
        frame.render_widget(
            Paragraph::new(error.as_str()).style(Style::default().fg(theme::purpose::ERROR)),
            layout[2],
        );
    }

    let save_hint = if app.config.input.send_on_ctrl_enter {
        "Ctrl+Enter: Save | Esc: Cancel"
    } else {
        "Enter: Save | Esc: Cancel"
    };
    let footer = format!(
        "{}  ·  {}/{}",
        save_hint,
        app.purpose.char_count(),
        MAX_PURPOSE_CHARS
    );
    frame.render_widget(
        Paragraph::new(footer).style(Style::default().fg(theme::purpose::COUNTER)),
        layout[3],
    );
}
