use ratatui::{
    Frame,
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

use super::notification_state::NotificationState;
use crate::widgets::popup;

const MAX_NOTIFICATION_WIDTH: u16 = 60;

/// Render the current notification as a floating toast in the top-right.
pub fn render_notification(state: &NotificationState, frame: &mut Frame) {
    let Some(notification) = state.current() else {
        return;
    };

    let frame_area = frame.area();
    let text_width = notification.message.chars().count() as u16 + 4;
    let width = text_width
        .min(MAX_NOTIFICATION_WIDTH)
        .min(frame_area.width);
    let area = popup::top_right_popup(frame_area, width, 3);

    popup::clear_area(frame, area);

    let widget = Paragraph::new(notification.message.as_str())
        .style(
            Style::default()
                .fg(notification.style.fg)
                .bg(notification.style.bg),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(notification.style.border)),
        );

    frame.render_widget(widget, area);
}
