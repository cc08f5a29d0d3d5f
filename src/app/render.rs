use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::state::{App, Overlay};
use crate::help::render_help_popup;
use crate::members::render_members;
use crate::notification::render_notification;
use crate::purpose::render_purpose;
use crate::switcher::render_switcher;
use crate::theme;
use crate::workspace::ChannelType;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        // Split the terminal into channel view, message input, and help line
        let layout = Layout::vertical([
            Constraint::Min(5),    // Channel view takes most of the space
            Constraint::Length(3), // Message input is fixed 3 lines
            Constraint::Length(1), // Help line at bottom
        ])
        .split(frame.area());

        self.render_channel_view(frame, layout[0]);
        self.render_message_input(frame, layout[1]);
        self.render_help_line(frame, layout[2]);

        // Overlays render last so they float above the home view
        match self.overlay {
            Overlay::Switcher => render_switcher(self, frame),
            Overlay::Members => render_members(self, frame),
            Overlay::Purpose => render_purpose(self, frame),
            Overlay::None => {}
        }

        if self.help.visible {
            render_help_popup(&mut self.help, frame);
        }

        render_notification(&self.notification, frame);
    }

    /// Render the current channel (top)
    fn render_channel_view(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Channel ")
            .border_style(Style::default().fg(theme::home::BORDER));

        let text = if self.loader.is_some() {
            Text::from(Line::from(Span::styled(
                "Loading workspace…",
                Style::default().fg(theme::home::EMPTY_HINT),
            )))
        } else if let Some(channel) = &self.current_channel {
            let type_label = match channel.channel_type {
                ChannelType::Open => "public channel",
                ChannelType::Private => "private channel",
                ChannelType::Direct => "direct message",
                ChannelType::Group => "group message",
            };

            let mut lines = vec![
                Line::from(vec![
                    Span::styled(
                        channel.label().to_string(),
                        Style::default()
                            .fg(theme::home::CHANNEL_NAME)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  #{} · {}", channel.name, type_label),
                        Style::default().fg(theme::home::CHANNEL_TYPE),
                    ),
                ]),
                Line::from(""),
            ];
            if !channel.purpose.is_empty() {
                lines.push(Line::from(Span::styled(
                    channel.purpose.clone(),
                    Style::default().fg(theme::home::PURPOSE),
                )));
            }
            if !channel.header.is_empty() {
                lines.push(Line::from(Span::styled(
                    channel.header.clone(),
                    Style::default().fg(theme::home::HEADER),
                )));
            }
            Text::from(lines)
        } else {
            Text::from(Line::from(Span::styled(
                "No channel selected. Press Ctrl+K to switch channels.",
                Style::default().fg(theme::home::EMPTY_HINT),
            )))
        };

        let content = Paragraph::new(text).block(block).wrap(Wrap { trim: false });
        frame.render_widget(content, area);
    }

    /// Render the message input (the primary input surface)
    fn render_message_input(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.overlay == Overlay::None {
            theme::home::INPUT_BORDER_FOCUSED
        } else {
            theme::home::BORDER
        };

        self.message_input.set_cursor_style(theme::palette::CURSOR);
        self.message_input.set_cursor_line_style(Style::default());
        self.message_input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Message ")
                .border_style(Style::default().fg(border_color)),
        );

        frame.render_widget(&self.message_input, area);
    }

    /// Render the help line (bottom)
    fn render_help_line(&self, frame: &mut Frame, area: Rect) {
        let help_text =
            " F1: Help | Ctrl+K: Switch | Ctrl+T: Members | Ctrl+E: Purpose | Ctrl+C: Quit";
        let help = Paragraph::new(help_text).style(Style::default().fg(theme::help_line::TEXT));
        frame.render_widget(help, area);
    }
}
