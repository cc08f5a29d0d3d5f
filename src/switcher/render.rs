use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::app::App;
use crate::messages;
use crate::suggest::SuggestionKind;
use crate::theme;
use crate::widgets::popup;

// Switcher surface display constants
const SWITCHER_WIDTH: u16 = 64;
const SWITCHER_HEIGHT: u16 = 7;
const MAX_VISIBLE_SUGGESTIONS: usize = 10;

/// Render the switcher surface and, when visible, its suggestion popup.
pub fn render_switcher(app: &mut App, frame: &mut Frame) {
    let frame_area = frame.area();
    if frame_area.width < 24 || frame_area.height < 12 {
        return;
    }

    let width = SWITCHER_WIDTH.min(frame_area.width.saturating_sub(4));
    // Anchored in the upper third so the suggestion list has room below
    let area = Rect {
        x: (frame_area.width.saturating_sub(width)) / 2,
        y: (frame_area.height.saturating_sub(SWITCHER_HEIGHT)) / 3,
        width,
        height: SWITCHER_HEIGHT,
    };

    popup::clear_area(frame, area);

    let title = format!(
        " {} ",
        messages::localize("switcher.title", "Switch Channels")
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(theme::switcher::BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::vertical([
        Constraint::Length(1), // hint
        Constraint::Length(3), // input
        Constraint::Length(1), // error / pending line
    ])
    .split(inner);

    let hint = messages::localize(
        "switcher.hint",
        "Type channel name. ↑↓ browse, TAB select, ↵ confirm, ESC dismiss",
    );
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(theme::switcher::HINT)),
        layout[0],
    );

    app.switcher.textarea.set_cursor_style(theme::switcher::CURSOR);
    app.switcher.textarea.set_cursor_line_style(Style::default());
    app.switcher.textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::switcher::BORDER)),
    );
    frame.render_widget(&app.switcher.textarea, layout[1]);

    if let Some(error) = &app.switcher.error {
        frame.render_widget(
            Paragraph::new(error.as_str()).style(Style::default().fg(theme::switcher::ERROR)),
            layout[2],
        );
    } else if app.switcher.is_pending() {
        let pending = messages::localize("switcher.opening_dm", "Opening direct message…");
        frame.render_widget(
            Paragraph::new(pending).style(Style::default().fg(theme::switcher::HINT)),
            layout[2],
        );
    }

    if app.switcher.suggest.is_visible() {
        render_suggestions(app, frame, area);
    }
}

/// Render the suggestion list below the switcher box.
fn render_suggestions(app: &App, frame: &mut Frame, anchor: Rect) {
    let suggestions = app.switcher.suggest.suggestions();
    if suggestions.is_empty() {
        return;
    }

    let visible_count = suggestions.len().min(MAX_VISIBLE_SUGGESTIONS);
    let popup_area = popup::popup_below_anchor(frame.area(), anchor, visible_count as u16 + 2);
    if popup_area.height < 3 {
        return;
    }

    // Align kind labels by padding suggestion texts to a common width
    let max_text_width = suggestions
        .iter()
        .take(MAX_VISIBLE_SUGGESTIONS)
        .map(|s| s.text.chars().count())
        .max()
        .unwrap_or(0);

    let items: Vec<ListItem> = suggestions
        .iter()
        .take(MAX_VISIBLE_SUGGESTIONS)
        .enumerate()
        .map(|(i, suggestion)| {
            let kind_color = match suggestion.kind {
                SuggestionKind::Channel { .. } => theme::suggest::KIND_CHANNEL,
                SuggestionKind::DirectMessage { .. } => theme::suggest::KIND_DM,
            };
            let kind_label = format!("[{}]", suggestion.kind);
            let padding =
                " ".repeat(max_text_width.saturating_sub(suggestion.text.chars().count()));
            let description = suggestion
                .description
                .as_deref()
                .map(|d| format!("  {}", d))
                .unwrap_or_default();

            let line = if i == app.switcher.suggest.selected_index() {
                Line::from(vec![
                    Span::styled(
                        format!("► {}{}{} ", suggestion.text, description, padding),
                        Style::default()
                            .fg(theme::suggest::SELECTED_FG)
                            .bg(theme::suggest::SELECTED_BG)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        kind_label,
                        Style::default()
                            .fg(theme::suggest::SELECTED_FG)
                            .bg(theme::suggest::SELECTED_BG),
                    ),
                ])
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("  {}{}{} ", suggestion.text, description, padding),
                        Style::default()
                            .fg(theme::suggest::TEXT)
                            .bg(theme::suggest::BG),
                    ),
                    Span::styled(
                        kind_label,
                        Style::default().fg(kind_color).bg(theme::suggest::BG),
                    ),
                ])
            };

            ListItem::new(line)
        })
        .collect();

    popup::clear_area(frame, popup_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(Style::default().fg(theme::suggest::BORDER))
            .style(Style::default().bg(theme::suggest::BG)),
    );

    frame.render_widget(list, popup_area);
}
