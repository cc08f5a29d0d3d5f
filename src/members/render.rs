use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::state::USERS_PER_PAGE;
use crate::app::App;
use crate::theme;
use crate::widgets::popup;

const MEMBERS_POPUP_WIDTH: u16 = 70;
const SEARCH_HEIGHT: u16 = 3;

/// Render the member list surface: paged list, pager line, search box.
pub fn render_members(app: &mut App, frame: &mut Frame) {
    let frame_area = frame.area();
    if frame_area.width < 30 || frame_area.height < 12 {
        return;
    }

    let width = MEMBERS_POPUP_WIDTH.min(frame_area.width.saturating_sub(4));
    let height = frame_area.height.saturating_sub(4);
    let popup_area = popup::centered_popup(frame_area, width, height);
    popup::clear_area(frame, popup_area);

    let layout = Layout::vertical([
        Constraint::Min(3),                    // member list
        Constraint::Length(1),                 // pager line
        Constraint::Length(SEARCH_HEIGHT),     // search box
    ])
    .split(popup_area);

    let filtered = app.members.filter(&app.member_rows);
    let total = filtered.len();
    app.members.clamp_selection(total);

    let page = app.members.page();
    let page_count = total.div_ceil(USERS_PER_PAGE).max(1);
    let page_start = page * USERS_PER_PAGE;
    let page_slice = &filtered[page_start.min(total)..((page + 1) * USERS_PER_PAGE).min(total)];

    // Window the page slice around the selection when it overflows the list area
    let list_height = layout[0].height.saturating_sub(2) as usize;
    let selection_in_page = app.members.selected.saturating_sub(page_start);
    let window_start = selection_in_page.saturating_sub(list_height.saturating_sub(1));

    let items: Vec<ListItem> = if page_slice.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "   No matches",
            Style::default().fg(theme::palette::TEXT_DIM),
        )))]
    } else {
        page_slice
            .iter()
            .enumerate()
            .skip(window_start)
            .take(list_height.max(1))
            .map(|(i, row)| {
                let admin_tag = if row.is_admin { "  [admin]" } else { "" };
                let full_name = row.user.full_name();
                let name_part = if full_name.is_empty() {
                    String::new()
                } else {
                    format!("  {}", full_name)
                };

                let line = if i == selection_in_page {
                    Line::from(Span::styled(
                        format!(" ► {}{}{} ", row.user.username, name_part, admin_tag),
                        Style::default()
                            .fg(theme::members::SELECTED_FG)
                            .bg(theme::members::SELECTED_BG)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(vec![
                        Span::styled(
                            format!("   {}", row.user.username),
                            Style::default().fg(theme::members::USERNAME),
                        ),
                        Span::styled(
                            name_part,
                            Style::default().fg(theme::members::FULL_NAME),
                        ),
                        Span::styled(
                            admin_tag,
                            Style::default().fg(theme::members::ADMIN_TAG),
                        ),
                    ])
                };
                ListItem::new(line)
            })
            .collect()
    };

    let title = format!(" Team Members ({}) ", total);
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(theme::members::BORDER))
            .style(Style::default().bg(theme::members::BG)),
    );
    frame.render_widget(list, layout[0]);

    let pager = format!(
        " Page {}/{} · {} members · PgUp/PgDn to page, Enter to message ",
        page + 1,
        page_count,
        total
    );
    frame.render_widget(
        Paragraph::new(pager).style(
            Style::default()
                .fg(theme::members::PAGER)
                .bg(theme::members::BG),
        ),
        layout[1],
    );

    app.members.search.set_cursor_style(theme::palette::CURSOR);
    app.members.search.set_cursor_line_style(Style::default());
    app.members.search.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(Style::default().fg(theme::members::BORDER))
            .style(Style::default().bg(theme::members::BG)),
    );
    frame.render_widget(&app.members.search, layout[2]);
}
