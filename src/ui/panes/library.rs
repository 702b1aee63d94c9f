//! Algorithm library pane: filtered list, category tab and search query

use crate::catalog::AlgorithmInfo;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Data needed to render the library pane
pub struct LibraryRenderData<'a> {
    pub entries: &'a [&'static AlgorithmInfo],
    pub selected: Option<usize>,
    pub category: &'a str,
    pub query: &'a str,
    pub is_searching: bool,
}

/// Render the library pane
pub fn render_library_pane(frame: &mut Frame, area: Rect, data: LibraryRenderData) {
    let border_style = if data.is_searching {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let title = if data.query.is_empty() && !data.is_searching {
        format!(" Library [{}] ", data.category)
    } else {
        format!(" Library [{}] /{} ", data.category, data.query)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    if data.entries.is_empty() {
        let paragraph = Paragraph::new("No algorithms found. Try a different search term.")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = data
        .entries
        .iter()
        .map(|info| {
            ListItem::new(vec![
                Line::from(Span::styled(info.name, Style::default().fg(DEFAULT_THEME.fg))),
                Line::from(Span::styled(
                    format!("  {}", info.category),
                    Style::default().fg(DEFAULT_THEME.comment),
                )),
            ])
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(DEFAULT_THEME.current_line_bg)
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = ListState::default().with_selected(data.selected);
    frame.render_stateful_widget(list, area, &mut state);
}
