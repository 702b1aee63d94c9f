//! Details pane: description, complexity, notes and reference code for the
//! selected algorithm

use crate::catalog::AlgorithmInfo;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Which half of the details pane is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailsView {
    #[default]
    About,
    Code,
}

impl DetailsView {
    pub fn toggle(self) -> Self {
        match self {
            DetailsView::About => DetailsView::Code,
            DetailsView::Code => DetailsView::About,
        }
    }

    fn label(self) -> &'static str {
        match self {
            DetailsView::About => "About",
            DetailsView::Code => "Code",
        }
    }
}

/// Render the details pane
pub fn render_details_pane(
    frame: &mut Frame,
    area: Rect,
    info: &AlgorithmInfo,
    view: DetailsView,
    scroll: &mut u16,
) {
    let block = Block::default()
        .title(format!(" {} [{}] ", info.name, view.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let inner = block.inner(area);
    let paragraph = Paragraph::new(detail_lines(info, view)).wrap(Wrap { trim: false });

    *scroll = (*scroll).min(max_scroll(&paragraph, inner));

    frame.render_widget(paragraph.block(block).scroll((*scroll, 0)), area);
}

/// Furthest scroll offset that still leaves the last wrapped line in view
fn max_scroll(paragraph: &Paragraph, inner: Rect) -> u16 {
    if inner.width == 0 {
        return 0;
    }
    let total = u16::try_from(paragraph.line_count(inner.width)).unwrap_or(u16::MAX);
    total.saturating_sub(inner.height.max(1))
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(DEFAULT_THEME.secondary)
            .add_modifier(Modifier::BOLD),
    ))
}

fn bullets<'a>(items: &'a [&'static str]) -> impl Iterator<Item = Line<'static>> + 'a {
    items.iter().map(|item| {
        Line::from(vec![
            Span::styled("• ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::raw(*item),
        ])
    })
}

pub fn detail_lines(info: &AlgorithmInfo, view: DetailsView) -> Vec<Line<'static>> {
    match view {
        DetailsView::About => about_lines(info),
        DetailsView::Code => code_lines(info),
    }
}

fn about_lines(info: &AlgorithmInfo) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("Category: {}", info.category),
            Style::default().fg(DEFAULT_THEME.comment),
        )),
        Line::default(),
    ];
    if let Some(problem) = info.problem_statement {
        lines.push(heading("Problem"));
        lines.push(Line::from(problem));
        lines.push(Line::default());
    }
    lines.extend([
        Line::from(info.description),
        Line::default(),
        heading("Time Complexity"),
        Line::from(info.time_complexity),
        heading("Space Complexity"),
        Line::from(info.space_complexity),
        Line::default(),
        heading("Use Cases"),
    ]);
    lines.extend(bullets(info.use_cases));
    lines.push(Line::default());
    lines.push(heading("Key Insights"));
    lines.extend(bullets(info.key_insights));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        info.tags
            .iter()
            .map(|tag| format!("#{}", tag.replace(' ', "-")))
            .collect::<Vec<_>>()
            .join(" "),
        Style::default().fg(DEFAULT_THEME.pointer),
    )));
    lines
}

fn code_lines(info: &AlgorithmInfo) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Explanation"),
        Line::from(info.code_explanation),
        Line::default(),
        heading("Python"),
    ];
    let code_style = Style::default().fg(DEFAULT_THEME.fg);
    let comment_style = Style::default().fg(DEFAULT_THEME.comment);
    lines.extend(info.code.lines().map(|line| {
        let style = if line.trim_start().starts_with('#') {
            comment_style
        } else {
            code_style
        };
        Line::from(Span::styled(line, style))
    }));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::AlgorithmId;
    use crate::catalog;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_about_view_shows_problem_statement_when_present() {
        let flag = catalog::entry(AlgorithmId::DutchNationalFlag);
        assert!(text(&detail_lines(flag, DetailsView::About)).contains("Problem"));

        let bst = catalog::entry(AlgorithmId::BinarySearchTree);
        let about = text(&detail_lines(bst, DetailsView::About));
        assert!(!about.contains("Problem"));
        assert!(about.contains("Key Insights"));
    }

    #[test]
    fn test_code_view_lists_every_source_line() {
        let info = catalog::entry(AlgorithmId::BinarySearch);
        let lines = detail_lines(info, DetailsView::Code);
        assert_eq!(lines.len(), 4 + info.code.lines().count());
        assert!(text(&lines).contains("def binary_search_iterative"));
        assert!(text(&lines).contains(info.code_explanation));
    }

    #[test]
    fn test_view_toggle() {
        assert_eq!(DetailsView::default().toggle(), DetailsView::Code);
        assert_eq!(DetailsView::Code.toggle(), DetailsView::About);
    }

    #[test]
    fn test_scroll_limit_counts_wrapped_lines() {
        let long = "word ".repeat(40);
        let paragraph = Paragraph::new(vec![Line::from(long)]).wrap(Wrap { trim: false });
        // 200 characters at width 20 wrap onto 10 rows
        let limit = max_scroll(&paragraph, Rect::new(0, 0, 20, 4));
        assert!(limit >= 6, "limit {} ignores wrapping", limit);

        let short = Paragraph::new(vec![Line::from("one line")]).wrap(Wrap { trim: false });
        assert_eq!(max_scroll(&short, Rect::new(0, 0, 20, 4)), 0);
    }
}
