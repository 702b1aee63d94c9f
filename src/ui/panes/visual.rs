//! Visualization pane: draws the scene recorded in the current snapshot
//!
//! Every scene kind maps to plain styled text lines, which keeps the pane a
//! pure function of the current step.

use crate::algorithms::scene::{
    ActivityScene, ArrayScene, BitScene, GraphScene, Mark, Scene, TreeScene,
};
use crate::algorithms::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

const CELL_WIDTH: usize = 5;

/// Render the visualization pane
pub fn render_visual_pane(frame: &mut Frame, area: Rect, title: &str, snapshot: Option<&Snapshot>) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 1, 0));

    let lines = match snapshot {
        Some(snapshot) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    snapshot.description.clone(),
                    Style::default()
                        .fg(DEFAULT_THEME.primary)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::default(),
            ];
            lines.extend(scene_lines(&snapshot.scene));
            lines
        }
        None => vec![Line::from(Span::styled(
            "(no step)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Text lines for a scene
pub fn scene_lines(scene: &Scene) -> Vec<Line<'static>> {
    match scene {
        Scene::Array(array) => array_lines(array),
        Scene::Tree(tree) => tree_lines(tree),
        Scene::Graph(graph) => graph_lines(graph),
        Scene::Bits(bits) => bit_lines(bits),
        Scene::Activities(activities) => activity_lines(activities),
    }
}

fn cell(text: String, style: Style) -> Span<'static> {
    Span::styled(format!("{:^width$}", text, width = CELL_WIDTH), style)
}

fn label(text: &str) -> Span<'static> {
    Span::styled(
        format!("{:<8}", text),
        Style::default().fg(DEFAULT_THEME.comment),
    )
}

fn array_lines(array: &ArrayScene) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let indices: Vec<Span> = std::iter::once(label("index"))
        .chain((0..array.values.len()).map(|i| {
            cell(i.to_string(), Style::default().fg(DEFAULT_THEME.comment))
        }))
        .collect();
    lines.push(Line::from(indices));

    let values: Vec<Span> = std::iter::once(label("value"))
        .chain(array.values.iter().enumerate().map(|(i, value)| {
            let mark = array.mark_at(i);
            let mut style = Style::default().fg(DEFAULT_THEME.mark_color(mark));
            if matches!(mark, Some(Mark::Active) | Some(Mark::Swap)) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            cell(value.to_string(), style)
        }))
        .collect();
    lines.push(Line::from(values));

    if !array.pointers.is_empty() {
        let pointer_row: Vec<Span> = std::iter::once(label(""))
            .chain((0..array.values.len()).map(|i| {
                let names: Vec<&str> = array
                    .pointers
                    .iter()
                    .filter(|(_, at)| *at == i)
                    .map(|(name, _)| *name)
                    .collect();
                let text = if names.is_empty() {
                    String::new()
                } else {
                    format!("↑{}", names.join("/"))
                };
                cell(text, Style::default().fg(DEFAULT_THEME.pointer))
            }))
            .collect();
        lines.push(Line::from(pointer_row));
    }

    if let Some((name, aux)) = &array.aux {
        lines.push(Line::default());
        let aux_row: Vec<Span> = std::iter::once(label(name))
            .chain(aux.iter().map(|v| {
                cell(v.to_string(), Style::default().fg(DEFAULT_THEME.secondary))
            }))
            .collect();
        lines.push(Line::from(aux_row));
    }

    lines
}

fn tree_lines(tree: &TreeScene) -> Vec<Line<'static>> {
    let levels = tree.levels();
    let depth = levels.len();
    let mut lines = Vec::new();

    for (level, nodes) in levels.iter().enumerate() {
        // Wider gaps near the root so children sit under their parents
        let gap = CELL_WIDTH * ((1usize << (depth - level - 1)).saturating_sub(1));
        let mut spans = vec![Span::raw(" ".repeat(gap / 2))];
        for &i in nodes {
            let style = if tree.found == Some(i) {
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else if tree.active == Some(i) {
                Style::default()
                    .fg(DEFAULT_THEME.active)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else if tree.path.contains(&i) {
                Style::default().fg(DEFAULT_THEME.active)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            spans.push(cell(tree.nodes[i].value.to_string(), style));
            spans.push(Span::raw(" ".repeat(gap)));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "(empty tree)",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }
    lines
}

fn graph_lines(graph: &GraphScene) -> Vec<Line<'static>> {
    let name = |i: &usize| graph.vertices[*i];
    let mut lines = Vec::new();

    let vertices: Vec<Span> = std::iter::once(label("vertex"))
        .chain(graph.vertices.iter().enumerate().map(|(i, v)| {
            let style = if graph.active == Some(i) {
                Style::default()
                    .fg(DEFAULT_THEME.active)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else if graph.order.contains(&i) {
                Style::default().fg(DEFAULT_THEME.success)
            } else if graph.visited.contains(&i) {
                Style::default().fg(DEFAULT_THEME.primary)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };
            cell(v.to_string(), style)
        }))
        .collect();
    lines.push(Line::from(vertices));
    lines.push(Line::default());

    let arrow = if graph.directed { "→" } else { "—" };
    let edges: Vec<String> = graph
        .edges
        .iter()
        .map(|(a, b)| format!("{}{}{}", name(a), arrow, name(b)))
        .collect();
    lines.push(Line::from(vec![label("edges"), Span::raw(edges.join("  "))]));

    let frontier: Vec<&str> = graph.frontier.iter().map(name).collect();
    lines.push(Line::from(vec![
        label(graph.frontier_label),
        Span::styled(
            format!("[{}]", frontier.join(", ")),
            Style::default().fg(DEFAULT_THEME.pointer),
        ),
    ]));

    let order: Vec<&str> = graph.order.iter().map(name).collect();
    lines.push(Line::from(vec![
        label("order"),
        Span::styled(order.join(" → "), Style::default().fg(DEFAULT_THEME.success)),
    ]));

    lines
}

fn bit_lines(bits: &BitScene) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        label("op"),
        Span::styled(
            bits.operation.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ])];

    let positions: Vec<Span> = std::iter::once(label("bit"))
        .chain((0..8).rev().map(|p| {
            cell(p.to_string(), Style::default().fg(DEFAULT_THEME.comment))
        }))
        .collect();
    lines.push(Line::from(positions));

    let values: Vec<Span> = std::iter::once(label("value"))
        .chain((0..8).rev().map(|p| {
            let on = bits.value & (1 << p) != 0;
            let style = if bits.highlight & (1 << p) != 0 {
                Style::default()
                    .fg(DEFAULT_THEME.active)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            cell(if on { "1" } else { "0" }.to_string(), style)
        }))
        .collect();
    lines.push(Line::from(values));
    lines.push(Line::default());

    if let Some(expression) = &bits.expression {
        lines.push(Line::from(vec![
            label("expr"),
            Span::styled(expression.clone(), Style::default().fg(DEFAULT_THEME.pointer)),
        ]));
    }
    lines.push(Line::from(vec![
        label("result"),
        Span::styled(bits.result.clone(), Style::default().fg(DEFAULT_THEME.success)),
    ]));
    lines
}

fn activity_lines(scene: &ActivityScene) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for activity in &scene.activities {
        let style = if scene.current == Some(activity.id) {
            Style::default()
                .fg(DEFAULT_THEME.active)
                .add_modifier(Modifier::BOLD)
        } else if scene.selected.contains(&activity.id) {
            Style::default().fg(DEFAULT_THEME.success)
        } else if scene.rejected.contains(&activity.id) {
            Style::default().fg(DEFAULT_THEME.error)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };

        let start = activity.start as usize;
        let span = activity.finish.saturating_sub(activity.start) as usize;
        lines.push(Line::from(vec![
            label(&format!("#{}", activity.id)),
            Span::styled(
                format!("{:>2}-{:<2} ", activity.start, activity.finish),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::raw(" ".repeat(start * 2)),
            Span::styled("██".repeat(span.max(1)), style),
        ]));
    }

    if let Some(finish) = scene.last_finish {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            label("last"),
            Span::styled(
                format!("finish = {}", finish),
                Style::default().fg(DEFAULT_THEME.pointer),
            ),
        ]));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{build_sequence, AlgorithmId};

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_array_lines_show_values_and_pointers() {
        let scene = ArrayScene::new(&[3, 1, 2])
            .mark(1, Mark::Active)
            .pointer("mid", 1);
        let lines = array_lines(&scene);
        assert_eq!(lines.len(), 3);
        assert!(text(&lines[1]).contains('3'));
        assert!(text(&lines[2]).contains("↑mid"));
    }

    #[test]
    fn test_every_algorithm_renders() {
        for id in AlgorithmId::ALL {
            let seq = build_sequence(id);
            for step in seq.iter() {
                assert!(!scene_lines(&step.state().scene).is_empty(), "{} rendered nothing", id);
            }
        }
    }

    #[test]
    fn test_bit_lines_msb_first() {
        let lines = scene_lines(&Scene::Bits(BitScene {
            operation: "x",
            value: 0b1000_0001,
            highlight: 0,
            result: String::new(),
            expression: None,
        }));
        let row = text(&lines[2]);
        let digits: String = row.chars().filter(|c| *c == '0' || *c == '1').collect();
        assert_eq!(digits, "10000001");
    }
}
