//! Templates tab — pick a preset to start a new event from.

use planner_core::template::TEMPLATES;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Wrap},
};

use super::{dim, kind_color, kind_icon};
use crate::app::App;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints(TEMPLATES.iter().map(|_| Constraint::Ratio(1, TEMPLATES.len() as u32)))
    .split(area);

  for (i, (template, cell)) in TEMPLATES.iter().zip(cols.iter()).enumerate() {
    let selected = i == app.template_cursor;
    let border = if selected {
      Style::default().fg(kind_color(template.kind))
    } else {
      dim()
    };
    let block = Block::default()
      .title(format!(" {}{} ", kind_icon(template.kind), template.name))
      .borders(Borders::ALL)
      .border_style(border);

    let mut lines = vec![
      Line::from(Span::styled(
        template.kind.label(),
        Style::default()
          .fg(kind_color(template.kind))
          .add_modifier(Modifier::BOLD),
      )),
      Line::from(""),
      Line::from(template.description),
      Line::from(""),
    ];
    if selected {
      lines.push(Line::from(Span::styled(
        "[Enter] use",
        Style::default().fg(Color::Yellow),
      )));
    }

    f.render_widget(
      Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
      *cell,
    );
  }
}
