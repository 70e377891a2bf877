//! Calendar tab — month grid above every event with its date.

use planner_core::store::EventStore;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::Style,
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use super::{dim, kind_color, month};
use crate::app::App;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Length(11), Constraint::Min(0)])
    .split(area);

  let grid_block = Block::default()
    .title(" Calendar ")
    .borders(Borders::ALL)
    .border_style(dim());
  let grid_area = grid_block.inner(rows[0]);
  f.render_widget(grid_block, rows[0]);
  f.render_widget(Paragraph::new(month::lines(app)), grid_area);

  let list_block = Block::default()
    .title(format!(" All events ({}) ", app.store.len()))
    .borders(Borders::ALL)
    .border_style(dim());
  let list_area = list_block.inner(rows[1]);
  f.render_widget(list_block, rows[1]);

  let lines: Vec<Line> = app
    .store
    .list()
    .iter()
    .map(|event| {
      Line::from(vec![
        Span::styled("● ", Style::default().fg(kind_color(event.kind))),
        Span::raw(format!("{:<32}", event.title)),
        Span::styled(event.date.format("%-d %b").to_string(), dim()),
      ])
    })
    .collect();
  f.render_widget(Paragraph::new(lines), list_area);
}
