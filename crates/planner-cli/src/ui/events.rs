//! Events tab — day picker and filters on the left, visible events on the
//! right.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::{dim, kind_color, kind_icon, month};
use crate::app::App;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Length(26), Constraint::Min(0)])
    .split(area);

  draw_sidebar(f, cols[0], app);
  draw_list(f, cols[1], app);
}

fn draw_sidebar(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(" Date ")
    .borders(Borders::ALL)
    .border_style(dim());
  let inner = block.inner(area);
  f.render_widget(block, area);

  let mut lines = month::lines(app);
  lines.push(Line::from(""));

  let date_label = match app.selected_date() {
    Some(d) => d.format("%a %-d %b %Y").to_string(),
    None => "all dates".into(),
  };
  lines.push(Line::from(vec![
    Span::styled("Showing ", dim()),
    Span::styled(date_label, Style::default().fg(Color::Yellow)),
  ]));
  lines.push(Line::from(vec![
    Span::styled("Type    ", dim()),
    Span::styled(app.type_filter.to_string(), Style::default().fg(Color::Yellow)),
  ]));

  f.render_widget(Paragraph::new(lines), inner);
}

fn draw_list(f: &mut Frame, area: Rect, app: &App) {
  let visible = app.visible();

  let block = Block::default()
    .title(format!(" Events ({}/{}) ", visible.len(), app.store.len()))
    .borders(Borders::ALL)
    .border_style(dim());
  let inner = block.inner(area);
  f.render_widget(block, area);

  if visible.is_empty() {
    f.render_widget(
      Paragraph::new(vec![
        Line::from(Span::styled("No events for this selection.", dim())),
        Line::from(Span::styled("Press n to create one.", dim())),
      ]),
      inner,
    );
    return;
  }

  let items: Vec<ListItem> = visible
    .iter()
    .map(|event| {
      let mut lines = vec![
        Line::from(vec![
          Span::styled(kind_icon(event.kind), Style::default().fg(kind_color(event.kind))),
          Span::styled(event.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
          Span::styled(format!("  {}", event.kind.label()), Style::default().fg(kind_color(event.kind))),
        ]),
        Line::from(Span::styled(
          format!("   {} {}  ⏰ {}", event.date.format("%d.%m.%Y"), event.time, event.notification),
          dim(),
        )),
      ];
      if !event.location.is_empty() {
        lines.push(Line::from(format!("   📍 {}", event.location)));
      }
      if !event.description.is_empty() {
        lines.push(Line::from(Span::styled(format!("   {}", event.description), dim())));
      }
      lines.push(Line::from(""));
      ListItem::new(lines)
    })
    .collect();

  let mut state = ListState::default();
  state.select(Some(app.list_cursor));

  f.render_stateful_widget(
    List::new(items).highlight_style(Style::default().bg(Color::Rgb(30, 40, 70))),
    inner,
    &mut state,
  );
}
