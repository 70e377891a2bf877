//! Notifications tab — each event's reminder label.
//!
//! The labels are informational; nothing is scheduled.

use planner_core::store::EventStore;
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use super::{dim, kind_color, kind_icon};
use crate::app::App;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(" Reminders ")
    .borders(Borders::ALL)
    .border_style(dim());
  let inner = block.inner(area);
  f.render_widget(block, area);

  if app.store.is_empty() {
    f.render_widget(Paragraph::new(Span::styled("No events yet.", dim())), inner);
    return;
  }

  let lines: Vec<Line> = app
    .store
    .list()
    .iter()
    .map(|event| {
      Line::from(vec![
        Span::styled(kind_icon(event.kind), Style::default().fg(kind_color(event.kind))),
        Span::raw(format!("{:<32}", event.title)),
        Span::styled(
          format!("{} at {:<8}", event.date.format("%d.%m.%Y"), event.time),
          dim(),
        ),
        Span::styled(
          format!(" 🔔 {}", event.notification),
          Style::default().fg(Color::Yellow),
        ),
      ])
    })
    .collect();

  f.render_widget(
    Paragraph::new(lines).scroll((app.notify_scroll as u16, 0)),
    inner,
  );
}
