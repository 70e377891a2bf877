//! Help tab.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Wrap},
};

use super::dim;

const STEPS: [(&str, &str); 3] = [
  (
    "Create an event",
    "Press n and fill in the details, or pick a preset on the Templates tab.",
  ),
  (
    "Choose a reminder",
    "Set how long before the event you want to be reminded. The label is \
     shown on the Notifications tab.",
  ),
  (
    "Manage your calendar",
    "Browse events by day and type on the Events tab; a toggles between the \
     selected day and all dates, f cycles the type filter.",
  ),
];

pub fn draw(f: &mut Frame, area: Rect) {
  let block = Block::default()
    .title(" Help ")
    .borders(Borders::ALL)
    .border_style(dim());

  let mut lines = Vec::new();
  for (i, (title, body)) in STEPS.iter().enumerate() {
    lines.push(Line::from(vec![
      Span::styled(
        format!(" {} ", i + 1),
        Style::default().fg(Color::Black).bg(Color::Cyan),
      ),
      Span::styled(
        format!(" {title}"),
        Style::default().add_modifier(Modifier::BOLD),
      ),
    ]));
    lines.push(Line::from(Span::styled(format!("    {body}"), dim())));
    lines.push(Line::from(""));
  }
  lines.push(Line::from(Span::styled(
    "Keys: 1-5 or Tab switch tabs · n new · e edit · d delete · q quit",
    dim(),
  )));

  f.render_widget(
    Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
    area,
  );
}
