//! Modal overlays: the create/edit form and the delete confirmation.

use planner_core::store::EventStore;
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, Paragraph},
};
use uuid::Uuid;

use super::{centered, dim, kind_color};
use crate::app::{App, Dialog, FormField};

/// Render the event form centred over `area`.
pub fn draw_form(f: &mut Frame, area: Rect, dialog: &Dialog) {
  let popup = centered(area, 60, FormField::ALL.len() as u16 + 4);
  let title = if dialog.editing.is_some() {
    " Edit event "
  } else {
    " New event "
  };
  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Cyan));

  let mut lines: Vec<Line> = FormField::ALL
    .iter()
    .map(|field| form_row(dialog, *field))
    .collect();
  lines.push(Line::from(""));
  lines.push(Line::from(Span::styled(
    "Title and time are required.",
    dim(),
  )));

  f.render_widget(Clear, popup);
  f.render_widget(Paragraph::new(lines).block(block), popup);
}

fn form_row(dialog: &Dialog, field: FormField) -> Line<'static> {
  let focused = dialog.focus == field;
  let draft = &dialog.draft;

  let (value, value_style) = match field {
    FormField::Kind => (
      format!("‹ {} ›", draft.kind.label()),
      Style::default().fg(kind_color(draft.kind)),
    ),
    FormField::Notification => (format!("‹ {} ›", draft.notification), Style::default()),
    FormField::Date => {
      let shown = match (dialog.date, dialog.editing) {
        (Some(d), _) => d.format("%a %-d %b %Y").to_string(),
        (None, Some(_)) => "unchanged".into(),
        (None, None) => "today".into(),
      };
      (format!("‹ {shown} ›"), Style::default())
    }
    _ => {
      let text = field
        .text()
        .map(|t| draft.field(t).to_owned())
        .unwrap_or_default();
      let cursor = if focused { "_" } else { "" };
      (format!("{text}{cursor}"), Style::default())
    }
  };

  let label_style = if focused {
    Style::default()
      .fg(Color::Cyan)
      .add_modifier(Modifier::BOLD)
  } else {
    dim()
  };
  let marker = if focused { "› " } else { "  " };

  Line::from(vec![
    Span::styled(format!("{marker}{:<12}", field.label()), label_style),
    Span::styled(value, value_style),
  ])
}

/// Render the delete confirmation for event `id`.
pub fn draw_confirm(f: &mut Frame, area: Rect, app: &App, id: Uuid) {
  let title = app
    .store
    .get(id)
    .map_or("(missing)", |e| e.title.as_str());

  let popup = centered(area, 50, 6);
  let block = Block::default()
    .title(" Delete event? ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Red));

  let lines = vec![
    Line::from(Span::styled(
      title.to_owned(),
      Style::default().add_modifier(Modifier::BOLD),
    )),
    Line::from(Span::styled("This cannot be undone.", dim())),
    Line::from(""),
    Line::from("[y] delete   [n] cancel"),
  ];

  f.render_widget(Clear, popup);
  f.render_widget(Paragraph::new(lines).block(block), popup);
}
