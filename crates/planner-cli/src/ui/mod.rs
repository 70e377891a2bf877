//! TUI rendering — orchestrates the tab bar, the active tab, and overlays.

pub mod calendar;
pub mod dialog;
pub mod events;
pub mod help;
pub mod month;
pub mod notifications;
pub mod templates;

use chrono::Local;
use planner_core::event::EventType;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Paragraph, Tabs},
};

use crate::app::{App, Mode, Tab};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();

  // Vertical stack: header, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0], app);

  match app.tab {
    Tab::Events => events::draw(f, rows[1], app),
    Tab::Calendar => calendar::draw(f, rows[1], app),
    Tab::Templates => templates::draw(f, rows[1], app),
    Tab::Notifications => notifications::draw(f, rows[1], app),
    Tab::Help => help::draw(f, rows[1]),
  }

  draw_status(f, rows[2], app);

  match &app.mode {
    Mode::Normal => {}
    Mode::Dialog(dialog) => dialog::draw_form(f, area, dialog),
    Mode::ConfirmDelete(id) => dialog::draw_confirm(f, area, app, *id),
  }
}

// ─── Shared styling ───────────────────────────────────────────────────────────

pub fn kind_color(kind: EventType) -> Color {
  match kind {
    EventType::Meeting => Color::Blue,
    EventType::Party => Color::LightMagenta,
    EventType::Business => Color::Magenta,
  }
}

pub fn kind_icon(kind: EventType) -> &'static str {
  match kind {
    EventType::Meeting => "👥 ",
    EventType::Party => "🎉 ",
    EventType::Business => "💼 ",
  }
}

pub fn dim() -> Style { Style::default().fg(Color::DarkGray) }

/// A rectangle of `width` × `height` centred in `area`, clipped to it.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
  let width = width.min(area.width);
  let height = height.min(area.height);
  Rect {
    x: area.x + (area.width - width) / 2,
    y: area.y + (area.height - height) / 2,
    width,
    height,
  }
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
  let date = Local::now().format("%Y-%m-%d").to_string();

  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([
      Constraint::Length(10),
      Constraint::Min(0),
      Constraint::Length(date.len() as u16 + 1),
    ])
    .split(area);

  let bar = Style::default().bg(Color::DarkGray);

  f.render_widget(
    Paragraph::new(Span::styled(
      " planner ",
      Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD),
    ))
    .style(bar),
    cols[0],
  );

  let titles: Vec<Line> = Tab::ALL
    .iter()
    .enumerate()
    .map(|(i, t)| Line::from(format!("{} {}", i + 1, t.title())))
    .collect();
  f.render_widget(
    Tabs::new(titles)
      .select(app.tab.index())
      .style(bar.fg(Color::Gray))
      .highlight_style(
        Style::default()
          .fg(Color::Black)
          .bg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      ),
    cols[1],
  );

  f.render_widget(
    Paragraph::new(Span::styled(format!("{date} "), Style::default().fg(Color::Gray)))
      .style(bar),
    cols[2],
  );
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = match (&app.mode, app.tab) {
    (Mode::Dialog(_), _) => (
      "EDIT",
      "Tab/↑↓ field  ←→ change  Enter save  Esc cancel",
    ),
    (Mode::ConfirmDelete(_), _) => ("DELETE", "y confirm  n cancel"),
    (Mode::Normal, Tab::Events) => (
      "EVENTS",
      "←→ day  H/L month  t today  a all dates  f type  jk move  n new  e edit  d delete  q quit",
    ),
    (Mode::Normal, Tab::Calendar) => (
      "CALENDAR",
      "←→ day  H/L month  t today  Enter show day  n new  q quit",
    ),
    (Mode::Normal, Tab::Templates) => ("TEMPLATES", "←→ choose  Enter use  q quit"),
    (Mode::Normal, Tab::Notifications) => ("REMINDERS", "jk scroll  q quit"),
    (Mode::Normal, Tab::Help) => ("HELP", "Tab next tab  q quit"),
  };

  let status = if app.status_msg.is_empty() {
    hints.to_string()
  } else {
    app.status_msg.clone()
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let hint_span = Span::styled(format!("  {status}"), dim());

  let line = Line::from(vec![mode_span, hint_span]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}
