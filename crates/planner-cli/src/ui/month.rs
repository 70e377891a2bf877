//! Month grid shared by the events and calendar tabs.

use chrono::{Datelike, NaiveDate, Weekday};
use planner_core::{filter::days_with_events, store::EventStore};
use ratatui::{
  style::{Color, Modifier, Style},
  text::{Line, Span},
};

use crate::app::App;

/// Render the month containing `app.calendar_cursor` as lines of text.
///
/// The cursor day is highlighted, today is underlined, and days carrying
/// events are bold.
pub fn lines(app: &App) -> Vec<Line<'static>> {
  let cursor = app.calendar_cursor;
  let marked = days_with_events(app.store.list(), cursor.year(), cursor.month());

  let mut out = vec![
    Line::from(Span::styled(
      format!("{:^20}", cursor.format("%B %Y").to_string()),
      Style::default().add_modifier(Modifier::BOLD),
    )),
    weekday_header(app.week_start),
  ];

  let offset = app.month_offset(cursor);
  let mut spans: Vec<Span<'static>> = (0..offset).map(|_| Span::raw("   ")).collect();

  for day in 1..=days_in_month(cursor) {
    let mut style = Style::default();
    if marked.contains(&day) {
      style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
    }
    if NaiveDate::from_ymd_opt(cursor.year(), cursor.month(), day) == Some(app.today) {
      style = style.add_modifier(Modifier::UNDERLINED);
    }
    if day == cursor.day() {
      style = style.fg(Color::Black).bg(Color::Cyan);
    }
    spans.push(Span::styled(format!("{day:>2}"), style));
    spans.push(Span::raw(" "));

    if (offset + day) % 7 == 0 {
      out.push(Line::from(std::mem::take(&mut spans)));
    }
  }
  if !spans.is_empty() {
    out.push(Line::from(spans));
  }
  out
}

fn weekday_header(start: Weekday) -> Line<'static> {
  let mut day = start;
  let mut label = String::new();
  for _ in 0..7 {
    let name = day.to_string();
    label.push_str(&name[..2]);
    label.push(' ');
    day = day.succ();
  }
  Line::from(Span::styled(label, Style::default().fg(Color::DarkGray)))
}

pub fn days_in_month(date: NaiveDate) -> u32 {
  let (y, m) = if date.month() == 12 {
    (date.year() + 1, 1)
  } else {
    (date.year(), date.month() + 1)
  };
  NaiveDate::from_ymd_opt(y, m, 1)
    .and_then(|next| next.pred_opt())
    .map_or(31, |last| last.day())
}
