//! Key-driven tests for `App`, plus a render pass over every tab.

use chrono::{NaiveDate, Weekday};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use planner_core::{
  event::EventType,
  filter::TypeFilter,
  sample::sample_events,
  store::EventStore,
};
use planner_store_memory::MemoryStore;
use ratatui::{Terminal, backend::TestBackend};

use super::{App, FormField, Mode, Tab};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A session on 2025-12-20 holding the three sample events.
fn session() -> App {
  App::new(
    MemoryStore::with_events(sample_events(2025)),
    date(2025, 12, 20),
    Weekday::Mon,
  )
}

fn press(app: &mut App, code: KeyCode) -> bool {
  app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_str(app: &mut App, s: &str) {
  for c in s.chars() {
    press(app, KeyCode::Char(c));
  }
}

fn visible_titles(app: &App) -> Vec<String> {
  app.visible().iter().map(|e| e.title.clone()).collect()
}

// ─── Navigation & filters ─────────────────────────────────────────────────────

#[test]
fn starts_on_today_filtered_by_day() {
  let app = session();
  assert_eq!(app.tab, Tab::Events);
  assert_eq!(app.selected_date(), Some(date(2025, 12, 20)));
  assert_eq!(visible_titles(&app), ["Team meeting"]);
}

#[test]
fn moving_the_day_changes_the_visible_events() {
  let mut app = session();
  press(&mut app, KeyCode::Char('l'));
  press(&mut app, KeyCode::Right);
  assert_eq!(app.calendar_cursor, date(2025, 12, 22));
  assert_eq!(visible_titles(&app), ["Project presentation"]);

  press(&mut app, KeyCode::Char('t'));
  assert_eq!(app.calendar_cursor, date(2025, 12, 20));

  press(&mut app, KeyCode::Char('H'));
  assert_eq!(app.calendar_cursor, date(2025, 11, 20));
  assert!(app.visible().is_empty());
}

#[test]
fn date_toggle_and_type_filter_combine() {
  let mut app = session();
  press(&mut app, KeyCode::Char('a'));
  assert_eq!(app.selected_date(), None);
  assert_eq!(app.visible().len(), 3);

  press(&mut app, KeyCode::Char('f'));
  assert_eq!(app.type_filter, TypeFilter::Only(EventType::Meeting));
  assert_eq!(visible_titles(&app), ["Team meeting"]);

  press(&mut app, KeyCode::Char('f'));
  press(&mut app, KeyCode::Char('f'));
  assert_eq!(app.type_filter, TypeFilter::Only(EventType::Business));
  assert_eq!(visible_titles(&app), ["Project presentation"]);

  press(&mut app, KeyCode::Char('f'));
  assert_eq!(app.type_filter, TypeFilter::All);
}

#[test]
fn tabs_switch_by_number_and_cycle() {
  let mut app = session();
  press(&mut app, KeyCode::Char('4'));
  assert_eq!(app.tab, Tab::Notifications);
  press(&mut app, KeyCode::Tab);
  assert_eq!(app.tab, Tab::Help);
  press(&mut app, KeyCode::Tab);
  assert_eq!(app.tab, Tab::Events);
  press(&mut app, KeyCode::BackTab);
  assert_eq!(app.tab, Tab::Help);
}

#[test]
fn calendar_enter_shows_the_day_on_the_events_tab() {
  let mut app = session();
  press(&mut app, KeyCode::Char('a'));
  press(&mut app, KeyCode::Char('2'));
  for _ in 0..5 {
    press(&mut app, KeyCode::Right);
  }
  press(&mut app, KeyCode::Enter);
  assert_eq!(app.tab, Tab::Events);
  assert_eq!(app.selected_date(), Some(date(2025, 12, 25)));
  assert_eq!(visible_titles(&app), ["Anna's birthday"]);
}

#[test]
fn quit_keys_stop_the_loop() {
  let mut app = session();
  assert!(!press(&mut app, KeyCode::Char('q')));

  let mut in_dialog = session();
  press(&mut in_dialog, KeyCode::Char('n'));
  let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
  assert!(!in_dialog.handle_key(ctrl_c));
}

// ─── Create / edit / delete ───────────────────────────────────────────────────

#[test]
fn dialog_creates_an_event_on_the_selected_day() {
  let mut app = session();
  press(&mut app, KeyCode::Char('n'));
  type_str(&mut app, "Standup");
  // Title → Type → Date → Time
  for _ in 0..3 {
    press(&mut app, KeyCode::Tab);
  }
  type_str(&mut app, "09:00");
  press(&mut app, KeyCode::Enter);

  assert!(matches!(app.mode, Mode::Normal));
  assert_eq!(app.status_msg, "Event created");
  assert_eq!(app.store.len(), 4);

  let created = &app.store.list()[3];
  assert_eq!(created.title, "Standup");
  assert_eq!(created.time, "09:00");
  assert_eq!(created.date, date(2025, 12, 20));
  assert_eq!(visible_titles(&app), ["Team meeting", "Standup"]);
}

#[test]
fn blank_submit_keeps_the_dialog_open() {
  let mut app = session();
  press(&mut app, KeyCode::Char('n'));
  press(&mut app, KeyCode::Enter);

  assert!(matches!(app.mode, Mode::Dialog(_)));
  assert_eq!(app.status_msg, "Error: missing required field(s): title, time");
  assert_eq!(app.store.len(), 3);

  press(&mut app, KeyCode::Esc);
  assert!(matches!(app.mode, Mode::Normal));
}

#[test]
fn modifier_chords_do_not_type_into_the_dialog() {
  let mut app = session();
  press(&mut app, KeyCode::Char('n'));
  type_str(&mut app, "Lunch");
  app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
  app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
  app.handle_key(KeyEvent::new(KeyCode::Char('!'), KeyModifiers::SHIFT));

  let Mode::Dialog(dialog) = &app.mode else {
    panic!("dialog should be open");
  };
  assert_eq!(dialog.draft.title, "Lunch!");
}

#[test]
fn dialog_cycles_type_and_date() {
  let mut app = session();
  press(&mut app, KeyCode::Char('n'));
  press(&mut app, KeyCode::Down);
  press(&mut app, KeyCode::Right);
  press(&mut app, KeyCode::Down);
  press(&mut app, KeyCode::Right);

  let Mode::Dialog(dialog) = &app.mode else {
    panic!("dialog should be open");
  };
  assert_eq!(dialog.focus, FormField::Date);
  assert_eq!(dialog.draft.kind, EventType::Party);
  assert_eq!(dialog.date, Some(date(2025, 12, 21)));
}

#[test]
fn editing_keeps_position_and_date() {
  let mut app = session();
  let id = app.cursor_event().unwrap().id;

  press(&mut app, KeyCode::Char('e'));
  type_str(&mut app, " (moved)");
  press(&mut app, KeyCode::Enter);

  assert_eq!(app.status_msg, "Event updated");
  let first = &app.store.list()[0];
  assert_eq!(first.id, id);
  assert_eq!(first.title, "Team meeting (moved)");
  assert_eq!(first.date, date(2025, 12, 20));
  assert_eq!(app.store.len(), 3);
}

#[test]
fn delete_asks_for_confirmation() {
  let mut app = session();

  press(&mut app, KeyCode::Char('d'));
  assert!(matches!(app.mode, Mode::ConfirmDelete(_)));
  press(&mut app, KeyCode::Char('n'));
  assert_eq!(app.store.len(), 3);

  press(&mut app, KeyCode::Char('d'));
  press(&mut app, KeyCode::Char('y'));
  assert_eq!(app.store.len(), 2);
  assert_eq!(app.status_msg, "Event deleted: Team meeting");
  assert!(app.visible().is_empty());
  assert_eq!(app.list_cursor, 0);
}

#[test]
fn template_prefills_the_dialog() {
  let mut app = session();
  press(&mut app, KeyCode::Char('3'));
  press(&mut app, KeyCode::Char('l'));
  press(&mut app, KeyCode::Enter);

  let Mode::Dialog(dialog) = &app.mode else {
    panic!("dialog should be open");
  };
  assert_eq!(dialog.editing, None);
  assert_eq!(dialog.draft.kind, EventType::Party);
  assert_eq!(dialog.draft.title, "Party");
}

#[test]
fn month_offset_respects_week_start() {
  let mut app = session();
  // 2025-12-01 is a Monday.
  assert_eq!(app.month_offset(date(2025, 12, 20)), 0);
  app.week_start = Weekday::Sun;
  assert_eq!(app.month_offset(date(2025, 12, 20)), 1);
}

// ─── Rendering ────────────────────────────────────────────────────────────────

fn render(app: &App) -> String {
  let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
  terminal.draw(|f| crate::ui::draw(f, app)).unwrap();
  terminal
    .backend()
    .buffer()
    .content()
    .iter()
    .map(|cell| cell.symbol())
    .collect()
}

#[test]
fn every_tab_renders() {
  let mut app = session();
  for tab in Tab::ALL {
    app.tab = tab;
    let screen = render(&app);
    assert!(screen.contains(tab.title()), "tab bar missing on {tab:?}");
  }

  app.tab = Tab::Calendar;
  assert!(render(&app).contains("December 2025"));
  app.tab = Tab::Notifications;
  assert!(render(&app).contains("2 hours"));
}

#[test]
fn calendar_and_notifications_list_every_stored_event() {
  let mut app = session();
  for tab in [Tab::Calendar, Tab::Notifications] {
    app.tab = tab;
    let screen = render(&app);
    for event in app.store.list() {
      assert!(screen.contains(&event.title), "{} missing on {tab:?}", event.title);
    }
  }
}

#[test]
fn overlays_render_over_the_body() {
  let mut app = session();
  press(&mut app, KeyCode::Char('n'));
  assert!(render(&app).contains("New event"));

  press(&mut app, KeyCode::Esc);
  press(&mut app, KeyCode::Char('d'));
  assert!(render(&app).contains("Delete event?"));
}
