//! Application state machine and key dispatcher.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use planner_core::{
  Error,
  draft::{Draft, DraftField},
  event::Event,
  filter::{TypeFilter, visible_events},
  store::EventStore,
  template::{TEMPLATES, Template},
};
use planner_store_memory::MemoryStore;
use uuid::Uuid;

// ─── Tabs ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
  Events,
  Calendar,
  Templates,
  Notifications,
  Help,
}

impl Tab {
  pub const ALL: [Tab; 5] = [
    Tab::Events,
    Tab::Calendar,
    Tab::Templates,
    Tab::Notifications,
    Tab::Help,
  ];

  pub fn title(self) -> &'static str {
    match self {
      Tab::Events => "Events",
      Tab::Calendar => "Calendar",
      Tab::Templates => "Templates",
      Tab::Notifications => "Notifications",
      Tab::Help => "Help",
    }
  }

  pub fn index(self) -> usize {
    Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
  }

  fn offset(self, by: isize) -> Self {
    let len = Self::ALL.len() as isize;
    Self::ALL[(self.index() as isize + by).rem_euclid(len) as usize]
  }
}

// ─── Dialog ───────────────────────────────────────────────────────────────────

/// Focusable rows of the event dialog, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
  Title,
  Kind,
  Date,
  Time,
  Location,
  Description,
  Notification,
}

impl FormField {
  pub const ALL: [FormField; 7] = [
    FormField::Title,
    FormField::Kind,
    FormField::Date,
    FormField::Time,
    FormField::Location,
    FormField::Description,
    FormField::Notification,
  ];

  pub fn label(self) -> &'static str {
    match self {
      FormField::Title => "Title",
      FormField::Kind => "Type",
      FormField::Date => "Date",
      FormField::Time => "Time",
      FormField::Location => "Location",
      FormField::Description => "Description",
      FormField::Notification => "Remind",
    }
  }

  /// The draft text field behind this row, if it is free text.
  pub fn text(self) -> Option<DraftField> {
    match self {
      FormField::Title => Some(DraftField::Title),
      FormField::Time => Some(DraftField::Time),
      FormField::Location => Some(DraftField::Location),
      FormField::Description => Some(DraftField::Description),
      FormField::Kind | FormField::Date | FormField::Notification => None,
    }
  }

  fn offset(self, by: isize) -> Self {
    let len = Self::ALL.len() as isize;
    let pos = Self::ALL.iter().position(|f| *f == self).unwrap_or(0) as isize;
    Self::ALL[(pos + by).rem_euclid(len) as usize]
  }
}

/// The open create/edit dialog and its staged draft.
#[derive(Debug, Clone)]
pub struct Dialog {
  /// `Some` when editing an existing event.
  pub editing: Option<Uuid>,
  pub draft:   Draft,
  /// Date the event is committed on; `None` means today (create) or
  /// unchanged (edit).
  pub date:    Option<NaiveDate>,
  pub focus:   FormField,
}

#[derive(Debug, Clone)]
pub enum Mode {
  Normal,
  Dialog(Dialog),
  ConfirmDelete(Uuid),
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state for one planner session.
pub struct App {
  pub tab:             Tab,
  pub mode:            Mode,
  pub store:           MemoryStore,
  /// The day highlighted in the calendar.
  pub calendar_cursor: NaiveDate,
  /// Whether the events list is restricted to `calendar_cursor`.
  pub date_filter:     bool,
  pub type_filter:     TypeFilter,
  /// Cursor within the visible events list.
  pub list_cursor:     usize,
  pub template_cursor: usize,
  /// Scroll offset on the notifications tab.
  pub notify_scroll:   usize,
  /// One-line status message shown in the status bar.
  pub status_msg:      String,
  pub week_start:      Weekday,
  pub today:           NaiveDate,
}

impl App {
  pub fn new(store: MemoryStore, today: NaiveDate, week_start: Weekday) -> Self {
    Self {
      tab: Tab::Events,
      mode: Mode::Normal,
      store,
      calendar_cursor: today,
      date_filter: true,
      type_filter: TypeFilter::All,
      list_cursor: 0,
      template_cursor: 0,
      notify_scroll: 0,
      status_msg: String::new(),
      week_start,
      today,
    }
  }

  // ── Derived views ─────────────────────────────────────────────────────────

  /// The date the events list is filtered by, if any.
  pub fn selected_date(&self) -> Option<NaiveDate> {
    self.date_filter.then_some(self.calendar_cursor)
  }

  /// Events passing the current date and type filters.
  pub fn visible(&self) -> Vec<&Event> {
    visible_events(self.store.list(), self.selected_date(), self.type_filter)
  }

  /// The event under the list cursor, if any.
  pub fn cursor_event(&self) -> Option<&Event> {
    self.visible().get(self.list_cursor).copied()
  }

  fn clamp_cursor(&mut self) {
    let len = self.visible().len();
    self.list_cursor = self.list_cursor.min(len.saturating_sub(1));
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub fn handle_key(&mut self, key: KeyEvent) -> bool {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return false;
    }

    match self.mode.clone() {
      Mode::Dialog(dialog) => {
        self.handle_dialog_key(dialog, key);
        true
      }
      Mode::ConfirmDelete(id) => {
        self.handle_confirm_key(id, key);
        true
      }
      Mode::Normal => self.handle_normal_key(key),
    }
  }

  fn handle_normal_key(&mut self, key: KeyEvent) -> bool {
    self.status_msg.clear();
    match key.code {
      KeyCode::Char('q') => return false,
      KeyCode::Tab => self.tab = self.tab.offset(1),
      KeyCode::BackTab => self.tab = self.tab.offset(-1),
      KeyCode::Char(c @ '1'..='5') => {
        let idx = c as usize - '1' as usize;
        self.tab = Tab::ALL[idx];
      }
      KeyCode::Char('n') => self.open_create(Draft::default()),
      _ => match self.tab {
        Tab::Events => self.handle_events_key(key),
        Tab::Calendar => self.handle_calendar_key(key),
        Tab::Templates => self.handle_templates_key(key),
        Tab::Notifications => self.handle_notifications_key(key),
        Tab::Help => {}
      },
    }
    true
  }

  /// Day navigation shared by the events and calendar tabs. Returns `true`
  /// if the key was consumed.
  fn handle_day_key(&mut self, key: KeyEvent) -> bool {
    let moved = match key.code {
      KeyCode::Left | KeyCode::Char('h') => self.calendar_cursor.checked_sub_days(Days::new(1)),
      KeyCode::Right | KeyCode::Char('l') => self.calendar_cursor.checked_add_days(Days::new(1)),
      KeyCode::Char('H') => self.calendar_cursor.checked_sub_months(Months::new(1)),
      KeyCode::Char('L') => self.calendar_cursor.checked_add_months(Months::new(1)),
      KeyCode::Char('t') => Some(self.today),
      _ => return false,
    };
    if let Some(day) = moved {
      self.calendar_cursor = day;
      self.list_cursor = 0;
    }
    true
  }

  fn handle_events_key(&mut self, key: KeyEvent) {
    if self.handle_day_key(key) {
      return;
    }
    match key.code {
      KeyCode::Down | KeyCode::Char('j') => {
        let len = self.visible().len();
        if self.list_cursor + 1 < len {
          self.list_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.list_cursor = self.list_cursor.saturating_sub(1);
      }
      KeyCode::Char('a') => {
        self.date_filter = !self.date_filter;
        self.list_cursor = 0;
      }
      KeyCode::Char('f') => {
        self.type_filter = self.type_filter.cycle();
        self.list_cursor = 0;
      }
      KeyCode::Enter | KeyCode::Char('e') => {
        if let Some(id) = self.cursor_event().map(|e| e.id) {
          self.open_edit(id);
        }
      }
      KeyCode::Char('d') | KeyCode::Delete => {
        if let Some(id) = self.cursor_event().map(|e| e.id) {
          self.mode = Mode::ConfirmDelete(id);
        }
      }
      _ => {}
    }
  }

  fn handle_calendar_key(&mut self, key: KeyEvent) {
    if self.handle_day_key(key) {
      return;
    }
    // Jump to the events list for the highlighted day.
    if key.code == KeyCode::Enter {
      self.date_filter = true;
      self.list_cursor = 0;
      self.tab = Tab::Events;
    }
  }

  fn handle_templates_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Down | KeyCode::Right | KeyCode::Char('j') | KeyCode::Char('l') => {
        self.template_cursor = (self.template_cursor + 1) % TEMPLATES.len();
      }
      KeyCode::Up | KeyCode::Left | KeyCode::Char('k') | KeyCode::Char('h') => {
        self.template_cursor = (self.template_cursor + TEMPLATES.len() - 1) % TEMPLATES.len();
      }
      KeyCode::Enter => {
        let template: &Template = &TEMPLATES[self.template_cursor];
        self.open_create(Draft::from_template(template));
      }
      _ => {}
    }
  }

  fn handle_notifications_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Down | KeyCode::Char('j') => {
        if self.notify_scroll + 1 < self.store.len() {
          self.notify_scroll += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.notify_scroll = self.notify_scroll.saturating_sub(1);
      }
      _ => {}
    }
  }

  fn handle_confirm_key(&mut self, id: Uuid, key: KeyEvent) {
    match key.code {
      KeyCode::Char('y') | KeyCode::Enter => {
        self.status_msg = match self.store.delete(id) {
          Ok(event) => format!("Event deleted: {}", event.title),
          Err(e) => format!("Error: {e}"),
        };
        self.mode = Mode::Normal;
        self.clamp_cursor();
      }
      KeyCode::Char('n') | KeyCode::Esc => self.mode = Mode::Normal,
      _ => {}
    }
  }

  fn handle_dialog_key(&mut self, mut dialog: Dialog, key: KeyEvent) {
    match key.code {
      KeyCode::Esc => {
        self.mode = Mode::Normal;
        return;
      }
      KeyCode::Enter => {
        self.submit(dialog);
        return;
      }
      KeyCode::Tab | KeyCode::Down => dialog.focus = dialog.focus.offset(1),
      KeyCode::BackTab | KeyCode::Up => dialog.focus = dialog.focus.offset(-1),
      KeyCode::Left | KeyCode::Right => {
        let forward = key.code == KeyCode::Right;
        match dialog.focus {
          FormField::Kind => dialog.draft.cycle_kind(forward),
          FormField::Notification => dialog.draft.cycle_notification(forward),
          FormField::Date => {
            let base = dialog.date.unwrap_or(self.today);
            let step = Days::new(1);
            let next = if forward {
              base.checked_add_days(step)
            } else {
              base.checked_sub_days(step)
            };
            dialog.date = next.or(Some(base));
          }
          _ => {}
        }
      }
      KeyCode::Backspace => {
        if let Some(field) = dialog.focus.text() {
          dialog.draft.field_mut(field).pop();
        }
      }
      KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {}
      KeyCode::Char(c) => {
        if let Some(field) = dialog.focus.text() {
          dialog.draft.field_mut(field).push(c);
        }
      }
      _ => {}
    }
    self.mode = Mode::Dialog(dialog);
  }

  // ── Transitions ───────────────────────────────────────────────────────────

  fn open_create(&mut self, draft: Draft) {
    self.mode = Mode::Dialog(Dialog {
      editing: None,
      draft,
      date: self.selected_date(),
      focus: FormField::Title,
    });
  }

  fn open_edit(&mut self, id: Uuid) {
    let Some(event) = self.store.get(id) else {
      return;
    };
    self.mode = Mode::Dialog(Dialog {
      editing: Some(id),
      draft:   Draft::from_event(event),
      date:    Some(event.date),
      focus:   FormField::Title,
    });
  }

  /// Commit the dialog's draft. On a validation failure the dialog stays
  /// open with the draft intact.
  fn submit(&mut self, dialog: Dialog) {
    let result = match dialog.editing {
      Some(id) => self.store.update(id, &dialog.draft, dialog.date),
      None => self.store.create(&dialog.draft, dialog.date),
    };

    match result {
      Ok(event) => {
        self.status_msg = if dialog.editing.is_some() {
          "Event updated".into()
        } else {
          "Event created".into()
        };
        self.calendar_cursor = event.date;
        self.mode = Mode::Normal;
        self.clamp_cursor();
      }
      Err(e @ Error::Validation { .. }) => {
        tracing::warn!(error = %e, "rejected event draft");
        self.status_msg = format!("Error: {e}");
        self.mode = Mode::Dialog(dialog);
      }
      Err(e) => {
        tracing::warn!(error = %e, "event submit failed");
        self.status_msg = format!("Error: {e}");
        self.mode = Mode::Normal;
        self.clamp_cursor();
      }
    }
  }

  /// First weekday column for `date`'s month grid, counted from
  /// `week_start`.
  pub fn month_offset(&self, date: NaiveDate) -> u32 {
    let first = date.with_day(1).unwrap_or(date);
    let from_monday = first.weekday().num_days_from_monday();
    let start = self.week_start.num_days_from_monday();
    (from_monday + 7 - start) % 7
  }
}

#[cfg(test)]
mod tests;
