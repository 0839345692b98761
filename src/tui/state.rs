use chrono::{Datelike, Days, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

const FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    Continue,
    Accept(NaiveDate),
    Cancel,
}

/// Editable start date, never allowed past `today`.
#[derive(Debug, Clone)]
pub struct DatePicker {
    today: NaiveDate,
    current: NaiveDate,
    input: String,
    message: Option<String>,
}

impl DatePicker {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            current: today,
            input: today.format(FORMAT).to_string(),
            message: None,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn parsed(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.input.trim(), FORMAT).ok()
    }

    /// e.g. `Monday 03 February 2025 (week 6, 2025)`
    pub fn preview(&self) -> Option<String> {
        let date = self.parsed()?;
        let week = date.iso_week();
        Some(format!(
            "{} (week {}, {})",
            date.format("%A %d %B %Y"),
            week.week(),
            week.year()
        ))
    }

    fn set_current(&mut self, date: NaiveDate) {
        self.current = date.min(self.today);
        self.input = self.current.format(FORMAT).to_string();
        self.message = None;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PickerOutcome {
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        let base = self.parsed().unwrap_or(self.current);

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return PickerOutcome::Cancel;
            }
            KeyCode::Esc => self.set_current(self.today),
            KeyCode::Enter => return self.confirm(),
            KeyCode::Up => {
                let step = Days::new(if shift { 7 } else { 1 });
                if let Some(prev) = base.checked_sub_days(step) {
                    self.set_current(prev);
                }
            }
            KeyCode::Down => {
                let step = Days::new(if shift { 7 } else { 1 });
                match base.checked_add_days(step) {
                    // A single day forward past today is ignored, a week clamps.
                    Some(next) if next > self.today && !shift => {}
                    Some(next) => self.set_current(next),
                    None => {}
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.message = None;
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
                self.message = None;
            }
            _ => {}
        }
        PickerOutcome::Continue
    }

    fn confirm(&mut self) -> PickerOutcome {
        let text = self.input.trim().to_string();
        match NaiveDate::parse_from_str(&text, FORMAT) {
            Err(_) => {
                self.message = Some(format!("🤨 \"{text}\" is not a valid date. Try YYYY-MM-DD."));
                PickerOutcome::Continue
            }
            Ok(date) if date > self.today => {
                self.message = Some("🚀 Time travel detected! Pick today or earlier 😅".to_string());
                PickerOutcome::Continue
            }
            Ok(date) => PickerOutcome::Accept(date),
        }
    }
}
