use std::io::{self, Stderr};

use chrono::NaiveDate;
use crossterm::event::{read, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::draw::draw_picker;
use super::state::{DatePicker, PickerOutcome};

/// Restores the terminal even when the picker exits early.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(e) = execute!(io::stderr(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Full-screen start date picker drawn on stderr. `Ok(None)` means the user
/// cancelled.
pub fn pick_start_date(today: NaiveDate) -> io::Result<Option<NaiveDate>> {
    let _guard = TerminalGuard::enter()?;
    let mut terminal: Terminal<CrosstermBackend<Stderr>> = Terminal::new(CrosstermBackend::new(io::stderr()))?;
    terminal.clear()?;

    let mut picker = DatePicker::new(today);
    loop {
        terminal.draw(|f| draw_picker(f, &picker))?;

        let Event::Key(key_event) = read()? else {
            continue;
        };
        if key_event.kind != KeyEventKind::Press {
            continue;
        }
        match picker.handle_key(key_event) {
            PickerOutcome::Continue => {}
            PickerOutcome::Accept(date) => return Ok(Some(date)),
            PickerOutcome::Cancel => return Ok(None),
        }
    }
}
