pub mod draw;
pub mod run;
pub mod state;

pub use run::pick_start_date;
pub use state::{DatePicker, PickerOutcome};

use crate::config::StartDateSource;
use crate::error::{Result, WorklogError};
use chrono::NaiveDate;

/// [`StartDateSource`] backed by the full-screen picker.
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractivePrompt;

impl StartDateSource for InteractivePrompt {
    fn obtain_start_date(&self, today: NaiveDate) -> Result<NaiveDate> {
        pick_start_date(today)?.ok_or(WorklogError::Cancelled)
    }
}
