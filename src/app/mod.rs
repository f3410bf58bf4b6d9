//! The attendance screen as a library.
//!
//! [`AttendanceApp`] holds what the screen shows and accepts the same
//! interactions a user would perform, either as method calls or as
//! serialized [`Action`] messages.

mod action;
mod gate;
mod state;
mod view;

pub use action::Action;
pub use gate::AdminGate;
pub use state::AttendanceApp;
pub use view::{
    CalendarCell, SalarySummaryView, THAI_MONTHS, calendar_cells, format_grouped, month_name,
    year_options,
};
