//! Core logic for the date picker widget.
//!
//! This crate provides:
//! - `calendar_date`: the `CalendarDate` value type
//! - `grid`: day-grid and month-grid generation
//! - `navigation`: the `NavigationController` state machine
//! - `locale`: static month/weekday name tables
//! - `style` / `config`: caller-supplied configuration, passed through to rendering

pub mod calendar_date;
pub mod config;
pub mod error;
pub mod grid;
pub mod locale;
pub mod navigation;
pub mod style;

pub use calendar_date::CalendarDate;
pub use config::PickerConfig;
pub use error::PickerError;
pub use grid::{compute_date_grid, compute_month_grid, days_in_month, DayCell};
pub use locale::{Locale, LocaleEntry};
pub use navigation::{MonthAnchor, NavigationController, NavigationState, ViewMode};
pub use style::{CalendarStyle, ColorStyles, CssLength, FontSizes};
