//! Navigation state machine for one picker instance.
//!
//! `NavigationController` owns the `NavigationState` and is the only place
//! it changes. The host calls an operation in response to a click, then
//! regenerates the grid from the new state.

use crate::calendar_date::CalendarDate;
use crate::grid::{compute_date_grid, compute_month_grid, normalize_month, DayCell};
use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which grid the overlay shows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Days of the displayed month
    #[default]
    Date,
    /// Months of the displayed year
    Month,
}

/// A (year, month) pair with the month kept in [0, 11].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthAnchor {
    year: i32,
    month0: u32,
}

impl MonthAnchor {
    /// Build an anchor, rolling out-of-range months into the adjacent years.
    pub fn new(year: i32, month: i32) -> MonthAnchor {
        let (year, month0) = normalize_month(year, month);
        MonthAnchor { year, month0 }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month0(&self) -> u32 {
        self.month0
    }

    /// Move by `delta` months, carrying into the year. The year saturates
    /// at the ends of the `i32` range.
    pub fn shifted(self, delta: i32) -> MonthAnchor {
        MonthAnchor::new(self.year, (self.month0 as i32).saturating_add(delta))
    }
}

impl From<CalendarDate> for MonthAnchor {
    fn from(value: CalendarDate) -> Self {
        MonthAnchor {
            year: value.year(),
            month0: value.month0(),
        }
    }
}

/// Snapshot of everything the overlay renders from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    /// Month shown in date view
    pub displayed_month: MonthAnchor,
    /// Year shown in month view
    pub displayed_year: i32,
    pub selected_date: CalendarDate,
    pub view_mode: ViewMode,
    pub is_open: bool,
}

impl NavigationState {
    /// Closed picker in date view, anchored on `selected`.
    pub fn new(selected: CalendarDate) -> NavigationState {
        NavigationState {
            displayed_month: selected.into(),
            displayed_year: selected.year(),
            selected_date: selected,
            view_mode: ViewMode::Date,
            is_open: false,
        }
    }
}

type DateChangeListener = Box<dyn FnMut(CalendarDate)>;

/// Owns the navigation state and applies click-driven transitions.
pub struct NavigationController {
    state: NavigationState,
    on_date_change: Option<DateChangeListener>,
}

impl NavigationController {
    pub fn new(selected: CalendarDate) -> NavigationController {
        NavigationController {
            state: NavigationState::new(selected),
            on_date_change: None,
        }
    }

    /// Controller for the given initial selection, or today when None.
    pub fn with_initial(selected: Option<CalendarDate>) -> NavigationController {
        NavigationController::new(selected.unwrap_or_else(CalendarDate::today))
    }

    /// Register the listener called with each newly selected date.
    pub fn with_on_date_change<F>(mut self, listener: F) -> NavigationController
    where
        F: FnMut(CalendarDate) + 'static,
    {
        self.on_date_change = Some(Box::new(listener));
        self
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn open(&mut self) {
        self.state.is_open = true;
    }

    pub fn close(&mut self) {
        self.state.is_open = false;
    }

    /// Input click: open when closed, close when open.
    pub fn toggle_open(&mut self) {
        self.state.is_open = !self.state.is_open;
    }

    pub fn toggle_view_mode(&mut self, mode: ViewMode) {
        log::debug!("view mode {:?} -> {:?}", self.state.view_mode, mode);
        self.state.view_mode = mode;
    }

    pub fn prev_month(&mut self) {
        self.shift_month(-1);
    }

    pub fn next_month(&mut self) {
        self.shift_month(1);
    }

    fn shift_month(&mut self, delta: i32) {
        self.state.displayed_month = self.state.displayed_month.shifted(delta);
        log::debug!(
            "displayed month {}-{:02}",
            self.state.displayed_month.year(),
            self.state.displayed_month.month0() + 1
        );
    }

    pub fn prev_year(&mut self) {
        self.state.displayed_year = self.state.displayed_year.saturating_sub(1);
        log::debug!("displayed year {}", self.state.displayed_year);
    }

    pub fn next_year(&mut self) {
        self.state.displayed_year = self.state.displayed_year.saturating_add(1);
        log::debug!("displayed year {}", self.state.displayed_year);
    }

    /// Commit a date: select it, re-anchor the day grid on its month and
    /// close the overlay.
    ///
    /// Returns the date when it differs from the previous selection; the
    /// registered listener is called in the same case.
    pub fn select_date(&mut self, date: CalendarDate) -> Option<CalendarDate> {
        let previous = self.state.selected_date;
        self.state.selected_date = date;
        self.state.displayed_month = date.into();
        self.state.is_open = false;

        if previous == date {
            return None;
        }
        log::info!("selected date {date}");
        if let Some(listener) = self.on_date_change.as_mut() {
            listener(date);
        }
        Some(date)
    }

    /// Jump the day grid to `month0` of the displayed year and switch back
    /// to date view. The selection and the overlay are left alone.
    ///
    /// # Panics
    ///
    /// Panics if `month0` is not in [0, 11].
    pub fn select_month(&mut self, month0: u32) {
        assert!(month0 < 12, "month index out of range: {month0}");
        self.state.displayed_month = MonthAnchor::new(self.state.displayed_year, month0 as i32);
        self.state.view_mode = ViewMode::Date;
        log::debug!("selected month {}-{:02}", self.state.displayed_year, month0 + 1);
    }

    /// True when `date` is the selected calendar day.
    pub fn is_selected(&self, date: &CalendarDate) -> bool {
        self.state.selected_date == *date
    }

    /// True when month `month0` is the month currently shown in date view.
    pub fn is_displayed_month(&self, month0: u32) -> bool {
        self.state.displayed_month.month0() == month0
    }

    /// Day grid for the displayed month.
    pub fn date_grid(&self) -> Vec<Vec<DayCell>> {
        let anchor = self.state.displayed_month;
        compute_date_grid(anchor.year(), anchor.month0() as i32)
    }

    /// Month grid labelled in `locale`.
    pub fn month_grid(&self, locale: Locale) -> Vec<Vec<&'static str>> {
        compute_month_grid(&locale.entry().months_short)
    }

    /// Header text: "<month> <year>" in date view, the year in month view.
    pub fn header_label(&self, locale: Locale) -> String {
        match self.state.view_mode {
            ViewMode::Date => {
                let anchor = self.state.displayed_month;
                format!(
                    "{} {}",
                    locale.entry().months[anchor.month0() as usize],
                    anchor.year()
                )
            }
            ViewMode::Month => self.state.displayed_year.to_string(),
        }
    }
}

impl fmt::Debug for NavigationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationController")
            .field("state", &self.state)
            .field("has_listener", &self.on_date_change.is_some())
            .finish()
    }
}
