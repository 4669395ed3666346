//! Picker state managed via Dioxus context.
//!
//! `DateTimePicker` owns the navigation controller in a signal and provides
//! `PickerState` with `use_context_provider`. The header and body retrieve it
//! with `use_context::<PickerState>()`.

use dioxus::prelude::*;
use dtp_core::{CalendarDate, NavigationController, NavigationState};

/// Shared state of one picker instance.
#[derive(Clone, Copy)]
pub struct PickerState {
    /// Navigation controller; every click goes through it
    pub nav: Signal<NavigationController>,
}

impl PickerState {
    pub fn new(nav: Signal<NavigationController>) -> Self {
        Self { nav }
    }

    /// Current navigation snapshot. Subscribes the calling component.
    pub fn snapshot(&self) -> NavigationState {
        self.nav.read().state()
    }

    /// Commit a date and return it when the selection changed.
    pub fn select_date(&mut self, date: CalendarDate) -> Option<CalendarDate> {
        self.nav.write().select_date(date)
    }
}
