//! Calendar header: previous/next buttons around the month or year label.

use super::ArrowIcon;
use crate::state::PickerState;
use dioxus::prelude::*;
use dtp_core::{Locale, ViewMode};

/// Header of the calendar overlay.
///
/// In date view the buttons step by month and the label reads
/// "<month> <year>"; in month view they step by year. Clicking the label
/// switches to the other view.
#[component]
pub fn CalendarHeader(locale: Locale) -> Element {
    let mut state = use_context::<PickerState>();
    let view_mode = state.snapshot().view_mode;
    let label = state.nav.read().header_label(locale);

    let on_prev = move |_: MouseEvent| {
        let mut nav = state.nav.write();
        match view_mode {
            ViewMode::Date => nav.prev_month(),
            ViewMode::Month => nav.prev_year(),
        }
    };

    let on_next = move |_: MouseEvent| {
        let mut nav = state.nav.write();
        match view_mode {
            ViewMode::Date => nav.next_month(),
            ViewMode::Month => nav.next_year(),
        }
    };

    let on_label = move |_: MouseEvent| {
        let next_mode = match view_mode {
            ViewMode::Date => ViewMode::Month,
            ViewMode::Month => ViewMode::Date,
        };
        state.nav.write().toggle_view_mode(next_mode);
    };

    rsx! {
        div {
            class: "dtp-header",
            div {
                class: "dtp-nav left",
                tabindex: "0",
                onclick: on_prev,
                ArrowIcon {}
            }
            div {
                class: "dtp-current",
                onclick: on_label,
                "{label}"
            }
            div {
                class: "dtp-nav right",
                tabindex: "0",
                onclick: on_next,
                ArrowIcon {}
            }
        }
    }
}
