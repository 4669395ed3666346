//! Calendar body: the day table in date view, the month table in month view.

use crate::state::PickerState;
use crate::theme::{day_class, month_class};
use dioxus::prelude::*;
use dtp_core::grid::{compute_date_grid, compute_month_grid, month_index};
use dtp_core::{CalendarDate, Locale, ViewMode};

#[derive(Props, Clone, PartialEq)]
pub struct CalendarBodyProps {
    pub locale: Locale,
    /// Called with the date of a clicked day cell
    pub on_select: EventHandler<CalendarDate>,
}

/// Grid of days or months for the displayed anchor.
#[component]
pub fn CalendarBody(props: CalendarBodyProps) -> Element {
    let mut state = use_context::<PickerState>();
    let snapshot = state.snapshot();
    let entry = props.locale.entry();
    let on_select = props.on_select;

    match snapshot.view_mode {
        ViewMode::Date => {
            let anchor = snapshot.displayed_month;
            let weeks = compute_date_grid(anchor.year(), anchor.month0() as i32);
            let selected = snapshot.selected_date;

            rsx! {
                div {
                    class: "dtp-body",
                    table {
                        class: "dtp-days",
                        thead {
                            tr {
                                for (index, day) in entry.day_of_week_short.iter().enumerate() {
                                    th { key: "{index}", "{day}" }
                                }
                            }
                        }
                        tbody {
                            for (row_index, week) in weeks.into_iter().enumerate() {
                                tr {
                                    key: "{row_index}",
                                    for cell in week {
                                        td {
                                            key: "{cell.date}",
                                            class: day_class(&cell, &selected),
                                            onclick: move |_| on_select.call(cell.date),
                                            "{cell.date.day()}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        ViewMode::Month => {
            let rows = compute_month_grid(&entry.months_short);
            let displayed: [bool; 12] =
                std::array::from_fn(|month0| state.nav.read().is_displayed_month(month0 as u32));

            rsx! {
                div {
                    class: "dtp-body",
                    table {
                        class: "dtp-months",
                        tbody {
                            for (row_index, row) in rows.into_iter().enumerate() {
                                tr {
                                    key: "{row_index}",
                                    for (column, label) in row.into_iter().enumerate() {
                                        td {
                                            key: "{column}",
                                            class: month_class(displayed[month_index(row_index, column) as usize]),
                                            onclick: move |_| {
                                                state.nav.write().select_month(month_index(row_index, column));
                                            },
                                            "{label}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
