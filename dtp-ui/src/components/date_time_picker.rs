//! The date picker: an input that opens a calendar overlay.

use super::{CalendarBody, CalendarHeader, PickerInput};
use crate::state::PickerState;
use crate::theme::{Theme, DATETIMEPICKER_CSS};
use dioxus::prelude::*;
use dtp_core::{CalendarDate, NavigationController, PickerConfig};

#[derive(Props, Clone, PartialEq)]
pub struct DateTimePickerProps {
    /// Locale, initial date, widths, input name and styling
    #[props(default)]
    pub config: PickerConfig,
    /// Element shown instead of the default text input
    pub custom_input: Option<Element>,
    /// Called with each newly selected date
    pub on_date_change: Option<EventHandler<CalendarDate>>,
    /// Attributes forwarded to the default text input; ignored with `custom_input`
    #[props(extends = GlobalAttributes, extends = input)]
    pub input_attributes: Vec<Attribute>,
}

/// Date picker with a day view and a month view.
///
/// Clicking the input toggles the overlay, clicking anywhere outside the
/// overlay closes it, and picking a day commits the date and closes it.
#[component]
pub fn DateTimePicker(props: DateTimePickerProps) -> Element {
    let initial = props.config.selected;
    let nav = use_signal(move || NavigationController::with_initial(initial));
    let mut state = use_context_provider(|| PickerState::new(nav));

    let locale = props.config.locale;
    let snapshot = state.snapshot();
    let theme = Theme::from_config(&props.config);
    let root_style = theme.css_variables(snapshot.view_mode);
    let on_date_change = props.on_date_change;

    let on_select = move |date: CalendarDate| {
        if let Some(changed) = state.select_date(date) {
            if let Some(handler) = on_date_change {
                handler.call(changed);
            }
        }
    };

    let input = match props.custom_input.clone() {
        Some(custom) => rsx! {
            div {
                class: "dtp-custom-input",
                onclick: move |_| state.nav.write().toggle_open(),
                {custom}
            }
        },
        None => rsx! {
            PickerInput {
                value: snapshot.selected_date.format_localized(locale),
                name: props.config.name.clone().unwrap_or_default(),
                is_open: snapshot.is_open,
                attributes: props.input_attributes.clone(),
            }
        },
    };

    rsx! {
        style { {DATETIMEPICKER_CSS} }
        div {
            class: "dtp-root",
            style: "{root_style}",
            {input}
            if snapshot.is_open {
                div {
                    class: "dtp-backdrop",
                    onclick: move |_| {
                        log::debug!("outside click, closing calendar");
                        state.nav.write().close();
                    },
                }
                div {
                    class: "dtp-calendar",
                    CalendarHeader { locale }
                    CalendarBody { locale, on_select }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dtp_core::Locale;

    #[test]
    fn test_input_attributes_reach_the_input() {
        let config = PickerConfig {
            selected: CalendarDate::from_ymd_opt(2024, 2, 15),
            name: Some("start-date".to_string()),
            ..Default::default()
        };
        let html = dioxus_ssr::render_element(rsx! {
            DateTimePicker {
                config,
                placeholder: "dd/mm/yyyy",
                id: "start",
            }
        });
        assert!(html.contains("placeholder=\"dd/mm/yyyy\""), "{html}");
        assert!(html.contains("id=\"start\""), "{html}");
        assert!(html.contains("name=\"start-date\""), "{html}");
        assert!(html.contains("value=\"15/03/2024\""), "{html}");
    }

    #[test]
    fn test_closed_picker_renders_no_calendar() {
        let config = PickerConfig {
            locale: Locale::Fr,
            ..Default::default()
        };
        let html = dioxus_ssr::render_element(rsx! {
            DateTimePicker { config }
        });
        assert!(html.contains("dtp-input"), "{html}");
        assert!(!html.contains("dtp-calendar"), "{html}");
    }
}
