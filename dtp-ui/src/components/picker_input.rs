//! Read-only text field showing the selected date.

use crate::state::PickerState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PickerInputProps {
    /// Selected date formatted for the locale
    pub value: String,
    /// `name` attribute of the input
    #[props(default = String::new())]
    pub name: String,
    /// Whether the calendar overlay is showing
    pub is_open: bool,
    /// Extra attributes spread onto the `<input>` (placeholder, id, aria-*)
    #[props(default)]
    pub attributes: Vec<Attribute>,
}

/// Default input; clicking it toggles the calendar overlay.
#[component]
pub fn PickerInput(props: PickerInputProps) -> Element {
    let mut state = use_context::<PickerState>();
    let class = if props.is_open {
        "dtp-input open"
    } else {
        "dtp-input"
    };

    rsx! {
        input {
            r#type: "text",
            class: class,
            name: "{props.name}",
            value: "{props.value}",
            readonly: true,
            onclick: move |_| state.nav.write().toggle_open(),
            ..props.attributes,
        }
    }
}
