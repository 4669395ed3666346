//! Date picker demo
//!
//! Mounts two pickers: an English one configured from the embedded
//! `demo_config.json`, and a French one opened from a custom button.
//! The page echoes the last date picked in either.

use dioxus::prelude::*;
use dtp_core::{CalendarDate, Locale, PickerConfig};
use dtp_ui::DateTimePicker;

// Embed the demo configuration at compile time.
const DEMO_CONFIG: &str = include_str!("../assets/demo_config.json");

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("datetimepicker-root"))
        .launch(App);
}

/// Parse the embedded configuration, falling back to defaults.
fn load_config() -> PickerConfig {
    match PickerConfig::from_json(DEMO_CONFIG) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{err:#}; using default picker configuration");
            PickerConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);
    let french = PickerConfig {
        locale: Locale::Fr,
        ..config.clone()
    };
    let mut picked = use_signal(|| config.initial_date());

    rsx! {
        div {
            style: "font-family: sans-serif; padding: 20px; display: flex; flex-direction: column; gap: 80px;",
            div {
                h3 { style: "margin: 0 0 8px 0; font-size: 16px;", "Date" }
                DateTimePicker {
                    config: config.clone(),
                    on_date_change: move |date: CalendarDate| picked.set(date),
                    id: "start-date",
                    placeholder: "dd/mm/yyyy",
                }
            }
            div {
                h3 { style: "margin: 0 0 8px 0; font-size: 16px;", "Date (fr)" }
                DateTimePicker {
                    config: french,
                    custom_input: rsx! {
                        button { r#type: "button", "Choisir une date" }
                    },
                    on_date_change: move |date: CalendarDate| picked.set(date),
                }
            }
            p {
                style: "margin: 0; font-size: 12px; color: #666;",
                "Selected: {picked}"
            }
        }
    }
}
