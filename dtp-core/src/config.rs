//! Picker configuration supplied by the host page.

use crate::calendar_date::CalendarDate;
use crate::locale::Locale;
use crate::style::{CalendarStyle, CssLength};
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Everything a host can configure on one picker instance.
///
/// Keys are camelCase in JSON and every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PickerConfig {
    pub locale: Locale,
    /// Initially selected date; today when absent
    pub selected: Option<CalendarDate>,
    /// Width of the input field
    pub width: Option<CssLength>,
    /// Width of the calendar overlay
    pub calendar_width: Option<CssLength>,
    /// `name` attribute of the input element
    pub name: Option<String>,
    pub calendar: CalendarStyle,
}

impl PickerConfig {
    /// Parse a JSON configuration object.
    pub fn from_json(json: &str) -> anyhow::Result<PickerConfig> {
        let config: PickerConfig =
            serde_json::from_str(json).context("Failed to parse picker configuration")?;
        log::debug!("loaded picker config for locale {}", config.locale);
        Ok(config)
    }

    /// The initial selection, falling back to today.
    pub fn initial_date(&self) -> CalendarDate {
        self.selected.unwrap_or_else(CalendarDate::today)
    }
}
