//! Caller-supplied styling, carried untouched to the rendering layer.
//!
//! Every field is optional; fallbacks are applied where the CSS is built.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A CSS length given either as a bare number of pixels or as a raw CSS
/// string such as "50%" or "12rem".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CssLength {
    Px(f64),
    Raw(String),
}

impl CssLength {
    pub fn to_css(&self) -> String {
        match self {
            CssLength::Px(px) => format!("{px}px"),
            CssLength::Raw(raw) => raw.clone(),
        }
    }
}

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl From<f64> for CssLength {
    fn from(value: f64) -> Self {
        CssLength::Px(value)
    }
}

impl From<&str> for CssLength {
    fn from(value: &str) -> Self {
        CssLength::Raw(value.to_string())
    }
}

/// Color overrides for the calendar.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorStyles {
    /// Main text color (days of the displayed month)
    pub text_primary: Option<String>,
    /// Days borrowed from neighbouring months
    pub text_secondary: Option<String>,
    /// Text color of a hovered day
    pub text_hover: Option<String>,
    pub text_disabled: Option<String>,
    /// Navigation buttons and borders
    pub primary: Option<String>,
    pub primary_hover: Option<String>,
    /// Background of the selected day or month
    pub selected: Option<String>,
    pub background: Option<String>,
}

/// Font size overrides for the calendar.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontSizes {
    /// Day and month cells
    pub cell: Option<CssLength>,
    /// Header label and input text
    pub date: Option<CssLength>,
    /// Weekday column headings
    pub day_labels: Option<CssLength>,
}

/// Style config: colors and font sizes for the calendar overlay.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalendarStyle {
    pub colors: ColorStyles,
    pub font_sizes: FontSizes,
}

#[cfg(test)]
mod tests {
    use super::{CalendarStyle, CssLength};

    #[test]
    fn test_css_length() {
        assert_eq!(CssLength::Px(244.0).to_css(), "244px");
        assert_eq!(CssLength::Px(12.5).to_css(), "12.5px");
        assert_eq!(CssLength::from("50%").to_css(), "50%");
    }

    #[test]
    fn test_deserialize_partial_style() {
        let json = r##"{
            "colors": { "textPrimary": "#222", "selected": "tomato" },
            "fontSizes": { "cell": 14, "dayLabels": "0.8rem" }
        }"##;
        let style: CalendarStyle = serde_json::from_str(json).unwrap();
        assert_eq!(style.colors.text_primary.as_deref(), Some("#222"));
        assert_eq!(style.colors.selected.as_deref(), Some("tomato"));
        assert_eq!(style.colors.background, None);
        assert_eq!(style.font_sizes.cell, Some(CssLength::Px(14.0)));
        assert_eq!(style.font_sizes.day_labels, Some(CssLength::from("0.8rem")));
        assert_eq!(style.font_sizes.date, None);
    }

    #[test]
    fn test_empty_style() {
        let style: CalendarStyle = serde_json::from_str("{}").unwrap();
        assert_eq!(style, CalendarStyle::default());
    }
}
