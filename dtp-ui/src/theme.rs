//! Resolution of the style config into CSS.
//!
//! Each key of `CalendarStyle` falls back to the picker's stock look when
//! unset. The resolved values are exposed to the stylesheet as CSS custom
//! properties on the picker root, so hover rules keep working.

use dtp_core::{CalendarDate, CalendarStyle, CssLength, DayCell, PickerConfig, ViewMode};

/// Stylesheet shared by every picker instance.
pub static DATETIMEPICKER_CSS: &str = include_str!("../assets/datetimepicker.css");

const HIGHLIGHT: &str = "rgba(151, 202, 238, 0.81)";

fn color_or(value: &Option<String>, fallback: &str) -> String {
    value.clone().unwrap_or_else(|| fallback.to_string())
}

fn length_or(value: &Option<CssLength>, fallback: &str) -> String {
    value
        .as_ref()
        .map(CssLength::to_css)
        .unwrap_or_else(|| fallback.to_string())
}

/// Fully resolved picker look.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub input_width: String,
    pub input_background: String,
    pub input_color: String,
    pub input_font_size: String,
    pub input_focus: String,
    pub calendar_width: String,
    pub calendar_background: String,
    pub calendar_border: String,
    pub nav_background: String,
    pub nav_outline: String,
    pub nav_icon: String,
    pub header_color: String,
    /// Explicit header font size; view-dependent default when None
    pub header_font_size: Option<String>,
    pub day_label_color: String,
    pub day_label_font_size: String,
    pub day_font_size: String,
    pub month_font_size: String,
    pub day_text: String,
    pub day_text_other: String,
    pub month_text: String,
    pub cell_background: String,
    pub selected_background: String,
    pub hover_background: String,
    pub hover_text: String,
}

impl Theme {
    pub fn from_style(
        style: &CalendarStyle,
        width: &Option<CssLength>,
        calendar_width: &Option<CssLength>,
    ) -> Self {
        let colors = &style.colors;
        let fonts = &style.font_sizes;
        let nav_outline = match (&colors.primary, &colors.text_primary) {
            (Some(_), Some(text)) => format!("1px solid {text}"),
            _ => "1px solid #0c3667".to_string(),
        };
        Self {
            input_width: length_or(width, "100%"),
            input_background: color_or(&colors.background, "#fff"),
            input_color: color_or(&colors.text_primary, "#000"),
            input_font_size: length_or(&fonts.date, "12px"),
            input_focus: color_or(&colors.primary, "#0E7AF8"),
            calendar_width: length_or(calendar_width, "200px"),
            calendar_background: color_or(&colors.background, "#fff"),
            calendar_border: color_or(&colors.primary, "#e3e3e3"),
            nav_background: color_or(&colors.primary, "rgba(151, 202, 238, 0.52)"),
            nav_outline,
            nav_icon: color_or(&colors.text_primary, "#1961b6"),
            header_color: color_or(&colors.text_primary, "#000"),
            header_font_size: fonts.date.as_ref().map(CssLength::to_css),
            day_label_color: color_or(&colors.text_primary, "rgba(0, 0, 0, 0.49)"),
            day_label_font_size: length_or(&fonts.day_labels, "13px"),
            day_font_size: length_or(&fonts.cell, "10px"),
            month_font_size: length_or(&fonts.cell, "12px"),
            day_text: color_or(&colors.text_primary, "#0C3667"),
            day_text_other: color_or(&colors.text_secondary, "#797979"),
            month_text: color_or(&colors.text_primary, "#0C3667"),
            cell_background: color_or(&colors.background, "transparent"),
            selected_background: color_or(&colors.selected, HIGHLIGHT),
            hover_background: color_or(&colors.primary_hover, HIGHLIGHT),
            hover_text: color_or(&colors.text_hover, "#797979"),
        }
    }

    pub fn from_config(config: &PickerConfig) -> Self {
        Self::from_style(&config.calendar, &config.width, &config.calendar_width)
    }

    /// Header font size for the given view mode.
    pub fn header_font_size(&self, view_mode: ViewMode) -> &str {
        match (&self.header_font_size, view_mode) {
            (Some(size), _) => size.as_str(),
            (None, ViewMode::Date) => "12px",
            (None, ViewMode::Month) => "13px",
        }
    }

    /// Inline `style` value for the picker root.
    pub fn css_variables(&self, view_mode: ViewMode) -> String {
        let vars: [(&str, &str); 24] = [
            ("input-width", self.input_width.as_str()),
            ("input-background", self.input_background.as_str()),
            ("input-color", self.input_color.as_str()),
            ("input-font-size", self.input_font_size.as_str()),
            ("input-focus", self.input_focus.as_str()),
            ("calendar-width", self.calendar_width.as_str()),
            ("calendar-background", self.calendar_background.as_str()),
            ("calendar-border", self.calendar_border.as_str()),
            ("nav-background", self.nav_background.as_str()),
            ("nav-outline", self.nav_outline.as_str()),
            ("nav-icon", self.nav_icon.as_str()),
            ("header-color", self.header_color.as_str()),
            ("header-font-size", self.header_font_size(view_mode)),
            ("day-label-color", self.day_label_color.as_str()),
            ("day-label-font-size", self.day_label_font_size.as_str()),
            ("day-font-size", self.day_font_size.as_str()),
            ("month-font-size", self.month_font_size.as_str()),
            ("day-text", self.day_text.as_str()),
            ("day-text-other", self.day_text_other.as_str()),
            ("month-text", self.month_text.as_str()),
            ("cell-background", self.cell_background.as_str()),
            ("selected-background", self.selected_background.as_str()),
            ("hover-background", self.hover_background.as_str()),
            ("hover-text", self.hover_text.as_str()),
        ];
        vars.iter()
            .map(|(name, value)| format!("--dtp-{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Class list for a day cell.
pub fn day_class(cell: &DayCell, selected: &CalendarDate) -> &'static str {
    match (cell.belongs_to_displayed_month, cell.date == *selected) {
        (true, false) => "dtp-day",
        (true, true) => "dtp-day selected",
        (false, false) => "dtp-day other",
        (false, true) => "dtp-day other selected",
    }
}

/// Class list for a month cell.
pub fn month_class(is_displayed: bool) -> &'static str {
    if is_displayed {
        "dtp-month selected"
    } else {
        "dtp-month"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dtp_core::{ColorStyles, FontSizes};

    fn date(year: i32, month0: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd_opt(year, month0, day).unwrap()
    }

    #[test]
    fn test_defaults() {
        let theme = Theme::from_config(&PickerConfig::default());
        assert_eq!(theme.input_width, "100%");
        assert_eq!(theme.calendar_width, "200px");
        assert_eq!(theme.day_text, "#0C3667");
        assert_eq!(theme.day_text_other, "#797979");
        assert_eq!(theme.selected_background, "rgba(151, 202, 238, 0.81)");
        assert_eq!(theme.day_font_size, "10px");
        assert_eq!(theme.month_font_size, "12px");
        assert_eq!(theme.nav_outline, "1px solid #0c3667");
        assert_eq!(theme.header_font_size(ViewMode::Date), "12px");
        assert_eq!(theme.header_font_size(ViewMode::Month), "13px");
    }

    #[test]
    fn test_overrides() {
        let style = CalendarStyle {
            colors: ColorStyles {
                text_primary: Some("#111".to_string()),
                primary: Some("navy".to_string()),
                selected: Some("gold".to_string()),
                ..Default::default()
            },
            font_sizes: FontSizes {
                cell: Some(CssLength::Px(14.0)),
                date: Some(CssLength::from("1rem")),
                ..Default::default()
            },
        };
        let theme = Theme::from_style(&style, &Some(CssLength::Px(244.0)), &Some("50%".into()));
        assert_eq!(theme.input_width, "244px");
        assert_eq!(theme.calendar_width, "50%");
        assert_eq!(theme.day_text, "#111");
        assert_eq!(theme.calendar_border, "navy");
        assert_eq!(theme.nav_outline, "1px solid #111");
        assert_eq!(theme.selected_background, "gold");
        assert_eq!(theme.day_font_size, "14px");
        assert_eq!(theme.month_font_size, "14px");
        assert_eq!(theme.header_font_size(ViewMode::Month), "1rem");
    }

    #[test]
    fn test_css_variables() {
        let theme = Theme::from_config(&PickerConfig::default());
        let vars = theme.css_variables(ViewMode::Month);
        assert!(vars.contains("--dtp-calendar-width: 200px;"));
        assert!(vars.contains("--dtp-header-font-size: 13px;"));
        assert!(vars.contains("--dtp-cell-background: transparent;"));
    }

    #[test]
    fn test_day_class() {
        let selected = date(2024, 2, 15);
        let in_month = DayCell {
            date: selected,
            belongs_to_displayed_month: true,
        };
        let other = DayCell {
            date: date(2024, 3, 1),
            belongs_to_displayed_month: false,
        };
        assert_eq!(day_class(&in_month, &selected), "dtp-day selected");
        assert_eq!(day_class(&other, &selected), "dtp-day other");
        assert_eq!(day_class(&other, &date(2024, 3, 1)), "dtp-day other selected");
        assert_eq!(month_class(true), "dtp-month selected");
    }
}
