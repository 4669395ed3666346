use crate::error::PickerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Month and weekday names for one supported language.
///
/// Weekday arrays are Monday-first to line up with the day grid columns.
#[derive(Debug, PartialEq, Eq)]
pub struct LocaleEntry {
    /// Native locale tag, e.g. "en-GB"
    pub tag: &'static str,
    /// chrono pattern for the native short date
    pub date_format: &'static str,
    pub months: [&'static str; 12],
    pub months_short: [&'static str; 12],
    pub day_of_week: [&'static str; 7],
    pub day_of_week_short: [&'static str; 7],
}

#[rustfmt::skip]
static EN: LocaleEntry = LocaleEntry {
    tag: "en-GB",
    date_format: "%d/%m/%Y",
    months: [
        "January", "February", "March", "April", "May", "June",
        "July", "August", "September", "October", "November", "December",
    ],
    months_short: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    day_of_week: [
        "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
    ],
    day_of_week_short: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
};

#[rustfmt::skip]
static FR: LocaleEntry = LocaleEntry {
    tag: "fr-FR",
    date_format: "%d/%m/%Y",
    months: [
        "Janvier", "Février", "Mars", "Avril", "Mai", "Juin",
        "Juillet", "Août", "Septembre", "Octobre", "Novembre", "Décembre",
    ],
    months_short: [
        "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Juil", "Aoû", "Sep", "Oct", "Nov", "Déc",
    ],
    day_of_week: [
        "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
    ],
    day_of_week_short: ["Lun", "Mar", "Mer", "Jeu", "Ven", "Sam", "Dim"],
};

/// Supported picker languages.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fr];

    /// Static name table for this locale.
    pub fn entry(self) -> &'static LocaleEntry {
        match self {
            Locale::En => &EN,
            Locale::Fr => &FR,
        }
    }

    /// Short tag as accepted by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            _ => Err(PickerError::UnsupportedLocale(s.to_string())),
        }
    }
}
