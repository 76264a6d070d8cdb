// Pharmacy model representing a persisted record and its duty day

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use crate::models::{Location, Schedule};

/// Day of the week a pharmacy is the town's designated on-duty location.
///
/// Ordered Saturday-first, matching the town's duty rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All seven days in duty-rotation order
    pub const ALL: [Weekday; 7] = [
        Weekday::Saturday,
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// The current day of the week from the local system clock
    pub fn today() -> Self {
        Self::from(Local::now().weekday())
    }

    /// Day name as persisted in the store file
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|day| day.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("'{}' is not a weekday name", s))
    }
}

/// A pharmacy record as persisted in the flat-file store.
///
/// `lat`/`lon` may be absent on malformed input; such records stay in
/// the list but are excluded from distance ranking and mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pharmacy {
    /// Display name; used for delete-by-name, duplicates permitted
    pub name: String,

    /// Free-text street address
    pub location: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,

    /// The weekday this pharmacy is the designated on-duty location
    pub duty: Weekday,

    /// Opening time as an `HH:MM` string
    pub open: String,

    /// Closing time as an `HH:MM` string
    pub close: String,
}

impl Pharmacy {
    /// Creates a new pharmacy record
    pub fn new<S: Into<String>>(
        name: S,
        location: S,
        lat: Option<f64>,
        lon: Option<f64>,
        duty: Weekday,
        open: S,
        close: S,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            lat,
            lon,
            duty,
            open: open.into(),
            close: close.into(),
        }
    }

    /// Coordinates of this pharmacy, if both are present
    pub fn coordinates(&self) -> Option<Location> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(Location::new(lat, lon)),
            _ => None,
        }
    }

    /// Parses the opening-hours strings into a schedule
    pub fn schedule(&self) -> Schedule {
        Schedule::parse(&self.open, &self.close)
    }
}
