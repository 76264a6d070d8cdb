// Schedule model evaluating daily opening hours

use chrono::NaiveTime;

/// A pharmacy's daily opening window, parsed from `HH:MM` strings.
///
/// Malformed schedule data is kept distinguishable from a genuinely
/// closed pharmacy: parsing failure yields `Invalid`, which always
/// evaluates as closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// A well-formed open/close window
    Scheduled { open: NaiveTime, close: NaiveTime },

    /// One or both time strings failed to parse
    Invalid,
}

impl Schedule {
    /// Parses `HH:MM` 24-hour opening and closing times.
    pub fn parse(open: &str, close: &str) -> Self {
        let open = NaiveTime::parse_from_str(open, "%H:%M");
        let close = NaiveTime::parse_from_str(close, "%H:%M");

        match (open, close) {
            (Ok(open), Ok(close)) => Schedule::Scheduled { open, close },
            _ => Schedule::Invalid,
        }
    }

    /// Whether the pharmacy is open at `time`.
    ///
    /// A window with `open > close` wraps past midnight. Boundary times
    /// are inclusive on both ends. `Invalid` schedules are closed.
    pub fn is_open_at(&self, time: NaiveTime) -> bool {
        match *self {
            Schedule::Invalid => false,
            Schedule::Scheduled { open, close } => {
                if open > close {
                    // Overnight window, e.g. 22:00 - 06:00
                    time >= open || time <= close
                } else {
                    open <= time && time <= close
                }
            }
        }
    }

    /// Whether both time strings parsed successfully
    pub fn is_valid(&self) -> bool {
        matches!(self, Schedule::Scheduled { .. })
    }
}
