//! Wall-clock helpers for cosmetic shell widgets.

#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

/// Broken-down local wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    /// Hour of day, `0..24`.
    pub hour: u32,
    /// Minute, `0..60`.
    pub minute: u32,
    /// Second, `0..60`.
    pub second: u32,
}

impl ClockTime {
    /// Reads the current local time.
    ///
    /// Native builds have no timezone database and report UTC.
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
                second: date.get_seconds(),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let secs = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs();
            Self::from_seconds_of_day((secs % 86_400) as u32)
        }
    }

    /// Builds a clock time from seconds elapsed since midnight.
    pub fn from_seconds_of_day(secs: u32) -> Self {
        let secs = secs % 86_400;
        Self {
            hour: secs / 3600,
            minute: (secs % 3600) / 60,
            second: secs % 60,
        }
    }

    /// Formats as a 12-hour `h:mm AM` label.
    pub fn format_12h(self) -> String {
        let hour = match self.hour % 12 {
            0 => 12,
            hour => hour,
        };
        let suffix = if self.hour >= 12 { "PM" } else { "AM" };
        format!("{hour}:{:02} {suffix}", self.minute)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn formats_midnight_and_noon_as_twelve() {
        assert_eq!(ClockTime::from_seconds_of_day(0).format_12h(), "12:00 AM");
        assert_eq!(
            ClockTime::from_seconds_of_day(12 * 3600 + 5 * 60).format_12h(),
            "12:05 PM"
        );
        assert_eq!(
            ClockTime::from_seconds_of_day(21 * 3600 + 59 * 60 + 59).format_12h(),
            "9:59 PM"
        );
    }
}
