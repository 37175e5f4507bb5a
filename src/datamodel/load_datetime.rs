use std::fmt;

pub type LoadDateTime = hifitime::Epoch;

/// Gregorian wall-clock fields of a [`LoadDateTime`].
///
/// Fields are ordered from the most to the least significant, so the derived
/// ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarFields {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl fmt::Display for CalendarFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )?;
        if self.second != 0 {
            write!(f, ":{:02}", self.second)?;
        }
        Ok(())
    }
}

pub trait LoadDateTimeExt: Sized {
    fn from_wall_clock(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        nanos: u32,
    ) -> Option<Self>;
    fn start_of_year_at(year: i32, hour: u8, minute: u8) -> Self;
    fn calendar(&self) -> CalendarFields;
    /// True when the hour or the minute is not zero. Seconds are ignored.
    fn has_time_of_day(&self) -> bool;
    /// True when hour and minute are both zero. Seconds are ignored.
    fn is_midnight(&self) -> bool;
}

// Wall-clock values from meter exports carry no reliable zone information,
// so every timestamp is pinned to UTC and compared as such.
impl LoadDateTimeExt for LoadDateTime {
    fn from_wall_clock(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        nanos: u32,
    ) -> Option<Self> {
        Self::maybe_from_gregorian_utc(year, month, day, hour, minute, second, nanos).ok()
    }

    fn start_of_year_at(year: i32, hour: u8, minute: u8) -> Self {
        Self::from_gregorian_utc(year, 1, 1, hour, minute, 0, 0)
    }

    fn calendar(&self) -> CalendarFields {
        let (year, month, day, hour, minute, second, _nanos) = self.to_gregorian_utc();
        CalendarFields {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    fn has_time_of_day(&self) -> bool {
        let fields = self.calendar();
        fields.hour != 0 || fields.minute != 0
    }

    fn is_midnight(&self) -> bool {
        let fields = self.calendar();
        fields.hour == 0 && fields.minute == 0
    }
}
