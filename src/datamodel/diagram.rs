use serde::Serialize;
use std::fmt;

pub const HOURLY_ROWS_NON_LEAP: usize = 8_760;
pub const HOURLY_ROWS_LEAP: usize = 8_784;
pub const QUARTER_HOURLY_ROWS_NON_LEAP: usize = 35_040;
pub const QUARTER_HOURLY_ROWS_LEAP: usize = 35_136;

/// Minimum number of daily rows for a year of a two-dimensional diagram.
/// Leap years have one more row, which still satisfies the minimum.
pub const MIN_DAYS_PER_YEAR: usize = 365;

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// How the intervals of a load diagram are laid out in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// One row per interval, the measurement in the following column.
    OneDimensional,
    /// One row per day, one column per interval of the day.
    TwoDimensional,
}

impl Layout {
    pub fn short_name(self) -> &'static str {
        match self {
            Layout::OneDimensional => "1D",
            Layout::TwoDimensional => "2D",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Hourly,
    QuarterHourly,
}

impl Granularity {
    pub fn intervals_per_day(self) -> usize {
        match self {
            Granularity::Hourly => 24,
            Granularity::QuarterHourly => 96,
        }
    }

    pub fn interval_minutes(self) -> u8 {
        match self {
            Granularity::Hourly => 60,
            Granularity::QuarterHourly => 15,
        }
    }

    /// Rows of a complete one-dimensional year.
    pub fn full_year_rows(self, leap: bool) -> usize {
        match (self, leap) {
            (Granularity::Hourly, false) => HOURLY_ROWS_NON_LEAP,
            (Granularity::Hourly, true) => HOURLY_ROWS_LEAP,
            (Granularity::QuarterHourly, false) => QUARTER_HOURLY_ROWS_NON_LEAP,
            (Granularity::QuarterHourly, true) => QUARTER_HOURLY_ROWS_LEAP,
        }
    }

    /// Wall-clock time on January 1st at which the yearly window opens.
    ///
    /// Interval timestamps label the end of the interval, so the first
    /// interval of the year is stamped one interval after midnight.
    pub fn window_opening(self) -> (u8, u8) {
        let minutes = self.interval_minutes();
        (minutes / 60, minutes % 60)
    }

    pub fn label(self) -> &'static str {
        match self {
            Granularity::Hourly => "hourly",
            Granularity::QuarterHourly => "15-minute",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DiagramFormat {
    pub layout: Layout,
    pub granularity: Granularity,
}

impl DiagramFormat {
    pub const ALL: [DiagramFormat; 4] = [
        DiagramFormat::new(Layout::OneDimensional, Granularity::Hourly),
        DiagramFormat::new(Layout::OneDimensional, Granularity::QuarterHourly),
        DiagramFormat::new(Layout::TwoDimensional, Granularity::Hourly),
        DiagramFormat::new(Layout::TwoDimensional, Granularity::QuarterHourly),
    ];

    pub const fn new(layout: Layout, granularity: Granularity) -> Self {
        Self {
            layout,
            granularity,
        }
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.layout.short_name(), self.granularity.label())
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.label() == label)
    }
}

impl fmt::Display for DiagramFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
