pub mod diagram;
pub mod load_datetime;

pub use diagram::{DiagramFormat, Granularity, Layout, is_leap_year};
pub use load_datetime::{CalendarFields, LoadDateTime, LoadDateTimeExt};
