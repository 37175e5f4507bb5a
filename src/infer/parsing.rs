use std::borrow::Cow;

use nom::{
    Err, IResult, Parser,
    branch::alt,
    bytes::complete::take_while_m_n,
    character::complete::{char, digit1, i64, multispace0, one_of, space1},
    combinator::{eof, map, map_opt, map_res, opt, recognize},
    number::complete::double,
    sequence::{delimited, preceded, terminated},
};

use crate::datamodel::{LoadDateTime, LoadDateTimeExt};

#[derive(Debug, Clone, PartialEq)]
pub enum InferedValue {
    Blank,
    Integer(i64),
    Float(f64),
    DateTime(LoadDateTime),
    String(String),
}

impl InferedValue {
    pub fn is_numeric(&self) -> bool {
        matches!(self, InferedValue::Integer(_) | InferedValue::Float(_))
    }
}

fn fail<O>(data: &str) -> IResult<&str, O> {
    Err(Err::Error(nom::error::Error::new(
        data,
        nom::error::ErrorKind::Fail,
    )))
}

pub fn parse_blank(data: &str) -> IResult<&str, InferedValue> {
    map(terminated(multispace0, eof), |_| InferedValue::Blank).parse(data)
}

pub fn parse_integer(data: &str) -> IResult<&str, InferedValue> {
    map(i64, InferedValue::Integer).parse(data)
}

pub fn parse_float(data: &str) -> IResult<&str, InferedValue> {
    // "inf" and "nan" are recognized by nom but they are not measurements.
    map_opt(double, |f: f64| f.is_finite().then_some(InferedValue::Float(f))).parse(data)
}

/// Decimal-comma numbers such as `0,5`, as written by spreadsheets set to a
/// European locale.
pub fn parse_decimal_comma(data: &str) -> IResult<&str, InferedValue> {
    map_res(
        recognize((opt(one_of("+-")), digit1, char(','), digit1)),
        |number: &str| number.replacen(',', ".", 1).parse::<f64>().map(InferedValue::Float),
    )
    .parse(data)
}

pub fn parse_string(data: &str) -> IResult<&str, InferedValue> {
    // Labels, units and remarks: whatever is left once numbers and dates failed
    Ok(("", InferedValue::String(data.to_string())))
}

fn digits<'a>(
    min: usize,
    max: usize,
) -> impl Parser<&'a str, Output = u32, Error = nom::error::Error<&'a str>> {
    map_res(
        take_while_m_n(min, max, |c: char| c.is_ascii_digit()),
        |s: &str| s.parse::<u32>(),
    )
}

/// Day-first dotted dates, as exported by most European metering portals:
/// `31.01.2024`, `31.01.2024 13:45` or `31.01.2024 13:45:00`.
pub fn parse_dotted_datetime(data: &str) -> IResult<&str, InferedValue> {
    let date = (
        digits(1, 2),
        preceded(char('.'), digits(1, 2)),
        preceded(char('.'), digits(4, 4)),
    );
    let time = preceded(
        space1,
        (
            digits(1, 2),
            preceded(char(':'), digits(2, 2)),
            opt(preceded(char(':'), digits(2, 2))),
        ),
    );
    let (rest, ((day, month, year), time)) = (date, opt(time)).parse(data)?;
    let (hour, minute, second) = time
        .map(|(hour, minute, second)| (hour, minute, second.unwrap_or(0)))
        .unwrap_or((0, 0, 0));

    match LoadDateTime::from_wall_clock(
        year as i32,
        month as u8,
        day as u8,
        hour as u8,
        minute as u8,
        second as u8,
        0,
    ) {
        Some(epoch) => Ok((rest, InferedValue::DateTime(epoch))),
        None => fail(data),
    }
}

fn iso8601_date_to_ymd(date: iso8601::Date) -> Option<(i32, u8, u8)> {
    match date {
        iso8601::Date::YMD { year, month, day } => Some((year, month as u8, day as u8)),
        // Week and ordinal dates never label load intervals.
        iso8601::Date::Week { .. } | iso8601::Date::Ordinal { .. } => None,
    }
}

fn convert_datetime_from_iso8601(dt: iso8601::DateTime) -> Option<LoadDateTime> {
    let iso8601::DateTime { date, time } = dt;
    let (year, month, day) = iso8601_date_to_ymd(date)?;
    // Zone offsets are ignored, intervals are compared in exported wall-clock time.
    let iso8601::Time {
        hour,
        minute,
        second,
        millisecond,
        ..
    } = time;
    LoadDateTime::from_wall_clock(
        year,
        month,
        day,
        hour as u8,
        minute as u8,
        second as u8,
        millisecond * 1_000_000_u32,
    )
}

/// Spreadsheet exports usually separate the date and the time with a space
/// rather than the `T` mandated by ISO 8601.
fn normalize_date_time_separator(data: &str) -> Cow<'_, str> {
    match data.find(' ') {
        Some(idx)
            if idx >= 8 && data[idx + 1..].starts_with(|c: char| c.is_ascii_digit()) =>
        {
            Cow::Owned(format!("{}T{}", &data[..idx], &data[idx + 1..]))
        }
        _ => Cow::Borrowed(data),
    }
}

pub fn parse_iso8601_datetime(data: &str) -> IResult<&str, InferedValue> {
    let normalized = normalize_date_time_separator(data);
    match iso8601::parsers::parse_datetime(normalized.as_bytes()) {
        Ok((rest, dt)) => match convert_datetime_from_iso8601(dt) {
            // The normalization keeps the length, so the remainder lines up.
            Some(epoch) => Ok((
                &data[data.len() - rest.len()..],
                InferedValue::DateTime(epoch),
            )),
            None => fail(data),
        },
        Err(_) => fail(data),
    }
}

pub fn parse_iso8601_date(data: &str) -> IResult<&str, InferedValue> {
    match iso8601::parsers::parse_date(data.as_bytes()) {
        Ok((rest, date)) => match iso8601_date_to_ymd(date)
            .and_then(|(year, month, day)| {
                LoadDateTime::from_wall_clock(year, month, day, 0, 0, 0, 0)
            }) {
            Some(epoch) => Ok((
                &data[data.len() - rest.len()..],
                InferedValue::DateTime(epoch),
            )),
            None => fail(data),
        },
        Err(_) => fail(data),
    }
}

pub fn parse_datetime(data: &str) -> IResult<&str, InferedValue> {
    alt((
        terminated(parse_dotted_datetime, eof),
        terminated(parse_iso8601_datetime, eof),
        terminated(parse_iso8601_date, eof),
    ))
    .parse(data)
}

/// Parses a timestamp cell, ignoring surrounding whitespace.
pub fn parse_timestamp(data: &str) -> Option<LoadDateTime> {
    match parse_datetime(data.trim()) {
        Ok((_, InferedValue::DateTime(epoch))) => Some(epoch),
        _ => None,
    }
}

fn parse_trimmed_datetime(data: &str) -> IResult<&str, InferedValue> {
    match parse_timestamp(data) {
        Some(epoch) => Ok(("", InferedValue::DateTime(epoch))),
        None => fail(data),
    }
}

/// Infers the value of a cell. Whitespace around numbers and dates is
/// ignored, strings are kept as they are.
pub fn infer_type(data: &str) -> IResult<&str, InferedValue> {
    alt((
        parse_blank,
        terminated(delimited(multispace0, parse_integer, multispace0), eof),
        terminated(delimited(multispace0, parse_float, multispace0), eof),
        terminated(delimited(multispace0, parse_decimal_comma, multispace0), eof),
        parse_trimmed_datetime,
        terminated(parse_string, eof),
    ))
    .parse(data)
}

/// Infers a cell, never failing: anything that is not a number, a date or
/// blank is a string.
pub fn infer_cell(data: &str) -> InferedValue {
    match infer_type(data) {
        Ok((_, value)) => value,
        Err(_) => InferedValue::String(data.to_string()),
    }
}
