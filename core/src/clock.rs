//! Wall-clock handling for a board whose RTC is set from SNTP in UTC.
//!
//! The station lives in US Central time. Instead of a tz database the
//! offset is picked with a fixed calendar rule: CDT (UTC-5) from mid March
//! to early November, CST (UTC-6) otherwise.

use chrono::{DateTime, Datelike, TimeDelta, Timelike, Utc};

/// Seconds since the epoch below which the RTC is treated as never set.
const CLOCK_SET_AFTER: i64 = 1_000_000_000;

const CDT_OFFSET_HOURS: i32 = -5;
const CST_OFFSET_HOURS: i32 = -6;

/// Raw UTC hour → index into a forecast series that starts at UTC-5 midnight.
const UTC_TO_FORECAST_HOUR: [usize; 24] = [
    19, 20, 21, 22, 23, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18,
];

/// How the current hour is turned into a forecast index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HourIndexing {
    /// Use the DST-adjusted local hour directly.
    #[default]
    Local,
    /// Map the raw UTC hour through a fixed UTC-5 table.
    UtcTable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub utc_hour: u32,
    pub utc_offset_hours: i32,
}

pub fn is_daylight_saving(month: u32, day: u32) -> bool {
    (month > 3 && month < 11) || (month == 3 && day >= 14) || (month == 11 && day < 7)
}

pub fn utc_offset_hours(month: u32, day: u32) -> i32 {
    if is_daylight_saving(month, day) {
        CDT_OFFSET_HOURS
    } else {
        CST_OFFSET_HOURS
    }
}

pub fn clock_is_set(unix_secs: i64) -> bool {
    unix_secs >= CLOCK_SET_AFTER
}

/// Convert a UTC instant to station time. The DST rule is evaluated on the
/// UTC date; the local date rolls back when the offset crosses midnight.
pub fn local_from_utc(utc: &DateTime<Utc>) -> LocalTime {
    let offset = utc_offset_hours(utc.month(), utc.day());
    let local = *utc + TimeDelta::hours(offset.into());
    LocalTime {
        year: local.year(),
        month: local.month(),
        day: local.day(),
        hour: local.hour(),
        minute: local.minute(),
        second: local.second(),
        utc_hour: utc.hour(),
        utc_offset_hours: offset,
    }
}

pub fn local_from_unix(unix_secs: i64) -> Option<LocalTime> {
    DateTime::<Utc>::from_timestamp(unix_secs, 0).map(|utc| local_from_utc(&utc))
}

pub fn to_12_hour(hour: u32) -> u32 {
    match hour {
        0 => 12,
        1..=12 => hour,
        _ => hour - 12,
    }
}

/// `h:mm` as shown in the display's clock corner.
pub fn format_clock(hour: u32, minute: u32) -> String {
    format!("{}:{:02}", to_12_hour(hour), minute)
}

pub fn forecast_hour(indexing: HourIndexing, now: &LocalTime) -> usize {
    match indexing {
        HourIndexing::Local => now.hour as usize,
        HourIndexing::UtcTable => UTC_TO_FORECAST_HOUR[now.utc_hour as usize % 24],
    }
}
