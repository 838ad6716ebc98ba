//! Clock and calendar adapter.
//!
//! All stored timestamps and range arithmetic use the Gregorian calendar in
//! the local timezone; the Persian (Jalali) calendar appears only at the
//! formatting/parsing boundary, where user-facing date literals live.
//!
//! The conversion uses the arithmetic break-year algorithm, valid for Jalali
//! years -61..3177.

use crate::libs::error::HozurError;
use chrono::{DateTime, Datelike, Local, NaiveDate};

/// Jalali years at which the length of the intercalation cycle changes.
const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324, 2394, 2456, 3178,
];

/// Current instant in the configured local timezone.
///
/// Every durable timestamp in the store is the ISO-8601 serialization of a
/// value produced here.
pub fn now() -> DateTime<Local> {
    Local::now()
}

/// A date in the display (Persian) calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JalaliDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl JalaliDate {
    pub fn to_gregorian(&self) -> NaiveDate {
        let jdn = j2d(self.year, self.month as i32, self.day as i32);
        let (gy, gm, gd) = d2g(jdn);
        // d2g always yields a representable Gregorian date
        NaiveDate::from_ymd_opt(gy, gm as u32, gd as u32).unwrap()
    }
}

impl std::fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Converts an internal Gregorian date to the display calendar.
pub fn to_display(date: NaiveDate) -> JalaliDate {
    let jdn = g2d(date.year(), date.month() as i32, date.day() as i32);
    let (jy, jm, jd) = d2j(jdn);
    JalaliDate {
        year: jy,
        month: jm as u32,
        day: jd as u32,
    }
}

/// Formats an internal date as a `YYYY-MM-DD` display-calendar literal.
pub fn format_display(date: NaiveDate) -> String {
    to_display(date).to_string()
}

/// Parses a `YYYY-MM-DD` display-calendar literal into an internal date.
pub fn parse_display(input: &str) -> Result<NaiveDate, HozurError> {
    let invalid = || HozurError::InvalidDateFormat(input.to_string());

    let parts: Vec<&str> = input.trim().split('-').collect();
    if parts.len() != 3 {
        return Err(invalid());
    }
    let year: i32 = parts[0].parse().map_err(|_| invalid())?;
    let month: u32 = parts[1].parse().map_err(|_| invalid())?;
    let day: u32 = parts[2].parse().map_err(|_| invalid())?;

    if !(BREAKS[0]..BREAKS[BREAKS.len() - 1]).contains(&year) {
        return Err(invalid());
    }
    if month < 1 || month > 12 || day < 1 || day > month_length(year, month) {
        return Err(invalid());
    }

    Ok(JalaliDate { year, month, day }.to_gregorian())
}

/// Number of days in a Jalali month.
pub fn month_length(year: i32, month: u32) -> u32 {
    match month {
        1..=6 => 31,
        7..=11 => 30,
        12 if is_leap_year(year) => 30,
        12 => 29,
        _ => 0,
    }
}

/// Whether a Jalali year has 366 days.
pub fn is_leap_year(year: i32) -> bool {
    jal_cal(year).0 == 0
}

/// Intercalation data for a Jalali year: (leap, gregorian year, march day of
/// the first of Farvardin).
fn jal_cal(jy: i32) -> (i32, i32, i32) {
    let gy = jy + 621;
    let mut leap_j = -14;
    let mut jp = BREAKS[0];
    let mut jump = 0;

    for &jm in &BREAKS[1..] {
        jump = jm - jp;
        if jy < jm {
            break;
        }
        leap_j += jump / 33 * 8 + (jump % 33) / 4;
        jp = jm;
    }
    let mut n = jy - jp;

    leap_j += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_j += 1;
    }

    let leap_g = gy / 4 - (gy / 100 + 1) * 3 / 4 - 150;
    let march = 20 + leap_j - leap_g;

    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let mut leap = ((n + 1) % 33 - 1) % 4;
    if leap == -1 {
        leap = 4;
    }

    (leap, gy, march)
}

/// Julian day number of a Gregorian date.
fn g2d(gy: i32, gm: i32, gd: i32) -> i32 {
    let d = (gy + (gm - 8) / 6 + 100100) * 1461 / 4 + (153 * ((gm + 9) % 12) + 2) / 5 + gd - 34840408;
    d - (gy + 100100 + (gm - 8) / 6) / 100 * 3 / 4 + 752
}

/// Gregorian date of a Julian day number.
fn d2g(jdn: i32) -> (i32, i32, i32) {
    let mut j = 4 * jdn + 139361631;
    j += (4 * jdn + 183187720) / 146097 * 3 / 4 * 4 - 3908;
    let i = j % 1461 / 4 * 5 + 308;
    let gd = i % 153 / 5 + 1;
    let gm = i / 153 % 12 + 1;
    let gy = j / 1461 - 100100 + (8 - gm) / 6;
    (gy, gm, gd)
}

/// Julian day number of a Jalali date.
fn j2d(jy: i32, jm: i32, jd: i32) -> i32 {
    let (_, gy, march) = jal_cal(jy);
    g2d(gy, 3, march) + (jm - 1) * 31 - jm / 7 * (jm - 7) + jd - 1
}

/// Jalali date of a Julian day number.
fn d2j(jdn: i32) -> (i32, i32, i32) {
    let (gy, _, _) = d2g(jdn);
    let mut jy = gy - 621;
    let (leap, _, march) = jal_cal(jy);
    let first_of_year = g2d(gy, 3, march);

    let mut k = jdn - first_of_year;
    if k >= 0 {
        if k <= 185 {
            return (jy, 1 + k / 31, k % 31 + 1);
        }
        k -= 186;
    } else {
        jy -= 1;
        k += 179;
        if leap == 1 {
            k += 1;
        }
    }
    (jy, 7 + k / 30, k % 30 + 1)
}
