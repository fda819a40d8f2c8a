//! Gregorian calendar arithmetic over the 400-year cycle.

use crate::Weekday;
use crate::consts::ANCHOR_TS;
use crate::consts::ANCHOR_YEAR;
use crate::consts::CYCLE_YEARS;
use crate::consts::FIRST_PADDED_YEAR;
use crate::consts::SECS_PER_400_YEARS;
use crate::consts::SECS_PER_DAY;
use crate::consts::SECS_PER_NYEAR;

/// Return true if this is a leap year, false otherwise.
///
/// ## Examples
///
/// ```
/// assert!(cycle::is_leap(2000));
/// assert!(!cycle::is_leap(2001));
/// assert!(!cycle::is_leap(2100));
/// assert!(cycle::is_leap(2400));
/// ```
pub const fn is_leap(year: i64) -> bool {
  year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in the year.
pub const fn days_in_year(year: i64) -> i64 {
  if is_leap(year) { 366 } else { 365 }
}

/// The day of the week on which the given proleptic Gregorian date falls.
///
/// Any year is accepted, including zero and negative years.
///
/// ## Examples
///
/// ```
/// use cycle::Weekday;
/// assert_eq!(cycle::day_of_week(2001, 1, 1), Weekday::Monday);
/// assert_eq!(cycle::day_of_week(2012, 4, 21), Weekday::Saturday);
/// ```
///
/// ## Panic
///
/// This function panics if the month is not within `1..=12` or the day is not within `1..=31`.
pub const fn day_of_week(year: i64, month: u8, day: u8) -> Weekday {
  assert!(month >= 1 && month <= 12, "Month out-of-bounds");
  assert!(day >= 1 && day <= 31, "Day out-of-bounds");

  // Count months from March, so that January and February belong to the previous year and the
  // leap day (if any) is the last day of that year.
  let (year, month) = match month < 3 {
    true => (year - 1, month as i64 + 10),
    false => (year, month as i64 - 2),
  };
  let n = day as i64 + (26 * month - 2) / 10 + year + year.div_euclid(4) - year.div_euclid(100)
    + year.div_euclid(400);
  match Weekday::from_number(n.rem_euclid(7) as u8) {
    Some(weekday) => weekday,
    #[cfg(not(tarpaulin_include))]
    None => panic!("Unreachable: n mod 7 is always within 0..=6"),
  }
}

/// Split a year into the number of whole cycles since 2001 and its index within its own cycle.
///
/// The block is floored, so the index is always within `0..400`, including for years before
/// 2001.
///
/// ## Examples
///
/// ```
/// assert_eq!(cycle::split_year(2001), (0, 0));
/// assert_eq!(cycle::split_year(2400), (0, 399));
/// assert_eq!(cycle::split_year(2401), (1, 0));
/// assert_eq!(cycle::split_year(2000), (-1, 399));
/// ```
pub const fn split_year(year: i64) -> (i64, usize) {
  // Divide before subtracting the anchor, so that no year overflows.
  let block = year.div_euclid(CYCLE_YEARS) - ANCHOR_YEAR / CYCLE_YEARS;
  let index = year.rem_euclid(CYCLE_YEARS) - ANCHOR_YEAR % CYCLE_YEARS;
  match index < 0 {
    true => (block - 1, (index + CYCLE_YEARS) as usize),
    false => (block, index as usize),
  }
}

/// The Unix timestamp of midnight UTC on January 1 of the given year.
///
/// ## Examples
///
/// ```
/// assert_eq!(cycle::year_start_utc(2001), 978_307_200);
/// assert_eq!(cycle::year_start_utc(2024), 1_704_067_200);
/// ```
///
/// ## Panic
///
/// This function panics if the year is before 2000, the first year the cycle table reaches.
/// (It also overflows for years beyond roughly 290 billion.)
pub const fn year_start_utc(year: i64) -> i64 {
  assert!(year >= FIRST_PADDED_YEAR, "Year precedes the cycle table");
  let (block, offset) = split_year(year);
  let offset = offset as i64;

  // No offset within a cycle reaches the year divisible by 400, which is the cycle's last year.
  let leap_days = offset / 4 - offset / 100;
  ANCHOR_TS + SECS_PER_400_YEARS * block + SECS_PER_NYEAR * offset + SECS_PER_DAY * leap_days
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;

  #[test]
  fn test_is_leap() {
    check!(is_leap(2000));
    check!(!is_leap(2001));
    check!(is_leap(2004));
    check!(!is_leap(2100));
    check!(!is_leap(2200));
    check!(is_leap(2400));
    check!(is_leap(0));
    check!(is_leap(-4));
    check!(!is_leap(-100));
    check!(is_leap(-400));
    check!(days_in_year(2023) == 365);
    check!(days_in_year(2024) == 366);
  }

  #[test]
  fn test_day_of_week() {
    check!(day_of_week(2001, 1, 1) == Weekday::Monday);
    check!(day_of_week(2001, 2, 1) == Weekday::Thursday);
    check!(day_of_week(2012, 4, 21) == Weekday::Saturday);
    check!(day_of_week(2024, 2, 29) == Weekday::Thursday);
    check!(day_of_week(2024, 3, 1) == Weekday::Friday);
    check!(day_of_week(1970, 1, 1) == Weekday::Thursday);

    // Also check some dates in other centuries.
    check!(day_of_week(1700, 1, 1) == Weekday::Friday);
    check!(day_of_week(1800, 1, 1) == Weekday::Wednesday);
    check!(day_of_week(1900, 1, 1) == Weekday::Monday);
    check!(day_of_week(2000, 1, 1) == Weekday::Saturday);
    check!(day_of_week(2100, 1, 1) == Weekday::Friday);
    check!(day_of_week(2200, 1, 1) == Weekday::Wednesday);
    check!(day_of_week(2300, 1, 1) == Weekday::Monday);
    check!(day_of_week(2400, 1, 1) == Weekday::Saturday);
    check!(day_of_week(2500, 1, 1) == Weekday::Friday);

    // Proleptic years before the common era repeat the same pattern.
    check!(day_of_week(0, 1, 1) == Weekday::Saturday);
    check!(day_of_week(-400, 1, 1) == Weekday::Saturday);
  }

  #[test]
  fn test_day_of_week_matches_year_starts() {
    // January 1, 1970 was a Thursday.
    for year in 2000..=2800 {
      let days = year_start_utc(year) / SECS_PER_DAY;
      let expected = Weekday::from_number((days + 4).rem_euclid(7) as u8);
      check!(Some(day_of_week(year, 1, 1)) == expected, "Incorrect for: {}", year);
    }
  }

  #[test]
  #[should_panic]
  fn test_day_of_week_panic_month() {
    day_of_week(2012, 13, 1);
  }

  #[test]
  #[should_panic]
  fn test_day_of_week_panic_day() {
    day_of_week(2012, 1, 0);
  }

  #[test]
  fn test_split_year() {
    check!(split_year(2001) == (0, 0));
    check!(split_year(2400) == (0, 399));
    check!(split_year(2401) == (1, 0));
    check!(split_year(2000) == (-1, 399));
    check!(split_year(1601) == (-1, 0));
    check!(split_year(1600) == (-2, 399));
    check!(split_year(0) == (-6, 399));
    check!(split_year(i64::MAX).1 < 400);
    check!(split_year(i64::MIN).1 < 400);
    for year in -1200..=3200 {
      let (block, index) = split_year(year);
      check!(block * 400 + index as i64 + 2001 == year);
    }
  }

  #[test]
  fn test_year_start_fixed_points() {
    check!(year_start_utc(2001) == 978_307_200);
    check!(year_start_utc(2000) == 946_684_800);
    check!(year_start_utc(2024) == 1_704_067_200);
    check!(year_start_utc(2038) == 2_145_916_800);
    check!(year_start_utc(2401) == year_start_utc(2001) + SECS_PER_400_YEARS);
  }

  #[test]
  fn test_year_lengths() {
    for year in 2001..=2400 {
      let length = year_start_utc(year + 1) - year_start_utc(year);
      check!([31_536_000, 31_622_400].contains(&length));
      check!((length == 31_622_400) == is_leap(year), "Incorrect on: {}", year);
      check!(length == days_in_year(year) * SECS_PER_DAY);
    }
  }

  #[test]
  fn test_periodicity() {
    for year in 2000..=2800 {
      check!(year_start_utc(year + 400) - year_start_utc(year) == SECS_PER_400_YEARS);
    }
  }

  #[test]
  fn test_low_sentinel_identity() {
    check!(year_start_utc(2000) == year_start_utc(2400) - SECS_PER_400_YEARS);
    check!(year_start_utc(2000) == year_start_utc(2001) - 366 * SECS_PER_DAY);
  }

  #[test]
  #[should_panic]
  fn test_year_start_panic() {
    year_start_utc(1999);
  }
}
