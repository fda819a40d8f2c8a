//! Calendar constants.
//!
//! Every value here is derived from the primitive definitions above it; none of the larger
//! numbers are written out by hand.

pub const SECS_PER_MIN: i64 = 60;
pub const MINS_PER_HOUR: i64 = 60;
pub const SECS_PER_HOUR: i64 = MINS_PER_HOUR * SECS_PER_MIN;
pub const HOURS_PER_DAY: i64 = 24;
pub const SECS_PER_DAY: i64 = HOURS_PER_DAY * SECS_PER_HOUR;

pub const DAYS_PER_WEEK: i64 = 7;
/// Days in a common (non-leap) year.
pub const DAYS_PER_NYEAR: i64 = 365;
/// Seconds in a common (non-leap) year.
pub const SECS_PER_NYEAR: i64 = DAYS_PER_NYEAR * SECS_PER_DAY;

/// The length of the Gregorian cycle, in years.
pub const CYCLE_YEARS: i64 = 400;
/// Days in one Gregorian cycle: 97 of its 400 years are leap years.
pub const DAYS_PER_400_YEARS: i64 = DAYS_PER_NYEAR * CYCLE_YEARS + CYCLE_YEARS / 4 - 4 + 1;
/// Seconds in one Gregorian cycle.
pub const SECS_PER_400_YEARS: i64 = DAYS_PER_400_YEARS * SECS_PER_DAY;
/// The mean length of a Gregorian year, in seconds (exact, since 400 divides the cycle).
pub const AVG_SECS_PER_YEAR: i64 = SECS_PER_400_YEARS / CYCLE_YEARS;

/// The year of the Unix epoch.
pub const EPOCH_YEAR: i64 = 1970;
/// The first year of the tabulated cycle.
///
/// 2001 follows a year divisible by 400, so the only leap year divisible by 100 is the last
/// year of each cycle.
pub const ANCHOR_YEAR: i64 = 2001;
/// Seconds from the Unix epoch to 2001-01-01 00:00:00 UTC.
///
/// The span includes 8 leap years: 1972, 1976, 1980, 1984, 1988, 1992, 1996 and 2000.
pub const ANCHOR_TS: i64 = ((ANCHOR_YEAR - EPOCH_YEAR) * DAYS_PER_NYEAR + 8) * SECS_PER_DAY;

/// Number of entries in each padded table: one cycle plus a sentinel on either side.
pub const TABLE_LEN: usize = CYCLE_YEARS as usize + 2;
/// The year held in the first (padding) slot of each table.
pub const FIRST_PADDED_YEAR: i64 = ANCHOR_YEAR - 1;
/// The year held in the last (padding) slot of each table.
pub const LAST_PADDED_YEAR: i64 = ANCHOR_YEAR + CYCLE_YEARS;
