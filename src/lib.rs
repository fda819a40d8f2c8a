//! The `year-cycle` crate provides the year-start and year-type tables that a time-zone library
//! needs to convert between timestamps and civil dates without arithmetic over centuries.
//!
//! The proleptic Gregorian calendar repeats exactly every 400 years, in both its leap-year pattern
//! and its day-of-week pattern. This crate tabulates, for each year from 2001 through 2400, the
//! Unix timestamp at which the year begins and a [`YearType`] describing whether the year is a
//! leap year and on which weekday it begins. Any other year is reduced into this range.
//!
//! Every function involved is a `const fn`, and the tables are built by the compiler into
//! [`TABLE`]. The `cycle-gen` binary writes the same tables out as C or Rust source (or JSON)
//! for consumers outside of Rust.
//!
//! ## Examples
//!
//! Looking up a year:
//!
//! ```
//! use cycle::TABLE;
//! use cycle::Weekday;
//!
//! assert_eq!(TABLE.year_start(2012), Some(1_325_376_000));
//! let year_type = TABLE.year_type(2012);
//! assert!(year_type.is_leap());
//! assert_eq!(year_type.jan1(), Weekday::Sunday);
//! ```
//!
//! Each table carries one extra entry on either side of the cycle:
//!
//! ```
//! use cycle::TABLE;
//!
//! assert_eq!(TABLE.year_start_at(-1), cycle::year_start_utc(2000));
//! assert_eq!(TABLE.year_start_at(400), cycle::year_start_utc(2401));
//! ```

mod calendar;
pub mod consts;
mod error;
pub mod format;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod table;
mod weekday;
mod year_type;

pub use calendar::day_of_week;
pub use calendar::days_in_year;
pub use calendar::is_leap;
pub use calendar::split_year;
pub use calendar::year_start_utc;
pub use error::Error;
pub use iter::CycleIter;
pub use iter::YearInfo;
pub use table::CycleTable;
pub use table::TABLE;
pub use table::build_tables;
pub use weekday::Weekday;
pub use year_type::YearType;
pub use year_type::year_type;
