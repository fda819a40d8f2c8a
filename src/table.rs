//! The padded year-start and year-type tables.

use crate::Error;
use crate::YearType;
use crate::calendar::days_in_year;
use crate::calendar::is_leap;
use crate::calendar::split_year;
use crate::calendar::year_start_utc;
use crate::consts::ANCHOR_TS;
use crate::consts::ANCHOR_YEAR;
use crate::consts::AVG_SECS_PER_YEAR;
use crate::consts::CYCLE_YEARS;
use crate::consts::FIRST_PADDED_YEAR;
use crate::consts::LAST_PADDED_YEAR;
use crate::consts::SECS_PER_400_YEARS;
use crate::consts::SECS_PER_DAY;
use crate::consts::TABLE_LEN;
use crate::iter::CycleIter;
use crate::year_type::year_type;

/// The tables for one 400-year Gregorian cycle, computed at compile time.
///
/// ## Examples
///
/// ```
/// use cycle::TABLE;
///
/// assert_eq!(TABLE.year_start(2001), Some(978_307_200));
/// assert_eq!(TABLE.year_start(2024), Some(cycle::year_start_utc(2024)));
/// assert_eq!(TABLE.year_type(2424), TABLE.year_type(2024));
/// ```
pub static TABLE: CycleTable = CycleTable::build();

/// Year starts and year types for the years 2001 through 2400, padded on either side.
///
/// The published entries are the 400 years of one cycle, addressed by logical index `0..400`.
/// Each table also holds the year before (2000) and the year after (2401) the cycle, at logical
/// indices `-1` and `400`, so that a lookup may probe one entry past either end of the cycle
/// without wrapping.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CycleTable {
  pub(crate) starts: [i64; TABLE_LEN],
  pub(crate) types: [YearType; TABLE_LEN],
}

/// Build the cycle tables.
///
/// Shorthand for [`CycleTable::build`]; the result is identical to [`TABLE`].
#[inline]
pub const fn build_tables() -> CycleTable {
  CycleTable::build()
}

impl CycleTable {
  /// Compute both tables.
  ///
  /// Every entry, both sentinels included, is computed directly from its own year.
  pub const fn build() -> Self {
    let mut starts = [0; TABLE_LEN];
    let mut types = [YearType(0); TABLE_LEN];
    let mut i = 0;
    while i < TABLE_LEN {
      let year = FIRST_PADDED_YEAR + i as i64;
      starts[i] = year_start_utc(year);
      types[i] = year_type(year);
      i += 1;
    }
    Self { starts, types }
  }

  /// The start of the year before the cycle, extrapolated from the cycle's own entries.
  ///
  /// Year 2000 has the same length as year 2400, its counterpart one cycle later, so its start
  /// is the cycle's first start less the length of the cycle's last year. This agrees with the
  /// directly computed sentinel; [`CycleTable::verify`] checks that it does.
  pub const fn historical_low_sentinel() -> i64 {
    year_start_utc(ANCHOR_YEAR) - (year_start_utc(LAST_PADDED_YEAR) - year_start_utc(2400))
  }
}

impl CycleTable {
  /// The starts of the 400 published years, 2001 first.
  #[inline]
  pub fn year_starts(&self) -> &[i64] {
    &self.starts[1..TABLE_LEN - 1]
  }

  /// The types of the 400 published years, 2001 first.
  #[inline]
  pub fn year_types(&self) -> &[YearType] {
    &self.types[1..TABLE_LEN - 1]
  }

  /// All 402 year starts, including both sentinels; element 0 is year 2000.
  #[inline]
  pub const fn padded_year_starts(&self) -> &[i64; TABLE_LEN] {
    &self.starts
  }

  /// All 402 year types, including both sentinels; element 0 is year 2000.
  #[inline]
  pub const fn padded_year_types(&self) -> &[YearType; TABLE_LEN] {
    &self.types
  }

  /// The year start at the given logical index.
  ///
  /// ## Panic
  ///
  /// This function panics unless the index is within `-1..=400`.
  pub const fn year_start_at(&self, index: isize) -> i64 {
    self.starts[padded_index(index)]
  }

  /// The year type at the given logical index.
  ///
  /// ## Panic
  ///
  /// This function panics unless the index is within `-1..=400`.
  pub const fn year_type_at(&self, index: isize) -> YearType {
    self.types[padded_index(index)]
  }
}

/// Convert a logical index (where `0` is year 2001) to a storage index.
const fn padded_index(index: isize) -> usize {
  assert!(index >= -1 && index <= CYCLE_YEARS as isize, "Index outside the padded table");
  (index + 1) as usize
}

impl CycleTable {
  /// The Unix timestamp of midnight UTC on January 1 of any year.
  ///
  /// This reduces the year into the cycle and adds back the whole cycles that were removed. It
  /// returns `None` if the result does not fit in an `i64`.
  ///
  /// ## Examples
  ///
  /// ```
  /// use cycle::TABLE;
  ///
  /// assert_eq!(TABLE.year_start(1970), Some(0));
  /// assert_eq!(TABLE.year_start(1969), Some(-31_536_000));
  /// assert_eq!(TABLE.year_start(i64::MAX), None);
  /// ```
  pub fn year_start(&self, year: i64) -> Option<i64> {
    let (block, index) = split_year(year);
    let cycles = block.checked_mul(SECS_PER_400_YEARS)?;
    self.year_starts()[index].checked_add(cycles)
  }

  /// The year type of any year.
  ///
  /// Year types repeat exactly every 400 years, so no adjustment is needed.
  pub fn year_type(&self, year: i64) -> YearType {
    let (_, index) = split_year(year);
    self.year_types()[index]
  }

  /// The year containing the given Unix timestamp, and its type.
  ///
  /// Returns `None` if the year can not be represented.
  ///
  /// ## Examples
  ///
  /// ```
  /// use cycle::TABLE;
  ///
  /// let (year, year_type) = TABLE.year_containing(1_334_966_400).unwrap();
  /// assert_eq!(year, 2012);
  /// assert!(year_type.is_leap());
  /// ```
  pub fn year_containing(&self, ts: i64) -> Option<(i64, YearType)> {
    // Divide before subtracting the anchor, so that no timestamp overflows.
    let block = ts.div_euclid(SECS_PER_400_YEARS);
    let remainder = ts.rem_euclid(SECS_PER_400_YEARS) - ANCHOR_TS;
    let (block, remainder) = match remainder < 0 {
      true => (block - 1, remainder + SECS_PER_400_YEARS),
      false => (block, remainder),
    };

    // The mean year length puts the guess within one year of the answer. The guess is never
    // above 399, so probing the next entry at most reaches the sentinel for 2401.
    let target = ANCHOR_TS + remainder;
    let mut index = (remainder / AVG_SECS_PER_YEAR) as isize;
    if self.year_start_at(index) > target {
      index -= 1;
    } else if self.year_start_at(index + 1) <= target {
      index += 1;
    }
    log::trace!("timestamp {} is in cycle {} at index {}", ts, block, index);

    let year = block.checked_mul(CYCLE_YEARS)?.checked_add(ANCHOR_YEAR + index as i64)?;
    Some((year, self.year_type_at(index)))
  }

  /// An iterator over the 400 published years.
  pub fn iter(&self) -> CycleIter<'_> {
    CycleIter::new(self, 0, CYCLE_YEARS as isize - 1)
  }

  /// An iterator over all 402 entries, beginning with the sentinel for 2000.
  pub fn iter_padded(&self) -> CycleIter<'_> {
    CycleIter::new(self, -1, CYCLE_YEARS as isize)
  }
}

impl CycleTable {
  /// Check the table against the properties a consumer relies on.
  ///
  /// This confirms that every year's length matches its leap flag, that the table repeats after
  /// one cycle, and that both sentinels hold the values of the years they stand in for.
  pub fn verify(&self) -> Result<(), Error> {
    macro_rules! ensure {
      ($year:expr, $e:expr, $check:literal) => {
        if !($e) {
          log::error!("cycle table check failed for {}: {}", $year, $check);
          Err(Error::Inconsistent { year: $year, check: $check })?;
        }
      };
    }

    for info in self.iter_padded() {
      ensure!(info.year, info.start == year_start_utc(info.year), "start matches direct formula");
      ensure!(info.year, info.year_type == year_type(info.year), "type matches direct formula");
      if info.year < LAST_PADDED_YEAR {
        let length = self.starts[(info.year - FIRST_PADDED_YEAR) as usize + 1] - info.start;
        ensure!(info.year, length == days_in_year(info.year) * SECS_PER_DAY, "year length");
        ensure!(info.year, info.year_type.is_leap() == is_leap(info.year), "leap flag");
      }
    }
    log::trace!("all {} entries match direct computation", TABLE_LEN);

    // Sentinels against the wrapped entries of the neighbouring cycle.
    let (low, high) = (self.year_start_at(-1), self.year_start_at(CYCLE_YEARS as isize));
    ensure!(FIRST_PADDED_YEAR, low == self.year_start_at(399) - SECS_PER_400_YEARS, "low start");
    ensure!(FIRST_PADDED_YEAR, self.year_type_at(-1) == self.year_type_at(399), "low type");
    ensure!(LAST_PADDED_YEAR, high == self.year_start_at(0) + SECS_PER_400_YEARS, "high start");
    ensure!(LAST_PADDED_YEAR, self.year_type_at(400) == self.year_type_at(0), "high type");
    ensure!(
      FIRST_PADDED_YEAR,
      low == Self::historical_low_sentinel(),
      "low start matches historical formula"
    );
    log::trace!("sentinels {} and {} match wrapped entries", low, high);

    log::debug!("cycle table for {} through {} verified", FIRST_PADDED_YEAR, LAST_PADDED_YEAR);
    Ok(())
  }
}

impl<'a> IntoIterator for &'a CycleTable {
  type Item = crate::YearInfo;
  type IntoIter = CycleIter<'a>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;
  use crate::Weekday;

  #[test]
  fn test_published_range() {
    check!(TABLE.year_starts().len() == 400);
    check!(TABLE.year_types().len() == 400);
    check!(TABLE.year_starts()[0] == 978_307_200);
    check!(TABLE.year_types()[0] == YearType::new(false, Weekday::Monday));
    for (i, year) in (2001..=2400).enumerate() {
      check!(TABLE.year_starts()[i] == year_start_utc(year));
      check!(TABLE.year_types()[i] == year_type(year));
    }
  }

  #[test]
  fn test_sentinels() {
    check!(TABLE.year_start_at(-1) == year_start_utc(2000));
    check!(TABLE.year_start_at(-1) == 946_684_800);
    check!(TABLE.year_start_at(-1) == year_start_utc(2400) - SECS_PER_400_YEARS);
    check!(TABLE.year_type_at(-1) == year_type(2000));
    check!(TABLE.year_start_at(400) == year_start_utc(2401));
    check!(TABLE.year_type_at(400) == year_type(2401));
    check!(TABLE.padded_year_starts()[0] == TABLE.year_start_at(-1));
    check!(TABLE.padded_year_types()[401] == TABLE.year_type_at(400));
  }

  #[test]
  fn test_historical_low_sentinel() {
    check!(CycleTable::historical_low_sentinel() == year_start_utc(2000));
    check!(CycleTable::historical_low_sentinel() == TABLE.year_start_at(-1));
  }

  #[test]
  fn test_build_is_static() {
    check!(build_tables() == TABLE);
    check!(TABLE.verify() == Ok(()));
  }

  #[test]
  fn test_verify_detects_corruption() {
    let mut table = build_tables();
    table.starts[0] -= SECS_PER_DAY;
    check!(
      table.verify()
        == Err(Error::Inconsistent { year: 2000, check: "start matches direct formula" })
    );

    let mut table = build_tables();
    table.types[401] = YearType(0);
    check!(
      table.verify() == Err(Error::Inconsistent { year: 2401, check: "type matches direct formula" })
    );
  }

  #[test]
  #[should_panic]
  fn test_index_below_padding() {
    TABLE.year_start_at(-2);
  }

  #[test]
  #[should_panic]
  fn test_index_above_padding() {
    TABLE.year_type_at(401);
  }

  #[test]
  fn test_year_start_any_year() {
    for year in 2000..=3300 {
      check!(TABLE.year_start(year) == Some(year_start_utc(year)), "Incorrect for: {}", year);
    }
    check!(TABLE.year_start(1970) == Some(0));
    check!(TABLE.year_start(1600) == Some(year_start_utc(2000) - 400 * AVG_SECS_PER_YEAR));
    check!(TABLE.year_start(0) == Some(-62_167_219_200));
    check!(TABLE.year_start(i64::MAX) == None);
    check!(TABLE.year_start(i64::MIN) == None);
  }

  #[test]
  fn test_year_start_before_epoch() {
    let mut expected = 0;
    for year in (1..=1970).rev() {
      check!(TABLE.year_start(year) == Some(expected), "Incorrect for: {}", year);
      expected -= days_in_year(year - 1) * SECS_PER_DAY;
    }
  }

  #[test]
  fn test_year_type_any_year() {
    check!(TABLE.year_type(1970) == YearType::new(false, Weekday::Thursday));
    check!(TABLE.year_type(1900) == YearType::new(false, Weekday::Monday));
    check!(TABLE.year_type(-400) == year_type(2000));
    for year in -800..=3300 {
      check!(TABLE.year_type(year) == year_type(year), "Incorrect for: {}", year);
    }
  }

  #[test]
  fn test_year_containing() {
    for year in 1590..=2810 {
      let start = TABLE.year_start(year).unwrap();
      check!(TABLE.year_containing(start) == Some((year, year_type(year))));
      check!(TABLE.year_containing(start - 1) == Some((year - 1, year_type(year - 1))));
      check!(TABLE.year_containing(start + SECS_PER_DAY * 200) == Some((year, year_type(year))));
    }
    check!(TABLE.year_containing(0).map(|(y, _)| y) == Some(1970));
    check!(TABLE.year_containing(-1).map(|(y, _)| y) == Some(1969));
    check!(TABLE.year_containing(1_334_966_400).map(|(y, _)| y) == Some(2012));
  }

  #[test]
  fn test_year_containing_extremes() {
    let (year, year_type) = TABLE.year_containing(i64::MIN).unwrap();
    check!(year == -292_277_022_657);
    check!(year_type == self::year_type(year));
    check!(TABLE.year_start(year).is_none_or(|start| start <= i64::MIN));
    check!(TABLE.year_start(year + 1).is_some_and(|start| start > i64::MIN));
    let (year, year_type) = TABLE.year_containing(i64::MAX).unwrap();
    check!(year == 292_277_026_596);
    check!(year_type == self::year_type(year));
  }
}
