//! Iterator over cycle table entries

use std::iter::Iterator;

use crate::CycleTable;
use crate::YearType;
use crate::consts::ANCHOR_YEAR;

/// A single year's entry in a [`CycleTable`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct YearInfo {
  /// The calendar year.
  pub year: i64,
  /// The Unix timestamp of midnight UTC on January 1.
  pub start: i64,
  /// The year's leap flag and starting weekday.
  pub year_type: YearType,
}

/// An iterator over a range of logical indices of a [`CycleTable`].
pub struct CycleIter<'a> {
  table: &'a CycleTable,
  cursor: isize,
  end: isize,
}

impl<'a> CycleIter<'a> {
  pub(crate) const fn new(table: &'a CycleTable, start: isize, end: isize) -> Self {
    Self { table, cursor: start, end }
  }
}

impl Iterator for CycleIter<'_> {
  type Item = YearInfo;

  fn next(&mut self) -> Option<Self::Item> {
    match self.cursor > self.end {
      true => None,
      false => {
        let answer = Some(YearInfo {
          year: ANCHOR_YEAR + self.cursor as i64,
          start: self.table.year_start_at(self.cursor),
          year_type: self.table.year_type_at(self.cursor),
        });
        self.cursor += 1;
        answer
      },
    }
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let remaining = (self.end - self.cursor + 1).max(0) as usize;
    (remaining, Some(remaining))
  }
}

impl ExactSizeIterator for CycleIter<'_> {}
