use std::fmt;

use crate::Error;
use crate::Weekday;
use crate::calendar::day_of_week;
use crate::calendar::is_leap;

/// The class of a Gregorian year: whether it is a leap year, and the weekday of January 1.
///
/// There are 14 classes, packed into a single byte as `is_leap * 7 + weekday`. The leap flag is
/// recovered as `code / 7` and the weekday as `code % 7`.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct YearType(pub(crate) u8);

impl YearType {
  /// The number of distinct year types.
  pub const COUNT: u8 = 14;

  /// Construct the year type from its two components.
  #[inline]
  pub const fn new(leap: bool, jan1: Weekday) -> Self {
    Self(if leap { 7 } else { 0 } + jan1 as u8)
  }

  /// The year type of the given year.
  ///
  /// ## Examples
  ///
  /// ```
  /// use cycle::Weekday;
  /// use cycle::YearType;
  ///
  /// let y2001 = YearType::from_year(2001);
  /// assert!(!y2001.is_leap());
  /// assert_eq!(y2001.jan1(), Weekday::Monday);
  /// assert_eq!(y2001.code(), 1);
  ///
  /// let y2000 = YearType::from_year(2000);
  /// assert!(y2000.is_leap());
  /// assert_eq!(y2000.jan1(), Weekday::Saturday);
  /// assert_eq!(y2000.code(), 13);
  /// ```
  pub const fn from_year(year: i64) -> Self {
    Self::new(is_leap(year), day_of_week(year, 1, 1))
  }

  /// Construct the year type from its packed code, if the code is valid.
  pub const fn from_code(code: u8) -> Option<Self> {
    match code < Self::COUNT {
      true => Some(Self(code)),
      false => None,
    }
  }

  /// The packed code, within `0..=13`.
  #[inline]
  pub const fn code(self) -> u8 {
    self.0
  }

  /// Whether years of this type have 366 days.
  #[inline]
  pub const fn is_leap(self) -> bool {
    self.0 / 7 == 1
  }

  /// The weekday on which January 1 falls.
  pub const fn jan1(self) -> Weekday {
    match Weekday::from_number(self.0 % 7) {
      Some(weekday) => weekday,
      #[cfg(not(tarpaulin_include))]
      None => panic!("Unreachable: n % 7 is always within 0..=6"),
    }
  }

  /// The number of days in years of this type.
  pub const fn days(self) -> u16 {
    if self.is_leap() { 366 } else { 365 }
  }

  /// The year type of the year that follows a year of this type.
  ///
  /// The weekday advances by one for a common year and by two for a leap year; whether the next
  /// year is a leap year can not be known from the type alone, so it must be provided.
  pub const fn successor(self, leap: bool) -> Self {
    let jan1 = (self.0 % 7 + if self.is_leap() { 2 } else { 1 }) % 7;
    Self(if leap { 7 } else { 0 } + jan1)
  }

  /// Every year type, in code order.
  pub fn all() -> impl Iterator<Item = Self> {
    (0..Self::COUNT).map(Self)
  }
}

/// The year type of the given year.
///
/// Shorthand for [`YearType::from_year`].
#[inline]
pub const fn year_type(year: i64) -> YearType {
  YearType::from_year(year)
}

impl fmt::Debug for YearType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "YearType({}: {})", self.0, self)
  }
}

impl fmt::Display for YearType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let kind = match self.is_leap() {
      true => "leap",
      false => "common",
    };
    write!(f, "{} {}", kind, self.jan1().abbv())
  }
}

impl TryFrom<u8> for YearType {
  type Error = Error;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Self::from_code(value).ok_or(Error::InvalidYearType(value))
  }
}

impl From<YearType> for u8 {
  fn from(year_type: YearType) -> Self {
    year_type.code()
  }
}
