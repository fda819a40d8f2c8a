use std::fmt::Display;

use crate::Error;

/// A representation of the day of the week.
///
/// The discriminants follow the numbering produced by [`day_of_week`](crate::day_of_week), which
/// is also the numbering packed into a [`YearType`](crate::YearType).
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
  Sunday = 0,
  Monday = 1,
  Tuesday = 2,
  Wednesday = 3,
  Thursday = 4,
  Friday = 5,
  Saturday = 6,
}

impl Weekday {
  /// The weekday with the given number (`0` is Sunday), if there is one.
  pub const fn from_number(n: u8) -> Option<Self> {
    match n {
      0 => Some(Self::Sunday),
      1 => Some(Self::Monday),
      2 => Some(Self::Tuesday),
      3 => Some(Self::Wednesday),
      4 => Some(Self::Thursday),
      5 => Some(Self::Friday),
      6 => Some(Self::Saturday),
      _ => None,
    }
  }

  /// The number of this weekday, from `0` (Sunday) to `6` (Saturday).
  #[inline]
  pub const fn number(self) -> u8 {
    self as u8
  }

  /// The three-letter abbreviation for this weekday.
  pub const fn abbv(&self) -> &'static str {
    match self {
      Self::Sunday => "Sun",
      Self::Monday => "Mon",
      Self::Tuesday => "Tue",
      Self::Wednesday => "Wed",
      Self::Thursday => "Thu",
      Self::Friday => "Fri",
      Self::Saturday => "Sat",
    }
  }
}

impl Display for Weekday {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    macro_rules! display {
      ($($e:ident),*) => {
        f.write_str(match self {
          $(Self::$e => stringify!($e)),*
        })
      };
    }
    display!(Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday)
  }
}

impl TryFrom<u8> for Weekday {
  type Error = Error;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Self::from_number(value).ok_or(Error::InvalidWeekday(value))
  }
}

impl From<Weekday> for u8 {
  fn from(weekday: Weekday) -> Self {
    weekday.number()
  }
}
