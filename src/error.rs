//! Error types for the year-cycle crate.

/// Error type for all fallible operations in the year-cycle crate.
///
/// Contract violations in the table arithmetic itself (such as asking for the start of a year
/// before the table's reach) are assertions, not errors; these variants cover decoding values
/// that came from outside the crate and self-checks on the computed tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  /// Returned when a year-type code is outside the valid range 0..=13.
  #[error("invalid year type: {0} (must be 0..=13)")]
  InvalidYearType(u8),

  /// Returned when a weekday number is outside the valid range 0..=6.
  #[error("invalid weekday: {0} (must be 0..=6)")]
  InvalidWeekday(u8),

  /// Returned when a computed table fails one of its consistency checks.
  #[error("inconsistent cycle table at year {year}: {check}")]
  Inconsistent {
    /// The year whose entry failed the check.
    year: i64,
    /// A description of the check that failed.
    check: &'static str,
  },
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;

  #[test]
  fn test_messages() {
    check!(Error::InvalidYearType(14).to_string() == "invalid year type: 14 (must be 0..=13)");
    check!(Error::InvalidWeekday(7).to_string() == "invalid weekday: 7 (must be 0..=6)");
    let err = Error::Inconsistent { year: 2000, check: "low sentinel start" };
    check!(err.to_string() == "inconsistent cycle table at year 2000: low sentinel start");
  }
}
