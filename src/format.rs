use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;
use std::fmt::Write;

use crate::CycleTable;
use crate::consts::FIRST_PADDED_YEAR;
use crate::consts::LAST_PADDED_YEAR;
use crate::consts::TABLE_LEN;

/// The language a cycle table is rendered in.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Target {
  /// C source defining `tz64_year_starts` and `tz64_year_types`, each a pointer one element into
  /// its padded array so that indices `-1` through `400` are valid.
  #[default]
  C,
  /// Rust source defining the padded `YEAR_STARTS` and `YEAR_TYPES` statics.
  Rust,
}

/// Year types are written this many to a line.
const TYPES_PER_LINE: usize = 4;

impl CycleTable {
  /// Render the table as source code in the given language.
  ///
  /// ## Examples
  ///
  /// ```
  /// use cycle::TABLE;
  /// use cycle::format::Target;
  ///
  /// let source = TABLE.format(Target::C).to_string();
  /// assert!(source.contains("const int64_t *const tz64_year_starts = year_starts + 1;"));
  /// ```
  pub fn format(&self, target: Target) -> FormattedTable<'_> {
    FormattedTable { table: self, target }
  }
}

/// A cycle table with a requested output language.
pub struct FormattedTable<'a> {
  pub(crate) table: &'a CycleTable,
  pub(crate) target: Target,
}

impl Debug for FormattedTable<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    Display::fmt(self, f)
  }
}

impl Display for FormattedTable<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    let starts = self.table.padded_year_starts();
    let types = self.table.padded_year_types();
    match self.target {
      Target::C => {
        writeln!(f, "#include <inttypes.h>")?;
        writeln!(f, "#include \"constants.h\"")?;
        f.write_char('\n')?;

        writeln!(f, "// Seconds from the Unix epoch to January 1 of each year,")?;
        writeln!(f, "// {} through {}.", FIRST_PADDED_YEAR, LAST_PADDED_YEAR)?;
        writeln!(f, "static const int64_t year_starts[{}] = {{", TABLE_LEN)?;
        for start in starts {
          writeln!(f, "    INT64_C({}),", start)?;
        }
        writeln!(f, "}};")?;
        writeln!(f, "const int64_t *const tz64_year_starts = year_starts + 1;")?;
        f.write_char('\n')?;

        writeln!(f, "// Leap flag times seven plus the weekday of January 1 (Sunday is 0),")?;
        writeln!(f, "// {} through {}.", FIRST_PADDED_YEAR, LAST_PADDED_YEAR)?;
        writeln!(f, "static const uint8_t year_types[{}] = {{", TABLE_LEN)?;
        for line in types.chunks(TYPES_PER_LINE) {
          f.write_str("   ")?;
          for year_type in line {
            write!(f, " {},", year_type.code())?;
          }
          f.write_char('\n')?;
        }
        writeln!(f, "}};")?;
        writeln!(f, "const uint8_t *const tz64_year_types = year_types + 1;")?;
      },
      Target::Rust => {
        writeln!(f, "// Element 0 of each table is the year {}.", FIRST_PADDED_YEAR)?;
        f.write_char('\n')?;

        writeln!(f, "/// Seconds from the Unix epoch to January 1 of each year.")?;
        writeln!(f, "pub static YEAR_STARTS: [i64; {}] = [", TABLE_LEN)?;
        for start in starts {
          writeln!(f, "  {},", start)?;
        }
        writeln!(f, "];")?;
        f.write_char('\n')?;

        writeln!(f, "/// Leap flag times seven plus the weekday of January 1 (Sunday is 0).")?;
        writeln!(f, "pub static YEAR_TYPES: [u8; {}] = [", TABLE_LEN)?;
        for line in types.chunks(TYPES_PER_LINE) {
          f.write_char(' ')?;
          for year_type in line {
            write!(f, " {},", year_type.code())?;
          }
          f.write_char('\n')?;
        }
        writeln!(f, "];")?;
      },
    }
    Ok(())
  }
}

impl PartialEq<&str> for FormattedTable<'_> {
  fn eq(&self, other: &&str) -> bool {
    &self.to_string().as_str() == other
  }
}
