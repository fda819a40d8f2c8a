use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::Visitor;
use serde::ser::SerializeStruct;

use crate::CycleTable;
use crate::Weekday;
use crate::YearType;
use crate::consts::FIRST_PADDED_YEAR;

impl Serialize for YearType {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(self.code())
  }
}

impl Serialize for Weekday {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(self.number())
  }
}

impl Serialize for CycleTable {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_struct("CycleTable", 3)?;
    state.serialize_field("first_year", &FIRST_PADDED_YEAR)?;
    state.serialize_field("year_starts", &self.padded_year_starts()[..])?;
    state.serialize_field("year_types", &self.padded_year_types()[..])?;
    state.end()
  }
}

/// Visits a small unsigned integer and converts it with the target type's `TryFrom<u8>`.
struct CodeVisitor<T>(&'static str, std::marker::PhantomData<T>);

impl<T> Visitor<'_> for CodeVisitor<T>
where
  T: TryFrom<u8>,
  T::Error: fmt::Display,
{
  type Value = T;

  #[cfg(not(tarpaulin_include))]
  fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    formatter.write_str(self.0)
  }

  fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
    let code = u8::try_from(v).map_err(E::custom)?;
    T::try_from(code).map_err(E::custom)
  }

  fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
    let code = u8::try_from(v).map_err(E::custom)?;
    T::try_from(code).map_err(E::custom)
  }
}

impl<'de> Deserialize<'de> for YearType {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserializer
      .deserialize_u8(CodeVisitor("a year type code from 0 to 13", std::marker::PhantomData))
  }
}

impl<'de> Deserialize<'de> for Weekday {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserializer
      .deserialize_u8(CodeVisitor("a weekday number from 0 to 6", std::marker::PhantomData))
  }
}
