use crate::types::record_id::RecordId;
use serde::de::{Unexpected, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt::Formatter;

impl<'de> Deserialize<'de> for RecordId {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_any(RecordIdVisitor)
	}
}

struct RecordIdVisitor;

impl RecordIdVisitor {
	const EXPECTING: &'static str = "an integer, an integral float or a string containing an integer";
}

impl Visitor<'_> for RecordIdVisitor {
	type Value = RecordId;

	fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
		formatter.write_str(Self::EXPECTING)
	}

	fn visit_i64<E>(self, number: i64) -> Result<Self::Value, E>
	where
		E: serde::de::Error,
	{
		Ok(RecordId::new(number))
	}

	fn visit_u64<E>(self, number: u64) -> Result<Self::Value, E>
	where
		E: serde::de::Error,
	{
		i64::try_from(number)
			.map(RecordId::new)
			.map_err(|_| E::invalid_value(Unexpected::Unsigned(number), &Self::EXPECTING))
	}

	fn visit_f64<E>(self, number: f64) -> Result<Self::Value, E>
	where
		E: serde::de::Error,
	{
		// 2^63 is exactly representable, everything below it fits into an i64
		const UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;
		if !number.is_finite() || number.fract() != 0.0 || number.abs() >= UPPER_BOUND {
			return Err(E::invalid_value(Unexpected::Float(number), &Self::EXPECTING));
		}

		#[allow(clippy::cast_possible_truncation)]
		let integer = number as i64;
		Ok(RecordId::new(integer))
	}

	fn visit_str<E>(self, text: &str) -> Result<Self::Value, E>
	where
		E: serde::de::Error,
	{
		text.parse()
			.map_err(|_| E::invalid_value(Unexpected::Str(text), &Self::EXPECTING))
	}
}
