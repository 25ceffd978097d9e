use serde::Serialize;
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::{Database, Decode, Encode};
use std::num::ParseIntError;
use std::str::FromStr;

mod deserialize;

/// Integer primary key of a row in the store.
///
/// Deserializes from JSON integers, integral floats and numeric strings since clients send all of them.
#[derive(
	derive_more::From,
	derive_more::Into,
	derive_more::Display,
	Serialize,
	Debug,
	Clone,
	Copy,
	PartialEq,
	Eq,
	PartialOrd,
	Ord,
	Hash,
)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
	pub const fn new(id: i64) -> Self {
		Self(id)
	}

	pub const fn is_zero(self) -> bool {
		self.0 == 0
	}
}

impl FromStr for RecordId {
	type Err = ParseIntError;

	fn from_str(text: &str) -> Result<Self, Self::Err> {
		text.trim().parse().map(Self)
	}
}

impl<'r, Db> Decode<'r, Db> for RecordId
where
	Db: Database,
	i64: Decode<'r, Db>,
{
	fn decode(value: <Db as Database>::ValueRef<'r>) -> Result<Self, BoxDynError> {
		i64::decode(value).map(RecordId)
	}
}

impl<'q, Db> Encode<'q, Db> for RecordId
where
	Db: Database,
	i64: Encode<'q, Db>,
{
	fn encode_by_ref(&self, buffer: &mut <Db as Database>::ArgumentBuffer<'q>) -> Result<IsNull, BoxDynError> {
		self.0.encode_by_ref(buffer)
	}
}

impl<Db> sqlx::Type<Db> for RecordId
where
	Db: Database,
	i64: sqlx::Type<Db>,
{
	fn type_info() -> Db::TypeInfo {
		i64::type_info()
	}

	fn compatible(type_info: &Db::TypeInfo) -> bool {
		i64::compatible(type_info)
	}
}
