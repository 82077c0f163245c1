//! Integer ids that clients may send as JSON numbers or numeric strings.
//!
//! Use with `#[serde(deserialize_with = "common::ids::id")]`, or
//! `#[serde(default, deserialize_with = "common::ids::opt_id")]` when the
//! field may be absent or `null`.

use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Str(String),
}

fn to_i32<E: de::Error>(raw: RawId) -> Result<i32, E> {
    match raw {
        RawId::Int(n) => i32::try_from(n).map_err(|_| E::custom(format!("id {} out of range", n))),
        RawId::Str(s) => s.trim().parse::<i32>().map_err(|_| E::custom(format!("invalid id {:?}", s))),
    }
}

pub fn id<'de, D: Deserializer<'de>>(d: D) -> Result<i32, D::Error> {
    to_i32(RawId::deserialize(d)?)
}

pub fn opt_id<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i32>, D::Error> {
    Option::<RawId>::deserialize(d)?.map(to_i32).transpose()
}
