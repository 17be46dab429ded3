//! `serde` support: a [`BigInteger`] is written and read as its decimal string.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::BigInteger;

impl Serialize for BigInteger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct BigIntegerVisitor;

impl<'de> Visitor<'de> for BigIntegerVisitor {
    type Value = BigInteger;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a decimal integer string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<BigInteger, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<BigInteger, E> {
        Ok(BigInteger::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<BigInteger, E> {
        Ok(BigInteger::from(v))
    }
}

impl<'de> Deserialize<'de> for BigInteger {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<BigInteger, D::Error> {
        deserializer.deserialize_any(BigIntegerVisitor)
    }
}
