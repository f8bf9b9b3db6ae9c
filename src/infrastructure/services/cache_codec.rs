//! Text encoding of cached values.
//!
//! Cached values are JSON documents. JSON has no representation for NaN or
//! the infinities, so typed records carrying floats opt into
//! [`non_finite_f64`], which writes them as the strings `"NaN"`,
//! `"Infinity"` and `"-Infinity"` and reads them back.

use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum CacheCodecError {
    #[error("Error de serialización: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Codifica un valor para almacenarlo como texto
pub fn encode(value: &Value) -> Result<String, CacheCodecError> {
    Ok(serde_json::to_string(value)?)
}

/// Decodifica un valor almacenado
pub fn decode(text: &str) -> Result<Value, CacheCodecError> {
    Ok(serde_json::from_str(text)?)
}

/// serde helper for `f64` fields that may hold non-finite values.
///
/// Opt-in for typed cache records: use with `#[serde(with = "non_finite_f64")]`.
/// Translation records carry no floats, and values held as
/// `serde_json::Value` cannot contain NaN, so nothing cached here uses it yet.
/// Finite numbers stay JSON numbers; a numeric string is also accepted on read.
pub mod non_finite_f64 {
    use serde::de::{self, Deserializer, Visitor};
    use serde::Serializer;
    use std::fmt;

    pub const NAN: &str = "NaN";
    pub const INFINITY: &str = "Infinity";
    pub const NEG_INFINITY: &str = "-Infinity";

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_str(NAN)
        } else if *value == f64::INFINITY {
            serializer.serialize_str(INFINITY)
        } else if *value == f64::NEG_INFINITY {
            serializer.serialize_str(NEG_INFINITY)
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        deserializer.deserialize_any(F64Visitor)
    }

    struct F64Visitor;

    impl<'de> Visitor<'de> for F64Visitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number or one of \"NaN\", \"Infinity\", \"-Infinity\"")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            match v {
                NAN => Ok(f64::NAN),
                INFINITY => Ok(f64::INFINITY),
                NEG_INFINITY => Ok(f64::NEG_INFINITY),
                other => other.parse::<f64>().map_err(|_| E::invalid_value(de::Unexpected::Str(other), &self)),
            }
        }
    }
}
