//! JSON-safe (de)serialization for values that may be NaN or infinite
//!
//! JSON has no non-finite numbers and `serde_json` writes them as `null`.
//! These helpers write `"NaN"`, `"Infinity"` or `"-Infinity"` instead, and
//! read those labels, plain numbers and `null` (as NaN) back.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonFloat {
    Number(f64),
    Label(String),
}

fn label(value: f64) -> &'static str {
    if value.is_nan() {
        "NaN"
    } else if value > 0.0 {
        "Infinity"
    } else {
        "-Infinity"
    }
}

fn decode(raw: Option<JsonFloat>) -> Result<f64, String> {
    match raw {
        None => Ok(f64::NAN),
        Some(JsonFloat::Number(value)) => Ok(value),
        Some(JsonFloat::Label(text)) => match text.as_str() {
            "NaN" => Ok(f64::NAN),
            "Infinity" => Ok(f64::INFINITY),
            "-Infinity" => Ok(f64::NEG_INFINITY),
            other => Err(format!("unrecognized float label '{}'", other)),
        },
    }
}

struct Lossless(f64);

impl Serialize for Lossless {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_finite() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.serialize_str(label(self.0))
        }
    }
}

/// Single `f64` field: `#[serde(with = "crate::float_serde")]`
pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    Lossless(*value).serialize(serializer)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let raw = Option::<JsonFloat>::deserialize(deserializer)?;
    decode(raw).map_err(D::Error::custom)
}

/// `Vec<f64>` field: `#[serde(with = "crate::float_serde::vec")]`
pub mod vec {
    use super::{decode, JsonFloat, Lossless};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().map(|v| Lossless(*v)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
        Vec::<Option<JsonFloat>>::deserialize(deserializer)?
            .into_iter()
            .map(|raw| decode(raw).map_err(D::Error::custom))
            .collect()
    }
}
