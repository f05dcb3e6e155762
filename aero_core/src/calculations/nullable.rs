//! Deserialize helpers for result values that may be NaN or infinite.
//!
//! JSON has no NaN or infinity, so `serde_json` writes them as `null`. These
//! helpers read `null` back as NaN so results survive a JSON round trip.
//! Use with `#[serde(deserialize_with = "...")]` on `f64` and `Vec<f64>`
//! fields.

use serde::{Deserialize, Deserializer};

/// Read an `f64`, mapping `null` to NaN.
pub fn f64_or_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// Read a `Vec<f64>`, mapping each `null` entry to NaN.
pub fn vec_f64_or_nan<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<Option<f64>>::deserialize(deserializer)?;
    Ok(values.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
}
