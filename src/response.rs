//! Wire models for the two ExoFOP JSON payloads and the lenient field
//! extractors that go with them.
//!
//! ExoFOP is loose about types: numeric fields arrive as JSON numbers or as
//! strings, sometimes padded with whitespace, sometimes absent. Every
//! extractor here therefore takes `serde_json::Value` and converts
//! defensively, yielding `None` instead of failing on a single bad field.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Body of `gototicid.php`: either `{status: "OK", TIC: ...}` or
/// `{status: ..., message: ...}`.
#[derive(Debug, Deserialize)]
pub(crate) struct TicLookupResponse {
    pub status: String,
    #[serde(rename = "TIC")]
    pub tic: Option<Value>,
    pub message: Option<String>,
}

/// Body of `target.php`, reduced to the blocks the client reads.
#[derive(Debug, Deserialize)]
pub(crate) struct TargetResponse {
    #[serde(default)]
    pub coordinates: Coordinates,
    #[serde(default)]
    pub stellar_parameters: Vec<Map<String, Value>>,
    #[serde(default)]
    pub magnitudes: Vec<MagnitudeEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Coordinates {
    pub ra: Option<Value>,
    pub dec: Option<Value>,
    pub pm_ra: Option<Value>,
    pub pm_dec: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MagnitudeEntry {
    pub band: Option<Value>,
    pub value: Option<Value>,
}

/// Converts a loose JSON value to a finite f64, accepting numbers and
/// numeric strings. Anything else is `None`.
pub(crate) fn safe_float(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Converts a loose JSON value to a TIC integer, accepting numbers and
/// numeric strings.
pub(crate) fn tic_id(value: Option<&Value>) -> Option<u64> {
    match value? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}

/// First V-band magnitude among the `magnitudes` entries.
///
/// Band comparison is case-insensitive after trimming. An entry whose band
/// matches but whose value does not convert is skipped, not an error.
pub(crate) fn v_band_magnitude(magnitudes: &[MagnitudeEntry]) -> Option<f64> {
    magnitudes.iter().find_map(|entry| {
        let band = entry.band.as_ref()?.as_str()?;
        if band.trim().eq_ignore_ascii_case("v") {
            safe_float(entry.value.as_ref())
        } else {
            None
        }
    })
}

/// First convertible `dist` field (parsecs) among the stellar-parameter
/// entries. Entries without one, or with a non-numeric one, are skipped.
pub(crate) fn measured_distance_pc(stellar_parameters: &[Map<String, Value>]) -> Option<f64> {
    stellar_parameters
        .iter()
        .find_map(|entry| safe_float(entry.get("dist")))
}
