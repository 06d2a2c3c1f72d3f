//! Key space and payloads of the CST simulation value channel.
//!
//! CST exposes named values over Zenoh:
//!
//! - `<prefix>/desiredSpeed`: commanded speed, read and written
//! - `<prefix>/totalFuelLoad`: fuel load in kg, read only
//! - `<prefix>/operation/<name>`: fire-and-forget operation calls

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::serialization::{Format, decode_auto, encode};

/// Default key expression prefix for the CST value channel.
pub const KEY_PREFIX: &str = "helmview/cst";

/// Name of the commanded speed value.
pub const DESIRED_SPEED: &str = "desiredSpeed";

/// Name of the fuel load value.
pub const TOTAL_FUEL_LOAD: &str = "totalFuelLoad";

/// Builder for CST key expressions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CstKeys {
    prefix: String,
}

impl Default for CstKeys {
    fn default() -> Self {
        Self::new(KEY_PREFIX)
    }
}

impl CstKeys {
    /// Create a key builder with a custom prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into().trim_end_matches('/').to_string(),
        }
    }

    /// Key for a named value.
    ///
    /// # Example
    /// ```
    /// use helmview_common::cst::CstKeys;
    ///
    /// let keys = CstKeys::default();
    /// assert_eq!(keys.value("desiredSpeed"), "helmview/cst/desiredSpeed");
    /// ```
    pub fn value(&self, name: &str) -> String {
        format!("{}/{}", self.prefix, name)
    }

    pub fn desired_speed(&self) -> String {
        self.value(DESIRED_SPEED)
    }

    pub fn total_fuel_load(&self) -> String {
        self.value(TOTAL_FUEL_LOAD)
    }

    /// Key for an operation call.
    pub fn operation(&self, name: &str) -> String {
        format!("{}/operation/{}", self.prefix, name)
    }

    /// Wildcard matching every value under the prefix.
    pub fn wildcard(&self) -> String {
        format!("{}/*", self.prefix)
    }

    /// Extract the value name from a key under this prefix.
    pub fn value_name<'k>(&self, key: &'k str) -> Option<&'k str> {
        key.strip_prefix(self.prefix.as_str())?
            .strip_prefix('/')
            .filter(|name| !name.is_empty() && !name.contains('/'))
    }
}

/// A value update received from CST.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CstValue {
    /// New commanded speed (unclamped).
    DesiredSpeed(f32),
    /// New fuel load in kg, `None` when CST reports no usable value.
    TotalFuelLoad(Option<f64>),
}

/// Decode a sample published on `name`.
///
/// Returns `None` for values the dashboard does not track and for a
/// desiredSpeed that is not a finite number.
pub fn decode_value(name: &str, payload: &[u8]) -> Option<CstValue> {
    match name {
        DESIRED_SPEED => {
            let speed: f64 = decode_auto(payload).ok()?;
            speed.is_finite().then_some(CstValue::DesiredSpeed(speed as f32))
        }
        TOTAL_FUEL_LOAD => {
            let load = decode_auto::<Option<serde_json::Value>>(payload)
                .ok()
                .flatten()
                .and_then(|v| numeric(&v))
                .filter(|v| v.is_finite());
            Some(CstValue::TotalFuelLoad(load))
        }
        _ => None,
    }
}

/// CST adapters publish numbers either bare or as numeric strings.
fn numeric(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Encode a commanded speed for publication.
pub fn encode_desired_speed(speed: f32, format: Format) -> Result<Vec<u8>> {
    encode(&f64::from(speed), format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys() {
        let keys = CstKeys::new("ship/cst/");
        assert_eq!(keys.desired_speed(), "ship/cst/desiredSpeed");
        assert_eq!(keys.total_fuel_load(), "ship/cst/totalFuelLoad");
        assert_eq!(keys.operation("SetCondition1"), "ship/cst/operation/SetCondition1");
        assert_eq!(keys.wildcard(), "ship/cst/*");
    }

    #[test]
    fn test_value_name() {
        let keys = CstKeys::default();
        assert_eq!(keys.value_name("helmview/cst/desiredSpeed"), Some("desiredSpeed"));
        assert_eq!(keys.value_name("helmview/cst/operation/x"), None);
        assert_eq!(keys.value_name("other/desiredSpeed"), None);
        assert_eq!(keys.value_name("helmview/cst/"), None);
    }

    #[test]
    fn test_decode_desired_speed() {
        assert_eq!(
            decode_value(DESIRED_SPEED, b"18"),
            Some(CstValue::DesiredSpeed(18.0))
        );
        let cbor = encode_desired_speed(25.0, Format::Cbor).unwrap();
        assert_eq!(
            decode_value(DESIRED_SPEED, &cbor),
            Some(CstValue::DesiredSpeed(25.0))
        );
        assert_eq!(decode_value(DESIRED_SPEED, b"null"), None);
        assert_eq!(decode_value(DESIRED_SPEED, b"\"fast\""), None);
    }

    #[test]
    fn test_decode_fuel_load() {
        assert_eq!(
            decode_value(TOTAL_FUEL_LOAD, b"1520.5"),
            Some(CstValue::TotalFuelLoad(Some(1520.5)))
        );
        assert_eq!(
            decode_value(TOTAL_FUEL_LOAD, b"\"980\""),
            Some(CstValue::TotalFuelLoad(Some(980.0)))
        );
        assert_eq!(
            decode_value(TOTAL_FUEL_LOAD, b"null"),
            Some(CstValue::TotalFuelLoad(None))
        );
        assert_eq!(
            decode_value(TOTAL_FUEL_LOAD, b"\"n/a\""),
            Some(CstValue::TotalFuelLoad(None))
        );
    }

    #[test]
    fn test_unknown_value() {
        assert_eq!(decode_value("rudderAngle", b"3"), None);
    }
}
