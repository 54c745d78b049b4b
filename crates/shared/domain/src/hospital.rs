//! Hospital record as returned by the upstream bed-availability API.

use crate::status::BedStatus;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A single hospital entry of the upstream `item` list.
///
/// Only the name, the ER bed count (`hvec`) and the ER phone (`dutyTel3`) are interpreted.
/// Every other upstream field is kept verbatim in [`HospitalRecord::extra`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HospitalRecord {
    #[serde(rename = "dutyName", default, deserialize_with = "text_or_empty")]
    pub name: String,

    /// Available ER beds; `None` means the hospital did not report, not zero.
    #[serde(
        rename = "hvec",
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub available_beds: Option<i64>,

    #[serde(
        rename = "dutyTel3",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HospitalRecord {
    pub fn new(name: impl Into<String>, available_beds: Option<i64>, phone: Option<&str>) -> Self {
        Self {
            name: name.into(),
            available_beds,
            phone: phone.map(str::to_owned),
            extra: Map::new(),
        }
    }

    #[must_use]
    pub const fn status(&self) -> BedStatus {
        BedStatus::classify(self.available_beds)
    }

    /// Looks up a passthrough field such as `hpid` or `hvidate`.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

/// Accepts a JSON number or a numeric string; anything else reads as "not reported".
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(truncate_count)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    })
}

#[allow(clippy::cast_possible_truncation)]
fn truncate_count(value: f64) -> i64 {
    value as i64
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_text(deserializer).map(Option::unwrap_or_default)
}
