//! Decoding of the `{ response: { header, body: { items: { item } } } }` envelope.
//!
//! The upstream family is loose about empty results: `item` may be missing, `items` may be an
//! empty string, and a single hit arrives as an object instead of a one-element array. All of
//! that is normalized here so callers only ever see a `Vec`.

use crate::error::{AvailabilityError, AvailabilityErrorExt};
use erbeds_domain::constants::RESULT_CODE_OK;
use erbeds_domain::hospital::HospitalRecord;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
struct Envelope {
    #[serde(default)]
    response: Option<Response>,
}

#[derive(Debug, Default, Deserialize)]
struct Response {
    #[serde(default)]
    header: Option<Header>,
    #[serde(default)]
    body: Option<Body>,
}

#[derive(Debug, Default, Deserialize)]
struct Header {
    #[serde(rename = "resultCode", default)]
    result_code: Option<String>,
    #[serde(rename = "resultMsg", default)]
    result_msg: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Body {
    #[serde(default, deserialize_with = "items_or_blank")]
    items: Option<Items>,
}

#[derive(Debug, Default, Deserialize)]
struct Items {
    #[serde(default, deserialize_with = "item_or_blank")]
    item: OneOrMany<HospitalRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(Box<T>),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![*item],
        }
    }
}

/// An empty result set is sometimes sent as `"items": ""`.
fn items_or_blank<'de, D>(deserializer: D) -> Result<Option<Items>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value(value).map(Some).map_err(D::Error::custom),
        _ => Ok(None),
    }
}

/// Zero hits may also arrive as `"item": null` or `"item": ""`.
fn item_or_blank<'de, D>(deserializer: D) -> Result<OneOrMany<HospitalRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null | Value::String(_) => Ok(OneOrMany::default()),
        value => serde_json::from_value(value).map_err(D::Error::custom),
    }
}

/// Decodes a raw response body into hospital records in upstream order.
///
/// A missing `response`, `body`, `items` or `item` yields an empty list.
///
/// # Errors
/// * [`AvailabilityError::Upstream`] if the header carries a non-`"00"` `resultCode`, or the
///   body is the XML error document the gateway sends for rejected service keys.
/// * [`AvailabilityError::Decode`] if the body is not a JSON envelope.
pub fn decode_items(body: &[u8]) -> Result<Vec<HospitalRecord>, AvailabilityError> {
    if let Some(err) = xml_gateway_error(body) {
        return Err(err);
    }

    let envelope: Envelope =
        serde_json::from_slice(body).context("Decoding bed availability envelope")?;
    let Some(response) = envelope.response else {
        return Ok(Vec::new());
    };

    if let Some(Header { result_code: Some(code), result_msg }) = response.header
        && code != RESULT_CODE_OK
    {
        return Err(AvailabilityError::Upstream {
            code: code.into(),
            message: result_msg.unwrap_or_default().into(),
            context: None,
        });
    }

    Ok(response
        .body
        .and_then(|body| body.items)
        .map(|items| items.item.into_vec())
        .unwrap_or_default())
}

/// The API gateway answers authentication failures in XML whatever `_type` says.
fn xml_gateway_error(body: &[u8]) -> Option<AvailabilityError> {
    let text = std::str::from_utf8(body).ok()?.trim_start();
    if !text.starts_with('<') {
        return None;
    }

    let message = ["returnAuthMsg", "errMsg", "resultMsg"]
        .iter()
        .find_map(|tag| xml_text(text, tag))
        .unwrap_or("non-JSON response");
    let code = xml_text(text, "returnReasonCode").or_else(|| xml_text(text, "resultCode"));

    Some(AvailabilityError::Upstream {
        code: code.unwrap_or("xml").to_owned().into(),
        message: message.to_owned().into(),
        context: None,
    })
}

fn xml_text<'a>(text: &'a str, tag: &str) -> Option<&'a str> {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");
    let start = text.find(&open)? + open.len();
    let end = start + text[start..].find(&close)?;
    Some(text[start..end].trim())
}
