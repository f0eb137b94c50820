use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Label shown for optional listing fields that are absent.
pub const NOT_AVAILABLE: &str = "N/A";

/// Identifier of a listing (`Cid` in the source data).
///
/// The source mixes numeric and textual ids, so both are accepted and
/// compared as given: `1` and `"1"` are different listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CarId {
    Number(i64),
    Text(String),
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for CarId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for CarId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

/// Asking price (`Prc`). Kept verbatim for display, numeric or preformatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(Number),
    Text(String),
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amount(amount) => write!(f, "{amount}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// One used-car listing as it appears in the `Cars` array.
///
/// Fields the dashboard does not read are kept in `extra` so a highlighted
/// record is written back to storage exactly as it was loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarRecord {
    #[serde(rename = "Cid")]
    pub id: CarId,
    #[serde(rename = "NameMMT")]
    pub display_name: String,
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "Prc", default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "Province", default, skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(rename = "Img100", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CarRecord {
    pub fn new(id: impl Into<CarId>, display_name: &str, model: &str) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.to_string(),
            model: model.to_string(),
            price: None,
            status: None,
            province: None,
            image_url: None,
            extra: Map::new(),
        }
    }

    /// Brand part of the display name, see [`crate::aggregate::company_of`].
    pub fn company(&self) -> &str {
        crate::aggregate::company_of(&self.display_name)
    }

    pub fn price_label(&self) -> String {
        self.price
            .as_ref()
            .map_or_else(|| NOT_AVAILABLE.to_string(), |price| format!("{price} Baht"))
    }

    pub fn status_label(&self) -> &str {
        non_empty_or_na(self.status.as_deref())
    }

    pub fn province_label(&self) -> &str {
        non_empty_or_na(self.province.as_deref())
    }
}

fn non_empty_or_na(value: Option<&str>) -> &str {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => NOT_AVAILABLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_text_ids_deserialize() -> Result<(), serde_json::Error> {
        let numeric: CarId = serde_json::from_str("42")?;
        let text: CarId = serde_json::from_str("\"A-42\"")?;

        assert_eq!(numeric, CarId::Number(42));
        assert_eq!(text, CarId::Text("A-42".to_string()));
        assert_ne!(CarId::from(1), CarId::from("1"));
        Ok(())
    }

    #[test]
    fn unknown_fields_survive_a_round_trip() -> Result<(), serde_json::Error> {
        let raw = r#"{"Cid":7,"NameMMT":"Mazda 2","Model":"2","Prc":"459,000","Yr":2019}"#;
        let car: CarRecord = serde_json::from_str(raw)?;

        assert_eq!(car.extra.get("Yr"), Some(&Value::from(2019)));
        assert_eq!(car.price_label(), "459,000 Baht");

        let written: Value = serde_json::to_value(&car)?;
        let original: Value = serde_json::from_str(raw)?;
        assert_eq!(written, original);
        Ok(())
    }

    #[test]
    fn missing_optional_fields_render_as_not_available() {
        let mut car = CarRecord::new(1, "Honda Civic", "Civic");
        car.status = Some(String::new());

        assert_eq!(car.status_label(), NOT_AVAILABLE);
        assert_eq!(car.province_label(), NOT_AVAILABLE);
        assert_eq!(car.price_label(), NOT_AVAILABLE);
    }
}
