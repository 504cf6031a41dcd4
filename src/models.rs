//! Data models and structures used throughout the storefront
//!
//! The catalog API is served straight out of MySQL, so flags arrive as
//! `0`/`1`, decimals sometimes arrive as strings and JSON columns sometimes
//! arrive still encoded. Every record here deserializes defensively: a
//! malformed optional field becomes `None`, and a row that cannot be decoded at
//! all is dropped from its list rather than failing it.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Standard `{success|status, data, message}` wrapper around every response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Layout and social media routes answer with `success: true`
    pub fn success_flag(&self) -> bool {
        self.success == Some(true)
    }

    /// House type and contact routes answer with `status: "success"`
    pub fn status_is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }

    pub fn is_ok(&self) -> bool {
        self.success_flag() || self.status_is_success()
    }
}

impl ApiEnvelope<Vec<Value>> {
    /// Decodes each row on its own. Rows that do not fit `T` are dropped and
    /// counted instead of failing the whole list.
    pub fn decode_rows<T: DeserializeOwned>(self) -> (ApiEnvelope<Vec<T>>, usize) {
        let mut skipped = 0;
        let data = self.data.map(|rows| {
            rows.into_iter()
                .filter_map(|row| match serde_json::from_value(row) {
                    Ok(item) => Some(item),
                    Err(_) => {
                        skipped += 1;
                        None
                    }
                })
                .collect()
        });
        let envelope = ApiEnvelope {
            success: self.success,
            status: self.status,
            data,
            message: self.message,
        };
        (envelope, skipped)
    }
}

/// A saved furniture arrangement, as listed in the gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub room_width: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub room_length: Option<f64>,
    #[serde(default, deserialize_with = "lenient::furniture")]
    pub furniture: Option<Vec<FurnitureItem>>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub thumbnail_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_public: bool,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub created_at: Option<String>,
}

/// One placed piece of furniture inside a layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureItem {
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub name: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient::opt_text")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub x: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub y: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub rotation: Option<f64>,
    /// Designer-specific attributes we pass through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A house type from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseType {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price_start: f64,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub type_category: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub land_size: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub building_size: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub bedrooms: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub bathrooms: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub floors: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub carport: u32,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub features: Vec<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub display_order: u32,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_active: bool,
}

/// Footer social link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialMediaLink {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub platform: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub url: String,
}

/// What the visitor typed into the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Body of `POST /api/contact`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Name of the first empty required field, if any. Phone is optional.
    pub fn missing_required(&self) -> Option<&'static str> {
        if self.name.is_empty() {
            Some("name")
        } else if self.email.is_empty() {
            Some("email")
        } else if self.message.is_empty() {
            Some("message")
        } else {
            None
        }
    }

    /// Folds the property name into the subject and the phone into the body
    pub fn to_payload(&self, property_name: &str) -> ContactPayload {
        ContactPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: format!("Pertanyaan tentang {}", property_name),
            message: format!("Telepon: {}\n\n{}", self.phone, self.message),
        }
    }

    pub fn clear(&mut self) {
        *self = ContactMessage::default();
    }
}

mod lenient {
    use super::FurnitureItem;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn value_to_number(value: &Value) -> Option<f64> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
        .filter(|n| n.is_finite())
    }

    pub fn opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(value_to_number(&value))
    }

    pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(opt_number(deserializer)?.unwrap_or(0.0))
    }

    pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let n = opt_number(deserializer)?.unwrap_or(0.0);
        Ok(if n <= 0.0 { 0 } else { n.min(u32::MAX as f64) as u32 })
    }

    pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Bool(b) => b,
            Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
            Value::String(s) => matches!(s.trim().to_lowercase().as_str(), "1" | "true"),
            _ => false,
        })
    }

    pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
    }

    pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(opt_text(deserializer)?.unwrap_or_default())
    }

    pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let items = match value {
            Value::Array(items) => items,
            // JSON column that was never decoded server-side
            Value::String(raw) => match serde_json::from_str::<Value>(&raw) {
                Ok(Value::Array(items)) => items,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };
        Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect())
    }

    pub fn furniture<'de, D>(deserializer: D) -> Result<Option<Vec<FurnitureItem>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Array(items) => Some(
                items
                    .into_iter()
                    .filter_map(|item| serde_json::from_value(item).ok())
                    .collect(),
            ),
            _ => None,
        })
    }
}
