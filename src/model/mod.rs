//! # Address Data Model
//!
//! The single entity of the system: a delivery address with a
//! system-assigned id, two free-text components, an enumerated category,
//! and a map-derived coordinate.
//!
//! Wire field names are camelCase (`houseNumber`), matching both the HTTP
//! contract and the database columns, so records round-trip without aliasing.
//!
//! Validation is centralized here: [`validate`] is the one required-field
//! check, applied identically by the create and update handlers before any
//! store operation runs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Address category, stored and transmitted as its display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum Category {
    Home,
    Office,
    #[serde(rename = "Friends & Family")]
    #[sqlx(rename = "Friends & Family")]
    FriendsAndFamily,
}

impl Category {
    /// All valid category values, in display order.
    pub const ALL: [Category; 3] = [Category::Home, Category::Office, Category::FriendsAndFamily];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Home => "Home",
            Category::Office => "Office",
            Category::FriendsAndFamily => "Friends & Family",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Home
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Home" => Ok(Category::Home),
            "Office" => Ok(Category::Office),
            "Friends & Family" => Ok(Category::FriendsAndFamily),
            other => Err(ValidationError::UnknownCategory(other.to_string())),
        }
    }
}

/// A persisted address row.
///
/// `id` is assigned exactly once at insert and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AddressRecord {
    pub id: i64,
    #[sqlx(rename = "houseNumber")]
    pub house_number: String,
    pub road: String,
    pub category: Category,
    pub latitude: f64,
    pub longitude: f64,
}

/// The raw request body for create and update.
///
/// Every field is optional at the serde level so that a missing or null
/// field reaches [`validate`] and produces a 400, rather than being
/// rejected by the JSON extractor with a different status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressPayload {
    #[serde(default)]
    pub house_number: Option<String>,
    #[serde(default)]
    pub road: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// A fully validated set of writable fields, ready for the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInput {
    pub house_number: String,
    pub road: String,
    pub category: Category,
    pub latitude: f64,
    pub longitude: f64,
}

/// Validation failures for the five writable fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required: missing {0}")]
    MissingField(&'static str),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("{0} out of range")]
    CoordinateOutOfRange(&'static str),
}

/// The shared required-field check.
///
/// All five fields must be present and non-blank; the category must be one
/// of the three known values; coordinates must be finite and within
/// geographic range. A coordinate of exactly 0.0 is valid.
pub fn validate(payload: &AddressPayload) -> Result<AddressInput, ValidationError> {
    let house_number = required_text(payload.house_number.as_deref(), "houseNumber")?;
    let road = required_text(payload.road.as_deref(), "road")?;
    let category = payload
        .category
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or(ValidationError::MissingField("category"))?
        .parse::<Category>()?;
    let latitude = required_coordinate(payload.latitude, "latitude", 90.0)?;
    let longitude = required_coordinate(payload.longitude, "longitude", 180.0)?;

    Ok(AddressInput {
        house_number,
        road,
        category,
        latitude,
        longitude,
    })
}

fn required_text(value: Option<&str>, field: &'static str) -> Result<String, ValidationError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s.to_string()),
        _ => Err(ValidationError::MissingField(field)),
    }
}

fn required_coordinate(
    value: Option<f64>,
    field: &'static str,
    bound: f64,
) -> Result<f64, ValidationError> {
    let v = value.ok_or(ValidationError::MissingField(field))?;
    if !v.is_finite() || v.abs() > bound {
        return Err(ValidationError::CoordinateOutOfRange(field));
    }
    Ok(v)
}

impl AddressPayload {
    /// Build a payload from already-typed fields (client-side submit path).
    pub fn from_input(input: &AddressInput) -> Self {
        Self {
            house_number: Some(input.house_number.clone()),
            road: Some(input.road.clone()),
            category: Some(input.category.as_str().to_string()),
            latitude: Some(input.latitude),
            longitude: Some(input.longitude),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> AddressPayload {
        AddressPayload {
            house_number: Some("12B".to_string()),
            road: Some("Oak Street".to_string()),
            category: Some("Home".to_string()),
            latitude: Some(20.5368),
            longitude: Some(76.1809),
        }
    }

    #[test]
    fn test_valid_payload_passes() {
        let input = validate(&full_payload()).unwrap();
        assert_eq!(input.house_number, "12B");
        assert_eq!(input.road, "Oak Street");
        assert_eq!(input.category, Category::Home);
        assert_eq!(input.latitude, 20.5368);
        assert_eq!(input.longitude, 76.1809);
    }

    #[test]
    fn test_missing_fields_rejected() {
        for strip in 0..5 {
            let mut payload = full_payload();
            match strip {
                0 => payload.house_number = None,
                1 => payload.road = None,
                2 => payload.category = None,
                3 => payload.latitude = None,
                _ => payload.longitude = None,
            }
            assert!(matches!(
                validate(&payload),
                Err(ValidationError::MissingField(_))
            ));
        }
    }

    #[test]
    fn test_blank_text_rejected() {
        let mut payload = full_payload();
        payload.house_number = Some("   ".to_string());
        assert_eq!(
            validate(&payload),
            Err(ValidationError::MissingField("houseNumber"))
        );

        let mut payload = full_payload();
        payload.road = Some(String::new());
        assert_eq!(validate(&payload), Err(ValidationError::MissingField("road")));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let mut payload = full_payload();
        payload.category = Some("Warehouse".to_string());
        assert_eq!(
            validate(&payload),
            Err(ValidationError::UnknownCategory("Warehouse".to_string()))
        );
    }

    #[test]
    fn test_zero_coordinate_is_valid() {
        let mut payload = full_payload();
        payload.latitude = Some(0.0);
        payload.longitude = Some(0.0);
        assert!(validate(&payload).is_ok());
    }

    #[test]
    fn test_out_of_range_coordinates_rejected() {
        let mut payload = full_payload();
        payload.latitude = Some(90.5);
        assert_eq!(
            validate(&payload),
            Err(ValidationError::CoordinateOutOfRange("latitude"))
        );

        let mut payload = full_payload();
        payload.longitude = Some(-180.001);
        assert_eq!(
            validate(&payload),
            Err(ValidationError::CoordinateOutOfRange("longitude"))
        );

        let mut payload = full_payload();
        payload.latitude = Some(f64::NAN);
        assert!(validate(&payload).is_err());
    }

    #[test]
    fn test_category_round_trips_through_text() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert!("home".parse::<Category>().is_err());
    }

    #[test]
    fn test_record_uses_wire_field_names() {
        let record = AddressRecord {
            id: 7,
            house_number: "12B".to_string(),
            road: "Oak Street".to_string(),
            category: Category::FriendsAndFamily,
            latitude: 20.5368,
            longitude: 76.1809,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["houseNumber"], "12B");
        assert_eq!(json["category"], "Friends & Family");
        assert!(json.get("house_number").is_none());
    }
}
