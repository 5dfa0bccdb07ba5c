//! Taxi record and the typed payloads that create and modify it.

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{DEFAULT_DRIVER, DEFAULT_STATUS, ValidationError};

/// Backend-assigned identity of a taxi record.
pub type TaxiId = i64;

/// A taxi in the fleet.
///
/// `id` is assigned by the backend at creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxi {
    pub id: TaxiId,
    pub number: String,
    pub driver: String,
    pub status: String,
}

impl Taxi {
    /// Attaches a backend-assigned identity to validated fields.
    #[must_use]
    pub fn new(id: TaxiId, fields: TaxiFields) -> Self {
        let TaxiFields { number, driver, status } = fields;
        Self { id, number, driver, status }
    }

    /// Exact, case-sensitive status match.
    #[must_use]
    pub fn has_status(&self, status: &str) -> bool {
        self.status == status
    }
}

/// Creation fields after validation, with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxiFields {
    pub number: String,
    pub driver: String,
    pub status: String,
}

/// Create payload. Only `number` is required.
///
/// Unknown JSON keys are ignored and `null` counts as absent. Only a JSON
/// object is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PayloadFields")]
pub struct NewTaxi {
    pub number: Option<String>,
    pub driver: Option<String>,
    pub status: Option<String>,
}

impl NewTaxi {
    #[must_use]
    pub fn new(number: impl Into<String>) -> Self {
        Self { number: Some(number.into()), ..Self::default() }
    }

    #[must_use]
    pub fn driver(mut self, driver: impl Into<String>) -> Self {
        self.driver = Some(driver.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Checks the required `number` and fills in `driver` and `status` defaults.
    ///
    /// # Errors
    /// Returns [`ValidationError`] when `number` is absent or empty.
    pub fn into_fields(self) -> Result<TaxiFields, ValidationError> {
        let number = self.number.ok_or(ValidationError::MissingField("number"))?;
        if number.is_empty() {
            return Err(ValidationError::EmptyField("number"));
        }
        Ok(TaxiFields {
            number,
            driver: self.driver.unwrap_or_else(|| DEFAULT_DRIVER.to_owned()),
            status: self.status.unwrap_or_else(|| DEFAULT_STATUS.to_owned()),
        })
    }
}

/// Partial update. Absent fields keep their current value; `id` is not writable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PayloadFields")]
pub struct TaxiPatch {
    pub number: Option<String>,
    pub driver: Option<String>,
    pub status: Option<String>,
}

impl TaxiPatch {
    #[must_use]
    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    #[must_use]
    pub fn driver(mut self, driver: impl Into<String>) -> Self {
        self.driver = Some(driver.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.number.is_none() && self.driver.is_none() && self.status.is_none()
    }

    /// A patch may not blank out the required `number`.
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyField`] when `number` is present but empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.number.as_deref() {
            Some("") => Err(ValidationError::EmptyField("number")),
            _ => Ok(()),
        }
    }

    /// Overwrites each present field of `taxi`, leaving the rest untouched.
    #[must_use]
    pub fn apply(self, mut taxi: Taxi) -> Taxi {
        if let Some(number) = self.number {
            taxi.number = number;
        }
        if let Some(driver) = self.driver {
            taxi.driver = driver;
        }
        if let Some(status) = self.status {
            taxi.status = status;
        }
        taxi
    }
}

/// Wire form shared by [`NewTaxi`] and [`TaxiPatch`].
///
/// The derived struct visitor also fills fields from a positional sequence,
/// so a bare array could pass as a payload. This one only visits maps.
#[derive(Default)]
struct PayloadFields {
    number: Option<String>,
    driver: Option<String>,
    status: Option<String>,
}

impl From<PayloadFields> for NewTaxi {
    fn from(fields: PayloadFields) -> Self {
        let PayloadFields { number, driver, status } = fields;
        Self { number, driver, status }
    }
}

impl From<PayloadFields> for TaxiPatch {
    fn from(fields: PayloadFields) -> Self {
        let PayloadFields { number, driver, status } = fields;
        Self { number, driver, status }
    }
}

impl<'de> Deserialize<'de> for PayloadFields {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PayloadVisitor)
    }
}

struct PayloadVisitor;

impl<'de> Visitor<'de> for PayloadVisitor {
    type Value = PayloadFields;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a JSON object with any of number, driver, status")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut fields = PayloadFields::default();
        let mut seen: Vec<&'static str> = Vec::new();
        while let Some(key) = map.next_key::<String>()? {
            let (name, slot) = match key.as_str() {
                "number" => ("number", &mut fields.number),
                "driver" => ("driver", &mut fields.driver),
                "status" => ("status", &mut fields.status),
                _ => {
                    map.next_value::<IgnoredAny>()?;
                    continue;
                },
            };
            if seen.contains(&name) {
                return Err(de::Error::duplicate_field(name));
            }
            seen.push(name);
            *slot = map.next_value()?;
        }
        Ok(fields)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test code")]
mod tests {
    use super::*;

    fn sample() -> Taxi {
        Taxi {
            id: 7,
            number: "123ABC".to_owned(),
            driver: "Ivan".to_owned(),
            status: "free".to_owned(),
        }
    }

    #[test]
    fn new_taxi_applies_defaults() {
        let fields = NewTaxi::new("123ABC").into_fields().unwrap();
        assert_eq!(fields.number, "123ABC");
        assert_eq!(fields.driver, DEFAULT_DRIVER);
        assert_eq!(fields.status, DEFAULT_STATUS);
    }

    #[test]
    fn new_taxi_keeps_given_fields() {
        let fields = NewTaxi::new("999XYZ").driver("Olga").status("busy").into_fields().unwrap();
        assert_eq!(fields.driver, "Olga");
        assert_eq!(fields.status, "busy");
    }

    #[test]
    fn new_taxi_without_number_is_rejected() {
        let input = NewTaxi { number: None, driver: Some("Olga".to_owned()), status: None };
        assert_eq!(input.into_fields(), Err(ValidationError::MissingField("number")));
    }

    #[test]
    fn new_taxi_with_empty_number_is_rejected() {
        assert_eq!(NewTaxi::new("").into_fields(), Err(ValidationError::EmptyField("number")));
    }

    #[test]
    fn new_taxi_ignores_unknown_keys_and_nulls() {
        let input: NewTaxi =
            serde_json::from_str(r#"{"number":"A1","driver":null,"colour":"yellow"}"#).unwrap();
        assert_eq!(input, NewTaxi::new("A1"));
    }

    #[test]
    fn payloads_reject_positional_arrays() {
        assert!(serde_json::from_str::<NewTaxi>(r#"["X1","d","s"]"#).is_err());
        assert!(serde_json::from_str::<TaxiPatch>(r#"["N","d","s"]"#).is_err());
        assert!(serde_json::from_str::<TaxiPatch>("\"busy\"").is_err());
    }

    #[test]
    fn payloads_reject_duplicate_keys() {
        let err = serde_json::from_str::<TaxiPatch>(r#"{"status":"busy","status":"free"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("duplicate field `status`"));
    }

    #[test]
    fn patch_reads_object_fields() {
        let patch: TaxiPatch =
            serde_json::from_str(r#"{"number":"N1","status":null,"extra":[1,2]}"#).unwrap();
        assert_eq!(patch, TaxiPatch::default().number("N1"));
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let patch = TaxiPatch::default();
        assert!(patch.is_empty());
        assert_eq!(patch.apply(sample()), sample());
    }

    #[test]
    fn patch_overwrites_only_present_fields() {
        let updated = TaxiPatch::default().status("busy").apply(sample());
        assert_eq!(updated.status, "busy");
        assert_eq!(updated.number, "123ABC");
        assert_eq!(updated.driver, "Ivan");
        assert_eq!(updated.id, 7);
    }

    #[test]
    fn patch_cannot_write_id() {
        let patch: TaxiPatch = serde_json::from_str(r#"{"id":99,"driver":"Olga"}"#).unwrap();
        let updated = patch.apply(sample());
        assert_eq!(updated.id, 7);
        assert_eq!(updated.driver, "Olga");
    }

    #[test]
    fn patch_rejects_blank_number() {
        assert!(TaxiPatch::default().number("").validate().is_err());
        assert!(TaxiPatch::default().number("B2").validate().is_ok());
        assert!(TaxiPatch::default().validate().is_ok());
    }

    #[test]
    fn status_match_is_case_sensitive() {
        let taxi = sample();
        assert!(taxi.has_status("free"));
        assert!(!taxi.has_status("Free"));
    }

    #[test]
    fn taxi_serializes_to_flat_record() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 7, "number": "123ABC", "driver": "Ivan", "status": "free"})
        );
    }
}
