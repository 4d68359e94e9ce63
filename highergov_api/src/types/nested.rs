//! Polymorphic nested references.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::de::scalar_text;

/// A reference field that the API sends either as an object, as a bare
/// scalar (usually the code or the display name), or not at all.
///
/// Decoding never fails: objects that cannot be read as `T`, arrays and
/// `null` all become [`Nested::Absent`].
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<T> {
    Object(T),
    Scalar(String),
    Absent,
}

impl<T> Default for Nested<T> {
    fn default() -> Self {
        Nested::Absent
    }
}

impl<T: DeserializeOwned> Nested<T> {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value)
                .map(Nested::Object)
                .unwrap_or(Nested::Absent),
            Value::Null | Value::Array(_) => Nested::Absent,
            scalar => scalar_text(scalar)
                .map(Nested::Scalar)
                .unwrap_or(Nested::Absent),
        }
    }
}

impl<T> Nested<T> {
    /// The resolved value for the field's primary sub-field: taken from the
    /// object when there is one, otherwise the bare scalar itself.
    pub fn primary<F>(&self, pick: F) -> Option<String>
    where
        F: FnOnce(&T) -> Option<String>,
    {
        match self {
            Nested::Object(inner) => pick(inner),
            Nested::Scalar(value) => Some(value.clone()),
            Nested::Absent => None,
        }
    }

    /// A secondary sub-field, only available when the reference is an object.
    pub fn field<V, F>(&self, pick: F) -> Option<V>
    where
        F: FnOnce(&T) -> Option<V>,
    {
        self.object().and_then(pick)
    }

    pub fn object(&self) -> Option<&T> {
        match self {
            Nested::Object(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Nested::Absent)
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Nested<T> {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Nested::from_value(Value::deserialize(d)?))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Nested;
    use crate::types::NaicsRef;

    fn code(value: serde_json::Value) -> Option<String> {
        Nested::<NaicsRef>::from_value(value).primary(|n| n.naics_code.clone())
    }

    #[test]
    fn object_and_scalar_resolve_identically() {
        assert_eq!(code(json!("541512")), Some("541512".to_string()));
        assert_eq!(
            code(json!({"naics_code": "541512"})),
            Some("541512".to_string())
        );
        assert_eq!(code(json!(541512)), Some("541512".to_string()));
    }

    #[test]
    fn missing_shapes_resolve_to_none() {
        assert_eq!(code(json!(null)), None);
        assert_eq!(code(json!([])), None);
        assert_eq!(code(json!("")), None);
        assert_eq!(code(json!({})), None);
    }

    #[test]
    fn secondary_fields_need_an_object() {
        let scalar = Nested::<NaicsRef>::from_value(json!("541512"));
        assert_eq!(scalar.field(|n| n.naics_description.clone()), None);

        let object = Nested::<NaicsRef>::from_value(
            json!({"naics_code": "541512", "naics_description": "Computer Systems Design"}),
        );
        assert_eq!(
            object.field(|n| n.naics_description.clone()).as_deref(),
            Some("Computer Systems Design")
        );
    }

    #[test]
    fn wrongly_typed_object_fields_do_not_fail() {
        let nested = Nested::<NaicsRef>::from_value(json!({"naics_code": ["x"], "extra": 1}));
        assert!(matches!(nested, Nested::Object(_)));
        assert_eq!(nested.primary(|n| n.naics_code.clone()), None);
    }
}
