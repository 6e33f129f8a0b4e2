//! Incoming employee records and their feature-vector form.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::encoding::{self, EncodingError};
use super::schema::{self, FEATURE_COUNT};

/// One employee's attributes as received: an unordered field → value map.
///
/// Kept as raw JSON so that field presence can be validated in canonical
/// order and missing fields reported by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttritionRecord(pub Map<String, Value>);

impl AttritionRecord {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

/// Errors raised while turning a record into a feature vector. All of these
/// are faults in the request, not in the service.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("Missing field in request: {0}")]
    MissingField(&'static str),
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    #[error("Field {0} must be a number")]
    NotNumeric(&'static str),
}

/// The ordered numeric input consumed by the classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    /// Builds the vector from a request record.
    ///
    /// Fields are checked in the canonical schema order, so the first missing
    /// field (by that order) is the one reported. Categorical fields are
    /// label-encoded, numeric fields must arrive as JSON numbers, and the
    /// slots past the 28 real fields stay zero.
    pub fn from_record(record: &AttritionRecord) -> Result<Self, RecordError> {
        let mut features = [0.0; FEATURE_COUNT];

        for (slot, &field) in schema::REQUIRED_FIELDS.iter().enumerate() {
            let value = record.get(field).ok_or(RecordError::MissingField(field))?;

            features[slot] = match (schema::legal_values(field), value) {
                (Some(_), Value::String(raw)) => f64::from(encoding::encode(field, raw)?),
                (Some(_), other) => {
                    return Err(EncodingError::UnknownValue {
                        category: field.to_string(),
                        value: other.to_string(),
                    }
                    .into())
                }
                (None, Value::Number(number)) => {
                    number.as_f64().ok_or(RecordError::NotNumeric(field))?
                }
                (None, _) => return Err(RecordError::NotNumeric(field)),
            };
        }

        Ok(Self(features))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}
