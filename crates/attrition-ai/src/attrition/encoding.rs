//! Label encoding for categorical request fields.
//!
//! Mirrors the encoders fitted at training time: a category value's code is
//! its zero-based position in the legal-value list from
//! [`schema::CATEGORY_TABLES`](super::schema::CATEGORY_TABLES). Pure lookup
//! over static tables; nothing here mutates after process start.

use super::schema;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EncodingError {
    #[error("Unknown value '{value}' for {category}")]
    UnknownValue { category: String, value: String },
    #[error("'{0}' is not a categorical field")]
    NotCategorical(String),
}

/// Encodes `value` for the categorical field `category`.
///
/// Returns the value's position in the category's legal-value list, or
/// [`EncodingError::UnknownValue`] if the value was never seen in training.
pub fn encode(category: &str, value: &str) -> Result<u32, EncodingError> {
    let values = schema::legal_values(category)
        .ok_or_else(|| EncodingError::NotCategorical(category.to_string()))?;

    values
        .iter()
        .position(|legal| *legal == value)
        .map(|index| index as u32)
        .ok_or_else(|| EncodingError::UnknownValue {
            category: category.to_string(),
            value: value.to_string(),
        })
}
