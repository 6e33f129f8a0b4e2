//! Attrition prediction domain: schema, encoding, records, and the HTTP
//! surface for scoring them.

pub mod encoding;
pub mod record;
pub mod router;
pub mod schema;
pub mod service;

pub use encoding::EncodingError;
pub use record::{AttritionRecord, FeatureVector, RecordError};
pub use router::prediction_router;
pub use service::{PredictionError, PredictionService};
