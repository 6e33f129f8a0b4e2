use std::sync::Arc;

use tracing::{debug, error};

use super::record::{AttritionRecord, FeatureVector, RecordError};
use crate::model::{Classifier, ModelError};

/// Service composing the feature encoder and the loaded classifier.
///
/// Constructed once at startup with the classifier injected, then shared
/// read-only across requests.
pub struct PredictionService<C> {
    classifier: Arc<C>,
}

#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    /// The request itself was at fault: missing field, unknown categorical
    /// value, or a non-numeric value in a numeric field.
    #[error(transparent)]
    Record(#[from] RecordError),
    /// Inference failed; detail stays in the logs, not the response.
    #[error("Internal server error")]
    Model(#[from] ModelError),
}

impl<C> PredictionService<C>
where
    C: Classifier + 'static,
{
    pub fn new(classifier: Arc<C>) -> Self {
        Self { classifier }
    }

    /// Encodes the record and returns the classifier's predicted label.
    pub fn predict(&self, record: &AttritionRecord) -> Result<i32, PredictionError> {
        debug!(payload = %serde_json::Value::Object(record.0.clone()), "received prediction request");

        let features = FeatureVector::from_record(record)?;

        match self.classifier.predict(&features) {
            Ok(label) => Ok(label),
            Err(err) => {
                error!(%err, "classifier inference failed");
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrition::schema::{self, FEATURE_COUNT};
    use serde_json::json;
    use std::sync::Mutex;

    struct RecordingClassifier {
        seen: Mutex<Vec<Vec<f64>>>,
        label: i32,
    }

    impl RecordingClassifier {
        fn new(label: i32) -> Self {
            Self {
                seen: Mutex::new(Vec::new()),
                label,
            }
        }
    }

    impl Classifier for RecordingClassifier {
        fn predict(&self, features: &FeatureVector) -> Result<i32, ModelError> {
            self.seen
                .lock()
                .expect("mutex poisoned")
                .push(features.as_slice().to_vec());
            Ok(self.label)
        }
    }

    struct FailingClassifier;

    impl Classifier for FailingClassifier {
        fn predict(&self, _features: &FeatureVector) -> Result<i32, ModelError> {
            Err(ModelError::FeatureCountMismatch {
                expected: FEATURE_COUNT,
                actual: 0,
            })
        }
    }

    fn valid_record() -> AttritionRecord {
        let mut map = serde_json::Map::new();
        for field in schema::REQUIRED_FIELDS {
            let value = match schema::legal_values(field) {
                Some(values) => json!(values[values.len() - 1]),
                None => json!(1),
            };
            map.insert(field.to_string(), value);
        }
        AttritionRecord(map)
    }

    #[test]
    fn passes_full_width_vector_to_classifier() {
        let classifier = Arc::new(RecordingClassifier::new(1));
        let service = PredictionService::new(classifier.clone());

        let label = service.predict(&valid_record()).expect("prediction succeeds");
        assert_eq!(label, 1);

        let seen = classifier.seen.lock().expect("mutex poisoned");
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].len(), FEATURE_COUNT);
        assert!(seen[0][28..].iter().all(|slot| *slot == 0.0));
    }

    #[test]
    fn record_faults_are_client_errors() {
        let service = PredictionService::new(Arc::new(RecordingClassifier::new(0)));
        let mut record = valid_record();
        record.0.remove("Age");

        let err = service.predict(&record).expect_err("missing field rejected");
        assert!(matches!(err, PredictionError::Record(_)));
        assert_eq!(err.to_string(), "Missing field in request: Age");
    }

    #[test]
    fn model_faults_stay_generic() {
        let service = PredictionService::new(Arc::new(FailingClassifier));

        let err = service
            .predict(&valid_record())
            .expect_err("inference failure surfaces");
        assert!(matches!(err, PredictionError::Model(_)));
        assert_eq!(err.to_string(), "Internal server error");
    }
}
