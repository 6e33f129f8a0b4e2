//! Classifier loading and inference.
//!
//! The trained model ships as a JSON artifact exported from the training
//! pipeline: per-feature weights, an intercept, and a decision threshold. The
//! service scores it natively rather than embedding a Python runtime, the
//! same approach projects take when exporting sklearn models to generated
//! native scorers. The artifact is loaded once at startup; a load failure is
//! fatal because every subsequent prediction would fail anyway.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::attrition::record::FeatureVector;
use crate::attrition::schema::FEATURE_COUNT;

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),
    #[error("model artifact is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("model expects {actual} features, service schema provides {expected}")]
    FeatureCountMismatch { expected: usize, actual: usize },
}

/// The one operation the service needs from a trained model.
///
/// Object-safe so the HTTP layer and tests can hold `Arc<dyn Classifier>` and
/// substitute mocks for the real artifact.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<i32, ModelError>;
}

#[derive(Debug, Deserialize)]
struct ArtifactFile {
    weights: Vec<f64>,
    intercept: f64,
    #[serde(default = "default_threshold")]
    threshold: f64,
}

fn default_threshold() -> f64 {
    0.5
}

/// Logistic scorer over the fixed feature vector. Class 1 is "will attrit".
#[derive(Debug)]
pub struct LinearModel {
    weights: Vec<f64>,
    intercept: f64,
    threshold: f64,
}

impl LinearModel {
    pub fn from_path(path: &Path) -> Result<Self, ModelError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ModelError> {
        let artifact: ArtifactFile = serde_json::from_reader(reader)?;

        if artifact.weights.len() != FEATURE_COUNT {
            return Err(ModelError::FeatureCountMismatch {
                expected: FEATURE_COUNT,
                actual: artifact.weights.len(),
            });
        }

        Ok(Self {
            weights: artifact.weights,
            intercept: artifact.intercept,
            threshold: artifact.threshold,
        })
    }

    fn probability(&self, features: &FeatureVector) -> f64 {
        let score: f64 = self
            .weights
            .iter()
            .zip(features.as_slice())
            .map(|(weight, value)| weight * value)
            .sum::<f64>()
            + self.intercept;

        1.0 / (1.0 + (-score).exp())
    }
}

impl Classifier for LinearModel {
    fn predict(&self, features: &FeatureVector) -> Result<i32, ModelError> {
        Ok(i32::from(self.probability(features) >= self.threshold))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrition::record::AttritionRecord;
    use serde_json::json;
    use std::io::Cursor;

    fn artifact_json(weights: Vec<f64>, intercept: f64) -> String {
        json!({ "weights": weights, "intercept": intercept }).to_string()
    }

    fn zero_vector() -> FeatureVector {
        // All-zero numerics plus first-position categoricals encode to an
        // all-zero vector, so only the intercept drives the score.
        let mut map = serde_json::Map::new();
        for field in crate::attrition::schema::REQUIRED_FIELDS {
            let value = match crate::attrition::schema::legal_values(field) {
                Some(values) => json!(values[0]),
                None => json!(0),
            };
            map.insert(field.to_string(), value);
        }
        FeatureVector::from_record(&AttritionRecord(map)).expect("zero record encodes")
    }

    #[test]
    fn loads_artifact_with_matching_feature_count() {
        let raw = artifact_json(vec![0.0; FEATURE_COUNT], -1.0);
        let model = LinearModel::from_reader(Cursor::new(raw)).expect("artifact loads");
        assert_eq!(model.threshold, 0.5);
    }

    #[test]
    fn rejects_artifact_with_wrong_feature_count() {
        let raw = artifact_json(vec![0.0; 28], 0.0);
        let err = LinearModel::from_reader(Cursor::new(raw)).expect_err("shape mismatch rejected");
        assert!(matches!(
            err,
            ModelError::FeatureCountMismatch {
                expected: FEATURE_COUNT,
                actual: 28
            }
        ));
    }

    #[test]
    fn rejects_malformed_artifact() {
        let err = LinearModel::from_reader(Cursor::new("not json")).expect_err("garbage rejected");
        assert!(matches!(err, ModelError::Malformed(_)));
    }

    #[test]
    fn negative_intercept_predicts_class_zero_on_zero_vector() {
        let raw = artifact_json(vec![0.0; FEATURE_COUNT], -2.0);
        let model = LinearModel::from_reader(Cursor::new(raw)).expect("artifact loads");
        assert_eq!(model.predict(&zero_vector()).expect("predicts"), 0);
    }

    #[test]
    fn positive_intercept_predicts_class_one_on_zero_vector() {
        let raw = artifact_json(vec![0.0; FEATURE_COUNT], 2.0);
        let model = LinearModel::from_reader(Cursor::new(raw)).expect("artifact loads");
        assert_eq!(model.predict(&zero_vector()).expect("predicts"), 1);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = LinearModel::from_path(Path::new("/nonexistent/attrition_model.json"))
            .expect_err("missing file rejected");
        assert!(matches!(err, ModelError::Io(_)));
    }
}
