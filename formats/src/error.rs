use thiserror::Error;

/// Errors for a single feature during transformation.  None of these abort a batch, the
/// offending feature is skipped and reported.
///
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TransformError {
    #[error("feature #{index}: missing field {field}")]
    MissingField { index: usize, field: &'static str },
    #[error("feature #{index}: invalid feature: {reason}")]
    Invalid { index: usize, reason: String },
    #[error("feature #{index}: bad timestamp {time}")]
    BadTime { index: usize, time: i64 },
}

impl TransformError {
    /// Position of the feature in its collection
    ///
    pub fn index(&self) -> usize {
        match self {
            TransformError::MissingField { index, .. }
            | TransformError::Invalid { index, .. }
            | TransformError::BadTime { index, .. } => *index,
        }
    }
}

/// Errors on the whole document, before looking at individual features.
///
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("not a GeoJSON FeatureCollection: {0}")]
    NotFeatureCollection(#[from] serde_json::Error),
    #[error("unexpected GeoJSON type {0}")]
    BadType(String),
}
