use thiserror::Error;

/// Reasons boundary data could not be obtained. Every variant means "no
/// boundary data for this zone"; callers skip or retry, they never abort.
#[derive(Error, Debug, PartialEq)]
pub enum BoundaryError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Boundary service answered with status {0}")]
    Status(u16),

    #[error("Response is not valid JSON: {0}")]
    Decode(String),

    #[error("Expected a FeatureCollection, got {0:?}")]
    NotAFeatureCollection(String),

    #[error("FeatureCollection has no features array")]
    MissingFeatures,

    #[error("FeatureCollection has an empty features array")]
    EmptyFeatures,

    #[error("Malformed geometry in feature {feature}: {reason}")]
    MalformedGeometry { feature: usize, reason: String },

    #[error("Invalid WKT: {0}")]
    Wkt(String),
}
