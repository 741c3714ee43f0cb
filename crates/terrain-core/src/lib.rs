//! Terrain classification from three sensor readings (vibration, slope,
//! humidity) with a multi-class RBF support-vector classifier.
//!
//! The model is trained once, at engine construction, on a deterministic
//! synthetic dataset (40 samples per class drawn uniformly from fixed
//! per-class feature ranges). After training the engine is immutable and
//! answers single-point classification queries.
//!
//! Pipeline:
//!   dataset generation → feature standardization →
//!   one-vs-rest Platt-calibrated SVM training → inference.

pub mod dataset;
pub mod engine;
pub mod error;
pub mod scaler;

pub use dataset::{generate_dataset, GenParams, Sample, TerrainClass};
pub use engine::{Prediction, TerrainEngine};
pub use error::EngineError;
pub use scaler::StandardScaler;
