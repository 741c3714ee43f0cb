//! Terrain engine: owns the synthetic dataset, the fitted scaler, and one
//! Platt-calibrated Gaussian SVM per class (one-vs-rest).
//!
//! Training happens exactly once, inside the `train` factory; afterwards the
//! engine is read-only and serves arbitrarily many classification queries.

use std::cmp::Ordering;

use linfa::dataset::Pr;
use linfa::prelude::*;
use linfa_svm::Svm;
use ndarray::{Array1, Array2};
use serde::Serialize;

use crate::dataset::{generate_dataset, GenParams, Sample, TerrainClass, FEATURE_COUNT};
use crate::error::EngineError;
use crate::scaler::StandardScaler;

/// Regularization constant for every one-vs-rest machine.
const SVM_C: f64 = 10.0;

/// Gaussian kernel width: exp(-||a-b||² / eps) with eps = number of
/// features, i.e. gamma = 1/3 on standardized inputs.
const KERNEL_EPS: f64 = FEATURE_COUNT as f64;

/// Result of a single classification query.
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub class: TerrainClass,
    /// Display name of the predicted class.
    pub label: &'static str,
    /// Maximum per-class probability, as a percentage in [0, 100].
    pub confidence_pct: f64,
    /// Normalized one-vs-rest probabilities, indexed by class index.
    pub probabilities: [f64; 4],
    /// True only when the predicted class is Flat.
    pub navigable: bool,
}

/// Trained terrain classifier. Immutable after construction.
pub struct TerrainEngine {
    samples: Vec<Sample>,
    scaler: StandardScaler,
    /// One binary machine per class, indexed by `TerrainClass::index()`.
    machines: Vec<Svm<f64, Pr>>,
}

impl TerrainEngine {
    /// Generate the synthetic dataset, fit the scaler, and train one
    /// Platt-calibrated Gaussian SVM per class against the rest.
    ///
    /// Deterministic for a fixed seed: identical datasets, scaler
    /// parameters, and decision boundaries across constructions.
    pub fn train(params: &GenParams) -> Result<Self, EngineError> {
        let samples = generate_dataset(params);
        let rows: Vec<[f64; FEATURE_COUNT]> = samples.iter().map(Sample::features).collect();
        let scaler = StandardScaler::fit(&rows);

        let mut flat = Vec::with_capacity(rows.len() * FEATURE_COUNT);
        for &row in &rows {
            flat.extend_from_slice(&scaler.transform(row));
        }
        let records = Array2::from_shape_vec((rows.len(), FEATURE_COUNT), flat)
            .map_err(|_| EngineError::Numeric("training matrix shape"))?;

        let mut machines = Vec::with_capacity(TerrainClass::ALL.len());
        for class in TerrainClass::ALL {
            let targets: Array1<bool> = samples.iter().map(|s| s.class == class).collect();
            let dataset = DatasetBase::new(records.clone(), targets);
            let svm = Svm::<f64, Pr>::params()
                .pos_neg_weights(SVM_C, SVM_C)
                .gaussian_kernel(KERNEL_EPS)
                .fit(&dataset)?;
            machines.push(svm);
        }

        Ok(Self {
            samples,
            scaler,
            machines,
        })
    }

    /// Classify one sensor reading.
    ///
    /// Inputs are unconstrained finite reals; out-of-range readings are
    /// extrapolated by the model rather than rejected. Non-finite readings
    /// and degenerate probability estimates come back as typed errors, never
    /// panics.
    pub fn classify(
        &self,
        vibration: f64,
        slope: f64,
        humidity: f64,
    ) -> Result<Prediction, EngineError> {
        for (value, field) in [
            (vibration, "vibration"),
            (slope, "slope"),
            (humidity, "humidity"),
        ] {
            if !value.is_finite() {
                return Err(EngineError::NonFiniteInput { field });
            }
        }

        let scaled = self.scaler.transform([vibration, slope, humidity]);
        let query = Array2::from_shape_vec((1, FEATURE_COUNT), scaled.to_vec())
            .map_err(|_| EngineError::Numeric("query shape"))?;

        // One-vs-rest class probabilities, normalized to sum to 1.
        let mut probs = [0.0f64; 4];
        for (p, svm) in probs.iter_mut().zip(&self.machines) {
            let out: Array1<Pr> = svm.predict(&query);
            *p = f64::from(*out[0]);
        }

        let total: f64 = probs.iter().sum();
        if !total.is_finite() || total <= 0.0 {
            return Err(EngineError::Numeric("probability mass vanished"));
        }
        for p in &mut probs {
            *p /= total;
        }

        let (best_idx, best_p) = probs
            .iter()
            .copied()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
            .ok_or(EngineError::Numeric("empty probability vector"))?;
        let class = TerrainClass::from_index(best_idx)
            .ok_or(EngineError::Numeric("class index out of range"))?;

        Ok(Prediction {
            class,
            label: class.label(),
            confidence_pct: (best_p * 100.0).clamp(0.0, 100.0),
            probabilities: probs,
            navigable: class.is_navigable(),
        })
    }

    /// The full training set, kept for post-hoc plotting.
    pub fn dataset(&self) -> &[Sample] {
        &self.samples
    }

    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }
}
