//! Per-feature standardization (zero mean, unit variance).
//!
//! Fit exactly once on the full training matrix and reused unchanged for
//! every future inference input.

use serde::{Deserialize, Serialize};

use crate::dataset::FEATURE_COUNT;

/// Fitted standardization transform. Immutable after `fit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    means: [f64; FEATURE_COUNT],
    stds: [f64; FEATURE_COUNT],
}

impl StandardScaler {
    /// Fit per-column mean and population standard deviation.
    /// A zero-variance column standardizes as a pass-through (std = 1).
    pub fn fit(rows: &[[f64; FEATURE_COUNT]]) -> Self {
        let n = rows.len().max(1) as f64;

        let mut means = [0.0; FEATURE_COUNT];
        for row in rows {
            for (m, v) in means.iter_mut().zip(row) {
                *m += v;
            }
        }
        for m in &mut means {
            *m /= n;
        }

        let mut stds = [0.0; FEATURE_COUNT];
        for row in rows {
            for ((s, v), m) in stds.iter_mut().zip(row).zip(&means) {
                *s += (v - m) * (v - m);
            }
        }
        for s in &mut stds {
            *s = (*s / n).sqrt();
            if *s == 0.0 {
                *s = 1.0;
            }
        }

        Self { means, stds }
    }

    /// Standardize one feature row.
    pub fn transform(&self, row: [f64; FEATURE_COUNT]) -> [f64; FEATURE_COUNT] {
        let mut out = [0.0; FEATURE_COUNT];
        for i in 0..FEATURE_COUNT {
            out[i] = (row[i] - self.means[i]) / self.stds[i];
        }
        out
    }

    pub fn means(&self) -> &[f64; FEATURE_COUNT] {
        &self.means
    }

    pub fn stds(&self) -> &[f64; FEATURE_COUNT] {
        &self.stds
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::dataset::{generate_dataset, GenParams, Sample};

    #[test]
    fn transformed_training_matrix_has_zero_mean_unit_variance() {
        let rows: Vec<[f64; FEATURE_COUNT]> = generate_dataset(&GenParams::default())
            .iter()
            .map(Sample::features)
            .collect();
        let scaler = StandardScaler::fit(&rows);
        let scaled: Vec<[f64; FEATURE_COUNT]> =
            rows.iter().map(|&r| scaler.transform(r)).collect();

        let n = scaled.len() as f64;
        for col in 0..FEATURE_COUNT {
            let mean: f64 = scaled.iter().map(|r| r[col]).sum::<f64>() / n;
            let var: f64 = scaled.iter().map(|r| (r[col] - mean).powi(2)).sum::<f64>() / n;
            assert_abs_diff_eq!(mean, 0.0, epsilon = 1e-9);
            assert_abs_diff_eq!(var, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn constant_column_passes_through_centered() {
        let rows = vec![[5.0, 1.0, 0.0], [5.0, 3.0, 0.0]];
        let scaler = StandardScaler::fit(&rows);
        let out = scaler.transform([5.0, 2.0, 0.0]);
        assert_abs_diff_eq!(out[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(out[1], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(out[2], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn transform_is_affine_in_the_input() {
        let rows = vec![[0.0, 0.0, 0.0], [2.0, 4.0, 8.0]];
        let scaler = StandardScaler::fit(&rows);
        // mean = (1, 2, 4), std = (1, 2, 4)
        let out = scaler.transform([3.0, 6.0, 12.0]);
        assert_abs_diff_eq!(out[0], 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(out[1], 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(out[2], 2.0, epsilon = 1e-12);
    }
}
