//! Synthetic training set generation.
//!
//! Each terrain class has a hand-chosen uniform range per feature; samples
//! are drawn interleaved (one per class per round) from a seeded generator,
//! so the full set is identical across runs for a fixed seed.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Number of input features: vibration, slope, humidity.
pub const FEATURE_COUNT: usize = 3;

/// Closed set of terrain categories the classifier can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainClass {
    Flat,
    Muddy,
    Rocky,
    Sandy,
}

impl TerrainClass {
    pub const ALL: [TerrainClass; 4] = [
        TerrainClass::Flat,
        TerrainClass::Muddy,
        TerrainClass::Rocky,
        TerrainClass::Sandy,
    ];

    /// Human-readable display name.
    pub fn label(self) -> &'static str {
        match self {
            TerrainClass::Flat => "Flat",
            TerrainClass::Muddy => "Muddy",
            TerrainClass::Rocky => "Rocky",
            TerrainClass::Sandy => "Sandy",
        }
    }

    /// Stable class index, 0-3.
    pub fn index(self) -> usize {
        match self {
            TerrainClass::Flat => 0,
            TerrainClass::Muddy => 1,
            TerrainClass::Rocky => 2,
            TerrainClass::Sandy => 3,
        }
    }

    pub fn from_index(idx: usize) -> Option<TerrainClass> {
        TerrainClass::ALL.get(idx).copied()
    }

    /// Navigability verdict: only flat terrain is considered suitable for
    /// autonomous traversal.
    pub fn is_navigable(self) -> bool {
        matches!(self, TerrainClass::Flat)
    }
}

impl fmt::Display for TerrainClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-class uniform draw ranges, `(min, max)` half-open.
#[derive(Debug, Clone, Copy)]
pub struct FeatureRanges {
    /// Vibration in Hz.
    pub vibration: (f64, f64),
    /// Slope in percent.
    pub slope: (f64, f64),
    /// Humidity in percent.
    pub humidity: (f64, f64),
}

/// The fixed class table the synthetic set is drawn from.
pub fn ranges_for(class: TerrainClass) -> FeatureRanges {
    match class {
        TerrainClass::Flat => FeatureRanges {
            vibration: (2.0, 4.0),
            slope: (3.0, 6.0),
            humidity: (10.0, 25.0),
        },
        TerrainClass::Muddy => FeatureRanges {
            vibration: (4.0, 6.0),
            slope: (8.0, 12.0),
            humidity: (40.0, 60.0),
        },
        TerrainClass::Rocky => FeatureRanges {
            vibration: (6.0, 9.0),
            slope: (14.0, 20.0),
            humidity: (5.0, 15.0),
        },
        TerrainClass::Sandy => FeatureRanges {
            vibration: (3.0, 6.0),
            slope: (6.0, 12.0),
            humidity: (20.0, 40.0),
        },
    }
}

/// One labeled sensor reading. Immutable once generated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub vibration: f64,
    pub slope: f64,
    pub humidity: f64,
    pub class: TerrainClass,
}

impl Sample {
    pub fn features(&self) -> [f64; FEATURE_COUNT] {
        [self.vibration, self.slope, self.humidity]
    }
}

/// Dataset generation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenParams {
    pub seed: u64,
    pub samples_per_class: usize,
}

impl Default for GenParams {
    fn default() -> Self {
        Self {
            seed: 42,
            samples_per_class: 40,
        }
    }
}

/// Generate the labeled synthetic dataset: `samples_per_class` rounds, one
/// sample per class per round, each feature drawn uniformly from the class
/// range. Deterministic for a fixed seed.
pub fn generate_dataset(params: &GenParams) -> Vec<Sample> {
    let mut rng = StdRng::seed_from_u64(params.seed);
    let mut samples = Vec::with_capacity(params.samples_per_class * TerrainClass::ALL.len());

    for _ in 0..params.samples_per_class {
        for class in TerrainClass::ALL {
            let r = ranges_for(class);
            samples.push(Sample {
                vibration: rng.gen_range(r.vibration.0..r.vibration.1),
                slope: rng.gen_range(r.slope.0..r.slope.1),
                humidity: rng.gen_range(r.humidity.0..r.humidity.1),
                class,
            });
        }
    }

    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_yield_40_samples_per_class() {
        let samples = generate_dataset(&GenParams::default());
        assert_eq!(samples.len(), 160);

        for class in TerrainClass::ALL {
            let n = samples.iter().filter(|s| s.class == class).count();
            assert_eq!(n, 40, "{class} should have 40 samples");
        }
    }

    #[test]
    fn every_sample_lies_within_its_class_ranges() {
        for sample in generate_dataset(&GenParams::default()) {
            let r = ranges_for(sample.class);
            assert!(
                sample.vibration >= r.vibration.0 && sample.vibration < r.vibration.1,
                "vibration {} out of range for {}",
                sample.vibration,
                sample.class
            );
            assert!(
                sample.slope >= r.slope.0 && sample.slope < r.slope.1,
                "slope {} out of range for {}",
                sample.slope,
                sample.class
            );
            assert!(
                sample.humidity >= r.humidity.0 && sample.humidity < r.humidity.1,
                "humidity {} out of range for {}",
                sample.humidity,
                sample.class
            );
        }
    }

    #[test]
    fn same_seed_reproduces_identical_dataset() {
        let params = GenParams::default();
        let a = generate_dataset(&params);
        let b = generate_dataset(&params);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge() {
        let a = generate_dataset(&GenParams {
            seed: 1,
            ..GenParams::default()
        });
        let b = generate_dataset(&GenParams {
            seed: 2,
            ..GenParams::default()
        });
        assert_ne!(a, b);
    }

    #[test]
    fn class_index_roundtrips() {
        for class in TerrainClass::ALL {
            assert_eq!(TerrainClass::from_index(class.index()), Some(class));
        }
        assert_eq!(TerrainClass::from_index(4), None);
    }

    #[test]
    fn only_flat_is_navigable() {
        assert!(TerrainClass::Flat.is_navigable());
        assert!(!TerrainClass::Muddy.is_navigable());
        assert!(!TerrainClass::Rocky.is_navigable());
        assert!(!TerrainClass::Sandy.is_navigable());
    }
}
