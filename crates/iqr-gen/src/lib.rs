//! iqr-gen - Synthetic one-dimensional datasets with planted outliers
//!
//! Three recipes are registered by name:
//!
//! - **gaussian**: 200 normal draws around 20 (σ = 10) with uniform noise
//! - **extreme**: a uniform bulk in [25, 50) with 5 low and 5 high extremes
//! - **gaussian+extreme**: a normal bulk around 30 with two small far clusters
//!
//! Every call owns its random source, so results depend only on the seed.
//! Unrecognised recipe or format names fall back to a default; the
//! substitution is logged and returned to the caller as a [`FallbackNotice`].
//!
//! # Example
//!
//! ```
//! use iqr_gen::generate_outliers_1d;
//!
//! let out = generate_outliers_1d("extreme", "raw", 42);
//! assert!(out.is_exact());
//! assert_eq!(out.value.values().len(), 200);
//! ```

pub mod fallback;
pub mod output;
pub mod recipes;
pub mod registry;

pub use fallback::{FallbackNotice, Resolved};
pub use output::{GeneratedData, LabeledColumn, OutputFormat, VALUES_COLUMN};
pub use recipes::{GaussianExtremes, GaussianNoise, UniformExtremes};
pub use registry::GeneratorRegistry;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

/// Default seed used by the demo pipeline
pub const DEFAULT_SEED: u64 = 42;

/// Static description of a recipe
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorMetadata {
    /// Lookup name (e.g., "gaussian+extreme")
    pub id: String,

    /// Human-readable name
    pub name: String,

    /// What the recipe produces
    pub description: String,

    /// Number of values per call
    pub sample_count: usize,
}

/// A recipe producing a fixed-length numeric column.
///
/// Generators hold no state; all randomness comes from the source passed in.
pub trait DataGenerator: Send + Sync {
    /// Static metadata describing this generator
    fn metadata(&self) -> &GeneratorMetadata;

    /// Draw one column from `rng`
    fn sample(&self, rng: &mut dyn RngCore) -> Vec<f64>;

    /// Draw one column from a fresh source seeded with `seed`
    fn sample_seeded(&self, seed: u64) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.sample(&mut rng)
    }
}

/// Generate a dataset by recipe and output format names.
///
/// Unknown recipes fall back to `gaussian`, unknown formats to `raw`; each
/// substitution adds a notice to the result.
pub fn generate_outliers_1d(how: &str, output_format: &str, seed: u64) -> Resolved<GeneratedData> {
    GeneratorRegistry::new().generate(how, output_format, seed)
}
