//! Built-in dataset recipes.
//!
//! Each recipe draws a 200-value column: a bulk population plus, for the
//! `extreme` variants, two small far-away groups that the IQR rule should
//! pick up. Mixed columns are shuffled so outliers land at random positions.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::{DataGenerator, GeneratorMetadata};

/// Normal bulk around 20 with uniform noise
pub struct GaussianNoise {
    metadata: GeneratorMetadata,
}

impl GaussianNoise {
    pub const ID: &'static str = "gaussian";
    const COUNT: usize = 200;

    pub fn new() -> Self {
        Self {
            metadata: GeneratorMetadata {
                id: Self::ID.to_string(),
                name: "Gaussian".to_string(),
                description: "Normal values around 20 (σ = 10) plus uniform noise in [0, 2)"
                    .to_string(),
                sample_count: Self::COUNT,
            },
        }
    }
}

impl Default for GaussianNoise {
    fn default() -> Self {
        Self::new()
    }
}

impl DataGenerator for GaussianNoise {
    fn metadata(&self) -> &GeneratorMetadata {
        &self.metadata
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Vec<f64> {
        let mut values = normal(rng, Self::COUNT, 20.0, 10.0);
        // Noise is drawn after the whole bulk
        for v in values.iter_mut() {
            *v += rng.random::<f64>() * 2.0;
        }
        values
    }
}

/// Uniform bulk in [25, 50) with low and high extremes
pub struct UniformExtremes {
    metadata: GeneratorMetadata,
}

impl UniformExtremes {
    pub const ID: &'static str = "extreme";

    pub fn new() -> Self {
        Self {
            metadata: GeneratorMetadata {
                id: Self::ID.to_string(),
                name: "Extreme".to_string(),
                description: "190 uniform values in [25, 50), 5 in [5, 10), 5 in [50, 100)"
                    .to_string(),
                sample_count: 200,
            },
        }
    }
}

impl Default for UniformExtremes {
    fn default() -> Self {
        Self::new()
    }
}

impl DataGenerator for UniformExtremes {
    fn metadata(&self) -> &GeneratorMetadata {
        &self.metadata
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Vec<f64> {
        let mut values = scaled_uniform(rng, 190, 25.0);
        values.extend(scaled_uniform(rng, 5, 5.0));
        values.extend(scaled_uniform(rng, 5, 50.0));
        values.shuffle(rng);
        values
    }
}

/// Normal bulk around 30 with two small normal clusters far below and above
pub struct GaussianExtremes {
    metadata: GeneratorMetadata,
}

impl GaussianExtremes {
    pub const ID: &'static str = "gaussian+extreme";

    pub fn new() -> Self {
        Self {
            metadata: GeneratorMetadata {
                id: Self::ID.to_string(),
                name: "Gaussian + Extreme".to_string(),
                description:
                    "190 normal values around 30 (σ = 10), 5 around 0.5 (σ = 0.5), 5 around 60 (σ = 5)"
                        .to_string(),
                sample_count: 200,
            },
        }
    }
}

impl Default for GaussianExtremes {
    fn default() -> Self {
        Self::new()
    }
}

impl DataGenerator for GaussianExtremes {
    fn metadata(&self) -> &GeneratorMetadata {
        &self.metadata
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Vec<f64> {
        let mut values = normal(rng, 190, 30.0, 10.0);
        values.extend(normal(rng, 5, 0.5, 0.5));
        values.extend(normal(rng, 5, 60.0, 5.0));
        values.shuffle(rng);
        values
    }
}

// Helper functions

/// `count` draws of `scale · (U + 1)`, i.e. uniform in [scale, 2·scale)
fn scaled_uniform(rng: &mut dyn RngCore, count: usize, scale: f64) -> Vec<f64> {
    (0..count)
        .map(|_| (rng.random::<f64>() + 1.0) * scale)
        .collect()
}

/// `count` draws of `mean + std_dev · N(0, 1)`
fn normal(rng: &mut dyn RngCore, count: usize, mean: f64, std_dev: f64) -> Vec<f64> {
    (0..count)
        .map(|_| mean + standard_normal(rng) * std_dev)
        .collect()
}

/// Box-Muller transform for a standard normal draw
fn standard_normal(rng: &mut dyn RngCore) -> f64 {
    let u1 = rng.random::<f64>().max(1e-10); // Avoid log(0)
    let u2 = rng.random::<f64>();

    let r = (-2.0 * u1.ln()).sqrt();
    let theta = 2.0 * std::f64::consts::PI * u2;

    r * theta.cos()
}
