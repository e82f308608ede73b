//! Registry of dataset recipes.
//!
//! Recipes are looked up by name. Lenient lookup substitutes the `gaussian`
//! recipe for unknown names and reports the substitution.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::debug;

use crate::fallback::{FallbackNotice, Resolved};
use crate::output::{GeneratedData, OutputFormat};
use crate::recipes::{GaussianExtremes, GaussianNoise, UniformExtremes};
use crate::{DataGenerator, GeneratorMetadata};

/// Recipe used when a name is not recognised
pub const FALLBACK_RECIPE: &str = GaussianNoise::ID;

/// Registry of all available recipes
pub struct GeneratorRegistry {
    generators: Vec<Box<dyn DataGenerator>>,
    by_id: HashMap<String, usize>,
    fallback: GaussianNoise,
}

impl GeneratorRegistry {
    /// Create a registry with the built-in recipes
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(GaussianNoise::new()));
        registry.register(Box::new(UniformExtremes::new()));
        registry.register(Box::new(GaussianExtremes::new()));
        registry
    }

    /// Create an empty registry (for testing)
    ///
    /// Lenient lookups still fall back to the `gaussian` recipe.
    pub fn empty() -> Self {
        Self {
            generators: Vec::new(),
            by_id: HashMap::new(),
            fallback: GaussianNoise::new(),
        }
    }

    /// Register a recipe; a later registration under the same id wins
    pub fn register(&mut self, generator: Box<dyn DataGenerator>) {
        let index = self.generators.len();
        self.by_id.insert(generator.metadata().id.clone(), index);
        self.generators.push(generator);
    }

    /// Get a recipe by its exact id
    pub fn get(&self, id: &str) -> Option<&dyn DataGenerator> {
        self.by_id
            .get(id)
            .map(|&index| self.generators[index].as_ref())
    }

    /// Get a recipe by id, substituting the `gaussian` recipe for unknown ids
    pub fn resolve(&self, id: &str) -> Resolved<&dyn DataGenerator> {
        if let Some(generator) = self.get(id) {
            return Resolved::exact(generator);
        }
        let fallback = self.get(FALLBACK_RECIPE).unwrap_or(&self.fallback);
        Resolved::fallback(fallback, FallbackNotice::emit("how", id, FALLBACK_RECIPE))
    }

    /// Generate a dataset from recipe and format names with a fresh source
    /// seeded by `seed`
    pub fn generate(&self, how: &str, output_format: &str, seed: u64) -> Resolved<GeneratedData> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate_with(how, output_format, &mut rng)
    }

    /// Generate a dataset drawing from a caller-owned source
    pub fn generate_with(
        &self,
        how: &str,
        output_format: &str,
        rng: &mut dyn RngCore,
    ) -> Resolved<GeneratedData> {
        self.resolve(how).and_then(|generator| {
            debug!(recipe = %generator.metadata().id, "generating dataset");
            let values = generator.sample(rng);
            OutputFormat::resolve(output_format)
                .map(|format| GeneratedData::with_format(values, format))
        })
    }

    /// List all available recipes
    pub fn list_all(&self) -> Vec<&GeneratorMetadata> {
        self.generators.iter().map(|g| g.metadata()).collect()
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_creation() {
        let registry = GeneratorRegistry::new();
        assert_eq!(registry.len(), 3);

        let ids: Vec<&str> = registry.list_all().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["gaussian", "extreme", "gaussian+extreme"]);
    }

    #[test]
    fn test_get_by_id() {
        let registry = GeneratorRegistry::new();
        let gen = registry.get("gaussian+extreme").unwrap();
        assert_eq!(gen.metadata().sample_count, 200);
        assert!(registry.get("Gaussian").is_none());
    }

    #[test]
    fn test_resolve_unknown() {
        let registry = GeneratorRegistry::new();
        let resolved = registry.resolve("unknown");
        assert_eq!(resolved.value.metadata().id, "gaussian");
        assert_eq!(resolved.fallbacks.len(), 1);
        assert_eq!(resolved.fallbacks[0].parameter, "how");
        assert_eq!(resolved.fallbacks[0].given, "unknown");
    }

    #[test]
    fn test_empty_registry_still_falls_back() {
        let registry = GeneratorRegistry::empty();
        assert!(registry.is_empty());
        assert!(registry.get("gaussian").is_none());

        let resolved = registry.resolve("gaussian");
        assert_eq!(resolved.value.metadata().id, "gaussian");
        assert!(!resolved.is_exact());
    }

    #[test]
    fn test_generate_both_fallbacks() {
        let registry = GeneratorRegistry::new();
        let out = registry.generate("nope", "xml", 42);
        assert_eq!(out.fallbacks.len(), 2);
        assert_eq!(out.value.format(), OutputFormat::Raw);
        assert_eq!(out.value.values().len(), 200);
    }
}
