//! Reproducibility and fallback behaviour of generated datasets

use iqr_gen::{generate_outliers_1d, GeneratedData, GeneratorRegistry, OutputFormat, DEFAULT_SEED};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

fn bits(data: &GeneratedData) -> Vec<u64> {
    data.values().iter().map(|v| v.to_bits()).collect()
}

#[test]
fn gaussian_seed_42_is_bit_identical() {
    let a = generate_outliers_1d("gaussian", "raw", DEFAULT_SEED);
    let b = generate_outliers_1d("gaussian", "raw", DEFAULT_SEED);
    assert_eq!(bits(&a.value), bits(&b.value));
}

#[test]
fn seed_42_stream_is_pinned() {
    let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);
    let words: Vec<u64> = (0..4).map(|_| rng.next_u64()).collect();
    assert_eq!(
        words,
        vec![
            0x86cc_7763_2227_24a2,
            0x8af0_0a13_3fad_517d,
            0xa2ef_6071_de51_34d1,
            0x67e9_2d78_fd76_30b2,
        ]
    );
}

#[test]
fn gaussian_seed_42_is_pinned() {
    // Box-Muller goes through ln and cos, so allow a few ulps of libm drift
    let expected = [
        f64::from_bits(0x4025_ebc2_b354_8f93), // 10.960469821998947
        f64::from_bits(0x4029_35c9_356b_42ee), // 12.605050725310743
        f64::from_bits(0xbff1_f63f_6a36_f69f), // -1.1226190709125274
        f64::from_bits(0x4039_0541_c9eb_aa38), // 25.020535106692677
    ];

    let out = generate_outliers_1d("gaussian", "raw", DEFAULT_SEED);
    for (got, want) in out.value.values().iter().zip(expected) {
        assert!((got - want).abs() < 1e-12, "got {got}, want {want}");
    }
}

#[test]
fn results_do_not_depend_on_call_order() {
    let fresh = generate_outliers_1d("gaussian+extreme", "table", 42);

    let registry = GeneratorRegistry::new();
    let _ = registry.generate("gaussian", "table", 42);
    let _ = registry.generate("extreme", "table", 42);
    let after_others = registry.generate("gaussian+extreme", "table", 42);

    assert_eq!(bits(&fresh.value), bits(&after_others.value));
}

#[test]
fn unknown_recipe_matches_gaussian() {
    let unknown = generate_outliers_1d("unknown", "table", 42);
    let gaussian = generate_outliers_1d("gaussian", "table", 42);

    assert_eq!(unknown.value, gaussian.value);
    assert_eq!(unknown.fallbacks.len(), 1);
    assert_eq!(unknown.fallbacks[0].substituted, "gaussian");
    assert!(gaussian.is_exact());
}

#[test]
fn unknown_format_returns_raw_values() {
    let out = generate_outliers_1d("extreme", "parquet", 42);
    let table = generate_outliers_1d("extreme", "table", 42);

    assert_eq!(out.value.format(), OutputFormat::Raw);
    assert_eq!(out.fallbacks.len(), 1);
    assert_eq!(out.fallbacks[0].parameter, "output_format");
    assert_eq!(out.value.values(), table.value.values());
}

#[test]
fn shared_source_advances_between_calls() {
    let registry = GeneratorRegistry::new();
    let mut rng = StdRng::seed_from_u64(42);
    let first = registry.generate_with("gaussian", "raw", &mut rng);
    let second = registry.generate_with("gaussian", "raw", &mut rng);

    assert_eq!(first.value, generate_outliers_1d("gaussian", "raw", 42).value);
    assert_ne!(first.value, second.value);
}

proptest! {
    #[test]
    fn every_recipe_yields_200_finite_values(seed in any::<u64>()) {
        for how in ["gaussian", "extreme", "gaussian+extreme"] {
            let out = generate_outliers_1d(how, "raw", seed);
            prop_assert!(out.is_exact());
            prop_assert_eq!(out.value.values().len(), 200);
            prop_assert!(out.value.values().iter().all(|v| v.is_finite()));
        }
    }
}
