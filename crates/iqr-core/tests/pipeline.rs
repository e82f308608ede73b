//! End-to-end pipeline runs

use iqr_core::{analyze, run, PipelineConfig, PipelineError};
use iqr_gen::generate_outliers_1d;
use iqr_plot::{RecordingSink, SvgSink};

fn dataset<'a>(
    report: &'a iqr_core::PipelineReport,
    recipe: &str,
) -> &'a iqr_core::DatasetReport {
    report
        .datasets
        .iter()
        .find(|d| d.recipe == recipe)
        .unwrap()
}

#[test]
fn planted_low_extremes_are_flagged() {
    let report = analyze(&PipelineConfig::default()).unwrap();

    let extreme = dataset(&report, "extreme");
    let low: Vec<f64> = extreme
        .partition
        .recombine()
        .into_iter()
        .filter(|&v| v < 10.0)
        .collect();
    assert_eq!(low.len(), 5);
    for v in low {
        assert!(extreme.partition.outliers.values.contains(&v));
    }

    let mixed = dataset(&report, "gaussian+extreme");
    assert!(mixed
        .partition
        .inliers
        .values
        .iter()
        .all(|&v| v >= 5.0));
}

#[test]
fn report_matches_standalone_generation() {
    let report = analyze(&PipelineConfig::default()).unwrap();
    for d in &report.datasets {
        let standalone = generate_outliers_1d(&d.recipe, "raw", 42);
        assert_eq!(d.partition.recombine(), standalone.value.into_values());
    }
}

#[test]
fn unknown_recipe_is_reported_not_fatal() {
    let config = PipelineConfig {
        recipes: vec!["unknown".to_string(), "gaussian".to_string()],
        ..PipelineConfig::default()
    };
    let report = analyze(&config).unwrap();

    assert_eq!(report.fallbacks().count(), 1);
    assert_eq!(
        report.datasets[0].partition.recombine(),
        report.datasets[1].partition.recombine()
    );
}

#[test]
fn larger_k_flags_fewer_outliers() {
    let loose = analyze(&PipelineConfig {
        k: 0.5,
        ..PipelineConfig::default()
    })
    .unwrap();
    let strict = analyze(&PipelineConfig {
        k: 3.0,
        ..PipelineConfig::default()
    })
    .unwrap();

    assert!(strict.total_outliers() <= loose.total_outliers());
}

#[test]
fn run_writes_svg_figures() {
    let dir = tempfile::tempdir().unwrap();
    let config = PipelineConfig {
        output_dir: dir.path().to_path_buf(),
        ..PipelineConfig::default()
    };

    let mut sink = SvgSink::to_dir(&config.output_dir);
    run(&config, &mut sink).unwrap();

    let docs = sink.documents();
    assert_eq!(docs.len(), 2);
    for doc in docs {
        let path = doc.path.as_ref().unwrap();
        assert!(path.exists());
        assert!(doc.content.contains("<polyline"));
    }
}

#[test]
fn invalid_config_renders_nothing() {
    let config = PipelineConfig {
        recipes: Vec::new(),
        ..PipelineConfig::default()
    };
    let mut sink = RecordingSink::new();

    assert!(matches!(
        run(&config, &mut sink),
        Err(PipelineError::Config(_))
    ));
    assert!(sink.figures().is_empty());
}
