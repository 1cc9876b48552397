//! Integration tests for module exports.
//!
//! Verify that all public modules and types are reachable both through the
//! crate root and through their module paths.

/// Statistics are reachable through `stats` and the crate root.
#[test]
fn test_stats_module_exports() {
    use tally_core::stats::descriptive::{average, maximum, minimum, sum};
    use tally_core::stats::mode::{mode, mode_count, Mode};
    use tally_core::stats::search::{contains, first_index_of, last_index_of};
    use tally_core::stats::summary::Summary;

    let nums = [1.0, 2.0, 2.0, 3.0];
    assert_eq!(sum(&nums).unwrap(), 8.0);
    assert_eq!(average(&nums).unwrap(), 2.0);
    assert_eq!(minimum(&nums).unwrap(), 1.0);
    assert_eq!(maximum(&nums).unwrap(), 3.0);
    assert_eq!(mode(&nums).unwrap(), Mode { value: 2.0, count: 2 });
    assert_eq!(mode_count(&nums).unwrap(), 2);
    assert!(contains(&nums, 3.0));
    assert_eq!(first_index_of(&nums, 2.0), Some(1));
    assert_eq!(last_index_of(&nums, 2.0), Some(2));
    assert_eq!(Summary::from_values(&nums).unwrap().count, 4);
}

/// Pipeline types are reachable through `pipeline` and the crate root.
#[test]
fn test_pipeline_module_exports() {
    use tally_core::pipeline::generate::generate_random_values;
    use tally_core::pipeline::range::ValueRange;
    use tally_core::pipeline::scenario::{run_check, CheckConfig, MAX_LENGTH};
    use tally_core::pipeline::smooth::smooth_values;
    use tally_core::rng::SeededRng;

    let range = ValueRange::new(0.0, 1.0).unwrap();
    let values = generate_random_values(3, range, &mut SeededRng::from_seed(1));
    assert_eq!(smooth_values(&values).len(), 3);
    assert!(MAX_LENGTH >= CheckConfig::default().min_length());

    let config = CheckConfig::builder()
        .min_length(1)
        .length_span(1)
        .build()
        .unwrap();
    assert_eq!(run_check(&config, &mut SeededRng::from_seed(2)).unwrap().len(), 1);
}

/// Root re-exports cover the whole public surface.
#[test]
fn test_root_reexports() {
    use tally_core::{
        assign_random_values, fill_random_values, smooth_value, CheckConfigBuilder,
        CheckReport, ConfigError, FixedSequence, StatsError, UniformSource,
    };

    let mut source = FixedSequence::new(vec![0.5]);
    assert_eq!(source.next_unit(), 0.5);

    let mut buffer = [0.0; 2];
    let range = tally_core::ValueRange::new(0.0, 2.0).unwrap();
    fill_random_values(&mut buffer, range, &mut source);
    assert_eq!(buffer, [1.0, 1.0]);

    assert_eq!(
        assign_random_values(vec![0.0], 1.0, 0.0, &mut source),
        Err(StatsError::InvalidRange { min: 1.0, max: 0.0 })
    );
    assert_eq!(smooth_value(2.5), 3);

    let builder: CheckConfigBuilder = tally_core::CheckConfig::builder();
    let err: ConfigError = builder.length_span(0).build().unwrap_err();
    assert!(err.to_string().contains("length_span"));

    fn takes_report(_: Option<&CheckReport>) {}
    takes_report(None);
}
