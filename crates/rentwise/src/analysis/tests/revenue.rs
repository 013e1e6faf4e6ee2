use serde_json::json;

use super::common::*;
use crate::analysis::domain::{ComparableBadge, Confidence};
use crate::analysis::normalizer::{normalize_ltr_comparables, normalize_str_comparables};
use crate::analysis::revenue::{long_term, short_term};
use crate::analysis::{EngineError, FallbackRates};

#[test]
fn str_estimate_averages_rates_and_occupancy() {
    let comparables = normalize_str_comparables(&str_raw());
    let estimate = short_term::estimate(comparables, &assumptions()).expect("estimate succeeds");

    assert!((estimate.representative_rate - 550.0 / 3.0).abs() < 1e-9);
    assert!((estimate.occupancy_rate - 2.47 / 3.0).abs() < 1e-9);
    assert_eq!(estimate.monthly_revenue, 4589.0);
    assert_eq!(estimate.annual_revenue, 55_068.0);
    assert_eq!(estimate.sample_size, 3);
    assert_eq!(estimate.confidence, Confidence::Medium);
}

#[test]
fn str_estimate_annual_is_exactly_twelve_months() {
    let comparables = normalize_str_comparables(&str_raw());
    let estimate = short_term::estimate(comparables, &assumptions()).expect("estimate succeeds");
    assert_eq!(estimate.annual_revenue, estimate.monthly_revenue * 12.0);
    assert!(estimate.monthly_revenue >= 0.0);
}

#[test]
fn str_estimate_falls_back_when_no_comparables() {
    let mut assumptions = assumptions();
    assumptions.fallback = FallbackRates {
        nightly_rate: Some(150.0),
        occupancy_rate: Some(0.75),
        monthly_rent: None,
    };

    let estimate = short_term::estimate(Vec::new(), &assumptions).expect("fallback applies");

    assert_eq!(estimate.confidence, Confidence::Low);
    assert_eq!(estimate.sample_size, 0);
    assert_eq!(estimate.monthly_revenue, 3420.0);
    assert_eq!(estimate.annual_revenue, 41_040.0);
}

#[test]
fn str_estimate_rejects_missing_comparables_and_fallback() {
    let mut assumptions = assumptions();
    assumptions.fallback.nightly_rate = None;

    let error = short_term::estimate(Vec::new(), &assumptions).expect_err("no usable inputs");
    assert!(matches!(error, EngineError::InvalidInput(_)));
    assert_eq!(error.code(), "INVALID_DATA");
}

#[test]
fn null_rate_comparables_are_skipped_not_zeroed() {
    let raw = vec![
        json!({ "nightly_rate": null, "occupancy": 0.8 }),
        json!({ "nightlyRate": 200, "occupancy": 0.8 }),
    ];
    let comparables = normalize_str_comparables(&raw);
    assert_eq!(comparables[0].nightly_rate, None);

    let estimate = short_term::estimate(comparables, &assumptions()).expect("estimate succeeds");
    assert_eq!(estimate.representative_rate, 200.0);
    assert_eq!(estimate.sample_size, 1);
}

#[test]
fn percentage_occupancy_is_scaled_to_fraction() {
    let comparables = normalize_str_comparables(&str_raw());
    assert!((comparables[0].occupancy_rate.expect("resolved") - 0.90).abs() < 1e-12);
    assert!((comparables[1].occupancy_rate.expect("resolved") - 0.85).abs() < 1e-12);
}

#[test]
fn confidence_never_decreases_with_more_comparables() {
    let build = |count: usize| {
        let raw: Vec<_> = (0..count)
            .map(|index| json!({ "nightly_rate": 150 + index, "occupancy_rate": 0.8 }))
            .collect();
        short_term::estimate(normalize_str_comparables(&raw), &assumptions())
            .expect("estimate succeeds")
            .confidence
    };

    assert!(build(10) >= build(2));
    assert_eq!(build(2), Confidence::Low);
    assert_eq!(build(5), Confidence::Medium);
    assert_eq!(build(10), Confidence::High);
}

#[test]
fn display_comparables_are_badged_by_input_rank() {
    let comparables = normalize_str_comparables(&str_raw());
    let estimate = short_term::estimate(comparables, &assumptions()).expect("estimate succeeds");

    let badges: Vec<_> = estimate
        .comparables
        .iter()
        .map(|comparable| comparable.badge)
        .collect();
    assert_eq!(
        badges,
        vec![
            Some(ComparableBadge::TopPerformer),
            Some(ComparableBadge::MostSimilar),
            Some(ComparableBadge::ValueOption),
        ]
    );
}

#[test]
fn rate_range_spans_observed_rates() {
    let comparables = normalize_str_comparables(&str_raw());
    let estimate = short_term::estimate(comparables, &assumptions()).expect("estimate succeeds");
    let range = estimate.rate_range.expect("range present");
    assert_eq!(range.min, 145.0);
    assert_eq!(range.max, 220.0);
}

#[test]
fn scenarios_use_the_shared_revenue_formula() {
    let comparables = normalize_str_comparables(&str_raw());
    let estimate = short_term::estimate(comparables, &assumptions()).expect("estimate succeeds");
    let scenarios = estimate.scenarios.expect("scenarios present");

    assert_eq!(scenarios.realistic.monthly_revenue, estimate.monthly_revenue);
    assert!(scenarios.conservative.monthly_revenue <= scenarios.realistic.monthly_revenue);
    assert!(scenarios.optimistic.monthly_revenue >= scenarios.realistic.monthly_revenue);
    assert!(scenarios.conservative.occupancy_rate >= 0.40);
    assert!(scenarios.optimistic.occupancy_rate <= 0.90);
}

#[test]
fn ltr_estimate_applies_vacancy_adjustment() {
    let comparables = normalize_ltr_comparables(&ltr_raw());
    let estimate = long_term::estimate(comparables, &assumptions()).expect("estimate succeeds");

    assert!((estimate.monthly_rent - 2600.0).abs() < 1e-9);
    assert_eq!(estimate.vacancy_rate, 0.05);
    assert_eq!(estimate.monthly_revenue, 2470.0);
    assert_eq!(estimate.annual_revenue, 29_640.0);
    assert_eq!(estimate.annual_revenue, estimate.monthly_revenue * 12.0);
    assert_eq!(estimate.confidence, Confidence::Medium);
}

#[test]
fn ltr_estimate_requires_rent_or_fallback() {
    let mut assumptions = assumptions();
    assumptions.fallback.monthly_rent = None;
    let error = long_term::estimate(Vec::new(), &assumptions).expect_err("no usable inputs");
    assert!(matches!(error, EngineError::InvalidInput(_)));

    assumptions.fallback.monthly_rent = Some(2400.0);
    let estimate = long_term::estimate(Vec::new(), &assumptions).expect("fallback applies");
    assert_eq!(estimate.sample_size, 0);
    assert_eq!(estimate.confidence, Confidence::Low);
    assert_eq!(estimate.monthly_revenue, 2280.0);
}

#[test]
fn unknown_fields_resolve_to_none() {
    let raw = vec![json!({ "listing_name": "Cozy loft" })];
    let comparables = normalize_str_comparables(&raw);
    let comparable = &comparables[0];

    assert_eq!(comparable.nightly_rate, None);
    assert_eq!(comparable.occupancy_rate, None);
    assert_eq!(comparable.bedrooms, None);
    assert_eq!(comparable.property_type, None);
    assert_eq!(comparable.source_url, None);
}
