use super::common::*;
use crate::analysis::domain::{InvestmentGrade, Strategy};
use crate::analysis::{expenses, metrics};

#[test]
fn metrics_derive_noi_cap_rate_and_roi() {
    let schedule = flat_schedule(4000.0, 2500.0);
    let computed = metrics::compute(
        Strategy::Str,
        5000.0,
        60_000.0,
        200.0,
        &schedule,
        &property(),
        &assumptions(),
    );

    // Operating expenses exclude debt service.
    assert_eq!(computed.noi, 42_000.0);
    let cap_rate = computed.cap_rate.value.expect("cap rate defined");
    assert!((cap_rate - 42_000.0 / 850_000.0).abs() < 1e-9);

    assert_eq!(computed.cash_flow, 1000.0);
    assert_eq!(computed.annual_cash_flow, 12_000.0);
    let roi = computed.roi.value.expect("roi defined");
    assert!((roi - 12_000.0 / 170_000.0).abs() < 1e-9);

    let break_even = computed
        .break_even_occupancy
        .expect("short-term metric present")
        .value
        .expect("break-even defined");
    assert!((break_even - 4000.0 / 6080.0).abs() < 1e-9);

    assert_eq!(computed.investment_grade, InvestmentGrade::B);
}

#[test]
fn zero_price_yields_undefined_ratios_not_infinity() {
    let mut subject = property();
    subject.price = 0.0;
    let schedule = flat_schedule(4000.0, 2500.0);

    let computed = metrics::compute(
        Strategy::Str,
        5000.0,
        60_000.0,
        200.0,
        &schedule,
        &subject,
        &assumptions(),
    );

    assert!(!computed.cap_rate.is_defined());
    assert_eq!(computed.cap_rate.reason.as_deref(), Some("price is zero"));
    assert!(!computed.roi.is_defined());
    assert_eq!(computed.roi.reason.as_deref(), Some("no cash invested"));
    // Positive cash flow still earns a C even without ratios.
    assert_eq!(computed.investment_grade, InvestmentGrade::C);
}

#[test]
fn break_even_above_full_occupancy_is_reported_unachievable() {
    let metric = metrics::break_even(8000.0, 200.0);
    assert!(!metric.is_defined());
    assert_eq!(
        metric.reason.as_deref(),
        Some("not achievable at current rate")
    );

    let metric = metrics::break_even(4000.0, 0.0);
    assert_eq!(metric.reason.as_deref(), Some("nightly rate is zero"));
}

#[test]
fn break_even_is_monotone_in_expenses_and_rate() {
    let base = metrics::break_even(3000.0, 200.0).value.expect("defined");
    let pricier_expenses = metrics::break_even(4000.0, 200.0).value.expect("defined");
    let pricier_rate = metrics::break_even(3000.0, 250.0).value.expect("defined");

    assert!(pricier_expenses >= base);
    assert!(pricier_rate <= base);
}

#[test]
fn management_toggle_moves_totals_by_exactly_the_fee() {
    let subject = property();
    let assumptions = assumptions();
    let gross = 4589.0;

    let without = expenses::schedule(&subject, gross, false, &assumptions);
    let with = expenses::schedule(&subject, gross, true, &assumptions);

    assert_eq!(without.management_fee_monthly, 0.0);
    let fee = expenses::round_cents(gross * assumptions.operating.management_rate);
    assert!((with.management_fee_monthly - fee).abs() < 1e-9);
    assert!(
        (with.total_monthly_expenses - without.total_monthly_expenses - fee).abs() < 1e-9,
        "total must move by exactly the management fee"
    );

    let metrics_without = metrics::compute(
        Strategy::Str,
        gross,
        gross * 12.0,
        183.0,
        &without,
        &subject,
        &assumptions,
    );
    let metrics_with = metrics::compute(
        Strategy::Str,
        gross,
        gross * 12.0,
        183.0,
        &with,
        &subject,
        &assumptions,
    );
    assert!((metrics_without.cash_flow - metrics_with.cash_flow - fee).abs() < 1e-9);
}

#[test]
fn totals_are_always_the_sum_of_components() {
    let schedule = expenses::schedule(&property(), 4589.0, true, &assumptions());
    let summed = schedule.mortgage_payment
        + schedule.property_tax_monthly
        + schedule.insurance_monthly
        + schedule.condo_fees_monthly
        + schedule.maintenance_monthly
        + schedule.management_fee_monthly
        + schedule.utilities_monthly;
    assert!((schedule.total_monthly_expenses - expenses::round_cents(summed)).abs() < 1e-9);
}

#[test]
fn zero_interest_loans_amortize_straight_line() {
    let payment = expenses::amortized_payment(120_000.0, 0.0, 10);
    assert!((payment - 1000.0).abs() < 1e-9);
    assert_eq!(expenses::amortized_payment(0.0, 0.065, 25), 0.0);
}

#[test]
fn ltr_metrics_carry_no_break_even() {
    let schedule = flat_schedule(2000.0, 1500.0);
    let computed = metrics::compute(
        Strategy::Ltr,
        2470.0,
        29_640.0,
        2600.0,
        &schedule,
        &property(),
        &assumptions(),
    );
    assert!(computed.break_even_occupancy.is_none());
}

#[test]
fn comparison_recommends_the_higher_cash_flow_strategy() {
    let str_schedule = flat_schedule(3500.0, 2000.0);
    let ltr_schedule = flat_schedule(2000.0, 2000.0);
    let subject = property();
    let assumptions = assumptions();

    let str_metrics = metrics::compute(
        Strategy::Str,
        5000.0,
        60_000.0,
        200.0,
        &str_schedule,
        &subject,
        &assumptions,
    );
    let ltr_metrics = metrics::compute(
        Strategy::Ltr,
        2470.0,
        29_640.0,
        2600.0,
        &ltr_schedule,
        &subject,
        &assumptions,
    );

    let estimate = crate::analysis::domain::StrRevenueEstimate {
        strategy: Strategy::Str,
        representative_rate: 200.0,
        occupancy_rate: 0.82,
        monthly_revenue: 5000.0,
        annual_revenue: 60_000.0,
        confidence: crate::analysis::domain::Confidence::Medium,
        sample_size: 3,
        comparables: Vec::new(),
        rate_range: None,
        scenarios: None,
    };

    let comparison = metrics::compare(&str_metrics, &ltr_metrics, &estimate);
    assert_eq!(comparison.recommendation, Strategy::Str);
    assert_eq!(
        comparison.monthly_difference,
        str_metrics.cash_flow - ltr_metrics.cash_flow
    );
    assert_eq!(comparison.annual_difference, comparison.monthly_difference * 12.0);
    let cushion = comparison.occupancy_cushion.expect("cushion defined");
    assert!((cushion - (0.82 - 3500.0 / 6080.0)).abs() < 1e-9);
}

#[test]
fn grade_table_buckets_follow_configured_bands() {
    let assumptions = assumptions();
    let grade = |roi: f64, cap: f64| {
        assumptions.grades.grade(
            &crate::analysis::domain::Metric::defined(cap),
            &crate::analysis::domain::Metric::defined(roi),
            100.0,
        )
    };

    assert_eq!(grade(0.13, 0.08), InvestmentGrade::APlus);
    assert_eq!(grade(0.10, 0.06), InvestmentGrade::A);
    assert_eq!(grade(0.08, 0.05), InvestmentGrade::BPlus);
    assert_eq!(grade(0.07, 0.045), InvestmentGrade::B);
    assert_eq!(grade(0.05, 0.035), InvestmentGrade::CPlus);
    assert_eq!(grade(0.01, 0.01), InvestmentGrade::C);

    let negative = assumptions.grades.grade(
        &crate::analysis::domain::Metric::defined(0.01),
        &crate::analysis::domain::Metric::defined(0.01),
        -250.0,
    );
    assert_eq!(negative, InvestmentGrade::D);
}
