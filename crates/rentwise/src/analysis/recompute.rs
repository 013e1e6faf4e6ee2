//! Stateless recalculation path for the interactive what-if tool.
//! Re-invokes the same revenue, expense, and metrics functions as the
//! initial report, so slider output can never diverge from it.

use serde::{Deserialize, Serialize};

use super::domain::{
    AnalysisResult, ExpenseSchedule, FinancialMetrics, Strategy, StrRevenueEstimate,
};
use super::revenue::{monthly_str_revenue, short_term};
use super::{expenses, metrics};

/// User-supplied what-if inputs. Absent fields keep the estimate's
/// computed values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Overrides {
    pub nightly_rate: Option<f64>,
    pub occupancy_rate: Option<f64>,
}

/// Derived, ephemeral recompute output. The source `AnalysisResult`
/// is never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recalculation {
    pub revenue: StrRevenueEstimate,
    pub expenses: ExpenseSchedule,
    pub metrics: FinancialMetrics,
}

/// Recompute the short-term revenue, expenses, and metrics with the
/// overrides substituted, holding property and loan inputs fixed.
pub fn recompute(result: &AnalysisResult, overrides: &Overrides) -> Recalculation {
    let baseline = &result.str_analysis;
    let nightly_rate = overrides
        .nightly_rate
        .unwrap_or(baseline.representative_rate)
        .max(0.0);
    let occupancy_rate = overrides
        .occupancy_rate
        .unwrap_or(baseline.occupancy_rate)
        .clamp(0.0, 1.0);

    let monthly_revenue = monthly_str_revenue(nightly_rate, occupancy_rate);
    let revenue = StrRevenueEstimate {
        strategy: Strategy::Str,
        representative_rate: nightly_rate,
        occupancy_rate,
        monthly_revenue,
        annual_revenue: monthly_revenue * 12.0,
        confidence: baseline.confidence,
        sample_size: baseline.sample_size,
        comparables: baseline.comparables.clone(),
        rate_range: baseline.rate_range,
        scenarios: Some(short_term::scenarios(nightly_rate, occupancy_rate)),
    };

    let assumptions = &result.assumptions;
    let expenses = expenses::schedule(
        &result.property,
        monthly_revenue,
        assumptions.operating.str_management_enabled,
        assumptions,
    );
    let metrics = metrics::compute(
        Strategy::Str,
        monthly_revenue,
        revenue.annual_revenue,
        nightly_rate,
        &expenses,
        &result.property,
        assumptions,
    );

    Recalculation {
        revenue,
        expenses,
        metrics,
    }
}
