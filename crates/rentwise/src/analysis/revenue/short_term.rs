use super::{mean, monthly_str_revenue};
use crate::analysis::assumptions::AnalysisAssumptions;
use crate::analysis::domain::{
    Comparable, ComparableBadge, RateRange, RevenueScenario, RevenueScenarios, Strategy,
    StrRevenueEstimate,
};
use crate::analysis::EngineError;

// Occupancy assumed when neither comparables nor the caller supply one.
const DEFAULT_OCCUPANCY: f64 = 0.70;

// Scenario spread bounds, matching the product's what-if presets.
const CONSERVATIVE_RATE_FACTOR: f64 = 0.85;
const OPTIMISTIC_RATE_FACTOR: f64 = 1.10;
const OCCUPANCY_FLOOR: f64 = 0.40;
const OCCUPANCY_CEILING: f64 = 0.90;

/// Aggregate normalized nightly comparables into a revenue estimate.
/// Null-rate entries are skipped; with no usable rates the caller
/// fallback applies at low confidence.
pub(crate) fn estimate(
    comparables: Vec<Comparable>,
    assumptions: &AnalysisAssumptions,
) -> Result<StrRevenueEstimate, EngineError> {
    let rates: Vec<f64> = comparables
        .iter()
        .filter_map(|comparable| comparable.nightly_rate)
        .collect();
    let occupancies: Vec<f64> = comparables
        .iter()
        .filter_map(|comparable| comparable.occupancy_rate)
        .collect();

    let fallback_occupancy = assumptions
        .fallback
        .occupancy_rate
        .unwrap_or(DEFAULT_OCCUPANCY);

    let (representative_rate, occupancy_rate, sample_size) = match mean(&rates) {
        Some(rate) => (
            rate,
            mean(&occupancies).unwrap_or(fallback_occupancy),
            rates.len(),
        ),
        None => {
            let rate = assumptions.fallback.nightly_rate.ok_or_else(|| {
                EngineError::InvalidInput(
                    "no usable short-term comparables and no fallback nightly rate".to_string(),
                )
            })?;
            (rate, fallback_occupancy, 0)
        }
    };

    let monthly_revenue = monthly_str_revenue(representative_rate, occupancy_rate);
    let rate_range = rates
        .iter()
        .fold(None::<RateRange>, |range, rate| match range {
            Some(range) => Some(RateRange {
                min: range.min.min(*rate),
                max: range.max.max(*rate),
            }),
            None => Some(RateRange {
                min: *rate,
                max: *rate,
            }),
        });

    Ok(StrRevenueEstimate {
        strategy: Strategy::Str,
        representative_rate,
        occupancy_rate,
        monthly_revenue,
        annual_revenue: monthly_revenue * 12.0,
        confidence: assumptions.confidence.classify(sample_size),
        sample_size,
        comparables: badge_for_display(comparables, assumptions.display_comparables.0),
        rate_range,
        scenarios: Some(scenarios(representative_rate, occupancy_rate)),
    })
}

/// Retain the leading comparables for display, tagged by input rank
/// (the input order is the provider's similarity ranking).
fn badge_for_display(comparables: Vec<Comparable>, limit: usize) -> Vec<Comparable> {
    comparables
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(rank, mut comparable)| {
            comparable.badge = ComparableBadge::for_rank(rank);
            comparable
        })
        .collect()
}

/// Conservative / realistic / optimistic spread around the estimate,
/// all through the shared revenue formula.
pub(crate) fn scenarios(nightly_rate: f64, occupancy_rate: f64) -> RevenueScenarios {
    let conservative_rate = nightly_rate * CONSERVATIVE_RATE_FACTOR;
    let conservative_occupancy = (occupancy_rate - 0.15).max(OCCUPANCY_FLOOR);
    let optimistic_rate = nightly_rate * OPTIMISTIC_RATE_FACTOR;
    let optimistic_occupancy = (occupancy_rate + 0.10).min(OCCUPANCY_CEILING);

    RevenueScenarios {
        conservative: scenario(conservative_rate, conservative_occupancy),
        realistic: scenario(nightly_rate, occupancy_rate),
        optimistic: scenario(optimistic_rate, optimistic_occupancy),
    }
}

fn scenario(nightly_rate: f64, occupancy_rate: f64) -> RevenueScenario {
    RevenueScenario {
        nightly_rate,
        occupancy_rate,
        monthly_revenue: monthly_str_revenue(nightly_rate, occupancy_rate),
    }
}
