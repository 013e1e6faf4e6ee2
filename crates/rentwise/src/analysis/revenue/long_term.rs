use super::mean;
use crate::analysis::assumptions::AnalysisAssumptions;
use crate::analysis::domain::{Comparable, LtrRevenueEstimate, Strategy};
use crate::analysis::EngineError;

/// Aggregate normalized monthly-rent comparables into a
/// vacancy-adjusted income estimate. Confidence uses the same
/// thresholds as the short-term estimator for cross-strategy
/// consistency.
pub(crate) fn estimate(
    comparables: Vec<Comparable>,
    assumptions: &AnalysisAssumptions,
) -> Result<LtrRevenueEstimate, EngineError> {
    let rents: Vec<f64> = comparables
        .iter()
        .filter_map(|comparable| comparable.monthly_rent)
        .collect();

    let (monthly_rent, sample_size) = match mean(&rents) {
        Some(rent) => (rent, rents.len()),
        None => {
            let rent = assumptions.fallback.monthly_rent.ok_or_else(|| {
                EngineError::InvalidInput(
                    "no usable long-term comparables and no fallback monthly rent".to_string(),
                )
            })?;
            (rent, 0)
        }
    };

    let vacancy_rate = assumptions.operating.vacancy_rate.clamp(0.0, 1.0);
    // Vacancy-adjusted so annual == monthly * 12 holds for both
    // strategies.
    let monthly_revenue = (monthly_rent * (1.0 - vacancy_rate)).round();

    Ok(LtrRevenueEstimate {
        strategy: Strategy::Ltr,
        monthly_rent,
        vacancy_rate,
        monthly_revenue,
        annual_revenue: monthly_revenue * 12.0,
        confidence: assumptions.confidence.classify(sample_size),
        sample_size,
        comparables: comparables
            .into_iter()
            .take(assumptions.display_comparables.0)
            .collect(),
    })
}
