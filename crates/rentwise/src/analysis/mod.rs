//! Investment analysis pipeline: normalize raw comparables, estimate
//! revenue per strategy, assemble expenses, derive metrics, and merge
//! the regulatory read.

pub mod assumptions;
pub mod compliance;
pub mod domain;
mod expenses;
mod metrics;
pub mod normalizer;
pub mod revenue;
mod recompute;

#[cfg(test)]
mod tests;

use chrono::Utc;
use serde::{Deserialize, Serialize};

pub use assumptions::{
    AnalysisAssumptions, ConfidenceThresholds, DisplayLimit, FallbackRates, GradeBand, GradeTable,
    LoanTerms, OperatingAssumptions,
};
pub use domain::{
    Address, AnalysisResult, Comparable, ComparableBadge, ComparableKind, ComplianceAssessment,
    Confidence, CostBreakdown, ExpenseSchedule, FinancialMetrics, InvestmentGrade,
    LtrRevenueEstimate, Metric, Property, RateRange, RegulationRecord, RegulationSource,
    RevenueScenario, RevenueScenarios, RiskLevel, Strategy, StrategyComparison,
    StrRevenueEstimate,
};
pub use recompute::{recompute, Overrides, Recalculation};

/// Engine-level failures. Missing optional comparable fields never
/// land here; only structurally invalid input does.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl EngineError {
    /// Stable machine code for the hosting API layer.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "INVALID_DATA",
        }
    }
}

/// One analysis request: the subject property, raw provider payloads,
/// regulation records, and optional assumption overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub property: Property,
    #[serde(default)]
    pub str_comparables: Vec<serde_json::Value>,
    #[serde(default)]
    pub ltr_comparables: Vec<serde_json::Value>,
    #[serde(default)]
    pub regulation_records: Vec<RegulationRecord>,
    #[serde(default)]
    pub assumptions: Option<AnalysisAssumptions>,
}

/// Stateless analyzer holding the default assumption set. Safe to call
/// concurrently; every invocation returns a fresh result.
#[derive(Debug, Clone, Default)]
pub struct AnalysisEngine {
    defaults: AnalysisAssumptions,
}

impl AnalysisEngine {
    pub fn new(defaults: AnalysisAssumptions) -> Self {
        Self { defaults }
    }

    pub fn assumptions(&self) -> &AnalysisAssumptions {
        &self.defaults
    }

    /// Run the full pipeline for one request.
    pub fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult, EngineError> {
        let AnalysisRequest {
            property,
            str_comparables,
            ltr_comparables,
            regulation_records,
            assumptions,
        } = request;

        validate_property(&property)?;
        let assumptions = assumptions.unwrap_or_else(|| self.defaults.clone());

        let str_estimate = revenue::short_term::estimate(
            normalizer::normalize_str_comparables(&str_comparables),
            &assumptions,
        )?;
        let ltr_estimate = revenue::long_term::estimate(
            normalizer::normalize_ltr_comparables(&ltr_comparables),
            &assumptions,
        )?;

        let str_expenses = expenses::schedule(
            &property,
            str_estimate.monthly_revenue,
            assumptions.operating.str_management_enabled,
            &assumptions,
        );
        let ltr_expenses = expenses::schedule(
            &property,
            ltr_estimate.monthly_revenue,
            assumptions.operating.ltr_management_enabled,
            &assumptions,
        );

        let str_metrics = metrics::compute(
            Strategy::Str,
            str_estimate.monthly_revenue,
            str_estimate.annual_revenue,
            str_estimate.representative_rate,
            &str_expenses,
            &property,
            &assumptions,
        );
        let ltr_metrics = metrics::compute(
            Strategy::Ltr,
            ltr_estimate.monthly_revenue,
            ltr_estimate.annual_revenue,
            ltr_estimate.monthly_rent,
            &ltr_expenses,
            &property,
            &assumptions,
        );

        let comparison = metrics::compare(&str_metrics, &ltr_metrics, &str_estimate);
        let (regulations, compliance) = match compliance::assess(&regulation_records) {
            Some((record, assessment)) => (Some(record), Some(assessment)),
            None => (None, None),
        };

        Ok(AnalysisResult {
            property,
            str_analysis: str_estimate,
            long_term_rental: ltr_estimate,
            costs: CostBreakdown {
                expenses: str_expenses,
                ltr_expenses,
            },
            str_metrics,
            ltr_metrics,
            comparison,
            regulations,
            compliance,
            assumptions,
            generated_at: Utc::now(),
        })
    }
}

fn validate_property(property: &Property) -> Result<(), EngineError> {
    if !property.price.is_finite() || property.price <= 0.0 {
        return Err(EngineError::InvalidInput(
            "property price must be a positive number".to_string(),
        ));
    }
    if property.bathrooms < 0.0 {
        return Err(EngineError::InvalidInput(
            "property bathrooms must be non-negative".to_string(),
        ));
    }
    if matches!(property.annual_property_tax, Some(tax) if tax < 0.0) {
        return Err(EngineError::InvalidInput(
            "annual property tax must be non-negative".to_string(),
        ));
    }
    if matches!(property.monthly_condo_fees, Some(fees) if fees < 0.0) {
        return Err(EngineError::InvalidInput(
            "monthly condo fees must be non-negative".to_string(),
        ));
    }
    Ok(())
}
