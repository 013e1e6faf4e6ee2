use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::assumptions::AnalysisAssumptions;

/// Rental strategy under analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Str,
    Ltr,
}

impl Strategy {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Str => "Short-Term Rental",
            Self::Ltr => "Long-Term Rental",
        }
    }
}

/// Estimate trust, driven purely by usable comparable counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Display badge for retained comparables, assigned by input rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparableBadge {
    TopPerformer,
    MostSimilar,
    ValueOption,
}

impl ComparableBadge {
    pub const fn for_rank(rank: usize) -> Option<Self> {
        match rank {
            0 => Some(Self::TopPerformer),
            1 => Some(Self::MostSimilar),
            2 => Some(Self::ValueOption),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::TopPerformer => "Top Performer",
            Self::MostSimilar => "Most Similar",
            Self::ValueOption => "Value Option",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub province: String,
    #[serde(default)]
    pub postal_code: String,
}

/// Immutable subject-property input, created once per analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub address: Address,
    pub price: f64,
    pub bedrooms: u8,
    pub bathrooms: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub square_feet: Option<u32>,
    pub property_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_property_tax: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_condo_fees: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_built: Option<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparableKind {
    Str,
    Ltr,
}

/// Canonical comparable shape produced by the normalizer. Absent
/// provider fields stay `None` so downstream code can tell "unknown"
/// from "zero".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparable {
    pub kind: ComparableKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nightly_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_rent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupancy_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_revenue: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<ComparableBadge>,
}

/// Observed nightly-rate spread, used by the UI's slider bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateRange {
    pub min: f64,
    pub max: f64,
}

/// One what-if revenue scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueScenario {
    pub nightly_rate: f64,
    pub occupancy_rate: f64,
    pub monthly_revenue: f64,
}

/// Conservative / realistic / optimistic spread around the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueScenarios {
    pub conservative: RevenueScenario,
    pub realistic: RevenueScenario,
    pub optimistic: RevenueScenario,
}

/// Short-term revenue estimate aggregated from nightly comparables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrRevenueEstimate {
    pub strategy: Strategy,
    pub representative_rate: f64,
    pub occupancy_rate: f64,
    pub monthly_revenue: f64,
    pub annual_revenue: f64,
    pub confidence: Confidence,
    pub sample_size: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comparables: Vec<Comparable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_range: Option<RateRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenarios: Option<RevenueScenarios>,
}

/// Long-term revenue estimate aggregated from monthly-rent comparables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LtrRevenueEstimate {
    pub strategy: Strategy,
    pub monthly_rent: f64,
    pub vacancy_rate: f64,
    pub monthly_revenue: f64,
    pub annual_revenue: f64,
    pub confidence: Confidence,
    pub sample_size: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comparables: Vec<Comparable>,
}

/// Recurring monthly expense schedule. `total_monthly_expenses` is
/// only ever the sum of the current component values; any input change
/// rebuilds the whole schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSchedule {
    pub mortgage_payment: f64,
    pub property_tax_monthly: f64,
    pub insurance_monthly: f64,
    pub condo_fees_monthly: f64,
    pub maintenance_monthly: f64,
    pub management_fee_monthly: f64,
    pub utilities_monthly: f64,
    pub total_monthly_expenses: f64,
}

/// Ratio metric that degrades to an explicit reason instead of
/// surfacing `NaN` or `Infinity` to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Metric {
    pub fn defined(value: f64) -> Self {
        Self {
            value: Some(value),
            reason: None,
        }
    }

    pub fn undefined(reason: impl Into<String>) -> Self {
        Self {
            value: None,
            reason: Some(reason.into()),
        }
    }

    pub fn is_defined(&self) -> bool {
        self.value.is_some()
    }
}

/// Ordinal investment grade, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvestmentGrade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "D")]
    D,
}

impl InvestmentGrade {
    pub const fn label(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

/// Derived financial metrics for one strategy. Never patched in place;
/// any input change recomputes the whole block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialMetrics {
    pub strategy: Strategy,
    pub cash_flow: f64,
    pub annual_cash_flow: f64,
    pub noi: f64,
    pub cap_rate: Metric,
    pub roi: Metric,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_even_occupancy: Option<Metric>,
    pub investment_grade: InvestmentGrade,
}

/// Provenance of a regulation record, ordered by trust.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegulationSource {
    Cached,
    AiResearch,
    GeneralGuidelines,
}

impl RegulationSource {
    pub const fn trust_rank(self) -> u8 {
        match self {
            Self::Cached => 0,
            Self::AiResearch => 1,
            Self::GeneralGuidelines => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Cached => "Municipal Database",
            Self::AiResearch => "AI Research",
            Self::GeneralGuidelines => "General Guidelines",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// One upstream short-term-rental regulation record for a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegulationRecord {
    pub city: String,
    pub province: String,
    #[serde(default)]
    pub allowed: Option<bool>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub restrictions: Vec<String>,
    pub source: RegulationSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_license: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_residence_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,
}

/// Merged regulatory-risk read, labeled with its winning source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceAssessment {
    pub risk_level: RiskLevel,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
    pub derived_from: RegulationSource,
}

/// Side-by-side cash-flow comparison of the two strategies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyComparison {
    pub str_monthly_cash_flow: f64,
    pub ltr_monthly_cash_flow: f64,
    pub monthly_difference: f64,
    pub annual_difference: f64,
    pub recommendation: Strategy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupancy_cushion: Option<f64>,
    pub risk_note: String,
}

/// Expense schedules for both strategies. The short-term schedule is
/// the primary `expenses` block consumed by the UI and PDF report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub expenses: ExpenseSchedule,
    pub ltr_expenses: ExpenseSchedule,
}

/// Aggregate analysis root. The recalculation engine derives ephemeral
/// copies of the revenue/expense/metrics sub-objects and never mutates
/// this value, so the original report stays reproducible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub property: Property,
    pub str_analysis: StrRevenueEstimate,
    pub long_term_rental: LtrRevenueEstimate,
    pub costs: CostBreakdown,
    pub str_metrics: FinancialMetrics,
    pub ltr_metrics: FinancialMetrics,
    pub comparison: StrategyComparison,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regulations: Option<RegulationRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance: Option<ComplianceAssessment>,
    pub assumptions: AnalysisAssumptions,
    pub generated_at: DateTime<Utc>,
}
