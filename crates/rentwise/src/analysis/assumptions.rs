use serde::{Deserialize, Serialize};

use super::domain::{Confidence, InvestmentGrade, Metric};

/// Comparable-count thresholds producing the confidence label. Exposed
/// as configuration because the product varies these by market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfidenceThresholds {
    pub high_min: usize,
    pub medium_min: usize,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            high_min: 8,
            medium_min: 3,
        }
    }
}

impl ConfidenceThresholds {
    pub fn classify(&self, sample_size: usize) -> Confidence {
        if sample_size >= self.high_min {
            Confidence::High
        } else if sample_size >= self.medium_min {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

/// One row of the investment-grade table: both thresholds must hold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeBand {
    pub grade: InvestmentGrade,
    pub min_roi: f64,
    pub min_cap_rate: f64,
}

/// Ordinal grade table, best band first. Thresholds are configuration
/// because product requirements move them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GradeTable {
    pub bands: Vec<GradeBand>,
}

impl Default for GradeTable {
    fn default() -> Self {
        Self {
            bands: vec![
                GradeBand {
                    grade: InvestmentGrade::APlus,
                    min_roi: 0.12,
                    min_cap_rate: 0.07,
                },
                GradeBand {
                    grade: InvestmentGrade::A,
                    min_roi: 0.10,
                    min_cap_rate: 0.06,
                },
                GradeBand {
                    grade: InvestmentGrade::BPlus,
                    min_roi: 0.08,
                    min_cap_rate: 0.05,
                },
                GradeBand {
                    grade: InvestmentGrade::B,
                    min_roi: 0.06,
                    min_cap_rate: 0.04,
                },
                GradeBand {
                    grade: InvestmentGrade::CPlus,
                    min_roi: 0.04,
                    min_cap_rate: 0.03,
                },
            ],
        }
    }
}

impl GradeTable {
    /// Bucket `(cap rate, cash-on-cash)` into a grade. Undefined ratio
    /// metrics fail every band; non-negative cash flow still earns a C.
    pub fn grade(
        &self,
        cap_rate: &Metric,
        roi: &Metric,
        monthly_cash_flow: f64,
    ) -> InvestmentGrade {
        if let (Some(cap), Some(roi)) = (cap_rate.value, roi.value) {
            for band in &self.bands {
                if roi >= band.min_roi && cap >= band.min_cap_rate {
                    return band.grade;
                }
            }
        }

        if monthly_cash_flow >= 0.0 {
            InvestmentGrade::C
        } else {
            InvestmentGrade::D
        }
    }
}

/// Purchase financing terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoanTerms {
    pub down_payment_pct: f64,
    pub interest_rate: f64,
    pub amortization_years: u32,
    pub closing_costs: f64,
}

impl Default for LoanTerms {
    fn default() -> Self {
        Self {
            down_payment_pct: 0.20,
            interest_rate: 0.065,
            amortization_years: 25,
            closing_costs: 0.0,
        }
    }
}

/// Operating-cost assumption rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OperatingAssumptions {
    /// Annual property tax as a share of price, used only when the
    /// listing carries no tax figure.
    pub property_tax_rate: f64,
    /// Annual insurance as a share of price.
    pub insurance_rate: f64,
    /// Annual maintenance reserve as a share of price.
    pub maintenance_rate: f64,
    pub utilities_monthly: f64,
    /// Management fee as a share of gross monthly revenue.
    pub management_rate: f64,
    /// Long-term vacancy allowance.
    pub vacancy_rate: f64,
    pub str_management_enabled: bool,
    pub ltr_management_enabled: bool,
}

impl Default for OperatingAssumptions {
    fn default() -> Self {
        Self {
            property_tax_rate: 0.009,
            insurance_rate: 0.0035,
            maintenance_rate: 0.01,
            utilities_monthly: 200.0,
            management_rate: 0.10,
            vacancy_rate: 0.05,
            str_management_enabled: true,
            ltr_management_enabled: false,
        }
    }
}

/// Caller-supplied estimates used when a strategy has no usable
/// comparables. A strategy with neither comparables nor its fallback
/// rate is rejected as invalid input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FallbackRates {
    pub nightly_rate: Option<f64>,
    pub occupancy_rate: Option<f64>,
    pub monthly_rent: Option<f64>,
}

impl Default for FallbackRates {
    fn default() -> Self {
        Self {
            nightly_rate: None,
            occupancy_rate: Some(0.70),
            monthly_rent: None,
        }
    }
}

/// Full tunable surface of the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisAssumptions {
    pub loan: LoanTerms,
    pub operating: OperatingAssumptions,
    pub confidence: ConfidenceThresholds,
    pub grades: GradeTable,
    pub fallback: FallbackRates,
    pub display_comparables: DisplayLimit,
}

/// How many comparables to retain on the estimate for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayLimit(pub usize);

impl Default for DisplayLimit {
    fn default() -> Self {
        Self(3)
    }
}
