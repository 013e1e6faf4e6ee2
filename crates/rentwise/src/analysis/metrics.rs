//! Financial metrics derived from a revenue estimate and expense
//! schedule. Pure functions; zero denominators yield explicit
//! undefined metrics rather than `NaN` or `Infinity`.

use super::assumptions::AnalysisAssumptions;
use super::domain::{
    ExpenseSchedule, FinancialMetrics, Metric, Property, Strategy, StrategyComparison,
    StrRevenueEstimate,
};
use super::expenses::round_cents;
use super::revenue::DAYS_PER_MONTH;

/// Compute the full metrics block for one strategy.
/// `representative_rate` is the nightly rate backing the short-term
/// break-even solve; it is ignored for the long-term strategy.
pub(crate) fn compute(
    strategy: Strategy,
    monthly_revenue: f64,
    annual_revenue: f64,
    representative_rate: f64,
    expenses: &ExpenseSchedule,
    property: &Property,
    assumptions: &AnalysisAssumptions,
) -> FinancialMetrics {
    let operating_monthly = expenses.total_monthly_expenses - expenses.mortgage_payment;
    let noi = round_cents(annual_revenue - operating_monthly * 12.0);

    let cap_rate = ratio(noi, property.price, "price is zero");

    let cash_flow = round_cents(monthly_revenue - expenses.total_monthly_expenses);
    let annual_cash_flow = round_cents(cash_flow * 12.0);

    let cash_invested =
        property.price * assumptions.loan.down_payment_pct + assumptions.loan.closing_costs;
    let roi = ratio(annual_cash_flow, cash_invested, "no cash invested");

    let break_even_occupancy = match strategy {
        Strategy::Str => Some(break_even(
            expenses.total_monthly_expenses,
            representative_rate,
        )),
        Strategy::Ltr => None,
    };

    let investment_grade = assumptions.grades.grade(&cap_rate, &roi, cash_flow);

    FinancialMetrics {
        strategy,
        cash_flow,
        annual_cash_flow,
        noi,
        cap_rate,
        roi,
        break_even_occupancy,
        investment_grade,
    }
}

/// Occupancy fraction at which revenue covers total expenses, solved
/// analytically since revenue is linear in occupancy.
pub(crate) fn break_even(total_monthly_expenses: f64, nightly_rate: f64) -> Metric {
    let full_occupancy_revenue = nightly_rate * DAYS_PER_MONTH;
    if full_occupancy_revenue <= 0.0 || !full_occupancy_revenue.is_finite() {
        return Metric::undefined("nightly rate is zero");
    }

    let occupancy = total_monthly_expenses / full_occupancy_revenue;
    if occupancy > 1.0 {
        Metric::undefined("not achievable at current rate")
    } else {
        Metric::defined(occupancy.max(0.0))
    }
}

fn ratio(numerator: f64, denominator: f64, reason: &str) -> Metric {
    if denominator > 0.0 && denominator.is_finite() {
        Metric::defined(numerator / denominator)
    } else {
        Metric::undefined(reason)
    }
}

/// Side-by-side strategy comparison with an occupancy-cushion risk
/// note. Driven entirely off the shared metrics blocks.
pub(crate) fn compare(
    str_metrics: &FinancialMetrics,
    ltr_metrics: &FinancialMetrics,
    str_estimate: &StrRevenueEstimate,
) -> StrategyComparison {
    let monthly_difference = round_cents(str_metrics.cash_flow - ltr_metrics.cash_flow);
    let recommendation = if monthly_difference > 0.0 {
        Strategy::Str
    } else {
        Strategy::Ltr
    };

    let occupancy_cushion = str_metrics
        .break_even_occupancy
        .as_ref()
        .and_then(|metric| metric.value)
        .map(|break_even| str_estimate.occupancy_rate - break_even);

    let risk_note = match occupancy_cushion {
        Some(cushion) if cushion > 0.20 => "Low risk: strong occupancy cushion".to_string(),
        Some(cushion) if cushion > 0.10 => "Moderate risk: reasonable occupancy cushion".to_string(),
        Some(cushion) if cushion > 0.0 => "Higher risk: minimal occupancy cushion".to_string(),
        Some(_) => "High risk: projected occupancy below break-even".to_string(),
        None => "Break-even occupancy not achievable at the current nightly rate".to_string(),
    };

    StrategyComparison {
        str_monthly_cash_flow: str_metrics.cash_flow,
        ltr_monthly_cash_flow: ltr_metrics.cash_flow,
        monthly_difference,
        annual_difference: round_cents(monthly_difference * 12.0),
        recommendation,
        occupancy_cushion,
        risk_note,
    }
}
