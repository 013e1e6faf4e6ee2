//! Recurring-expense schedule assembly. The schedule is always built
//! whole from current inputs; there is no incremental patching path,
//! so the total can never go stale when a toggle flips.

use super::assumptions::AnalysisAssumptions;
use super::domain::{ExpenseSchedule, Property};

/// Build the monthly expense schedule for one strategy.
/// `gross_monthly_revenue` feeds the management fee when the
/// strategy's management flag is enabled.
pub(crate) fn schedule(
    property: &Property,
    gross_monthly_revenue: f64,
    management_enabled: bool,
    assumptions: &AnalysisAssumptions,
) -> ExpenseSchedule {
    let operating = &assumptions.operating;
    let loan = &assumptions.loan;

    let principal = property.price * (1.0 - loan.down_payment_pct);
    let mortgage_payment = round_cents(amortized_payment(
        principal,
        loan.interest_rate,
        loan.amortization_years,
    ));

    let annual_tax = property
        .annual_property_tax
        .unwrap_or(property.price * operating.property_tax_rate);
    let property_tax_monthly = round_cents(annual_tax / 12.0);

    let insurance_monthly = round_cents(property.price * operating.insurance_rate / 12.0);
    let condo_fees_monthly = round_cents(property.monthly_condo_fees.unwrap_or(0.0));
    let maintenance_monthly = round_cents(property.price * operating.maintenance_rate / 12.0);
    let management_fee_monthly = if management_enabled {
        round_cents(gross_monthly_revenue * operating.management_rate)
    } else {
        0.0
    };
    let utilities_monthly = round_cents(operating.utilities_monthly);

    let total_monthly_expenses = round_cents(
        mortgage_payment
            + property_tax_monthly
            + insurance_monthly
            + condo_fees_monthly
            + maintenance_monthly
            + management_fee_monthly
            + utilities_monthly,
    );

    ExpenseSchedule {
        mortgage_payment,
        property_tax_monthly,
        insurance_monthly,
        condo_fees_monthly,
        maintenance_monthly,
        management_fee_monthly,
        utilities_monthly,
        total_monthly_expenses,
    }
}

/// Standard fixed-rate amortization payment. Zero-interest terms
/// degrade to straight-line repayment.
pub(crate) fn amortized_payment(principal: f64, annual_rate: f64, years: u32) -> f64 {
    if principal <= 0.0 || years == 0 {
        return 0.0;
    }

    let periods = f64::from(years * 12);
    let monthly_rate = annual_rate / 12.0;
    if monthly_rate <= 0.0 {
        return principal / periods;
    }

    let growth = (1.0 + monthly_rate).powf(periods);
    principal * monthly_rate * growth / (growth - 1.0)
}

pub(crate) fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
