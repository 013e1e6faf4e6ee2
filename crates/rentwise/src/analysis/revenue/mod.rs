//! Revenue estimators. Both strategies and every recompute path share
//! the single day-count convention defined here; no other revenue
//! formula exists in the system.

pub(crate) mod long_term;
pub(crate) mod short_term;

/// Average days per month used by every nightly-revenue projection.
pub const DAYS_PER_MONTH: f64 = 30.4;

/// The one short-term revenue formula: whole-dollar rounded
/// `rate * 30.4 * occupancy`.
pub fn monthly_str_revenue(nightly_rate: f64, occupancy_rate: f64) -> f64 {
    (nightly_rate * DAYS_PER_MONTH * occupancy_rate).round()
}

pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
