//! Regulatory compliance merger. Combines municipal-database,
//! AI-research, and general-guideline regulation records into one
//! assessment, preferring the most trusted source that actually knows
//! whether short-term rentals are allowed.

use super::domain::{ComplianceAssessment, RegulationRecord, RiskLevel};

/// Merge the supplied records into `(winning record, assessment)`.
/// Returns `None` when no records exist; the caller renders an
/// "unknown" state rather than a false assurance.
pub fn assess(records: &[RegulationRecord]) -> Option<(RegulationRecord, ComplianceAssessment)> {
    let winner = select_record(records)?.clone();

    let risk_level = if winner.allowed == Some(false) {
        RiskLevel::High
    } else if let Some(explicit) = winner.risk_level {
        explicit
    } else {
        tier_by_restrictions(winner.restrictions.len())
    };

    let mut warnings = Vec::new();
    let mut recommendations = Vec::new();
    for warning in &winner.warnings {
        push_unique(&mut warnings, warning.clone());
    }
    for recommendation in &winner.recommendations {
        push_unique(&mut recommendations, recommendation.clone());
    }

    if winner.allowed == Some(false) {
        push_unique(
            &mut warnings,
            format!("Short-term rentals are not permitted in {}", winner.city),
        );
        push_unique(
            &mut recommendations,
            "Consider a long-term rental strategy only".to_string(),
        );
    }
    if winner.primary_residence_only == Some(true) {
        push_unique(
            &mut warnings,
            "Short-term rental allowed in a primary residence only; investment properties may not qualify"
                .to_string(),
        );
        push_unique(
            &mut recommendations,
            "Confirm owner-occupancy plans before relying on nightly income".to_string(),
        );
    }
    if winner.requires_license == Some(true) {
        push_unique(
            &mut recommendations,
            "Budget for municipal licensing fees and approval time".to_string(),
        );
    }
    if let Some(max_days) = winner.max_days {
        push_unique(
            &mut recommendations,
            format!("Plan around the {max_days}-day annual rental cap"),
        );
    }

    let assessment = ComplianceAssessment {
        risk_level,
        warnings,
        recommendations,
        derived_from: winner.source,
    };

    Some((winner, assessment))
}

/// Highest-trust record with a non-null `allowed`, else highest-trust
/// overall. Supplied order breaks trust-rank ties.
fn select_record(records: &[RegulationRecord]) -> Option<&RegulationRecord> {
    let decisive = records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.allowed.is_some())
        .min_by_key(|(index, record)| (record.source.trust_rank(), *index))
        .map(|(_, record)| record);

    decisive.or_else(|| {
        records
            .iter()
            .enumerate()
            .min_by_key(|(index, record)| (record.source.trust_rank(), *index))
            .map(|(_, record)| record)
    })
}

const fn tier_by_restrictions(count: usize) -> RiskLevel {
    match count {
        0 => RiskLevel::Low,
        1 | 2 => RiskLevel::Medium,
        _ => RiskLevel::High,
    }
}

// Dedup is exact-string only; near-duplicates from different sources
// are kept.
fn push_unique(list: &mut Vec<String>, entry: String) {
    if !list.contains(&entry) {
        list.push(entry);
    }
}
