//! Canonicalizes provider comparable records. Each canonical field
//! resolves through a fixed priority list of known provider aliases so
//! no other component needs to know about provider naming.

use serde_json::Value;

use super::domain::{Comparable, ComparableKind};

const NIGHTLY_RATE_ALIASES: &[&str] = &["nightly_rate", "nightlyRate", "price", "nightly_price"];
const MONTHLY_RENT_ALIASES: &[&str] = &["monthly_rent", "monthlyRent", "rent", "price"];
const OCCUPANCY_ALIASES: &[&str] = &["occupancy_rate", "occupancyRate", "occupancy"];
const MONTHLY_REVENUE_ALIASES: &[&str] = &["monthly_revenue", "monthlyRevenue"];
const BEDROOM_ALIASES: &[&str] = &["bedrooms", "beds"];
const BATHROOM_ALIASES: &[&str] = &["bathrooms", "baths"];
const PROPERTY_TYPE_ALIASES: &[&str] = &["property_type", "propertyType"];
const SIMILARITY_ALIASES: &[&str] = &["similarity_score", "similarityScore", "distance"];
const RATING_ALIASES: &[&str] = &["rating", "review_score", "reviewScore"];
const REVIEW_COUNT_ALIASES: &[&str] = &["review_count", "reviewCount", "reviewsCount"];
const SOURCE_URL_ALIASES: &[&str] = &["source_url", "sourceUrl", "url", "airbnbUrl"];
const IMAGE_URL_ALIASES: &[&str] = &["image_url", "imageUrl", "thumbnail"];

/// Normalize short-term (nightly) comparables, preserving the caller's
/// similarity ordering.
pub fn normalize_str_comparables(raw: &[Value]) -> Vec<Comparable> {
    raw.iter()
        .map(|record| normalize_record(record, ComparableKind::Str))
        .collect()
}

/// Normalize long-term (monthly rent) comparables.
pub fn normalize_ltr_comparables(raw: &[Value]) -> Vec<Comparable> {
    raw.iter()
        .map(|record| normalize_record(record, ComparableKind::Ltr))
        .collect()
}

fn normalize_record(raw: &Value, kind: ComparableKind) -> Comparable {
    let (nightly_rate, monthly_rent, occupancy_rate) = match kind {
        ComparableKind::Str => (
            resolve_positive(raw, NIGHTLY_RATE_ALIASES),
            None,
            resolve_fraction(raw, OCCUPANCY_ALIASES),
        ),
        ComparableKind::Ltr => (None, resolve_positive(raw, MONTHLY_RENT_ALIASES), None),
    };

    Comparable {
        kind,
        nightly_rate,
        monthly_rent,
        occupancy_rate,
        monthly_revenue: resolve_positive(raw, MONTHLY_REVENUE_ALIASES),
        bedrooms: resolve_count(raw, BEDROOM_ALIASES).map(|count| count.min(u8::MAX as u32) as u8),
        bathrooms: resolve_number(raw, BATHROOM_ALIASES).map(|value| value as f32),
        property_type: resolve_string(raw, PROPERTY_TYPE_ALIASES),
        similarity: resolve_number(raw, SIMILARITY_ALIASES),
        rating: resolve_number(raw, RATING_ALIASES),
        review_count: resolve_count(raw, REVIEW_COUNT_ALIASES),
        source_url: resolve_string(raw, SOURCE_URL_ALIASES),
        image_url: resolve_string(raw, IMAGE_URL_ALIASES),
        badge: None,
    }
}

/// First alias carrying a finite number wins; `null` or non-numeric
/// values fall through to the next alias.
fn resolve_number(raw: &Value, aliases: &[&str]) -> Option<f64> {
    for alias in aliases {
        if let Some(value) = raw.get(alias).and_then(Value::as_f64) {
            if value.is_finite() {
                return Some(value);
            }
        }
    }
    None
}

fn resolve_positive(raw: &Value, aliases: &[&str]) -> Option<f64> {
    resolve_number(raw, aliases).filter(|value| *value > 0.0)
}

/// Occupancy-style fields: a 0-100 percentage scales down to a 0-1
/// fraction, then clamps to `[0, 1]`.
fn resolve_fraction(raw: &Value, aliases: &[&str]) -> Option<f64> {
    resolve_number(raw, aliases)
        .filter(|value| *value >= 0.0)
        .map(|value| {
            let fraction = if value > 1.0 { value / 100.0 } else { value };
            fraction.clamp(0.0, 1.0)
        })
}

fn resolve_count(raw: &Value, aliases: &[&str]) -> Option<u32> {
    resolve_number(raw, aliases)
        .filter(|value| *value >= 0.0)
        .map(|value| value.round() as u32)
}

fn resolve_string(raw: &Value, aliases: &[&str]) -> Option<String> {
    for alias in aliases {
        if let Some(value) = raw.get(alias).and_then(Value::as_str) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }
    None
}
