use serde_json::{json, Value};

use crate::analysis::domain::{
    Address, ExpenseSchedule, Property, RegulationRecord, RegulationSource,
};
use crate::analysis::{AnalysisAssumptions, AnalysisEngine, AnalysisRequest};

pub(super) fn property() -> Property {
    Property {
        address: Address {
            street: "311 Bay St Unit 4806".to_string(),
            city: "Toronto".to_string(),
            province: "Ontario".to_string(),
            postal_code: "M5H 4G5".to_string(),
        },
        price: 850_000.0,
        bedrooms: 2,
        bathrooms: 2.0,
        square_feet: Some(900),
        property_type: "Condo".to_string(),
        annual_property_tax: Some(5_100.0),
        monthly_condo_fees: Some(450.0),
        year_built: Some(2017),
    }
}

pub(super) fn assumptions() -> AnalysisAssumptions {
    AnalysisAssumptions::default()
}

pub(super) fn engine() -> AnalysisEngine {
    AnalysisEngine::new(assumptions())
}

/// Three nightly comparables spanning the provider alias variants:
/// camelCase with a 0-100 occupancy, snake_case with a fraction, and
/// the bare `price`/`occupancy` shape.
pub(super) fn str_raw() -> Vec<Value> {
    vec![
        json!({
            "nightlyRate": 220,
            "occupancy": 90,
            "bedrooms": 2,
            "propertyType": "Condo",
            "reviewsCount": 187,
            "rating": 4.9,
            "url": "https://listings.example/comp-1",
            "thumbnail": "https://img.example/comp-1.jpg"
        }),
        json!({
            "nightly_rate": 185,
            "occupancy_rate": 0.85,
            "bedrooms": 2,
            "property_type": "Condo",
            "review_count": 64
        }),
        json!({
            "price": 145,
            "occupancy": 0.72,
            "bedrooms": 1
        }),
    ]
}

pub(super) fn ltr_raw() -> Vec<Value> {
    vec![
        json!({ "monthlyRent": 2700, "bedrooms": 2 }),
        json!({ "monthly_rent": 2600, "bedrooms": 2 }),
        json!({ "rent": 2500, "bedrooms": 2 }),
    ]
}

pub(super) fn request() -> AnalysisRequest {
    AnalysisRequest {
        property: property(),
        str_comparables: str_raw(),
        ltr_comparables: ltr_raw(),
        regulation_records: Vec::new(),
        assumptions: None,
    }
}

pub(super) fn regulation(source: RegulationSource, allowed: Option<bool>) -> RegulationRecord {
    RegulationRecord {
        city: "Toronto".to_string(),
        province: "Ontario".to_string(),
        allowed,
        summary: "STR allowed in primary residence only, license required".to_string(),
        restrictions: Vec::new(),
        source,
        license_url: None,
        requires_license: None,
        primary_residence_only: None,
        max_days: None,
        risk_level: None,
        warnings: Vec::new(),
        recommendations: Vec::new(),
    }
}

pub(super) fn flat_schedule(total: f64, mortgage: f64) -> ExpenseSchedule {
    ExpenseSchedule {
        mortgage_payment: mortgage,
        property_tax_monthly: 0.0,
        insurance_monthly: 0.0,
        condo_fees_monthly: 0.0,
        maintenance_monthly: 0.0,
        management_fee_monthly: 0.0,
        utilities_monthly: total - mortgage,
        total_monthly_expenses: total,
    }
}
