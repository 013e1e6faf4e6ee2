use clap::Args;
use serde_json::json;
use std::fs;
use std::path::PathBuf;

use rentwise::analysis::{
    recompute, Address, AnalysisEngine, AnalysisRequest, AnalysisResult, EngineError, Metric,
    Overrides, Property, RegulationRecord, RegulationSource, Strategy,
};
use rentwise::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Path to a JSON analysis request (property, comparables, regulations)
    pub(crate) request: PathBuf,
    /// Pretty-print the resulting report JSON
    #[arg(long)]
    pub(crate) pretty: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// What-if nightly rate applied in the recalculation portion
    #[arg(long)]
    pub(crate) nightly_rate: Option<f64>,
    /// What-if occupancy rate applied in the recalculation portion
    #[arg(long)]
    pub(crate) occupancy_rate: Option<f64>,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs { request, pretty } = args;

    let raw = fs::read_to_string(&request)?;
    let request: AnalysisRequest = serde_json::from_str(&raw)
        .map_err(|err| EngineError::InvalidInput(format!("malformed request file: {err}")))?;

    let result = AnalysisEngine::default().analyze(request)?;
    let rendered = if pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    };
    match rendered {
        Ok(json) => println!("{json}"),
        Err(err) => println!("Report serialization unavailable: {err}"),
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        nightly_rate,
        occupancy_rate,
    } = args;

    println!("Rental investment analysis demo");
    let request = demo_request();
    let result = AnalysisEngine::default().analyze(request)?;
    render_report(&result);

    let overrides = Overrides {
        nightly_rate: Some(nightly_rate.unwrap_or(250.0)),
        occupancy_rate: Some(occupancy_rate.unwrap_or(0.75)),
    };
    let replay = recompute(&result, &overrides);

    println!("\nWhat-if recalculation");
    println!(
        "Inputs: ${:.0}/night at {:.0}% occupancy",
        replay.revenue.representative_rate,
        replay.revenue.occupancy_rate * 100.0
    );
    println!(
        "- Monthly revenue ${:.0} | annual ${:.0}",
        replay.revenue.monthly_revenue, replay.revenue.annual_revenue
    );
    println!(
        "- Monthly expenses ${:.2} | cash flow ${:.2}",
        replay.expenses.total_monthly_expenses, replay.metrics.cash_flow
    );
    println!(
        "- Cap rate {} | cash-on-cash {} | grade {}",
        render_pct(&replay.metrics.cap_rate),
        render_pct(&replay.metrics.roi),
        replay.metrics.investment_grade.label()
    );

    Ok(())
}

fn render_report(result: &AnalysisResult) {
    let property = &result.property;
    println!(
        "Subject: {}, {}, {} ({}, {} bed / {} bath, ${:.0})",
        property.address.street,
        property.address.city,
        property.address.province,
        property.property_type,
        property.bedrooms,
        property.bathrooms,
        property.price
    );

    let str_estimate = &result.str_analysis;
    println!("\nShort-term rental estimate");
    println!(
        "- ${:.0}/night at {:.0}% occupancy -> ${:.0}/month (${:.0}/year)",
        str_estimate.representative_rate,
        str_estimate.occupancy_rate * 100.0,
        str_estimate.monthly_revenue,
        str_estimate.annual_revenue
    );
    println!(
        "- Confidence: {} ({} comparables)",
        str_estimate.confidence.label(),
        str_estimate.sample_size
    );
    if let Some(range) = &str_estimate.rate_range {
        println!("- Observed nightly rates: ${:.0} to ${:.0}", range.min, range.max);
    }
    if let Some(scenarios) = &str_estimate.scenarios {
        println!(
            "- Scenarios: conservative ${:.0} | realistic ${:.0} | optimistic ${:.0} per month",
            scenarios.conservative.monthly_revenue,
            scenarios.realistic.monthly_revenue,
            scenarios.optimistic.monthly_revenue
        );
    }
    for comparable in &str_estimate.comparables {
        let badge = comparable
            .badge
            .map(|badge| badge.label())
            .unwrap_or("Comparable");
        let rate = comparable
            .nightly_rate
            .map(|rate| format!("${rate:.0}/night"))
            .unwrap_or_else(|| "rate unknown".to_string());
        println!("  - [{badge}] {rate}");
    }

    let ltr_estimate = &result.long_term_rental;
    println!("\nLong-term rental estimate");
    println!(
        "- ${:.0}/month rent, {:.0}% vacancy allowance -> ${:.0}/month effective",
        ltr_estimate.monthly_rent,
        ltr_estimate.vacancy_rate * 100.0,
        ltr_estimate.monthly_revenue
    );

    let expenses = &result.costs.expenses;
    println!("\nMonthly expenses (short-term schedule)");
    println!("- Mortgage ${:.2}", expenses.mortgage_payment);
    println!("- Property tax ${:.2}", expenses.property_tax_monthly);
    println!("- Insurance ${:.2}", expenses.insurance_monthly);
    println!("- Condo fees ${:.2}", expenses.condo_fees_monthly);
    println!("- Maintenance ${:.2}", expenses.maintenance_monthly);
    println!("- Management ${:.2}", expenses.management_fee_monthly);
    println!("- Utilities ${:.2}", expenses.utilities_monthly);
    println!("- Total ${:.2}", expenses.total_monthly_expenses);

    println!("\nFinancial metrics");
    render_metrics_line(result, Strategy::Str);
    render_metrics_line(result, Strategy::Ltr);

    let comparison = &result.comparison;
    println!("\nStrategy comparison");
    println!(
        "- STR cash flow ${:.2}/month vs LTR ${:.2}/month (difference ${:.2}/month, ${:.2}/year)",
        comparison.str_monthly_cash_flow,
        comparison.ltr_monthly_cash_flow,
        comparison.monthly_difference,
        comparison.annual_difference
    );
    println!(
        "- Recommendation: {} | {}",
        comparison.recommendation.label(),
        comparison.risk_note
    );

    match (&result.regulations, &result.compliance) {
        (Some(record), Some(assessment)) => {
            println!("\nRegulatory read ({})", record.source.label());
            println!("- {}", record.summary);
            println!("- Risk level: {}", assessment.risk_level.label());
            for warning in &assessment.warnings {
                println!("- Warning: {warning}");
            }
            for recommendation in &assessment.recommendations {
                println!("- Recommendation: {recommendation}");
            }
        }
        _ => println!("\nRegulatory read: no records available"),
    }
}

fn render_metrics_line(result: &AnalysisResult, strategy: Strategy) {
    let metrics = match strategy {
        Strategy::Str => &result.str_metrics,
        Strategy::Ltr => &result.ltr_metrics,
    };

    let break_even = match &metrics.break_even_occupancy {
        Some(metric) => format!(" | break-even occupancy {}", render_pct(metric)),
        None => String::new(),
    };
    println!(
        "- {}: cash flow ${:.2}/month | NOI ${:.2} | cap rate {} | cash-on-cash {}{} | grade {}",
        strategy.label(),
        metrics.cash_flow,
        metrics.noi,
        render_pct(&metrics.cap_rate),
        render_pct(&metrics.roi),
        break_even,
        metrics.investment_grade.label()
    );
}

fn render_pct(metric: &Metric) -> String {
    match (metric.value, &metric.reason) {
        (Some(value), _) => format!("{:.1}%", value * 100.0),
        (None, Some(reason)) => format!("n/a ({reason})"),
        (None, None) => "n/a".to_string(),
    }
}

fn demo_request() -> AnalysisRequest {
    AnalysisRequest {
        property: Property {
            address: Address {
                street: "15 Iceboat Terrace Unit 1807".to_string(),
                city: "Toronto".to_string(),
                province: "Ontario".to_string(),
                postal_code: "M5V 4A5".to_string(),
            },
            price: 849_000.0,
            bedrooms: 2,
            bathrooms: 2.0,
            square_feet: Some(780),
            property_type: "Condo".to_string(),
            annual_property_tax: Some(5_094.0),
            monthly_condo_fees: Some(512.0),
            year_built: Some(2012),
        },
        str_comparables: vec![
            json!({ "nightlyRate": 235, "occupancy": 88, "bedrooms": 2, "rating": 4.9 }),
            json!({ "nightly_rate": 210, "occupancy_rate": 0.84, "bedrooms": 2 }),
            json!({ "price": 189, "occupancy": 0.79, "bedrooms": 2 }),
            json!({ "nightlyRate": 175, "occupancy": 0.72, "bedrooms": 1 }),
        ],
        ltr_comparables: vec![
            json!({ "monthlyRent": 3100 }),
            json!({ "monthly_rent": 2950 }),
            json!({ "rent": 2850 }),
        ],
        regulation_records: vec![RegulationRecord {
            city: "Toronto".to_string(),
            province: "Ontario".to_string(),
            allowed: Some(true),
            summary: "Short-term rentals permitted in your principal residence only, capped at \
                      180 nights per year, registration required"
                .to_string(),
            restrictions: vec![
                "Principal residence only".to_string(),
                "Maximum 180 nights per year".to_string(),
                "City registration number must appear in listings".to_string(),
            ],
            source: RegulationSource::Cached,
            license_url: Some(
                "https://www.toronto.ca/community-people/housing-shelter/short-term-rentals/"
                    .to_string(),
            ),
            requires_license: Some(true),
            primary_residence_only: Some(true),
            max_days: Some(180),
            risk_level: None,
            warnings: Vec::new(),
            recommendations: Vec::new(),
        }],
        assumptions: None,
    }
}
