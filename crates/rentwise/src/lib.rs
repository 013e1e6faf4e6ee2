//! Rental revenue and investment metrics engine.
//!
//! The `analysis` module turns a property listing plus raw comparable
//! payloads from upstream providers into a full investment analysis:
//! short-term (nightly) and long-term (monthly) revenue estimates, a
//! recurring expense schedule, financial metrics, and a regulatory
//! compliance read. Every analytic function is pure and re-entrant so
//! the server-rendered report and the interactive what-if recompute
//! path share one arithmetic core.

pub mod analysis;
pub mod config;
pub mod error;
pub mod telemetry;
