use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use rentwise::analysis::AnalysisEngine;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) engine: Arc<AnalysisEngine>,
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}
