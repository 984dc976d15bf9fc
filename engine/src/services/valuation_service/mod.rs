// engine/src/services/valuation_service/mod.rs
// Main module hub for the valuation service: the ValuationService struct,
// its ValuationEngine trait impl, and one submodule per RPC handler.

use std::sync::Arc;

use tonic::{Request, Response, Status};

use crate::config::CostModel;
use crate::report::ReportSink;
use crate::valuation::Valuator;

use super::{
    ImpactRequest, ImpactResponse, ReportRequest, ReportResponse, ScenarioRequest,
    ValuationEngine, ValuationRequest, ValuationResponse,
};

pub mod compute_baseline;
pub mod compute_scenario;
pub mod estimate_impact;
pub mod helpers;
pub mod render_report;

// The service is stateless: a shared immutable Valuator plus the report
// sink. Every request reads its own parameter snapshot.
pub struct ValuationService {
    valuator: Arc<Valuator>,
    report_sink: Arc<dyn ReportSink>,
}

impl ValuationService {
    pub fn new(cost_model: CostModel, report_sink: Arc<dyn ReportSink>) -> Self {
        ValuationService {
            valuator: Arc::new(Valuator::new(cost_model)),
            report_sink,
        }
    }
}

#[tonic::async_trait]
impl ValuationEngine for ValuationService {
    async fn compute_baseline(
        &self,
        request: Request<ValuationRequest>,
    ) -> Result<Response<ValuationResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(
            value_date = %req_payload.value_date,
            "Received ComputeBaselineRequest in main service, dispatching to handler."
        );
        compute_baseline::handle_compute_baseline(req_payload, self.valuator.clone()).await
    }

    async fn compute_scenario(
        &self,
        request: Request<ScenarioRequest>,
    ) -> Result<Response<ValuationResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(
            purchase_override = ?req_payload.purchase_price_local,
            sale_override = ?req_payload.sale_price_usd,
            daily_gain_override = ?req_payload.daily_gain_kg,
            "Received ComputeScenarioRequest in main service, dispatching to handler."
        );
        compute_scenario::handle_compute_scenario(req_payload, self.valuator.clone()).await
    }

    async fn estimate_impact(
        &self,
        request: Request<ImpactRequest>,
    ) -> Result<Response<ImpactResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(
            purchase_variation_pct = req_payload.purchase_variation_pct,
            sale_variation_pct = req_payload.sale_variation_pct,
            "Received EstimateImpactRequest in main service, dispatching to handler."
        );
        estimate_impact::handle_estimate_impact(req_payload, self.valuator.clone()).await
    }

    async fn render_report(
        &self,
        request: Request<ReportRequest>,
    ) -> Result<Response<ReportResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(
            value_date = %req_payload.value_date,
            "Received RenderReportRequest in main service, dispatching to handler."
        );
        render_report::handle_render_report(
            req_payload,
            self.valuator.clone(),
            self.report_sink.clone(),
        )
        .await
    }
}
