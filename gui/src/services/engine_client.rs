// gRPC client for the ValuationEngine service.
// Thin wrapper over the client generated in the engine crate, converting
// between domain models and wire messages via the engine's own helpers so
// the two sides can never disagree on field mapping.

use anyhow::{Context, Result};
use tonic::transport::Channel;

use engine::services::valuation_service::helpers;
use engine::services::{
    ImpactRequest, ReportRequest, ScenarioRequest, ValuationEngineClient, ValuationRequest,
};
use shared::models::{ImpactEstimate, ScenarioOverrides, StockingOutcome, StockingParams};

/// Impact figures as shown in the analysis panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactView {
    pub estimate: ImpactEstimate,
    /// Profit swing of a fixed ±10 g/day change over the period.
    pub daily_gain_profit_delta_usd: f64,
}

/// Rendered report as returned by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDownload {
    pub report_id: String,
    pub file_name: String,
    pub mime_type: String,
    pub content: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct EngineClient {
    endpoint: String,
}

impl EngineClient {
    pub fn new(host: &str, port: u16) -> Self {
        EngineClient {
            endpoint: format!("http://{}:{}", host, port),
        }
    }

    async fn connect(&self) -> Result<ValuationEngineClient<Channel>> {
        ValuationEngineClient::connect(self.endpoint.clone())
            .await
            .with_context(|| format!("failed to connect to engine at {}", self.endpoint))
    }

    pub async fn compute_baseline(&self, params: &StockingParams) -> Result<StockingOutcome> {
        let mut client = self.connect().await?;
        let response = client
            .compute_baseline(ValuationRequest {
                params: Some(helpers::to_proto_params(params)),
                value_date: String::new(), // engine captures "today"
            })
            .await
            .context("ComputeBaseline failed")?
            .into_inner();
        helpers::to_domain_outcome(&response).map_err(Into::into)
    }

    pub async fn compute_scenario(
        &self,
        params: &StockingParams,
        overrides: &ScenarioOverrides,
    ) -> Result<StockingOutcome> {
        let mut client = self.connect().await?;
        let response = client
            .compute_scenario(ScenarioRequest {
                params: Some(helpers::to_proto_params(params)),
                purchase_price_local: overrides.purchase_price_local,
                sale_price_usd: overrides.sale_price_usd,
                daily_gain_kg: overrides.daily_gain_kg,
                value_date: String::new(),
            })
            .await
            .context("ComputeScenario failed")?
            .into_inner();
        helpers::to_domain_outcome(&response).map_err(Into::into)
    }

    pub async fn estimate_impact(
        &self,
        params: &StockingParams,
        purchase_variation_pct: f64,
        sale_variation_pct: f64,
    ) -> Result<ImpactView> {
        let mut client = self.connect().await?;
        let response = client
            .estimate_impact(ImpactRequest {
                params: Some(helpers::to_proto_params(params)),
                purchase_variation_pct,
                sale_variation_pct,
                value_date: String::new(),
            })
            .await
            .context("EstimateImpact failed")?
            .into_inner();
        Ok(ImpactView {
            estimate: ImpactEstimate {
                purchase_profit_delta_usd: response.purchase_profit_delta_usd,
                purchase_profit_delta_pct: response.purchase_profit_delta_pct,
                sale_profit_delta_usd: response.sale_profit_delta_usd,
                sale_profit_delta_pct: response.sale_profit_delta_pct,
            },
            daily_gain_profit_delta_usd: response.daily_gain_profit_delta_usd,
        })
    }

    pub async fn render_report(&self, params: &StockingParams) -> Result<ReportDownload> {
        let mut client = self.connect().await?;
        let response = client
            .render_report(ReportRequest {
                params: Some(helpers::to_proto_params(params)),
                value_date: String::new(),
            })
            .await
            .context("RenderReport failed")?
            .into_inner();
        tracing::info!(
            report_id = %response.report_id,
            file_name = %response.file_name,
            "Report received from engine"
        );
        Ok(ReportDownload {
            report_id: response.report_id,
            file_name: response.file_name,
            mime_type: response.mime_type,
            content: response.content,
        })
    }
}
