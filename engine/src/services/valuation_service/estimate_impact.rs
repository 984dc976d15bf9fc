// Handler for the EstimateImpact RPC
use std::sync::Arc;

use tonic::{Response, Status};

use crate::error::EngineError;
use crate::services::{ImpactRequest, ImpactResponse};
use crate::valuation::Valuator;

use super::helpers;

pub async fn handle_estimate_impact(
    req_payload: ImpactRequest,
    valuator: Arc<Valuator>,
) -> Result<Response<ImpactResponse>, Status> {
    tracing::debug!(
        purchase_variation_pct = req_payload.purchase_variation_pct,
        sale_variation_pct = req_payload.sale_variation_pct,
        "Handling EstimateImpact in dedicated handler"
    );

    let params_msg = match req_payload.params {
        Some(msg) => msg,
        None => {
            return Err(
                EngineError::RequestError("missing stocking parameters".to_string()).into(),
            );
        }
    };
    let params = helpers::to_domain_params(&params_msg);
    let value_date = helpers::resolve_value_date(&req_payload.value_date)?;

    let impact = valuator.percent_impact(
        &params,
        value_date,
        req_payload.purchase_variation_pct,
        req_payload.sale_variation_pct,
    );
    let daily_gain_profit_delta_usd = valuator.daily_gain_sensitivity(&params);

    Ok(Response::new(ImpactResponse {
        purchase_profit_delta_usd: impact.purchase_profit_delta_usd,
        purchase_profit_delta_pct: impact.purchase_profit_delta_pct,
        sale_profit_delta_usd: impact.sale_profit_delta_usd,
        sale_profit_delta_pct: impact.sale_profit_delta_pct,
        daily_gain_profit_delta_usd,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CostModel;
    use shared::models::StockingParams;

    fn request(purchase_pct: f64, sale_pct: f64) -> ImpactRequest {
        ImpactRequest {
            params: Some(helpers::to_proto_params(&StockingParams::default())),
            purchase_variation_pct: purchase_pct,
            sale_variation_pct: sale_pct,
            value_date: "2025-03-30".to_string(),
        }
    }

    #[tokio::test]
    async fn test_zero_variations_yield_zero_impacts() {
        let valuator = Arc::new(Valuator::new(CostModel::default()));
        let response = handle_estimate_impact(request(0.0, 0.0), valuator)
            .await
            .unwrap()
            .into_inner();
        assert!(response.purchase_profit_delta_usd.abs() < 1e-9);
        assert!(response.sale_profit_delta_usd.abs() < 1e-9);
        // The fixed daily-gain note does not depend on the variations.
        assert!((response.daily_gain_profit_delta_usd - 8.76).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_positive_variations_move_profit_both_ways() {
        let valuator = Arc::new(Valuator::new(CostModel::default()));
        let response = handle_estimate_impact(request(2.0, 2.0), valuator)
            .await
            .unwrap()
            .into_inner();
        assert!(response.purchase_profit_delta_usd > 0.0);
        assert!(response.purchase_profit_delta_pct > 0.0);
        assert!(response.sale_profit_delta_usd > 0.0);
        assert!(response.sale_profit_delta_pct > 0.0);
    }
}
