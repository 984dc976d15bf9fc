// Handler for the ComputeBaseline RPC
use std::sync::Arc;

use tonic::{Response, Status};

use crate::error::EngineError;
use crate::services::{ValuationRequest, ValuationResponse};
use crate::valuation::Valuator;

use super::helpers;

pub async fn handle_compute_baseline(
    req_payload: ValuationRequest,
    valuator: Arc<Valuator>,
) -> Result<Response<ValuationResponse>, Status> {
    tracing::debug!(value_date = %req_payload.value_date, "Handling ComputeBaseline in dedicated handler");

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

    let outcome = valuator.baseline(&params, value_date);
    Ok(Response::new(helpers::to_proto_outcome(&outcome)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CostModel;
    use shared::models::StockingParams;

    fn request(value_date: &str) -> ValuationRequest {
        ValuationRequest {
            params: Some(helpers::to_proto_params(&StockingParams::default())),
            value_date: value_date.to_string(),
        }
    }

    #[tokio::test]
    async fn test_baseline_over_fixed_value_date() {
        let valuator = Arc::new(Valuator::new(CostModel::default()));
        let response = handle_compute_baseline(request("2025-03-30"), valuator)
            .await
            .unwrap()
            .into_inner();

        assert!((response.purchase_cost_usd - 478.1421).abs() < 1e-3);
        assert!((response.final_weight_kg - 353.85).abs() < 1e-9);
        assert!((response.revenue_usd - 849.24).abs() < 1e-9);
        assert_eq!(response.start_date, "2025-03-30");
        assert_eq!(response.end_date, "2026-03-30");
    }

    #[tokio::test]
    async fn test_missing_params_is_invalid_argument() {
        let valuator = Arc::new(Valuator::new(CostModel::default()));
        let req = ValuationRequest {
            params: None,
            value_date: String::new(),
        };
        let status = handle_compute_baseline(req, valuator).await.unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
    }

    #[tokio::test]
    async fn test_malformed_value_date_is_invalid_argument() {
        let valuator = Arc::new(Valuator::new(CostModel::default()));
        let status = handle_compute_baseline(request("not-a-date"), valuator)
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
    }
}
