// Handler for the ComputeScenario RPC
use std::sync::Arc;

use tonic::{Response, Status};

use shared::models::ScenarioOverrides;

use crate::error::EngineError;
use crate::services::{ScenarioRequest, ValuationResponse};
use crate::valuation::Valuator;

use super::helpers;

pub async fn handle_compute_scenario(
    req_payload: ScenarioRequest,
    valuator: Arc<Valuator>,
) -> Result<Response<ValuationResponse>, Status> {
    tracing::debug!(
        purchase_override = ?req_payload.purchase_price_local,
        sale_override = ?req_payload.sale_price_usd,
        daily_gain_override = ?req_payload.daily_gain_kg,
        "Handling ComputeScenario in dedicated handler"
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
    let overrides = ScenarioOverrides {
        purchase_price_local: req_payload.purchase_price_local,
        sale_price_usd: req_payload.sale_price_usd,
        daily_gain_kg: req_payload.daily_gain_kg,
    };
    let value_date = helpers::resolve_value_date(&req_payload.value_date)?;

    let outcome = valuator.scenario(&params, &overrides, value_date);
    Ok(Response::new(helpers::to_proto_outcome(&outcome)))
}
