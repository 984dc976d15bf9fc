// Helper functions shared by the valuation service RPC handlers:
// proto <-> domain conversion and value-date resolution.

use chrono::{Local, NaiveDate};
use shared::models::{StockingOutcome, StockingParams as DomainParams};

use crate::error::EngineError;
use crate::services::{StockingParams as ProtoParams, ValuationResponse};

const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn to_domain_params(msg: &ProtoParams) -> DomainParams {
    DomainParams {
        initial_weight_kg: msg.initial_weight_kg,
        purchase_price_local: msg.purchase_price_local,
        exchange_rate: msg.exchange_rate,
        grazing_days: msg.grazing_days,
        daily_gain_kg: msg.daily_gain_kg,
        monthly_rent_usd: msg.monthly_rent_usd,
        monthly_nutrition_usd: msg.monthly_nutrition_usd,
        monthly_operations_usd: msg.monthly_operations_usd,
        annual_interest_rate: msg.annual_interest_rate,
        sale_price_usd: msg.sale_price_usd,
    }
}

pub fn to_proto_params(params: &DomainParams) -> ProtoParams {
    ProtoParams {
        initial_weight_kg: params.initial_weight_kg,
        purchase_price_local: params.purchase_price_local,
        exchange_rate: params.exchange_rate,
        grazing_days: params.grazing_days,
        daily_gain_kg: params.daily_gain_kg,
        monthly_rent_usd: params.monthly_rent_usd,
        monthly_nutrition_usd: params.monthly_nutrition_usd,
        monthly_operations_usd: params.monthly_operations_usd,
        annual_interest_rate: params.annual_interest_rate,
        sale_price_usd: params.sale_price_usd,
    }
}

pub fn to_proto_outcome(outcome: &StockingOutcome) -> ValuationResponse {
    ValuationResponse {
        purchase_cost_usd: outcome.purchase_cost_usd,
        purchase_price_usd_per_kg: outcome.purchase_price_usd_per_kg,
        premium_pct: outcome.premium_pct,
        final_weight_kg: outcome.final_weight_kg,
        weight_gain_kg: outcome.weight_gain_kg,
        months: outcome.months,
        monthly_cost_usd: outcome.monthly_cost_usd,
        period_cost_usd: outcome.period_cost_usd,
        freight_usd: outcome.freight_usd,
        commission_usd: outcome.commission_usd,
        total_cost_usd: outcome.total_cost_usd,
        revenue_usd: outcome.revenue_usd,
        interest_cost_usd: outcome.interest_cost_usd,
        profit_usd: outcome.profit_usd,
        profit_margin_pct: outcome.profit_margin_pct,
        monthly_margin_pct: outcome.monthly_margin_pct,
        roi_pct: outcome.roi_pct,
        monthly_roi_pct: outcome.monthly_roi_pct,
        roi_on_total_cost_pct: outcome.roi_on_total_cost_pct,
        monthly_roi_on_total_cost_pct: outcome.monthly_roi_on_total_cost_pct,
        start_date: outcome.start_date.format(WIRE_DATE_FORMAT).to_string(),
        end_date: outcome.end_date.format(WIRE_DATE_FORMAT).to_string(),
    }
}

pub fn to_domain_outcome(msg: &ValuationResponse) -> Result<StockingOutcome, EngineError> {
    Ok(StockingOutcome {
        purchase_cost_usd: msg.purchase_cost_usd,
        purchase_price_usd_per_kg: msg.purchase_price_usd_per_kg,
        premium_pct: msg.premium_pct,
        final_weight_kg: msg.final_weight_kg,
        weight_gain_kg: msg.weight_gain_kg,
        months: msg.months,
        monthly_cost_usd: msg.monthly_cost_usd,
        period_cost_usd: msg.period_cost_usd,
        freight_usd: msg.freight_usd,
        commission_usd: msg.commission_usd,
        total_cost_usd: msg.total_cost_usd,
        revenue_usd: msg.revenue_usd,
        interest_cost_usd: msg.interest_cost_usd,
        profit_usd: msg.profit_usd,
        profit_margin_pct: msg.profit_margin_pct,
        monthly_margin_pct: msg.monthly_margin_pct,
        roi_pct: msg.roi_pct,
        monthly_roi_pct: msg.monthly_roi_pct,
        roi_on_total_cost_pct: msg.roi_on_total_cost_pct,
        monthly_roi_on_total_cost_pct: msg.monthly_roi_on_total_cost_pct,
        start_date: parse_wire_date(&msg.start_date)?,
        end_date: parse_wire_date(&msg.end_date)?,
    })
}

fn parse_wire_date(raw: &str) -> Result<NaiveDate, EngineError> {
    NaiveDate::parse_from_str(raw, WIRE_DATE_FORMAT)
        .map_err(|e| EngineError::RequestError(format!("Invalid wire date '{}': {}", raw, e)))
}

/// Resolves the request's value date. An empty string means "today",
/// captured exactly once here so the valuation core stays clock-free.
pub fn resolve_value_date(raw: &str) -> Result<NaiveDate, EngineError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(trimmed, WIRE_DATE_FORMAT)
        .map_err(|e| EngineError::RequestError(format!("Invalid value_date '{}': {}", raw, e)))
}
