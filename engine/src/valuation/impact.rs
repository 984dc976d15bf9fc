// Impact analysis: how much profit moves for a small change on either side
// of the trade. The purchase and sale variations compose sequentially (the
// sale impact is measured against the purchase-adjusted scenario), and the
// fixed daily-gain note prices a ±10 g/day swing over the whole period.

use chrono::NaiveDate;
use shared::models::{ImpactEstimate, StockingParams};

use super::Valuator;

/// Fixed step of the daily-gain sensitivity note: 0.01 kg/day (10 g/day).
pub const DAILY_GAIN_INCREMENT_KG: f64 = 0.01;

impl Valuator {
    /// Marginal profit swing of a `DAILY_GAIN_INCREMENT_KG` change in daily
    /// gain held for the whole grazing period.
    pub fn daily_gain_sensitivity(&self, params: &StockingParams) -> f64 {
        DAILY_GAIN_INCREMENT_KG * params.grazing_days as f64 * params.sale_price_usd
    }

    /// Profit deltas for a percentage variation on the purchase cost and,
    /// against that adjusted scenario, on the sale price.
    ///
    /// The adjusted cost base folds the recomputed interest in, so a 0/0
    /// variation reproduces the baseline profit exactly and both deltas are
    /// zero.
    pub fn percent_impact(
        &self,
        params: &StockingParams,
        value_date: NaiveDate,
        purchase_variation_pct: f64,
        sale_variation_pct: f64,
    ) -> ImpactEstimate {
        let base = self.baseline(params, value_date);
        let days = params.grazing_days as f64;

        let adjusted_purchase = base.purchase_cost_usd * (1.0 + purchase_variation_pct / 100.0);
        let adjusted_interest = adjusted_purchase * params.annual_interest_rate * (days / 365.0);
        let adjusted_cost_base = adjusted_purchase
            + base.period_cost_usd
            + self.cost_model.freight_usd
            + self.cost_model.commission_usd
            + adjusted_interest;
        let adjusted_profit = base.revenue_usd - adjusted_cost_base;

        let purchase_profit_delta_usd = base.profit_usd - adjusted_profit;
        let purchase_profit_delta_pct = if base.profit_usd != 0.0 {
            purchase_profit_delta_usd / base.profit_usd * 100.0
        } else {
            0.0
        };

        let adjusted_sale_price = params.sale_price_usd * (1.0 + sale_variation_pct / 100.0);
        let adjusted_revenue = base.final_weight_kg * adjusted_sale_price;
        let sale_profit = adjusted_revenue - adjusted_cost_base;

        let sale_profit_delta_usd = sale_profit - adjusted_profit;
        let sale_profit_delta_pct = if adjusted_profit != 0.0 {
            sale_profit_delta_usd / adjusted_profit * 100.0
        } else {
            0.0
        };

        ImpactEstimate {
            purchase_profit_delta_usd,
            purchase_profit_delta_pct,
            sale_profit_delta_usd,
            sale_profit_delta_pct,
        }
    }
}
