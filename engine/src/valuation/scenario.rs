// What-if scenarios: the slider values overlay the baseline snapshot and
// the full formula set runs again. No partial recomputation, so a scenario
// can never drift from what a baseline over the same values would produce.

use chrono::NaiveDate;
use shared::models::{ScenarioOverrides, StockingOutcome, StockingParams};

use super::Valuator;

impl Valuator {
    pub fn scenario(
        &self,
        params: &StockingParams,
        overrides: &ScenarioOverrides,
        value_date: NaiveDate,
    ) -> StockingOutcome {
        let effective = StockingParams {
            purchase_price_local: overrides
                .purchase_price_local
                .unwrap_or(params.purchase_price_local),
            sale_price_usd: overrides.sale_price_usd.unwrap_or(params.sale_price_usd),
            daily_gain_kg: overrides.daily_gain_kg.unwrap_or(params.daily_gain_kg),
            ..params.clone()
        };
        self.baseline(&effective, value_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CostModel;
    use crate::valuation::test_support::assert_close;

    fn value_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 30).unwrap()
    }

    #[test]
    fn test_empty_overrides_match_baseline() {
        let valuator = Valuator::new(CostModel::default());
        let params = StockingParams::default();
        let baseline = valuator.baseline(&params, value_date());
        let scenario = valuator.scenario(&params, &ScenarioOverrides::default(), value_date());
        assert_eq!(baseline, scenario);
    }

    #[test]
    fn test_daily_gain_override_moves_final_weight() {
        let valuator = Valuator::new(CostModel::default());
        let params = StockingParams::default();
        let overrides = ScenarioOverrides {
            daily_gain_kg: Some(0.6),
            ..ScenarioOverrides::default()
        };
        let outcome = valuator.scenario(&params, &overrides, value_date());
        assert_close(outcome.final_weight_kg, 175.0 + 0.6 * 365.0, 1e-9);
        // The purchase side is untouched.
        let baseline = valuator.baseline(&params, value_date());
        assert_eq!(outcome.purchase_cost_usd, baseline.purchase_cost_usd);
    }

    #[test]
    fn test_purchase_price_override_moves_cost_only() {
        let valuator = Valuator::new(CostModel::default());
        let params = StockingParams::default();
        let overrides = ScenarioOverrides {
            purchase_price_local: Some(22_000.0),
            ..ScenarioOverrides::default()
        };
        let outcome = valuator.scenario(&params, &overrides, value_date());
        assert_close(outcome.purchase_cost_usd, 175.0 * 22_000.0 / 7_320.0, 1e-9);
        let baseline = valuator.baseline(&params, value_date());
        assert_eq!(outcome.revenue_usd, baseline.revenue_usd);
        assert!(outcome.profit_usd < baseline.profit_usd);
    }

    #[test]
    fn test_combined_overrides() {
        let valuator = Valuator::new(CostModel::default());
        let params = StockingParams::default();
        let overrides = ScenarioOverrides {
            purchase_price_local: Some(18_000.0),
            sale_price_usd: Some(2.6),
            daily_gain_kg: Some(0.55),
        };
        let outcome = valuator.scenario(&params, &overrides, value_date());
        let expected_weight = 175.0 + 0.55 * 365.0;
        assert_close(outcome.final_weight_kg, expected_weight, 1e-9);
        assert_close(outcome.revenue_usd, expected_weight * 2.6, 1e-9);
        assert_close(outcome.purchase_cost_usd, 175.0 * 18_000.0 / 7_320.0, 1e-9);
    }
}
