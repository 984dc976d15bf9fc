// Baseline valuation: the full derived result set for one parameter
// snapshot. Every ratio whose denominator can be zero or negative falls
// back to exactly 0.0 instead of faulting, so the computation is total over
// the whole input domain.

use chrono::{Duration, NaiveDate};
use shared::models::{StockingOutcome, StockingParams};

use super::Valuator;

impl Valuator {
    pub fn baseline(&self, params: &StockingParams, value_date: NaiveDate) -> StockingOutcome {
        let days = params.grazing_days as f64;

        let (purchase_cost_usd, purchase_price_usd_per_kg) = if params.exchange_rate > 0.0 {
            (
                params.initial_weight_kg * params.purchase_price_local / params.exchange_rate,
                params.purchase_price_local / params.exchange_rate,
            )
        } else {
            (0.0, 0.0)
        };

        let premium_pct = if params.sale_price_usd > 0.0 {
            (purchase_price_usd_per_kg - params.sale_price_usd) / params.sale_price_usd * 100.0
        } else {
            0.0
        };

        let final_weight_kg = params.initial_weight_kg + params.daily_gain_kg * days;
        let weight_gain_kg = final_weight_kg - params.initial_weight_kg;

        let months = if self.cost_model.days_per_month > 0.0 {
            days / self.cost_model.days_per_month
        } else {
            0.0
        };
        let monthly_cost_usd =
            params.monthly_rent_usd + params.monthly_nutrition_usd + params.monthly_operations_usd;
        let period_cost_usd = monthly_cost_usd * months;

        let total_cost_usd = purchase_cost_usd
            + period_cost_usd
            + self.cost_model.freight_usd
            + self.cost_model.commission_usd;

        let revenue_usd = final_weight_kg * params.sale_price_usd;
        let interest_cost_usd = purchase_cost_usd * params.annual_interest_rate * (days / 365.0);
        let profit_usd = revenue_usd - total_cost_usd - interest_cost_usd;

        let profit_margin_pct = if revenue_usd > 0.0 {
            profit_usd / revenue_usd * 100.0
        } else {
            0.0
        };
        let monthly_margin_pct = if months > 0.0 { profit_margin_pct / months } else { 0.0 };

        let roi_pct = if purchase_cost_usd > 0.0 {
            profit_usd / purchase_cost_usd * 100.0
        } else {
            0.0
        };
        let monthly_roi_pct = if months > 0.0 { roi_pct / months } else { 0.0 };

        let roi_on_total_cost_pct = if total_cost_usd > 0.0 {
            profit_usd / total_cost_usd * 100.0
        } else {
            0.0
        };
        let monthly_roi_on_total_cost_pct = if months > 0.0 {
            roi_on_total_cost_pct / months
        } else {
            0.0
        };

        StockingOutcome {
            purchase_cost_usd,
            purchase_price_usd_per_kg,
            premium_pct,
            final_weight_kg,
            weight_gain_kg,
            months,
            monthly_cost_usd,
            period_cost_usd,
            freight_usd: self.cost_model.freight_usd,
            commission_usd: self.cost_model.commission_usd,
            total_cost_usd,
            revenue_usd,
            interest_cost_usd,
            profit_usd,
            profit_margin_pct,
            monthly_margin_pct,
            roi_pct,
            monthly_roi_pct,
            roi_on_total_cost_pct,
            monthly_roi_on_total_cost_pct,
            start_date: value_date,
            end_date: value_date + Duration::days(params.grazing_days as i64),
        }
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
    fn test_reference_scenario() {
        let valuator = Valuator::new(CostModel::default());
        let outcome = valuator.baseline(&StockingParams::default(), value_date());

        // 175 kg × ₲20,000 / ₲7,320 per US$
        assert_close(outcome.purchase_cost_usd, 478.1421, 1e-3);
        assert_close(outcome.purchase_price_usd_per_kg, 2.7322, 1e-3);
        // 175 + 0.49 × 365
        assert_close(outcome.final_weight_kg, 353.85, 1e-9);
        assert_close(outcome.weight_gain_kg, 178.85, 1e-9);
        // 353.85 × 2.40
        assert_close(outcome.revenue_usd, 849.24, 1e-9);
        assert_close(outcome.months, 365.0 / 30.5, 1e-9);
        assert_close(outcome.monthly_cost_usd, 12.84, 1e-9);
        assert_close(outcome.interest_cost_usd, 478.1421 * 0.085, 1e-3);
        assert_eq!(outcome.freight_usd, 8.0);
        assert_eq!(outcome.commission_usd, 4.0);
        // Purchase price per kg sits ~13.8% above the sale price.
        assert_close(outcome.premium_pct, 13.84, 0.01);
        assert!(outcome.profit_usd > 0.0);
        assert!(outcome.roi_pct > 0.0);
        assert!(outcome.roi_on_total_cost_pct < outcome.roi_pct);
    }

    #[test]
    fn test_deterministic_under_injected_date() {
        let valuator = Valuator::new(CostModel::default());
        let params = StockingParams::default();
        let first = valuator.baseline(&params, value_date());
        let second = valuator.baseline(&params, value_date());
        assert_eq!(first, second);
    }

    #[test]
    fn test_dates_span_grazing_period() {
        let valuator = Valuator::new(CostModel::default());
        let outcome = valuator.baseline(&StockingParams::default(), value_date());
        assert_eq!(outcome.start_date, value_date());
        assert_eq!(
            outcome.end_date,
            NaiveDate::from_ymd_opt(2026, 3, 30).unwrap()
        );
    }

    #[test]
    fn test_zero_sale_price_guards() {
        let valuator = Valuator::new(CostModel::default());
        let params = StockingParams {
            sale_price_usd: 0.0,
            ..StockingParams::default()
        };
        let outcome = valuator.baseline(&params, value_date());
        assert_eq!(outcome.premium_pct, 0.0);
        assert_eq!(outcome.revenue_usd, 0.0);
        assert_eq!(outcome.profit_margin_pct, 0.0);
        assert_eq!(outcome.monthly_margin_pct, 0.0);
    }

    #[test]
    fn test_zero_purchase_cost_guards_roi() {
        let valuator = Valuator::new(CostModel::default());
        let params = StockingParams {
            initial_weight_kg: 0.0,
            ..StockingParams::default()
        };
        let outcome = valuator.baseline(&params, value_date());
        assert_eq!(outcome.purchase_cost_usd, 0.0);
        assert_eq!(outcome.roi_pct, 0.0);
        assert_eq!(outcome.monthly_roi_pct, 0.0);
        assert_eq!(outcome.interest_cost_usd, 0.0);
    }

    #[test]
    fn test_zero_exchange_rate_is_not_a_fault() {
        let valuator = Valuator::new(CostModel::default());
        let params = StockingParams {
            exchange_rate: 0.0,
            ..StockingParams::default()
        };
        let outcome = valuator.baseline(&params, value_date());
        assert_eq!(outcome.purchase_cost_usd, 0.0);
        assert_eq!(outcome.purchase_price_usd_per_kg, 0.0);
        // Premium compares a zero purchase price against the sale price.
        assert_eq!(outcome.premium_pct, -100.0);
    }

    #[test]
    fn test_zero_total_cost_guards_roi_on_cost() {
        let valuator = Valuator::new(CostModel::without_auxiliary());
        let params = StockingParams {
            initial_weight_kg: 0.0,
            monthly_rent_usd: 0.0,
            monthly_nutrition_usd: 0.0,
            monthly_operations_usd: 0.0,
            ..StockingParams::default()
        };
        let outcome = valuator.baseline(&params, value_date());
        assert_eq!(outcome.total_cost_usd, 0.0);
        assert_eq!(outcome.roi_on_total_cost_pct, 0.0);
        assert_eq!(outcome.monthly_roi_on_total_cost_pct, 0.0);
    }

    #[test]
    fn test_zero_months_guards_monthly_rates() {
        let valuator = Valuator::new(CostModel {
            days_per_month: 0.0,
            ..CostModel::default()
        });
        let outcome = valuator.baseline(&StockingParams::default(), value_date());
        assert_eq!(outcome.months, 0.0);
        assert_eq!(outcome.period_cost_usd, 0.0);
        assert_eq!(outcome.monthly_margin_pct, 0.0);
        assert_eq!(outcome.monthly_roi_pct, 0.0);
        assert_eq!(outcome.monthly_roi_on_total_cost_pct, 0.0);
    }

    #[test]
    fn test_daily_gain_monotonicity() {
        let valuator = Valuator::new(CostModel::default());
        let slow = StockingParams::default();
        let fast = StockingParams {
            daily_gain_kg: slow.daily_gain_kg + 0.05,
            ..slow.clone()
        };
        let slow_outcome = valuator.baseline(&slow, value_date());
        let fast_outcome = valuator.baseline(&fast, value_date());
        assert!(fast_outcome.final_weight_kg > slow_outcome.final_weight_kg);
        assert!(fast_outcome.revenue_usd > slow_outcome.revenue_usd);
        assert!(fast_outcome.profit_usd > slow_outcome.profit_usd);
    }

    #[test]
    fn test_lean_cost_model_drops_auxiliary_costs() {
        let default_outcome =
            Valuator::new(CostModel::default()).baseline(&StockingParams::default(), value_date());
        let lean_outcome = Valuator::new(CostModel::without_auxiliary())
            .baseline(&StockingParams::default(), value_date());
        assert_eq!(lean_outcome.freight_usd, 0.0);
        assert_eq!(lean_outcome.commission_usd, 0.0);
        // 30-day months stretch the same grazing period over more of them.
        assert!(lean_outcome.months > default_outcome.months);
    }
}
