use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Input snapshot for one valuation request.
///
/// Purchase-side prices are quoted in guaraníes (₲) per kg of live weight,
/// everything downstream is in US$. A snapshot is built fresh for every
/// computation; nothing mutates one in place after it is handed to the
/// engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockingParams {
    pub initial_weight_kg: f64,
    /// ₲ per kg live weight.
    pub purchase_price_local: f64,
    /// ₲ per US$.
    pub exchange_rate: f64,
    /// Days in pasture; positive.
    pub grazing_days: u32,
    /// Average daily weight gain (GMD), kg/day.
    pub daily_gain_kg: f64,
    pub monthly_rent_usd: f64,
    pub monthly_nutrition_usd: f64,
    pub monthly_operations_usd: f64,
    /// Fraction per year, e.g. 0.085 for 8.5%.
    pub annual_interest_rate: f64,
    /// US$ per kg live weight.
    pub sale_price_usd: f64,
}

impl Default for StockingParams {
    fn default() -> Self {
        // Reference scenario: 175 kg calf bought at ₲20,000/kg with the
        // exchange at ₲7,320/US$, one year in pasture at 490 g/day.
        StockingParams {
            initial_weight_kg: 175.0,
            purchase_price_local: 20_000.0,
            exchange_rate: 7_320.0,
            grazing_days: 365,
            daily_gain_kg: 0.49,
            monthly_rent_usd: 5.40,
            monthly_nutrition_usd: 4.0,
            monthly_operations_usd: 3.44,
            annual_interest_rate: 0.085,
            sale_price_usd: 2.40,
        }
    }
}

/// Slider overlay for what-if scenarios. `None` keeps the baseline value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOverrides {
    pub purchase_price_local: Option<f64>,
    pub sale_price_usd: Option<f64>,
    pub daily_gain_kg: Option<f64>,
}

impl ScenarioOverrides {
    pub fn is_empty(&self) -> bool {
        self.purchase_price_local.is_none()
            && self.sale_price_usd.is_none()
            && self.daily_gain_kg.is_none()
    }
}

/// Fully derived result set for one parameter snapshot.
///
/// Every field is a closed-form function of the inputs, the cost model and
/// the value date. Guarded ratios (margins, ROI, premium) are exactly 0.0
/// when their denominator is zero or negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockingOutcome {
    pub purchase_cost_usd: f64,
    pub purchase_price_usd_per_kg: f64,
    /// Ágio: purchase price per kg over (or under) the sale price, in %.
    pub premium_pct: f64,
    pub final_weight_kg: f64,
    /// GPV: total weight gained over the period.
    pub weight_gain_kg: f64,
    pub months: f64,
    pub monthly_cost_usd: f64,
    pub period_cost_usd: f64,
    pub freight_usd: f64,
    pub commission_usd: f64,
    pub total_cost_usd: f64,
    pub revenue_usd: f64,
    pub interest_cost_usd: f64,
    pub profit_usd: f64,
    pub profit_margin_pct: f64,
    pub monthly_margin_pct: f64,
    pub roi_pct: f64,
    pub monthly_roi_pct: f64,
    pub roi_on_total_cost_pct: f64,
    pub monthly_roi_on_total_cost_pct: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Result of the sequential purchase/sale variation analysis.
///
/// The sale figures are measured against the purchase-adjusted scenario,
/// not against the original baseline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImpactEstimate {
    /// Profit reduction caused by the purchase-cost variation, US$.
    pub purchase_profit_delta_usd: f64,
    /// Same reduction as a percentage of the baseline profit.
    pub purchase_profit_delta_pct: f64,
    /// Profit increase caused by the sale-price variation, US$.
    pub sale_profit_delta_usd: f64,
    /// Same increase as a percentage of the purchase-adjusted profit.
    pub sale_profit_delta_pct: f64,
}
