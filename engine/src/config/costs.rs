// Cost model constants, exposed as configuration rather than hidden in the
// formulas. Two variants of the calculation circulate among users: one with
// fixed freight/commission acquisition costs and a 30.5-day month, one with
// neither auxiliary cost and a 30-day month. Both are expressible here
// without touching the valuation code.

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CostModel {
    /// Divisor turning grazing days into months.
    pub days_per_month: f64,
    /// Fixed freight charged once on acquisition, US$.
    pub freight_usd: f64,
    /// Fixed broker commission charged once on acquisition, US$.
    pub commission_usd: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        CostModel {
            days_per_month: 30.5,
            freight_usd: 8.0,
            commission_usd: 4.0,
        }
    }
}

impl CostModel {
    /// The lean variant: 30-day months, no auxiliary acquisition costs.
    pub fn without_auxiliary() -> Self {
        CostModel {
            days_per_month: 30.0,
            freight_usd: 0.0,
            commission_usd: 0.0,
        }
    }
}
