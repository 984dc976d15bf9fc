// Valuation module
// Stateless closed-form valuation of a pasture stocking cycle. The Valuator
// carries only the cost model; every operation is a pure function of its
// arguments, with the value date injected explicitly so results are
// reproducible under test.

pub mod baseline;
pub mod impact;
pub mod scenario;

pub use impact::DAILY_GAIN_INCREMENT_KG;

use crate::config::CostModel;

pub struct Valuator {
    cost_model: CostModel,
}

impl Valuator {
    pub fn new(cost_model: CostModel) -> Self {
        Valuator { cost_model }
    }

    pub fn cost_model(&self) -> &CostModel {
        &self.cost_model
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {} within {} of {}",
            actual,
            tolerance,
            expected
        );
    }
}
