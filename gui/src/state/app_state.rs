// Global application state for the GUI.
// Holds the current parameter snapshot, the scenario slider overlay, the
// variation percentages and the toolbar status line. Interactions never
// mutate the live snapshot in place; they build a fresh one and swap it in,
// so every computation the engine sees is an immutable snapshot.

use shared::models::{ScenarioOverrides, StockingParams};

use crate::config::AppConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub params: StockingParams,
    pub scenario: ScenarioOverrides,
    pub purchase_variation_pct: f64,
    pub sale_variation_pct: f64,
    pub status: Option<String>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        AppState {
            params: config.form.to_params(),
            scenario: ScenarioOverrides::default(),
            purchase_variation_pct: config.sliders.purchase_variation.default,
            sale_variation_pct: config.sliders.sale_variation.default,
            status: None,
        }
    }

    /// Builds the next parameter snapshot from the current one.
    pub fn update_params(&mut self, apply: impl FnOnce(&mut StockingParams)) {
        let mut next = self.params.clone();
        apply(&mut next);
        self.params = next;
    }

    /// Builds the next scenario overlay from the current one.
    pub fn update_scenario(&mut self, apply: impl FnOnce(&mut ScenarioOverrides)) {
        let mut next = self.scenario.clone();
        apply(&mut next);
        self.scenario = next;
    }

    // Slider positions resolve to the baseline values until moved.
    pub fn scenario_purchase_price(&self) -> f64 {
        self.scenario
            .purchase_price_local
            .unwrap_or(self.params.purchase_price_local)
    }

    pub fn scenario_sale_price(&self) -> f64 {
        self.scenario
            .sale_price_usd
            .unwrap_or(self.params.sale_price_usd)
    }

    pub fn scenario_daily_gain(&self) -> f64 {
        self.scenario
            .daily_gain_kg
            .unwrap_or(self.params.daily_gain_kg)
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(&AppConfig::load_default().unwrap())
    }

    #[test]
    fn test_initial_state_matches_reference_scenario() {
        let state = state();
        assert_eq!(state.params, StockingParams::default());
        assert!(state.scenario.is_empty());
        assert_eq!(state.purchase_variation_pct, 2.0);
        assert_eq!(state.status, None);
    }

    #[test]
    fn test_param_edit_builds_a_fresh_snapshot() {
        let mut state = state();
        let before = state.params.clone();
        state.update_params(|p| p.daily_gain_kg = 0.6);
        assert_eq!(before.daily_gain_kg, 0.49);
        assert_eq!(state.params.daily_gain_kg, 0.6);
        // Everything else carries over.
        assert_eq!(state.params.initial_weight_kg, before.initial_weight_kg);
    }

    #[test]
    fn test_sliders_resolve_to_baseline_until_moved() {
        let mut state = state();
        assert_eq!(state.scenario_sale_price(), 2.4);
        state.update_scenario(|s| s.sale_price_usd = Some(2.9));
        assert_eq!(state.scenario_sale_price(), 2.9);
        assert_eq!(state.scenario_purchase_price(), 20_000.0);
    }
}
