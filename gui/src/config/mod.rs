// GUI configuration module
pub mod theme;

// Structure of the application configuration, mirroring
// assets/config/default.json: window/app settings, the engine endpoint,
// form defaults and the slider bounds.
use serde::Deserialize;
use shared::models::StockingParams;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    pub engine: EngineConnSettings,
    pub form: FormDefaults,
    pub sliders: SliderConfigs,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub theme: String, // "dark" or "light"
    pub language: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EngineConnSettings {
    pub host: String,
    pub port: u16,
}

/// Form defaults for the reference scenario. The interest field is entered
/// as a percentage and converted to a fraction when the snapshot is built.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FormDefaults {
    pub initial_weight_kg: f64,
    pub purchase_price_local: f64,
    pub exchange_rate: f64,
    pub grazing_days: u32,
    pub daily_gain_kg: f64,
    pub monthly_rent_usd: f64,
    pub monthly_nutrition_usd: f64,
    pub monthly_operations_usd: f64,
    pub annual_interest_pct: f64,
    pub sale_price_usd: f64,
}

impl FormDefaults {
    pub fn to_params(&self) -> StockingParams {
        StockingParams {
            initial_weight_kg: self.initial_weight_kg,
            purchase_price_local: self.purchase_price_local,
            exchange_rate: self.exchange_rate,
            grazing_days: self.grazing_days,
            daily_gain_kg: self.daily_gain_kg,
            monthly_rent_usd: self.monthly_rent_usd,
            monthly_nutrition_usd: self.monthly_nutrition_usd,
            monthly_operations_usd: self.monthly_operations_usd,
            annual_interest_rate: self.annual_interest_pct / 100.0,
            sale_price_usd: self.sale_price_usd,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SliderConfigs {
    pub purchase_price: SliderBounds,
    pub sale_price: SliderBounds,
    pub daily_gain: SliderBounds,
    pub purchase_variation: VariationSlider,
    pub sale_variation: VariationSlider,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct SliderBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct VariationSlider {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl AppConfig {
    // The default config ships embedded in the binary; a user-specific file
    // could be layered on top later.
    pub fn load_default() -> Result<Self, anyhow::Error> {
        let config_str = include_str!("../../assets/config/default.json");
        let config: AppConfig = serde_json::from_str(config_str)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = AppConfig::load_default().unwrap();
        assert_eq!(config.engine.port, 50051);
        assert_eq!(config.app.language, "pt-BR");
        assert!(config.sliders.purchase_price.min < config.sliders.purchase_price.max);
        assert!(config.sliders.daily_gain.step > 0.0);
    }

    #[test]
    fn test_form_defaults_build_the_reference_snapshot() {
        let config = AppConfig::load_default().unwrap();
        let params = config.form.to_params();
        assert_eq!(params, StockingParams::default());
    }
}
