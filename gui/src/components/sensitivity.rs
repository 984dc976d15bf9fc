// Interactive sensitivity section: three sliders bounded by configuration,
// plus the resulting what-if scenario returned by the engine.
#![allow(non_snake_case)]
use dioxus::prelude::*;

use shared::models::StockingOutcome;
use shared::utils::{format_guarani, format_kg, format_usd};

use super::results::ResultLine;
use crate::config::AppConfig;
use crate::state::app_state::AppState;

#[component]
pub fn ScenarioSlider(
    label: String,
    min: f64,
    max: f64,
    step: f64,
    value: f64,
    display: String,
    oninput: EventHandler<f64>,
) -> Element {
    rsx! {
        label { class: "field",
            span { "{label}: {display}" }
            input {
                r#type: "range",
                min: "{min}",
                max: "{max}",
                step: "{step}",
                value: "{value}",
                oninput: move |evt| {
                    if let Ok(parsed) = evt.value().parse::<f64>() {
                        oninput.call(parsed);
                    }
                },
            }
        }
    }
}

#[component]
pub fn SensitivityPanel(#[props(!optional)] outcome: Option<StockingOutcome>) -> Element {
    let config = use_context::<AppConfig>();
    let mut state = use_context::<Signal<AppState>>();

    let purchase = state.read().scenario_purchase_price();
    let sale = state.read().scenario_sale_price();
    let daily_gain = state.read().scenario_daily_gain();

    let scenario_view = match outcome {
        Some(scenario) => {
            let profit_class = if scenario.profit_usd >= 0.0 { "positive" } else { "negative" };
            rsx! {
                ResultLine {
                    label: "🐂 Preço compra",
                    value: format!(
                        "₲ {} | $ {}/kg PV",
                        format_guarani(purchase),
                        format_usd(scenario.purchase_price_usd_per_kg),
                    ),
                }
                ResultLine {
                    label: "💵 Preço venda",
                    value: format!("$ {}/kg PV", format_usd(sale)),
                }
                ResultLine {
                    label: "📈 GMD",
                    value: format!("{} kg/dia", format_kg(daily_gain)),
                }
                ResultLine {
                    label: "🟢 Lucro líquido",
                    value: format!("$ {}", format_usd(scenario.profit_usd)),
                    emphasis: profit_class.to_string(),
                }
            }
        }
        None => rsx! {
            p { class: "muted", "Aguardando o motor de cálculo..." }
        },
    };

    rsx! {
        section { class: "panel",
            h2 { "📉 Análise de Sensibilidade Interativa" }
            div { class: "slider-row",
                ScenarioSlider {
                    label: "Preço compra (₲/kg PV)",
                    min: config.sliders.purchase_price.min,
                    max: config.sliders.purchase_price.max,
                    step: config.sliders.purchase_price.step,
                    value: purchase,
                    display: format!("₲ {}", format_guarani(purchase)),
                    oninput: move |v| {
                        state.write().update_scenario(|s| s.purchase_price_local = Some(v))
                    },
                }
                ScenarioSlider {
                    label: "Preço venda (US$/kg PV)",
                    min: config.sliders.sale_price.min,
                    max: config.sliders.sale_price.max,
                    step: config.sliders.sale_price.step,
                    value: sale,
                    display: format!("$ {}", format_usd(sale)),
                    oninput: move |v| {
                        state.write().update_scenario(|s| s.sale_price_usd = Some(v))
                    },
                }
                ScenarioSlider {
                    label: "GMD (kg/dia)",
                    min: config.sliders.daily_gain.min,
                    max: config.sliders.daily_gain.max,
                    step: config.sliders.daily_gain.step,
                    value: daily_gain,
                    display: format_kg(daily_gain),
                    oninput: move |v| {
                        state.write().update_scenario(|s| s.daily_gain_kg = Some(v))
                    },
                }
            }
            h3 { "🔮 Resultado do Cenário" }
            {scenario_view}
        }
    }
}
