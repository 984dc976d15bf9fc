// Impact analysis section: the fixed ±10 g/day profit note plus the two
// variation sliders driving the sequential purchase/sale impact figures.
#![allow(non_snake_case)]
use dioxus::prelude::*;

use shared::utils::{format_pct, format_usd};

use super::sensitivity::ScenarioSlider;
use crate::config::AppConfig;
use crate::services::engine_client::ImpactView;
use crate::state::app_state::AppState;

#[component]
pub fn ImpactPanel(#[props(!optional)] impact: Option<ImpactView>) -> Element {
    let config = use_context::<AppConfig>();
    let mut state = use_context::<Signal<AppState>>();

    let purchase_variation = state.read().purchase_variation_pct;
    let sale_variation = state.read().sale_variation_pct;

    let impact_view = match impact {
        Some(view) => {
            let gain_note = format!(
                "⚖️ A cada ±10 g/dia no ganho de peso, o lucro varia em ~ $ {} no período.",
                format_usd(view.daily_gain_profit_delta_usd),
            );
            let purchase_note = format!(
                "🐂 A cada +{}% no valor de compra do animal, o lucro reduz em ~ $ {} ({}%).",
                format_pct(purchase_variation),
                format_usd(view.estimate.purchase_profit_delta_usd),
                format_pct(view.estimate.purchase_profit_delta_pct),
            );
            let sale_note = format!(
                "💵 A cada +{}% no preço de venda, o lucro aumenta em ~ $ {} ({}%).",
                format_pct(sale_variation),
                format_usd(view.estimate.sale_profit_delta_usd),
                format_pct(view.estimate.sale_profit_delta_pct),
            );
            rsx! {
                p { "{gain_note}" }
                p { "{purchase_note}" }
                p { "{sale_note}" }
            }
        }
        None => rsx! {
            p { class: "muted", "Aguardando o motor de cálculo..." }
        },
    };

    rsx! {
        section { class: "panel",
            h2 { "📈 Análise de Impacto" }
            div { class: "slider-row",
                ScenarioSlider {
                    label: "Variação (%) no valor de compra",
                    min: config.sliders.purchase_variation.min,
                    max: config.sliders.purchase_variation.max,
                    step: config.sliders.purchase_variation.step,
                    value: purchase_variation,
                    display: format!("{}%", format_pct(purchase_variation)),
                    oninput: move |v| state.write().purchase_variation_pct = v,
                }
                ScenarioSlider {
                    label: "Variação (%) no preço de venda",
                    min: config.sliders.sale_variation.min,
                    max: config.sliders.sale_variation.max,
                    step: config.sliders.sale_variation.step,
                    value: sale_variation,
                    display: format!("{}%", format_pct(sale_variation)),
                    oninput: move |v| state.write().sale_variation_pct = v,
                }
            }
            {impact_view}
        }
    }
}
