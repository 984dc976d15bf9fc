// Parameter entry form. Every edit builds a fresh snapshot through
// AppState::update_params, so the engine always sees immutable inputs.
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::state::app_state::AppState;

#[component]
fn NumberField(label: String, value: f64, step: f64, oninput: EventHandler<f64>) -> Element {
    rsx! {
        label { class: "field",
            span { "{label}" }
            input {
                r#type: "number",
                min: "0",
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
pub fn ParamForm() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let params = state.read().params.clone();

    rsx! {
        aside { class: "param-form",
            h2 { "Parâmetros de Entrada" }
            NumberField {
                label: "Peso inicial (kg)",
                value: params.initial_weight_kg,
                step: 1.0,
                oninput: move |v| state.write().update_params(|p| p.initial_weight_kg = v),
            }
            NumberField {
                label: "Preço compra (₲/kg PV)",
                value: params.purchase_price_local,
                step: 100.0,
                oninput: move |v| state.write().update_params(|p| p.purchase_price_local = v),
            }
            NumberField {
                label: "Câmbio (₲/US$)",
                value: params.exchange_rate,
                step: 10.0,
                oninput: move |v| state.write().update_params(|p| p.exchange_rate = v),
            }
            label { class: "field",
                span { "Período (dias em pastejo)" }
                input {
                    r#type: "number",
                    min: "1",
                    step: "1",
                    value: "{params.grazing_days}",
                    oninput: move |evt| {
                        if let Ok(parsed) = evt.value().parse::<u32>() {
                            state.write().update_params(|p| p.grazing_days = parsed);
                        }
                    },
                }
            }
            NumberField {
                label: "Ganho médio diário (kg/dia)",
                value: params.daily_gain_kg,
                step: 0.01,
                oninput: move |v| state.write().update_params(|p| p.daily_gain_kg = v),
            }
            NumberField {
                label: "Custo aluguel (US$/mês)",
                value: params.monthly_rent_usd,
                step: 0.1,
                oninput: move |v| state.write().update_params(|p| p.monthly_rent_usd = v),
            }
            NumberField {
                label: "Custo nutrição (US$/mês)",
                value: params.monthly_nutrition_usd,
                step: 0.1,
                oninput: move |v| state.write().update_params(|p| p.monthly_nutrition_usd = v),
            }
            NumberField {
                label: "Custo operações (US$/mês)",
                value: params.monthly_operations_usd,
                step: 0.1,
                oninput: move |v| state.write().update_params(|p| p.monthly_operations_usd = v),
            }
            NumberField {
                label: "Juros anual (%)",
                value: params.annual_interest_rate * 100.0,
                step: 0.1,
                // Entered as a percentage, stored as a fraction.
                oninput: move |v: f64| state.write().update_params(|p| p.annual_interest_rate = v / 100.0),
            }
            NumberField {
                label: "Preço venda (US$/kg PV)",
                value: params.sale_price_usd,
                step: 0.01,
                oninput: move |v| state.write().update_params(|p| p.sale_price_usd = v),
            }
        }
    }
}
