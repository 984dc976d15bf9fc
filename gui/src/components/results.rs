// Result panels: purchase parameters, zootechnical indicators, detailed
// costs and the economic result, all rendered from one baseline outcome.
#![allow(non_snake_case)]
use dioxus::prelude::*;

use shared::models::{StockingOutcome, StockingParams};
use shared::utils::{format_date, format_guarani, format_kg, format_pct, format_usd};

#[component]
pub fn ResultLine(label: String, value: String, emphasis: Option<String>) -> Element {
    let value_class = match emphasis.as_deref() {
        Some(class) => format!("value {}", class),
        None => "value".to_string(),
    };
    rsx! {
        p { class: "result-line",
            span { class: "label", "{label}" }
            span { class: "{value_class}", "{value}" }
        }
    }
}

#[component]
pub fn PurchasePanel(params: StockingParams, outcome: StockingOutcome) -> Element {
    rsx! {
        section { class: "panel",
            h2 { "📋 Parâmetros de Compra" }
            ResultLine {
                label: "💱 Câmbio",
                value: format!("₲ {}/US$", format_guarani(params.exchange_rate)),
            }
            ResultLine {
                label: "🐄 Preço bezerro",
                value: format!("₲ {}/kg PV", format_guarani(params.purchase_price_local)),
            }
            ResultLine {
                label: "💵 Preço bezerro",
                value: format!("$ {}/kg PV", format_usd(outcome.purchase_price_usd_per_kg)),
            }
            ResultLine {
                label: "🏷️ Preço de venda",
                value: format!("$ {}/kg PV", format_usd(params.sale_price_usd)),
            }
            ResultLine {
                label: "📊 Ágio",
                value: format!("{}%", format_pct(outcome.premium_pct)),
            }
        }
    }
}

#[component]
pub fn ZootechPanel(params: StockingParams, outcome: StockingOutcome) -> Element {
    rsx! {
        section { class: "panel",
            h2 { "⚖️ Indicadores Zootécnicos" }
            ResultLine { label: "📆 Data inicial", value: format_date(outcome.start_date) }
            ResultLine { label: "📆 Data final", value: format_date(outcome.end_date) }
            ResultLine { label: "📆 Dias em pastejo", value: params.grazing_days.to_string() }
            ResultLine {
                label: "🐄 Peso inicial",
                value: format!("{} kg", format_kg(params.initial_weight_kg)),
            }
            ResultLine {
                label: "⚖️ Peso final",
                value: format!("{} kg", format_kg(outcome.final_weight_kg)),
            }
            ResultLine {
                label: "➕ GPV",
                value: format!("{} kg", format_kg(outcome.weight_gain_kg)),
            }
            ResultLine {
                label: "📈 GMD",
                value: format!("{} kg/dia", format_kg(params.daily_gain_kg)),
            }
        }
    }
}

#[component]
pub fn CostPanel(params: StockingParams, outcome: StockingOutcome) -> Element {
    rsx! {
        section { class: "panel",
            h2 { "💰 Custos Detalhados" }
            h3 { "🐂 Custos de Compra" }
            ResultLine {
                label: "Custo do animal",
                value: format!("$ {}", format_usd(outcome.purchase_cost_usd)),
            }
            ResultLine { label: "🚚 Frete", value: format!("$ {}", format_usd(outcome.freight_usd)) }
            ResultLine {
                label: "🤝 Comissão",
                value: format!("$ {}", format_usd(outcome.commission_usd)),
            }
            h3 { "🌱 Custos Variáveis de Produção" }
            ResultLine {
                label: "Custo aluguel/mês",
                value: format!("$ {}", format_usd(params.monthly_rent_usd)),
            }
            ResultLine {
                label: "Custo nutrição/mês",
                value: format!("$ {}", format_usd(params.monthly_nutrition_usd)),
            }
            ResultLine {
                label: "Custo operações/mês",
                value: format!("$ {}", format_usd(params.monthly_operations_usd)),
            }
            h3 { "📊 Totais" }
            ResultLine {
                label: "🗓️ Custo total período",
                value: format!("$ {}", format_usd(outcome.period_cost_usd)),
            }
            ResultLine {
                label: "🏦 Juros sobre compra do animal",
                value: format!("$ {}", format_usd(outcome.interest_cost_usd)),
            }
            ResultLine {
                label: "🔴 Custo total",
                value: format!("$ {}", format_usd(outcome.total_cost_usd)),
                emphasis: "negative".to_string(),
            }
        }
    }
}

#[component]
pub fn EconomicPanel(outcome: StockingOutcome) -> Element {
    let profit_class = if outcome.profit_usd >= 0.0 { "positive" } else { "negative" };
    rsx! {
        section { class: "panel",
            h2 { "📊 Resultado Econômico" }
            ResultLine {
                label: "💵 Receita de venda",
                value: format!("$ {}", format_usd(outcome.revenue_usd)),
            }
            ResultLine {
                label: "🟢 Lucro líquido",
                value: format!("$ {}", format_usd(outcome.profit_usd)),
                emphasis: profit_class.to_string(),
            }
            ResultLine {
                label: "📈 Margem de lucro",
                value: format!("{}%", format_pct(outcome.profit_margin_pct)),
            }
            ResultLine {
                label: "📆 Margem mensal",
                value: format!("{}%", format_pct(outcome.monthly_margin_pct)),
            }
            ResultLine {
                label: "📊 Retorno sobre investimento",
                value: format!("{}%", format_pct(outcome.roi_pct)),
            }
            ResultLine {
                label: "📆 ROI mensal",
                value: format!("{}%/mês", format_pct(outcome.monthly_roi_pct)),
            }
            ResultLine {
                label: "📊 Retorno sobre custo total",
                value: format!("{}%", format_pct(outcome.roi_on_total_cost_pct)),
            }
            ResultLine {
                label: "📆 ROI mensal sobre custo total",
                value: format!("{}%/mês", format_pct(outcome.monthly_roi_on_total_cost_pct)),
            }
        }
    }
}
