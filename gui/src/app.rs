// Root component: provides state and the engine client, runs the three
// engine resources (baseline, scenario, impact) and lays out the screen.
// Any interaction writes a fresh snapshot into AppState, which reruns every
// resource, so all derived values are recomputed per edit.
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::components::impact::ImpactPanel;
use crate::components::param_form::ParamForm;
use crate::components::results::{CostPanel, EconomicPanel, PurchasePanel, ZootechPanel};
use crate::components::sensitivity::SensitivityPanel;
use crate::components::toolbar::Toolbar;
use crate::config::theme::ThemePalette;
use crate::config::AppConfig;
use crate::services::engine_client::EngineClient;
use crate::state::app_state::AppState;

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let state = use_context_provider(|| Signal::new(AppState::new(&config)));
    let client =
        use_context_provider(|| EngineClient::new(&config.engine.host, config.engine.port));

    let baseline_client = client.clone();
    let baseline = use_resource(move || {
        let client = baseline_client.clone();
        async move {
            let params = state.read().params.clone();
            client.compute_baseline(&params).await
        }
    });

    let scenario_client = client.clone();
    let scenario = use_resource(move || {
        let client = scenario_client.clone();
        async move {
            let (params, overrides) = {
                let current = state.read();
                (current.params.clone(), current.scenario.clone())
            };
            client.compute_scenario(&params, &overrides).await
        }
    });

    let impact_client = client;
    let impact = use_resource(move || {
        let client = impact_client.clone();
        async move {
            let (params, purchase_pct, sale_pct) = {
                let current = state.read();
                (
                    current.params.clone(),
                    current.purchase_variation_pct,
                    current.sale_variation_pct,
                )
            };
            client.estimate_impact(&params, purchase_pct, sale_pct).await
        }
    });

    let stylesheet = ThemePalette::for_name(&config.app.theme).stylesheet();
    let params = state.read().params.clone();
    let scenario_outcome = scenario.read().as_ref().and_then(|r| r.as_ref().ok().cloned());
    let impact_view = impact.read().as_ref().and_then(|r| r.as_ref().ok().cloned());

    let baseline_view = match &*baseline.read() {
        Some(Ok(outcome)) => rsx! {
            PurchasePanel { params: params.clone(), outcome: outcome.clone() }
            div { class: "columns",
                ZootechPanel { params: params.clone(), outcome: outcome.clone() }
                CostPanel { params: params.clone(), outcome: outcome.clone() }
                EconomicPanel { outcome: outcome.clone() }
            }
        },
        Some(Err(e)) => {
            let message = format!("Motor de cálculo indisponível: {:#}", e);
            rsx! {
                p { class: "error", "{message}" }
            }
        }
        None => rsx! {
            p { class: "muted", "Calculando..." }
        },
    };

    rsx! {
        style { "{stylesheet}" }
        header {
            h1 { "🐂 Análise Econômica da Recria a Pasto" }
        }
        Toolbar {}
        div { class: "layout",
            ParamForm {}
            main { class: "content",
                {baseline_view}
                SensitivityPanel { outcome: scenario_outcome }
                ImpactPanel { impact: impact_view }
            }
        }
    }
}
