// Toolbar with the report export action and the engine status line.
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::services::engine_client::EngineClient;
use crate::state::app_state::AppState;

#[component]
pub fn Toolbar() -> Element {
    let state = use_context::<Signal<AppState>>();
    let client = use_context::<EngineClient>();

    let status_line = state.read().status.clone().map(|message| {
        rsx! {
            span { class: "status", "{message}" }
        }
    });

    rsx! {
        div { class: "toolbar",
            button {
                onclick: move |_| {
                    let client = client.clone();
                    let mut state = state;
                    spawn(async move {
                        let params = state.read().params.clone();
                        match client.render_report(&params).await {
                            Ok(download) => {
                                tracing::info!(file_name = %download.file_name, "Report exported");
                                state.write().set_status(format!(
                                    "Relatório {} exportado ({}, {} bytes)",
                                    download.file_name,
                                    download.mime_type,
                                    download.content.len(),
                                ));
                            }
                            Err(e) => {
                                tracing::error!("Report export failed: {:#}", e);
                                state.write().set_status(format!(
                                    "Falha ao exportar relatório: {:#}",
                                    e
                                ));
                            }
                        }
                    });
                },
                "📥 Exportar Relatório PDF"
            }
            {status_line}
        }
    }
}
