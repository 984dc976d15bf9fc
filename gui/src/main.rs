// GUI main entry point using Dioxus
#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};

mod app;
mod components;
mod config;
mod services;
mod state;

use app::App;
use config::AppConfig;

fn main() {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting Recria a Pasto GUI (Dioxus desktop)...");

    let app_config = match AppConfig::load_default() {
        Ok(cfg) => {
            tracing::info!("Loaded default configuration version {}.", cfg.version);
            cfg
        }
        Err(e) => {
            tracing::error!("Failed to load default configuration: {}. Exiting.", e);
            // The embedded default config is critical; there is nothing to
            // fall back to.
            panic!("Failed to load critical default configuration: {}", e);
        }
    };

    let window = WindowBuilder::new()
        .with_title("Simulador Recria a Pasto")
        .with_inner_size(LogicalSize::new(1280.0, 800.0));

    LaunchBuilder::desktop()
        .with_cfg(DesktopConfig::new().with_window(window))
        .with_context(app_config)
        .launch(App);
}
