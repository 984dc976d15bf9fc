// Engine main entry point
use std::sync::Arc;

use engine::config::settings::EngineSettings;
use engine::report::FileWriter;
use engine::services::valuation_service::ValuationService;
use engine::services::ValuationEngineServer;
use tonic::transport::Server;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    info!("Starting Recria a Pasto valuation engine...");

    let settings = EngineSettings::default();
    let addr = format!("{}:{}", settings.host, settings.port).parse()?;
    info!("Engine will listen on {}", addr);

    let report_sink = Arc::new(FileWriter::new(settings.report_output_dir.clone()));
    let service = ValuationService::new(settings.cost_model.clone(), report_sink);

    Server::builder()
        .add_service(ValuationEngineServer::new(service))
        .serve(addr)
        .await?;

    Ok(())
}
