// Handler for the RenderReport RPC
use std::sync::Arc;

use tonic::{Response, Status};

use crate::error::EngineError;
use crate::report::{build_report, render, ReportFormat, ReportSink};
use crate::services::{ReportRequest, ReportResponse};
use crate::valuation::Valuator;

use super::helpers;

pub async fn handle_render_report(
    req_payload: ReportRequest,
    valuator: Arc<Valuator>,
    report_sink: Arc<dyn ReportSink>,
) -> Result<Response<ReportResponse>, Status> {
    tracing::debug!(value_date = %req_payload.value_date, "Handling RenderReport in dedicated handler");

    let params_msg = match req_payload.params {
        Some(msg) => msg,
        None => {
            return Err(
                EngineError::RequestError("missing stocking parameters".to_string()).into(),
            );
        }
    };
    let params = helpers::to_domain_params(&params_msg);
    let value_date = helpers::resolve_value_date(&req_payload.value_date)?;

    let outcome = valuator.baseline(&params, value_date);
    let report = build_report(&params, &outcome, ReportFormat::Pdf);
    let content = render(&report)?;
    report_sink.send(&report)?;

    tracing::info!(
        report_id = %report.report_id,
        file_name = %report.file_name(),
        "Report rendered and delivered"
    );

    Ok(Response::new(ReportResponse {
        file_name: report.file_name(),
        mime_type: report.format.mime_type().to_string(),
        report_id: report.report_id,
        content,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CostModel;
    use crate::report::FileWriter;
    use shared::models::StockingParams;

    #[tokio::test]
    async fn test_report_naming_convention_and_delivery() {
        let dir = tempfile::tempdir().unwrap();
        let valuator = Arc::new(Valuator::new(CostModel::default()));
        let sink = Arc::new(FileWriter::new(dir.path()));

        let response = handle_render_report(
            ReportRequest {
                params: Some(helpers::to_proto_params(&StockingParams::default())),
                value_date: "2025-03-30".to_string(),
            },
            valuator,
            sink,
        )
        .await
        .unwrap()
        .into_inner();

        assert_eq!(response.file_name, "recria_pasto.pdf");
        assert_eq!(response.mime_type, "application/pdf");
        assert!(!response.content.is_empty());
        assert!(!response.report_id.is_empty());

        // The sink wrote the same document under the output directory.
        let written = std::fs::read(dir.path().join("recria_pasto.pdf")).unwrap();
        assert_eq!(written, response.content);
    }

    #[tokio::test]
    async fn test_unwritable_sink_is_internal_error() {
        let dir = tempfile::tempdir().unwrap();
        let valuator = Arc::new(Valuator::new(CostModel::default()));
        let sink = Arc::new(FileWriter::new(dir.path().join("missing")));

        let status = handle_render_report(
            ReportRequest {
                params: Some(helpers::to_proto_params(&StockingParams::default())),
                value_date: "2025-03-30".to_string(),
            },
            valuator,
            sink,
        )
        .await
        .unwrap_err();
        assert_eq!(status.code(), tonic::Code::Internal);
    }
}
