// Turns a report document into bytes. HTML is the tabular layout used for
// display and for the PDF-named export (final typesetting belongs to the
// sink on the other side of the boundary); JSON is a structured dump.

use crate::error::EngineError;

use super::{Report, ReportFormat};

pub fn render(report: &Report) -> Result<Vec<u8>, EngineError> {
    match report.format {
        ReportFormat::Json => serde_json::to_vec_pretty(report)
            .map_err(|e| EngineError::ReportError(format!("JSON serialization failed: {}", e))),
        ReportFormat::Html | ReportFormat::Pdf => Ok(render_html(report).into_bytes()),
    }
}

fn render_html(report: &Report) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", report.title));
    html.push_str(
        "<style>\n\
         table { border-collapse: collapse; width: 60%; margin-bottom: 1em; }\n\
         td { border: 1px solid #000; padding: 4px 8px; }\n\
         td.value { text-align: right; }\n\
         </style>\n</head>\n<body>\n",
    );
    html.push_str(&format!("<h1>{}</h1>\n", report.title));

    for section in &report.sections {
        html.push_str(&format!("<h2>{}</h2>\n<table>\n", section.title));
        for row in &section.rows {
            html.push_str(&format!(
                "<tr><td>{}</td><td class=\"value\">{}</td></tr>\n",
                row.label, row.value
            ));
        }
        html.push_str("</table>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}
