// Flattens one valuation into the four fixed report sections. All values
// arrive preformatted; the renderers never touch raw numbers.

use shared::models::{StockingOutcome, StockingParams};
use shared::utils::{format_date, format_guarani, format_kg, format_pct, format_usd};
use uuid::Uuid;

use super::{Report, ReportFormat, ReportRow, ReportSection};

pub const REPORT_TITLE: &str = "Relatório de Viabilidade Econômica – Recria a Pasto";
pub const REPORT_FILE_STEM: &str = "recria_pasto";

pub fn build_report(
    params: &StockingParams,
    outcome: &StockingOutcome,
    format: ReportFormat,
) -> Report {
    let purchase_params = ReportSection {
        title: "Parâmetros de Compra".to_string(),
        rows: vec![
            ReportRow::new("Câmbio (₲/US$)", format_guarani(params.exchange_rate)),
            ReportRow::new(
                "Preço bezerro (₲/kg PV)",
                format_guarani(params.purchase_price_local),
            ),
            ReportRow::new(
                "Preço bezerro (US$/kg PV)",
                format_usd(outcome.purchase_price_usd_per_kg),
            ),
            ReportRow::new("Preço de venda (US$/kg PV)", format_usd(params.sale_price_usd)),
            ReportRow::new("Ágio (%)", format!("{}%", format_pct(outcome.premium_pct))),
        ],
    };

    let zootechnical = ReportSection {
        title: "Indicadores Zootécnicos".to_string(),
        rows: vec![
            ReportRow::new("Data inicial", format_date(outcome.start_date)),
            ReportRow::new("Data final", format_date(outcome.end_date)),
            ReportRow::new("Dias em pastejo", params.grazing_days.to_string()),
            ReportRow::new("Peso inicial (kg)", format_kg(params.initial_weight_kg)),
            ReportRow::new("Peso final (kg)", format_kg(outcome.final_weight_kg)),
            ReportRow::new("GPV (kg)", format_kg(outcome.weight_gain_kg)),
            ReportRow::new("GMD (kg/dia)", format_kg(params.daily_gain_kg)),
        ],
    };

    let costs = ReportSection {
        title: "Custos Detalhados".to_string(),
        rows: vec![
            ReportRow::new("Custo do animal (US$)", format_usd(outcome.purchase_cost_usd)),
            ReportRow::new("Frete (US$)", format_usd(outcome.freight_usd)),
            ReportRow::new("Comissão (US$)", format_usd(outcome.commission_usd)),
            ReportRow::new("Custo aluguel/mês (US$)", format_usd(params.monthly_rent_usd)),
            ReportRow::new(
                "Custo nutrição/mês (US$)",
                format_usd(params.monthly_nutrition_usd),
            ),
            ReportRow::new(
                "Custo operações/mês (US$)",
                format_usd(params.monthly_operations_usd),
            ),
            ReportRow::new(
                "Custo total período (US$)",
                format_usd(outcome.period_cost_usd),
            ),
            ReportRow::new(
                "Juros sobre compra do animal (US$)",
                format_usd(outcome.interest_cost_usd),
            ),
            ReportRow::new("Custo total (US$)", format_usd(outcome.total_cost_usd)),
        ],
    };

    let economic = ReportSection {
        title: "Resultado Econômico".to_string(),
        rows: vec![
            ReportRow::new("Receita (US$)", format_usd(outcome.revenue_usd)),
            ReportRow::new("Lucro líquido (US$)", format_usd(outcome.profit_usd)),
            ReportRow::new(
                "Margem período (%)",
                format!("{}%", format_pct(outcome.profit_margin_pct)),
            ),
            ReportRow::new(
                "Margem mensal (%)",
                format!("{}%", format_pct(outcome.monthly_margin_pct)),
            ),
            ReportRow::new("ROI (%)", format!("{}%", format_pct(outcome.roi_pct))),
            ReportRow::new(
                "ROI mensal (%)",
                format!("{}%", format_pct(outcome.monthly_roi_pct)),
            ),
            ReportRow::new(
                "ROI sobre custo total (%)",
                format!("{}%", format_pct(outcome.roi_on_total_cost_pct)),
            ),
            ReportRow::new(
                "ROI mensal sobre custo total (%)",
                format!("{}%", format_pct(outcome.monthly_roi_on_total_cost_pct)),
            ),
        ],
    };

    Report {
        report_id: Uuid::new_v4().to_string(),
        title: REPORT_TITLE.to_string(),
        format,
        generated_at: outcome.start_date,
        sections: vec![purchase_params, zootechnical, costs, economic],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CostModel;
    use crate::valuation::Valuator;
    use chrono::NaiveDate;

    fn sample_report() -> Report {
        let params = StockingParams::default();
        let valuator = Valuator::new(CostModel::default());
        let outcome = valuator.baseline(&params, NaiveDate::from_ymd_opt(2025, 3, 30).unwrap());
        build_report(&params, &outcome, ReportFormat::Pdf)
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let report = sample_report();
        let titles: Vec<&str> = report.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Parâmetros de Compra",
                "Indicadores Zootécnicos",
                "Custos Detalhados",
                "Resultado Econômico",
            ]
        );
    }

    #[test]
    fn test_values_are_preformatted() {
        let report = sample_report();
        let purchase = &report.sections[0];
        assert_eq!(purchase.rows[0].label, "Câmbio (₲/US$)");
        assert_eq!(purchase.rows[0].value, "7,320");
        assert_eq!(purchase.rows[1].value, "20,000");

        let zootechnical = &report.sections[1];
        assert_eq!(zootechnical.rows[0].value, "30/03/2025");
        assert_eq!(zootechnical.rows[1].value, "30/03/2026");
        assert_eq!(zootechnical.rows[4].value, "353.85");

        let economic = &report.sections[3];
        assert_eq!(economic.rows[0].value, "849.24");
    }

    #[test]
    fn test_each_report_gets_its_own_id() {
        let first = sample_report();
        let second = sample_report();
        assert_ne!(first.report_id, second.report_id);
    }
}
