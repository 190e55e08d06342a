use super::charts;
use super::views::{DashboardSummary, KpiTile};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use plotly::Plot;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.27.0.min.js";

const PAGE_CSS: &str = r#"
:root {
  --bg: #f4f6f9;
  --panel: #ffffff;
  --border: #dde3ea;
  --text: #1d2733;
  --text-muted: #5f6b7a;
  --success: #1d7a46;
  --success-bg: #e2f3e9;
  --error: #a32231;
  --error-bg: #fae4e7;
  --info: #1f5f99;
  --info-bg: #e3eef9;
}
body {
  margin: 0;
  background: var(--bg);
  color: var(--text);
  font-family: "Segoe UI", system-ui, sans-serif;
}
.container { max-width: 1200px; margin: 0 auto; padding: 24px; }
h1 { font-size: 1.6rem; margin-bottom: 8px; }
.caption { color: var(--text-muted); font-size: 0.85rem; }
.upload {
  display: flex;
  gap: 12px;
  align-items: center;
  background: var(--panel);
  border: 1px dashed var(--border);
  border-radius: 8px;
  padding: 16px;
  margin-bottom: 16px;
}
.notice { border-radius: 6px; padding: 10px 14px; margin-bottom: 16px; }
.notice-success { background: var(--success-bg); color: var(--success); }
.notice-error { background: var(--error-bg); color: var(--error); }
.notice-info { background: var(--info-bg); color: var(--info); }
.kpi-row {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 16px;
  margin-bottom: 16px;
}
.kpi-tile {
  background: var(--panel);
  border: 1px solid var(--border);
  border-radius: 8px;
  padding: 14px 16px;
}
.kpi-label { display: block; color: var(--text-muted); font-size: 0.8rem; }
.kpi-value { display: block; font-size: 1.5rem; font-weight: 600; margin-top: 4px; }
.chart-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 16px;
}
.chart-column { display: flex; flex-direction: column; gap: 16px; }
.chart-column > div { width: 100%; }
"#;

/// Awaiting-upload state: prompt only, nothing rendered yet.
pub fn upload_page(title: &str) -> Markup {
    page(
        title,
        notice(
            "info",
            "Bitte laden Sie eine JSON-Datei mit den Kennzahlen hoch",
        ),
    )
}

/// Terminal ingest failure: the notice carries the failure detail and no
/// tile or chart is drawn.
pub fn error_page(title: &str, detail: &str) -> Markup {
    page(
        title,
        notice(
            "error",
            &format!("Fehler beim Verarbeiten der Datei: {detail}"),
        ),
    )
}

/// Full dashboard: confirmation notice, two KPI rows, two chart columns.
pub fn dashboard_page(title: &str, summary: &DashboardSummary) -> Markup {
    page(
        title,
        html! {
            (notice("success", "Daten erfolgreich geladen!"))
            div class="kpi-row" {
                @for tile in &summary.kpi_row_one { (kpi_tile(tile)) }
            }
            div class="kpi-row" {
                @for tile in &summary.kpi_row_two { (kpi_tile(tile)) }
            }
            div class="chart-grid" {
                div class="chart-column" {
                    (chart(charts::occupancy_donut(summary.occupancy), "auslastung"))
                    (chart(charts::new_customers_bar(&summary.new_customers), "neukunden"))
                }
                div class="chart-column" {
                    (chart(charts::payment_status_bar(&summary.payment_status), "zahlungsstatus"))
                    (chart(charts::customer_origin_donut(&summary.customer_origin), "kundenherkunft"))
                }
            }
        },
    )
}

fn page(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="de" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(PLOTLY_CDN) {}
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                main class="container" {
                    h1 { "📦 " (title) }
                    p class="caption" { "Lagerräume mit Business-Center" }
                    (upload_form())
                    (content)
                    p class="caption" { "Daten per Upload aktualisierbar" }
                }
            }
        }
    }
}

fn upload_form() -> Markup {
    html! {
        form class="upload" action="/dashboard" method="post" enctype="multipart/form-data" {
            label for="file" { "Dashboard-Datei hochladen" }
            input id="file" type="file" name="file" accept="application/json,.json";
            button type="submit" { "Dashboard erstellen" }
        }
    }
}

fn notice(kind: &str, message: &str) -> Markup {
    html! {
        div class={ "notice notice-" (kind) } { (message) }
    }
}

fn kpi_tile(tile: &KpiTile) -> Markup {
    html! {
        div class="kpi-tile" {
            span class="kpi-label" { (tile.label) }
            span class="kpi-value" { (tile.value) }
        }
    }
}

fn chart(plot: Plot, div_id: &str) -> Markup {
    PreEscaped(plot.to_inline_html(Some(div_id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MetricsRecord;

    const TITLE: &str = "Self-Storage Business Dashboard";

    fn dashboard_from(json: &str) -> String {
        let record = MetricsRecord::from_bytes(json.as_bytes()).expect("snapshot ingests");
        dashboard_page(TITLE, &record.summary()).into_string()
    }

    #[test]
    fn upload_page_prompts_without_rendering_widgets() {
        let html = upload_page(TITLE).into_string();

        assert!(html.contains("notice-info"));
        assert!(html.contains("Bitte laden Sie eine JSON-Datei"));
        assert!(html.contains("enctype=\"multipart/form-data\""));
        assert!(!html.contains("class=\"kpi-tile\""));
        assert!(!html.contains("class=\"chart-grid\""));
    }

    #[test]
    fn error_page_carries_detail_and_no_widgets() {
        let html = error_page(TITLE, "expected value at line 1 column 2").into_string();

        assert!(html.contains("notice-error"));
        assert!(html.contains("Fehler beim Verarbeiten der Datei"));
        assert!(html.contains("expected value at line 1 column 2"));
        assert!(!html.contains("class=\"kpi-tile\""));
        assert!(!html.contains("class=\"chart-grid\""));
    }

    #[test]
    fn dashboard_page_renders_eight_tiles_and_four_charts() {
        let html = dashboard_from(
            r#"{
                "occupied_units": 80,
                "free_units": 20,
                "customer_origin": {"Referral": 3, "Walk-in": 7},
                "new_customers_per_month": {"labels": ["Jan"], "counts": [5]},
                "payment_status": {"paid": 41, "open": 6, "overdue": 2}
            }"#,
        );

        assert!(html.contains("Daten erfolgreich geladen!"));
        assert_eq!(html.matches("class=\"kpi-tile\"").count(), 8);
        for div_id in ["auslastung", "neukunden", "zahlungsstatus", "kundenherkunft"] {
            assert!(html.contains(div_id), "chart container '{div_id}' present");
        }
        assert!(html.contains("Auslastung Lagerräume"));
        assert!(html.contains("Neukunden pro Monat"));
        assert!(html.contains("Zahlungsstatus"));
        assert!(html.contains("Kundenherkunft"));
        assert!(html.contains("Empfehlungsrate"));
        assert!(html.contains("30.0"));
    }

    #[test]
    fn upload_form_is_present_on_every_state() {
        for html in [
            upload_page(TITLE).into_string(),
            error_page(TITLE, "detail").into_string(),
            dashboard_from("{}"),
        ] {
            assert!(html.contains("Dashboard-Datei hochladen"));
            assert!(html.contains("action=\"/dashboard\""));
        }
    }
}
