use chrono::Local;
use clap::Args;
use std::path::PathBuf;
use storage_dash::config::AppConfig;
use storage_dash::error::AppError;
use storage_dash::report::page::dashboard_page;
use storage_dash::report::MetricsRecord;

#[derive(Args, Debug)]
pub(crate) struct RenderArgs {
    /// Path to the metrics JSON snapshot
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Output path for the rendered HTML dashboard
    #[arg(long, default_value = "dashboard.html")]
    pub(crate) output: PathBuf,
}

/// Offline counterpart of the upload route: same ingest, same page, written
/// to disk with the KPI values echoed for a quick terminal read.
pub(crate) fn run_render(args: RenderArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;

    let bytes = std::fs::read(&args.input)?;
    let record = MetricsRecord::from_bytes(&bytes)?;
    let summary = record.summary();

    let page = dashboard_page(&config.page.title, &summary);
    std::fs::write(&args.output, page.into_string())?;

    println!(
        "{} — erstellt am {}",
        config.page.title,
        Local::now().format("%Y-%m-%d %H:%M")
    );
    for tile in summary.kpi_row_one.iter().chain(&summary.kpi_row_two) {
        println!("  {:<26} {}", tile.label, tile.value);
    }
    println!("Dashboard written to {}", args.output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_writes_a_standalone_dashboard() {
        let dir = std::env::temp_dir();
        let input = dir.join("storage-dash-render-input.json");
        let output = dir.join("storage-dash-render-output.html");
        std::fs::write(
            &input,
            br#"{"occupied_units": 80, "free_units": 20, "payment_status": {"paid": 41}}"#,
        )
        .expect("input written");

        run_render(RenderArgs {
            input: input.clone(),
            output: output.clone(),
        })
        .expect("render succeeds");

        let html = std::fs::read_to_string(&output).expect("output readable");
        assert_eq!(html.matches("class=\"kpi-tile\"").count(), 8);
        for div_id in ["auslastung", "neukunden", "zahlungsstatus", "kundenherkunft"] {
            assert!(html.contains(div_id), "chart container '{div_id}' present");
        }

        std::fs::remove_file(input).ok();
        std::fs::remove_file(output).ok();
    }

    #[test]
    fn render_propagates_missing_input_as_io_error() {
        let error = run_render(RenderArgs {
            input: PathBuf::from("./does-not-exist.json"),
            output: std::env::temp_dir().join("storage-dash-render-unreached.html"),
        })
        .expect_err("missing input rejected");

        assert!(matches!(error, AppError::Io(_)));
    }
}
