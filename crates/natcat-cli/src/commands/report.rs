use natcat_core::{evaluate_events, ExposureReport};

use crate::error::CliError;
use crate::output::{format_usd, Table};

use super::{CommandResult, Context};

pub async fn run(context: &Context) -> Result<CommandResult, CliError> {
    let catalog = context.load_zones()?;
    let batch = context.fetch_events().await?;

    let alerts = evaluate_events(&batch.events, catalog.zones());
    let report = ExposureReport::build(&batch.events, catalog.zones(), &alerts);

    let mut table = Table::key_value();
    table.push_pair("events", report.events.total);
    table.push_pair("events m6+", report.events.m6_plus);
    table.push_pair("events m5-6", report.events.m5_6);
    table.push_pair("events m4-5", report.events.m4_5);
    table.push_pair("zones_monitored", report.zones_monitored);
    table.push_pair("zones_at_risk", report.zones_at_risk);
    table.push_pair("total_alerts", report.summary.total_alerts);
    table.push_pair("total_exposure", format_usd(report.summary.total_exposure_usd));
    if let Some(top) = report.alerts.first() {
        table.push_pair(
            "largest_exposed",
            format!("{} ({})", top.zone_name, format_usd(top.limit_usd)),
        );
    }

    let data = serde_json::to_value(&report)?;
    Ok(CommandResult::ok(data, table, batch.source).with_batch(&batch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{cli, snapshot_file};

    #[tokio::test]
    async fn report_bundles_counts_summary_and_alerts() {
        let snapshot = snapshot_file();
        let context = Context::from_cli(&cli(&snapshot, &["report"])).expect("context");

        let result = run(&context).await.expect("runs");
        let data = &result.data;

        assert_eq!(data["events"]["total"], 3);
        assert_eq!(data["zones_monitored"], 10);
        assert_eq!(
            data["alerts"].as_array().map(Vec::len),
            data["summary"]["total_alerts"].as_u64().map(|n| n as usize)
        );
        assert_eq!(data["alerts"][0]["zone_id"], "T004");
        assert!(result.table.to_text().contains("largest_exposed"));
    }
}
