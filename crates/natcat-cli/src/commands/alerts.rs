use natcat_core::{alerts_for_event, evaluate_events, rank_by_exposure, AlertRow, ExposureAlert};
use serde::Serialize;

use crate::cli::AlertsArgs;
use crate::error::CliError;
use crate::output::{format_usd, Table};

use super::{CommandResult, Context};

#[derive(Debug, Serialize)]
struct AlertsResponseData {
    total_alerts: usize,
    alerts: Vec<AlertRow>,
}

pub async fn run(args: &AlertsArgs, context: &Context) -> Result<CommandResult, CliError> {
    let catalog = context.load_zones()?;
    let batch = context.fetch_events().await?;

    let mut alerts = evaluate_events(&batch.events, catalog.zones());
    if let Some(event_id) = args.event.as_deref() {
        alerts = alerts_for_event(&alerts, event_id)
            .cloned()
            .collect::<Vec<ExposureAlert>>();
    }

    let limit = args.limit.unwrap_or(usize::MAX);
    let rows = rank_by_exposure(&alerts)
        .into_iter()
        .take(limit)
        .map(AlertRow::from)
        .collect::<Vec<_>>();

    let mut table = Table::new(vec![
        "event", "mag", "place", "zone", "zone_name", "limit", "distance_km",
    ]);
    for row in &rows {
        table.push_row(vec![
            row.event_id.clone(),
            format!("{:.1}", row.magnitude),
            row.place.clone(),
            row.zone_id.clone(),
            row.zone_name.clone(),
            format_usd(row.limit_usd),
            format!("{:.2}", row.distance_km),
        ]);
    }

    let data = serde_json::to_value(AlertsResponseData {
        total_alerts: alerts.len(),
        alerts: rows,
    })?;
    Ok(CommandResult::ok(data, table, batch.source).with_batch(&batch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Command;
    use crate::commands::fixtures::{cli, snapshot_file};

    async fn run_alerts(args: &[&str]) -> CommandResult {
        let snapshot = snapshot_file();
        let cli = cli(&snapshot, args);
        let context = Context::from_cli(&cli).expect("context");
        let Command::Alerts(alert_args) = &cli.command else {
            panic!("expected alerts command");
        };
        run(alert_args, &context).await.expect("runs")
    }

    #[tokio::test]
    async fn ranks_alerts_by_zone_limit() {
        let result = run_alerts(&["alerts"]).await;
        let alerts = result.data["alerts"].as_array().expect("array");

        assert!(!alerts.is_empty());
        assert_eq!(alerts[0]["zone_id"], "T004");
        assert_eq!(alerts[0]["event_id"], "kanto");
        let limits = alerts
            .iter()
            .filter_map(|alert| alert["limit_usd"].as_u64())
            .collect::<Vec<_>>();
        assert!(limits.windows(2).all(|pair| pair[0] >= pair[1]));
        assert!(alerts.iter().all(|alert| alert["event_id"] != "atlantic"));
    }

    #[tokio::test]
    async fn event_filter_keeps_only_that_event() {
        let result = run_alerts(&["alerts", "--event", "fresno"]).await;
        let alerts = result.data["alerts"].as_array().expect("array");

        assert!(!alerts.is_empty());
        assert!(alerts.iter().all(|alert| alert["event_id"] == "fresno"));
        assert_eq!(result.data["total_alerts"].as_u64(), Some(alerts.len() as u64));
    }

    #[tokio::test]
    async fn unknown_event_yields_no_alerts() {
        let result = run_alerts(&["alerts", "--event", "missing"]).await;
        assert_eq!(result.data["total_alerts"], 0);
        assert!(result.table.is_empty());
    }
}
