use natcat_core::{evaluate_events, summarize_exposure};

use crate::error::CliError;
use crate::output::{format_usd, Table};

use super::{CommandResult, Context};

pub async fn run(context: &Context) -> Result<CommandResult, CliError> {
    let catalog = context.load_zones()?;
    let batch = context.fetch_events().await?;

    let alerts = evaluate_events(&batch.events, catalog.zones());
    let summary = summarize_exposure(&alerts);

    let mut table = Table::key_value();
    table.push_pair("total_alerts", summary.total_alerts);
    table.push_pair("total_exposure", format_usd(summary.total_exposure_usd));
    table.push_pair("affected_zones", summary.affected_zone_names.join(", "));
    for (region, limit) in &summary.by_region {
        table.push_pair(format!("region {region}"), format_usd(*limit));
    }

    let data = serde_json::to_value(&summary)?;
    Ok(CommandResult::ok(data, table, batch.source).with_batch(&batch))
}
