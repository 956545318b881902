use natcat_core::RiskZone;
use serde::Serialize;

use crate::cli::ZonesArgs;
use crate::error::CliError;
use crate::output::{format_usd, Table};

use super::{CommandResult, Context};

#[derive(Debug, Serialize)]
struct ZonesResponseData<'a> {
    total_limit_usd: u64,
    zones: Vec<&'a RiskZone>,
}

pub fn run(args: &ZonesArgs, context: &Context) -> Result<CommandResult, CliError> {
    let catalog = context.load_zones()?;

    let zones = catalog
        .zones()
        .iter()
        .filter(|zone| {
            args.region
                .as_deref()
                .is_none_or(|region| zone.region.eq_ignore_ascii_case(region))
        })
        .collect::<Vec<_>>();
    let total_limit_usd = zones
        .iter()
        .fold(0_u64, |total, zone| total.saturating_add(zone.limit_usd));

    let mut table = Table::new(vec!["id", "name", "peril", "region", "radius_km", "limit"]);
    for zone in &zones {
        table.push_row(vec![
            zone.id.clone(),
            zone.name.clone(),
            zone.peril.clone(),
            zone.region.clone(),
            format!("{:.0}", zone.radius_km),
            format_usd(zone.limit_usd),
        ]);
    }

    let data = serde_json::to_value(ZonesResponseData {
        total_limit_usd,
        zones,
    })?;
    Ok(CommandResult::ok(data, table, "catalog"))
}
