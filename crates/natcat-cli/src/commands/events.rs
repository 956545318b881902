use natcat_core::{marker_radius, EventCounts, MagnitudeBand, SeismicEvent, UtcDateTime};
use serde::Serialize;

use crate::cli::EventsArgs;
use crate::error::CliError;
use crate::output::Table;

use super::{CommandResult, Context};

#[derive(Debug, Serialize)]
struct EventRow<'a> {
    id: &'a str,
    magnitude: f64,
    band: MagnitudeBand,
    color: &'static str,
    marker_radius: u32,
    place: &'a str,
    time: UtcDateTime,
    latitude: f64,
    longitude: f64,
    depth_km: f64,
}

impl<'a> From<&'a SeismicEvent> for EventRow<'a> {
    fn from(event: &'a SeismicEvent) -> Self {
        let band = MagnitudeBand::classify(event.magnitude);
        Self {
            id: &event.id,
            magnitude: event.magnitude,
            band,
            color: band.color(),
            marker_radius: marker_radius(event.magnitude),
            place: &event.place,
            time: event.time,
            latitude: event.latitude,
            longitude: event.longitude,
            depth_km: event.depth_km,
        }
    }
}

#[derive(Debug, Serialize)]
struct EventsResponseData<'a> {
    counts: EventCounts,
    events: Vec<EventRow<'a>>,
}

pub async fn run(args: &EventsArgs, context: &Context) -> Result<CommandResult, CliError> {
    let batch = context.fetch_events().await?;

    let limit = args.limit.unwrap_or(usize::MAX);
    let rows = batch
        .events
        .iter()
        .take(limit)
        .map(EventRow::from)
        .collect::<Vec<_>>();

    let mut table = Table::new(vec!["id", "mag", "band", "place", "time", "depth_km"]);
    for row in &rows {
        table.push_row(vec![
            row.id.to_owned(),
            format!("{:.1}", row.magnitude),
            row.band.as_str().to_owned(),
            row.place.to_owned(),
            row.time.to_string(),
            format!("{:.1}", row.depth_km),
        ]);
    }

    let data = serde_json::to_value(EventsResponseData {
        counts: EventCounts::from_events(&batch.events),
        events: rows,
    })?;

    Ok(CommandResult::ok(data, table, batch.source).with_batch(&batch))
}
