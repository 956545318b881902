mod alerts;
mod events;
mod report;
mod summary;
mod zones;

use natcat_core::cache::{CacheMode, ResponseCache};
use natcat_core::{EventFeed, FeedBatch, FeedQuery, FileFeed, NatcatConfig, UsgsFeed, ZoneCatalog};
use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::metadata::{Envelope, Metadata};
use crate::output::Table;

pub struct CommandResult {
    pub data: Value,
    pub table: Table,
    pub source: String,
    pub warnings: Vec<String>,
    pub latency_ms: u64,
    pub cache_hit: bool,
}

impl CommandResult {
    pub fn ok(data: Value, table: Table, source: impl Into<String>) -> Self {
        Self {
            data,
            table,
            source: source.into(),
            warnings: Vec::new(),
            latency_ms: 0,
            cache_hit: false,
        }
    }

    /// Carry over source, timing and parse warnings from a feed fetch.
    pub fn with_batch(mut self, batch: &FeedBatch) -> Self {
        self.source = String::from(batch.source);
        self.warnings.extend(batch.warnings.iter().cloned());
        self.latency_ms = batch.latency_ms;
        self.cache_hit = batch.cache_hit;
        self
    }
}

/// Resolved inputs shared by every command.
pub struct Context {
    pub config: NatcatConfig,
    pub query: FeedQuery,
    feed: Box<dyn EventFeed>,
    zones_override: Option<std::path::PathBuf>,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let config = load_config(cli)?;
        let query = FeedQuery::new(
            cli.min_magnitude.unwrap_or(config.feed.min_magnitude),
            cli.days.unwrap_or(config.feed.lookback_days),
        )?;
        let feed = build_feed(cli, &config);

        tracing::debug!(
            min_magnitude = query.min_magnitude,
            lookback_days = query.lookback_days,
            feed = feed.name(),
            "resolved command context"
        );

        Ok(Self {
            config,
            query,
            feed,
            zones_override: cli.zones.clone(),
        })
    }

    /// Each invocation fetches once, so there is no response cache to consult.
    pub async fn fetch_events(&self) -> Result<FeedBatch, CliError> {
        Ok(self.feed.fetch(self.query, CacheMode::Bypass).await?)
    }

    /// `--zones`, then `zones.path`, then the bundled sample book.
    pub fn load_zones(&self) -> Result<ZoneCatalog, CliError> {
        let path = self
            .zones_override
            .as_ref()
            .or(self.config.zones.path.as_ref());

        let catalog = match path {
            Some(path) => ZoneCatalog::load(path)?,
            None => ZoneCatalog::bundled()?,
        };
        Ok(catalog)
    }
}

pub async fn run(cli: &Cli) -> Result<(Envelope<Value>, Table), CliError> {
    let context = Context::from_cli(cli)?;

    let command_result = match &cli.command {
        Command::Events(args) => events::run(args, &context).await?,
        Command::Zones(args) => zones::run(args, &context)?,
        Command::Alerts(args) => alerts::run(args, &context).await?,
        Command::Summary => summary::run(&context).await?,
        Command::Report => report::run(&context).await?,
    };

    let CommandResult {
        data,
        table,
        source,
        warnings,
        latency_ms,
        cache_hit,
    } = command_result;

    let mut meta = Metadata::new(source, latency_ms, cache_hit);
    for warning in warnings {
        meta.push_warning(warning);
    }

    Ok((Envelope::new(meta, data), table))
}

fn load_config(cli: &Cli) -> Result<NatcatConfig, CliError> {
    let config = match &cli.config {
        Some(path) => NatcatConfig::load_from(path)?,
        None => NatcatConfig::load()?,
    };
    Ok(config)
}

fn build_feed(cli: &Cli, config: &NatcatConfig) -> Box<dyn EventFeed> {
    match &cli.events_file {
        Some(path) => Box::new(FileFeed::new(path)),
        None => Box::new(
            UsgsFeed::default()
                .with_base_url(config.feed.base_url.as_str())
                .with_timeout_ms(config.feed.timeout_ms)
                .with_retry(config.feed.retry_policy())
                .with_cache(ResponseCache::disabled()),
        ),
    }
}
