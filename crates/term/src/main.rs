mod cli;
mod host;
mod output;

use std::io::Write;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, bail};
use clap::Parser;
use cli::Cli;
use host::PrintHost;
use quickbar_core::{OpenParams, QuickBar, QuickBarConfig, ServiceRegistry, StateSnapshot};
use tracing::{debug, info};

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "QUICKBAR_LOG";

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	let config = match &cli.config {
		Some(path) => QuickBarConfig::load(path).with_context(|| format!("loading config {}", path.display()))?,
		None => QuickBarConfig::default(),
	};
	let snapshot = StateSnapshot::from_json(&read(&cli.states)?).with_context(|| format!("decoding states {}", cli.states.display()))?;
	let registry = match &cli.services {
		Some(path) => ServiceRegistry::from_json(&read(path)?).with_context(|| format!("decoding services {}", path.display()))?,
		None => ServiceRegistry::new(),
	};
	info!(entities = snapshot.len(), panels = snapshot.panels().len(), "loaded host state");

	let mut bar = QuickBar::new(config);
	bar.open(OpenParams::default(), &snapshot, &registry);
	bar.set_input(&cli.query, Instant::now())?;
	bar.refresh_now();
	debug!(mode = ?bar.mode(), results = bar.len(), "filtered");

	let rows = output::rows(&bar, cli.limit);
	let mut stdout = std::io::stdout().lock();
	if cli.json {
		output::write_json(&mut stdout, &rows)?;
	} else {
		output::write_table(&mut stdout, &rows)?;
	}

	if cli.activate {
		if bar.is_empty() {
			bail!("nothing matches {:?}", cli.query);
		}
		bar.activate(0, &PrintHost::new(&mut stdout))?;
	}
	stdout.flush()?;
	Ok(())
}

fn read(path: &Path) -> anyhow::Result<String> {
	std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;
	use tracing_subscriber::prelude::*;

	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("quickbar=debug,quickbar_core=debug,quickbar_matcher=debug,warn")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
		.init();
}
