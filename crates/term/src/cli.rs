use std::path::PathBuf;

use clap::Parser;
use quickbar_core::quick_bar::validate_query;

#[derive(Parser, Debug)]
#[command(name = "quickbar")]
#[command(about = "Fuzzy-filter exported entities and commands")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Text to filter by; a leading `>` searches commands instead of entities
	#[arg(default_value = "", value_parser = parse_query)]
	pub query: String,

	/// JSON file with the entity states (an array, or `{ states, panels }`)
	#[arg(long, value_name = "PATH")]
	pub states: PathBuf,

	/// JSON file mapping each domain to its services
	#[arg(long, value_name = "PATH")]
	pub services: Option<PathBuf>,

	/// TOML configuration file
	#[arg(long, short = 'c', value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Maximum number of rows to print
	#[arg(long, short = 'n', default_value_t = 20)]
	pub limit: usize,

	/// Print rows as JSON
	#[arg(long)]
	pub json: bool,

	/// Run the top result's action (printed, not executed)
	#[arg(long)]
	pub activate: bool,

	/// Log filtering decisions to stderr
	#[arg(long, short = 'v')]
	pub verbose: bool,
}

fn parse_query(raw: &str) -> Result<String, String> {
	validate_query(raw).map_err(|error| error.to_string())?;
	Ok(raw.to_owned())
}

#[cfg(test)]
mod tests;
