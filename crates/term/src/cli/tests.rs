use clap::CommandFactory;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn command_definition_is_valid() {
	Cli::command().debug_assert();
}

#[test]
fn defaults() {
	let cli = Cli::try_parse_from(["quickbar", "--states", "states.json"]).unwrap();
	assert_eq!(cli.query, "");
	assert_eq!(cli.states, PathBuf::from("states.json"));
	assert_eq!(cli.services, None);
	assert_eq!(cli.limit, 20);
	assert!(!cli.json && !cli.activate && !cli.verbose);
}

#[test]
fn command_query_and_options() {
	let cli = Cli::try_parse_from(["quickbar", "--states", "s.json", "--services", "svc.json", "-n", "5", "-v", ">reload"]).unwrap();
	assert_eq!(cli.query, ">reload");
	assert_eq!(cli.services, Some(PathBuf::from("svc.json")));
	assert_eq!(cli.limit, 5);
	assert!(cli.verbose);
}

#[test]
fn states_are_required() {
	assert!(Cli::try_parse_from(["quickbar", "kitchen"]).is_err());
}

#[test]
fn control_characters_are_rejected() {
	let err = Cli::try_parse_from(["quickbar", "--states", "s.json", "kit\u{1b}chen"]).unwrap_err();
	assert!(err.to_string().contains("control character"));
}
