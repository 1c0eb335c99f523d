//! End-to-end quick bar sessions driven from host JSON.

use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use quickbar_core::host::RecordingHost;
use quickbar_core::{Error, ItemAction, Key, KeyOutcome, Mode, OpenParams, QuickBar, QuickBarConfig, ServiceRegistry, StateSnapshot};

const STATES: &str = r#"{
	"states": [
		{"entity_id": "light.kitchen", "state": "on", "attributes": {"friendly_name": "Kitchen Light", "icon": "mdi:ceiling-light"}},
		{"entity_id": "light.cafe_corner", "state": "off", "attributes": {"friendly_name": "Café Corner"}},
		{"entity_id": "climate.hallway", "state": "heat", "attributes": {"friendly_name": "Hallway Thermostat"}},
		{"entity_id": "person.alex", "state": "home"}
	],
	"panels": [
		{"url_path": "logbook", "title": "Logbook"},
		{"url_path": "config"}
	]
}"#;

const SERVICES: &str = r#"{
	"automation": {"reload": {}, "trigger": {}},
	"group": {"reload": {}},
	"homeassistant": {"restart": {}, "stop": {}, "check_config": {}},
	"light": {"turn_on": {}, "turn_off": {}}
}"#;

fn session() -> QuickBar {
	let snapshot = StateSnapshot::from_json(STATES).unwrap();
	let registry = ServiceRegistry::from_json(SERVICES).unwrap();
	let mut bar = QuickBar::new(QuickBarConfig::default());
	bar.open(OpenParams::default(), &snapshot, &registry);
	bar
}

fn texts(bar: &QuickBar) -> Vec<&str> {
	bar.items().into_iter().map(|item| item.primary_text()).collect()
}

#[test]
fn entity_search_then_more_info() {
	let host = RecordingHost::new();
	let start = Instant::now();
	let mut bar = session();
	assert_eq!(texts(&bar), vec!["alex", "Café Corner", "Hallway Thermostat", "Kitchen Light"]);

	bar.set_input("kit", start).unwrap();
	bar.poll(start + Duration::from_millis(100));
	assert_eq!(texts(&bar), vec!["Kitchen Light"]);
	assert_eq!(bar.items()[0].icon(), Some("mdi:ceiling-light"));

	assert_eq!(bar.handle_key(Key::Enter, &host).unwrap(), KeyOutcome::Activated(0));
	assert_eq!(host.actions(), vec![ItemAction::more_info("light.kitchen")]);
	assert!(!bar.is_open());
}

#[test]
fn diacritics_are_folded() {
	let mut bar = session();
	bar.set_input("cafe", Instant::now()).unwrap();
	bar.refresh_now();
	assert_eq!(texts(&bar), vec!["Café Corner"]);
}

#[test]
fn entity_id_is_searchable() {
	let mut bar = session();
	bar.set_input("climate.", Instant::now()).unwrap();
	bar.refresh_now();
	assert_eq!(texts(&bar), vec!["Hallway Thermostat"]);
}

#[test]
fn command_mode_lists_every_command() {
	let mut bar = session();
	bar.set_input(">", Instant::now()).unwrap();
	bar.refresh_now();
	assert_eq!(bar.mode(), Mode::Command);
	assert_eq!(
		texts(&bar),
		vec!["Check Configuration", "Config", "Logbook", "Reload Automation", "Reload Group", "Restart Server", "Stop Server"]
	);
}

#[test]
fn command_search_by_category_label() {
	let host = RecordingHost::new();
	let mut bar = session();
	bar.set_input(">navigate log", Instant::now()).unwrap();
	bar.refresh_now();
	assert_eq!(texts(&bar)[0], "Logbook");

	bar.activate(0, &host).unwrap();
	assert_eq!(host.actions(), vec![ItemAction::navigate("/logbook")]);
}

#[test]
fn reopening_starts_fresh() {
	let mut bar = session();
	bar.set_input(">rel", Instant::now()).unwrap();
	bar.refresh_now();
	bar.close();

	let snapshot = StateSnapshot::from_json(STATES).unwrap();
	let registry = ServiceRegistry::from_json(SERVICES).unwrap();
	bar.open(OpenParams::default(), &snapshot, &registry);
	assert_eq!(bar.mode(), Mode::Entity);
	assert_eq!(bar.input(), "");
	assert_eq!(bar.len(), 4);
}

#[test]
fn invalid_json_is_reported() {
	assert!(matches!(StateSnapshot::from_json("[{]"), Err(Error::Json(_))));
	assert!(matches!(ServiceRegistry::from_json(r#"{"light": []}"#), Err(Error::Json(_))));
}
