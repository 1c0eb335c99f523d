//! Host-supplied state: entity snapshot, sidebar panels and service registry.

use std::collections::{BTreeMap, BTreeSet};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// Domain part of an entity id (`light` for `light.kitchen`), empty when
/// the id has no dot.
pub fn compute_domain(entity_id: &str) -> &str {
	entity_id.split_once('.').map_or("", |(domain, _)| domain)
}

/// Object part of an entity id (`kitchen` for `light.kitchen`).
pub fn compute_object_id(entity_id: &str) -> &str {
	entity_id.split_once('.').map_or(entity_id, |(_, object_id)| object_id)
}

/// Human readable fallback for an integration domain: `media_player` → `Media Player`.
pub fn domain_to_name(domain: &str) -> String {
	domain
		.split('_')
		.filter(|word| !word.is_empty())
		.map(|word| {
			let mut chars = word.chars();
			match chars.next() {
				Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
				None => String::new(),
			}
		})
		.collect::<Vec<_>>()
		.join(" ")
}

/// One entity as reported by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityState {
	pub entity_id: String,
	#[serde(default)]
	pub state: String,
	#[serde(default)]
	pub attributes: Map<String, Value>,
}

impl EntityState {
	pub fn new(entity_id: impl Into<String>, state: impl Into<String>) -> Self {
		Self {
			entity_id: entity_id.into(),
			state: state.into(),
			attributes: Map::new(),
		}
	}

	/// Sets a `friendly_name` attribute.
	pub fn with_friendly_name(mut self, name: impl Into<String>) -> Self {
		self.attributes.insert("friendly_name".into(), Value::String(name.into()));
		self
	}

	pub fn domain(&self) -> &str {
		compute_domain(&self.entity_id)
	}

	pub fn object_id(&self) -> &str {
		compute_object_id(&self.entity_id)
	}

	/// The `friendly_name` attribute, or the object id with underscores as spaces.
	pub fn display_name(&self) -> String {
		self.attribute_str("friendly_name")
			.filter(|name| !name.trim().is_empty())
			.map(str::to_owned)
			.unwrap_or_else(|| self.object_id().replace('_', " "))
	}

	pub fn icon(&self) -> Option<&str> {
		self.attribute_str("icon")
	}

	fn attribute_str(&self, key: &str) -> Option<&str> {
		self.attributes.get(key).and_then(Value::as_str)
	}
}

/// A navigable sidebar panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
	pub url_path: String,
	#[serde(default)]
	pub title: Option<String>,
	#[serde(default)]
	pub icon: Option<String>,
}

impl Panel {
	/// Panel title, falling back to a name derived from its path.
	pub fn display_title(&self) -> String {
		self.title
			.as_deref()
			.filter(|title| !title.trim().is_empty())
			.map(str::to_owned)
			.unwrap_or_else(|| domain_to_name(&self.url_path.replace('-', "_")))
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotDocument {
	States(Vec<EntityState>),
	Full {
		states: Vec<EntityState>,
		#[serde(default)]
		panels: Vec<Panel>,
	},
}

/// Point-in-time view of the host's entities, keyed by entity id in host order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateSnapshot {
	entities: IndexMap<String, EntityState>,
	panels: Vec<Panel>,
}

impl StateSnapshot {
	/// Builds a snapshot; later duplicates of an entity id replace earlier ones.
	pub fn new(states: impl IntoIterator<Item = EntityState>) -> Self {
		Self {
			entities: states.into_iter().map(|state| (state.entity_id.clone(), state)).collect(),
			panels: Vec::new(),
		}
	}

	pub fn with_panels(mut self, panels: impl IntoIterator<Item = Panel>) -> Self {
		self.panels = panels.into_iter().collect();
		self
	}

	/// Decodes either a bare JSON array of states or an object with
	/// `states` and optional `panels`.
	pub fn from_json(json: &str) -> Result<Self> {
		let snapshot = match serde_json::from_str(json)? {
			SnapshotDocument::States(states) => Self::new(states),
			SnapshotDocument::Full { states, panels } => Self::new(states).with_panels(panels),
		};
		Ok(snapshot)
	}

	pub fn get(&self, entity_id: &str) -> Option<&EntityState> {
		self.entities.get(entity_id)
	}

	pub fn entities(&self) -> impl Iterator<Item = &EntityState> {
		self.entities.values()
	}

	pub fn panels(&self) -> &[Panel] {
		&self.panels
	}

	pub fn len(&self) -> usize {
		self.entities.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entities.is_empty()
	}
}

/// Services offered by the host, grouped by domain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceRegistry {
	domains: BTreeMap<String, BTreeSet<String>>,
}

impl ServiceRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_service(mut self, domain: impl Into<String>, service: impl Into<String>) -> Self {
		self.insert(domain, service);
		self
	}

	pub fn insert(&mut self, domain: impl Into<String>, service: impl Into<String>) {
		self.domains.entry(domain.into()).or_default().insert(service.into());
	}

	/// Decodes `{ "<domain>": { "<service>": { ...description } } }`.
	pub fn from_json(json: &str) -> Result<Self> {
		let raw: BTreeMap<String, Map<String, Value>> = serde_json::from_str(json)?;
		let domains = raw.into_iter().map(|(domain, services)| (domain, services.into_iter().map(|(service, _)| service).collect())).collect();
		Ok(Self { domains })
	}

	pub fn has_service(&self, domain: &str, service: &str) -> bool {
		self.domains.get(domain).is_some_and(|services| services.contains(service))
	}

	/// Domains offering `service`, sorted.
	pub fn components_with_service(&self, service: &str) -> Vec<&str> {
		self.domains
			.iter()
			.filter(|(_, services)| services.contains(service))
			.map(|(domain, _)| domain.as_str())
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn domain_and_object_id() {
		assert_eq!(compute_domain("light.kitchen"), "light");
		assert_eq!(compute_object_id("light.kitchen"), "kitchen");
		assert_eq!(compute_domain("nodot"), "");
		assert_eq!(compute_object_id("nodot"), "nodot");
	}

	#[test]
	fn domain_names_are_title_cased() {
		assert_eq!(domain_to_name("media_player"), "Media Player");
		assert_eq!(domain_to_name("zha"), "Zha");
		assert_eq!(domain_to_name("__odd__"), "Odd");
		assert_eq!(domain_to_name(""), "");
	}

	#[test]
	fn display_name_prefers_friendly_name() {
		let named = EntityState::new("light.kitchen", "on").with_friendly_name("Kitchen Light");
		assert_eq!(named.display_name(), "Kitchen Light");

		let unnamed = EntityState::new("fan.living_room", "off");
		assert_eq!(unnamed.display_name(), "living room");

		let blank = EntityState::new("switch.porch", "on").with_friendly_name("  ");
		assert_eq!(blank.display_name(), "porch");
	}

	#[test]
	fn snapshot_from_bare_array() {
		let json = r#"[
			{"entity_id": "light.kitchen", "state": "on", "attributes": {"friendly_name": "Kitchen Light", "icon": "mdi:lightbulb"}},
			{"entity_id": "fan.living_room", "state": "off"}
		]"#;
		let snapshot = StateSnapshot::from_json(json).unwrap();
		assert_eq!(snapshot.len(), 2);
		assert_eq!(snapshot.get("light.kitchen").and_then(EntityState::icon), Some("mdi:lightbulb"));
		assert!(snapshot.panels().is_empty());
	}

	#[test]
	fn snapshot_from_full_document() {
		let json = r#"{
			"states": [{"entity_id": "sun.sun", "state": "above_horizon"}],
			"panels": [{"url_path": "energy", "title": "Energy"}, {"url_path": "logbook"}]
		}"#;
		let snapshot = StateSnapshot::from_json(json).unwrap();
		assert_eq!(snapshot.len(), 1);
		assert_eq!(snapshot.panels().iter().map(Panel::display_title).collect::<Vec<_>>(), vec!["Energy", "Logbook"]);
	}

	#[test]
	fn snapshot_rejects_malformed_json() {
		assert!(StateSnapshot::from_json(r#"{"states": 5}"#).is_err());
		assert!(StateSnapshot::from_json("not json").is_err());
	}

	#[test]
	fn snapshot_keeps_host_order() {
		let snapshot = StateSnapshot::new([EntityState::new("b.two", "x"), EntityState::new("a.one", "y")]);
		assert_eq!(snapshot.entities().map(|e| e.entity_id.as_str()).collect::<Vec<_>>(), vec!["b.two", "a.one"]);
	}

	#[test]
	fn registry_lists_domains_with_service() {
		let json = r#"{
			"automation": {"reload": {}, "trigger": {}},
			"light": {"turn_on": {}},
			"script": {"reload": {"description": "Reload scripts"}}
		}"#;
		let registry = ServiceRegistry::from_json(json).unwrap();
		assert_eq!(registry.components_with_service("reload"), vec!["automation", "script"]);
		assert!(registry.has_service("light", "turn_on"));
		assert!(!registry.has_service("light", "reload"));
		assert!(registry.components_with_service("missing").is_empty());
	}
}
