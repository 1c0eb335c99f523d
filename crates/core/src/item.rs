//! Quick bar items and the actions they carry.

use quickbar_matcher::Scorable;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::{Error, Result};

/// Grouping shown in front of command items and mixed into their search text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Category {
	Reload,
	Navigation,
	ServerControl,
	Entity,
	Suggestion,
}

impl Category {
	/// Human readable label.
	pub fn label(self) -> &'static str {
		match self {
			Self::Reload => "Reload",
			Self::Navigation => "Navigate",
			Self::ServerControl => "Server",
			Self::Entity => "Entity",
			Self::Suggestion => "Suggestion",
		}
	}
}

/// What happens when an item is activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemAction {
	CallService { domain: String, service: String },
	MoreInfo { entity_id: String },
	Navigate { path: String },
}

impl ItemAction {
	pub fn call_service(domain: impl Into<String>, service: impl Into<String>) -> Self {
		Self::CallService {
			domain: domain.into(),
			service: service.into(),
		}
	}

	pub fn more_info(entity_id: impl Into<String>) -> Self {
		Self::MoreInfo { entity_id: entity_id.into() }
	}

	pub fn navigate(path: impl Into<String>) -> Self {
		Self::Navigate { path: path.into() }
	}
}

/// A selectable row in the quick bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickBarItem {
	primary_text: String,
	secondary_text: Option<String>,
	icon: Option<String>,
	category: Category,
	action: ItemAction,
	search_strings: Vec<String>,
}

impl QuickBarItem {
	/// Creates an item; fails when no search string has visible content.
	pub fn new(primary_text: impl Into<String>, category: Category, action: ItemAction, search_strings: Vec<String>) -> Result<Self> {
		let primary_text = primary_text.into();
		if search_strings.iter().all(|s| s.trim().is_empty()) {
			return Err(Error::EmptySearchStrings(primary_text));
		}
		Ok(Self {
			primary_text,
			secondary_text: None,
			icon: None,
			category,
			action,
			search_strings,
		})
	}

	pub fn with_secondary_text(mut self, text: impl Into<String>) -> Self {
		self.secondary_text = Some(text.into());
		self
	}

	pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
		self.icon = Some(icon.into());
		self
	}

	pub fn primary_text(&self) -> &str {
		&self.primary_text
	}

	pub fn secondary_text(&self) -> Option<&str> {
		self.secondary_text.as_deref()
	}

	pub fn icon(&self) -> Option<&str> {
		self.icon.as_deref()
	}

	pub fn category(&self) -> Category {
		self.category
	}

	pub fn action(&self) -> &ItemAction {
		&self.action
	}

	pub fn search_strings(&self) -> &[String] {
		&self.search_strings
	}
}

impl Scorable for QuickBarItem {
	fn search_strings(&self) -> impl Iterator<Item = &str> {
		self.search_strings.iter().map(String::as_str)
	}
}

#[cfg(test)]
mod tests {
	use std::str::FromStr;

	use pretty_assertions::assert_eq;
	use strum::IntoEnumIterator;

	use super::*;

	#[test]
	fn rejects_missing_search_strings() {
		let action = ItemAction::more_info("light.kitchen");
		assert!(matches!(
			QuickBarItem::new("Kitchen", Category::Entity, action.clone(), vec![]),
			Err(Error::EmptySearchStrings(name)) if name == "Kitchen"
		));
		assert!(QuickBarItem::new("Kitchen", Category::Entity, action, vec![" ".into(), String::new()]).is_err());
	}

	#[test]
	fn builder_sets_optional_fields() {
		let item = QuickBarItem::new("Kitchen", Category::Entity, ItemAction::more_info("light.kitchen"), vec!["Kitchen".into()])
			.unwrap()
			.with_secondary_text("light.kitchen")
			.with_icon("mdi:lightbulb");
		assert_eq!(item.secondary_text(), Some("light.kitchen"));
		assert_eq!(item.icon(), Some("mdi:lightbulb"));
		assert_eq!(Scorable::search_strings(&item).collect::<Vec<_>>(), vec!["Kitchen"]);
	}

	#[test]
	fn category_identifiers_round_trip() {
		for category in Category::iter() {
			let ident: &'static str = category.into();
			assert_eq!(Category::from_str(ident).unwrap(), category);
			assert_eq!(category.to_string(), ident);
		}
		assert_eq!(Category::ServerControl.to_string(), "server_control");
		assert!(Category::from_str("bogus").is_err());
	}

	#[test]
	fn actions_serialize_tagged() {
		let json = serde_json::to_string(&ItemAction::call_service("automation", "reload")).unwrap();
		assert_eq!(json, r#"{"type":"call_service","domain":"automation","service":"reload"}"#);
	}
}
