//! Builds the entity and command item lists from host state.

use tracing::warn;

use crate::error::Result;
use crate::item::{Category, ItemAction, QuickBarItem};
use crate::state::{ServiceRegistry, StateSnapshot, domain_to_name};

const SERVER_DOMAIN: &str = "homeassistant";

const SERVER_ACTIONS: &[(&str, &str)] = &[("restart", "Restart Server"), ("stop", "Stop Server"), ("check_config", "Check Configuration")];

/// One item per entity, sorted by case-insensitive name.
pub fn entity_items(snapshot: &StateSnapshot) -> Vec<QuickBarItem> {
	let items = snapshot.entities().filter_map(|entity| {
		let name = entity.display_name();
		let item = QuickBarItem::new(
			name.clone(),
			Category::Entity,
			ItemAction::more_info(&entity.entity_id),
			vec![name, entity.entity_id.clone()],
		)
		.map(|item| item.with_secondary_text(&entity.entity_id));
		let item = match entity.icon() {
			Some(icon) => item.map(|item| item.with_icon(icon)),
			None => item,
		};
		keep(item)
	});
	sorted(items.collect())
}

/// Reload, server control and navigation commands, sorted by case-insensitive text.
pub fn command_items(registry: &ServiceRegistry, snapshot: &StateSnapshot) -> Vec<QuickBarItem> {
	let reload = registry
		.components_with_service("reload")
		.into_iter()
		.map(|domain| command(format!("Reload {}", domain_to_name(domain)), Category::Reload, ItemAction::call_service(domain, "reload")));

	let server = SERVER_ACTIONS
		.iter()
		.filter(|(service, _)| registry.has_service(SERVER_DOMAIN, service))
		.map(|(service, text)| command((*text).to_owned(), Category::ServerControl, ItemAction::call_service(SERVER_DOMAIN, *service)));

	let navigation = snapshot.panels().iter().map(|panel| {
		let item = command(panel.display_title(), Category::Navigation, ItemAction::navigate(format!("/{}", panel.url_path.trim_start_matches('/'))));
		match &panel.icon {
			Some(icon) => item.map(|item| item.with_icon(icon)),
			None => item,
		}
	});

	sorted(reload.chain(server).chain(navigation).filter_map(keep).collect())
}

fn command(text: String, category: Category, action: ItemAction) -> Result<QuickBarItem> {
	let search = format!("{} {}", category.label(), text);
	QuickBarItem::new(text, category, action, vec![search])
}

fn keep(item: Result<QuickBarItem>) -> Option<QuickBarItem> {
	item.inspect_err(|error| warn!(%error, "skipping quick bar item")).ok()
}

fn sorted(mut items: Vec<QuickBarItem>) -> Vec<QuickBarItem> {
	items.sort_by_cached_key(|item| item.primary_text().to_lowercase());
	items
}
