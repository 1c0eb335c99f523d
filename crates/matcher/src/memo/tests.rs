use std::sync::Arc;

use super::*;

fn rooms() -> Arc<[String]> {
	["Kitchen Light", "Living Room Fan", "Porch Switch"].into_iter().map(String::from).collect()
}

#[test]
fn test_repeated_query_hits_cache() {
	let mut cache = FilterCache::new(rooms(), Config::default(), 4);
	let first = cache.matches("li");
	let second = cache.matches("li");
	assert!(Arc::ptr_eq(&first, &second));
	assert_eq!(cache.stats(), (1, 1));
}

#[test]
fn test_leading_whitespace_shares_entry() {
	let mut cache = FilterCache::new(rooms(), Config::default(), 4);
	cache.matches("kl");
	assert!(cache.contains("  kl"));
	cache.matches("  kl");
	assert_eq!(cache.stats(), (1, 1));
}

#[test]
fn test_filter_returns_items() {
	let mut cache = FilterCache::new(rooms(), Config::default(), 4);
	assert_eq!(cache.filter("kl"), vec!["Kitchen Light"]);
	assert_eq!(cache.filter("").len(), 3);
}

#[test]
fn test_same_items_keep_cache() {
	let items = rooms();
	let mut cache = FilterCache::new(Arc::clone(&items), Config::default(), 4);
	cache.matches("fan");
	cache.set_items(items);
	assert!(cache.contains("fan"));
}

#[test]
fn test_new_items_clear_cache() {
	let mut cache = FilterCache::new(rooms(), Config::default(), 4);
	cache.matches("fan");
	// Equal contents but a different allocation.
	cache.set_items(rooms());
	assert!(!cache.contains("fan"));
	assert_eq!(cache.filter("fan"), vec!["Living Room Fan"]);
}

#[test]
fn test_config_change_clears_cache() {
	let mut cache = FilterCache::new(rooms(), Config::default(), 4);
	cache.matches("fan");
	cache.set_config(Config::default());
	assert!(cache.contains("fan"));
	cache.set_config(Config {
		sort: false,
		..Config::default()
	});
	assert!(!cache.contains("fan"));
}

#[test]
fn test_least_recent_query_is_evicted() {
	let mut cache = FilterCache::new(rooms(), Config::default(), 2);
	cache.matches("k");
	cache.matches("l");
	cache.matches("p");
	assert!(!cache.contains("k"));
	assert!(cache.contains("l"));
	assert!(cache.contains("p"));
}

#[test]
fn test_zero_capacity_is_clamped() {
	let mut cache = FilterCache::new(rooms(), Config::default(), 0);
	cache.matches("k");
	assert!(cache.contains("k"));
}
