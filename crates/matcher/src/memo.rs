use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;

use crate::filter::{Match, Scorable, match_list, prepare_query};
use crate::Config;

const MIN_CAPACITY: NonZeroUsize = NonZeroUsize::MIN;

/// Remembers recent filter results for one item list.
///
/// Results are keyed on the prepared query; swapping in a different item
/// list (by pointer identity) drops everything cached so far. Typing and
/// then deleting characters in a picker revisits earlier queries, which
/// this turns into cache hits.
#[derive(Debug)]
pub struct FilterCache<T> {
	items: Arc<[T]>,
	config: Config,
	results: LruCache<String, Arc<[Match]>>,
	hits: u64,
	misses: u64,
}

impl<T: Scorable> FilterCache<T> {
	/// Creates a cache over `items` holding up to `capacity` queries (at least one).
	pub fn new(items: Arc<[T]>, config: Config, capacity: usize) -> Self {
		let capacity = NonZeroUsize::new(capacity).unwrap_or(MIN_CAPACITY);
		Self {
			items,
			config,
			results: LruCache::new(capacity),
			hits: 0,
			misses: 0,
		}
	}

	/// The item list results refer to.
	pub fn items(&self) -> &Arc<[T]> {
		&self.items
	}

	/// Replaces the item list. A list that is the same allocation keeps the cache.
	pub fn set_items(&mut self, items: Arc<[T]>) {
		if Arc::ptr_eq(&self.items, &items) {
			return;
		}
		self.items = items;
		self.results.clear();
	}

	/// Replaces the match options, clearing cached results when they change.
	pub fn set_config(&mut self, config: Config) {
		if self.config != config {
			self.config = config;
			self.results.clear();
		}
	}

	/// Matches for `query`, computed on a miss.
	pub fn matches(&mut self, query: &str) -> Arc<[Match]> {
		let key = prepare_query(query).unwrap_or_default();
		if let Some(found) = self.results.get(key) {
			self.hits += 1;
			return Arc::clone(found);
		}

		self.misses += 1;
		let computed: Arc<[Match]> = match_list(key, &self.items, &self.config).into();
		self.results.put(key.to_owned(), Arc::clone(&computed));
		computed
	}

	/// Items matching `query`, best first.
	pub fn filter(&mut self, query: &str) -> Vec<&T> {
		let matches = self.matches(query);
		matches.iter().map(|m| &self.items[m.index]).collect()
	}

	/// Whether `query` is currently cached.
	pub fn contains(&self, query: &str) -> bool {
		self.results.contains(prepare_query(query).unwrap_or_default())
	}

	/// Cache hits and misses since creation.
	pub fn stats(&self) -> (u64, u64) {
		(self.hits, self.misses)
	}
}

#[cfg(test)]
mod tests;
