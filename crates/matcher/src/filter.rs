use std::cmp::Ordering;

use crate::Config;
use crate::normalize::Folded;
use crate::sequence::Scorer;

/// Something that can be fuzzy matched through one or more search strings.
pub trait Scorable {
	/// Strings the query is matched against. The best scoring one wins.
	fn search_strings(&self) -> impl Iterator<Item = &str>;
}

impl Scorable for str {
	fn search_strings(&self) -> impl Iterator<Item = &str> {
		std::iter::once(self)
	}
}

impl Scorable for String {
	fn search_strings(&self) -> impl Iterator<Item = &str> {
		std::iter::once(self.as_str())
	}
}

impl<T: Scorable + ?Sized> Scorable for &T {
	fn search_strings(&self) -> impl Iterator<Item = &str> {
		(**self).search_strings()
	}
}

/// A matched item, identified by its index in the input list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Match {
	pub index: usize,
	pub score: i32,
}

impl Ord for Match {
	/// Best first: higher score, then earlier input position.
	fn cmp(&self, other: &Self) -> Ordering {
		other.score.cmp(&self.score).then_with(|| self.index.cmp(&other.index))
	}
}

impl PartialOrd for Match {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

/// An item paired with the score it got in a single filter pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredItem<'a, T: ?Sized> {
	pub item: &'a T,
	pub score: i32,
}

/// Strips leading whitespace from a raw query.
///
/// Returns `None` when nothing is left, meaning the list should be shown
/// unfiltered.
pub fn prepare_query(query: &str) -> Option<&str> {
	let query = query.trim_start();
	(!query.is_empty()).then_some(query)
}

fn best_score<T: Scorable + ?Sized>(scorer: &mut Scorer, query: &Folded, item: &T, config: &Config) -> Option<i32> {
	item.search_strings()
		.filter_map(|text| scorer.score(query, &Folded::new(text, config.fold_diacritics), config))
		// A zero alignment is still a match; keep it ahead of nothing.
		.map(|s| if s.score == 0 { 1 } else { s.score })
		.max()
}

/// Best score of `query` across the item's search strings, or `None` when no
/// search string contains the query as a subsequence.
pub fn sequential_match<T: Scorable + ?Sized>(query: &str, item: &T, config: &Config) -> Option<i32> {
	let query = Folded::new(query, config.fold_diacritics);
	if query.is_empty() {
		return Some(0);
	}
	best_score(&mut Scorer::new(), &query, item, config)
}

/// Matches `query` against every item and returns the matches.
///
/// With `config.sort` the result is ordered best first with ties kept in
/// input order; otherwise it follows input order. A query with nothing left
/// to match after trimming and folding (empty, whitespace, or only combining
/// marks) matches every item with score zero.
pub fn match_list<T: Scorable>(query: &str, items: &[T], config: &Config) -> Vec<Match> {
	let Some(query) = prepare_query(query) else {
		return unfiltered(items.len());
	};

	let folded = Folded::new(query, config.fold_diacritics);
	if folded.is_empty() {
		return unfiltered(items.len());
	}
	let mut scorer = Scorer::new();
	let mut matches: Vec<Match> = items
		.iter()
		.enumerate()
		.filter_map(|(index, item)| {
			best_score(&mut scorer, &folded, item, config).map(|score| Match { index, score })
		})
		.collect();

	if config.sort {
		// Indices are unique, so an unstable sort on (score, index) is stable
		// with respect to input order.
		matches.sort_unstable();
	}

	matches
}

fn unfiltered(len: usize) -> Vec<Match> {
	(0..len).map(|index| Match { index, score: 0 }).collect()
}

/// Matches and pairs each surviving item with its score.
pub fn score_items<'a, T: Scorable>(query: &str, items: &'a [T], config: &Config) -> Vec<ScoredItem<'a, T>> {
	match_list(query, items, config)
		.into_iter()
		.map(|m| ScoredItem {
			item: &items[m.index],
			score: m.score,
		})
		.collect()
}

/// Filters `items` down to those matching `query`, best first.
///
/// An empty query returns every item in its original order.
pub fn filter_sort<'a, T: Scorable>(query: &str, items: &'a [T]) -> Vec<&'a T> {
	filter_sort_with(query, items, &Config::default())
}

/// [`filter_sort`] with explicit options.
pub fn filter_sort_with<'a, T: Scorable>(query: &str, items: &'a [T], config: &Config) -> Vec<&'a T> {
	match_list(query, items, config).into_iter().map(|m| &items[m.index]).collect()
}
