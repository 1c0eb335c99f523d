//! Sequence fuzzy matching for quick-bar style pickers.
//!
//! A query matches a candidate when all of its characters appear in the
//! candidate in order, ignoring case and diacritics. Matches are ranked by a
//! local alignment score that rewards prefix hits, camel-case humps and word
//! starts after separators, and penalizes gaps and late starts.
//!
//! ```
//! use quickbar_matcher::filter_sort;
//!
//! let items = ["Kitchen Light", "Living Room Fan"];
//! let matched = filter_sort("kl", &items);
//! assert_eq!(matched, vec![&"Kitchen Light"]);
//! ```
//!
//! Filtering is pure: inputs are never mutated and identical inputs always
//! yield identical output, so results can be cached with [`FilterCache`].

mod r#const;
mod filter;
mod memo;
pub mod normalize;
pub mod sequence;

pub use filter::{Match, Scorable, ScoredItem, filter_sort, filter_sort_with, match_list, prepare_query, score_items, sequential_match};
pub use memo::FilterCache;
pub use sequence::{FuzzyScore, Scorer, fuzzy_score, is_pattern_in_word};

/// Options controlling how queries are matched against candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct Config {
	/// Accept alignments whose first character lands on a weak position
	/// (for example `"kl"` matching the `k` in the middle of a word).
	pub first_match_can_be_weak: bool,
	/// Strip combining marks before comparing, so `"cafe"` matches `"Café"`.
	pub fold_diacritics: bool,
	/// Sort matches by descending score. When disabled matches keep input order.
	pub sort: bool,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			first_match_can_be_weak: true,
			fold_diacritics: true,
			sort: true,
		}
	}
}
