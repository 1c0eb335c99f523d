//! Sequence scoring: aligns a pattern against a word and scores the alignment.
//!
//! The table pass only decides which alignments are possible (a diagonal
//! step needs equal characters, a left step skips a word character). The
//! per-position bonuses are applied while backtracking, where the best of up
//! to [`MAX_ALIGNMENTS`] alignments wins.

use bitflags::bitflags;

use crate::Config;
use crate::r#const::*;
use crate::normalize::Folded;

bitflags! {
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
	struct Arrow: u8 {
		const DIAG = 0b01;
		const LEFT = 0b10;
	}
}

/// Result of scoring a pattern against a single word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuzzyScore {
	/// Alignment score. Higher is better, and may be zero or negative.
	pub score: i32,
	matches: u128,
}

impl FuzzyScore {
	/// Character positions in the word matched by the pattern, ascending.
	pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
		(0..MAX_LEN).filter(move |&i| self.matches & (1u128 << i) != 0)
	}
}

/// Reusable scoring tables.
///
/// Scoring many words against the same pattern through one `Scorer` avoids
/// reallocating the tables for every word.
#[derive(Debug, Default)]
pub struct Scorer {
	cols: usize,
	table: Vec<Option<i32>>,
	scores: Vec<i32>,
	arrows: Vec<Arrow>,
}

impl Scorer {
	pub fn new() -> Self {
		Self::default()
	}

	#[inline]
	fn at(&self, row: usize, col: usize) -> usize {
		row * self.cols + col
	}

	fn reset(&mut self, rows: usize, cols: usize) {
		self.cols = cols;
		let len = rows * cols;
		self.table.clear();
		self.table.resize(len, None);
		self.scores.clear();
		self.scores.resize(len, 0);
		self.arrows.clear();
		self.arrows.resize(len, Arrow::empty());

		for col in 0..cols {
			self.table[col] = Some(-(col as i32));
		}
	}

	/// Scores an already folded pattern against an already folded word.
	pub fn score(&mut self, pattern: &Folded, word: &Folded, config: &Config) -> Option<FuzzyScore> {
		let pattern_len = pattern.len();
		if pattern_len == 0 || pattern_len > MAX_LEN || pattern_len > word.len() {
			return None;
		}
		let word_len = word.len().min(MAX_LEN);

		// Bail before touching the tables when no alignment can exist.
		if !is_subsequence(pattern.lower(), &word.lower()[..word_len]) {
			return None;
		}

		self.reset(pattern_len + 1, word_len + 1);

		let mut has_strong_first_match = false;
		for row in 1..=pattern_len {
			let pattern_pos = row - 1;
			for col in 1..=word_len {
				let word_pos = col - 1;
				let score = char_score(pattern, pattern_pos, word, word_pos);
				if pattern_pos == 0 && score > WEAK_MATCH {
					has_strong_first_match = true;
				}

				let diag = if score > 0 { self.table[self.at(row - 1, col - 1)].map(|v| v + 1) } else { None };
				let left = self.table[self.at(row, col - 1)].map(|v| v - 1);

				let (value, arrow) = match (diag, left) {
					(Some(d), Some(l)) if l > d => (Some(l), Arrow::LEFT),
					(Some(d), Some(l)) if l == d => (Some(l), Arrow::LEFT | Arrow::DIAG),
					(Some(d), _) => (Some(d), Arrow::DIAG),
					(None, Some(l)) => (Some(l), Arrow::LEFT),
					(None, None) => (None, Arrow::empty()),
				};

				let idx = self.at(row, col);
				self.scores[idx] = score;
				self.table[idx] = value;
				self.arrows[idx] = arrow;
			}
		}

		if !has_strong_first_match && !config.first_match_can_be_weak {
			return None;
		}

		let mut search = Backtrack {
			scorer: self,
			first_match_can_be_weak: config.first_match_can_be_weak,
			calls: 0,
			completed: 0,
			top_score: INITIAL_TOP_SCORE,
			top_matches: 0,
		};
		let exact_length_bonus = if pattern_len == word_len { 1 } else { 0 };
		search.walk(pattern_len, word_len, exact_length_bonus, 0, false);

		(search.completed > 0).then_some(FuzzyScore {
			score: search.top_score,
			matches: search.top_matches,
		})
	}
}

struct Backtrack<'a> {
	scorer: &'a Scorer,
	first_match_can_be_weak: bool,
	calls: usize,
	completed: usize,
	top_score: i32,
	top_matches: u128,
}

impl Backtrack<'_> {
	fn walk(&mut self, mut row: usize, mut col: usize, mut total: i32, mut matches: u128, mut last_matched: bool) {
		if self.completed >= MAX_ALIGNMENTS || self.calls >= MAX_BACKTRACK_CALLS || total < GIVE_UP_SCORE {
			return;
		}
		self.calls += 1;

		let mut simple_match_count = 0;
		while row > 0 && col > 0 {
			let idx = self.scorer.at(row, col);
			let score = self.scorer.scores[idx];
			let arrow = self.scorer.arrows[idx];

			if arrow == Arrow::LEFT {
				col -= 1;
				if last_matched {
					total -= NEW_GAP_PENALTY;
				} else if matches != 0 {
					total -= GAP_PENALTY;
				}
				last_matched = false;
				simple_match_count = 0;
			} else if arrow.contains(Arrow::DIAG) {
				if arrow.contains(Arrow::LEFT) {
					let skipped = if matches != 0 { total - GAP_PENALTY } else { total };
					self.walk(row, col - 1, skipped, matches, last_matched);
				}

				total += score;
				row -= 1;
				col -= 1;
				last_matched = true;
				matches |= 1u128 << col;

				if score == WEAK_MATCH {
					simple_match_count += 1;
					if row == 0 && !self.first_match_can_be_weak {
						return;
					}
				} else {
					// A strong hit rewards the run of weak matches leading into it.
					total += 1 + simple_match_count * (score - 1);
					simple_match_count = 0;
				}
			} else {
				return;
			}
		}

		if row > 0 {
			return;
		}

		total -= (col as i32 * LATE_START_PENALTY_PER_CHAR).min(LATE_START_PENALTY_CAP);

		self.completed += 1;
		if total > self.top_score {
			self.top_score = total;
			self.top_matches = matches;
		}
	}
}

fn is_separator(c: char) -> bool {
	matches!(c, '_' | '-' | '.' | ' ' | '/' | '\\' | '\'' | '"' | ':' | '$')
}

fn is_whitespace(c: char) -> bool {
	matches!(c, ' ' | '\t')
}

fn char_score(pattern: &Folded, pattern_pos: usize, word: &Folded, word_pos: usize) -> i32 {
	let word_lower = word.lower();
	if pattern.lower()[pattern_pos] != word_lower[word_pos] {
		return MISMATCH;
	}
	let same_case = pattern.chars()[pattern_pos] == word.chars()[word_pos];

	// common prefix: `foobar <-> foobaz`
	if word_pos == pattern_pos {
		return if same_case { STRONG_MATCH } else { STRONG_MATCH_CASELESS };
	}

	// camel hump: `fo <-> forOthers`
	if word.is_upper_at(word_pos) && (word_pos == 0 || !word.is_upper_at(word_pos - 1)) {
		return if same_case { STRONG_MATCH } else { STRONG_MATCH_CASELESS };
	}

	// first separator of a run: `. <-> foo.bar`
	if is_separator(word_lower[word_pos]) && (word_pos == 0 || !is_separator(word_lower[word_pos - 1])) {
		return SEPARATOR_MATCH;
	}

	// word start: `foo <-> bar_foo`
	if word_pos > 0 && (is_separator(word_lower[word_pos - 1]) || is_whitespace(word_lower[word_pos - 1])) {
		return SEPARATOR_MATCH;
	}

	WEAK_MATCH
}

fn is_subsequence(pattern: &[char], word: &[char]) -> bool {
	let mut pattern = pattern.iter().peekable();
	for c in word {
		if pattern.peek() == Some(&c) {
			pattern.next();
		}
	}
	pattern.peek().is_none()
}

/// Checks whether `pattern` occurs in `word` as an in-order subsequence,
/// ignoring case and diacritics.
pub fn is_pattern_in_word(pattern: &str, word: &str) -> bool {
	is_subsequence(Folded::new(pattern, true).lower(), Folded::new(word, true).lower())
}

/// Scores `pattern` against `word`.
///
/// Convenience wrapper that folds both strings and uses a fresh [`Scorer`].
/// Prefer holding a `Scorer` when scoring many words.
pub fn fuzzy_score(pattern: &str, word: &str, config: &Config) -> Option<FuzzyScore> {
	let pattern = Folded::new(pattern, config.fold_diacritics);
	let word = Folded::new(word, config.fold_diacritics);
	Scorer::new().score(&pattern, &word, config)
}
