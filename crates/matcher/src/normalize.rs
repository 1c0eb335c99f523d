//! Case and diacritic folding.
//!
//! The scorer compares text character by character and needs to know, per
//! position, both the original character (for case bonuses) and its folded
//! lower-case form (for equality). [`Folded`] keeps the two side by side with
//! identical lengths.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Text prepared for scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Folded {
	chars: Vec<char>,
	lower: Vec<char>,
}

impl Folded {
	/// Folds `text`, optionally stripping diacritics.
	///
	/// With `strip_diacritics` the text is decomposed (NFD) and combining
	/// marks are dropped, so `"Café"` folds to `"Cafe"`.
	pub fn new(text: &str, strip_diacritics: bool) -> Self {
		let mut folded = Self::default();
		if strip_diacritics {
			for c in text.nfd().filter(|c| !is_combining_mark(*c)) {
				folded.push(c);
			}
		} else {
			for c in text.chars() {
				folded.push(c);
			}
		}
		folded
	}

	fn push(&mut self, c: char) {
		// Multi-char lowercase expansions (e.g. 'İ') keep only the first char so
		// both vectors stay aligned.
		let lower = c.to_lowercase().next().unwrap_or(c);
		self.chars.push(c);
		self.lower.push(lower);
	}

	/// Characters in their original case.
	pub fn chars(&self) -> &[char] {
		&self.chars
	}

	/// Lower-cased characters, same length as [`Folded::chars`].
	pub fn lower(&self) -> &[char] {
		&self.lower
	}

	pub fn len(&self) -> usize {
		self.chars.len()
	}

	pub fn is_empty(&self) -> bool {
		self.chars.is_empty()
	}

	/// Whether the character at `pos` differs from its lower-case form.
	#[inline]
	pub fn is_upper_at(&self, pos: usize) -> bool {
		self.chars.get(pos).zip(self.lower.get(pos)).is_some_and(|(c, l)| c != l)
	}
}

/// Folds `text` to a lower-case string without diacritics.
pub fn fold_lower(text: &str) -> String {
	Folded::new(text, true).lower.into_iter().collect()
}
