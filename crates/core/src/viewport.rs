//! Virtualized list geometry.
//!
//! Only rows intersecting the visible window are rendered; everything else
//! is represented by the list's total scroll height.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
	row_height: u32,
	padding: u32,
	max_height: u32,
}

impl Viewport {
	/// `row_height` of zero is treated as one.
	pub fn new(row_height: u32, padding: u32, max_height: u32) -> Self {
		Self {
			row_height: row_height.max(1),
			padding,
			max_height,
		}
	}

	pub fn row_height(&self) -> u32 {
		self.row_height
	}

	/// Height of the whole list content, unclamped.
	pub fn content_height(&self, rows: usize) -> u64 {
		rows as u64 * u64::from(self.row_height) + u64::from(self.padding)
	}

	/// On-screen height of a list with `rows` rows.
	pub fn list_height(&self, rows: usize) -> u32 {
		self.content_height(rows).min(u64::from(self.max_height)) as u32
	}

	/// Largest useful scroll offset.
	pub fn max_scroll(&self, rows: usize) -> u32 {
		self.content_height(rows).saturating_sub(u64::from(self.list_height(rows))).min(u64::from(u32::MAX)) as u32
	}

	/// Rows that intersect the window when scrolled to `scroll_offset`.
	pub fn visible_rows(&self, rows: usize, scroll_offset: u32) -> Range<usize> {
		let offset = u64::from(scroll_offset.min(self.max_scroll(rows)));
		let height = u64::from(self.list_height(rows));
		let row_height = u64::from(self.row_height);

		let start = (offset / row_height) as usize;
		let end = (offset + height).div_ceil(row_height) as usize;
		start.min(rows)..end.min(rows)
	}

	/// Scroll offset that brings row `index` fully into view, moving as little as possible.
	pub fn reveal(&self, rows: usize, index: usize, scroll_offset: u32) -> u32 {
		let row_height = u64::from(self.row_height);
		let window = u64::from(self.list_height(rows)).saturating_sub(u64::from(self.padding)).max(row_height);
		let top = index as u64 * row_height;
		let bottom = top + row_height;
		let offset = u64::from(scroll_offset);

		let target = if top < offset {
			top
		} else if bottom > offset + window {
			bottom - window
		} else {
			offset
		};
		target.min(u64::from(self.max_scroll(rows))) as u32
	}
}
