//! The quick bar session.
//!
//! A [`QuickBar`] owns both item lists for one opening of the palette. The
//! embedding UI forwards raw input with [`QuickBar::set_input`], drives time
//! forward with [`QuickBar::poll`], renders [`QuickBar::items`] and forwards
//! navigation keys to [`QuickBar::handle_key`].
//!
//! Input is debounced: the visible list only changes once the input has been
//! quiet for the configured interval. Switching between entity and command
//! mode clears the visible list until that refilter runs, which the UI shows
//! as a loading state.

use std::ops::Range;
use std::sync::Arc;
use std::time::Instant;

use quickbar_matcher::{FilterCache, Match, ScoredItem};
use tracing::{debug, info, warn};

use crate::config::QuickBarConfig;
use crate::debounce::Debouncer;
use crate::error::{Error, Result};
use crate::generate::{command_items, entity_items};
use crate::host::Host;
use crate::item::QuickBarItem;
use crate::state::{ServiceRegistry, StateSnapshot};
use crate::viewport::Viewport;

/// Prefix that switches the quick bar into command mode.
pub const COMMAND_PREFIX: char = '>';

/// Which item list the quick bar is filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
	#[default]
	Entity,
	Command,
}

impl Mode {
	/// Splits raw input into its mode and filter text.
	pub fn parse(raw: &str) -> (Self, &str) {
		match raw.strip_prefix(COMMAND_PREFIX) {
			Some(rest) => (Self::Command, rest),
			None => (Self::Entity, raw),
		}
	}
}

/// Options for [`QuickBar::open`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpenParams {
	pub command_mode: bool,
}

/// Keys the quick bar reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
	Enter,
	ArrowDown,
	ArrowUp,
	Escape,
}

/// Result of [`QuickBar::handle_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
	/// Nothing to do for this key in the current state.
	Ignored,
	/// The activated row moved to this index.
	Moved(usize),
	/// Moving up past the first row hands focus back to the input.
	FocusInput,
	/// The item at this index ran and the quick bar closed.
	Activated(usize),
	Closed,
}

pub struct QuickBar {
	config: QuickBarConfig,
	viewport: Viewport,
	opened: bool,
	mode: Mode,
	filter: String,
	entity_items: FilterCache<QuickBarItem>,
	command_items: FilterCache<QuickBarItem>,
	/// `None` while a mode switch waits for its refilter.
	visible: Option<Arc<[Match]>>,
	activated_index: usize,
	command_triggered: Option<usize>,
	debouncer: Debouncer<String>,
	scroll_offset: u32,
}

impl QuickBar {
	pub fn new(config: QuickBarConfig) -> Self {
		let matcher = config.matcher();
		Self {
			viewport: config.viewport(),
			opened: false,
			mode: Mode::Entity,
			filter: String::new(),
			entity_items: FilterCache::new(Arc::from([]), matcher, config.cache_capacity),
			command_items: FilterCache::new(Arc::from([]), matcher, config.cache_capacity),
			visible: Some(Arc::from([])),
			activated_index: 0,
			command_triggered: None,
			debouncer: Debouncer::new(config.debounce()),
			scroll_offset: 0,
			config,
		}
	}

	/// Builds both item lists from the host state and shows the unfiltered list.
	pub fn open(&mut self, params: OpenParams, snapshot: &StateSnapshot, registry: &ServiceRegistry) {
		self.mode = if params.command_mode { Mode::Command } else { Mode::Entity };
		self.entity_items.set_items(entity_items(snapshot).into());
		self.command_items.set_items(command_items(registry, snapshot).into());
		self.opened = true;
		self.filter.clear();
		self.debouncer.cancel();
		self.command_triggered = None;
		self.activated_index = 0;
		self.refilter();
		debug!(
			entities = self.entity_items.items().len(),
			commands = self.command_items.items().len(),
			mode = ?self.mode,
			"quick bar opened"
		);
	}

	/// Hides the quick bar and forgets the current input.
	pub fn close(&mut self) {
		self.opened = false;
		self.filter.clear();
		self.debouncer.cancel();
		self.command_triggered = None;
		self.visible = Some(Arc::from([]));
		self.activated_index = 0;
		self.scroll_offset = 0;
	}

	pub fn is_open(&self) -> bool {
		self.opened
	}

	pub fn mode(&self) -> Mode {
		self.mode
	}

	pub fn config(&self) -> &QuickBarConfig {
		&self.config
	}

	/// Filter text without the mode prefix.
	pub fn filter_text(&self) -> &str {
		&self.filter
	}

	/// The input as the user sees it, including the command prefix.
	pub fn input(&self) -> String {
		match self.mode {
			Mode::Command => format!("{COMMAND_PREFIX}{}", self.filter),
			Mode::Entity => self.filter.clone(),
		}
	}

	/// Accepts new raw input. The list refilters on a later [`poll`](Self::poll).
	pub fn set_input(&mut self, raw: &str, now: Instant) -> Result<()> {
		validate_query(raw)?;
		let (mode, filter) = Mode::parse(raw);
		if mode != self.mode {
			self.mode = mode;
			self.visible = None;
		}
		self.filter = filter.to_owned();
		self.activated_index = 0;
		self.debouncer.push(self.filter.clone(), now);
		Ok(())
	}

	/// Refilters if the input has been quiet long enough. Returns whether the
	/// visible list was recomputed.
	pub fn poll(&mut self, now: Instant) -> bool {
		if !self.opened || self.debouncer.poll(now).is_none() {
			return false;
		}
		self.refilter();
		true
	}

	/// When the pending input will be applied, if any.
	pub fn next_deadline(&self) -> Option<Instant> {
		self.debouncer.deadline()
	}

	/// Applies pending input immediately.
	pub fn refresh_now(&mut self) {
		self.debouncer.flush();
		if self.opened {
			self.refilter();
		}
	}

	/// Whether the list is waiting for a refilter after a mode switch.
	pub fn is_loading(&self) -> bool {
		self.visible.is_none()
	}

	/// Visible items, best first.
	pub fn items(&self) -> Vec<&QuickBarItem> {
		let items = self.current().items();
		self.visible_matches().iter().map(|m| &items[m.index]).collect()
	}

	/// Visible items with their scores. Unfiltered lists score zero.
	pub fn scored_items(&self) -> Vec<ScoredItem<'_, QuickBarItem>> {
		let items = self.current().items();
		self.visible_matches()
			.iter()
			.map(|m| ScoredItem {
				item: &items[m.index],
				score: m.score,
			})
			.collect()
	}

	pub fn len(&self) -> usize {
		self.visible_matches().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn activated_index(&self) -> usize {
		self.activated_index
	}

	/// Row whose action is currently running.
	pub fn command_triggered(&self) -> Option<usize> {
		self.command_triggered
	}

	pub fn list_height(&self) -> u32 {
		self.viewport.list_height(self.len())
	}

	/// Rows to render for the current scroll position.
	pub fn visible_range(&self) -> Range<usize> {
		self.viewport.visible_rows(self.len(), self.scroll_offset)
	}

	pub fn scroll_offset(&self) -> u32 {
		self.scroll_offset
	}

	pub fn scroll_to(&mut self, offset: u32) {
		self.scroll_offset = offset.min(self.viewport.max_scroll(self.len()));
	}

	pub fn handle_key(&mut self, key: Key, host: &dyn Host) -> Result<KeyOutcome> {
		if !self.opened {
			return Ok(KeyOutcome::Ignored);
		}
		if key == Key::Enter {
			self.settle();
		}
		match key {
			Key::Enter if self.is_empty() => Ok(KeyOutcome::Ignored),
			Key::Enter => {
				let index = self.activated_index;
				self.activate(index, host)?;
				Ok(KeyOutcome::Activated(index))
			}
			Key::ArrowDown => {
				let len = self.len();
				if len == 0 {
					return Ok(KeyOutcome::Ignored);
				}
				self.activated_index = (self.activated_index + 1).min(len - 1);
				self.reveal_activated();
				Ok(KeyOutcome::Moved(self.activated_index))
			}
			Key::ArrowUp if self.activated_index == 0 => Ok(KeyOutcome::FocusInput),
			Key::ArrowUp => {
				self.activated_index -= 1;
				self.reveal_activated();
				Ok(KeyOutcome::Moved(self.activated_index))
			}
			Key::Escape => {
				self.close();
				Ok(KeyOutcome::Closed)
			}
		}
	}

	/// Runs the action of the visible item at `index`, then closes.
	///
	/// Pending input is applied first, so `index` refers to the list for what
	/// was typed. A failed action leaves the quick bar open so the user can retry.
	pub fn activate(&mut self, index: usize, host: &dyn Host) -> Result<()> {
		self.settle();
		let len = self.len();
		let Some(m) = self.visible_matches().get(index).copied() else {
			return Err(Error::IndexOutOfRange { index, len });
		};
		let item = &self.current().items()[m.index];
		let action = item.action().clone();
		let text = item.primary_text().to_owned();

		self.command_triggered = Some(index);
		match action.dispatch(host) {
			Ok(()) => {
				info!(item = %text, action = ?action, "quick bar item activated");
				self.close();
				Ok(())
			}
			Err(error) => {
				warn!(item = %text, %error, "quick bar action failed");
				self.command_triggered = None;
				Err(error.into())
			}
		}
	}

	/// Cache hits and misses across both lists.
	pub fn cache_stats(&self) -> (u64, u64) {
		let (eh, em) = self.entity_items.stats();
		let (ch, cm) = self.command_items.stats();
		(eh + ch, em + cm)
	}

	fn current(&self) -> &FilterCache<QuickBarItem> {
		match self.mode {
			Mode::Entity => &self.entity_items,
			Mode::Command => &self.command_items,
		}
	}

	fn visible_matches(&self) -> &[Match] {
		self.visible.as_deref().unwrap_or_default()
	}

	fn refilter(&mut self) {
		let mode = self.mode;
		let cache = match mode {
			Mode::Entity => &mut self.entity_items,
			Mode::Command => &mut self.command_items,
		};
		let cache_hit = cache.contains(&self.filter);
		let matches = cache.matches(&self.filter);
		debug!(?mode, query = %self.filter, results = matches.len(), cache_hit, "quick bar refiltered");

		self.activated_index = self.activated_index.min(matches.len().saturating_sub(1));
		self.visible = Some(matches);
		self.scroll_offset = 0;
	}

	/// Applies debounced input that has not been polled yet.
	fn settle(&mut self) {
		if self.debouncer.is_pending() {
			self.refresh_now();
		}
	}

	fn reveal_activated(&mut self) {
		self.scroll_offset = self.viewport.reveal(self.len(), self.activated_index, self.scroll_offset);
	}
}

/// Rejects input the matcher should never see.
pub fn validate_query(raw: &str) -> Result<()> {
	match raw.chars().find(|c| c.is_control()) {
		Some(c) => Err(Error::InvalidQuery(format!("control character {:?} in query", c))),
		None => Ok(()),
	}
}
