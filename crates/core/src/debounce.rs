//! Trailing-edge debouncing driven by caller-supplied instants.

use std::time::{Duration, Instant};

/// Holds the most recent value until `interval` has passed without a newer one.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
	interval: Duration,
	pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
	pub fn new(interval: Duration) -> Self {
		Self { interval, pending: None }
	}

	pub fn interval(&self) -> Duration {
		self.interval
	}

	/// Replaces any pending value and restarts the quiet period at `now`.
	pub fn push(&mut self, value: T, now: Instant) {
		self.pending = Some((value, now + self.interval));
	}

	/// Takes the pending value once its deadline has passed.
	pub fn poll(&mut self, now: Instant) -> Option<T> {
		match &self.pending {
			Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(value, _)| value),
			_ => None,
		}
	}

	/// Takes the pending value regardless of its deadline.
	pub fn flush(&mut self) -> Option<T> {
		self.pending.take().map(|(value, _)| value)
	}

	pub fn cancel(&mut self) {
		self.pending = None;
	}

	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	pub fn deadline(&self) -> Option<Instant> {
		self.pending.as_ref().map(|(_, deadline)| *deadline)
	}
}
