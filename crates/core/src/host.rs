//! The boundary between the quick bar and the application embedding it.

use crate::error::HostError;
use crate::item::ItemAction;

/// Carries out item actions on behalf of the quick bar.
pub trait Host {
	fn call_service(&self, domain: &str, service: &str) -> Result<(), HostError>;

	/// Opens the detail view for an entity.
	fn show_more_info(&self, entity_id: &str) -> Result<(), HostError>;

	fn navigate(&self, path: &str) -> Result<(), HostError>;
}

impl ItemAction {
	/// Hands this action to `host`.
	pub fn dispatch(&self, host: &dyn Host) -> Result<(), HostError> {
		match self {
			Self::CallService { domain, service } => host.call_service(domain, service),
			Self::MoreInfo { entity_id } => host.show_more_info(entity_id),
			Self::Navigate { path } => host.navigate(path),
		}
	}
}

#[cfg(any(test, feature = "test-support"))]
pub use recording::RecordingHost;

#[cfg(any(test, feature = "test-support"))]
mod recording {
	use std::cell::RefCell;

	use super::Host;
	use crate::error::HostError;
	use crate::item::ItemAction;

	/// Host double that records every action and optionally fails them all.
	#[derive(Debug, Default)]
	pub struct RecordingHost {
		log: RefCell<Vec<ItemAction>>,
		failure: Option<HostError>,
	}

	impl RecordingHost {
		pub fn new() -> Self {
			Self::default()
		}

		/// A host that rejects every action with `error` (still recording it).
		pub fn failing(error: HostError) -> Self {
			Self {
				log: RefCell::default(),
				failure: Some(error),
			}
		}

		pub fn actions(&self) -> Vec<ItemAction> {
			self.log.borrow().clone()
		}

		fn record(&self, action: ItemAction) -> Result<(), HostError> {
			self.log.borrow_mut().push(action);
			match &self.failure {
				Some(error) => Err(error.clone()),
				None => Ok(()),
			}
		}
	}

	impl Host for RecordingHost {
		fn call_service(&self, domain: &str, service: &str) -> Result<(), HostError> {
			self.record(ItemAction::call_service(domain, service))
		}

		fn show_more_info(&self, entity_id: &str) -> Result<(), HostError> {
			self.record(ItemAction::more_info(entity_id))
		}

		fn navigate(&self, path: &str) -> Result<(), HostError> {
			self.record(ItemAction::navigate(path))
		}
	}
}
