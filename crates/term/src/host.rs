use std::cell::RefCell;
use std::io::Write;

use quickbar_core::{Host, HostError};

/// Host that describes actions on a writer instead of performing them.
pub struct PrintHost<W: Write> {
	out: RefCell<W>,
}

impl<W: Write> PrintHost<W> {
	pub fn new(out: W) -> Self {
		Self { out: RefCell::new(out) }
	}

	#[cfg(test)]
	pub fn into_inner(self) -> W {
		self.out.into_inner()
	}

	fn emit(&self, line: std::fmt::Arguments<'_>) -> Result<(), HostError> {
		writeln!(self.out.borrow_mut(), "{line}").map_err(|error| HostError::Unavailable(error.to_string()))
	}
}

impl<W: Write> Host for PrintHost<W> {
	fn call_service(&self, domain: &str, service: &str) -> Result<(), HostError> {
		self.emit(format_args!("call-service {domain}.{service}"))
	}

	fn show_more_info(&self, entity_id: &str) -> Result<(), HostError> {
		self.emit(format_args!("more-info {entity_id}"))
	}

	fn navigate(&self, path: &str) -> Result<(), HostError> {
		self.emit(format_args!("navigate {path}"))
	}
}
