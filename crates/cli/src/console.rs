//! The CLI's own live sender.

use std::cell::{Cell, RefCell};

use cmdbridge::{CommandSender, Message, OutputRecord, SenderError};
use tracing::info;

/// Native sender standing for the operator at the terminal.
///
/// Keeps every message it is sent so `exec` can report them next to the
/// output sink's records.
#[derive(Debug)]
pub struct ConsoleSender {
	name: String,
	op: Cell<bool>,
	lines: RefCell<Vec<OutputRecord>>,
}

impl ConsoleSender {
	pub fn new(name: impl Into<String>, op: bool) -> Self {
		Self {
			name: name.into(),
			op: Cell::new(op),
			lines: RefCell::default(),
		}
	}

	/// Drains what the console has been sent so far.
	pub fn take_lines(&self) -> Vec<OutputRecord> {
		self.lines.take()
	}
}

impl CommandSender for ConsoleSender {
	fn send_message(&self, message: &Message) {
		let (key, params) = message.to_translatable().into_parts();
		self.lines.borrow_mut().push(OutputRecord::Message { key, params });
	}

	fn send_error_message(&self, message: &Message) {
		let (key, params) = message.to_translatable().into_parts();
		self.lines.borrow_mut().push(OutputRecord::Error { key, params });
	}

	fn name(&self) -> &str {
		&self.name
	}

	fn is_op(&self) -> bool {
		self.op.get()
	}

	fn set_op(&self, value: bool) -> Result<(), SenderError> {
		info!(sender = %self.name, op = value, "console operator status changed");
		self.op.set(value);
		Ok(())
	}
}
