//! Shared test doubles.

use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use cmdbridge_protocol::Message;
use tracing_subscriber::fmt::MakeWriter;

use crate::error::SenderError;
use crate::registry::Command;
use crate::sender::CommandSender;

/// Live sender that keeps what it was told.
pub struct NativeSender {
	name: String,
	op: Cell<bool>,
	messages: RefCell<Vec<String>>,
	errors: RefCell<Vec<String>>,
}

impl NativeSender {
	pub fn new(name: &str, op: bool) -> Self {
		Self {
			name: name.to_owned(),
			op: Cell::new(op),
			messages: RefCell::default(),
			errors: RefCell::default(),
		}
	}

	pub fn messages(&self) -> Vec<String> {
		self.messages.borrow().clone()
	}

	pub fn errors(&self) -> Vec<String> {
		self.errors.borrow().clone()
	}
}

impl CommandSender for NativeSender {
	fn send_message(&self, message: &Message) {
		self.messages.borrow_mut().push(message.to_translatable().translate().to_owned());
	}

	fn send_error_message(&self, message: &Message) {
		self.errors.borrow_mut().push(message.to_translatable().translate().to_owned());
	}

	fn name(&self) -> &str {
		&self.name
	}

	fn is_op(&self) -> bool {
		self.op.get()
	}

	fn set_op(&self, value: bool) -> Result<(), SenderError> {
		self.op.set(value);
		Ok(())
	}
}

/// `(sender name, arguments)` per call, shared with the test after registration.
pub type CallLog = Rc<RefCell<Vec<(String, Vec<String>)>>>;

/// Command that records every call and returns a fixed result.
pub struct RecordingCommand {
	name: &'static str,
	aliases: &'static [&'static str],
	succeed: bool,
	calls: CallLog,
}

impl RecordingCommand {
	pub fn succeeding(name: &'static str) -> Self {
		Self {
			name,
			aliases: &[],
			succeed: true,
			calls: CallLog::default(),
		}
	}

	pub fn failing(name: &'static str) -> Self {
		Self {
			succeed: false,
			..Self::succeeding(name)
		}
	}

	pub fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}

	pub fn log(&self) -> CallLog {
		Rc::clone(&self.calls)
	}
}

impl Command for RecordingCommand {
	fn name(&self) -> &str {
		self.name
	}

	fn aliases(&self) -> &[&str] {
		self.aliases
	}

	fn execute(&self, sender: &dyn CommandSender, args: &[String]) -> bool {
		self.calls.borrow_mut().push((sender.name().to_owned(), args.to_vec()));
		if !self.succeed {
			sender.send_error_message(&Message::from("commands.test.failed"));
		}
		self.succeed
	}
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.0.lock().unwrap().extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

impl<'a> MakeWriter<'a> for LogBuffer {
	type Writer = LogBuffer;

	fn make_writer(&'a self) -> Self::Writer {
		self.clone()
	}
}

/// Runs `f` with a WARN-level subscriber and returns its formatted output.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
	let buffer = LogBuffer::default();
	let subscriber = tracing_subscriber::fmt()
		.with_writer(buffer.clone())
		.with_ansi(false)
		.with_max_level(tracing::Level::WARN)
		.finish();

	let result = tracing::subscriber::with_default(subscriber, f);
	let logs = String::from_utf8_lossy(&buffer.0.lock().unwrap()).into_owned();
	(result, logs)
}
