//! Per-invocation output channel.

use serde::{Deserialize, Serialize};

/// Accumulates what one command invocation reports.
///
/// Owned by the caller for the duration of one dispatch.
pub trait OutputSink {
	/// Marks the invocation as successful.
	fn record_success(&mut self);

	/// Adds a normal-channel message.
	fn record_message(&mut self, key: &str, params: Vec<String>);

	/// Adds an error-channel message.
	fn record_error(&mut self, key: &str, params: Vec<String>);
}

/// One entry written to a [`CommandOutput`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutputRecord {
	Success,
	Message {
		key: String,
		#[serde(default, skip_serializing_if = "Vec::is_empty")]
		params: Vec<String>,
	},
	Error {
		key: String,
		#[serde(default, skip_serializing_if = "Vec::is_empty")]
		params: Vec<String>,
	},
}

/// In-memory [`OutputSink`] keeping records in the order they were written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutput {
	records: Vec<OutputRecord>,
}

impl CommandOutput {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn records(&self) -> &[OutputRecord] {
		&self.records
	}

	pub fn into_records(self) -> Vec<OutputRecord> {
		self.records
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	pub fn success_count(&self) -> usize {
		self.records
			.iter()
			.filter(|r| matches!(r, OutputRecord::Success))
			.count()
	}

	pub fn error_count(&self) -> usize {
		self.records
			.iter()
			.filter(|r| matches!(r, OutputRecord::Error { .. }))
			.count()
	}
}

impl OutputSink for CommandOutput {
	fn record_success(&mut self) {
		self.records.push(OutputRecord::Success);
	}

	fn record_message(&mut self, key: &str, params: Vec<String>) {
		self.records.push(OutputRecord::Message {
			key: key.to_owned(),
			params,
		});
	}

	fn record_error(&mut self, key: &str, params: Vec<String>) {
		self.records.push(OutputRecord::Error {
			key: key.to_owned(),
			params,
		});
	}
}
