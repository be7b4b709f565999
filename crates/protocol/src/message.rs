//! Messages delivered to command senders.

use serde::{Deserialize, Serialize};

/// A translation key plus its ordered substitution parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translatable {
	translate: String,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	with: Vec<String>,
}

impl Translatable {
	pub fn new(translate: impl Into<String>, with: Vec<String>) -> Self {
		Self {
			translate: translate.into(),
			with,
		}
	}

	/// Translation key.
	pub fn translate(&self) -> &str {
		&self.translate
	}

	/// Substitution parameters, in order.
	pub fn with(&self) -> &[String] {
		&self.with
	}

	pub fn into_parts(self) -> (String, Vec<String>) {
		(self.translate, self.with)
	}
}

/// Something a sender can be asked to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Message {
	/// Plain text, displayed as-is.
	Text(String),
	/// Keyed text resolved by the receiving client.
	Translatable(Translatable),
}

impl Message {
	/// Normalizes the message to a key and parameters.
	///
	/// Plain text becomes a key equal to the text with no parameters; clients
	/// print unknown keys verbatim.
	pub fn to_translatable(&self) -> Translatable {
		match self {
			Message::Text(text) => Translatable::new(text.clone(), Vec::new()),
			Message::Translatable(tr) => tr.clone(),
		}
	}
}

impl From<&str> for Message {
	fn from(text: &str) -> Self {
		Message::Text(text.to_owned())
	}
}

impl From<String> for Message {
	fn from(text: String) -> Self {
		Message::Text(text)
	}
}

impl From<Translatable> for Message {
	fn from(tr: Translatable) -> Self {
		Message::Translatable(tr)
	}
}
