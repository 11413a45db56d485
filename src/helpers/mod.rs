use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::string;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HelperError {
	#[error("IO error: {0}")]
	Io(#[from] io::Error),
	#[error("FromUtf8 error: {0}")]
	FromUtf8Error(#[from] string::FromUtf8Error),
	#[error("Other Error {0}")]
	FromString(String),
}

impl HelperError {
	pub fn msg<M: Into<String>>(msg: M) -> Self {
		HelperError::FromString(msg.into())
	}
}

/// Read a whole text file and return the content trimmed of surrounding
/// whitespace.
pub fn read_trimmed(file_path: impl AsRef<Path>) -> Result<String, HelperError> {
	let mut file = File::open(file_path.as_ref())?;
	let mut content = String::new();
	file.read_to_string(&mut content)?;
	Ok(content.trim().to_string())
}

const MAX_READ_BYTES: usize = 32_768;

pub fn read_stdin() -> Result<String, HelperError> {
	let mut stdin = io::stdin();

	let mut buffer = Vec::with_capacity(MAX_READ_BYTES);
	stdin.by_ref().take(MAX_READ_BYTES as u64).read_to_end(&mut buffer)?;

	if buffer.len() == buffer.capacity() {

		let mut extra = [0u8; 1];
		let extra_read = stdin.read(&mut extra)?;

		if extra_read != 0 {
			return Err(HelperError::msg("Input too large"));
		}

	}

	Ok(String::from_utf8(buffer)?)
}

pub struct PromptTemplate {
	template: String,
	replacements: HashMap<String, String>,
}

impl PromptTemplate {
	pub fn new(template: &str) -> Self {
		Self {
			template: template.to_string(),
			replacements: HashMap::new(),
		}
	}

	pub fn add_replacement(&mut self, key: String, value: String) {
		self.replacements.insert(key, value);
	}

	/// Substitute every complete {% key %} tag with its replacement value.
	/// Tags with no registered replacement, unterminated tags and literal
	/// braces are emitted unchanged.
	pub fn render(&self) -> String {
		let mut output = String::with_capacity(self.template.len());
		let mut rest = self.template.as_str();

		while let Some(open) = rest.find("{%") {
			output.push_str(&rest[..open]);
			let tag_start = &rest[open..];
			match tag_start[2..].find("%}") {
				Some(close) => {
					let key = tag_start[2..2 + close].trim();
					match self.replacements.get(key) {
						Some(value) => output.push_str(value),
						None => output.push_str(&tag_start[..close + 4]),
					}
					rest = &tag_start[close + 4..];
				},
				None => {
					// no closing marker, the remainder is plain text
					output.push_str(tag_start);
					rest = "";
				},
			}
		}

		output.push_str(rest);
		output
	}
}
