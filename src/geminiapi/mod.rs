use serde_json;
use serde_derive::{Deserialize, Serialize};
use url::Url;
use reqwest::header::CONTENT_TYPE;
use std::fs;

#[derive(Serialize, Deserialize, Debug)]
pub struct Part {
	pub text: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Content {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub role: Option<String>,
	pub parts: Vec<Part>,
}

impl Content {
	pub fn user(text: String) -> Self {
		Content { role: Some("user".to_string()), parts: vec![Part { text: text }] }
	}

	/// Concatenation of the part texts, in order.
	pub fn text(&self) -> String {
		let mut text = String::new();
		for part in self.parts.iter() {
			text.push_str(&part.text);
		}
		text
	}
}

#[derive(Serialize, Deserialize, Debug)]
pub struct GenerateRequest {
	pub contents: Vec<Content>,
}

impl GenerateRequest {
	pub fn from_prompt(prompt: &str) -> Self {
		GenerateRequest { contents: vec![Content::user(prompt.to_string())] }
	}
}

pub struct GenerateContext {
	api_key: String,
	post_url: url::Url,
	pub write_req_resp: bool,
}

impl GenerateContext {
	pub fn new(post_url: String, api_key: String) -> Result<Self, Box<dyn std::error::Error>> {
		Ok(GenerateContext {
			api_key: api_key,
			post_url: url::Url::parse(&post_url)?,
			write_req_resp: false,
		})
	}

	pub async fn generate(&self, prompt: &str) -> Result<String, Box<dyn std::error::Error>> {
		let request = GenerateRequest::from_prompt(prompt);
		let serialised = serde_json::to_string_pretty(&request)?;
		if self.write_req_resp {
			fs::write("last_request.json", &serialised)?;
		}
		let url = self.post_url.clone();
		let client = reqwest::Client::new();
		let req = client
			.post(url)
			.header("x-goog-api-key", &self.api_key)
			.header(CONTENT_TYPE, "application/json")
			.body(serialised)
			.send()
			.await?;
		let body = req.text().await?;
		if self.write_req_resp {
			fs::write("last_response.json", &body)?;
		}
		let content = Self::parse_response(&body)?;
		Ok(content.text())
	}

	pub fn parse_response(response: &str) -> Result<Content, Box<dyn std::error::Error>> {
		let mut json: serde_json::Value = serde_json::from_str(&response)?;
		let content = if let Some(content) = json
				.get_mut("candidates").ok_or(Box::new(std::io::Error::new(std::io::ErrorKind::Other, "No candidates in the return object")))?
				.get_mut(0).ok_or(Box::new(std::io::Error::new(std::io::ErrorKind::Other, "No element 0 in the candidates object")))?
				.get_mut("content") {
			content.take()
		} else {
			return Err(Box::new(std::io::Error::new(std::io::ErrorKind::Other, "No content in the candidates element 0")));
		};
		let res: Content = serde_json::from_value(content)?;
		Ok(res)
	}
}
