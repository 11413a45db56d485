#![allow(unused)]

use clap::Parser;
use dotenv::dotenv;
use std::path::{Path,PathBuf};
use std::fs;
use std::env;

mod helpers;
mod geminiapi;

#[cfg(test)]
mod test;

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL_NAME: &str = "gemini-1.5-flash";

const PROMPT_TEMPLATE: &str = r#"You are to generate 2 new math questions based on the style of the provided base questions.

Base Questions:
{% base %}

Curriculum Topics:
{% curriculum %}

Output MUST follow exactly this format:

@title <meaningful title>
@description <brief description>

// For each question:
@question <The question here. Include LaTeX if needed and an embedded image placeholder like ![image](image1.png)>
@instruction <instructions for answering>
@difficulty <easy, moderate, hard>
@Order <question number>
@option <option 1>
@option <option 2>
@@option <correct option>
@option <option 4>
@explanation <explanation text>
@subject <subject from provided curriculum>
@unit <unit from provided curriculum>
@topic <topic from provided curriculum>
@plusmarks 1

IMPORTANT:
- Replace ![image](image1.png) with an IMAGE PROMPT in curly braces like {IMAGE PROMPT: detailed description of the image}.
- The image prompt must describe the diagram in enough detail so it can be generated later with Bing Image Creator or Stable Diffusion.
- Make sure both questions are DIFFERENT in topic but match the style of the base questions.
"#;

#[derive(Parser)]
#[clap(about = "Generate math questions from base questions using the Gemini API")]
struct Cli {
	/// Path to the text file containing base questions (use - to read from stdin)
	#[clap(long)]
	base_file: PathBuf,
	/// Path to the text file containing the curriculum list
	#[clap(long, default_value = "curriculum.txt")]
	curriculum_file: PathBuf,
	#[clap(long)]
	/// replace the built in prompt template with the content of this file
	template_file: Option<PathBuf>,
	#[clap(long, default_value = "false")]
	write_req_resp: bool,
	#[clap(long, default_value = "false")]
	/// just build the prompt and print it, do not perform an API call
	no_network: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Cli::parse();

	dotenv().ok();

	let gemini_api_key = env::var("GEMINI_API_KEY");
	let gemini_api_base = env::var("GEMINI_API_BASE");
	let gemini_model_name = env::var("GEMINI_MODEL_NAME");

	// The credential check happens before any file is touched
	let api_key = match gemini_api_key {
		Ok(key) => key,
		Err(_) => {
			return Err(Into::<Box<dyn std::error::Error>>::into(std::io::Error::new(std::io::ErrorKind::Other, "GEMINI_API_KEY not found, set it in a .env file or as an environment variable")));
		},
	};

	let api_base = gemini_api_base.unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
	let model_name = gemini_model_name.unwrap_or_else(|_| DEFAULT_MODEL_NAME.to_string());
	let post_url = format!("{}/models/{}:generateContent", api_base, model_name);

	let base_questions = read_input(&args.base_file)?;
	let curriculum = read_input(&args.curriculum_file)?;

	let template = match args.template_file {
		Some(path) => fs::read_to_string(path)?,
		None => PROMPT_TEMPLATE.to_string(),
	};

	let prompt = build_prompt(&template, &base_questions, &curriculum);

	if args.no_network {
		println!("{}", prompt);
		return Ok(());
	}

	let mut ctx = geminiapi::GenerateContext::new(post_url, api_key)?;
	ctx.write_req_resp = args.write_req_resp;

	println!("Generating questions...");
	let response = ctx.generate(&prompt).await?;
	println!("{}", response.trim());
	Ok(())
}

fn read_input(path: &Path) -> Result<String, helpers::HelperError> {
	if path == Path::new("-") {
		Ok(helpers::read_stdin()?.trim().to_string())
	} else {
		helpers::read_trimmed(path)
	}
}

fn build_prompt(template: &str, base_text: &str, curriculum_text: &str) -> String {
	let mut processor = helpers::PromptTemplate::new(template);
	processor.add_replacement("base".to_string(), base_text.trim().to_string());
	processor.add_replacement("curriculum".to_string(), curriculum_text.trim().to_string());
	processor.render()
}
