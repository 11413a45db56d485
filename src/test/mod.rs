use super::*;
use std::fs;
use std::io::Read;

#[test]
fn gemini_response_parse_test() {
	let mut file = std::fs::File::open("testdata/sampleresponse.json").unwrap();
	let mut content = String::new();
	file.read_to_string(&mut content).unwrap();
	std::mem::drop(file);
	let generated = geminiapi::GenerateContext::parse_response(&content).unwrap();
	assert!(generated.text().contains("@title"));
	assert!(generated.text().contains("@plusmarks 1"));
}

#[test]
fn parse_response_without_candidates() {
	let result = geminiapi::GenerateContext::parse_response("{\"error\":{\"code\":400,\"status\":\"INVALID_ARGUMENT\"}}");
	assert_eq!(result.unwrap_err().to_string(), "No candidates in the return object");
}

#[test]
fn parse_response_not_json() {
	let result = geminiapi::GenerateContext::parse_response("service unavailable");
	assert!(result.is_err());
}

#[test]
fn build_prompt_contains_inputs() {
	let base = "Q1: What is 2 + 2?\nQ2: Solve x^2 = 9.";
	let curriculum = "Algebra\n- Quadratic equations\nGeometry\n- Circles";
	let prompt = build_prompt(PROMPT_TEMPLATE, base, curriculum);
	assert!(prompt.contains(base));
	assert!(prompt.contains(curriculum));
	assert!(prompt.contains("You are to generate 2 new math questions"));
	assert!(prompt.contains("{IMAGE PROMPT: detailed description of the image}"));
	assert!(!prompt.contains("{%"));
}

#[test]
fn build_prompt_trims_inputs() {
	let template = "[{% base %}][{% curriculum %}]";
	let prompt = build_prompt(template, "\n  base text \n", "\tcurriculum text\n");
	assert_eq!(prompt, "[base text][curriculum text]");
}

#[test]
fn build_prompt_round_trip() {
	let template = "A:{% base %}:B:{% curriculum %}:C";
	let prompt = build_prompt(template, "one", "two");
	assert_eq!(prompt, "A:one:B:two:C");
	let inner = prompt.strip_prefix("A:").unwrap().strip_suffix(":C").unwrap();
	let (base, curriculum) = inner.split_once(":B:").unwrap();
	assert_eq!(base, "one");
	assert_eq!(curriculum, "two");
}

#[test]
fn build_prompt_is_idempotent() {
	let first = build_prompt(PROMPT_TEMPLATE, "base text", "curriculum text");
	let second = build_prompt(PROMPT_TEMPLATE, "base text", "curriculum text");
	assert_eq!(first, second);
}

#[test]
fn build_prompt_from_files() {
	let base = helpers::read_trimmed("testdata/base_questions.txt").unwrap();
	let curriculum = helpers::read_trimmed("testdata/curriculum.txt").unwrap();
	let prompt = build_prompt(PROMPT_TEMPLATE, &base, &curriculum);
	assert!(prompt.contains(&base));
	assert!(prompt.contains(&curriculum));
}

#[test]
fn template_keeps_unknown_tags() {
	let mut processor = helpers::PromptTemplate::new("a {% missing %} b {% base %} c");
	processor.add_replacement("base".to_string(), "B".to_string());
	assert_eq!(processor.render(), "a {% missing %} b B c");
}

#[test]
fn template_keeps_literal_braces() {
	let processor = helpers::PromptTemplate::new("curly {braces} and {IMAGE PROMPT: a right triangle} survive");
	assert_eq!(processor.render(), "curly {braces} and {IMAGE PROMPT: a right triangle} survive");
}

#[test]
fn template_keeps_unterminated_tag() {
	let mut processor = helpers::PromptTemplate::new("before {% base after");
	processor.add_replacement("base".to_string(), "B".to_string());
	assert_eq!(processor.render(), "before {% base after");
}

#[test]
fn read_trimmed_strips_whitespace() {
	let content = helpers::read_trimmed("testdata/base_questions.txt").unwrap();
	assert!(content.starts_with("Q1"));
	assert!(!content.ends_with('\n'));
}

#[test]
fn read_trimmed_missing_file() {
	let result = helpers::read_trimmed("testdata/no_such_file.txt");
	assert!(result.is_err());
}
