mod common;

use common::INTRO_DOC;
use common::mdsearch_cmd;
use common::write_file;
use mdsearch_core::AnyEmptyResult;
use serde_json::Value;

#[test]
fn extract_outputs_json_blocks() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_file(tmp.path(), "content/docs/01-introduction.md", INTRO_DOC);

	let output = mdsearch_cmd()
		.arg("extract")
		.arg("--path")
		.arg(tmp.path())
		.output()?;
	assert!(output.status.success());

	let blocks: Value = serde_json::from_slice(&output.stdout)?;
	let blocks = blocks.as_array().expect("output is a JSON array");
	assert_eq!(blocks.len(), 2);
	assert_eq!(blocks[0]["href"], "/docs/introduction");
	assert_eq!(blocks[0]["breadcrumbs"], serde_json::json!(["Introduction"]));
	assert_eq!(blocks[0]["rank"], 1.0);
	assert_eq!(blocks[1]["href"], "/docs/introduction#install");
	assert_eq!(blocks[1]["content"], "Run the installer.");

	Ok(())
}

#[test]
fn extract_respects_config_content_dir() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_file(tmp.path(), "mdsearch.toml", "content_dir = \"docs\"\n");
	write_file(tmp.path(), "docs/01-guide.md", INTRO_DOC);

	let output = mdsearch_cmd()
		.arg("extract")
		.arg("--path")
		.arg(tmp.path())
		.output()?;
	assert!(output.status.success());

	let blocks: Value = serde_json::from_slice(&output.stdout)?;
	assert_eq!(blocks[0]["href"], "/docs/guide");

	Ok(())
}

#[test]
fn extract_writes_output_file() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_file(tmp.path(), "content/docs/01-introduction.md", INTRO_DOC);
	let out_path = tmp.path().join("blocks.json");

	mdsearch_cmd()
		.arg("extract")
		.arg("--path")
		.arg(tmp.path())
		.arg("--out")
		.arg(&out_path)
		.assert()
		.success()
		.stdout(predicates::str::contains("2 block(s)"));

	let written = std::fs::read_to_string(&out_path)?;
	let blocks: Value = serde_json::from_str(&written)?;
	assert_eq!(blocks[0]["href"], "/docs/introduction");

	Ok(())
}

#[test]
fn extract_empty_tree_emits_empty_array() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	let output = mdsearch_cmd()
		.arg("extract")
		.arg("--path")
		.arg(tmp.path())
		.output()?;
	assert!(output.status.success());

	let blocks: Value = serde_json::from_slice(&output.stdout)?;
	assert_eq!(blocks, serde_json::json!([]));

	Ok(())
}

#[test]
fn extract_text_format_lists_breadcrumbs() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_file(tmp.path(), "content/docs/01-introduction.md", INTRO_DOC);

	mdsearch_cmd()
		.arg("extract")
		.arg("--format")
		.arg("text")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Introduction > Install"))
		.stdout(predicates::str::contains("/docs/introduction#install"));

	Ok(())
}

#[test]
fn extract_fails_on_invalid_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_file(tmp.path(), "mdsearch.toml", "content_dir = [broken");

	mdsearch_cmd()
		.arg("extract")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.failure()
		.code(2);

	Ok(())
}

#[test]
fn extract_fails_on_document_without_frontmatter() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_file(tmp.path(), "content/docs/01-broken.md", "No metadata at all.\n");

	mdsearch_cmd()
		.arg("extract")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.failure()
		.code(2)
		.stderr(predicates::str::contains("frontmatter"));

	Ok(())
}
