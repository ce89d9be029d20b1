use std::sync::LazyLock;

use markdown::ParseOptions;
use markdown::mdast::Node;
use markdown::to_mdast;
use regex::Regex;

use crate::SearchError;
use crate::SearchResult;

/// Marker line separating hidden setup code from the indexable remainder of
/// a fenced code block.
const CUT_MARKER: &str = "// ---cut---\n";

/// Numeric character reference, e.g. `&#65;`.
static CHAR_REFERENCE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"&#(\d+);").expect("character reference pattern is valid"));

/// Flatten a markdown fragment into plaintext suitable for full-text
/// indexing.
///
/// Structure collapses to newlines (paragraphs keep a blank line, table
/// cells join with spaces), inline markup passes through as its text, link
/// and image targets are dropped, and fenced code keeps only what follows
/// the last `// ---cut---` marker line. HTML entity unescaping (`&lt;`,
/// `&gt;`, and numeric references) runs after structural rendering, and the
/// result is trimmed, so rendering already-plain text returns it unchanged.
pub fn plaintext(markdown: &str) -> SearchResult<String> {
	let tree = to_mdast(markdown, &ParseOptions::gfm())
		.map_err(|e| SearchError::Markdown(e.to_string()))?;

	let mut out = String::new();
	render(&tree, &mut out);

	Ok(unescape_entities(&out).trim().to_string())
}

/// One case per construct, per the rules table in the crate docs.
fn render(node: &Node, out: &mut String) {
	match node {
		Node::Code(code) => {
			let visible = code.value.rsplit(CUT_MARKER).next().unwrap_or(&code.value);
			out.push_str(visible);
		}
		Node::InlineCode(code) => out.push_str(&code.value),
		Node::Text(text) => out.push_str(&text.value),
		Node::Html(_) => out.push('\n'),
		Node::Heading(heading) => {
			render_children(&heading.children, out);
			out.push('\n');
		}
		Node::Paragraph(paragraph) => {
			render_children(&paragraph.children, out);
			out.push_str("\n\n");
		}
		Node::Blockquote(quote) => {
			render_children(&quote.children, out);
			out.push('\n');
		}
		Node::List(list) => {
			render_children(&list.children, out);
			out.push('\n');
		}
		Node::ListItem(item) => {
			render_children(&item.children, out);
			out.push('\n');
		}
		Node::Table(table) => {
			render_children(&table.children, out);
			out.push('\n');
		}
		Node::TableRow(row) => {
			render_children(&row.children, out);
			out.push('\n');
		}
		Node::TableCell(cell) => {
			render_children(&cell.children, out);
			out.push(' ');
		}
		Node::Strong(strong) => render_children(&strong.children, out),
		Node::Emphasis(emphasis) => render_children(&emphasis.children, out),
		Node::Delete(delete) => render_children(&delete.children, out),
		Node::Link(link) => render_children(&link.children, out),
		Node::LinkReference(link) => render_children(&link.children, out),
		Node::Image(image) => out.push_str(&image.alt),
		Node::ImageReference(image) => out.push_str(&image.alt),
		Node::FootnoteDefinition(definition) => {
			render_children(&definition.children, out);
			out.push('\n');
		}
		Node::ThematicBreak(_)
		| Node::Break(_)
		| Node::Definition(_)
		| Node::FootnoteReference(_) => {}
		_ => {
			if let Some(children) = node.children() {
				for child in children {
					render(child, out);
				}
			}
		}
	}
}

fn render_children(children: &[Node], out: &mut String) {
	for child in children {
		render(child, out);
	}
}

/// Unescape the entities the structural pass can leave behind: `&lt;`,
/// `&gt;`, and numeric character references. Invalid scalar values are left
/// verbatim. No other entities are unescaped.
fn unescape_entities(text: &str) -> String {
	let text = text.replace("&lt;", "<").replace("&gt;", ">");

	CHAR_REFERENCE
		.replace_all(&text, |captures: &regex::Captures<'_>| {
			captures[1]
				.parse::<u32>()
				.ok()
				.and_then(char::from_u32)
				.map_or_else(|| captures[0].to_string(), String::from)
		})
		.into_owned()
}
