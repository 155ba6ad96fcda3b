//! Conversion of server-rendered HTML fragments into plain text.
//!
//! WordPress pre-renders titles, excerpts and term names to HTML. List views
//! show them as plain text: the fragment is parsed, block-level elements
//! become line breaks, and only visible text nodes are kept. Entity decoding
//! is done by the parser.

use scraper::{ElementRef, Html, Node};

/// Elements whose opening or closing tag starts a new line.
const BLOCK_TAGS: &[&str] = &[
  "address",
  "article",
  "blockquote",
  "br",
  "dd",
  "div",
  "dl",
  "dt",
  "figcaption",
  "figure",
  "footer",
  "h1",
  "h2",
  "h3",
  "h4",
  "h5",
  "h6",
  "header",
  "hr",
  "li",
  "ol",
  "p",
  "pre",
  "section",
  "table",
  "tr",
  "ul",
];

/// Elements whose content is never visible text.
const HIDDEN_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// Strip markup from an HTML fragment and return its visible text.
///
/// Runs of whitespace collapse to a single space, each line is trimmed, and
/// empty lines are removed.
///
/// # Arguments
/// * `html` - A rendered field such as `title.rendered`.
///
/// # Returns
/// The plain-text content, with one line per block element.
pub fn strip_html(html: &str) -> String {
  let fragment = Html::parse_fragment(html);

  let mut raw = String::with_capacity(html.len());
  collect_text(&fragment.root_element(), &mut raw);

  normalize_whitespace(&raw)
}

/// Append the visible text below `element` to `out`.
fn collect_text(element: &ElementRef, out: &mut String) {
  for child in element.children() {
    match child.value() {
      Node::Text(text) => out.push_str(text),
      Node::Element(elem) => {
        let name = elem.name();
        if HIDDEN_TAGS.contains(&name) {
          continue;
        }

        let block = BLOCK_TAGS.contains(&name);
        if block {
          out.push('\n');
        }
        if let Some(child_element) = ElementRef::wrap(child) {
          collect_text(&child_element, out);
        }
        if block {
          out.push('\n');
        }
      }
      _ => {}
    }
  }
}

fn normalize_whitespace(text: &str) -> String {
  text
    .lines()
    .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
    .filter(|line| !line.is_empty())
    .collect::<Vec<_>>()
    .join("\n")
}
