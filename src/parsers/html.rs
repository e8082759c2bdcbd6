use scraper::{Html, Node, Selector};

/// Elements whose text never reaches the reader
const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Strips markup from an HTML document and returns its visible text.
///
/// Text nodes are joined with single spaces and runs of whitespace are
/// collapsed, so adjacent block elements never glue words together.
pub fn extract_text(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }

    let doc = Html::parse_document(html);

    let text = doc
        .root_element()
        .descendants()
        .filter_map(|node| match node.value() {
            Node::Text(text) if !node.parent().is_some_and(|p| is_hidden(p.value())) => {
                Some(&**text)
            }
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(" ");

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns the document title, if there is a non-empty one
pub fn page_title(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    let selector = Selector::parse("title").ok()?;

    doc.select(&selector)
        .next()
        .map(|title| title.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
}

fn is_hidden(node: &Node) -> bool {
    node.as_element()
        .is_some_and(|e| HIDDEN_ELEMENTS.contains(&e.name()))
}
