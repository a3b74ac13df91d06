//! Document-level extraction: HTML version, title, and heading counts.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use scraper::{Html, Node, Selector};
use url::Url;

use crate::models::HtmlVersion;
use crate::parse::links::{extract_links, ExtractedLink};

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("title selector is valid"));

static HEADING_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("h1, h2, h3, h4, h5, h6").expect("heading selector is valid")
});

/// Structural facts extracted from a parsed document.
///
/// Owns all of its data so the (non-`Send`) parsed tree can be dropped as soon
/// as extraction finishes.
#[derive(Debug)]
pub struct DocumentFacts {
    /// HTML version derived from the doctype declaration
    pub html_version: HtmlVersion,
    /// Page title, empty if the document has none
    pub title: String,
    /// Heading counts keyed by level tag ("h1".."h6")
    pub headings: BTreeMap<String, usize>,
    /// Qualifying links in document order
    pub links: Vec<ExtractedLink>,
}

/// Extracts every structural fact the analysis needs from a parsed document.
///
/// Pure function of the tree and the base URL: no side effects, no errors.
/// Malformed documents simply yield empty or default fields.
pub fn extract_document_facts(document: &Html, base: &Url) -> DocumentFacts {
    DocumentFacts {
        html_version: extract_html_version(document),
        title: extract_title(document),
        headings: extract_headings(document),
        links: extract_links(document, base),
    }
}

/// Derives the HTML version from the document-type declaration.
///
/// The doctype name and public identifier are joined and lowercased, then
/// matched: exactly "html" (or containing "html 5") is HTML 5, "html 4.01" is
/// HTML 4.01, "xhtml 1.0" / "xhtml 1.1" are the XHTML flavors. Anything else,
/// or a missing doctype, is [`HtmlVersion::Unknown`].
pub fn extract_html_version(document: &Html) -> HtmlVersion {
    document
        .tree
        .root()
        .children()
        .find_map(|node| match node.value() {
            Node::Doctype(doctype) => {
                let text = format!("{} {}", doctype.name(), doctype.public_id());
                Some(classify_doctype(&text))
            }
            _ => None,
        })
        .unwrap_or(HtmlVersion::Unknown)
}

fn classify_doctype(doctype: &str) -> HtmlVersion {
    let doctype = doctype.trim().to_lowercase();
    if doctype.contains("html 5") || doctype == "html" {
        HtmlVersion::Html5
    } else if doctype.contains("html 4.01") {
        HtmlVersion::Html401
    } else if doctype.contains("xhtml 1.0") {
        HtmlVersion::Xhtml10
    } else if doctype.contains("xhtml 1.1") {
        HtmlVersion::Xhtml11
    } else {
        HtmlVersion::Unknown
    }
}

/// Extracts the page title.
///
/// Returns the first text-node child of the first `<title>` element in
/// document order, or an empty string if the document has no title.
pub fn extract_title(document: &Html) -> String {
    document
        .select(&TITLE_SELECTOR)
        .next()
        .and_then(|element| {
            element
                .children()
                .find_map(|child| child.value().as_text().map(|text| text.to_string()))
        })
        .unwrap_or_default()
}

/// Counts headings per level.
///
/// Only the exact tags h1 through h6 count ("starts with h and the tag name is
/// two characters long"); `hgroup`, `header`, and the like never match.
/// Levels with no occurrences are omitted from the map.
pub fn extract_headings(document: &Html) -> BTreeMap<String, usize> {
    let mut headings = BTreeMap::new();
    for element in document.select(&HEADING_SELECTOR) {
        *headings
            .entry(element.value().name().to_string())
            .or_insert(0) += 1;
    }
    headings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("http://example.com/").unwrap()
    }

    #[test]
    fn test_doctype_html5() {
        let document = Html::parse_document("<!DOCTYPE html><html><body></body></html>");
        assert_eq!(extract_html_version(&document), HtmlVersion::Html5);
    }

    #[test]
    fn test_doctype_html401() {
        let document = Html::parse_document(
            r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01 Transitional//EN" "http://www.w3.org/TR/html4/loose.dtd"><html></html>"#,
        );
        assert_eq!(extract_html_version(&document), HtmlVersion::Html401);
    }

    #[test]
    fn test_doctype_xhtml10() {
        let document = Html::parse_document(
            r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd"><html></html>"#,
        );
        assert_eq!(extract_html_version(&document), HtmlVersion::Xhtml10);
    }

    #[test]
    fn test_doctype_xhtml11() {
        let document = Html::parse_document(
            r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.1//EN" "http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd"><html></html>"#,
        );
        assert_eq!(extract_html_version(&document), HtmlVersion::Xhtml11);
    }

    #[test]
    fn test_missing_doctype_is_unknown() {
        let document = Html::parse_document("<html><body><p>hi</p></body></html>");
        assert_eq!(extract_html_version(&document), HtmlVersion::Unknown);
    }

    #[test]
    fn test_unrecognized_doctype_is_unknown() {
        let document = Html::parse_document(
            r#"<!DOCTYPE math PUBLIC "-//W3C//DTD MathML 2.0//EN" "http://www.w3.org/Math/DTD/mathml2/mathml2.dtd"><html></html>"#,
        );
        assert_eq!(extract_html_version(&document), HtmlVersion::Unknown);
    }

    #[test]
    fn test_title_extraction() {
        let document =
            Html::parse_document("<html><head><title>Test Page</title></head><body></body></html>");
        assert_eq!(extract_title(&document), "Test Page");
    }

    #[test]
    fn test_first_title_wins() {
        let document = Html::parse_document(
            "<html><head><title>First</title><title>Second</title></head></html>",
        );
        assert_eq!(extract_title(&document), "First");
    }

    #[test]
    fn test_missing_title_is_empty() {
        let document = Html::parse_document("<html><head></head><body></body></html>");
        assert_eq!(extract_title(&document), "");
    }

    #[test]
    fn test_heading_counts() {
        let document = Html::parse_document(
            "<html><body><h1>a</h1><h2>b</h2><h2>c</h2><h3>d</h3><h6>e</h6></body></html>",
        );
        let headings = extract_headings(&document);
        assert_eq!(headings.get("h1"), Some(&1));
        assert_eq!(headings.get("h2"), Some(&2));
        assert_eq!(headings.get("h3"), Some(&1));
        assert_eq!(headings.get("h6"), Some(&1));
        assert_eq!(headings.get("h4"), None);
        assert_eq!(headings.values().sum::<usize>(), 5);
    }

    #[test]
    fn test_hgroup_and_header_do_not_count() {
        let document = Html::parse_document(
            "<html><body><header><hgroup><h1>only this</h1></hgroup></header></body></html>",
        );
        let headings = extract_headings(&document);
        assert_eq!(headings.len(), 1);
        assert_eq!(headings.get("h1"), Some(&1));
    }

    #[test]
    fn test_extract_facts_from_empty_document() {
        let document = Html::parse_document("");
        let facts = extract_document_facts(&document, &base());
        assert_eq!(facts.html_version, HtmlVersion::Unknown);
        assert_eq!(facts.title, "");
        assert!(facts.headings.is_empty());
        assert!(facts.links.is_empty());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let html = r#"<!DOCTYPE html><html><head><title>T</title></head>
            <body><h1>H</h1><a href="/x">x</a></body></html>"#;
        let document = Html::parse_document(html);
        let first = extract_document_facts(&document, &base());
        let second = extract_document_facts(&document, &base());
        assert_eq!(first.html_version, second.html_version);
        assert_eq!(first.title, second.title);
        assert_eq!(first.headings, second.headings);
        assert_eq!(first.links.len(), second.links.len());
    }
}
