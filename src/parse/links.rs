//! Link extraction and internal/external classification.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use url::Url;

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("anchor selector is valid"));

/// A link as extracted from the page, before its accessibility is known.
///
/// Keeps both the raw href (which ends up in the public
/// [`LinkRecord`](crate::LinkRecord)) and the resolved absolute URL the
/// accessibility checker probes.
#[derive(Debug, Clone)]
pub struct ExtractedLink {
    /// The href exactly as written in the markup
    pub raw_href: String,
    /// The href resolved against the page's base URL
    pub resolved: Url,
    /// Whether the resolved authority stayed on the analyzed site
    pub is_internal: bool,
}

/// Extracts every qualifying link from the document, in document order.
///
/// An `<a href>` qualifies unless the href is empty, starts with
/// `javascript:`, or starts with `#`. Hrefs that fail to resolve against the
/// base URL are skipped silently. A link is internal when its resolved URL has
/// no host (scheme-relative data like `mailto:` included) or when host and
/// port match the base URL's.
pub fn extract_links(document: &Html, base: &Url) -> Vec<ExtractedLink> {
    let mut links = Vec::new();

    for element in document.select(&ANCHOR_SELECTOR) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        if href.is_empty() || href.starts_with("javascript:") || href.starts_with('#') {
            continue;
        }

        let Ok(resolved) = base.join(href) else {
            continue;
        };

        let is_internal = match resolved.host_str() {
            None => true,
            Some(host) => {
                host == base.host_str().unwrap_or_default()
                    && resolved.port_or_known_default() == base.port_or_known_default()
            }
        };

        links.push(ExtractedLink {
            raw_href: href.to_string(),
            resolved,
            is_internal,
        });
    }

    links
}
