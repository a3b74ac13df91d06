//! Analysis result data model.

use std::collections::BTreeMap;

use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// HTML version derived from the document-type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
pub enum HtmlVersion {
    /// `<!DOCTYPE html>`
    #[strum(serialize = "HTML 5")]
    #[serde(rename = "HTML 5")]
    Html5,
    /// HTML 4.01 (any flavor: Strict, Transitional, Frameset)
    #[strum(serialize = "HTML 4.01")]
    #[serde(rename = "HTML 4.01")]
    Html401,
    /// XHTML 1.0 (any flavor)
    #[strum(serialize = "XHTML 1.0")]
    #[serde(rename = "XHTML 1.0")]
    Xhtml10,
    /// XHTML 1.1
    #[strum(serialize = "XHTML 1.1")]
    #[serde(rename = "XHTML 1.1")]
    Xhtml11,
    /// Unrecognized or missing doctype
    #[strum(serialize = "Unknown")]
    Unknown,
}

/// A single link found on the analyzed page.
///
/// Created during extraction, its accessibility filled in exactly once by the
/// checker phase, then frozen as part of the [`AnalysisResult`].
#[derive(Debug, Clone, Serialize)]
pub struct LinkRecord {
    /// The raw href exactly as written in the markup (not normalized)
    pub url: String,
    /// Whether the resolved link host is empty or matches the page host
    pub is_internal: bool,
    /// Whether a HEAD-then-GET probe reached the link successfully
    pub is_accessible: bool,
}

/// The complete analysis of one web page.
///
/// Immutable after construction and owned by the caller that requested it.
/// The per-link records are the single source of truth for every aggregate
/// count; internal/external/accessible totals are derived by filtering and can
/// never drift from the link list.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    /// The analyzed URL as supplied by the caller
    pub url: String,
    /// HTML version from the doctype
    pub html_version: HtmlVersion,
    /// Page title, empty if the document has none
    pub title: String,
    /// Heading counts keyed by level tag ("h1".."h6"); absent levels omitted
    pub headings: BTreeMap<String, usize>,
    /// Every qualifying link in document order
    pub links: Vec<LinkRecord>,
    /// Whether any form on the page classifies as a login form
    pub has_login_form: bool,
}

impl AnalysisResult {
    /// Number of links whose resolved host stayed on the analyzed site.
    pub fn internal_links(&self) -> usize {
        self.links.iter().filter(|l| l.is_internal).count()
    }

    /// Number of links pointing at other hosts.
    pub fn external_links(&self) -> usize {
        self.links.iter().filter(|l| !l.is_internal).count()
    }

    /// Number of links the accessibility probe reached successfully.
    pub fn accessible_links(&self) -> usize {
        self.links.iter().filter(|l| l.is_accessible).count()
    }

    /// Number of links the accessibility probe could not reach.
    pub fn inaccessible_links(&self) -> usize {
        self.links.iter().filter(|l| !l.is_accessible).count()
    }

    /// Total number of headings across all levels.
    pub fn total_headings(&self) -> usize {
        self.headings.values().sum()
    }
}
