//! HTML extraction and classification.
//!
//! Everything in this module is a pure, synchronous function of a parsed
//! `scraper::Html` tree:
//! - [`extract_document_facts`]: HTML version, title, heading counts, links
//! - [`page_has_login_form`]: login-form classification over every form
//!
//! The parsed tree is not `Send`, so callers run these in one scope and drop
//! the tree before suspending.

mod document;
mod forms;
mod links;

pub use document::extract_document_facts;
pub use forms::page_has_login_form;
