//! Login-form classification.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

static FORM_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("form").expect("form selector is valid"));

static INPUT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("input").expect("input selector is valid"));

static SUBMIT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"input[type="submit"], button[type="submit"]"#)
        .expect("submit selector is valid")
});

/// Facts derived from one `<form>` subtree.
///
/// Transient: exists only while the page's forms are being classified and is
/// discarded once `has_login_form` is decided.
#[derive(Debug, Default)]
pub struct FormDescriptor {
    /// Any `<input type="password">` in the subtree
    pub has_password_input: bool,
    /// Any `<input type="text">` or `<input type="email">` in the subtree
    pub has_username_like_input: bool,
    /// Any `<input type="submit">` or `<button type="submit">` in the subtree
    pub has_submit_control: bool,
    /// The form's action attribute contains "login" or "signin"
    pub action_suggests_login: bool,
}

impl FormDescriptor {
    /// Derives the descriptor for a form subtree.
    pub fn describe(form: &ElementRef) -> Self {
        let action_suggests_login = form
            .value()
            .attr("action")
            .is_some_and(|action| action.contains("login") || action.contains("signin"));

        let mut descriptor = FormDescriptor {
            action_suggests_login,
            ..Default::default()
        };

        for input in form.select(&INPUT_SELECTOR) {
            match input.value().attr("type") {
                Some("password") => descriptor.has_password_input = true,
                Some("text") | Some("email") => descriptor.has_username_like_input = true,
                _ => {}
            }
        }
        descriptor.has_submit_control = form.select(&SUBMIT_SELECTOR).next().is_some();

        descriptor
    }

    /// Whether this form classifies as a login form.
    ///
    /// Permissive policy: the action URL hints at authentication, or any
    /// password input exists anywhere in the form. Username and submit
    /// presence are recorded but do not gate the decision.
    pub fn is_login_form(&self) -> bool {
        self.action_suggests_login || self.has_password_input
    }
}

/// Whether any form on the page classifies as a login form.
///
/// Forms are evaluated in document order; the first match short-circuits the
/// rest.
pub fn page_has_login_form(document: &Html) -> bool {
    document
        .select(&FORM_SELECTOR)
        .any(|form| FormDescriptor::describe(&form).is_login_form())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_form_descriptor(html: &str) -> FormDescriptor {
        let document = Html::parse_document(html);
        let form = document
            .select(&FORM_SELECTOR)
            .next()
            .expect("fixture has a form");
        FormDescriptor::describe(&form)
    }

    fn has_login_form(html: &str) -> bool {
        page_has_login_form(&Html::parse_document(html))
    }

    #[test]
    fn test_action_login_classifies() {
        assert!(has_login_form(
            r#"<form action="/login"><input type="text"></form>"#
        ));
    }

    #[test]
    fn test_action_signin_classifies() {
        assert!(has_login_form(
            r#"<form action="/user/signin-step2"><input type="text"></form>"#
        ));
    }

    #[test]
    fn test_action_match_is_case_sensitive() {
        assert!(!has_login_form(
            r#"<form action="/LOGIN"><input type="text"></form>"#
        ));
    }

    #[test]
    fn test_password_input_classifies_without_action_hint() {
        assert!(has_login_form(
            r#"<form action="/session"><input type="password" name="pw"></form>"#
        ));
    }

    #[test]
    fn test_nested_password_input_found() {
        assert!(has_login_form(
            r#"<form action="/auth"><div><fieldset>
                <input type="password"></fieldset></div></form>"#
        ));
    }

    #[test]
    fn test_search_form_is_not_login() {
        assert!(!has_login_form(
            r#"<form action="/search"><input type="text" name="q">
               <input type="submit" value="Go"></form>"#
        ));
    }

    #[test]
    fn test_page_without_forms() {
        assert!(!has_login_form("<body><p>no forms here</p></body>"));
    }

    #[test]
    fn test_any_form_on_page_suffices() {
        assert!(has_login_form(
            r#"<form action="/search"><input type="text"></form>
               <form action="/newsletter"><input type="email"></form>
               <form action="/login"><input type="password"></form>"#
        ));
    }

    #[test]
    fn test_descriptor_records_all_facts() {
        let descriptor = first_form_descriptor(
            r#"<form action="/login">
                <input type="text" name="username">
                <input type="password" name="password">
                <button type="submit">Login</button>
            </form>"#,
        );
        assert!(descriptor.has_password_input);
        assert!(descriptor.has_username_like_input);
        assert!(descriptor.has_submit_control);
        assert!(descriptor.action_suggests_login);
        assert!(descriptor.is_login_form());
    }

    #[test]
    fn test_descriptor_detects_input_submit() {
        let descriptor = first_form_descriptor(
            r#"<form action="/x"><input type="email"><input type="submit"></form>"#,
        );
        assert!(!descriptor.has_password_input);
        assert!(descriptor.has_username_like_input);
        assert!(descriptor.has_submit_control);
        assert!(!descriptor.is_login_form());
    }
}
