//! Assertions about the forms rendered on the tabs.

use scraper::{ElementRef, Html, Selector};

/// Get the form with the element ID `id`.
#[track_caller]
pub(crate) fn must_get_form_by_id<'a>(html: &'a Html, id: &str) -> ElementRef<'a> {
    html.select(&Selector::parse(&format!("form#{id}")).unwrap())
        .next()
        .unwrap_or_else(|| panic!("no form with ID {id}"))
}

/// Assert that submitting `form` sends an htmx POST to `endpoint`.
#[track_caller]
pub(crate) fn assert_hx_post(form: &ElementRef<'_>, endpoint: &str) {
    assert_eq!(
        form.value().attr("hx-post"),
        Some(endpoint),
        "want form to post to {endpoint}"
    );
}

/// Assert that `form` has a required input called `name` of type `input_type`.
#[track_caller]
pub(crate) fn assert_required_input(form: &ElementRef<'_>, name: &str, input_type: &str) {
    let input = form
        .select(&Selector::parse(&format!("input[name=\"{name}\"]")).unwrap())
        .next()
        .unwrap_or_else(|| panic!("no input called {name}"));

    assert_eq!(input.value().attr("type"), Some(input_type), "input {name}");
    assert!(
        input.value().attr("required").is_some(),
        "want input {name} to be required"
    );
}

/// Assert that `form` is submitted by a button labelled `label`.
#[track_caller]
pub(crate) fn assert_submit_button(form: &ElementRef<'_>, label: &str) {
    let button = form
        .select(&Selector::parse("button[type=\"submit\"]").unwrap())
        .next()
        .expect("no submit button");

    assert_eq!(button.text().collect::<String>().trim(), label);
}
