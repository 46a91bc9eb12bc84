#![allow(missing_docs)]

pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use form::{assert_hx_post, assert_required_input, assert_submit_button, must_get_form_by_id};
pub(crate) use html::{all_element_text, assert_valid_html, element_text, parse_html_document};
pub(crate) use http::{assert_hx_redirect, assert_see_other, assert_status_ok};
