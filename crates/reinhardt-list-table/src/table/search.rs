//! Search form rendering

use crate::hooks::TableNavEvent;
use crate::html::{escape, hidden_input};

/// Renders the table's search form
///
/// Nothing is written when there is no active search and the table has no
/// rows. Otherwise every query parameter except the search term is carried
/// over as a hidden field, so submitting the form keeps the current screen,
/// sort and filters.
pub fn render_search_form(event: &TableNavEvent<'_>, out: &mut String) {
	if !should_render(event) {
		return;
	}

	out.push_str(r#"<form method="get">"#);
	for (key, value) in event.context.query_params() {
		if key == event.search_param {
			continue;
		}
		out.push_str(&hidden_input(key, value));
	}
	render_search_box(event, out);
	out.push_str("</form>");
}

/// Renders the search input and submit button
///
/// Follows the same visibility rule as [`render_search_form`].
pub fn render_search_box(event: &TableNavEvent<'_>, out: &mut String) {
	if !should_render(event) {
		return;
	}

	let input_id = escape(&format!("{}-search-input", event.search_input_id));
	let text = escape(event.search_button_text);
	let term = escape(event.context.search_term(event.search_param).unwrap_or(""));

	out.push_str(r#"<p class="search-box">"#);
	out.push_str(&format!(
		r#"<label class="screen-reader-text" for="{input_id}">{text}:</label>"#
	));
	out.push_str(&format!(
		r#"<input type="search" id="{input_id}" name="{}" value="{term}" />"#,
		escape(event.search_param)
	));
	out.push_str(&format!(
		r#"<input type="submit" id="search-submit" class="button" value="{text}" />"#
	));
	out.push_str("</p>");
}

fn should_render(event: &TableNavEvent<'_>) -> bool {
	event.has_items || event.context.search_term(event.search_param).is_some()
}
