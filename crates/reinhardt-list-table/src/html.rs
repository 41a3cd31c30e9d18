//! Small HTML helpers used by the renderers

/// Escapes text for use in HTML content or a quoted attribute value
pub fn escape(s: &str) -> String {
	let mut escaped = String::with_capacity(s.len());
	for c in s.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			_ => escaped.push(c),
		}
	}
	escaped
}

/// Renders `<input type="hidden" name="..." value="..." />`
pub(crate) fn hidden_input(name: &str, value: &str) -> String {
	format!(
		r#"<input type="hidden" name="{}" value="{}" />"#,
		escape(name),
		escape(value)
	)
}

/// Inline style applied to hidden columns
pub(crate) const HIDDEN_STYLE: &str = r#" style="display:none;""#;
