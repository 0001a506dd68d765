//! HTML escaping used by every helper
//!
//! Helpers never escape by hand; they go through the [`Escaper`] held by the
//! [`View`](crate::View) so that a project can swap the escaping strategy in
//! one place.

/// Escapes text content and attribute values.
pub trait Escaper: Send + Sync {
	/// Escape text placed between tags.
	fn escape_html(&self, value: &str) -> String;

	/// Escape a value placed inside a double-quoted attribute.
	fn escape_attribute(&self, value: &str) -> String {
		self.escape_html(value)
	}
}

/// Default escaper replacing the five HTML-significant characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEscaper;

impl Escaper for HtmlEscaper {
	fn escape_html(&self, value: &str) -> String {
		html_escape(value)
	}
}

/// HTML escape utility
pub fn html_escape(s: &str) -> String {
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
