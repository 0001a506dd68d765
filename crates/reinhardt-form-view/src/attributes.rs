//! Attribute maps and their HTML serialization

use crate::escape::Escaper;
use indexmap::IndexMap;
use serde_json::Value;

/// Ordered attribute map of an element
///
/// Insertion order is kept so that the generated markup is stable.
pub type Attributes = IndexMap<String, Value>;

/// Attributes valid on every HTML element
pub const GLOBAL_ATTRIBUTES: &[&str] = &[
	"accesskey",
	"class",
	"contenteditable",
	"contextmenu",
	"dir",
	"draggable",
	"dropzone",
	"hidden",
	"id",
	"lang",
	"spellcheck",
	"style",
	"tabindex",
	"title",
	"onblur",
	"onchange",
	"onclick",
	"ondblclick",
	"onfocus",
	"oninput",
	"onkeydown",
	"onkeypress",
	"onkeyup",
	"onmousedown",
	"onmouseup",
	"onselect",
	"onsubmit",
];

/// Attributes rendered as `name="name"` when true and omitted when false
pub const BOOLEAN_ATTRIBUTES: &[&str] = &[
	"autofocus",
	"checked",
	"disabled",
	"formnovalidate",
	"multiple",
	"novalidate",
	"readonly",
	"required",
	"selected",
];

/// Prefixes of attribute families that are always accepted
const PREFIXED_ATTRIBUTES: &[&str] = &["data-", "aria-", "x-"];

/// Check whether `name` may be emitted on a tag accepting `tag_attributes`
///
/// # Examples
///
/// ```
/// use reinhardt_form_view::attributes::is_valid_attribute;
///
/// assert!(is_valid_attribute("class", &[]));
/// assert!(is_valid_attribute("data-role", &[]));
/// assert!(is_valid_attribute("maxlength", &["maxlength"]));
/// assert!(!is_valid_attribute("options", &["maxlength"]));
/// ```
pub fn is_valid_attribute(name: &str, tag_attributes: &[&str]) -> bool {
	let lower = name.to_ascii_lowercase();
	GLOBAL_ATTRIBUTES.contains(&lower.as_str())
		|| tag_attributes.contains(&lower.as_str())
		|| PREFIXED_ATTRIBUTES.iter().any(|p| lower.starts_with(p))
}

/// Convert a scalar JSON value into its attribute text
///
/// Returns `None` for null, arrays and objects, which have no attribute form.
pub fn scalar_to_string(value: &Value) -> Option<String> {
	match value {
		Value::String(s) => Some(s.clone()),
		Value::Number(n) => Some(n.to_string()),
		Value::Bool(b) => Some(b.to_string()),
		Value::Null | Value::Array(_) | Value::Object(_) => None,
	}
}

/// Serialize attributes as ` key="value"` pairs
///
/// Every pair carries its own leading space so the result can be appended
/// directly after a tag name. Attributes not valid for the tag, null values
/// and non-scalar values are skipped; boolean attributes follow the
/// `checked="checked"` convention.
pub fn render_attributes(
	attributes: &Attributes,
	tag_attributes: &[&str],
	escaper: &dyn Escaper,
) -> String {
	let mut html = String::new();

	for (key, value) in attributes {
		if !is_valid_attribute(key, tag_attributes) {
			tracing::trace!(attribute = %key, "dropping attribute not valid for tag");
			continue;
		}

		let key = key.to_ascii_lowercase();
		if BOOLEAN_ATTRIBUTES.contains(&key.as_str()) {
			if is_truthy(value) {
				html.push_str(&format!(r#" {key}="{key}""#));
			}
			continue;
		}

		match scalar_to_string(value) {
			Some(text) => html.push_str(&format!(
				r#" {}="{}""#,
				escaper.escape_html(&key),
				escaper.escape_attribute(&text)
			)),
			None => {
				tracing::trace!(attribute = %key, "dropping attribute without scalar value");
			}
		}
	}

	html
}

/// Interpret a boolean attribute value
///
/// Accepts `true`, non-zero numbers, and strings other than the empty
/// string, `"0"` and `"false"`. A string equal to the attribute name, as in
/// `checked="checked"`, counts as true.
pub fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Bool(b) => *b,
		Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
		Value::String(s) => !(s.is_empty() || s == "0" || s.eq_ignore_ascii_case("false")),
		Value::Null => false,
		Value::Array(items) => !items.is_empty(),
		Value::Object(map) => !map.is_empty(),
	}
}
