//! `<textarea>` helper

use crate::attributes::Attributes;
use crate::element::Element;
use crate::error::FormViewResult;
use crate::helper::{FormHelper, require_name};
use crate::view::View;
use serde_json::Value;

const TEXTAREA_ATTRIBUTES: &[&str] = &[
	"autocomplete",
	"autofocus",
	"cols",
	"dirname",
	"disabled",
	"form",
	"maxlength",
	"minlength",
	"name",
	"placeholder",
	"readonly",
	"required",
	"rows",
	"wrap",
];

/// Renders the element value as the escaped content of a `<textarea>`
#[derive(Debug, Clone, Default)]
pub struct FormTextarea;

impl FormTextarea {
	pub fn new() -> Self {
		Self
	}
}

impl FormHelper for FormTextarea {
	fn render(&self, element: &Element, view: &View) -> FormViewResult<String> {
		let name = require_name(element, "FormTextarea::render")?;

		let mut attributes = Attributes::new();
		attributes.insert("name".to_string(), Value::String(name.to_string()));
		for (key, value) in element.attributes() {
			if !matches!(key.as_str(), "name" | "type" | "value") {
				attributes.insert(key.clone(), value.clone());
			}
		}

		let content = element.resolved_value_string().unwrap_or_default();

		Ok(format!(
			"<textarea{}>{}</textarea>",
			view.attributes(&attributes, TEXTAREA_ATTRIBUTES),
			view.escape_html(&content)
		))
	}
}
