//! `<button>` helper

use crate::attributes::Attributes;
use crate::element::Element;
use crate::error::{FormViewError, FormViewResult};
use crate::helper::{FormHelper, label_markup, require_name};
use crate::view::View;
use serde_json::Value;

const BUTTON_ATTRIBUTES: &[&str] = &[
	"name",
	"autofocus",
	"disabled",
	"form",
	"formaction",
	"formenctype",
	"formmethod",
	"formnovalidate",
	"formtarget",
	"type",
	"value",
];

const BUTTON_TYPES: &[&str] = &["button", "reset", "submit"];

/// Renders a `<button>` whose content is the element label
#[derive(Debug, Clone, Default)]
pub struct FormButton;

impl FormButton {
	pub fn new() -> Self {
		Self
	}

	/// Render the opening `<button …>` tag
	pub fn open_tag(&self, element: &Element, view: &View) -> FormViewResult<String> {
		let name = require_name(element, "FormButton::open_tag")?;

		let button_type = element
			.element_type()
			.filter(|t| BUTTON_TYPES.contains(t))
			.unwrap_or("submit");

		let mut attributes = Attributes::new();
		attributes.insert("name".to_string(), Value::String(name.to_string()));
		attributes.insert("type".to_string(), Value::String(button_type.to_string()));
		for (key, value) in element.attributes() {
			if !matches!(key.as_str(), "name" | "type" | "value") {
				attributes.insert(key.clone(), value.clone());
			}
		}
		if let Some(value) = element.resolved_value() {
			attributes.insert("value".to_string(), value);
		}

		Ok(format!(
			"<button{}>",
			view.attributes(&attributes, BUTTON_ATTRIBUTES)
		))
	}

	pub fn close_tag(&self) -> &'static str {
		"</button>"
	}

	/// Render the button with explicit content instead of the label
	///
	/// `content` is emitted verbatim.
	pub fn render_with_content(
		&self,
		element: &Element,
		content: &str,
		view: &View,
	) -> FormViewResult<String> {
		Ok(format!(
			"{}{}{}",
			self.open_tag(element, view)?,
			content,
			self.close_tag()
		))
	}
}

impl FormHelper for FormButton {
	fn render(&self, element: &Element, view: &View) -> FormViewResult<String> {
		let label = element
			.label()
			.filter(|l| !l.is_empty())
			.ok_or(FormViewError::MissingLabel {
				helper: "FormButton::render",
			})?;
		let content = label_markup(element, label, view);
		self.render_with_content(element, &content, view)
	}
}
