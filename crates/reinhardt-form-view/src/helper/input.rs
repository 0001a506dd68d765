//! `<input>` helpers

use crate::attributes::Attributes;
use crate::element::Element;
use crate::error::{FormViewError, FormViewResult};
use crate::helper::{FormHelper, require_name};
use crate::view::View;
use serde_json::Value;

/// Input types with a dedicated `form_<type>` helper
pub const INPUT_TYPES: &[&str] = &[
	"color",
	"date",
	"datetime",
	"datetime-local",
	"email",
	"file",
	"hidden",
	"image",
	"month",
	"number",
	"password",
	"range",
	"reset",
	"search",
	"submit",
	"tel",
	"text",
	"time",
	"url",
	"week",
];

/// Input types accepted from an element's `type` attribute
const VALID_TYPES: &[&str] = &[
	"button",
	"checkbox",
	"color",
	"date",
	"datetime",
	"datetime-local",
	"email",
	"file",
	"hidden",
	"image",
	"month",
	"number",
	"password",
	"radio",
	"range",
	"reset",
	"search",
	"submit",
	"tel",
	"text",
	"time",
	"url",
	"week",
];

pub(crate) const INPUT_ATTRIBUTES: &[&str] = &[
	"name",
	"accept",
	"alt",
	"autocomplete",
	"autofocus",
	"checked",
	"dirname",
	"disabled",
	"form",
	"formaction",
	"formenctype",
	"formmethod",
	"formnovalidate",
	"formtarget",
	"height",
	"list",
	"max",
	"maxlength",
	"min",
	"minlength",
	"multiple",
	"pattern",
	"placeholder",
	"readonly",
	"required",
	"size",
	"src",
	"step",
	"type",
	"value",
	"width",
];

/// Renders an element as a single `<input>` tag
///
/// [`FormInput::new`] takes the type from the element's `type` attribute,
/// falling back to `text` for types it does not know. [`FormInput::typed`]
/// always emits the given type.
#[derive(Debug, Clone, Default)]
pub struct FormInput {
	input_type: Option<&'static str>,
}

impl FormInput {
	pub fn new() -> Self {
		Self { input_type: None }
	}

	/// Helper forcing `input_type`
	pub fn typed(input_type: &'static str) -> Self {
		Self {
			input_type: Some(input_type),
		}
	}

	fn resolve_type<'a>(&'a self, element: &'a Element) -> &'a str {
		if let Some(input_type) = self.input_type {
			return input_type;
		}
		match element.element_type().map(str::to_ascii_lowercase) {
			Some(declared) => match VALID_TYPES.iter().find(|t| **t == declared) {
				Some(valid) => *valid,
				None => {
					tracing::debug!(element = %element.name(), %declared, "unknown input type, rendering as text");
					"text"
				}
			},
			None => "text",
		}
	}
}

impl FormHelper for FormInput {
	fn render(&self, element: &Element, view: &View) -> FormViewResult<String> {
		let name = require_name(element, "FormInput::render")?;
		let input_type = self.resolve_type(element);

		let mut attributes = Attributes::new();
		let multiple_files = input_type == "file"
			&& element
				.attribute("multiple")
				.is_some_and(crate::attributes::is_truthy);
		if multiple_files {
			attributes.insert("name".to_string(), Value::String(format!("{name}[]")));
		} else {
			attributes.insert("name".to_string(), Value::String(name.to_string()));
		}
		attributes.insert("type".to_string(), Value::String(input_type.to_string()));

		for (key, value) in element.attributes() {
			if !matches!(key.as_str(), "name" | "type" | "value") {
				attributes.insert(key.clone(), value.clone());
			}
		}

		if input_type == "image" && !element.has_attribute("src") {
			return Err(FormViewError::MissingAttribute {
				helper: "FormImage::render",
				attribute: "src",
			});
		}

		let value = match element.csrf_validator() {
			Some(validator) => Some(Value::String(
				validator.hash_with(&view.settings().csrf),
			)),
			None => element.resolved_value(),
		};
		// Secrets and uploads never echo a value back
		if !matches!(input_type, "password" | "file" | "image")
			&& let Some(value) = value
		{
			attributes.insert("value".to_string(), value);
		}

		Ok(format!(
			"<input{}{}",
			view.attributes(&attributes, INPUT_ATTRIBUTES),
			view.void_close()
		))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::doctype::Doctype;
	use crate::settings::{CsrfSettings, FormViewSettings};
	use rstest::{fixture, rstest};

	#[fixture]
	fn view() -> View {
		View::new()
	}

	#[rstest]
	fn test_renders_declared_type(view: View) {
		// Arrange
		let element = Element::new("foo")
			.with_attribute("type", "email")
			.with_value("a@example.com");

		// Act
		let html = FormInput::new().render(&element, &view).unwrap();

		// Assert
		assert_eq!(
			html,
			r#"<input name="foo" type="email" value="a@example.com">"#
		);
	}

	#[rstest]
	fn test_unknown_type_falls_back_to_text(view: View) {
		let element = Element::new("foo").with_attribute("type", "hologram");

		let html = FormInput::new().render(&element, &view).unwrap();

		assert!(html.contains(r#"type="text""#));
	}

	#[rstest]
	fn test_typed_helper_overrides_declared_type(view: View) {
		let element = Element::new("foo").with_attribute("type", "text");

		let html = FormInput::typed("hidden").render(&element, &view).unwrap();

		assert!(html.contains(r#"type="hidden""#));
	}

	#[rstest]
	fn test_missing_name(view: View) {
		let element = Element::new("").with_attribute("type", "text");

		let result = FormInput::new().render(&element, &view);

		assert!(matches!(result, Err(FormViewError::MissingName { .. })));
	}

	#[rstest]
	fn test_image_requires_src(view: View) {
		let element = Element::new("foo").with_attribute("type", "image");

		let result = FormInput::new().render(&element, &view);

		assert!(matches!(
			result,
			Err(FormViewError::MissingAttribute {
				attribute: "src",
				..
			})
		));
	}

	#[rstest]
	fn test_password_value_is_not_rendered(view: View) {
		let element = Element::new("secret")
			.with_attribute("type", "password")
			.with_value("hunter2");

		let html = FormInput::new().render(&element, &view).unwrap();

		assert!(!html.contains("hunter2"));
	}

	#[rstest]
	fn test_multiple_file_input_uses_array_name(view: View) {
		let element = Element::new("uploads")
			.with_attribute("type", "file")
			.with_attribute("multiple", true);

		let html = FormInput::new().render(&element, &view).unwrap();

		assert!(html.contains(r#"name="uploads[]""#));
		assert!(html.contains(r#"multiple="multiple""#));
	}

	#[rstest]
	fn test_xhtml_closing(mut view: View) {
		view.set_doctype(Doctype::Xhtml1Strict);
		let element = Element::new("foo").with_attribute("type", "text");

		let html = FormInput::new().render(&element, &view).unwrap();

		assert!(html.ends_with(" />"));
	}

	#[rstest]
	fn test_mixed_case_attribute_names_are_not_duplicated(view: View) {
		let element = Element::new("foo")
			.with_attribute("Type", "email")
			.with_attribute("NAME", "other")
			.with_attribute("Value", "x");

		let html = FormInput::new().render(&element, &view).unwrap();

		assert_eq!(html, r#"<input name="foo" type="email" value="x">"#);
	}

	#[rstest]
	fn test_csrf_token_uses_view_settings() {
		// Arrange
		let view = View::with_settings(FormViewSettings {
			csrf: CsrfSettings {
				salt: "s".to_string(),
				entropy_bytes: 0,
			},
			..Default::default()
		});

		// Act
		let first = FormInput::typed("hidden")
			.render(&Element::csrf("t"), &view)
			.unwrap();
		let second = FormInput::typed("hidden")
			.render(&Element::csrf("t"), &view)
			.unwrap();

		// Assert
		assert_eq!(first, second);
	}

	#[rstest]
	fn test_escapes_value(view: View) {
		let element = Element::new("foo")
			.with_attribute("type", "text")
			.with_value("\"><script>alert('xss')</script>");

		let html = FormInput::new().render(&element, &view).unwrap();

		assert!(!html.contains("<script>"));
		assert!(html.contains("&lt;script&gt;"));
	}
}
