//! Single checkbox helper

use crate::attributes::Attributes;
use crate::element::{CheckboxOptions, Element, ElementKind};
use crate::error::FormViewResult;
use crate::helper::input::INPUT_ATTRIBUTES;
use crate::helper::{FormHelper, require_name};
use crate::view::View;
use serde_json::Value;

/// Renders a checkbox, preceded by a hidden input carrying the unchecked
/// value so that an unchecked box is still submitted
#[derive(Debug, Clone, Default)]
pub struct FormCheckbox;

impl FormCheckbox {
	pub fn new() -> Self {
		Self
	}
}

impl FormHelper for FormCheckbox {
	fn render(&self, element: &Element, view: &View) -> FormViewResult<String> {
		let name = require_name(element, "FormCheckbox::render")?;

		let defaults;
		let options = match element.kind() {
			ElementKind::Checkbox(options) => options,
			_ => {
				defaults = CheckboxOptions::default();
				&defaults
			}
		};

		let checked = element
			.resolved_value_string()
			.is_some_and(|v| v == options.checked_value);

		let mut attributes = Attributes::new();
		attributes.insert("name".to_string(), Value::String(name.to_string()));
		attributes.insert("type".to_string(), Value::String("checkbox".to_string()));
		for (key, value) in element.attributes() {
			if !matches!(key.as_str(), "name" | "type" | "value" | "checked") {
				attributes.insert(key.clone(), value.clone());
			}
		}
		attributes.insert(
			"value".to_string(),
			Value::String(options.checked_value.clone()),
		);
		attributes.insert("checked".to_string(), Value::Bool(checked));

		let close = view.void_close();
		let mut html = String::new();

		let use_hidden = options
			.use_hidden_element
			.unwrap_or(view.settings().checkbox_use_hidden_element);
		if use_hidden {
			let mut hidden = Attributes::new();
			hidden.insert("type".to_string(), Value::String("hidden".to_string()));
			hidden.insert("name".to_string(), Value::String(name.to_string()));
			hidden.insert(
				"value".to_string(),
				Value::String(options.unchecked_value.clone()),
			);
			if let Some(disabled) = element.attribute("disabled") {
				hidden.insert("disabled".to_string(), disabled.clone());
			}
			html.push_str(&format!(
				"<input{}{}",
				view.attributes(&hidden, INPUT_ATTRIBUTES),
				close
			));
		}

		html.push_str(&format!(
			"<input{}{}",
			view.attributes(&attributes, INPUT_ATTRIBUTES),
			close
		));

		Ok(html)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::settings::FormViewSettings;
	use rstest::rstest;

	#[rstest]
	fn test_renders_hidden_and_checkbox() {
		// Arrange
		let view = View::new();
		let element = Element::checkbox("agree").with_value("1");

		// Act
		let html = FormCheckbox::new().render(&element, &view).unwrap();

		// Assert
		assert_eq!(
			html,
			concat!(
				r#"<input type="hidden" name="agree" value="0">"#,
				r#"<input name="agree" type="checkbox" value="1" checked="checked">"#
			)
		);
	}

	#[rstest]
	fn test_unchecked_when_value_differs() {
		let view = View::new();
		let element = Element::checkbox("agree").with_value("0");

		let html = FormCheckbox::new().render(&element, &view).unwrap();

		assert!(!html.contains("checked"));
	}

	#[rstest]
	fn test_settings_disable_hidden_element() {
		let view = View::with_settings(FormViewSettings {
			checkbox_use_hidden_element: false,
			..Default::default()
		});
		let element = Element::checkbox("agree");

		let html = FormCheckbox::new().render(&element, &view).unwrap();

		assert_eq!(html.matches("<input").count(), 1);
	}

	#[rstest]
	fn test_element_choice_overrides_settings() {
		let view = View::with_settings(FormViewSettings {
			checkbox_use_hidden_element: false,
			..Default::default()
		});
		let mut element = Element::checkbox("agree");
		if let ElementKind::Checkbox(options) = element.kind_mut() {
			options.use_hidden_element = Some(true);
			options.checked_value = "yes".to_string();
		}

		let html = FormCheckbox::new().render(&element, &view).unwrap();

		assert_eq!(html.matches("<input").count(), 2);
		assert!(html.contains(r#"value="yes""#));
	}
}
