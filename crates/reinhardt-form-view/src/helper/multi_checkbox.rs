//! Checkbox and radio groups

use crate::attributes::Attributes;
use crate::element::value_option::selected_values;
use crate::element::{Element, ElementKind, LabelPosition, MultiCheckboxOptions, ValueOption};
use crate::error::FormViewResult;
use crate::helper::input::INPUT_ATTRIBUTES;
use crate::helper::{FormHelper, label_markup, require_name};
use crate::view::View;
use serde_json::Value;

const LABEL_ATTRIBUTES: &[&str] = &["for", "form"];

/// Renders one `<input>` per value option, each wrapped in a `<label>`
///
/// Checkbox groups submit under `name[]`; radio groups under the plain name.
#[derive(Debug, Clone)]
pub struct FormMultiCheckbox {
	input_type: &'static str,
}

impl FormMultiCheckbox {
	/// Checkbox group helper
	pub fn checkbox() -> Self {
		Self {
			input_type: "checkbox",
		}
	}

	/// Radio group helper
	pub fn radio() -> Self {
		Self { input_type: "radio" }
	}

	fn input_name(&self, name: &str) -> String {
		if self.input_type == "checkbox" && !name.ends_with("[]") {
			format!("{name}[]")
		} else {
			name.to_string()
		}
	}

	fn render_options(
		&self,
		element: &Element,
		name: &str,
		options: &[ValueOption],
		view: &View,
	) -> Vec<String> {
		let selected = selected_values(element.resolved_value().as_ref());
		let close = view.void_close();
		let position = element.label_options().label_position;
		let mut rendered = Vec::with_capacity(options.len());

		let leaves = options.iter().flat_map(|option| {
			if option.is_group() {
				option.options().iter().collect::<Vec<_>>()
			} else {
				vec![option]
			}
		});

		for (index, option) in leaves.enumerate() {
			let mut attributes = Attributes::new();
			attributes.insert("name".to_string(), Value::String(name.to_string()));
			attributes.insert(
				"type".to_string(),
				Value::String(self.input_type.to_string()),
			);
			for (key, value) in element.attributes() {
				if matches!(key.as_str(), "name" | "type" | "value" | "checked") {
					continue;
				}
				// Only the first control keeps the element id
				if key == "id" && index > 0 {
					continue;
				}
				attributes.insert(key.clone(), value.clone());
			}
			attributes.insert(
				"value".to_string(),
				Value::String(option.value().to_string()),
			);
			let checked = option.is_selected() || selected.iter().any(|v| v == option.value());
			attributes.insert("checked".to_string(), Value::Bool(checked));
			if option.is_disabled() {
				attributes.insert("disabled".to_string(), Value::Bool(true));
			}
			for (key, value) in option.attributes() {
				attributes.insert(key.clone(), value.clone());
			}

			let input = format!(
				"<input{}{}",
				view.attributes(&attributes, INPUT_ATTRIBUTES),
				close
			);

			let mut label_attributes = element.label_attributes().clone();
			for (key, value) in option.label_attributes() {
				label_attributes.insert(key.clone(), value.clone());
			}
			let label = label_markup(element, option.label(), view);

			let inner = match position {
				LabelPosition::Prepend => format!("{label}{input}"),
				LabelPosition::Append => format!("{input}{label}"),
			};
			rendered.push(format!(
				"<label{}>{}</label>",
				view.attributes(&label_attributes, LABEL_ATTRIBUTES),
				inner
			));
		}

		rendered
	}
}

impl FormHelper for FormMultiCheckbox {
	fn render(&self, element: &Element, view: &View) -> FormViewResult<String> {
		let name = require_name(element, "FormMultiCheckbox::render")?;

		let defaults;
		let group = match element.kind() {
			ElementKind::Radio(options) | ElementKind::MultiCheckbox(options) => options,
			_ => {
				defaults = MultiCheckboxOptions::default();
				&defaults
			}
		};

		let input_name = self.input_name(name);
		let rendered = self.render_options(element, &input_name, element.value_options(), view);

		let mut html = String::new();
		if group.use_hidden_element {
			let mut hidden = Attributes::new();
			hidden.insert("type".to_string(), Value::String("hidden".to_string()));
			hidden.insert("name".to_string(), Value::String(name.to_string()));
			hidden.insert(
				"value".to_string(),
				Value::String(group.unchecked_value.clone()),
			);
			html.push_str(&format!(
				"<input{}{}",
				view.attributes(&hidden, INPUT_ATTRIBUTES),
				view.void_close()
			));
		}
		html.push_str(&rendered.join(&group.separator));

		Ok(html)
	}
}
