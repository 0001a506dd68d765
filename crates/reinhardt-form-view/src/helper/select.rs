//! `<select>` helper

use crate::attributes::Attributes;
use crate::element::value_option::selected_values;
use crate::element::{Element, ElementKind, ValueOption};
use crate::error::FormViewResult;
use crate::helper::{FormHelper, require_name};
use crate::view::View;
use serde_json::Value;

const SELECT_ATTRIBUTES: &[&str] = &[
	"autocomplete",
	"autofocus",
	"disabled",
	"form",
	"multiple",
	"name",
	"required",
	"size",
];

const OPTION_ATTRIBUTES: &[&str] = &["disabled", "selected", "label", "value"];

const OPTGROUP_ATTRIBUTES: &[&str] = &["disabled", "label"];

/// Renders a `<select>` with one `<option>` per value option
///
/// Group options become `<optgroup>` elements. Options whose value equals
/// the element value (or is contained in it, for multiple selects) are
/// marked `selected="selected"`.
#[derive(Debug, Clone, Default)]
pub struct FormSelect;

impl FormSelect {
	pub fn new() -> Self {
		Self
	}

	/// Render the `<option>` and `<optgroup>` list
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_form_view::{FormSelect, ValueOption, View};
	///
	/// let view = View::new();
	/// let options = [ValueOption::new("a", "A"), ValueOption::new("b", "B")];
	/// let html = FormSelect::new().render_options(&options, &["b".to_string()], &view);
	/// assert_eq!(
	///     html,
	///     r#"<option value="a">A</option><option value="b" selected="selected">B</option>"#
	/// );
	/// ```
	pub fn render_options(&self, options: &[ValueOption], selected: &[String], view: &View) -> String {
		let mut html = String::new();

		for option in options {
			if option.is_group() {
				let mut attributes = Attributes::new();
				attributes.insert(
					"label".to_string(),
					Value::String(option.label().to_string()),
				);
				if option.is_disabled() {
					attributes.insert("disabled".to_string(), Value::Bool(true));
				}
				html.push_str(&format!(
					"<optgroup{}>{}</optgroup>",
					view.attributes(&attributes, OPTGROUP_ATTRIBUTES),
					self.render_options(option.options(), selected, view)
				));
				continue;
			}

			let mut attributes = Attributes::new();
			attributes.insert(
				"value".to_string(),
				Value::String(option.value().to_string()),
			);
			let is_selected =
				option.is_selected() || selected.iter().any(|v| v == option.value());
			attributes.insert("selected".to_string(), Value::Bool(is_selected));
			if option.is_disabled() {
				attributes.insert("disabled".to_string(), Value::Bool(true));
			}
			for (key, value) in option.attributes() {
				attributes.insert(key.clone(), value.clone());
			}

			html.push_str(&format!(
				"<option{}>{}</option>",
				view.attributes(&attributes, OPTION_ATTRIBUTES),
				view.escape_html(option.label())
			));
		}

		html
	}
}

impl FormHelper for FormSelect {
	fn render(&self, element: &Element, view: &View) -> FormViewResult<String> {
		let name = require_name(element, "FormSelect::render")?;

		let multiple = element
			.attribute("multiple")
			.is_some_and(crate::attributes::is_truthy);
		let name = if multiple && !name.ends_with("[]") {
			format!("{name}[]")
		} else {
			name.to_string()
		};

		let mut attributes = Attributes::new();
		attributes.insert("name".to_string(), Value::String(name));
		for (key, value) in element.attributes() {
			if !matches!(key.as_str(), "name" | "type" | "value") {
				attributes.insert(key.clone(), value.clone());
			}
		}

		let mut options = Vec::new();
		if let ElementKind::Select(select) = element.kind()
			&& let Some(empty_option) = &select.empty_option
		{
			options.push(ValueOption::new("", empty_option.clone()));
		}
		options.extend(element.value_options().iter().cloned());

		let selected = selected_values(element.resolved_value().as_ref());

		Ok(format!(
			"<select{}>{}</select>",
			view.attributes(&attributes, SELECT_ATTRIBUTES),
			self.render_options(&options, &selected, view)
		))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn view() -> View {
		View::new()
	}

	#[rstest]
	fn test_selects_current_value(view: View) {
		// Arrange
		let element = Element::select("foo")
			.with_value_options([
				("value1", "option"),
				("value2", "label"),
				("value3", "last"),
			])
			.with_value("value2");

		// Act
		let html = FormSelect::new().render(&element, &view).unwrap();

		// Assert
		assert_eq!(
			html,
			concat!(
				r#"<select name="foo">"#,
				r#"<option value="value1">option</option>"#,
				r#"<option value="value2" selected="selected">label</option>"#,
				r#"<option value="value3">last</option>"#,
				"</select>"
			)
		);
	}

	#[rstest]
	fn test_empty_option_and_groups(view: View) {
		let mut element = Element::select("country").with_value_options([ValueOption::group(
			"Europe",
			[ValueOption::new("de", "Germany"), ValueOption::new("fr", "France")],
		)]);
		if let ElementKind::Select(select) = element.kind_mut() {
			select.empty_option = Some("Choose one".to_string());
		}

		let html = FormSelect::new().render(&element, &view).unwrap();

		assert!(html.contains(r#"<option value="">Choose one</option>"#));
		assert!(html.contains(r#"<optgroup label="Europe"><option value="de">Germany</option>"#));
		assert_eq!(html.matches("<option").count(), 3);
	}

	#[rstest]
	fn test_multiple_select(view: View) {
		let element = Element::select("tags")
			.with_attribute("multiple", true)
			.with_value_options([("a", "A"), ("b", "B"), ("c", "C")])
			.with_value(serde_json::json!(["a", "b"]));

		let html = FormSelect::new().render(&element, &view).unwrap();

		assert!(html.starts_with(r#"<select name="tags[]" multiple="multiple">"#));
		assert_eq!(html.matches(r#"selected="selected""#).count(), 2);
	}

	#[rstest]
	fn test_escapes_option_labels(view: View) {
		let element = Element::select("foo").with_value_options([("x", "<script>")]);

		let html = FormSelect::new().render(&element, &view).unwrap();

		assert!(html.contains(">&lt;script&gt;</option>"));
	}
}
