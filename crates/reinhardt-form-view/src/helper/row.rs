//! Label, error list and row helpers used when rendering elements inside a
//! collection

use crate::attributes::Attributes;
use crate::element::{Element, ElementKind, LabelPosition};
use crate::error::{FormViewError, FormViewResult};
use crate::helper::{FormHelper, label_markup};
use crate::view::View;

const LABEL_ATTRIBUTES: &[&str] = &["for", "form"];

/// Renders an element's label as `<label …>text</label>`
#[derive(Debug, Clone, Default)]
pub struct FormLabel;

impl FormLabel {
	pub fn new() -> Self {
		Self
	}

	/// Opening tag, pointing `for` at the element id when it has one
	pub fn open_tag(&self, element: &Element, view: &View) -> String {
		let mut attributes = element.label_attributes().clone();
		if let Some(id) = element.attribute("id").filter(|id| !id.is_null())
			&& !attributes.contains_key("for")
		{
			attributes.insert("for".to_string(), id.clone());
		}
		format!("<label{}>", view.attributes(&attributes, LABEL_ATTRIBUTES))
	}

	pub fn close_tag(&self) -> &'static str {
		"</label>"
	}
}

impl FormHelper for FormLabel {
	fn render(&self, element: &Element, view: &View) -> FormViewResult<String> {
		let label = element
			.label()
			.filter(|l| !l.is_empty())
			.ok_or(FormViewError::MissingLabel {
				helper: "FormLabel::render",
			})?;
		Ok(format!(
			"{}{}{}",
			self.open_tag(element, view),
			label_markup(element, label, view),
			self.close_tag()
		))
	}
}

/// Renders an element's messages as an unordered list
///
/// Elements without messages render as an empty string.
#[derive(Debug, Clone, Default)]
pub struct FormElementErrors {
	attributes: Attributes,
}

impl FormElementErrors {
	pub fn new() -> Self {
		Self::default()
	}

	/// Attributes placed on the `<ul>`
	pub fn with_attribute(
		mut self,
		key: impl Into<String>,
		value: impl Into<serde_json::Value>,
	) -> Self {
		self.attributes.insert(key.into(), value.into());
		self
	}
}

impl FormHelper for FormElementErrors {
	fn render(&self, element: &Element, view: &View) -> FormViewResult<String> {
		if element.messages().is_empty() {
			return Ok(String::new());
		}

		let items: String = element
			.messages()
			.iter()
			.map(|message| format!("<li>{}</li>", view.escape_html(message)))
			.collect();

		Ok(format!(
			"<ul{}>{}</ul>",
			view.attributes(&self.attributes, &[]),
			items
		))
	}
}

/// Renders label, element and errors together
///
/// Radio and checkbox groups are wrapped in a `<fieldset>` with the label
/// as `<legend>`. Elements with an `id` get a separate `<label for>`; all
/// others are wrapped by their label. Buttons and hidden inputs carry no
/// separate label.
#[derive(Debug, Clone, Default)]
pub struct FormRow;

impl FormRow {
	pub fn new() -> Self {
		Self
	}
}

impl FormHelper for FormRow {
	fn render(&self, element: &Element, view: &View) -> FormViewResult<String> {
		let element_markup = view.render_element(element)?;
		let errors = view.render("form_element_errors", element)?;

		let label = element.label().filter(|l| !l.is_empty());
		let unlabelled = matches!(element.kind(), ElementKind::Button | ElementKind::Csrf(_))
			|| matches!(element.element_type(), Some("hidden" | "submit" | "reset"));

		let label = match label {
			Some(label) if !unlabelled => label,
			_ => return Ok(format!("{element_markup}{errors}")),
		};

		if matches!(
			element.kind(),
			ElementKind::Radio(_) | ElementKind::MultiCheckbox(_)
		) {
			return Ok(format!(
				"<fieldset><legend>{}</legend>{}</fieldset>{}",
				label_markup(element, label, view),
				element_markup,
				errors
			));
		}

		let label_helper = FormLabel::new();
		if element.has_attribute("id") {
			return Ok(format!(
				"{}{}{}",
				label_helper.render(element, view)?,
				element_markup,
				errors
			));
		}

		let label_text = label_markup(element, label, view);
		let inner = match element.label_options().label_position {
			LabelPosition::Prepend => format!("{label_text}{element_markup}"),
			LabelPosition::Append => format!("{element_markup}{label_text}"),
		};
		Ok(format!(
			"{}{}{}{}",
			label_helper.open_tag(element, view),
			inner,
			label_helper.close_tag(),
			errors
		))
	}
}
