//! The element dispatcher
//!
//! [`FormElementHelper`] picks a helper for an element in three steps:
//!
//! 1. the element kind (buttons, captchas, CSRF tokens and collections have
//!    dedicated helpers whatever their `type` attribute says),
//! 2. the `type` attribute,
//! 3. the default helper, `form_input`.
//!
//! The chosen helper is looked up by name through the [`View`], so
//! replacing a registered helper also changes what the dispatcher renders.

use crate::element::{Element, ElementClass};
use crate::error::FormViewResult;
use crate::helper::{FormHelper, INPUT_TYPES};
use crate::view::View;
use std::collections::HashMap;

/// Result of [`FormElementHelper::invoke`]
#[derive(Debug)]
pub enum Invocation<'a> {
	/// No element was given; the dispatcher itself is returned
	Helper(&'a FormElementHelper),
	/// Markup of the given element
	Markup(String),
}

impl Invocation<'_> {
	/// The rendered markup, if an element was given
	pub fn markup(&self) -> Option<&str> {
		match self {
			Self::Markup(markup) => Some(markup),
			Self::Helper(_) => None,
		}
	}

	pub fn into_markup(self) -> Option<String> {
		match self {
			Self::Markup(markup) => Some(markup),
			Self::Helper(_) => None,
		}
	}
}

#[derive(Debug, Clone)]
pub struct FormElementHelper {
	class_map: HashMap<ElementClass, String>,
	type_map: HashMap<String, String>,
	default_helper: String,
}

impl Default for FormElementHelper {
	fn default() -> Self {
		Self::new()
	}
}

impl FormElementHelper {
	/// Create a dispatcher with the standard kind and type maps
	pub fn new() -> Self {
		let class_map = [
			(ElementClass::Button, "form_button"),
			(ElementClass::Captcha, "form_captcha"),
			(ElementClass::Csrf, "form_hidden"),
			(ElementClass::Collection, "form_collection"),
		]
		.into_iter()
		.map(|(class, helper)| (class, helper.to_string()))
		.collect();

		let mut type_map: HashMap<String, String> = [
			("checkbox", "form_checkbox"),
			("multi_checkbox", "form_multi_checkbox"),
			("radio", "form_radio"),
			("select", "form_select"),
			("textarea", "form_textarea"),
		]
		.into_iter()
		.map(|(ty, helper)| (ty.to_string(), helper.to_string()))
		.collect();
		for &input_type in INPUT_TYPES {
			type_map.insert(
				input_type.to_string(),
				format!("form_{}", input_type.replace('-', "_")),
			);
		}

		Self {
			class_map,
			type_map,
			default_helper: "form_input".to_string(),
		}
	}

	/// Route elements whose `type` attribute equals `ty` to `helper`
	pub fn add_type(&mut self, ty: impl Into<String>, helper: impl Into<String>) -> &mut Self {
		self.type_map.insert(ty.into(), helper.into());
		self
	}

	/// Route elements of the given kind to `helper`
	///
	/// Kind routes take precedence over type routes.
	pub fn add_kind(&mut self, class: ElementClass, helper: impl Into<String>) -> &mut Self {
		self.class_map.insert(class, helper.into());
		self
	}

	/// Helper used when neither the kind nor the type matches
	pub fn set_default_helper(&mut self, helper: impl Into<String>) -> &mut Self {
		self.default_helper = helper.into();
		self
	}

	pub fn default_helper(&self) -> &str {
		&self.default_helper
	}

	/// Name of the helper that renders `element`
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_form_view::{Element, FormElementHelper};
	///
	/// let dispatcher = FormElementHelper::new();
	/// assert_eq!(dispatcher.helper_name_for(&Element::button("go")), "form_button");
	/// let date = Element::new("when").with_attribute("type", "datetime-local");
	/// assert_eq!(dispatcher.helper_name_for(&date), "form_datetime_local");
	/// assert_eq!(dispatcher.helper_name_for(&Element::new("plain")), "form_input");
	/// ```
	pub fn helper_name_for(&self, element: &Element) -> &str {
		if let Some(helper) = self.class_map.get(&element.kind().class()) {
			return helper;
		}
		element
			.element_type()
			.and_then(|ty| self.type_map.get(ty))
			.unwrap_or(&self.default_helper)
	}

	/// Render `element`, or return the dispatcher itself when there is none
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_form_view::{Element, FormElementHelper, Invocation, View};
	///
	/// let view = View::new();
	/// let dispatcher = FormElementHelper::new();
	///
	/// assert!(matches!(dispatcher.invoke(None, &view).unwrap(), Invocation::Helper(_)));
	///
	/// let element = Element::new("q").with_attribute("type", "search");
	/// let markup = dispatcher.invoke(Some(&element), &view).unwrap().into_markup();
	/// assert_eq!(markup.as_deref(), Some(r#"<input name="q" type="search">"#));
	/// ```
	pub fn invoke(
		&self,
		element: Option<&Element>,
		view: &View,
	) -> FormViewResult<Invocation<'_>> {
		match element {
			None => Ok(Invocation::Helper(self)),
			Some(element) => self.render(element, view).map(Invocation::Markup),
		}
	}
}

impl FormHelper for FormElementHelper {
	fn render(&self, element: &Element, view: &View) -> FormViewResult<String> {
		let helper = self.helper_name_for(element);
		tracing::debug!(
			element = %element.name(),
			element_type = ?element.element_type(),
			helper = %helper,
			"dispatching form element"
		);
		view.render(helper, element)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::FormViewError;
	use rstest::{fixture, rstest};

	#[fixture]
	fn dispatcher() -> FormElementHelper {
		FormElementHelper::new()
	}

	#[rstest]
	#[case(Element::checkbox("a"), "form_checkbox")]
	#[case(Element::multi_checkbox("a"), "form_multi_checkbox")]
	#[case(Element::radio("a"), "form_radio")]
	#[case(Element::select("a"), "form_select")]
	#[case(Element::button("a"), "form_button")]
	#[case(Element::csrf("a"), "form_hidden")]
	#[case(Element::captcha("a"), "form_captcha")]
	#[case(Element::collection("a"), "form_collection")]
	#[case(Element::new("a").with_attribute("type", "textarea"), "form_textarea")]
	#[case(Element::new("a").with_attribute("type", "email"), "form_email")]
	#[case(Element::new("a").with_attribute("type", "unknown"), "form_input")]
	fn test_helper_resolution(
		dispatcher: FormElementHelper,
		#[case] element: Element,
		#[case] expected: &str,
	) {
		assert_eq!(dispatcher.helper_name_for(&element), expected);
	}

	#[rstest]
	fn test_kind_wins_over_type(dispatcher: FormElementHelper) {
		// Button elements keep their helper even with an input type set
		let element = Element::button("go").with_attribute("type", "submit");

		assert_eq!(dispatcher.helper_name_for(&element), "form_button");
	}

	#[rstest]
	fn test_overrides(mut dispatcher: FormElementHelper) {
		// Arrange
		dispatcher
			.add_type("email", "form_text")
			.add_kind(ElementClass::Button, "form_submit")
			.set_default_helper("form_hidden");

		// Act & Assert
		let email = Element::new("a").with_attribute("type", "email");
		assert_eq!(dispatcher.helper_name_for(&email), "form_text");
		assert_eq!(dispatcher.helper_name_for(&Element::button("a")), "form_submit");
		assert_eq!(dispatcher.helper_name_for(&Element::new("a")), "form_hidden");
	}

	#[rstest]
	fn test_unregistered_helper(mut dispatcher: FormElementHelper) {
		let view = View::new();
		dispatcher.add_type("widget", "form_widget");
		let element = Element::new("a").with_attribute("type", "widget");

		let result = dispatcher.render(&element, &view);

		assert!(matches!(result, Err(FormViewError::HelperNotFound(name)) if name == "form_widget"));
	}

	#[rstest]
	fn test_invoke_without_element_returns_self(dispatcher: FormElementHelper) {
		let view = View::new();

		let invocation = dispatcher.invoke(None, &view).unwrap();

		assert!(matches!(invocation, Invocation::Helper(h) if std::ptr::eq(h, &dispatcher)));
		assert!(invocation.markup().is_none());
	}
}
