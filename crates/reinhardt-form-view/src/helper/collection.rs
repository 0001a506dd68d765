//! Fieldset rendering of collection elements

use crate::element::{Collection, Element, ElementKind};
use crate::error::{FormViewError, FormViewResult};
use crate::helper::{FormHelper, label_markup};
use crate::view::View;

const FIELDSET_ATTRIBUTES: &[&str] = &["disabled", "form"];

/// Renders the children of a collection, each as a form row
///
/// Nested collections render recursively. When the collection has a target
/// element and template creation is enabled, the target's markup is added
/// in a `<span data-template="…">` for client-side cloning. Unless wrapping
/// is disabled the output is enclosed in a `<fieldset>` whose `<legend>`
/// holds the label.
#[derive(Debug, Clone, Default)]
pub struct FormCollection;

impl FormCollection {
	pub fn new() -> Self {
		Self
	}

	fn render_child(&self, child: &Element, view: &View) -> FormViewResult<String> {
		match child.kind() {
			ElementKind::Collection(_) => view.render("form_collection", child),
			_ => view.render("form_row", child),
		}
	}

	/// Markup of the target element inside a `data-template` span
	///
	/// The target is renamed `collection[placeholder]`, or just the
	/// placeholder for an unnamed collection, so that client code can
	/// substitute the index of each new entry.
	pub fn render_template(
		&self,
		name: &str,
		collection: &Collection,
		view: &View,
	) -> FormViewResult<String> {
		let Some(target) = collection.target_element() else {
			return Ok(String::new());
		};
		let placeholder = collection.template_placeholder();
		let mut prototype = target.clone();
		prototype.set_name(if name.is_empty() {
			placeholder.to_string()
		} else {
			format!("{name}[{placeholder}]")
		});

		let markup = self.render_child(&prototype, view)?;
		Ok(format!(
			r#"<span data-template="{}"></span>"#,
			view.escaper().escape_attribute(&markup)
		))
	}
}

impl FormHelper for FormCollection {
	fn render(&self, element: &Element, view: &View) -> FormViewResult<String> {
		let collection = element
			.collection_state()
			.ok_or_else(|| FormViewError::InvalidElement {
				helper: "FormCollection::render",
				element: element.name().to_string(),
				reason: "element is not a collection".to_string(),
			})?;

		let mut markup = String::new();
		for child in collection.elements() {
			markup.push_str(&self.render_child(child, view)?);
		}
		if collection.should_create_template() {
			markup.push_str(&self.render_template(element.name(), collection, view)?);
		}

		if !collection.should_wrap() {
			return Ok(markup);
		}

		let legend = match element.label().filter(|l| !l.is_empty()) {
			Some(label) => format!("<legend>{}</legend>", label_markup(element, label, view)),
			None => String::new(),
		};

		Ok(format!(
			"<fieldset{}>{}{}</fieldset>",
			view.attributes(element.attributes(), FIELDSET_ATTRIBUTES),
			legend,
			markup
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
	fn test_legend_and_rows(view: View) {
		// Arrange
		let element = Element::collection("")
			.with_label("foo")
			.with_child(Element::new("a").with_attribute("type", "text"))
			.with_child(Element::new("b").with_attribute("type", "email"));

		// Act
		let html = FormCollection::new().render(&element, &view).unwrap();

		// Assert
		assert_eq!(
			html,
			concat!(
				"<fieldset><legend>foo</legend>",
				r#"<input name="a" type="text">"#,
				r#"<input name="b" type="email">"#,
				"</fieldset>"
			)
		);
	}

	#[rstest]
	fn test_unwrapped_collection(view: View) {
		let mut element = Element::collection("items")
			.with_label("Items")
			.with_child(Element::new("a").with_attribute("type", "text"));
		if let Some(collection) = element.collection_state_mut() {
			collection.set_should_wrap(false);
		}

		let html = FormCollection::new().render(&element, &view).unwrap();

		assert_eq!(html, r#"<input name="a" type="text">"#);
	}

	#[rstest]
	fn test_template_is_escaped(view: View) {
		let mut element = Element::collection("items");
		if let Some(collection) = element.collection_state_mut() {
			collection.set_target_element(Element::new("item").with_attribute("type", "text"));
		}

		let html = FormCollection::new().render(&element, &view).unwrap();

		assert!(html.contains(
			r#"<span data-template="&lt;input name=&quot;items[__index__]&quot; type=&quot;text&quot;&gt;"></span>"#
		));
	}

	#[rstest]
	fn test_template_uses_custom_placeholder(view: View) {
		// Arrange
		let mut element = Element::collection("items");
		if let Some(collection) = element.collection_state_mut() {
			collection
				.set_target_element(Element::new("item").with_attribute("type", "text"))
				.set_template_placeholder("__X__");
		}

		// Act
		let html = FormCollection::new().render(&element, &view).unwrap();

		// Assert
		assert!(html.contains("name=&quot;items[__X__]&quot;"));
		assert!(!html.contains("name=&quot;item&quot;"));
	}

	#[rstest]
	fn test_template_of_unnamed_collection_uses_placeholder(view: View) {
		let mut element = Element::collection("");
		if let Some(collection) = element.collection_state_mut() {
			collection.set_target_element(Element::new("item").with_attribute("type", "text"));
		}

		let html = FormCollection::new().render(&element, &view).unwrap();

		assert!(html.contains("name=&quot;__index__&quot;"));
	}

	#[rstest]
	fn test_nested_collections(view: View) {
		let inner = Element::collection("inner")
			.with_label("Inner")
			.with_child(Element::new("x").with_attribute("type", "text"));
		let outer = Element::collection("outer").with_label("Outer").with_child(inner);

		let html = FormCollection::new().render(&outer, &view).unwrap();

		assert!(html.starts_with("<fieldset><legend>Outer</legend><fieldset><legend>Inner</legend>"));
		assert_eq!(html.matches("</fieldset>").count(), 2);
	}

	#[rstest]
	fn test_rejects_non_collection(view: View) {
		let result = FormCollection::new().render(&Element::new("foo"), &view);

		assert!(matches!(result, Err(FormViewError::InvalidElement { .. })));
	}
}
