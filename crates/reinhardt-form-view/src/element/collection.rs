//! Collections of elements rendered as a group

use crate::element::Element;

pub const DEFAULT_TEMPLATE_PLACEHOLDER: &str = "__index__";

/// State of a collection element
#[derive(Debug, Clone)]
pub struct Collection {
	elements: Vec<Element>,
	target_element: Option<Box<Element>>,
	should_create_template: bool,
	template_placeholder: String,
	should_wrap: bool,
}

impl Default for Collection {
	fn default() -> Self {
		Self {
			elements: Vec::new(),
			target_element: None,
			should_create_template: false,
			template_placeholder: DEFAULT_TEMPLATE_PLACEHOLDER.to_string(),
			should_wrap: true,
		}
	}
}

impl Collection {
	pub fn elements(&self) -> &[Element] {
		&self.elements
	}

	pub fn add(&mut self, element: Element) -> &mut Self {
		self.elements.push(element);
		self
	}

	/// Prototype element used to render the client-side template
	pub fn target_element(&self) -> Option<&Element> {
		self.target_element.as_deref()
	}

	/// Set the prototype and enable template rendering
	pub fn set_target_element(&mut self, element: Element) -> &mut Self {
		self.target_element = Some(Box::new(element));
		self.should_create_template = true;
		self
	}

	pub fn should_create_template(&self) -> bool {
		self.should_create_template
	}

	pub fn set_should_create_template(&mut self, create: bool) -> &mut Self {
		self.should_create_template = create;
		self
	}

	pub fn template_placeholder(&self) -> &str {
		&self.template_placeholder
	}

	pub fn set_template_placeholder(&mut self, placeholder: impl Into<String>) -> &mut Self {
		self.template_placeholder = placeholder.into();
		self
	}

	/// Whether the rendered rows are wrapped in a `<fieldset>`
	pub fn should_wrap(&self) -> bool {
		self.should_wrap
	}

	pub fn set_should_wrap(&mut self, wrap: bool) -> &mut Self {
		self.should_wrap = wrap;
		self
	}
}

impl Element {
	/// Add a child to a collection element
	///
	/// Non-collection elements ignore the call.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_form_view::Element;
	///
	/// let collection = Element::collection("emails")
	///     .with_child(Element::new("emails[0]").with_attribute("type", "email"));
	/// assert_eq!(collection.collection_state().unwrap().elements().len(), 1);
	/// ```
	pub fn with_child(mut self, child: Element) -> Self {
		match self.collection_state_mut() {
			Some(collection) => {
				collection.add(child);
			}
			None => {
				tracing::warn!(element = %self.name(), "ignoring child added to a non-collection element");
			}
		}
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_target_element_enables_template() {
		// Arrange
		let mut collection = Collection::default();
		assert!(!collection.should_create_template());

		// Act
		collection.set_target_element(Element::new("item"));

		// Assert
		assert!(collection.should_create_template());
		assert_eq!(collection.target_element().unwrap().name(), "item");
	}

	#[rstest]
	fn test_with_child_on_plain_element_is_ignored() {
		let element = Element::new("foo").with_child(Element::new("bar"));
		assert!(element.collection_state().is_none());
	}
}
