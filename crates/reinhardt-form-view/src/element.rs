//! Form element model
//!
//! An [`Element`] is a named field descriptor: attributes, an optional value,
//! optional value options and an optional label. Specialized elements
//! (checkboxes, selects, CSRF tokens, captchas, collections) carry their
//! extra state in [`ElementKind`]. Renderers only ever borrow elements.

pub mod captcha;
pub mod collection;
pub mod csrf;
pub mod value_option;

pub use captcha::{Captcha, CaptchaChallenge, DumbCaptcha};
pub use collection::Collection;
pub use csrf::CsrfValidator;
pub use value_option::ValueOption;

use crate::attributes::{Attributes, scalar_to_string};
use crate::settings::CsrfSettings;
use serde_json::Value;
use std::sync::Arc;

/// Where a label is placed relative to the control it describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelPosition {
	/// Label text before the control
	Prepend,
	/// Label text after the control
	#[default]
	Append,
}

/// Options controlling how an element's label is rendered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelOptions {
	/// Emit the label as raw HTML instead of escaping it
	pub disable_html_escape: bool,
	/// Placement of label text for checkbox and radio groups
	pub label_position: LabelPosition,
}

/// Checkbox specific state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxOptions {
	pub checked_value: String,
	pub unchecked_value: String,
	/// `None` defers to [`FormViewSettings::checkbox_use_hidden_element`](crate::FormViewSettings)
	pub use_hidden_element: Option<bool>,
}

impl Default for CheckboxOptions {
	fn default() -> Self {
		Self {
			checked_value: "1".to_string(),
			unchecked_value: "0".to_string(),
			use_hidden_element: None,
		}
	}
}

/// State shared by radio and multi-checkbox groups
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiCheckboxOptions {
	/// Emit a hidden input so an empty selection is still submitted
	pub use_hidden_element: bool,
	pub unchecked_value: String,
	/// Markup placed between the rendered options
	pub separator: String,
}

/// Select specific state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectOptions {
	/// Label of a leading option with an empty value
	pub empty_option: Option<String>,
}

/// Specialized state of an element
#[derive(Debug, Clone)]
pub enum ElementKind {
	Plain,
	Checkbox(CheckboxOptions),
	Radio(MultiCheckboxOptions),
	MultiCheckbox(MultiCheckboxOptions),
	Select(SelectOptions),
	Button,
	Csrf(Arc<CsrfValidator>),
	Captcha(Option<Arc<dyn Captcha>>),
	Collection(Collection),
}

/// Field-less discriminant of [`ElementKind`], used as a dispatch key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementClass {
	Plain,
	Checkbox,
	Radio,
	MultiCheckbox,
	Select,
	Button,
	Csrf,
	Captcha,
	Collection,
}

impl ElementKind {
	pub fn class(&self) -> ElementClass {
		match self {
			Self::Plain => ElementClass::Plain,
			Self::Checkbox(_) => ElementClass::Checkbox,
			Self::Radio(_) => ElementClass::Radio,
			Self::MultiCheckbox(_) => ElementClass::MultiCheckbox,
			Self::Select(_) => ElementClass::Select,
			Self::Button => ElementClass::Button,
			Self::Csrf(_) => ElementClass::Csrf,
			Self::Captcha(_) => ElementClass::Captcha,
			Self::Collection(_) => ElementClass::Collection,
		}
	}
}

/// Validator contributed by an element to its input specification
#[derive(Debug, Clone)]
pub enum Validator {
	/// Token check against the element's CSRF validator
	Csrf(Arc<CsrfValidator>),
	/// Submitted values must be among the listed option values
	InArray { haystack: Vec<String> },
	/// Answer check delegated to the captcha adapter
	Captcha(Arc<dyn Captcha>),
}

/// What an element contributes to an input filter
#[derive(Debug, Clone)]
pub struct InputSpecification {
	pub name: String,
	pub required: bool,
	pub validators: Vec<Validator>,
}

/// A form element
#[derive(Debug, Clone)]
pub struct Element {
	name: String,
	attributes: Attributes,
	value: Option<Value>,
	label: Option<String>,
	label_attributes: Attributes,
	label_options: LabelOptions,
	value_options: Vec<ValueOption>,
	messages: Vec<String>,
	kind: ElementKind,
}

impl Element {
	/// Create a plain element with the given name
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_form_view::Element;
	///
	/// let element = Element::new("foo").with_attribute("type", "email");
	/// assert_eq!(element.name(), "foo");
	/// assert_eq!(element.element_type(), Some("email"));
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self::with_kind(name, ElementKind::Plain)
	}

	/// Create an element of the given kind; the kind's default `type`
	/// attribute is applied
	pub fn with_kind(name: impl Into<String>, kind: ElementKind) -> Self {
		let mut element = Self {
			name: name.into(),
			attributes: Attributes::new(),
			value: None,
			label: None,
			label_attributes: Attributes::new(),
			label_options: LabelOptions::default(),
			value_options: Vec::new(),
			messages: Vec::new(),
			kind,
		};
		if let Some(default_type) = element.default_type() {
			element.set_attribute("type", default_type);
		}
		element
	}

	/// Single checkbox with checked value `"1"` and unchecked value `"0"`
	pub fn checkbox(name: impl Into<String>) -> Self {
		Self::with_kind(name, ElementKind::Checkbox(CheckboxOptions::default()))
	}

	pub fn radio(name: impl Into<String>) -> Self {
		Self::with_kind(name, ElementKind::Radio(MultiCheckboxOptions::default()))
	}

	pub fn multi_checkbox(name: impl Into<String>) -> Self {
		Self::with_kind(
			name,
			ElementKind::MultiCheckbox(MultiCheckboxOptions::default()),
		)
	}

	pub fn select(name: impl Into<String>) -> Self {
		Self::with_kind(name, ElementKind::Select(SelectOptions::default()))
	}

	pub fn button(name: impl Into<String>) -> Self {
		Self::with_kind(name, ElementKind::Button)
	}

	/// CSRF token element taking its token settings from the view it is
	/// first rendered with
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_form_view::Element;
	///
	/// let element = Element::csrf("security");
	/// let token = element.csrf_validator().unwrap().hash();
	/// assert_eq!(element.resolved_value(), Some(serde_json::json!(token)));
	/// ```
	pub fn csrf(name: impl Into<String>) -> Self {
		let name = name.into();
		let validator = CsrfValidator::inheriting(name.clone());
		Self::with_kind(name, ElementKind::Csrf(Arc::new(validator)))
	}

	/// CSRF token element with its own token settings

	pub fn csrf_with_settings(name: impl Into<String>, settings: &CsrfSettings) -> Self {
		let name = name.into();
		let validator = CsrfValidator::new(name.clone(), settings);
		Self::with_kind(name, ElementKind::Csrf(Arc::new(validator)))
	}

	/// Captcha element; the adapter is attached with [`Element::with_captcha`]
	pub fn captcha(name: impl Into<String>) -> Self {
		Self::with_kind(name, ElementKind::Captcha(None))
	}

	/// Collection of elements rendered inside a fieldset
	pub fn collection(name: impl Into<String>) -> Self {
		Self::with_kind(name, ElementKind::Collection(Collection::default()))
	}

	fn default_type(&self) -> Option<&'static str> {
		match self.kind {
			ElementKind::Plain => None,
			ElementKind::Checkbox(_) => Some("checkbox"),
			ElementKind::Radio(_) => Some("radio"),
			ElementKind::MultiCheckbox(_) => Some("multi_checkbox"),
			ElementKind::Select(_) => Some("select"),
			ElementKind::Button => Some("button"),
			ElementKind::Csrf(_) => Some("hidden"),
			ElementKind::Captcha(_) => Some("captcha"),
			ElementKind::Collection(_) => Some("collection"),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
		self.name = name.into();
		self
	}

	pub fn kind(&self) -> &ElementKind {
		&self.kind
	}

	pub fn kind_mut(&mut self) -> &mut ElementKind {
		&mut self.kind
	}

	/// The declared `type` attribute, if it is a string
	pub fn element_type(&self) -> Option<&str> {
		self.attributes.get("type").and_then(Value::as_str)
	}

	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	pub fn attribute(&self, key: &str) -> Option<&Value> {
		self.attributes.get(&key.to_ascii_lowercase())
	}

	pub fn has_attribute(&self, key: &str) -> bool {
		self.attributes.contains_key(&key.to_ascii_lowercase())
	}

	/// Set an attribute; names are stored lowercased
	///
	/// On radio, checkbox group and select elements an `options` attribute
	/// holding an object (value to label) or an array (value and label
	/// alike) replaces the value options instead of being stored.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_form_view::Element;
	///
	/// let mut element = Element::radio("foo");
	/// element.set_attribute("options", serde_json::json!({ "option": "value" }));
	/// assert!(!element.has_attribute("options"));
	/// assert_eq!(element.value_options()[0].value(), "option");
	/// assert_eq!(element.value_options()[0].label(), "value");
	/// ```
	pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
		let key = key.into().to_ascii_lowercase();
		let value = value.into();

		if key == "options" && self.accepts_value_options() {
			match value_option::from_json(&value) {
				Some(options) => {
					self.value_options = options;
					return self;
				}
				None => {
					tracing::debug!(element = %self.name, "ignoring non-list options attribute");
				}
			}
		}

		self.attributes.insert(key, value);
		self
	}

	pub fn remove_attribute(&mut self, key: &str) -> Option<Value> {
		self.attributes.shift_remove(&key.to_ascii_lowercase())
	}

	fn accepts_value_options(&self) -> bool {
		matches!(
			self.kind,
			ElementKind::Radio(_) | ElementKind::MultiCheckbox(_) | ElementKind::Select(_)
		)
	}

	pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.set_attribute(key, value);
		self
	}

	pub fn value(&self) -> Option<&Value> {
		self.value.as_ref()
	}

	pub fn set_value(&mut self, value: impl Into<Value>) -> &mut Self {
		self.value = Some(value.into());
		self
	}

	pub fn with_value(mut self, value: impl Into<Value>) -> Self {
		self.set_value(value);
		self
	}

	/// The value a renderer should emit
	///
	/// CSRF elements always resolve to their validator's token. Other
	/// elements use the assigned value, falling back to a `value` attribute.
	pub fn resolved_value(&self) -> Option<Value> {
		if let ElementKind::Csrf(validator) = &self.kind {
			return Some(Value::String(validator.hash()));
		}
		self.value
			.clone()
			.or_else(|| self.attributes.get("value").cloned())
			.filter(|v| !v.is_null())
	}

	/// [`Element::resolved_value`] as attribute text
	pub fn resolved_value_string(&self) -> Option<String> {
		self.resolved_value().as_ref().and_then(scalar_to_string)
	}

	pub fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
		self.label = Some(label.into());
		self
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.set_label(label);
		self
	}

	pub fn label_attributes(&self) -> &Attributes {
		&self.label_attributes
	}

	pub fn set_label_attribute(
		&mut self,
		key: impl Into<String>,
		value: impl Into<Value>,
	) -> &mut Self {
		self.label_attributes.insert(key.into(), value.into());
		self
	}

	pub fn label_options(&self) -> &LabelOptions {
		&self.label_options
	}

	pub fn set_label_options(&mut self, options: LabelOptions) -> &mut Self {
		self.label_options = options;
		self
	}

	pub fn value_options(&self) -> &[ValueOption] {
		&self.value_options
	}

	/// Replace the value options
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_form_view::Element;
	///
	/// let mut element = Element::select("foo");
	/// element.set_value_options([("value1", "option"), ("value2", "label")]);
	/// assert_eq!(element.value_options().len(), 2);
	/// assert_eq!(element.value_options()[1].label(), "label");
	/// ```
	pub fn set_value_options<I, O>(&mut self, options: I) -> &mut Self
	where
		I: IntoIterator<Item = O>,
		O: Into<ValueOption>,
	{
		self.value_options = options.into_iter().map(Into::into).collect();
		self
	}

	pub fn with_value_options<I, O>(mut self, options: I) -> Self
	where
		I: IntoIterator<Item = O>,
		O: Into<ValueOption>,
	{
		self.set_value_options(options);
		self
	}

	/// Validation messages shown by the errors helper
	pub fn messages(&self) -> &[String] {
		&self.messages
	}

	pub fn set_messages<I, S>(&mut self, messages: I) -> &mut Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.messages = messages.into_iter().map(Into::into).collect();
		self
	}

	pub fn csrf_validator(&self) -> Option<&Arc<CsrfValidator>> {
		match &self.kind {
			ElementKind::Csrf(validator) => Some(validator),
			_ => None,
		}
	}

	pub fn captcha_adapter(&self) -> Option<&Arc<dyn Captcha>> {
		match &self.kind {
			ElementKind::Captcha(captcha) => captcha.as_ref(),
			_ => None,
		}
	}

	/// Attach a captcha adapter, turning the element into a captcha element
	pub fn with_captcha(mut self, captcha: Arc<dyn Captcha>) -> Self {
		self.kind = ElementKind::Captcha(Some(captcha));
		self
	}

	pub fn collection_state(&self) -> Option<&Collection> {
		match &self.kind {
			ElementKind::Collection(collection) => Some(collection),
			_ => None,
		}
	}

	pub fn collection_state_mut(&mut self) -> Option<&mut Collection> {
		match &mut self.kind {
			ElementKind::Collection(collection) => Some(collection),
			_ => None,
		}
	}

	/// Describe how the submitted value of this element is filtered
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_form_view::{Element, element::Validator};
	///
	/// let element = Element::csrf("token");
	/// let spec = element.input_specification();
	/// assert!(spec.required);
	/// assert!(matches!(spec.validators[0], Validator::Csrf(_)));
	/// ```
	pub fn input_specification(&self) -> InputSpecification {
		let mut validators = Vec::new();
		let mut required = self
			.attributes
			.get("required")
			.is_some_and(crate::attributes::is_truthy);

		match &self.kind {
			ElementKind::Csrf(validator) => {
				required = true;
				validators.push(Validator::Csrf(Arc::clone(validator)));
			}
			ElementKind::Captcha(Some(captcha)) => {
				required = true;
				validators.push(Validator::Captcha(Arc::clone(captcha)));
			}
			ElementKind::Radio(_) | ElementKind::MultiCheckbox(_) | ElementKind::Select(_) => {
				validators.push(Validator::InArray {
					haystack: value_option::flatten_values(&self.value_options),
				});
			}
			ElementKind::Checkbox(options) => {
				validators.push(Validator::InArray {
					haystack: vec![
						options.checked_value.clone(),
						options.unchecked_value.clone(),
					],
				});
			}
			_ => {}
		}

		InputSpecification {
			name: self.name.clone(),
			required,
			validators,
		}
	}
}
