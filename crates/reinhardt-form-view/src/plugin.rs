//! Registry of named view helpers
//!
//! Helpers look each other up by name through the view, so any of them can
//! be replaced by registering a different implementation under the same
//! name. Names are matched case-insensitively and ignoring `_`, `-` and
//! spaces, which makes `form_element`, `formElement` and `FormElement`
//! the same plugin.

use crate::error::{FormViewError, FormViewResult};
use crate::helper::{
	DumbCaptchaHelper, FormButton, FormCaptcha, FormCheckbox, FormCollection, FormElementErrors,
	FormElementHelper, FormHelper, FormInput, FormLabel, FormMultiCheckbox, FormRow, FormSelect,
	FormTextarea, INPUT_TYPES,
};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct HelperPluginManager {
	helpers: HashMap<String, Arc<dyn FormHelper>>,
}

impl HelperPluginManager {
	/// Create an empty registry
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a registry holding every form helper of this crate
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_form_view::HelperPluginManager;
	///
	/// let plugins = HelperPluginManager::with_defaults();
	/// assert!(plugins.has("form_element"));
	/// assert!(plugins.has("formDatetimeLocal"));
	/// assert!(plugins.has("captcha/dumb"));
	/// ```
	pub fn with_defaults() -> Self {
		let mut plugins = Self::new();

		plugins.register("form_element", FormElementHelper::new());
		plugins.register("form_input", FormInput::new());
		for &input_type in INPUT_TYPES {
			plugins.register(
				&format!("form_{}", input_type.replace('-', "_")),
				FormInput::typed(input_type),
			);
		}
		plugins.register("form_textarea", FormTextarea::new());
		plugins.register("form_button", FormButton::new());
		plugins.register("form_checkbox", FormCheckbox::new());
		plugins.register("form_multi_checkbox", FormMultiCheckbox::checkbox());
		plugins.register("form_radio", FormMultiCheckbox::radio());
		plugins.register("form_select", FormSelect::new());
		plugins.register("form_captcha", FormCaptcha::new());
		plugins.register("captcha/dumb", DumbCaptchaHelper::new());
		plugins.register("form_collection", FormCollection::new());
		plugins.register("form_row", FormRow::new());
		plugins.register("form_label", FormLabel::new());
		plugins.register("form_element_errors", FormElementErrors::new());

		plugins
	}

	/// Register `helper` under `name`, replacing any previous helper
	pub fn register<H>(&mut self, name: &str, helper: H) -> &mut Self
	where
		H: FormHelper + 'static,
	{
		self.register_shared(name, Arc::new(helper))
	}

	pub fn register_shared(&mut self, name: &str, helper: Arc<dyn FormHelper>) -> &mut Self {
		if self.helpers.insert(canonical_name(name), helper).is_some() {
			tracing::debug!(plugin = %name, "replaced view helper");
		}
		self
	}

	pub fn remove(&mut self, name: &str) -> Option<Arc<dyn FormHelper>> {
		self.helpers.remove(&canonical_name(name))
	}

	pub fn has(&self, name: &str) -> bool {
		self.helpers.contains_key(&canonical_name(name))
	}

	/// Look up a helper
	pub fn get(&self, name: &str) -> FormViewResult<Arc<dyn FormHelper>> {
		self.helpers
			.get(&canonical_name(name))
			.cloned()
			.ok_or_else(|| FormViewError::HelperNotFound(name.to_string()))
	}

	pub fn len(&self) -> usize {
		self.helpers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.helpers.is_empty()
	}
}

impl fmt::Debug for HelperPluginManager {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut names: Vec<&String> = self.helpers.keys().collect();
		names.sort();
		f.debug_struct("HelperPluginManager")
			.field("helpers", &names)
			.finish()
	}
}

fn canonical_name(name: &str) -> String {
	name.chars()
		.filter(|c| !matches!(c, '_' | '-' | ' '))
		.flat_map(char::to_lowercase)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("form_element", "formelement")]
	#[case("FormElement", "formelement")]
	#[case("form-datetime-local", "formdatetimelocal")]
	#[case("captcha/dumb", "captcha/dumb")]
	fn test_canonical_name(#[case] name: &str, #[case] expected: &str) {
		assert_eq!(canonical_name(name), expected);
	}

	#[rstest]
	fn test_get_unknown_helper() {
		let plugins = HelperPluginManager::new();

		let err = plugins.get("form_missing").err().unwrap();

		assert!(matches!(err, FormViewError::HelperNotFound(name) if name == "form_missing"));
	}

	#[rstest]
	fn test_remove_helper() {
		let mut plugins = HelperPluginManager::with_defaults();

		assert!(plugins.remove("formSelect").is_some());

		assert!(!plugins.has("form_select"));
		assert!(plugins.has("form_element"));
	}
}
