//! Captcha helpers

use crate::attributes::Attributes;
use crate::element::Element;
use crate::error::{FormViewError, FormViewResult};
use crate::helper::input::INPUT_ATTRIBUTES;
use crate::helper::{FormHelper, require_name};
use crate::view::View;
use serde_json::Value;

/// Delegates to the helper named by the element's captcha adapter
#[derive(Debug, Clone, Default)]
pub struct FormCaptcha;

impl FormCaptcha {
	pub fn new() -> Self {
		Self
	}
}

impl FormHelper for FormCaptcha {
	fn render(&self, element: &Element, view: &View) -> FormViewResult<String> {
		let captcha = element
			.captcha_adapter()
			.ok_or(FormViewError::MissingCaptcha {
				helper: "FormCaptcha::render",
			})?;

		tracing::debug!(
			element = %element.name(),
			helper = %captcha.helper_name(),
			"rendering captcha"
		);
		view.render(captcha.helper_name(), element)
	}
}

/// Renders the "type this word backwards" challenge
///
/// Output is the label, the reversed word in bold, a hidden input holding
/// the challenge id (`name[id]`) and a text input for the answer
/// (`name[input]`).
#[derive(Debug, Clone, Default)]
pub struct DumbCaptchaHelper;

impl DumbCaptchaHelper {
	pub fn new() -> Self {
		Self
	}
}

impl FormHelper for DumbCaptchaHelper {
	fn render(&self, element: &Element, view: &View) -> FormViewResult<String> {
		let name = require_name(element, "DumbCaptchaHelper::render")?;
		let captcha = element
			.captcha_adapter()
			.ok_or(FormViewError::MissingCaptcha {
				helper: "DumbCaptchaHelper::render",
			})?;
		let challenge = captcha.challenge();
		let close = view.void_close();

		let mut hidden = Attributes::new();
		hidden.insert("name".to_string(), Value::String(format!("{name}[id]")));
		hidden.insert("type".to_string(), Value::String("hidden".to_string()));
		hidden.insert("value".to_string(), Value::String(challenge.id.clone()));

		let mut input = Attributes::new();
		input.insert("name".to_string(), Value::String(format!("{name}[input]")));
		input.insert("type".to_string(), Value::String("text".to_string()));
		for (key, value) in element.attributes() {
			if !matches!(key.as_str(), "name" | "type" | "value") {
				input.insert(key.clone(), value.clone());
			}
		}

		let reversed: String = challenge.word.chars().rev().collect();

		Ok(format!(
			"{}: <b>{}</b><input{}{}<input{}{}",
			view.escape_html(captcha.label()),
			view.escape_html(&reversed),
			view.attributes(&hidden, INPUT_ATTRIBUTES),
			close,
			view.attributes(&input, INPUT_ATTRIBUTES),
			close
		))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::element::{Captcha, DumbCaptcha};
	use rstest::rstest;
	use std::sync::Arc;

	#[rstest]
	fn test_renders_reversed_word() {
		// Arrange
		let view = View::new();
		let captcha = Arc::new(DumbCaptcha::with_word("reinhardt"));
		let id = captcha.challenge().id.clone();
		let element = Element::captcha("foo").with_captcha(captcha);

		// Act
		let html = FormCaptcha::new().render(&element, &view).unwrap();

		// Assert
		assert!(html.starts_with("Please type this word backwards: <b>tdrahnier</b>"));
		assert!(html.contains(&format!(r#"<input name="foo[id]" type="hidden" value="{id}">"#)));
		assert!(html.contains(r#"<input name="foo[input]" type="text">"#));
	}

	#[rstest]
	fn test_missing_adapter() {
		let view = View::new();
		let element = Element::captcha("foo");

		let result = FormCaptcha::new().render(&element, &view);

		assert!(matches!(result, Err(FormViewError::MissingCaptcha { .. })));
	}

	#[rstest]
	fn test_unregistered_adapter_helper() {
		let mut view = View::new();
		view.plugins_mut().remove("captcha/dumb");
		let element = Element::captcha("foo").with_captcha(Arc::new(DumbCaptcha::new()));

		let result = FormCaptcha::new().render(&element, &view);

		assert!(matches!(result, Err(FormViewError::HelperNotFound(_))));
	}
}
