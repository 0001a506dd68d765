//! Form view helpers
//!
//! Each helper turns one kind of [`Element`] into markup. The
//! [`FormElementHelper`] dispatcher picks the right helper for an element and
//! is what templates normally call.

pub mod button;
pub mod captcha;
pub mod checkbox;
pub mod collection;
pub mod form_element;
pub mod input;
pub mod multi_checkbox;
pub mod row;
pub mod select;
pub mod textarea;

pub use button::FormButton;
pub use captcha::{DumbCaptchaHelper, FormCaptcha};
pub use checkbox::FormCheckbox;
pub use collection::FormCollection;
pub use form_element::{FormElementHelper, Invocation};
pub use input::{FormInput, INPUT_TYPES};
pub use multi_checkbox::FormMultiCheckbox;
pub use row::{FormElementErrors, FormLabel, FormRow};
pub use select::FormSelect;
pub use textarea::FormTextarea;

use crate::element::Element;
use crate::error::{FormViewError, FormViewResult};
use crate::view::View;

/// A view helper rendering elements as markup
pub trait FormHelper: Send + Sync {
	/// Render `element`
	fn render(&self, element: &Element, view: &View) -> FormViewResult<String>;
}

/// Name of the element, or [`FormViewError::MissingName`] when it is empty
pub(crate) fn require_name<'a>(
	element: &'a Element,
	helper: &'static str,
) -> FormViewResult<&'a str> {
	match element.name() {
		"" => Err(FormViewError::MissingName { helper }),
		name => Ok(name),
	}
}

/// Label text of `element` escaped unless its label options disable escaping
pub(crate) fn label_markup(element: &Element, label: &str, view: &View) -> String {
	if element.label_options().disable_html_escape {
		label.to_string()
	} else {
		view.escape_html(label)
	}
}
