//! Form element view helpers for Reinhardt
//!
//! This crate renders form elements as HTML markup:
//! - An element model with attributes, values, value options and labels
//! - Specialized checkbox, radio, select, button, CSRF, captcha and
//!   collection elements
//! - One helper per kind of markup, looked up by name through the view
//! - The `form_element` dispatcher choosing the helper for any element
//! - Doctype-aware void tags and attribute escaping
//!
//! ## Quick Start
//!
//! ```
//! use reinhardt_form_view::{Element, View};
//!
//! let view = View::new();
//!
//! let select = Element::select("color")
//!     .with_value_options([("red", "Red"), ("blue", "Blue")])
//!     .with_value("blue");
//! let html = view.render_element(&select).unwrap();
//! assert!(html.contains(r#"<option value="blue" selected="selected">Blue</option>"#));
//! ```

pub mod attributes;
pub mod doctype;
pub mod element;
pub mod error;
pub mod escape;
pub mod helper;
pub mod plugin;
pub mod settings;
pub mod view;

pub use doctype::Doctype;
pub use element::{
	Captcha, CaptchaChallenge, CheckboxOptions, Collection, CsrfValidator, DumbCaptcha, Element,
	ElementClass, ElementKind, InputSpecification, LabelOptions, LabelPosition,
	MultiCheckboxOptions, SelectOptions, Validator, ValueOption,
};
pub use error::{FormViewError, FormViewResult};
pub use escape::{Escaper, HtmlEscaper};
pub use helper::{
	DumbCaptchaHelper, FormButton, FormCaptcha, FormCheckbox, FormCollection, FormElementErrors,
	FormElementHelper, FormHelper, FormInput, FormLabel, FormMultiCheckbox, FormRow, FormSelect,
	FormTextarea, Invocation,
};
pub use plugin::HelperPluginManager;
pub use settings::{CsrfSettings, FormViewSettings};
pub use view::View;
