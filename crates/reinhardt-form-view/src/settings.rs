//! Form view settings
//!
//! Settings are plain serde structures so they can live in the project's
//! TOML configuration next to the other reinhardt settings:
//!
//! ```toml
//! doctype = "xhtml1_strict"
//! checkbox_use_hidden_element = false
//!
//! [csrf]
//! salt = "change-me"
//! ```

use crate::doctype::Doctype;
use crate::error::FormViewResult;
use serde::{Deserialize, Serialize};

/// Settings consumed by the [`View`](crate::View)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormViewSettings {
	/// Document type markup is generated for
	pub doctype: Doctype,
	/// Whether checkbox elements that leave the choice unset emit a hidden
	/// "unchecked" input
	pub checkbox_use_hidden_element: bool,
	/// CSRF token generation settings, see [`Element::csrf_with_settings`](crate::Element::csrf_with_settings)
	pub csrf: CsrfSettings,
}

impl Default for FormViewSettings {
	fn default() -> Self {
		Self {
			doctype: Doctype::default(),
			checkbox_use_hidden_element: true,
			csrf: CsrfSettings::default(),
		}
	}
}

impl FormViewSettings {
	/// Parse settings from a TOML document, falling back to defaults for
	/// missing keys
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_form_view::{Doctype, FormViewSettings};
	///
	/// let settings = FormViewSettings::from_toml_str("doctype = \"xhtml5\"").unwrap();
	/// assert_eq!(settings.doctype, Doctype::Xhtml5);
	/// assert!(settings.checkbox_use_hidden_element);
	/// ```
	pub fn from_toml_str(source: &str) -> FormViewResult<Self> {
		Ok(toml::from_str(source)?)
	}
}

/// CSRF token generation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsrfSettings {
	/// Salt mixed into every generated token
	pub salt: String,
	/// Number of random bytes drawn per token
	pub entropy_bytes: usize,
}

impl Default for CsrfSettings {
	fn default() -> Self {
		Self {
			salt: "salt".to_string(),
			entropy_bytes: 32,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_defaults_from_empty_document() {
		// Act
		let settings = FormViewSettings::from_toml_str("").unwrap();

		// Assert
		assert_eq!(settings, FormViewSettings::default());
	}

	#[rstest]
	fn test_nested_csrf_table() {
		// Arrange
		let source = r#"
			checkbox_use_hidden_element = false

			[csrf]
			salt = "pepper"
		"#;

		// Act
		let settings = FormViewSettings::from_toml_str(source).unwrap();

		// Assert
		assert!(!settings.checkbox_use_hidden_element);
		assert_eq!(settings.csrf.salt, "pepper");
		assert_eq!(settings.csrf.entropy_bytes, 32);
	}

	#[rstest]
	fn test_unknown_doctype_is_rejected() {
		assert!(FormViewSettings::from_toml_str("doctype = \"html6\"").is_err());
	}
}
