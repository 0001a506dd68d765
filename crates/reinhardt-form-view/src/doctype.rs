//! Document type the markup is produced for

use serde::{Deserialize, Serialize};

/// HTML document type
///
/// Only affects how void elements are closed: XHTML doctypes close them with
/// ` />`, everything else with `>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Doctype {
	Xhtml11,
	Xhtml1Strict,
	Xhtml1Transitional,
	Xhtml1Frameset,
	Xhtml5,
	Html4Strict,
	Html4Loose,
	Html4Frameset,
	#[default]
	Html5,
}

impl Doctype {
	/// Check whether this is an XHTML doctype
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_form_view::Doctype;
	///
	/// assert!(Doctype::Xhtml1Strict.is_xhtml());
	/// assert!(!Doctype::Html5.is_xhtml());
	/// ```
	pub fn is_xhtml(self) -> bool {
		matches!(
			self,
			Self::Xhtml11
				| Self::Xhtml1Strict
				| Self::Xhtml1Transitional
				| Self::Xhtml1Frameset
				| Self::Xhtml5
		)
	}

	/// Closing sequence of a void element such as `<input>`
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_form_view::Doctype;
	///
	/// assert_eq!(Doctype::Html5.void_close(), ">");
	/// assert_eq!(Doctype::Xhtml11.void_close(), " />");
	/// ```
	pub fn void_close(self) -> &'static str {
		if self.is_xhtml() { " />" } else { ">" }
	}
}
