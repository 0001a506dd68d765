//! Errors raised while rendering form elements

#[derive(Debug, thiserror::Error)]
pub enum FormViewError {
	#[error("No helper registered under the name '{0}'")]
	HelperNotFound(String),
	#[error("{helper} requires that the element has an assigned name; none discovered")]
	MissingName { helper: &'static str },
	#[error("{helper} requires that the element has an assigned '{attribute}' attribute; none discovered")]
	MissingAttribute {
		helper: &'static str,
		attribute: &'static str,
	},
	#[error("{helper} expects either button content or an element label; none discovered")]
	MissingLabel { helper: &'static str },
	#[error("{helper} requires that the element has a captcha adapter; none discovered")]
	MissingCaptcha { helper: &'static str },
	#[error("{helper} cannot render element '{element}': {reason}")]
	InvalidElement {
		helper: &'static str,
		element: String,
		reason: String,
	},
	#[error("Invalid form view settings: {0}")]
	Settings(#[from] toml::de::Error),
}

pub type FormViewResult<T> = Result<T, FormViewError>;
