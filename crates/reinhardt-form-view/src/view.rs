//! Rendering context shared by all helpers

use crate::attributes::{Attributes, render_attributes};
use crate::doctype::Doctype;
use crate::element::Element;
use crate::error::FormViewResult;
use crate::escape::{Escaper, HtmlEscaper};
use crate::helper::FormHelper;
use crate::plugin::HelperPluginManager;
use crate::settings::FormViewSettings;
use std::fmt;
use std::sync::Arc;

/// The rendering context
///
/// Holds the settings (doctype in particular), the escaper and the helper
/// registry. Helpers receive the view on every call and use it to escape
/// output and to delegate to other helpers.
///
/// # Examples
///
/// ```
/// use reinhardt_form_view::{Element, View};
///
/// let view = View::new();
/// let element = Element::new("foo").with_attribute("type", "text");
/// let markup = view.render_element(&element).unwrap();
/// assert_eq!(markup, r#"<input name="foo" type="text">"#);
/// ```
#[derive(Clone)]
pub struct View {
	settings: FormViewSettings,
	escaper: Arc<dyn Escaper>,
	plugins: HelperPluginManager,
}

impl View {
	/// Create a view with default settings and every helper registered
	pub fn new() -> Self {
		Self::with_settings(FormViewSettings::default())
	}

	pub fn with_settings(settings: FormViewSettings) -> Self {
		Self {
			settings,
			escaper: Arc::new(HtmlEscaper),
			plugins: HelperPluginManager::with_defaults(),
		}
	}

	pub fn with_escaper(mut self, escaper: Arc<dyn Escaper>) -> Self {
		self.escaper = escaper;
		self
	}

	pub fn settings(&self) -> &FormViewSettings {
		&self.settings
	}

	pub fn doctype(&self) -> Doctype {
		self.settings.doctype
	}

	pub fn set_doctype(&mut self, doctype: Doctype) -> &mut Self {
		self.settings.doctype = doctype;
		self
	}

	pub fn escaper(&self) -> &dyn Escaper {
		self.escaper.as_ref()
	}

	pub fn escape_html(&self, value: &str) -> String {
		self.escaper.escape_html(value)
	}

	pub fn plugins(&self) -> &HelperPluginManager {
		&self.plugins
	}

	pub fn plugins_mut(&mut self) -> &mut HelperPluginManager {
		&mut self.plugins
	}

	/// Look up a helper by name
	pub fn plugin(&self, name: &str) -> FormViewResult<Arc<dyn FormHelper>> {
		self.plugins.get(name)
	}

	/// Render `element` with the helper registered under `helper`
	pub fn render(&self, helper: &str, element: &Element) -> FormViewResult<String> {
		self.plugin(helper)?.render(element, self)
	}

	/// Render `element` through the `form_element` dispatcher
	pub fn render_element(&self, element: &Element) -> FormViewResult<String> {
		self.render("form_element", element)
	}

	/// Serialize attributes valid for a tag accepting `tag_attributes`
	pub fn attributes(&self, attributes: &Attributes, tag_attributes: &[&str]) -> String {
		render_attributes(attributes, tag_attributes, self.escaper())
	}

	/// Closing sequence of void elements under the current doctype
	pub fn void_close(&self) -> &'static str {
		self.settings.doctype.void_close()
	}
}

impl Default for View {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for View {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("View")
			.field("settings", &self.settings)
			.field("plugins", &self.plugins)
			.finish_non_exhaustive()
	}
}
