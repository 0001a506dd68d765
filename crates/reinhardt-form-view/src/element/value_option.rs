//! Selectable choices of multi-valued elements

use crate::attributes::Attributes;
use serde_json::Value;

/// One selectable choice of a radio group, checkbox group or select
///
/// A value option with nested options is a group; the select helper renders
/// it as an `<optgroup>` and the group's own value is ignored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValueOption {
	value: String,
	label: String,
	selected: bool,
	disabled: bool,
	attributes: Attributes,
	label_attributes: Attributes,
	options: Vec<ValueOption>,
}

impl ValueOption {
	/// Create a value option
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_form_view::ValueOption;
	///
	/// let option = ValueOption::new("value1", "option").disabled();
	/// assert_eq!(option.value(), "value1");
	/// assert!(option.is_disabled());
	/// assert!(!option.is_group());
	/// ```
	pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			label: label.into(),
			..Default::default()
		}
	}

	/// Create a group of options
	pub fn group<I>(label: impl Into<String>, options: I) -> Self
	where
		I: IntoIterator<Item = ValueOption>,
	{
		Self {
			label: label.into(),
			options: options.into_iter().collect(),
			..Default::default()
		}
	}

	/// Mark the option selected regardless of the element value
	pub fn selected(mut self) -> Self {
		self.selected = true;
		self
	}

	pub fn disabled(mut self) -> Self {
		self.disabled = true;
		self
	}

	pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.attributes.insert(key.into(), value.into());
		self
	}

	pub fn with_label_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.label_attributes.insert(key.into(), value.into());
		self
	}

	pub fn value(&self) -> &str {
		&self.value
	}

	pub fn label(&self) -> &str {
		&self.label
	}

	pub fn is_selected(&self) -> bool {
		self.selected
	}

	pub fn is_disabled(&self) -> bool {
		self.disabled
	}

	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	pub fn label_attributes(&self) -> &Attributes {
		&self.label_attributes
	}

	pub fn options(&self) -> &[ValueOption] {
		&self.options
	}

	pub fn is_group(&self) -> bool {
		!self.options.is_empty()
	}
}

impl<V: Into<String>, L: Into<String>> From<(V, L)> for ValueOption {
	fn from((value, label): (V, L)) -> Self {
		Self::new(value, label)
	}
}

/// Values of every leaf option, groups expanded in order
pub(crate) fn flatten_values(options: &[ValueOption]) -> Vec<String> {
	let mut values = Vec::new();
	for option in options {
		if option.is_group() {
			values.extend(flatten_values(&option.options));
		} else {
			values.push(option.value.clone());
		}
	}
	values
}

/// Value options described by an `options` attribute
///
/// Objects map option values to labels, or to nested objects for groups.
/// Arrays use each scalar as both value and label. Other values yield
/// `None`.
pub(crate) fn from_json(value: &Value) -> Option<Vec<ValueOption>> {
	match value {
		Value::Object(map) => Some(
			map.iter()
				.filter_map(|(key, entry)| match entry {
					Value::Object(_) => {
						from_json(entry).map(|options| ValueOption::group(key.clone(), options))
					}
					other => crate::attributes::scalar_to_string(other)
						.map(|label| ValueOption::new(key.clone(), label)),
				})
				.collect(),
		),
		Value::Array(items) => Some(
			items
				.iter()
				.filter_map(crate::attributes::scalar_to_string)
				.map(|item| ValueOption::new(item.clone(), item))
				.collect(),
		),
		_ => None,
	}
}

/// Normalize an element value into the list of selected option values
///
/// Arrays select every scalar member; scalars select one value.
pub(crate) fn selected_values(value: Option<&Value>) -> Vec<String> {
	match value {
		Some(Value::Array(items)) => items
			.iter()
			.filter_map(crate::attributes::scalar_to_string)
			.collect(),
		Some(other) => crate::attributes::scalar_to_string(other)
			.into_iter()
			.collect(),
		None => Vec::new(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_tuple_conversion() {
		let option: ValueOption = ("value2", "label").into();
		assert_eq!(option.value(), "value2");
		assert_eq!(option.label(), "label");
	}

	#[rstest]
	#[case(None, vec![])]
	#[case(Some(json!("value2")), vec!["value2"])]
	#[case(Some(json!(3)), vec!["3"])]
	#[case(Some(json!(["a", 1, null])), vec!["a", "1"])]
	fn test_selected_values(#[case] value: Option<Value>, #[case] expected: Vec<&str>) {
		assert_eq!(selected_values(value.as_ref()), expected);
	}

	#[rstest]
	fn test_from_json_keeps_key_order() {
		// Arrange
		let value = json!({ "b": "Bee", "a": "Ay", "Group": { "c": "Sea" } });

		// Act
		let options = from_json(&value).unwrap();

		// Assert
		assert_eq!(options.len(), 3);
		assert_eq!((options[0].value(), options[0].label()), ("b", "Bee"));
		assert_eq!((options[1].value(), options[1].label()), ("a", "Ay"));
		assert!(options[2].is_group());
		assert_eq!(options[2].options()[0].value(), "c");
	}

	#[rstest]
	#[case(json!(["x", "y"]), 2)]
	#[case(json!([]), 0)]
	fn test_from_json_array(#[case] value: Value, #[case] expected: usize) {
		assert_eq!(from_json(&value).unwrap().len(), expected);
	}

	#[rstest]
	fn test_from_json_rejects_scalars() {
		assert!(from_json(&json!("option")).is_none());
	}

	#[rstest]
	fn test_flatten_values_expands_groups() {
		let options = vec![
			ValueOption::new("a", "A"),
			ValueOption::group("G", [ValueOption::new("b", "B"), ValueOption::new("c", "C")]),
		];
		assert_eq!(flatten_values(&options), vec!["a", "b", "c"]);
	}
}
