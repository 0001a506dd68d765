//! CSRF token collaborator of CSRF elements
//!
//! The validator owns the token a CSRF element renders. The token is
//! generated on first access and then cached, so every reader (the input
//! specification, the renderer) sees the same value until
//! [`CsrfValidator::regenerate`] is called.
//!
//! A validator without its own [`CsrfSettings`] generates its token with
//! the settings of whoever reads it first: the view's `[csrf]` settings when
//! it is rendered, the defaults otherwise.

use crate::settings::CsrfSettings;
use parking_lot::Mutex;
use sha2::{Digest, Sha256};

#[derive(Debug)]
pub struct CsrfValidator {
	name: String,
	settings: Option<CsrfSettings>,
	hash: Mutex<Option<String>>,
}

impl CsrfValidator {
	/// Create a validator for the element named `name`
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_form_view::{CsrfSettings, CsrfValidator};
	///
	/// let validator = CsrfValidator::new("security", &CsrfSettings::default());
	/// assert_eq!(validator.name(), "security");
	/// assert_eq!(validator.hash(), validator.hash());
	/// ```
	pub fn new(name: impl Into<String>, settings: &CsrfSettings) -> Self {
		Self {
			name: name.into(),
			settings: Some(settings.clone()),
			hash: Mutex::new(None),
		}
	}

	/// Create a validator taking its settings from the first reader
	pub fn inheriting(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			settings: None,
			hash: Mutex::new(None),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Settings of this validator, `None` when they are inherited
	pub fn settings(&self) -> Option<&CsrfSettings> {
		self.settings.as_ref()
	}

	/// Current token, generating one with default settings on first use
	pub fn hash(&self) -> String {
		self.hash_with(&CsrfSettings::default())
	}

	/// Current token, generating one on first use
	///
	/// `fallback` applies only when the validator has no settings of its
	/// own and no token has been generated yet.
	pub fn hash_with(&self, fallback: &CsrfSettings) -> String {
		self.hash
			.lock()
			.get_or_insert_with(|| self.generate_hash(fallback))
			.clone()
	}

	/// Discard the cached token and generate a new one with the validator's
	/// own settings, or the defaults
	pub fn regenerate(&self) -> String {
		let hash = self.generate_hash(&CsrfSettings::default());
		*self.hash.lock() = Some(hash.clone());
		hash
	}

	fn generate_hash(&self, fallback: &CsrfSettings) -> String {
		let settings = self.settings.as_ref().unwrap_or(fallback);
		let entropy: Vec<u8> = (0..settings.entropy_bytes)
			.map(|_| rand::random::<u8>())
			.collect();

		let mut hasher = Sha256::new();
		hasher.update(settings.salt.as_bytes());
		hasher.update(&entropy);
		hasher.update(self.name.as_bytes());
		let hash = hex::encode(hasher.finalize());

		// Token id distinguishes tokens issued for the same element
		let token_id = hex::encode(&Sha256::digest(&entropy)[..16]);

		tracing::debug!(element = %self.name, "generated CSRF token");
		format!("{hash}-{token_id}")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn validator() -> CsrfValidator {
		CsrfValidator::new("foo", &CsrfSettings::default())
	}

	#[rstest]
	fn test_hash_is_stable(validator: CsrfValidator) {
		assert_eq!(validator.hash(), validator.hash());
	}

	#[rstest]
	fn test_hash_format(validator: CsrfValidator) {
		// Act
		let hash = validator.hash();
		let (digest, token_id) = hash.split_once('-').unwrap();

		// Assert
		assert_eq!(digest.len(), 64);
		assert_eq!(token_id.len(), 32);
		assert!(hash.chars().all(|c| c.is_ascii_hexdigit() || c == '-'));
	}

	#[rstest]
	fn test_inheriting_validator_uses_fallback() {
		// Arrange
		let fallback = CsrfSettings {
			salt: "s".to_string(),
			entropy_bytes: 0,
		};
		let first = CsrfValidator::inheriting("t");
		let second = CsrfValidator::inheriting("t");

		// Act
		let first_hash = first.hash_with(&fallback);
		let second_hash = second.hash_with(&fallback);

		// Assert
		assert_eq!(first_hash, second_hash);
		assert_eq!(first.hash(), first_hash);
	}

	#[rstest]
	fn test_own_settings_win_over_fallback() {
		let own = CsrfSettings {
			salt: "own".to_string(),
			entropy_bytes: 0,
		};
		let fallback = CsrfSettings {
			salt: "fallback".to_string(),
			entropy_bytes: 0,
		};

		let with_fallback = CsrfValidator::new("t", &own).hash_with(&fallback);
		let without = CsrfValidator::new("t", &own).hash();

		assert_eq!(with_fallback, without);
		assert_ne!(with_fallback, CsrfValidator::inheriting("t").hash_with(&fallback));
	}

	#[rstest]
	fn test_regenerate_replaces_token(validator: CsrfValidator) {
		let first = validator.hash();

		let second = validator.regenerate();

		assert_ne!(first, second);
		assert_eq!(validator.hash(), second);
	}
}
