//! Captcha adapters attached to captcha elements
//!
//! Adapters only describe the challenge. Rendering is done by the helper the
//! adapter names through [`Captcha::helper_name`], looked up in the view.

use rand::Rng;
use std::fmt;

/// Challenge issued by a captcha adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptchaChallenge {
	/// Identifier submitted back alongside the answer
	pub id: String,
	/// The word to solve, for word based adapters
	pub word: String,
}

/// A captcha adapter
pub trait Captcha: fmt::Debug + Send + Sync {
	/// Name of the view helper rendering this adapter
	fn helper_name(&self) -> &str;

	/// Instructions shown to the user
	fn label(&self) -> &str;

	fn challenge(&self) -> &CaptchaChallenge;
}

const WORD_ALPHABET: &[u8] = b"abcdefghijkmnpqrstuvwxyz";
const DEFAULT_WORD_LENGTH: usize = 8;

/// Asks the user to type a word backwards
#[derive(Debug, Clone)]
pub struct DumbCaptcha {
	label: String,
	challenge: CaptchaChallenge,
}

impl DumbCaptcha {
	/// Create an adapter with a random word
	pub fn new() -> Self {
		let mut rng = rand::thread_rng();
		let word: String = (0..DEFAULT_WORD_LENGTH)
			.map(|_| WORD_ALPHABET[rng.gen_range(0..WORD_ALPHABET.len())] as char)
			.collect();
		Self::with_word(word)
	}

	/// Create an adapter with a fixed word
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_form_view::{Captcha, DumbCaptcha};
	///
	/// let captcha = DumbCaptcha::with_word("reinhardt");
	/// assert_eq!(captcha.challenge().word, "reinhardt");
	/// assert_eq!(captcha.helper_name(), "captcha/dumb");
	/// ```
	pub fn with_word(word: impl Into<String>) -> Self {
		let id = hex::encode(rand::random::<[u8; 16]>());
		Self {
			label: "Please type this word backwards".to_string(),
			challenge: CaptchaChallenge {
				id,
				word: word.into(),
			},
		}
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = label.into();
		self
	}
}

impl Default for DumbCaptcha {
	fn default() -> Self {
		Self::new()
	}
}

impl Captcha for DumbCaptcha {
	fn helper_name(&self) -> &str {
		"captcha/dumb"
	}

	fn label(&self) -> &str {
		&self.label
	}

	fn challenge(&self) -> &CaptchaChallenge {
		&self.challenge
	}
}
