use std::collections::HashSet;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::ngram_character::NGramCharacter;
use super::options::GenerationOptions;
use crate::error::Result;

/// High-level word generator over a fitted model.
///
/// # Responsibilities
/// - Own the random generator used for sampling, so a seed fully
///   determines the generated sequence
/// - Apply `GenerationOptions` (length cap, retries)
/// - Optionally avoid returning words from an excluded set, such as the
///   training corpus
///
/// The model is only borrowed. Several generators can share one model
/// across threads, each with its own random generator.
#[derive(Debug)]
pub struct Generator<'a, R: Rng = StdRng> {
	model: &'a NGramCharacter,
	rng: R,
	options: GenerationOptions,
	/// Lowercased words to avoid.
	excluded: HashSet<String>,
}

impl<'a> Generator<'a, StdRng> {
	/// Creates a generator with a `StdRng` seeded from `seed`.
	pub fn seeded(model: &'a NGramCharacter, seed: u64) -> Self {
		Self::with_rng(model, StdRng::seed_from_u64(seed))
	}
}

impl<'a, R: Rng> Generator<'a, R> {
	/// Creates a generator sampling with a caller-supplied random generator.
	pub fn with_rng(model: &'a NGramCharacter, rng: R) -> Self {
		Self {
			model,
			rng,
			options: GenerationOptions::default(),
			excluded: HashSet::new(),
		}
	}

	pub fn with_options(mut self, options: GenerationOptions) -> Self {
		self.options = options;
		self
	}

	/// Words the generator should try not to return.
	///
	/// Comparison is case-insensitive. Up to `options.nb_try` extra words
	/// are drawn when an excluded one comes out; after that the last draw
	/// is returned as is.
	pub fn excluding<I, S>(mut self, words: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.excluded
			.extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
		self
	}

	pub fn options(&self) -> &GenerationOptions {
		&self.options
	}

	pub fn model(&self) -> &NGramCharacter {
		self.model
	}

	/// Generates one word.
	///
	/// # Errors
	/// Propagates the model's sampling errors, including `GenerationLimit`
	/// when `options.max_length` is set.
	pub fn next_word(&mut self) -> Result<String> {
		let mut word = self.model.generate_word_with(&mut self.rng, &self.options)?;
		let mut nb_try = self.options.nb_try;

		while nb_try > 0 && self.excluded.contains(&word.to_lowercase()) {
			debug!("{word:?} is excluded, retrying ({nb_try} left)");
			word = self.model.generate_word_with(&mut self.rng, &self.options)?;
			nb_try -= 1;
		}

		Ok(word)
	}

	/// Generates `count` words, stopping at the first error.
	pub fn words(&mut self, count: usize) -> Result<Vec<String>> {
		(0..count).map(|_| self.next_word()).collect()
	}
}
