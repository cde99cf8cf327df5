use std::fs;
use std::path::Path;

use log::{debug, info, trace, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::gram::{get_gram, gram_and_next_char};
use super::options::GenerationOptions;
use super::sampler::sample_index;
use super::state::WordState;
use super::table::ProbabilityTable;
use super::vocabulary::Vocabulary;
use crate::error::{ModelError, Result};
use crate::io::{build_output_path, read_corpus};

/// Sentinel used for both the start and the end of a word by default.
pub const DEFAULT_SENTINEL: char = '$';

/// Character-level n-gram model.
///
/// Predicts the next character from the frequency with which it followed
/// the previous (up to) `n` characters in the training words. Every
/// training word is framed by a start and an end sentinel, so word
/// boundaries are learned like any other transition.
///
/// # Lifecycle
/// A model is created empty (`new` / `with_sentinels`), then fitted with
/// `fit`. Once fitted it is only read, so it can be shared between threads
/// as long as each thread samples with its own generator.
///
/// # Invariants
/// - `n >= 1`
/// - `probabilities` has shape `(contexts.len(), characters.len())`
/// - After `fit`, every row of `probabilities` sums to 1.0
#[derive(Clone, Debug)]
pub struct NGramCharacter {
	/// Maximum context length (order of the model).
	n: usize,
	start_char: char,
	end_char: char,
	/// Sorted contexts; row `i` of the table belongs to context `i`.
	contexts: Vocabulary<String>,
	/// Sorted next characters; column `j` of the table belongs to character `j`.
	characters: Vocabulary<char>,
	probabilities: ProbabilityTable,
}

/// On-disk form of a fitted model. Index maps are rebuilt on load.
#[derive(Serialize, Deserialize)]
struct ModelRecord {
	n: usize,
	start_char: char,
	end_char: char,
	contexts: Vec<String>,
	characters: Vec<char>,
	probabilities: Vec<Vec<f64>>,
}

impl NGramCharacter {
	/// Creates an empty model of order `n` using `$` as both sentinels.
	///
	/// # Errors
	/// Returns `InvalidOrder` if `n == 0`.
	pub fn new(n: usize) -> Result<Self> {
		Self::with_sentinels(n, DEFAULT_SENTINEL, DEFAULT_SENTINEL)
	}

	/// Creates an empty model of order `n` with explicit sentinels.
	///
	/// The sentinels may be identical. They must not appear in the
	/// training words, otherwise `fit` rejects the corpus.
	///
	/// # Errors
	/// Returns `InvalidOrder` if `n == 0`.
	pub fn with_sentinels(n: usize, start_char: char, end_char: char) -> Result<Self> {
		if n == 0 {
			return Err(ModelError::InvalidOrder);
		}
		Ok(Self {
			n,
			start_char,
			end_char,
			contexts: Vocabulary::default(),
			characters: Vocabulary::default(),
			probabilities: ProbabilityTable::zeros(0, 0),
		})
	}

	/// Builds a fitted model from an explicit vocabulary and table.
	///
	/// This is the direct table manipulation entry point, mostly useful for
	/// fixtures and for loading saved models. Rows are stored as given:
	/// they only need non-negative weights, not a sum of one. A row of
	/// zeros is accepted but fails with `DegenerateRow` when sampled; the
	/// caller is responsible for not wiring such rows.
	///
	/// # Errors
	/// - `InvalidOrder` if `n == 0`
	/// - `InvalidVocabulary` if `contexts` or `characters` are empty, not strictly
	///   ascending, or a context is longer than `n` characters
	/// - `ShapeMismatch` / `InvalidProbability` for a malformed table
	pub fn from_parts(
		n: usize,
		start_char: char,
		end_char: char,
		contexts: Vec<String>,
		characters: Vec<char>,
		rows: Vec<Vec<f64>>,
	) -> Result<Self> {
		let mut model = Self::with_sentinels(n, start_char, end_char)?;

		if contexts.is_empty() || characters.is_empty() {
			return Err(ModelError::InvalidVocabulary("vocabulary is empty".to_owned()));
		}
		if let Some(context) = contexts.iter().find(|c| c.chars().count() > n) {
			return Err(ModelError::InvalidVocabulary(format!(
				"context {context:?} is longer than n = {n}"
			)));
		}

		let contexts = Vocabulary::from_sorted(contexts)?;
		let characters = Vocabulary::from_sorted(characters)?;
		let probabilities = ProbabilityTable::from_rows(contexts.len(), characters.len(), rows)?;

		model.contexts = contexts;
		model.characters = characters;
		model.probabilities = probabilities;
		Ok(model)
	}

	pub fn n(&self) -> usize {
		self.n
	}

	pub fn start_char(&self) -> char {
		self.start_char
	}

	pub fn end_char(&self) -> char {
		self.end_char
	}

	/// Sorted contexts; position `i` is the table row of that context.
	pub fn contexts(&self) -> &[String] {
		self.contexts.as_slice()
	}

	/// Sorted next characters; position `j` is the table column of that character.
	pub fn characters(&self) -> &[char] {
		self.characters.as_slice()
	}

	pub fn probabilities(&self) -> &ProbabilityTable {
		&self.probabilities
	}

	pub fn context_index(&self, context: &str) -> Option<usize> {
		self.contexts.index_of(context)
	}

	pub fn char_index(&self, c: char) -> Option<usize> {
		self.characters.index_of(&c)
	}

	/// Returns P(next = `next_char` | context), or `None` if either is unknown.
	pub fn probability(&self, context: &str, next_char: char) -> Option<f64> {
		self.probabilities
			.get(self.context_index(context)?, self.char_index(next_char)?)
	}

	pub fn is_fitted(&self) -> bool {
		!self.contexts.is_empty()
	}

	/// Context preceding position `idx` of `word`, using this model's order.
	pub fn get_gram(&self, word: &[char], idx: usize) -> String {
		get_gram(word, idx, self.n)
	}

	/// (context, next character) pairs of a corpus, using this model's
	/// order and sentinels.
	pub fn gram_and_next_char<S: AsRef<str>>(&self, words: &[S]) -> (Vec<String>, Vec<char>) {
		gram_and_next_char(words, self.n, self.start_char, self.end_char)
	}

	/// Learns the model from a corpus of words.
	///
	/// # Behavior
	/// - Extracts every (context, next character) pair
	/// - Sorts and indexes the distinct contexts and characters
	/// - Counts pairs into a table and normalizes each row
	///
	/// The fitted state only depends on the multiset of words, not on their
	/// order. Calling `fit` again replaces the previous state; nothing is
	/// assigned until every step has succeeded, so a failed fit leaves the
	/// model as it was.
	///
	/// # Errors
	/// - `EmptyCorpus` if `words` is empty
	/// - `SentinelInWord` if a word contains a sentinel
	pub fn fit<S: AsRef<str>>(&mut self, words: &[S]) -> Result<()> {
		if words.is_empty() {
			return Err(ModelError::EmptyCorpus);
		}
		for word in words {
			let word = word.as_ref();
			for sentinel in [self.start_char, self.end_char] {
				if word.contains(sentinel) {
					return Err(ModelError::SentinelInWord { word: word.to_owned(), sentinel });
				}
			}
		}

		let (grams, next_chars) = self.gram_and_next_char(words);
		if grams.is_empty() {
			return Err(ModelError::EmptyCorpus);
		}

		let contexts = Vocabulary::from_observed(grams.iter().cloned());
		let characters = Vocabulary::from_observed(next_chars.iter().copied());

		// Count frequencies
		let mut probabilities = ProbabilityTable::zeros(contexts.len(), characters.len());
		for (gram, next_char) in grams.iter().zip(&next_chars) {
			let row = contexts
				.index_of(gram.as_str())
				.ok_or_else(|| ModelError::UnknownContext(gram.clone()))?;
			let col = characters
				.index_of(next_char)
				.ok_or_else(|| ModelError::UnknownContext(next_char.to_string()))?;
			probabilities.increment(row, col);
		}

		// Normalize frequencies to probabilities
		probabilities.normalize_rows()?;

		debug!(
			"fitted {}-gram model: {} words, {} pairs, {} contexts, {} characters",
			self.n,
			words.len(),
			grams.len(),
			contexts.len(),
			characters.len()
		);

		self.contexts = contexts;
		self.characters = characters;
		self.probabilities = probabilities;
		Ok(())
	}

	/// Samples the character following `prev_gram`.
	///
	/// `prev_gram` must be one of the learned contexts. The draw advances
	/// `rng`, so the same seed and call sequence give the same characters.
	///
	/// # Errors
	/// - `NotFitted` if the model has not been fitted
	/// - `UnknownContext` if `prev_gram` was never observed
	/// - `DegenerateRow` if the context's row has no weight
	pub fn generate_character<R: Rng + ?Sized>(&self, rng: &mut R, prev_gram: &str) -> Result<char> {
		if !self.is_fitted() {
			return Err(ModelError::NotFitted);
		}

		let gram_idx = self
			.context_index(prev_gram)
			.ok_or_else(|| ModelError::UnknownContext(prev_gram.to_owned()))?;
		let row = self
			.probabilities
			.row(gram_idx)
			.ok_or(ModelError::DegenerateRow(gram_idx))?;
		let char_idx = sample_index(rng, row, gram_idx)?;
		let next_char = self
			.characters
			.get(char_idx)
			.copied()
			.ok_or(ModelError::DegenerateRow(gram_idx))?;

		trace!("{prev_gram:?} -> {next_char:?}");
		Ok(next_char)
	}

	/// Generates a word, sampling until the end sentinel is drawn.
	///
	/// The returned word has both sentinels removed. There is no length
	/// cap: if the end sentinel is unreachable from some context, this
	/// never returns. Use `generate_word_with` to bound it.
	pub fn generate_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
		self.generate_word_with(rng, &GenerationOptions::unbounded())
	}

	/// Generates a word under the given options.
	///
	/// # Errors
	/// Same as `generate_character`, plus `GenerationLimit` when
	/// `options.max_length` characters were sampled without reaching the
	/// end sentinel. No partial word is returned.
	pub fn generate_word_with<R: Rng + ?Sized>(
		&self,
		rng: &mut R,
		options: &GenerationOptions,
	) -> Result<String> {
		let mut state = WordState::new(self.start_char, self.end_char);

		while !state.is_done() {
			// Past max_length sampled characters the word can only be too long
			if let Some(max_length) = options.max_length {
				if state.generated_len() > max_length {
					warn!("word generation stopped after {} characters", state.generated_len());
					return Err(ModelError::GenerationLimit(max_length));
				}
			}

			let prev_gram = state.context(self.n);
			let next_char = self.generate_character(rng, &prev_gram)?;
			state.push(next_char);
		}

		Ok(state.into_word().unwrap_or_default())
	}

	/// Writes the fitted model to `path` (postcard encoding).
	///
	/// # Errors
	/// Returns `NotFitted` for an empty model, or an I/O / serialization error.
	pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
		if !self.is_fitted() {
			return Err(ModelError::NotFitted);
		}

		let record = ModelRecord {
			n: self.n,
			start_char: self.start_char,
			end_char: self.end_char,
			contexts: self.contexts.as_slice().to_vec(),
			characters: self.characters.as_slice().to_vec(),
			probabilities: self.probabilities.rows().map(<[f64]>::to_vec).collect(),
		};
		let bytes = postcard::to_stdvec(&record)?;
		fs::write(path.as_ref(), bytes)?;

		info!("saved model to {}", path.as_ref().display());
		Ok(())
	}

	/// Reads a model written by `save`.
	///
	/// The stored vocabulary and table go through the same checks as
	/// `from_parts`.
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
		let bytes = fs::read(path.as_ref())?;
		let record: ModelRecord = postcard::from_bytes(&bytes)?;

		info!("loaded model from {}", path.as_ref().display());
		Self::from_parts(
			record.n,
			record.start_char,
			record.end_char,
			record.contexts,
			record.characters,
			record.probabilities,
		)
	}

	/// Fits the model from a corpus file, one word per line.
	///
	/// - If a `.bin` file with the same stem exists next to the corpus and
	///   was saved with the same order and sentinels, it is loaded instead.
	/// - Otherwise the corpus is read (blank lines skipped), fitted, and the
	///   `.bin` cache is written for the next run.
	pub fn fit_file<P: AsRef<Path>>(&mut self, filepath: P) -> Result<()> {
		let binary_data_path = build_output_path(&filepath, "bin")?;

		if binary_data_path.exists() {
			let cached = Self::load(&binary_data_path)?;
			if cached.n == self.n
				&& cached.start_char == self.start_char
				&& cached.end_char == self.end_char
			{
				*self = cached;
				return Ok(());
			}
			info!(
				"ignoring {}: saved with different order or sentinels",
				binary_data_path.display()
			);
		}

		let words = read_corpus(&filepath)?;
		self.fit(&words)?;
		self.save(&binary_data_path)
	}
}
