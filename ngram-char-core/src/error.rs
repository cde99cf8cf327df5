use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors raised while fitting, sampling from, or persisting a model.
///
/// Every variant is a local precondition check raised at the point of
/// violation. Nothing here is retried internally: the caller receives either
/// a fully-populated value or one of these.
#[derive(Debug, Error)]
pub enum ModelError {
	/// The model order must be at least 1.
	#[error("n must be >= 1")]
	InvalidOrder,

	/// `fit` was given no words.
	#[error("cannot fit a model on an empty corpus")]
	EmptyCorpus,

	/// A training word embeds one of the sentinel characters.
	#[error("word {word:?} contains the sentinel {sentinel:?}")]
	SentinelInWord { word: String, sentinel: char },

	/// Sampling was requested before the model was fitted.
	#[error("model has not been fitted")]
	NotFitted,

	/// The context is not part of the learned vocabulary.
	#[error("unknown context {0:?}")]
	UnknownContext(String),

	/// A hand-built vocabulary is unsorted, duplicated, or has contexts longer than `n`.
	#[error("invalid vocabulary: {0}")]
	InvalidVocabulary(String),

	/// A hand-built table does not match the vocabulary sizes.
	#[error("table shape mismatch: expected {expected:?}, found {found:?}")]
	ShapeMismatch {
		expected: (usize, usize),
		found: (usize, usize),
	},

	/// A table cell is negative, NaN or infinite.
	#[error("invalid probability {value} at ({row}, {column})")]
	InvalidProbability { row: usize, column: usize, value: f64 },

	/// A row has no weight to normalize or sample from.
	#[error("row {0} sums to zero")]
	DegenerateRow(usize),

	/// The optional word length cap was reached before the end sentinel.
	#[error("generation exceeded the maximum word length of {0}")]
	GenerationLimit(usize),

	#[error(transparent)]
	Io(#[from] std::io::Error),

	#[error(transparent)]
	Serialization(#[from] postcard::Error),
}
