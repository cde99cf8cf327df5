//! Character-level n-gram model.
//!
//! Stages, in dependency order:
//! - Context extraction (`gram`)
//! - Vocabulary and index assignment (`vocabulary`)
//! - Frequency table construction (`table`)
//! - Sampling and word generation (`sampler`, `state`, `NGramCharacter`)
//! - A high-level generation interface (`Generator`)

/// Context (gram) extraction from sentinel-wrapped words.
pub mod gram;

/// Sorted, deduplicated symbol sets with stable indices.
pub mod vocabulary;

/// Dense row-major probability table.
///
/// Handles counting, row normalization and hand-built tables.
pub mod table;

/// Categorical sampling over one table row.
pub mod sampler;

/// Building/done state machine of a word under generation.
pub mod state;

/// Generation options (length cap, retries).
pub mod options;

/// The fitted `NGramCharacter` model.
///
/// Fitting, single-character sampling, word generation and persistence.
pub mod ngram_character;

/// High-level interface pairing a model with a seeded random generator.
pub mod generator;
