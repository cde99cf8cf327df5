//! Character-level n-gram text generation library.
//!
//! This crate learns, for every context of up to `n` preceding characters
//! seen in a corpus of words, the distribution of the character that
//! follows, and samples new words from it:
//! - Context extraction with start/end sentinels
//! - Deterministic (sorted) context and character indexing
//! - A row-stochastic probability table
//! - Reproducible sampling through caller-owned random generators
//! - Binary persistence of fitted models
//!
//! ```no_run
//! use ngram_char_core::model::generator::Generator;
//! use ngram_char_core::model::ngram_character::NGramCharacter;
//!
//! let mut model = NGramCharacter::new(3)?;
//! model.fit(&["anna", "hanna", "johanna"])?;
//! let words = Generator::seeded(&model, 42).words(5)?;
//! # Ok::<(), ngram_char_core::error::ModelError>(())
//! ```

/// Error type shared by the whole crate.
pub mod error;

/// Core n-gram model and generation logic.
pub mod model;

/// I/O utilities (corpus loading, path helpers).
///
/// Not exposed
pub(crate) mod io;

pub use error::{ModelError, Result};
pub use model::generator::Generator;
pub use model::ngram_character::NGramCharacter;
pub use model::options::GenerationOptions;
