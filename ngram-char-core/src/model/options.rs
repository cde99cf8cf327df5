/// Options controlling word generation.
///
/// The default is the unbounded loop: generation runs until the end
/// sentinel is drawn, however long that takes. A model whose reachable
/// contexts never lead to the end sentinel will then loop forever, so
/// production callers should set `max_length`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationOptions {
	/// Maximum number of characters in a generated word, sentinels excluded.
	///
	/// `None` disables the cap. `Some(0)` only allows the empty word.
	pub max_length: Option<usize>,

	/// Number of extra attempts a `Generator` makes when a word is in its
	/// excluded set. `0` returns the first word drawn.
	pub nb_try: usize,
}

impl GenerationOptions {
	/// Options with no length cap.
	pub fn unbounded() -> Self {
		Self { max_length: None, nb_try: 0 }
	}

	/// Options failing with `GenerationLimit` past `max_length` characters.
	pub fn with_max_length(max_length: usize) -> Self {
		Self { max_length: Some(max_length), nb_try: 0 }
	}
}
