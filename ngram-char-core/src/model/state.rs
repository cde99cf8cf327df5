use super::gram::get_gram;

/// Phase of a word under generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
	/// The end sentinel has not been emitted yet.
	Building,
	/// The last appended character was the end sentinel.
	Done,
}

/// A word being generated, one sampled character at a time.
///
/// The word starts as the start sentinel alone. Each step appends one
/// character; the word is done once the appended character is the end
/// sentinel and the word holds more than one character.
///
/// ## Invariants
/// - `word[0]` is the start sentinel
/// - Once `Done`, no further character can be appended
#[derive(Clone, Debug)]
pub struct WordState {
	word: Vec<char>,
	end_char: char,
	phase: Phase,
}

impl WordState {
	pub fn new(start_char: char, end_char: char) -> Self {
		Self { word: vec![start_char], end_char, phase: Phase::Building }
	}

	pub fn phase(&self) -> Phase {
		self.phase
	}

	pub fn is_done(&self) -> bool {
		self.phase == Phase::Done
	}

	/// Number of characters appended since the start sentinel.
	pub fn generated_len(&self) -> usize {
		self.word.len() - 1
	}

	/// Context used to predict the next character: the last up-to-`n`
	/// characters of the word so far, start sentinel included.
	pub fn context(&self, n: usize) -> String {
		get_gram(&self.word, self.word.len(), n)
	}

	/// Appends a sampled character and returns the new phase.
	///
	/// The length check matters when both sentinels are the same
	/// character: the initial one-character word must not look finished.
	/// Appending to a `Done` word is ignored.
	pub fn push(&mut self, c: char) -> Phase {
		if self.phase == Phase::Done {
			return self.phase;
		}
		self.word.push(c);
		if c == self.end_char && self.word.len() > 1 {
			self.phase = Phase::Done;
		}
		self.phase
	}

	/// Returns the finished word with both sentinels removed.
	///
	/// Returns `None` while the word is still being built.
	pub fn into_word(self) -> Option<String> {
		match self.phase {
			Phase::Building => None,
			Phase::Done => Some(self.word[1..self.word.len() - 1].iter().collect()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_identical_sentinels_are_not_terminal_at_start() {
		let state = WordState::new('$', '$');
		assert_eq!(state.phase(), Phase::Building);
		assert_eq!(state.context(3), "$");
	}

	#[test]
	fn test_minimal_word_strips_to_empty() {
		let mut state = WordState::new('$', '$');
		assert_eq!(state.push('$'), Phase::Done);
		assert_eq!(state.into_word(), Some(String::new()));
	}

	#[test]
	fn test_context_follows_word() {
		let mut state = WordState::new('<', '>');
		state.push('a');
		state.push('b');
		state.push('c');
		assert_eq!(state.context(1), "c");
		assert_eq!(state.context(2), "bc");
		assert_eq!(state.context(10), "<abc");
		assert_eq!(state.generated_len(), 3);
	}

	#[test]
	fn test_done_word() {
		let mut state = WordState::new('<', '>');
		state.push('h');
		state.push('i');
		assert!(!state.is_done());
		state.push('>');
		assert!(state.is_done());
		assert_eq!(state.push('x'), Phase::Done);
		assert_eq!(state.into_word().as_deref(), Some("hi"));
	}

	#[test]
	fn test_building_word_has_no_output() {
		let mut state = WordState::new('<', '>');
		state.push('a');
		assert_eq!(state.into_word(), None);
	}
}
