/// Returns the context (gram) preceding position `idx` of `word`.
///
/// The context is the up-to-`n` characters immediately before `idx`,
/// clipped at the start of the word: `word[max(idx - n, 0)..idx]`.
///
/// # Panics
/// Panics if `idx > word.len()`, like any out-of-range slice.
pub fn get_gram(word: &[char], idx: usize, n: usize) -> String {
	word[idx.saturating_sub(n)..idx].iter().collect()
}

/// Wraps a word with its start and end sentinels.
///
/// UTF-8 safe: the result is indexed by characters, not bytes.
pub fn wrap(word: &str, start_char: char, end_char: char) -> Vec<char> {
	let mut chars = Vec::with_capacity(word.len() + 2);
	chars.push(start_char);
	chars.extend(word.chars());
	chars.push(end_char);
	chars
}

/// Extracts every (context, next character) pair of a corpus.
///
/// Each word is wrapped with the sentinels, then for every position
/// `i` in `1..len` the context is `get_gram(word, i, n)` and the target is
/// `word[i]`. A word of `k` characters yields `k + 1` pairs; the per-word
/// lists are concatenated in input order.
///
/// The two returned vectors are parallel and always have the same length.
pub fn gram_and_next_char<S: AsRef<str>>(
	words: &[S],
	n: usize,
	start_char: char,
	end_char: char,
) -> (Vec<String>, Vec<char>) {
	let mut grams = Vec::new();
	let mut next_chars = Vec::new();

	for word in words {
		let wrapped = wrap(word.as_ref(), start_char, end_char);
		for i in 1..wrapped.len() {
			grams.push(get_gram(&wrapped, i, n));
			next_chars.push(wrapped[i]);
		}
	}

	(grams, next_chars)
}
