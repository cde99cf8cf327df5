use std::borrow::Borrow;
use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

use crate::error::{ModelError, Result};

/// Sorted, deduplicated set of symbols with a stable index for each one.
///
/// Used twice by the model: once for contexts (`String`) and once for
/// next characters (`char`).
///
/// # Invariants
/// - `items` is strictly ascending
/// - `index[items[i]] == i` for every `i`, and `index` has no other keys
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vocabulary<T: Ord + Hash + Clone> {
	items: Vec<T>,
	index: HashMap<T, usize>,
}

impl<T: Ord + Hash + Clone> Vocabulary<T> {
	/// Builds a vocabulary from every observed symbol, duplicates included.
	///
	/// Symbols are deduplicated and sorted, so the index assignment only
	/// depends on the set of symbols, not on the order they were seen in.
	pub fn from_observed<I: IntoIterator<Item = T>>(observed: I) -> Self {
		let items: Vec<T> = observed.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
		Self::index_sorted(items)
	}

	/// Builds a vocabulary from symbols that are already in final order.
	///
	/// # Errors
	/// Returns `InvalidVocabulary` if `items` is not strictly ascending.
	pub fn from_sorted(items: Vec<T>) -> Result<Self> {
		if let Some(pos) = items.windows(2).position(|pair| pair[0] >= pair[1]) {
			return Err(ModelError::InvalidVocabulary(format!(
				"entries {} and {} are not strictly ascending",
				pos,
				pos + 1
			)));
		}
		Ok(Self::index_sorted(items))
	}

	fn index_sorted(items: Vec<T>) -> Self {
		let index = items
			.iter()
			.enumerate()
			.map(|(i, item)| (item.clone(), i))
			.collect();
		Self { items, index }
	}

	pub fn index_of<Q>(&self, item: &Q) -> Option<usize>
	where
		T: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.index.get(item).copied()
	}

	pub fn get(&self, idx: usize) -> Option<&T> {
		self.items.get(idx)
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn as_slice(&self) -> &[T] {
		&self.items
	}
}

impl<T: Ord + Hash + Clone> Default for Vocabulary<T> {
	fn default() -> Self {
		Self { items: Vec::new(), index: HashMap::new() }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_observed_sorts_and_deduplicates() {
		let vocab = Vocabulary::from_observed(vec!['c', 'a', '$', 'a', 'b', 'c']);
		assert_eq!(vocab.as_slice(), &['$', 'a', 'b', 'c']);
		assert_eq!(vocab.index_of(&'$'), Some(0));
		assert_eq!(vocab.index_of(&'c'), Some(3));
		assert_eq!(vocab.index_of(&'z'), None);
	}

	#[test]
	fn test_index_is_bijective() {
		let vocab = Vocabulary::from_observed(
			["bab", "$", "$a", "abc", "$a"].iter().map(|s| s.to_string()),
		);
		for (i, item) in vocab.as_slice().iter().enumerate() {
			assert_eq!(vocab.index_of(item.as_str()), Some(i));
			assert_eq!(vocab.get(i), Some(item));
		}
		assert_eq!(vocab.len(), 4);
	}

	#[test]
	fn test_order_independent() {
		let a = Vocabulary::from_observed(vec!["x".to_string(), "y".to_string(), "x".to_string()]);
		let b = Vocabulary::from_observed(vec!["y".to_string(), "x".to_string()]);
		assert_eq!(a, b);
	}

	#[test]
	fn test_from_sorted_rejects_unsorted_and_duplicates() {
		assert!(Vocabulary::from_sorted(vec!['a', 'b', 'c']).is_ok());
		assert!(matches!(
			Vocabulary::from_sorted(vec!['b', 'a']),
			Err(ModelError::InvalidVocabulary(_))
		));
		assert!(matches!(
			Vocabulary::from_sorted(vec!['a', 'a']),
			Err(ModelError::InvalidVocabulary(_))
		));
	}

	#[test]
	fn test_default_is_empty() {
		let vocab: Vocabulary<char> = Vocabulary::default();
		assert!(vocab.is_empty());
		assert_eq!(vocab.get(0), None);
	}
}
