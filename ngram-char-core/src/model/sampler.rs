use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use crate::error::{ModelError, Result};

/// Draws one index from the categorical distribution given by `weights`.
///
/// The probability of selecting index `j` is `weights[j] / sum(weights)`,
/// so rows do not need to be normalized. Zero-weight entries are never
/// selected. The generator is advanced by the draw, which keeps a sequence
/// of calls reproducible for a given seed.
///
/// `row` is only used to report which row was degenerate.
///
/// # Errors
/// Returns `DegenerateRow(row)` if the weights are empty, all zero, or
/// contain a value `WeightedIndex` refuses.
pub fn sample_index<R: Rng + ?Sized>(rng: &mut R, weights: &[f64], row: usize) -> Result<usize> {
	let distribution =
		WeightedIndex::<f64>::new(weights.iter().copied()).map_err(|_| ModelError::DegenerateRow(row))?;
	Ok(distribution.sample(rng))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn test_sampling_fidelity() {
		let mut rng = StdRng::seed_from_u64(12345);
		let weights = [0.0, 0.75, 0.25];
		let trials = 4000;

		let mut counts = [0usize; 3];
		for _ in 0..trials {
			counts[sample_index(&mut rng, &weights, 0).unwrap()] += 1;
		}

		assert_eq!(counts[0], 0, "zero-weight index must never be drawn");
		let freq = counts[1] as f64 / trials as f64;
		assert!((freq - 0.75).abs() < 0.04, "frequency of index 1 was {freq}");
	}

	#[test]
	fn test_unnormalized_weights() {
		let mut rng = StdRng::seed_from_u64(7);
		for _ in 0..100 {
			assert_eq!(sample_index(&mut rng, &[0.0, 0.0, 5.0], 0).unwrap(), 2);
		}
	}

	#[test]
	fn test_same_seed_same_draws() {
		let weights = [0.2, 0.3, 0.5];
		let draw = |seed| {
			let mut rng = StdRng::seed_from_u64(seed);
			(0..50)
				.map(|_| sample_index(&mut rng, &weights, 0).unwrap())
				.collect::<Vec<_>>()
		};
		assert_eq!(draw(42), draw(42));
	}

	#[test]
	fn test_degenerate_rows() {
		let mut rng = StdRng::seed_from_u64(0);
		assert!(matches!(
			sample_index(&mut rng, &[0.0, 0.0], 3),
			Err(ModelError::DegenerateRow(3))
		));
		assert!(matches!(
			sample_index(&mut rng, &[], 1),
			Err(ModelError::DegenerateRow(1))
		));
	}
}
