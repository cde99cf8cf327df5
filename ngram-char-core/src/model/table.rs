use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Dense 2-D table of non-negative weights, stored row-major.
///
/// Row `i` holds the distribution of the next character after context `i`;
/// column `j` is the character with index `j`.
///
/// # Invariants
/// - `values.len() == rows * cols`
/// - After `normalize_rows` succeeds, every row sums to 1.0 (within float tolerance)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProbabilityTable {
	rows: usize,
	cols: usize,
	values: Vec<f64>,
}

impl ProbabilityTable {
	/// Creates a `rows` x `cols` table filled with zeros.
	pub fn zeros(rows: usize, cols: usize) -> Self {
		Self { rows, cols, values: vec![0.0; rows * cols] }
	}

	/// Builds a table from explicit rows, stored verbatim.
	///
	/// This is the direct-manipulation entry point: rows are neither
	/// normalized nor required to sum to one. A row of zeros is accepted
	/// here and fails later when it is normalized or sampled.
	///
	/// # Errors
	/// - `ShapeMismatch` if the rows are not all `cols` long, or there are not `rows` of them
	/// - `InvalidProbability` for negative, NaN or infinite cells
	pub fn from_rows(rows: usize, cols: usize, data: Vec<Vec<f64>>) -> Result<Self> {
		if data.len() != rows {
			return Err(ModelError::ShapeMismatch {
				expected: (rows, cols),
				found: (data.len(), data.first().map_or(0, Vec::len)),
			});
		}

		let mut values = Vec::with_capacity(rows * cols);
		for (row, cells) in data.into_iter().enumerate() {
			if cells.len() != cols {
				return Err(ModelError::ShapeMismatch {
					expected: (rows, cols),
					found: (rows, cells.len()),
				});
			}
			for (column, value) in cells.into_iter().enumerate() {
				if !value.is_finite() || value < 0.0 {
					return Err(ModelError::InvalidProbability { row, column, value });
				}
				values.push(value);
			}
		}

		Ok(Self { rows, cols, values })
	}

	pub fn shape(&self) -> (usize, usize) {
		(self.rows, self.cols)
	}

	/// Adds one observation to cell (`row`, `col`).
	///
	/// # Panics
	/// Panics if the cell is out of bounds. Callers index through a
	/// `Vocabulary` built from the same pairs, so this is a logic error.
	pub fn increment(&mut self, row: usize, col: usize) {
		assert!(row < self.rows && col < self.cols, "cell ({row}, {col}) out of bounds");
		self.values[row * self.cols + col] += 1.0;
	}

	/// Returns row `i`, or `None` if it does not exist.
	pub fn row(&self, i: usize) -> Option<&[f64]> {
		if i >= self.rows {
			return None;
		}
		let start = i * self.cols;
		Some(&self.values[start..start + self.cols])
	}

	pub fn get(&self, row: usize, col: usize) -> Option<f64> {
		self.row(row)?.get(col).copied()
	}

	pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
		// chunks(0) panics; a table with no columns has no values anyway
		self.values.chunks(self.cols.max(1))
	}

	/// Divides every row by its own sum.
	///
	/// # Errors
	/// Returns `DegenerateRow(i)` for the first row whose sum is zero. The
	/// table is left untouched in that case: a zero row is never replaced by
	/// a fallback distribution.
	pub fn normalize_rows(&mut self) -> Result<()> {
		let sums: Vec<f64> = self.rows().map(|row| row.iter().sum()).collect();
		if let Some(i) = sums.iter().position(|sum| *sum <= 0.0) {
			return Err(ModelError::DegenerateRow(i));
		}

		for (row, sum) in self.values.chunks_mut(self.cols.max(1)).zip(sums) {
			for value in row {
				*value /= sum;
			}
		}
		Ok(())
	}
}
