use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Reads a corpus file and returns one word per line.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
/// - Trims surrounding whitespace and skips blank lines
pub(crate) fn read_corpus<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let contents = fs::read_to_string(filename)?;
	Ok(contents
		.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.map(str::to_owned)
		.collect())
}

/// Builds an output path based on an input path and a new extension.
///
/// Example:
/// `data/names.txt` + `"bin"` → `data/names.bin`
pub(crate) fn build_output_path<P: AsRef<Path>>(
	input_path: P,
	output_extension: &str,
) -> io::Result<PathBuf> {
	let input_path = input_path.as_ref();

	let parent = input_path.parent().unwrap_or_else(|| Path::new("."));
	let file_stem = input_path
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Input path has no filename"))?;

	let mut output = PathBuf::from(parent);
	output.push(file_stem);
	output.set_extension(output_extension);

	Ok(output)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_build_output_path() {
		let path = build_output_path("data/names.txt", "bin").unwrap();
		assert_eq!(path, PathBuf::from("data/names.bin"));

		let path = build_output_path("names", "bin").unwrap();
		assert_eq!(path, PathBuf::from("names.bin"));
	}

	#[test]
	fn test_build_output_path_without_filename() {
		assert!(build_output_path("..", "bin").is_err());
	}

	#[test]
	fn test_read_corpus_skips_blank_lines() {
		let path = std::env::temp_dir().join(format!("ngram-char-io-{}.txt", std::process::id()));
		fs::write(&path, "alice\r\n\n  bob \ncarol\n").unwrap();

		let words = read_corpus(&path).unwrap();
		fs::remove_file(&path).unwrap();

		assert_eq!(words, vec!["alice", "bob", "carol"]);
	}
}
