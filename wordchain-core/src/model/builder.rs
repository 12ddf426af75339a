use std::io::Read;
use std::path::Path;

use log::{debug, info};

use super::markov_model::MarkovModel;
use super::state::Token;
use crate::io::{read_file, read_stream};
use crate::tokenizer::{tokenize, words};

/// Builds trained `MarkovModel`s from word sources.
///
/// Every builder entry point:
/// - observes each token in order on a fresh model
/// - observes the sentinel once, so the end of the text is a real transition
///   the generator can land on instead of running off the table
/// - resets the model so generation starts from `(∅, ∅)`
pub struct ModelBuilder;

impl ModelBuilder {
	/// Creates a trained model from an already tokenized sequence.
	pub fn build<I>(tokens: I) -> MarkovModel
	where
		I: IntoIterator,
		I::Item: Into<Token>,
	{
		let mut model = MarkovModel::new();
		let mut observed = 0usize;
		for token in tokens {
			model.observe(token);
			observed += 1;
		}
		debug!("observed {observed} tokens");

		// Add a sentinel at the end of the text
		model.observe(Token::Sentinel);
		model.reset();

		info!(
			"model built: {} states, {} transitions",
			model.table().len(),
			model.table().transition_count()
		);
		model
	}

	/// Tokenizes `text` on whitespace and builds a model from it.
	pub fn build_from_text(text: &str) -> MarkovModel {
		Self::build(words(text))
	}

	/// Reads `reader` to the end and builds a model from its words.
	///
	/// # Errors
	/// `MarkovError::SourceUnavailable` if reading fails. No model is returned
	/// in that case.
	pub fn build_from_reader<R: Read>(reader: R) -> crate::Result<MarkovModel> {
		let text = read_stream(reader)?;
		Ok(Self::build(tokenize(&text)))
	}

	/// Creates a model from the words in the file at `filepath`.
	///
	/// # Errors
	/// `MarkovError::SourceUnavailable` (with the path) if the file is missing
	/// or unreadable.
	pub fn build_from_file<P: AsRef<Path>>(filepath: P) -> crate::Result<MarkovModel> {
		let path = filepath.as_ref();
		debug!("reading source text from {}", path.display());
		let text = read_file(path)?;
		Ok(Self::build_from_text(&text))
	}
}
