use log::debug;
use rand::Rng;
use rand::rngs::StdRng;
use serde::Serialize;

use super::generation_input::SeedMode;
use super::markov_model::MarkovModel;
use super::state::Token;
use crate::error::Result;

/// Outcome of a generation run.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Generation {
	/// Generated words joined by single spaces, no trailing separator.
	pub text: String,
	/// Number of words produced.
	pub words: usize,
	/// `true` if the run stopped on the end-of-text sentinel rather than on
	/// the word limit.
	pub reached_end: bool,
}

/// Drives a trained `MarkovModel` to produce text.
///
/// # Responsibilities
/// - Own the single random source used for every run
/// - Walk the model up to a word limit, stopping early on the sentinel
/// - Join the produced words into output text
///
/// The random source is created once; it is never reseeded between runs, so
/// two consecutive runs on the same model continue the same random stream.
#[derive(Debug)]
pub struct Generator<R = StdRng> {
	rng: R,
}

impl Generator<StdRng> {
	/// Creates a generator seeded according to `seed`.
	pub fn new(seed: SeedMode) -> Self {
		Self { rng: seed.rng() }
	}

	/// Creates a generator with reproducible output.
	pub fn from_seed(seed: u64) -> Self {
		Self::new(SeedMode::Fixed(seed))
	}
}

impl Default for Generator<StdRng> {
	fn default() -> Self {
		Self::new(SeedMode::Entropy)
	}
}

impl<R: Rng> Generator<R> {
	/// Uses a caller supplied random source.
	pub fn with_rng(rng: R) -> Self {
		Self { rng }
	}

	/// Generates up to `max_words` words from `model`.
	///
	/// The model is walked from its current state; models coming out of
	/// `ModelBuilder` start from `(∅, ∅)`. The state is left where the walk
	/// ended, call `MarkovModel::reset` before reusing the model.
	///
	/// # Errors
	/// Propagates `MarkovError::MissingContinuation` from the model. No partial
	/// text is returned.
	pub fn run(&mut self, model: &mut MarkovModel, max_words: usize) -> Result<Generation> {
		let (words, reached_end) = self.walk(model, max_words)?;
		Ok(Generation { text: words.join(" "), words: words.len(), reached_end })
	}

	/// Generates up to `max_words` words, joined by single spaces.
	pub fn generate(&mut self, model: &mut MarkovModel, max_words: usize) -> Result<String> {
		Ok(self.run(model, max_words)?.text)
	}

	/// Generates up to `max_words` words and returns them unjoined.
	pub fn generate_words(
		&mut self,
		model: &mut MarkovModel,
		max_words: usize,
	) -> Result<Vec<String>> {
		Ok(self.walk(model, max_words)?.0)
	}

	/// Advances `model` until the sentinel or the word limit, whichever
	/// comes first.
	fn walk(&mut self, model: &mut MarkovModel, max_words: usize) -> Result<(Vec<String>, bool)> {
		let mut words: Vec<String> = Vec::new();
		let mut reached_end = false;

		for _ in 0..max_words {
			match model.advance(&mut self.rng)? {
				Token::Sentinel => {
					reached_end = true;
					break;
				}
				Token::Word(word) => words.push(word.into_string()),
			}
		}
		debug!("generated {} words (end of text: {reached_end})", words.len());

		Ok((words, reached_end))
	}
}

/// Resets `model` and generates up to `max_words` words with `generator`.
///
/// Keep one `Generator` for a whole session: every call continues its random
/// stream, so repeated calls give independent runs even with a fixed seed.
pub fn generate<R: Rng>(
	generator: &mut Generator<R>,
	model: &mut MarkovModel,
	max_words: usize,
) -> Result<Generation> {
	model.reset();
	generator.run(model, max_words)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::MarkovError;
	use crate::model::builder::ModelBuilder;
	use crate::model::state::State;

	#[test]
	fn single_choice_is_deterministic() {
		let mut model = ModelBuilder::build_from_text("a b a b a b");
		for seed in 0..20 {
			model.reset();
			let text = Generator::from_seed(seed).generate(&mut model, 1).unwrap();
			assert_eq!(text, "a");
		}
	}

	#[test]
	fn empty_model_generates_nothing() {
		let mut model = ModelBuilder::build_from_text("");
		for max_words in [0, 1, 10, 1000] {
			model.reset();
			let generation = Generator::from_seed(1).run(&mut model, max_words).unwrap();
			assert_eq!(generation.text, "");
			assert_eq!(generation.words, 0);
			assert_eq!(generation.reached_end, max_words > 0);
		}
	}

	#[test]
	fn zero_words_leaves_model_untouched() {
		let mut model = ModelBuilder::build_from_text("one two three");
		let generation = Generator::from_seed(1).run(&mut model, 0).unwrap();
		assert_eq!(generation, Generation { text: String::new(), words: 0, reached_end: false });
		assert_eq!(model.state(), &State::initial());
	}

	#[test]
	fn linear_text_is_reproduced_verbatim() {
		let text = "the quick brown fox jumps over the lazy dog";
		let mut model = ModelBuilder::build_from_text(text);
		let generation = Generator::default().run(&mut model, 100).unwrap();
		assert_eq!(generation.text, text);
		assert_eq!(generation.words, 9);
		assert!(generation.reached_end);
	}

	#[test]
	fn word_limit_truncates() {
		let mut model = ModelBuilder::build_from_text("one two three four five");
		let generation = Generator::from_seed(3).run(&mut model, 3).unwrap();
		assert_eq!(generation.text, "one two three");
		assert!(!generation.reached_end);
		assert!(!generation.text.ends_with(' '));
	}

	#[test]
	fn same_seed_same_text() {
		let source = "a b c a b d a b c a b e b c a";
		let mut model = ModelBuilder::build_from_text(source);
		let first = Generator::from_seed(11).generate(&mut model, 40).unwrap();
		model.reset();
		let second = Generator::from_seed(11).generate(&mut model, 40).unwrap();
		assert_eq!(first, second);
	}

	#[test]
	fn untrained_model_is_an_error() {
		let mut model = MarkovModel::new();
		let err = Generator::from_seed(0).generate(&mut model, 5).unwrap_err();
		assert!(matches!(err, MarkovError::MissingContinuation { .. }));
	}

	#[test]
	fn generate_words_matches_text() {
		let mut model = ModelBuilder::build_from_text("x y z");
		let words = Generator::from_seed(5).generate_words(&mut model, 10).unwrap();
		assert_eq!(words, ["x", "y", "z"]);

		let mut empty = ModelBuilder::build_from_text("");
		assert!(Generator::from_seed(5).generate_words(&mut empty, 10).unwrap().is_empty());
	}

	#[test]
	fn generate_resets_first() {
		let mut model = ModelBuilder::build_from_text("red green blue");
		let mut generator = Generator::from_seed(2);
		generator.generate(&mut model, 2).unwrap();
		assert_eq!(model.state(), &State::new("red".into(), "green".into()));

		let generation = generate(&mut generator, &mut model, 10).unwrap();
		assert_eq!(generation.text, "red green blue");
	}

	#[test]
	fn repeated_runs_continue_one_random_stream() {
		let source = "a b c a b d a b e a b c a b d a b e";
		let mut model = ModelBuilder::build_from_text(source);

		let mut generator = Generator::from_seed(1);
		let runs: Vec<String> = (0..20)
			.map(|_| generate(&mut generator, &mut model, 12).unwrap().text)
			.collect();
		assert!(runs.iter().any(|run| run != &runs[0]), "every run was {:?}", runs[0]);

		let mut replay = Generator::from_seed(1);
		for run in &runs {
			assert_eq!(&generate(&mut replay, &mut model, 12).unwrap().text, run);
		}
	}

	#[test]
	fn caller_supplied_rng() {
		use rand::SeedableRng;
		use rand::rngs::SmallRng;

		let mut model = ModelBuilder::build_from_text("up down up down");
		let mut generator = Generator::with_rng(SmallRng::seed_from_u64(4));
		let words = generator.generate_words(&mut model, 2).unwrap();
		assert_eq!(words, ["up", "down"]);
	}

	#[test]
	fn generation_serializes_to_json() {
		let generation = Generation { text: "a b".to_owned(), words: 2, reached_end: true };
		let json = serde_json::to_value(&generation).unwrap();
		assert_eq!(json["text"], "a b");
		assert_eq!(json["words"], 2);
		assert_eq!(json["reached_end"], true);
	}
}
