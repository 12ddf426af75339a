use log::trace;
use rand::Rng;

use super::state::{State, Token};
use super::transition_table::TransitionTable;
use crate::error::{MarkovError, Result};

/// A simple trigram Markov model over words.
///
/// The current state is the pair of the two words seen most recently.
/// Initially the state is `(∅, ∅)` since no word has been seen. Observing
/// "The man ate the pasta" walks the model through
/// `(∅, ∅)`, `(∅, The)`, `(The, man)`, `(man, ate)`, `(ate, the)`, `(the, pasta)`.
///
/// # Responsibilities
/// - Record observed words in the transition table (training)
/// - Sample the next word from the table and move to the next state (generation)
/// - Reset the current state without touching what was learned
///
/// # Invariants
/// - Every token passed to `observe` is stored under the state preceding it
/// - The table only grows; `reset` never clears it
#[derive(Clone, Debug, Default)]
pub struct MarkovModel {
	/// Last two tokens processed.
	state: State,
	/// Learned transitions.
	table: TransitionTable,
}

impl MarkovModel {
	/// Creates an empty model in the initial state.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds `word` as a possible continuation of the current state, then
	/// makes it the most recently seen word.
	///
	/// ex: if the state is `(the, man)` and `word` is `ate`, then `ate` is
	/// recorded as a word that can follow "... the man" and the state
	/// becomes `(man, ate)`.
	pub fn observe(&mut self, word: impl Into<Token>) {
		let word = word.into();
		self.table.record(&self.state, word.clone());
		self.transition(word);
	}

	/// Picks a random continuation of the current state, moves to the state
	/// reflecting that choice and returns it.
	///
	/// Every recorded position is equally likely, so a word listed twice is
	/// twice as likely as a word listed once.
	///
	/// # Errors
	/// Returns `MarkovError::MissingContinuation` if the current state has no
	/// recorded continuation. The state is left unchanged in that case.
	pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Token> {
		let choice = match self.table.continuations(&self.state) {
			Some(continuations) if !continuations.is_empty() => {
				continuations[rng.random_range(0..continuations.len())].clone()
			}
			_ => {
				return Err(MarkovError::MissingContinuation { state: self.state.clone() });
			}
		};
		trace!("{} -> {}", self.state, choice);
		self.transition(choice.clone());
		Ok(choice)
	}

	/// Puts the model back in its initial `(∅, ∅)` state.
	///
	/// Learned transitions are kept, so the model can be trained further or
	/// used for a fresh generation run.
	pub fn reset(&mut self) {
		self.state = State::initial();
	}

	/// Current state (last two tokens).
	pub fn state(&self) -> &State {
		&self.state
	}

	pub fn table(&self) -> &TransitionTable {
		&self.table
	}

	/// Continuations available from the current state.
	pub fn continuations(&self) -> Option<&[Token]> {
		self.table.continuations(&self.state)
	}

	/// Returns `true` if nothing has been observed yet.
	pub fn is_empty(&self) -> bool {
		self.table.is_empty()
	}

	fn transition(&mut self, next: Token) {
		self.state = self.state.advanced(next);
	}
}
