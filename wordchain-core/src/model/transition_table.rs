use std::collections::HashMap;

use super::state::{State, Token};

/// Learned history of a trigram chain.
///
/// Maps every `State` seen during training to the ordered list of tokens that
/// followed it. Duplicates are kept on purpose: a token recorded `k` times in a
/// list of `m` entries is sampled with probability `k / m`.
///
/// ## Invariants
/// - Entries are never removed and lists never shrink
/// - Every list holds at least one token
#[derive(Clone, Debug, Default)]
pub struct TransitionTable {
	entries: HashMap<State, Vec<Token>>,
	transitions: usize,
}

impl TransitionTable {
	/// Records `next` as a continuation of `state`.
	///
	/// - If the state already has continuations, `next` is appended.
	/// - Otherwise a new one-element list is created.
	pub(crate) fn record(&mut self, state: &State, next: Token) {
		match self.entries.get_mut(state) {
			Some(continuations) => continuations.push(next),
			None => {
				self.entries.insert(state.clone(), vec![next]);
			}
		}
		self.transitions += 1;
	}

	/// Returns the recorded continuations of `state`, in insertion order.
	pub fn continuations(&self, state: &State) -> Option<&[Token]> {
		self.entries.get(state).map(Vec::as_slice)
	}

	/// Number of distinct states with at least one continuation.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Total number of recorded transitions, duplicates included.
	pub fn transition_count(&self) -> usize {
		self.transitions
	}

	/// Iterates over every state and its continuations (arbitrary order).
	pub fn iter(&self) -> impl Iterator<Item = (&State, &[Token])> {
		self.entries.iter().map(|(k, v)| (k, v.as_slice()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn record_keeps_duplicates_in_order() {
		let mut table = TransitionTable::default();
		let state = State::new("the".into(), "man".into());
		for word in ["ate", "ran", "hit", "ran"] {
			table.record(&state, word.into());
		}

		let expected: Vec<Token> =
			["ate", "ran", "hit", "ran"].into_iter().map(Token::from).collect();
		assert_eq!(table.continuations(&state), Some(expected.as_slice()));
		assert_eq!(table.len(), 1);
		assert_eq!(table.transition_count(), 4);
	}

	#[test]
	fn unknown_state_has_no_continuations() {
		let table = TransitionTable::default();
		assert!(table.is_empty());
		assert_eq!(table.continuations(&State::initial()), None);
	}
}
