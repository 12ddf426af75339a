use std::fmt;

/// A single unit of the chain: a word, or the sentinel marker.
///
/// The sentinel plays two roles:
/// - both slots of the initial state hold it (no word seen yet)
/// - it is observed once after the last word of a text (end of text)
///
/// An empty string converts to the sentinel, so the "empty word" and the
/// end marker are always the same value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
	Sentinel,
	Word(Word),
}

/// Text of a non-sentinel token.
///
/// Only built through `Token::from`, so it is never empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Word(String);

impl Word {
	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn into_string(self) -> String {
		self.0
	}
}

impl Token {
	/// Returns `true` for the sentinel marker.
	pub fn is_sentinel(&self) -> bool {
		matches!(self, Token::Sentinel)
	}

	/// Returns the word text, or `None` for the sentinel.
	pub fn as_word(&self) -> Option<&str> {
		match self {
			Token::Sentinel => None,
			Token::Word(w) => Some(w.as_str()),
		}
	}
}

impl From<&str> for Token {
	fn from(word: &str) -> Self {
		Token::from(word.to_owned())
	}
}

impl From<String> for Token {
	fn from(word: String) -> Self {
		if word.is_empty() {
			Token::Sentinel
		} else {
			Token::Word(Word(word))
		}
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Token::Sentinel => f.write_str("∅"),
			Token::Word(w) => write!(f, "{:?}", w.as_str()),
		}
	}
}

/// Represents a state of the trigram chain.
///
/// A `State` is the ordered pair of the two most recently seen tokens.
/// It is the lookup key of the transition table: the derived `Hash` and
/// `Eq` are structural over both slots, so `(a, b)` and `(b, a)` are
/// distinct keys.
///
/// ## Invariants
/// - The initial state is `(Sentinel, Sentinel)`
/// - A state only changes through `advanced`, which shifts `second` into
///   `first` and stores the new token in `second`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct State {
	first: Token,
	second: Token,
}

impl State {
	/// Creates a state from two tokens, oldest first.
	pub fn new(first: Token, second: Token) -> Self {
		Self { first, second }
	}

	/// The state before any word has been seen.
	pub fn initial() -> Self {
		Self::new(Token::Sentinel, Token::Sentinel)
	}

	pub fn first(&self) -> &Token {
		&self.first
	}

	pub fn second(&self) -> &Token {
		&self.second
	}

	/// Returns the state reached after seeing `next`.
	///
	/// ex: `("the", "man")` advanced with `"ate"` is `("man", "ate")`.
	pub(crate) fn advanced(&self, next: Token) -> Self {
		Self::new(self.second.clone(), next)
	}
}

impl Default for State {
	fn default() -> Self {
		Self::initial()
	}
}

impl fmt::Display for State {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {})", self.first, self.second)
	}
}
