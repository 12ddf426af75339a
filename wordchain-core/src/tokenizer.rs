use crate::model::state::Token;

/// Lazily splits `text` into word tokens.
///
/// Any run of whitespace is a single separator, so no empty token is ever
/// produced and the sentinel can only come from the builder.
pub fn words(text: &str) -> impl Iterator<Item = Token> + '_ {
	text.split_whitespace().map(Token::from)
}

/// Splits `text` into an ordered list of word tokens.
///
/// Empty or all-whitespace text gives an empty list.
pub fn tokenize(text: &str) -> Vec<Token> {
	words(text).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn as_words(tokens: &[Token]) -> Vec<&str> {
		tokens.iter().filter_map(Token::as_word).collect()
	}

	#[test]
	fn splits_on_spaces() {
		let tokens = tokenize("The man ate the pasta");
		assert_eq!(as_words(&tokens), ["The", "man", "ate", "the", "pasta"]);
	}

	#[test]
	fn collapses_consecutive_whitespace() {
		let tokens = tokenize("  a \t b\n\n  c  \r\n");
		assert_eq!(tokens.len(), 3);
		assert_eq!(as_words(&tokens), ["a", "b", "c"]);
		assert!(tokens.iter().all(|t| !t.is_sentinel()));
	}

	#[test]
	fn empty_text_has_no_tokens() {
		assert!(tokenize("").is_empty());
		assert!(tokenize(" \n\t ").is_empty());
	}

	#[test]
	fn punctuation_stays_attached() {
		assert_eq!(as_words(&tokenize("Hello, world!")), ["Hello,", "world!"]);
	}
}
