//! Word-level Markov chain text generation library.
//!
//! This crate provides a trigram text generator including:
//! - Whitespace tokenization of raw text
//! - A Markov model keyed on the two most recent words
//! - Model construction with an end-of-text sentinel
//! - Bounded, reproducible text generation
//!
//! ```
//! use wordchain_core::{Generator, ModelBuilder};
//!
//! let mut model = ModelBuilder::build_from_text("the cat sat on the mat");
//! let text = Generator::from_seed(7).generate(&mut model, 50)?;
//! assert_eq!(text, "the cat sat on the mat");
//! # Ok::<(), wordchain_core::MarkovError>(())
//! ```

/// Core model and generation logic.
pub mod model;

/// Whitespace tokenizer.
pub mod tokenizer;

/// Error type shared by the crate.
pub mod error;

/// I/O utilities (reading source text).
///
/// Not exposed
pub(crate) mod io;

pub use error::{MarkovError, Result};
pub use model::builder::ModelBuilder;
pub use model::generation_input::{DEFAULT_MAX_WORDS, GenerationInput, SeedMode};
pub use model::generator::{Generation, Generator, generate};
pub use model::markov_model::MarkovModel;
pub use model::state::{State, Token, Word};
pub use model::transition_table::TransitionTable;
pub use tokenizer::tokenize;
