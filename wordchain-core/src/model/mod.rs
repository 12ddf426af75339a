//! Trigram Markov chain over words.
//!
//! This module provides:
//! - Tokens and chain states (`Token`, `State`)
//! - The learned transition table (`TransitionTable`)
//! - The trainable state machine (`MarkovModel`)
//! - Model construction from text (`ModelBuilder`)
//! - Generation of bounded text (`Generator`, `GenerationInput`)

/// Text generation on top of a trained model.
///
/// Owns the random source and stops on the end-of-text sentinel
/// or on the word limit.
pub mod generator;

/// Generation parameters: word limit and seeding strategy.
pub mod generation_input;

/// Construction of trained models from tokens, text, readers and files.
pub mod builder;

/// The trigram state machine (`observe`, `advance`, `reset`).
pub mod markov_model;

/// Word tokens and the two-word chain state.
pub mod state;

/// Mapping from states to their observed continuations.
pub mod transition_table;
