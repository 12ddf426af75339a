use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::model::state::State;

/// Result type used throughout the crate.
pub type Result<T, E = MarkovError> = std::result::Result<T, E>;

/// Failures reported by model construction and generation.
#[derive(Debug, Error)]
pub enum MarkovError {
	/// `advance` was called on a state with no recorded continuation.
	///
	/// Happens when the model was never built through `ModelBuilder`,
	/// or when a model is walked again without being reset first.
	#[error("no continuation recorded for state {state}")]
	MissingContinuation {
		/// The state the model was in when sampling failed.
		state: State,
	},

	/// The source text could not be read.
	#[error("source text unavailable{}: {source}", display_path(.path))]
	SourceUnavailable {
		/// File that failed to open, `None` for generic readers.
		path: Option<PathBuf>,
		source: io::Error,
	},
}

impl MarkovError {
	/// Wraps an I/O error, attaching the offending path when known.
	pub fn source_unavailable(source: io::Error, path: Option<PathBuf>) -> Self {
		Self::SourceUnavailable { path, source }
	}
}

fn display_path(path: &Option<PathBuf>) -> String {
	match path {
		Some(p) => format!(" ({})", p.display()),
		None => String::new(),
	}
}
