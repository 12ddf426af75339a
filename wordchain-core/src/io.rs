use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::{MarkovError, Result};

/// Reads a whole text file into memory.
///
/// Bytes that are not valid UTF-8 are replaced with `U+FFFD`, so a file in
/// another encoding still yields its whitespace-delimited words.
///
/// # Errors
/// `MarkovError::SourceUnavailable` carrying the path if the file cannot be
/// opened or read.
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> Result<String> {
	let path = filename.as_ref();
	let unavailable = |e: io::Error| MarkovError::source_unavailable(e, Some(path.to_path_buf()));
	let file = File::open(path).map_err(unavailable)?;
	read_bytes(file).map_err(unavailable)
}

/// Reads everything left in `reader` into memory, decoding it like `read_file`.
pub(crate) fn read_stream<R: Read>(reader: R) -> Result<String> {
	read_bytes(reader).map_err(|e| MarkovError::source_unavailable(e, None))
}

fn read_bytes<R: Read>(mut reader: R) -> io::Result<String> {
	let mut bytes = Vec::new();
	reader.read_to_end(&mut bytes)?;
	Ok(String::from_utf8_lossy(&bytes).into_owned())
}
