//! Output sink.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

/// Buffer size for the output file.
const SINK_BUFFER_BYTES: usize = 256 * 1024;

/// Create (or truncate) the output file behind a write buffer.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created.
pub fn open_sink(path: &Path) -> io::Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::with_capacity(SINK_BUFFER_BYTES, file))
}
