/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/swamp/swamp
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */

//! Writes caller supplied text to the standard error stream of the current process.
//!
//! The bytes reach the stream exactly as given: no newline, no prefix and no encoding check.
//! [`write_stderr`] never reports failures. Use [`try_write_stderr`] when the outcome matters.

mod err_wrt;
pub mod prelude;

pub use err_wrt::StderrWriter;

use std::io::{self, Write};
use tracing::trace;

/// Writes the exact bytes of `text` to standard error.
///
/// A failed write (closed descriptor, broken pipe) is dropped, the caller gets no feedback.
pub fn write_stderr(text: impl AsRef<[u8]>) {
    if let Err(err) = try_write_stderr(text) {
        trace!(?err, "dropped stderr write");
    }
}

/// Same as [`write_stderr`], but returns the error from the platform write.
///
/// # Errors
/// Whatever the underlying write to file descriptor 2 reports.
pub fn try_write_stderr(text: impl AsRef<[u8]>) -> io::Result<()> {
    write_to(&mut io::stderr(), text.as_ref())
}

/// Writes all of `bytes` to `sink` and flushes it.
///
/// An empty `bytes` results in no write at all.
///
/// # Errors
/// Propagates the first error from `sink`.
pub fn write_to<W: Write + ?Sized>(sink: &mut W, bytes: &[u8]) -> io::Result<()> {
    if bytes.is_empty() {
        return Ok(());
    }

    sink.write_all(bytes)?;
    sink.flush()
}
