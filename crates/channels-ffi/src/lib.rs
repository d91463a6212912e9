/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/swamp/swamp
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */

//! C ABI for [`timber_channels::write_stderr`].
//!
//! A host runtime links the `cdylib` and calls [`timber_prerr_native`] with its string value.
//! Nothing is returned to the host. Rejected pointers and failed writes are only traced.

use std::ffi::{CStr, c_char};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoundaryError {
    #[error("null text pointer")]
    NullText,
    #[error("null text pointer with length {0}")]
    NullTextWithLength(usize),
}

/// Borrows the bytes of a NUL-terminated string, without the terminator.
///
/// # Errors
/// [`BoundaryError::NullText`] if `text` is null.
///
/// # Safety
/// A non-null `text` must point to a NUL-terminated string that stays valid and unmodified for `'a`.
pub unsafe fn text_from_c_str<'a>(text: *const c_char) -> Result<&'a [u8], BoundaryError> {
    if text.is_null() {
        return Err(BoundaryError::NullText);
    }

    Ok(unsafe { CStr::from_ptr(text) }.to_bytes())
}

/// Borrows `len` bytes starting at `text`. A null `text` with `len == 0` is the empty string.
///
/// # Errors
/// [`BoundaryError::NullTextWithLength`] if `text` is null and `len` is not zero.
///
/// # Safety
/// A non-null `text` must be valid for reads of `len` bytes for `'a`.
pub unsafe fn text_from_raw_parts<'a>(
    text: *const u8,
    len: usize,
) -> Result<&'a [u8], BoundaryError> {
    if text.is_null() {
        return if len == 0 {
            Ok(&[])
        } else {
            Err(BoundaryError::NullTextWithLength(len))
        };
    }

    Ok(unsafe { std::slice::from_raw_parts(text, len) })
}

/// Writes a NUL-terminated string to standard error, up to but not including the terminator.
///
/// # Safety
/// See [`text_from_c_str`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn timber_prerr_native(text: *const c_char) {
    match unsafe { text_from_c_str(text) } {
        Ok(bytes) => timber_channels::write_stderr(bytes),
        Err(err) => debug!(%err, "rejected stderr text"),
    }
}

/// Writes exactly `len` bytes to standard error. Embedded NULs are written too.
///
/// # Safety
/// See [`text_from_raw_parts`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn timber_prerr_bytes(text: *const u8, len: usize) {
    match unsafe { text_from_raw_parts(text, len) } {
        Ok(bytes) => timber_channels::write_stderr(bytes),
        Err(err) => debug!(%err, "rejected stderr text"),
    }
}
