/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/swamp/swamp
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */
use crate::try_write_stderr;
use std::fmt::{self, Write as FmtWrite};

/// `fmt::Write` that sends every string slice straight to standard error.
///
/// Useful for hosts that take a `Box<dyn fmt::Write>` as their error output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrWriter;

impl FmtWrite for StderrWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        try_write_stderr(s).map_err(|_| fmt::Error)
    }
}
