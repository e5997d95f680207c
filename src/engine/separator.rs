//! Separator-driven splitting.
//!
//! A separator is configured as a string and validated once:
//!
//! - `"_"`, `"and"`, `"0"`: any non-empty run of letters, digits and
//!   underscores is a literal delimiter (`"x_y_z"` -> `x`, `y`, `z`).
//! - `"+N"` with `N > 0`: fixed-width chunks of `N` characters
//!   (`"+2"` on `"abcd"` -> `ab`, `cd`). A trailing short chunk is kept and
//!   simply fails lookup later.

use crate::error::{Result, SwizzleError};
use std::fmt;
use std::num::NonZeroUsize;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Separator {
    /// Split on a literal delimiter.
    Literal(String),
    /// Split into chunks of a fixed number of characters.
    Width(NonZeroUsize),
}

impl Separator {
    /// Validate and parse a separator specification.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || SwizzleError::InvalidSeparator { separator: text.to_string() };

        if let Some(caps) = regex!(r"^\+([0-9]+)$").captures(text) {
            let width: usize = caps[1].parse().map_err(|_| invalid())?;
            return NonZeroUsize::new(width).map(Separator::Width).ok_or_else(invalid);
        }
        if regex!(r"^[\p{L}\p{N}_]+$").is_match(text) {
            return Ok(Separator::Literal(text.to_string()));
        }
        Err(invalid())
    }

    /// Fixed-width separator of `width` characters.
    pub fn width(width: usize) -> Option<Self> {
        NonZeroUsize::new(width).map(Separator::Width)
    }

    /// Split `input` into its parts. Every part is a subslice of `input`.
    pub fn split<'a>(&self, input: &'a str) -> Vec<&'a str> {
        match self {
            Separator::Literal(delim) => input.split(delim.as_str()).collect(),
            Separator::Width(width) => chunks(input, width.get()),
        }
    }
}

fn chunks(input: &str, width: usize) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut count = 0;
    for (idx, _) in input.char_indices() {
        if count == width {
            parts.push(&input[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    if start < input.len() {
        parts.push(&input[start..]);
    }
    parts
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Separator::Literal(delim) => f.write_str(delim),
            Separator::Width(width) => write!(f, "+{width}"),
        }
    }
}
