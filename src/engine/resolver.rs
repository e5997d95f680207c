//! Compound-name resolution.
//!
//! A [`Resolver`] turns a request such as `"yzx"` into the ordered list of
//! field names it refers to. Every strategy runs the same two stages:
//!
//! ```text
//! name ──▶ exists(name)? ──yes──▶ [name]            (exact match wins)
//!              │
//!              no
//!              ▼
//!          Mode::Separator ── split, check each part
//!          Mode::Whitelist ── trie longest-match, re-check each token
//!          Mode::Dynamic   ── longest substring that exists, repeat
//! ```
//!
//! The resolver only answers "which names"; fetching values is the
//! aggregator's job (`aggregate.rs`).

use super::separator::Separator;
use super::trie::Trie;
use crate::error::ResolveError;
use std::collections::HashSet;

/// Matching strategy, fixed when the resolver is configured.
#[derive(Debug, Clone)]
pub enum Mode {
    /// Split on a literal delimiter or into fixed-width chunks.
    Separator(Separator),
    /// Greedy longest-prefix tokenization against a known set.
    Whitelist(Trie),
    /// Greedy longest-substring matching by trial lookup on the host.
    Dynamic,
}

impl Mode {
    fn label(&self) -> &'static str {
        match self {
            Mode::Separator(_) => "separator",
            Mode::Whitelist(_) => "whitelist",
            Mode::Dynamic => "dynamic",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Resolver {
    mode: Mode,
    /// Components allowed in separator mode. `None` allows any existing name.
    allowed: Option<HashSet<String>>,
}

impl Resolver {
    pub fn new(mode: Mode) -> Self {
        Resolver { mode, allowed: None }
    }

    /// Whitelist resolver over `names`.
    pub fn whitelist<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(Mode::Whitelist(names.into_iter().collect()))
    }

    /// Separator resolver whose parts must also belong to `names`.
    pub fn separator_within<I, S>(separator: Separator, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed = names.into_iter().map(|n| n.as_ref().to_string()).collect();
        Resolver { mode: Mode::Separator(separator), allowed: Some(allowed) }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// The literal or width separator, in separator mode.
    pub fn separator(&self) -> Option<&Separator> {
        match &self.mode {
            Mode::Separator(sep) => Some(sep),
            _ => None,
        }
    }

    /// Resolve `name` into field names for which `exists` holds.
    ///
    /// Tokens borrow from `name` or from the resolver's trie.
    pub fn resolve<'a, F>(&'a self, name: &'a str, exists: F) -> Result<Vec<&'a str>, ResolveError>
    where
        F: Fn(&str) -> bool,
    {
        if exists(name) {
            tracing::trace!(name, "exact match");
            return Ok(vec![name]);
        }
        if name.is_empty() {
            return Err(ResolveError::UnknownComponent(String::new()));
        }

        let tokens = match &self.mode {
            Mode::Separator(sep) => self.resolve_separated(sep, name, &exists)?,
            Mode::Whitelist(trie) => resolve_whitelisted(trie, name, &exists)?,
            Mode::Dynamic => resolve_dynamic(name, &exists)?,
        };
        tracing::trace!(name, mode = self.mode.label(), ?tokens, "resolved");
        Ok(tokens)
    }

    fn resolve_separated<'a>(
        &self,
        sep: &Separator,
        name: &'a str,
        exists: &impl Fn(&str) -> bool,
    ) -> Result<Vec<&'a str>, ResolveError> {
        let parts = sep.split(name);
        for part in &parts {
            if let Some(allowed) = &self.allowed {
                if !allowed.contains(*part) {
                    return Err(ResolveError::NotWhitelisted(part.to_string()));
                }
            }
            if !exists(part) {
                return Err(ResolveError::UnknownComponent(part.to_string()));
            }
        }
        Ok(parts)
    }
}

fn resolve_whitelisted<'a>(
    trie: &'a Trie,
    name: &str,
    exists: &impl Fn(&str) -> bool,
) -> Result<Vec<&'a str>, ResolveError> {
    let tokens = trie.longest_match_tokenize(name).map_err(|e| ResolveError::UnknownSubsequence(e.remainder))?;
    // The whitelist may name fields the host does not actually have.
    if let Some(missing) = tokens.iter().find(|t| !exists(t)) {
        return Err(ResolveError::UnknownSubsequence(missing.to_string()));
    }
    Ok(tokens)
}

fn resolve_dynamic<'a>(name: &'a str, exists: &impl Fn(&str) -> bool) -> Result<Vec<&'a str>, ResolveError> {
    let mut tokens = Vec::new();
    let mut cursor = 0;
    while cursor < name.len() {
        let rest = &name[cursor..];
        // Candidate ends, longest first.
        let mut ends = rest.char_indices().map(|(idx, ch)| idx + ch.len_utf8()).rev();
        let Some(end) = ends.find(|&end| exists(&rest[..end])) else {
            return Err(ResolveError::NoMatchingSubstring(rest.to_string()));
        };
        tokens.push(&rest[..end]);
        cursor += end;
    }
    Ok(tokens)
}
