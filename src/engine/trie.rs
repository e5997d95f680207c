//! Prefix tree over a fixed vocabulary of field names.
//!
//! The trie is built once from a whitelist and is read-only afterwards. Its
//! only job is greedy longest-prefix tokenization:
//!
//! ```text
//! vocabulary: a, aa, aaa
//! input:      a a a a a
//!             └─aaa─┘└aa┘   -> ["aaa", "aa"]
//! ```
//!
//! ## Greedy-only policy
//!
//! At every cursor position the deepest terminal reachable from the root is
//! taken, and there is no backtracking across tokens. With a vocabulary such
//! as `{ab, abc, cd}` the input `"abcd"` fails: `abc` is consumed first and
//! the remaining `"d"` matches nothing, even though `ab` + `cd` would have
//! covered the input.

use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    /// Field name ending at this node, if any.
    terminal: Option<String>,
}

/// Greedy longest-match tokenizer over a set of names.
#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

/// Tokenization stopped at a position no stored name prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoMatch {
    /// Unconsumed suffix of the input, starting at the failing cursor.
    pub remainder: String,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `name`, creating nodes as needed. Re-inserting is a no-op and
    /// the empty name is ignored.
    pub fn insert(&mut self, name: &str) {
        if name.is_empty() {
            return;
        }
        let mut node = &mut self.root;
        for ch in name.chars() {
            node = node.children.entry(ch).or_default();
        }
        if node.terminal.is_none() {
            node.terminal = Some(name.to_string());
            self.len += 1;
        }
    }

    /// Number of distinct names stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True if `name` was inserted.
    pub fn contains(&self, name: &str) -> bool {
        let mut node = &self.root;
        for ch in name.chars() {
            match node.children.get(&ch) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node.terminal.is_some()
    }

    /// Longest stored name that prefixes `input`, with its byte length.
    fn longest_prefix<'t>(&'t self, input: &str) -> Option<(&'t str, usize)> {
        let mut node = &self.root;
        let mut best = None;
        for (idx, ch) in input.char_indices() {
            match node.children.get(&ch) {
                Some(next) => node = next,
                None => break,
            }
            if let Some(name) = node.terminal.as_deref() {
                best = Some((name, idx + ch.len_utf8()));
            }
        }
        best
    }

    /// Split `input` into stored names, longest prefix first.
    ///
    /// Returned tokens borrow the trie's own copies of the names.
    pub fn longest_match_tokenize<'t>(&'t self, input: &str) -> Result<Vec<&'t str>, NoMatch> {
        let mut tokens = Vec::new();
        let mut cursor = 0;
        while cursor < input.len() {
            let rest = &input[cursor..];
            let Some((name, consumed)) = self.longest_prefix(rest) else {
                return Err(NoMatch { remainder: rest.to_string() });
            };
            tokens.push(name);
            cursor += consumed;
        }
        Ok(tokens)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        for name in iter {
            trie.insert(name.as_ref());
        }
        trie
    }
}
