//! Resolution engine.
//!
//! The engine answers one question: given a host and an attribute name the
//! host does not define, which fields does the name refer to, and what should
//! reading (or writing) it produce?
//!
//! ## How the parts work together
//!
//! ```text
//! Options ── Swizzler::new ──▶ Resolver { Mode }          (resolver.rs)
//!                                 │   Separator          (separator.rs)
//!                                 │   Whitelist(Trie)    (trie.rs)
//!                                 │   Dynamic
//!                                 ▼
//! host.lookup(name) ─miss─▶ resolve ─▶ tokens ─┬─▶ aggregate (aggregate.rs)
//!                                              │     └─ layouts interned in
//!                                              │        registry.rs
//!                                              └─▶ write     (assign.rs)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `separator.rs`: parses and applies literal and fixed-width separators.
//! - `trie.rs`: greedy longest-prefix tokenization over a whitelist.
//! - `resolver.rs`: the exact-match check plus the three matching modes.
//! - `aggregate.rs`: turns tokens into a value, a plain sequence or a tuple.
//! - `registry.rs`: memoizes tuple layouts so equal requests share a type.
//! - `assign.rs`: swizzled write-back with arity and conflict checks.
//!
//! ## Debugging
//!
//! Resolution emits `tracing` events: `trace` per resolved name, `debug` for
//! layout construction and assignments. Install any subscriber to see them.

#[path = "engine/aggregate.rs"]
mod aggregate;
#[path = "engine/assign.rs"]
mod assign;
#[path = "engine/registry.rs"]
pub(crate) mod registry;
#[path = "engine/resolver.rs"]
mod resolver;
#[path = "engine/separator.rs"]
mod separator;
#[path = "engine/trie.rs"]
mod trie;

pub use aggregate::{DEFAULT_TYPE_NAME, Swizzled};
pub(crate) use aggregate::{aggregate, read};
pub(crate) use assign::write;
pub use resolver::{Mode, Resolver};
pub use separator::Separator;
pub use trie::{NoMatch, Trie};
