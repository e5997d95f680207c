//! Attribute swizzling.
//!
//! A host exposes named fields through [`Lookup`]. When a requested name is
//! not a field itself, a [`Swizzler`] decomposes it into known fields and
//! aggregates their values:
//!
//! ```text
//! v.x = 1, v.y = 2, v.z = 3
//!
//! "yzx"  ──▶ [y, z, x]  ──▶ Vector(y=2, z=3, x=1)
//! "x"    ──▶ exact       ──▶ 1
//! "q"    ──▶ UnknownAttribute
//! ```
//!
//! Aggregated results are [`SwizzledTuple`]s: immutable records with a
//! declared field set and an arrangement that may repeat fields. They can be
//! swizzled again. Tuple types can also be declared directly with
//! [`SwizzledTupleType::builder`].

extern crate self as swizzle;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod tuple;

#[cfg(test)]
mod tests;

pub use api::{Access, Assign, Companion, Lookup, Options, ResultKind, StaticLookup, Swizzle, Swizzler};
pub use engine::{DEFAULT_TYPE_NAME, Mode, NoMatch, Resolver, Separator, Swizzled, Trie};
pub use error::{DeclarationFault, ResolveError, Result, SwizzleError};
pub use tuple::{IntoFieldNames, SwizzledTuple, SwizzledTupleType, TupleBuilder, TupleLayout, swizzledtuple};

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
}
