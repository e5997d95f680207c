//! Token aggregation.
//!
//! Once a name is resolved into tokens, the aggregator fetches their values
//! from the host and decides the result shape:
//!
//! ```text
//! ["x"]             ──▶ Swizzled::Value(x)                  (transparent)
//! ["y","x","y"] ─┬─▶ ResultKind::Plain ─▶ Swizzled::Plain([y, x, y])
//!                └─▶ ResultKind::Tuple ─▶ Swizzled::Tuple(Host(y=.., x=.., y=..))
//!                                          fields: y x   arrangement: y x y
//! ```

use super::registry;
use super::resolver::Resolver;
use super::separator::Separator;
use crate::api::{Lookup, ResultKind};
use crate::error::{Result, SwizzleError};
use crate::tuple::SwizzledTuple;

/// Fallback type name for hosts that do not report one.
pub const DEFAULT_TYPE_NAME: &str = "swizzledtuple";

/// Result of a swizzled read.
#[derive(Debug, Clone, PartialEq)]
pub enum Swizzled<V> {
    /// A single resolved field, returned as is.
    Value(V),
    /// Several fields, as a swizzlable tuple.
    Tuple(SwizzledTuple<V>),
    /// Several fields, as a plain ordered sequence.
    Plain(Box<[V]>),
}

impl<V> Swizzled<V> {
    /// Values in request order; a single value is a one-element slice.
    pub fn as_slice(&self) -> &[V] {
        match self {
            Swizzled::Value(value) => std::slice::from_ref(value),
            Swizzled::Tuple(tuple) => tuple.as_slice(),
            Swizzled::Plain(values) => values,
        }
    }

    pub fn into_value(self) -> Option<V> {
        match self {
            Swizzled::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_tuple(self) -> Option<SwizzledTuple<V>> {
        match self {
            Swizzled::Tuple(tuple) => Some(tuple),
            _ => None,
        }
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Swizzled::Value(_))
    }
}

/// Two-stage read: the host's own lookup first, then `resolver`.
pub(crate) fn read<H>(
    resolver: &Resolver,
    host: &H,
    name: &str,
    kind: ResultKind,
    type_name: &str,
) -> Result<Swizzled<H::Value>>
where
    H: Lookup + ?Sized,
{
    if let Some(value) = host.lookup(name) {
        return Ok(Swizzled::Value(value));
    }
    let tokens = resolver.resolve(name, |n| host.lookup(n).is_some()).map_err(|e| SwizzleError::unknown(name, e))?;
    aggregate(host, &tokens, kind, type_name, resolver.separator())
}

/// Gather the values behind `tokens` into the requested shape.
pub(crate) fn aggregate<H>(
    host: &H,
    tokens: &[&str],
    kind: ResultKind,
    type_name: &str,
    separator: Option<&Separator>,
) -> Result<Swizzled<H::Value>>
where
    H: Lookup + ?Sized,
{
    let fetch = |token: &str| {
        host.lookup(token).ok_or_else(|| SwizzleError::UnknownAttribute { name: token.to_string(), cause: None })
    };

    if let [token] = tokens {
        return fetch(*token).map(Swizzled::Value);
    }

    match kind {
        ResultKind::Plain => {
            let values = tokens.iter().map(|t| fetch(*t)).collect::<Result<Vec<_>>>()?;
            Ok(Swizzled::Plain(values.into_boxed_slice()))
        }
        ResultKind::Tuple => {
            let layout = registry::layout_for_arrangement(type_name, tokens, separator);
            let values = layout.fields().iter().map(|f| fetch(f.as_str())).collect::<Result<Vec<_>>>()?;
            let stored = layout.arrange(&values)?;
            Ok(Swizzled::Tuple(SwizzledTuple::from_parts(layout, stored)))
        }
    }
}
