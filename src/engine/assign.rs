//! Swizzled write-back.
//!
//! `xy = (10, 20)` resolves the target exactly like a read, then writes each
//! distinct field once. Nothing is written unless the whole assignment is
//! consistent:
//!
//! - the value count must equal the token count (`ArityMismatch`);
//! - a field named twice must receive equal values (`ConflictingAssignment`).

use super::resolver::Resolver;
use crate::api::Assign;
use crate::error::{Result, SwizzleError};

pub(crate) fn write<H>(resolver: &Resolver, host: &mut H, name: &str, values: Vec<H::Value>) -> Result<()>
where
    H: Assign + ?Sized,
    H::Value: PartialEq,
{
    let tokens = {
        let reader: &H = host;
        resolver.resolve(name, |n| reader.lookup(n).is_some()).map_err(|e| SwizzleError::unknown(name, e))?
    };

    if tokens.len() != values.len() {
        return Err(SwizzleError::ArityMismatch { target: name.to_string(), expected: tokens.len(), got: values.len() });
    }

    let mut pending: Vec<(&str, H::Value)> = Vec::with_capacity(tokens.len());
    for (token, value) in tokens.iter().copied().zip(values) {
        match pending.iter().find(|(field, _)| *field == token) {
            Some((_, earlier)) if *earlier != value => {
                return Err(SwizzleError::ConflictingAssignment { field: token.to_string() });
            }
            Some(_) => {}
            None => pending.push((token, value)),
        }
    }

    tracing::debug!(name, fields = ?pending.iter().map(|(f, _)| *f).collect::<Vec<_>>(), "swizzled assignment");
    for (field, value) in pending {
        host.set_field(field, value);
    }
    Ok(())
}
