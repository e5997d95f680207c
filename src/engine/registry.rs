//! Memoized layout construction.
//!
//! Aggregation and slicing create tuple types on the fly. Building a layout
//! means allocating names, an index and a resolver (possibly a trie), so
//! layouts are interned here and handed out as `Arc`s: two identical swizzle
//! requests share one type.
//!
//! The map holds `Weak` references only. A layout lives as long as some type
//! or instance uses it; dead entries are pruned whenever a new layout is
//! inserted, so caller-chosen names cannot grow the map without bound.
//!
//! The key is the full identity of a layout: type name, fields, arrangement
//! and separator. Layouts are immutable, so sharing never leaks state between
//! callers.

use super::separator::Separator;
use crate::tuple::TupleLayout;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, Weak};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct LayoutKey {
    pub type_name: String,
    pub fields: Vec<String>,
    pub arrangement: Vec<String>,
    pub separator: Option<Separator>,
}

static LAYOUTS: Lazy<Mutex<HashMap<LayoutKey, Weak<TupleLayout>>>> = Lazy::new(Default::default);

/// Return the interned layout for `key`, building it if no live one exists.
pub(crate) fn layout(key: LayoutKey) -> Arc<TupleLayout> {
    // A poisoned map still only holds complete layouts.
    let mut layouts = LAYOUTS.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(layout) = layouts.get(&key).and_then(Weak::upgrade) {
        return layout;
    }
    layouts.retain(|_, layout| layout.strong_count() > 0);

    tracing::debug!(
        type_name = %key.type_name,
        fields = ?key.fields,
        arrangement = ?key.arrangement,
        "building tuple layout"
    );
    let layout = Arc::new(TupleLayout::new(
        key.type_name.clone(),
        key.fields.clone(),
        key.arrangement.clone(),
        key.separator.clone(),
    ));
    layouts.insert(key, Arc::downgrade(&layout));
    layout
}

#[cfg(test)]
fn is_cached(key: &LayoutKey) -> bool {
    LAYOUTS.lock().unwrap_or_else(PoisonError::into_inner).contains_key(key)
}

/// Layout whose fields are the first occurrences of `arrangement`.
pub(crate) fn layout_for_arrangement<S: AsRef<str>>(
    type_name: &str,
    arrangement: &[S],
    separator: Option<&Separator>,
) -> Arc<TupleLayout> {
    let mut fields: Vec<String> = Vec::new();
    for name in arrangement {
        if !fields.iter().any(|f| f == name.as_ref()) {
            fields.push(name.as_ref().to_string());
        }
    }
    layout(LayoutKey {
        type_name: type_name.to_string(),
        fields,
        arrangement: arrangement.iter().map(|n| n.as_ref().to_string()).collect(),
        separator: separator.cloned(),
    })
}
