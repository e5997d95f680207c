use super::layout::TupleLayout;
use crate::api::{Lookup, ResultKind};
use crate::engine::{self, Swizzled, registry};
use crate::error::{Result, SwizzleError};
use indexmap::IndexMap;
use std::fmt;
use std::ops::{Bound, Index, RangeBounds};
use std::sync::Arc;

/// An immutable tuple whose values are stored in arrangement order.
///
/// Equality compares values only, like plain tuples do.
#[derive(Clone)]
pub struct SwizzledTuple<V> {
    layout: Arc<TupleLayout>,
    values: Box<[V]>,
}

impl<V> SwizzledTuple<V> {
    /// `values` must already be in arrangement order.
    pub(crate) fn from_parts(layout: Arc<TupleLayout>, values: Vec<V>) -> Self {
        debug_assert_eq!(layout.arrangement().len(), values.len());
        SwizzledTuple { layout, values: values.into_boxed_slice() }
    }

    pub fn layout(&self) -> &Arc<TupleLayout> {
        &self.layout
    }

    pub fn type_name(&self) -> &str {
        self.layout.type_name()
    }

    pub fn fields(&self) -> &[String] {
        self.layout.fields()
    }

    pub fn arrangement(&self) -> &[String] {
        self.layout.arrangement()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[V] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.values.iter()
    }

    /// Value at arrangement position `index`.
    pub fn get(&self, index: usize) -> Option<&V> {
        self.values.get(index)
    }

    /// Value of the field `name`.
    pub fn field(&self, name: &str) -> Option<&V> {
        self.layout.slot(name).map(|slot| &self.values[slot])
    }

    pub fn into_values(self) -> Vec<V> {
        self.values.into_vec()
    }
}

impl<V: Clone> SwizzledTuple<V> {
    /// Values in declared field order.
    pub fn field_values(&self) -> Vec<V> {
        self.layout.fields().iter().filter_map(|f| self.field(f)).cloned().collect()
    }

    /// New instance of the same type from values in declared field order.
    pub fn rebuild_from(&self, values: impl IntoIterator<Item = V>) -> Result<Self> {
        let values: Vec<V> = values.into_iter().collect();
        let stored = self.layout.arrange(&values)?;
        Ok(SwizzledTuple::from_parts(Arc::clone(&self.layout), stored))
    }

    /// Copy with some fields replaced. Every slot of a repeated field is
    /// updated.
    pub fn replace<S, I>(&self, overrides: I) -> Result<Self>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (S, V)>,
    {
        let mut values = self.values.to_vec();
        let mut unexpected = Vec::new();
        for (name, value) in overrides {
            let name = name.as_ref();
            let slots = self.layout.positions(name);
            if slots.is_empty() {
                unexpected.push(name.to_string());
                continue;
            }
            for slot in slots {
                values[slot] = value.clone();
            }
        }
        if !unexpected.is_empty() {
            return Err(SwizzleError::UnexpectedFields { names: unexpected });
        }
        Ok(SwizzledTuple::from_parts(Arc::clone(&self.layout), values))
    }

    /// Arrangement names mapped to values. A repeated name keeps its first
    /// position and the value of its last slot.
    pub fn as_dict(&self) -> IndexMap<String, V> {
        let mut dict = IndexMap::with_capacity(self.layout.fields().len());
        for (name, value) in self.layout.arrangement().iter().zip(self.values.iter()) {
            dict.insert(name.clone(), value.clone());
        }
        dict
    }

    /// Sub-tuple over arrangement positions `range`, clamped to the length.
    ///
    /// The result's fields are the distinct names of the sliced arrangement.
    /// There are no negative indices; take the last two values with
    /// `t.slice(t.len().saturating_sub(2)..)`.
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Self {
        let len = self.values.len();
        let start = match range.start_bound() {
            Bound::Included(&i) => i,
            Bound::Excluded(&i) => i.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(len);
        let end = match range.end_bound() {
            Bound::Included(&i) => i.saturating_add(1),
            Bound::Excluded(&i) => i,
            Bound::Unbounded => len,
        }
        .clamp(start, len);

        let names = &self.layout.arrangement()[start..end];
        let layout = registry::layout_for_arrangement(self.type_name(), names, self.layout.separator());
        SwizzledTuple::from_parts(layout, self.values[start..end].to_vec())
    }

    /// Swizzled read over this tuple's own fields.
    pub fn swizzle(&self, name: &str) -> Result<Swizzled<V>> {
        if let Some(value) = self.field(name) {
            return Ok(Swizzled::Value(value.clone()));
        }
        let tokens = self
            .layout
            .resolver()
            .resolve(name, |n| self.layout.slot(n).is_some())
            .map_err(|e| SwizzleError::unknown(name, e))?;
        engine::aggregate(self, &tokens, ResultKind::Tuple, self.type_name(), self.layout.separator())
    }
}

impl<V: Clone> Lookup for SwizzledTuple<V> {
    type Value = V;

    fn lookup(&self, name: &str) -> Option<V> {
        self.field(name).cloned()
    }

    fn host_name(&self) -> Option<&str> {
        Some(self.type_name())
    }
}

impl<V: fmt::Debug> fmt::Debug for SwizzledTuple<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.type_name())?;
        for (i, (name, value)) in self.layout.arrangement().iter().zip(self.values.iter()).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}={value:?}")?;
        }
        f.write_str(")")
    }
}

impl<V: PartialEq> PartialEq for SwizzledTuple<V> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<V: Eq> Eq for SwizzledTuple<V> {}

impl<V: PartialEq> PartialEq<[V]> for SwizzledTuple<V> {
    fn eq(&self, other: &[V]) -> bool {
        *self.values == *other
    }
}

impl<V: PartialEq, const N: usize> PartialEq<[V; N]> for SwizzledTuple<V> {
    fn eq(&self, other: &[V; N]) -> bool {
        *self.values == other[..]
    }
}

impl<V: PartialEq> PartialEq<Vec<V>> for SwizzledTuple<V> {
    fn eq(&self, other: &Vec<V>) -> bool {
        *self.values == other[..]
    }
}

impl<V> Index<usize> for SwizzledTuple<V> {
    type Output = V;

    fn index(&self, index: usize) -> &V {
        &self.values[index]
    }
}

impl<V> IntoIterator for SwizzledTuple<V> {
    type Item = V;
    type IntoIter = std::vec::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_vec().into_iter()
    }
}

impl<'a, V> IntoIterator for &'a SwizzledTuple<V> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
