//! Shared, value-independent metadata of a swizzled tuple type.
//!
//! ```text
//! fields:       x  y  z            (declared order, unique)
//! arrangement:  z  x  y  z         (stored order, may repeat)
//! index:        2  0  1  2         (arrangement slot -> field index)
//! slots:        x->1 y->2 z->0     (field -> first slot)
//! ```
//!
//! ## Invariants
//!
//! - Every field appears at least once in the arrangement, so `slots` covers
//!   the whole field set. Public constructors check this; slice-derived
//!   layouts hold it by construction (their fields are the deduplicated
//!   arrangement).
//! - A layout never changes once built. Instances share it through `Arc`.

use crate::engine::{Mode, Resolver, Separator};
use crate::error::{Result, SwizzleError};
use std::collections::HashMap;

#[derive(Debug)]
pub struct TupleLayout {
    type_name: String,
    fields: Vec<String>,
    arrangement: Vec<String>,
    index: Vec<usize>,
    slots: HashMap<String, usize>,
    separator: Option<Separator>,
    resolver: Resolver,
}

impl TupleLayout {
    /// Build a layout from already validated names.
    ///
    /// Arrangement entries that are not fields are skipped; callers check
    /// coverage before getting here.
    pub(crate) fn new(
        type_name: String,
        fields: Vec<String>,
        arrangement: Vec<String>,
        separator: Option<Separator>,
    ) -> Self {
        let positions: HashMap<&str, usize> = fields.iter().enumerate().map(|(i, f)| (f.as_str(), i)).collect();
        let mut index = Vec::with_capacity(arrangement.len());
        let mut slots = HashMap::new();
        for name in &arrangement {
            if let Some(&field) = positions.get(name.as_str()) {
                slots.entry(name.clone()).or_insert(index.len());
                index.push(field);
            }
        }
        let resolver = Resolver::new(default_mode(&fields, separator.as_ref()));

        TupleLayout { type_name, fields, arrangement, index, slots, separator, resolver }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Declared field names, unique, in construction order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Stored order of values, possibly with repeats.
    pub fn arrangement(&self) -> &[String] {
        &self.arrangement
    }

    pub fn separator(&self) -> Option<&Separator> {
        self.separator.as_ref()
    }

    /// Resolver scoped to this layout's own fields.
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// First arrangement slot holding `field`.
    pub fn slot(&self, field: &str) -> Option<usize> {
        self.slots.get(field).copied()
    }

    /// Every arrangement slot holding `field`.
    pub(crate) fn positions(&self, field: &str) -> Vec<usize> {
        let Some(target) = self.fields.iter().position(|f| f == field) else {
            return Vec::new();
        };
        self.index.iter().enumerate().filter(|&(_, &f)| f == target).map(|(slot, _)| slot).collect()
    }

    /// Reorder field-ordered `values` into arrangement order.
    pub(crate) fn arrange<V: Clone>(&self, values: &[V]) -> Result<Vec<V>> {
        if values.len() != self.fields.len() {
            return Err(SwizzleError::ArgumentCount {
                type_name: self.type_name.clone(),
                expected: self.fields.len(),
                got: values.len(),
            });
        }
        Ok(self.index.iter().map(|&field| values[field].clone()).collect())
    }
}

/// Explicit separator if given, fixed width when every field name has the
/// same length, whitelist over the fields otherwise.
fn default_mode(fields: &[String], separator: Option<&Separator>) -> Mode {
    if let Some(sep) = separator {
        return Mode::Separator(sep.clone());
    }
    let mut lengths = fields.iter().map(|f| f.chars().count());
    if let Some(first) = lengths.next() {
        if lengths.all(|len| len == first) {
            if let Some(sep) = Separator::width(first) {
                return Mode::Separator(sep);
            }
        }
    }
    Mode::Whitelist(fields.iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(fields: &str, arrangement: &str) -> TupleLayout {
        let split = |s: &str| s.split_whitespace().map(str::to_string).collect::<Vec<_>>();
        TupleLayout::new("T".into(), split(fields), split(arrangement), None)
    }

    #[test]
    fn arrangement_index_maps_declared_values() {
        let layout = layout("x y z", "z x y z");
        assert_eq!(layout.arrange(&[1, 2, 3]).unwrap(), vec![3, 1, 2, 3]);
        assert_eq!(layout.slot("z"), Some(0));
        assert_eq!(layout.slot("y"), Some(2));
        assert_eq!(layout.slot("w"), None);
        assert_eq!(layout.positions("z"), vec![0, 3]);
        assert!(layout.positions("w").is_empty());
    }

    #[test]
    fn arrange_checks_count() {
        let layout = layout("x y z", "x y z");
        assert!(matches!(
            layout.arrange(&[1, 2]),
            Err(SwizzleError::ArgumentCount { expected: 3, got: 2, .. })
        ));
    }

    #[test]
    fn mode_follows_field_shapes() {
        assert!(matches!(
            layout("x y z", "x y z").resolver().mode(),
            Mode::Separator(Separator::Width(w)) if w.get() == 1
        ));
        assert!(matches!(
            layout("ab cd", "ab cd").resolver().mode(),
            Mode::Separator(Separator::Width(w)) if w.get() == 2
        ));
        assert!(matches!(layout("a aa aaa", "a aa aaa").resolver().mode(), Mode::Whitelist(_)));

        let sep = Separator::parse("_").unwrap();
        let explicit = TupleLayout::new("T".into(), vec!["x1".into(), "x2".into()], vec!["x1".into()], Some(sep));
        assert!(matches!(explicit.resolver().mode(), Mode::Separator(Separator::Literal(_))));
    }
}
