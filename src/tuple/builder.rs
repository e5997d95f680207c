//! Tuple type construction.

use super::instance::SwizzledTuple;
use super::layout::TupleLayout;
use super::validate;
use crate::engine::Separator;
use crate::engine::registry::{self, LayoutKey};
use crate::error::{Result, SwizzleError};
use indexmap::IndexMap;
use std::sync::Arc;

/// Anything that names a list of fields: `"x y z"`, `"x, y, z"`,
/// `["x", "y", "z"]`, `vec![..]` or a slice of names.
pub trait IntoFieldNames {
    fn into_field_names(self) -> Vec<String>;
}

impl IntoFieldNames for &str {
    fn into_field_names(self) -> Vec<String> {
        validate::split_names(self)
    }
}

impl IntoFieldNames for String {
    fn into_field_names(self) -> Vec<String> {
        validate::split_names(&self)
    }
}

impl<S: AsRef<str>, const N: usize> IntoFieldNames for [S; N] {
    fn into_field_names(self) -> Vec<String> {
        self.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

impl<S: AsRef<str>> IntoFieldNames for Vec<S> {
    fn into_field_names(self) -> Vec<String> {
        self.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

impl<S: AsRef<str>> IntoFieldNames for &[S] {
    fn into_field_names(self) -> Vec<String> {
        self.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

/// Configures a [`SwizzledTupleType`]. See [`SwizzledTupleType::builder`].
#[derive(Debug, Clone)]
pub struct TupleBuilder<V> {
    type_name: String,
    fields: Vec<String>,
    arrangement: Option<Vec<String>>,
    rename: bool,
    defaults: Vec<V>,
    separator: Option<String>,
}

impl<V> TupleBuilder<V> {
    /// Stored order of values. Must mention every field, repeats allowed.
    pub fn arrangement(mut self, names: impl IntoFieldNames) -> Self {
        self.arrangement = Some(names.into_field_names());
        self
    }

    /// Replace unusable field names with `_<index>` instead of failing.
    ///
    /// Arrangement entries follow the first field of a name. A renamed
    /// duplicate therefore has no arrangement slot, and building with an
    /// explicit arrangement fails with `ArrangementCoverage`; leave the
    /// arrangement unset to keep every renamed field.
    pub fn rename(mut self, rename: bool) -> Self {
        self.rename = rename;
        self
    }

    /// Defaults for the rightmost fields.
    pub fn defaults(mut self, defaults: impl IntoIterator<Item = V>) -> Self {
        self.defaults = defaults.into_iter().collect();
        self
    }

    /// Separator used when swizzling instances of the type.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    pub fn build(self) -> Result<SwizzledTupleType<V>> {
        validate::check_type_name(&self.type_name)?;

        let mut fields = self.fields;
        let mut arrangement = self.arrangement;
        if self.rename {
            validate::rename(&mut fields, arrangement.as_mut());
        }
        validate::check_fields(&fields)?;

        let arrangement = match arrangement {
            Some(arrangement) => {
                check_coverage(&fields, &arrangement)?;
                arrangement
            }
            None => fields.clone(),
        };

        if self.defaults.len() > fields.len() {
            return Err(SwizzleError::TooManyDefaults { defaults: self.defaults.len(), fields: fields.len() });
        }

        let separator = self.separator.as_deref().map(Separator::parse).transpose()?;
        let layout = registry::layout(LayoutKey { type_name: self.type_name, fields, arrangement, separator });
        Ok(SwizzledTupleType { layout, defaults: self.defaults })
    }
}

/// The arrangement must mention exactly the declared fields.
fn check_coverage(fields: &[String], arrangement: &[String]) -> Result<()> {
    let missing: Vec<String> = fields.iter().filter(|f| !arrangement.contains(f)).cloned().collect();
    let mut unknown: Vec<String> = Vec::new();
    for name in arrangement {
        if !fields.contains(name) && !unknown.contains(name) {
            unknown.push(name.clone());
        }
    }
    if missing.is_empty() && unknown.is_empty() {
        Ok(())
    } else {
        Err(SwizzleError::ArrangementCoverage { missing, unknown })
    }
}

/// A swizzled tuple type: shared layout plus default values.
///
/// ```
/// use swizzle::SwizzledTupleType;
///
/// let vector = SwizzledTupleType::builder("Vector", "x y z")
///     .arrangement("z x y z")
///     .defaults([0])
///     .build()
///     .unwrap();
///
/// let v = vector.new([1, 2]).unwrap();
/// assert_eq!(format!("{v:?}"), "Vector(z=0, x=1, y=2, z=0)");
/// assert_eq!(v.swizzle("yx").unwrap().as_slice(), [2, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct SwizzledTupleType<V> {
    layout: Arc<TupleLayout>,
    defaults: Vec<V>,
}

impl<V> SwizzledTupleType<V> {
    pub fn builder(type_name: impl Into<String>, fields: impl IntoFieldNames) -> TupleBuilder<V> {
        TupleBuilder {
            type_name: type_name.into(),
            fields: fields.into_field_names(),
            arrangement: None,
            rename: false,
            defaults: Vec::new(),
            separator: None,
        }
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
}

impl<V: Clone> SwizzledTupleType<V> {
    /// Instance from values in declared field order, missing trailing
    /// values taken from the defaults.
    pub fn new(&self, values: impl IntoIterator<Item = V>) -> Result<SwizzledTuple<V>> {
        let mut values: Vec<V> = values.into_iter().collect();
        let fields = self.layout.fields().len();
        let needed = fields.saturating_sub(values.len());
        if values.len() > fields || needed > self.defaults.len() {
            return Err(SwizzleError::ArgumentCount {
                type_name: self.type_name().to_string(),
                expected: fields,
                got: values.len(),
            });
        }
        values.extend_from_slice(&self.defaults[self.defaults.len() - needed..]);
        self.make(values)
    }

    /// Instance from exactly one value per field, in declared order.
    pub fn make(&self, values: impl IntoIterator<Item = V>) -> Result<SwizzledTuple<V>> {
        let values: Vec<V> = values.into_iter().collect();
        let stored = self.layout.arrange(&values)?;
        Ok(SwizzledTuple::from_parts(Arc::clone(&self.layout), stored))
    }

    /// Field name to default value, for the fields that have one.
    pub fn field_defaults(&self) -> IndexMap<String, V> {
        let fields = self.layout.fields();
        let offset = fields.len() - self.defaults.len();
        fields[offset..].iter().cloned().zip(self.defaults.iter().cloned()).collect()
    }
}

/// Shorthand for `SwizzledTupleType::builder(type_name, fields).build()`.
pub fn swizzledtuple<V>(type_name: impl Into<String>, fields: impl IntoFieldNames) -> Result<SwizzledTupleType<V>> {
    SwizzledTupleType::builder(type_name, fields).build()
}
