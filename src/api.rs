use crate::engine::{self, DEFAULT_TYPE_NAME, Mode, Resolver, Separator, Swizzled};
use crate::error::{Result, SwizzleError};
use std::fmt;
use std::marker::PhantomData;

bitflags::bitflags! {
    /// Which swizzled operations a [`Swizzler`] performs.
    ///
    /// Without `READ` only exact names can be read; without `WRITE`
    /// [`Swizzler::set`] fails with [`SwizzleError::WriteDisabled`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Access: u8 {
        const READ  = 1 << 0;
        const WRITE = 1 << 1;
    }
}

impl Default for Access {
    fn default() -> Self {
        Access::READ
    }
}

/// Shape of multi-field reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResultKind {
    /// A [`SwizzledTuple`](crate::SwizzledTuple), itself swizzlable.
    #[default]
    Tuple,
    /// A plain ordered sequence of values.
    Plain,
}

/// Swizzle configuration.
///
/// The matching mode follows from the options:
///
/// ```text
/// separator  only      mode
/// ---------  --------  ------------------------------------------
/// Some       None      Separator
/// Some       Some      Separator, parts restricted to `only`
/// None       Some      Whitelist (trie over `only`)
/// None       None      Dynamic
/// ```
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Literal delimiter (`"_"`) or fixed width (`"+2"`).
    pub separator: Option<String>,
    /// Names allowed as swizzle components.
    pub only: Option<Vec<String>>,
    pub result: ResultKind,
    /// Name given to aggregated tuple types; defaults to the host's name.
    pub type_name: Option<String>,
    pub access: Access,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    pub fn only<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.only = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn result(mut self, result: ResultKind) -> Self {
        self.result = result;
        self
    }

    pub fn type_name(mut self, name: impl Into<String>) -> Self {
        self.type_name = Some(name.into());
        self
    }

    pub fn access(mut self, access: Access) -> Self {
        self.access = access;
        self
    }

    /// Enable swizzled assignment in addition to reads.
    pub fn writable(self) -> Self {
        let access = self.access | Access::WRITE;
        self.access(access)
    }
}

/// Primary lookup of a host object.
///
/// `lookup` answers for exact names only; returning `None` means "no such
/// attribute". Everything compound is handled by the [`Swizzler`].
pub trait Lookup {
    type Value: Clone;

    fn lookup(&self, name: &str) -> Option<Self::Value>;

    /// Name used for tuple types aggregated from this host.
    fn host_name(&self) -> Option<&str> {
        None
    }
}

/// Field assignment of a host object, used by swizzled writes.
pub trait Assign: Lookup {
    fn set_field(&mut self, name: &str, value: Self::Value);
}

/// Type-level members (enum constants, associated values) reachable without
/// an instance. Wrap the type in [`Companion`] to swizzle them.
pub trait StaticLookup {
    type Value: Clone;

    fn lookup_static(name: &str) -> Option<Self::Value>;

    fn static_name() -> &'static str;
}

/// [`Lookup`] adapter over a type's [`StaticLookup`] members.
pub struct Companion<T: ?Sized>(PhantomData<fn() -> T>);

impl<T: ?Sized> Companion<T> {
    pub const fn new() -> Self {
        Companion(PhantomData)
    }
}

impl<T: ?Sized> Default for Companion<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Companion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Companion")
    }
}

impl<T: StaticLookup + ?Sized> Lookup for Companion<T> {
    type Value = T::Value;

    fn lookup(&self, name: &str) -> Option<T::Value> {
        T::lookup_static(name)
    }

    fn host_name(&self) -> Option<&str> {
        Some(T::static_name())
    }
}

/// A compiled swizzle configuration: the fallback resolver a host registers.
///
/// Build one per host type and reuse it; resolution never mutates it.
///
/// ```
/// use swizzle::{Lookup, Options, Swizzler};
///
/// struct Vector { x: i32, y: i32, z: i32 }
///
/// impl Lookup for Vector {
///     type Value = i32;
///     fn lookup(&self, name: &str) -> Option<i32> {
///         match name {
///             "x" => Some(self.x),
///             "y" => Some(self.y),
///             "z" => Some(self.z),
///             _ => None,
///         }
///     }
/// }
///
/// let swizzler = Swizzler::new(Options::default()).unwrap();
/// let v = Vector { x: 1, y: 2, z: 3 };
/// assert_eq!(swizzler.get(&v, "yzx").unwrap().as_slice(), [2, 3, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct Swizzler {
    options: Options,
    resolver: Resolver,
}

impl Swizzler {
    /// Compile `options`, validating the separator.
    pub fn new(options: Options) -> Result<Self> {
        let resolver = match (&options.separator, &options.only) {
            (Some(sep), Some(only)) => Resolver::separator_within(Separator::parse(sep)?, only),
            (Some(sep), None) => Resolver::new(Mode::Separator(Separator::parse(sep)?)),
            (None, Some(only)) => Resolver::whitelist(only),
            (None, None) => Resolver::new(Mode::Dynamic),
        };
        Ok(Swizzler { options, resolver })
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Read `name` from `host`: exact lookup first, then swizzle resolution.
    pub fn get<H>(&self, host: &H, name: &str) -> Result<Swizzled<H::Value>>
    where
        H: Lookup + ?Sized,
    {
        if !self.options.access.contains(Access::READ) {
            return host
                .lookup(name)
                .map(Swizzled::Value)
                .ok_or_else(|| SwizzleError::UnknownAttribute { name: name.to_string(), cause: None });
        }
        let type_name = self.options.type_name.as_deref().or_else(|| host.host_name()).unwrap_or(DEFAULT_TYPE_NAME);
        engine::read(&self.resolver, host, name, self.options.result, type_name)
    }

    /// Field names `name` resolves to on `host`.
    pub fn resolve<'a, H>(&'a self, host: &H, name: &'a str) -> Result<Vec<&'a str>>
    where
        H: Lookup + ?Sized,
    {
        self.resolver.resolve(name, |n| host.lookup(n).is_some()).map_err(|e| SwizzleError::unknown(name, e))
    }

    /// Assign `values` to the fields `name` resolves to.
    pub fn set<H, I>(&self, host: &mut H, name: &str, values: I) -> Result<()>
    where
        H: Assign + ?Sized,
        H::Value: PartialEq,
        I: IntoIterator<Item = H::Value>,
    {
        if !self.options.access.contains(Access::WRITE) {
            return Err(SwizzleError::WriteDisabled);
        }
        engine::write(&self.resolver, host, name, values.into_iter().collect())
    }
}

/// A host type with a registered [`Swizzler`].
///
/// ```
/// use swizzle::{Lookup, Options, Swizzle, Swizzler, swizzler};
///
/// struct Rgb([u8; 3]);
///
/// impl Lookup for Rgb {
///     type Value = u8;
///     fn lookup(&self, name: &str) -> Option<u8> {
///         ["r", "g", "b"].iter().position(|c| *c == name).map(|i| self.0[i])
///     }
/// }
///
/// impl Swizzle for Rgb {
///     fn swizzler() -> &'static Swizzler {
///         swizzler!(Options::new().only(["r", "g", "b"]))
///     }
/// }
///
/// let c = Rgb([10, 20, 30]);
/// assert_eq!(c.swizzle("bgr").unwrap().as_slice(), [30, 20, 10]);
/// ```
pub trait Swizzle: Lookup {
    fn swizzler() -> &'static Swizzler;

    fn swizzle(&self, name: &str) -> Result<Swizzled<Self::Value>> {
        Self::swizzler().get(self, name)
    }

    fn swizzle_set<I>(&mut self, name: &str, values: I) -> Result<()>
    where
        Self: Assign,
        Self::Value: PartialEq,
        I: IntoIterator<Item = Self::Value>,
    {
        Self::swizzler().set(self, name, values)
    }
}
