#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Build a `&'static Swizzler` from an [`Options`](crate::Options) expression.
///
/// The options are compiled once, on first use. Intended for literal
/// configurations inside `Swizzle::swizzler` impls:
///
/// ```
/// use swizzle::{Options, swizzler};
///
/// let s = swizzler!(Options::new().separator("_"));
/// assert!(s.options().separator.is_some());
/// ```
#[macro_export]
macro_rules! swizzler {
    () => {
        $crate::swizzler!($crate::Options::default())
    };
    ($opts:expr) => {{
        static SWIZZLER: $crate::__private::Lazy<$crate::Swizzler> =
            $crate::__private::Lazy::new(|| $crate::Swizzler::new($opts).expect("invalid swizzle options"));
        &*SWIZZLER
    }};
}
