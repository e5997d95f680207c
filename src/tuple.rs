//! Swizzled tuples.
//!
//! A swizzled tuple is an immutable record whose stored order (the
//! *arrangement*) may repeat or reorder its declared fields:
//!
//! ```text
//! SwizzledTupleType::builder("Vector", "x y z")      (builder.rs)
//!     .arrangement("z x y z")
//!     .build()? ──▶ SwizzledTupleType { Arc<TupleLayout>, defaults }
//!                        │                 (layout.rs, interned by the
//!                        │                  engine registry)
//!                        ▼ new([1, 2, 3])
//!                   SwizzledTuple  Vector(z=3, x=1, y=2, z=3)
//!                                          (instance.rs)
//! ```
//!
//! Names are checked by `validate.rs`, which also implements the optional
//! rename pass. Tuples answer swizzled reads over their own fields, so the
//! result of a swizzle can be swizzled again.

#[path = "tuple/builder.rs"]
mod builder;
#[path = "tuple/instance.rs"]
mod instance;
#[path = "tuple/layout.rs"]
mod layout;
#[path = "tuple/validate.rs"]
mod validate;

pub use builder::{IntoFieldNames, SwizzledTupleType, TupleBuilder, swizzledtuple};
pub use instance::SwizzledTuple;
pub use layout::TupleLayout;
