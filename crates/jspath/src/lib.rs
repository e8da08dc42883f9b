//! Typed access paths into JSON values.
//!
//! A [`Path`] is an ordered sequence of [`PathComponent`]s, each either an
//! object key or an array index. Paths have two textual encodings:
//!
//! - the canonical JSON array form, `["outputs",0,"name"]`, produced by
//!   [`Path::to_json`] (and `Display`) and read back by [`Path::from_json`];
//! - the JS-style form, `outputs[0].name`, produced by [`Path::to_js`] and
//!   read back by [`Path::from_js`] or, best-effort, [`Path::from_js_partial`].
//!
//! Both encodings round-trip exactly. Paths are never mutated through an
//! argument: appending consumes the receiver and borrows everything else.
//!
//! ```rust
//! use jspath::{Path, path};
//!
//! let p = Path::from_keys(["outputs"]).index(0).key("display name");
//! assert_eq!(p.to_js(), r#"outputs[0]["display name"]"#);
//! assert_eq!(p.to_json(), r#"["outputs",0,"display name"]"#);
//! assert_eq!(Path::from_js(&p.to_js()), Ok(p.clone()));
//! assert_eq!(p, path!["outputs", 0, "display name"]);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod js;
mod path;
mod path_component;

#[cfg(test)]
mod tests;

#[cfg(feature = "serde")]
pub use error::DecodeError;
pub use error::{BracketError, ParseError, RangeError};
pub use js::Js;
pub use path::Path;
pub use path_component::{Index, Key, PathComponent};

#[doc(hidden)]
pub use alloc::vec;

/// Builds a [`Path`] from a heterogeneous list of keys and indices.
///
/// ```rust
/// use jspath::{Path, PathComponent, path};
///
/// let p = path![0, "foo", -2];
/// assert_eq!(
///     p.components(),
///     vec![
///         PathComponent::Index(0),
///         PathComponent::Key("foo".into()),
///         PathComponent::Index(-2)
///     ]
/// );
/// assert_eq!(path![], Path::new());
/// ```
#[macro_export]
macro_rules! path {
    ( $( $elem:expr ),* $(,)? ) => {{
        let components: $crate::vec::Vec<$crate::PathComponent> =
            $crate::vec![$($crate::PathComponent::from($elem)),*];
        $crate::Path::from(components)
    }};
}
