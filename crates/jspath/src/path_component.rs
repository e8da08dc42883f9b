use alloc::{string::String, sync::Arc};

/// Object key payload. Shared, so cloning a path never copies key text.
pub type Key = Arc<str>;
/// Array index payload.
pub type Index = i64;

/// A component in the path to a JSON value.
///
/// Paths are sequences of keys or indices (for objects and arrays,
/// respectively). No other kind of component exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathComponent {
    /// An object key.
    Key(Key),
    /// An array index.
    Index(Index),
}

impl PathComponent {
    #[must_use]
    /// Returns the key if this component is a key, otherwise `None`.
    pub fn as_key(&self) -> Option<&str> {
        if let Self::Key(v) = self {
            Some(v)
        } else {
            None
        }
    }

    #[must_use]
    /// Returns the index if this component is an index, otherwise `None`.
    pub fn as_index(&self) -> Option<Index> {
        if let Self::Index(v) = self {
            Some(*v)
        } else {
            None
        }
    }
}

impl From<&str> for PathComponent {
    fn from(s: &str) -> Self {
        Self::Key(s.into())
    }
}

impl From<String> for PathComponent {
    fn from(s: String) -> Self {
        Self::Key(s.into())
    }
}

impl From<Key> for PathComponent {
    fn from(s: Key) -> Self {
        Self::Key(s)
    }
}

// Only integer types that convert to `Index` without loss.
macro_rules! impl_from_int_for_pathcomponent {
    ($($t:ty),*) => {
        $(
            impl From<$t> for PathComponent {
                fn from(i: $t) -> Self {
                    PathComponent::Index(Index::from(i))
                }
            }
        )*
    };
}

impl_from_int_for_pathcomponent!(i8, i16, i32, i64, u8, u16, u32);

// Custom (de)serialization so that a component is a bare JSON string or
// integer instead of the default tagged representation.
#[cfg(feature = "serde")]
mod serde_impls {
    use alloc::string::String;
    use core::fmt;

    use serde::{
        Deserialize, Deserializer, Serialize, Serializer,
        de::{Error, Unexpected, Visitor},
    };

    use super::{Index, PathComponent};

    // 2^63, the first f64 past `i64::MAX`.
    const INDEX_LIMIT: f64 = 9_223_372_036_854_775_808.0;

    impl Serialize for PathComponent {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match self {
                PathComponent::Key(k) => serializer.serialize_str(k),
                PathComponent::Index(i) => serializer.serialize_i64(*i),
            }
        }
    }

    struct PathComponentVisitor;

    impl Visitor<'_> for PathComponentVisitor {
        type Value = PathComponent;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string key or an integer index")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(PathComponent::Key(value.into()))
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(PathComponent::Key(value.into()))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(PathComponent::Index(value))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Index::try_from(value).map(PathComponent::Index).map_err(|_| {
                Error::invalid_value(Unexpected::Unsigned(value), &"an index within the i64 range")
            })
        }

        // JSON has a single number type; `1.0` and `1e2` are integral.
        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            if !(-INDEX_LIMIT..INDEX_LIMIT).contains(&value) {
                return Err(Error::invalid_value(
                    Unexpected::Float(value),
                    &"an index within the i64 range",
                ));
            }

            #[allow(clippy::cast_possible_truncation)]
            let index = value as Index;
            #[allow(clippy::cast_precision_loss, clippy::float_cmp)]
            let integral = index as f64 == value;
            if !integral {
                return Err(Error::invalid_value(
                    Unexpected::Float(value),
                    &"an integral index",
                ));
            }
            Ok(PathComponent::Index(index))
        }
    }

    impl<'de> Deserialize<'de> for PathComponent {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(PathComponentVisitor)
        }
    }
}
