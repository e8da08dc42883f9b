use alloc::{string::String, vec::Vec};
use core::{
    fmt,
    ops::{Bound, RangeBounds},
    slice,
};

use crate::{Index, Key, PathComponent, RangeError, js::write_quoted};

/// An ordered sequence of keys and indices locating a value inside a JSON
/// document.
///
/// Unlike JSONPath and JSON Pointer, a `Path` is structured: components are
/// never escaped or unescaped until the path is rendered, which avoids a
/// whole class of quoting errors.
///
/// The appending methods ([`key`](Self::key), [`index`](Self::index),
/// [`path`](Self::path), ...) consume the receiver and return it extended.
/// Paths passed as arguments are only borrowed, so they are never mutated.
///
/// The empty path is the default.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path {
    components: Vec<PathComponent>,
}

impl Path {
    /// Creates an empty path.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            components: Vec::new(),
        }
    }

    /// Creates a path of object keys.
    #[must_use]
    pub fn from_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        Self::new().keys(keys)
    }

    /// Creates a path of array indices.
    #[must_use]
    pub fn from_indices<I>(indices: I) -> Self
    where
        I: IntoIterator<Item = Index>,
    {
        Self::new().indices(indices)
    }

    /// Concatenates the components of `paths`, in order.
    #[must_use]
    pub fn concat<'a, I>(paths: I) -> Self
    where
        I: IntoIterator<Item = &'a Path>,
    {
        Self::new().paths(paths)
    }

    /// Appends an object key.
    #[must_use]
    pub fn key(mut self, key: impl Into<Key>) -> Self {
        self.push_key(key);
        self
    }

    /// Appends object keys, in order.
    #[must_use]
    pub fn keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        self.components
            .extend(keys.into_iter().map(|k| PathComponent::Key(k.into())));
        self
    }

    /// Appends an array index.
    #[must_use]
    pub fn index(mut self, index: Index) -> Self {
        self.push_index(index);
        self
    }

    /// Appends array indices, in order.
    #[must_use]
    pub fn indices<I>(mut self, indices: I) -> Self
    where
        I: IntoIterator<Item = Index>,
    {
        self.components
            .extend(indices.into_iter().map(PathComponent::Index));
        self
    }

    /// Appends every component of `other`. `other` is left untouched.
    #[must_use]
    pub fn path(mut self, other: &Path) -> Self {
        self.components.extend_from_slice(&other.components);
        self
    }

    /// Appends every component of each path in `paths`, in order.
    #[must_use]
    pub fn paths<'a, I>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = &'a Path>,
    {
        for other in paths {
            self.components.extend_from_slice(&other.components);
        }
        self
    }

    /// Pushes a component onto the end of the path.
    pub fn push(&mut self, component: PathComponent) {
        self.components.push(component);
    }

    /// Pushes an object key onto the end of the path.
    pub fn push_key(&mut self, key: impl Into<Key>) {
        self.components.push(PathComponent::Key(key.into()));
    }

    /// Pushes an array index onto the end of the path.
    pub fn push_index(&mut self, index: Index) {
        self.components.push(PathComponent::Index(index));
    }

    /// Returns a new path holding the components in `range`.
    ///
    /// `sub(..)` is the whole path, `sub(1..)` drops the first component and
    /// `sub(i..i)` is empty for any `i <= len`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError`] if the range ends past the path or starts after
    /// it ends.
    pub fn sub<R>(&self, range: R) -> Result<Path, RangeError>
    where
        R: RangeBounds<usize>,
    {
        let len = self.len();
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        };

        match self.components.get(start..end) {
            Some(components) => Ok(Path {
                components: components.to_vec(),
            }),
            None => Err(RangeError { start, end, len }),
        }
    }

    /// Returns the number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if the path has no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns the component at position `i`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError`] if `i` is not less than [`len`](Self::len).
    pub fn at(&self, i: usize) -> Result<&PathComponent, RangeError> {
        self.components.get(i).ok_or(RangeError {
            start: i,
            end: i.saturating_add(1),
            len: self.len(),
        })
    }

    /// Returns the last component, if any.
    #[must_use]
    pub fn last(&self) -> Option<&PathComponent> {
        self.components.last()
    }

    /// Returns a copy of the components. Changing the copy does not change
    /// the path.
    #[must_use]
    pub fn components(&self) -> Vec<PathComponent> {
        self.components.clone()
    }

    /// Borrows the components.
    #[must_use]
    pub fn as_slice(&self) -> &[PathComponent] {
        &self.components
    }

    /// Iterates over the components.
    pub fn iter(&self) -> slice::Iter<'_, PathComponent> {
        self.components.iter()
    }

    /// Renders the canonical JSON array encoding, e.g. `["foo",0,"bar"]`.
    ///
    /// Same as the `Display` output.
    #[must_use]
    pub fn to_json(&self) -> String {
        use alloc::string::ToString;

        self.to_string()
    }

    /// Reads the canonical JSON array encoding.
    ///
    /// Strings become keys. Numbers become indices only if they are integral
    /// and fit in an `i64`, so `[1.0]` decodes but `[1.5]` does not.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DecodeError::Shape`] if the JSON is not an array of
    /// strings and integral numbers, and [`crate::DecodeError::Syntax`] if
    /// it is not JSON at all.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Path, crate::DecodeError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Canonical JSON array form, identical to [`Path::to_json`].
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            match component {
                PathComponent::Key(k) => write_quoted(f, k)?,
                PathComponent::Index(n) => write!(f, "{n}")?,
            }
        }
        f.write_str("]")
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path({self})")
    }
}

impl From<Vec<PathComponent>> for Path {
    fn from(components: Vec<PathComponent>) -> Self {
        Self { components }
    }
}

impl FromIterator<PathComponent> for Path {
    fn from_iter<T: IntoIterator<Item = PathComponent>>(iter: T) -> Self {
        Self {
            components: iter.into_iter().collect(),
        }
    }
}

impl Extend<PathComponent> for Path {
    fn extend<T: IntoIterator<Item = PathComponent>>(&mut self, iter: T) {
        self.components.extend(iter);
    }
}

impl IntoIterator for Path {
    type Item = PathComponent;
    type IntoIter = alloc::vec::IntoIter<PathComponent>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathComponent;
    type IntoIter = slice::Iter<'a, PathComponent>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use core::fmt;

    use serde::{
        Deserialize, Deserializer, Serialize, Serializer,
        de::{SeqAccess, Visitor},
    };

    use super::Path;
    use crate::PathComponent;

    impl Serialize for Path {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_seq(&self.components)
        }
    }

    struct PathVisitor;

    impl<'de> Visitor<'de> for PathVisitor {
        type Value = Path;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an array of string keys and integer indices")
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut path = Path::new();
            while let Some(component) = seq.next_element::<PathComponent>()? {
                path.push(component);
            }
            Ok(path)
        }
    }

    impl<'de> Deserialize<'de> for Path {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_seq(PathVisitor)
        }
    }
}

#[cfg(test)]
mod test {
    use alloc::{format, string::ToString, vec};

    use super::*;
    use crate::path;

    fn indices(p: &Path) -> Vec<Index> {
        p.iter().filter_map(PathComponent::as_index).collect()
    }

    #[test]
    fn builds_across_component_kinds() {
        let p = Path::from_indices([0])
            .index(1)
            .index(2)
            .indices([3, 4])
            .index(5);
        assert_eq!(indices(&p), vec![0, 1, 2, 3, 4, 5]);

        let p2 = Path::from_keys(["hello"])
            .index(0)
            .keys(["world", "friends"])
            .index(1);
        assert_eq!(p2, path!["hello", 0, "world", "friends", 1]);

        // The argument is left alone, the receiver grows.
        let p2 = p2.path(&p);
        assert_eq!(indices(&p), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(
            p2,
            path!["hello", 0, "world", "friends", 1, 0, 1, 2, 3, 4, 5]
        );
    }

    #[test]
    fn shared_prefix_is_not_aliased() {
        let base = Path::with_capacity_for_test(8).key("root");
        let left = base.clone().key("left");
        let right = base.clone().index(7);
        assert_eq!(base, path!["root"]);
        assert_eq!(left, path!["root", "left"]);
        assert_eq!(right, path!["root", 7]);
    }

    #[test]
    fn zero_value() {
        let p = Path::default().index(0).keys(["foo", "bar"]).path(&Path::new());
        assert_eq!(p, path![0, "foo", "bar"]);
    }

    #[test]
    fn concat_skips_empty_paths() {
        let a = path!["a"];
        let b = path![1, "b"];
        let empty = Path::new();
        let joined = Path::concat([&a, &empty, &b]);
        assert_eq!(joined, path!["a", 1, "b"]);
        assert_eq!(a, path!["a"]);
        assert_eq!(b, path![1, "b"]);
        assert_eq!(Path::concat([&empty]), Path::new());
    }

    #[test]
    fn slice_methods() {
        let p = Path::new();
        assert_eq!(p.len(), 0);
        assert!(p.is_empty());
        let p = p.key("hello").index(0);
        assert_eq!(p.len(), 2);

        assert_eq!(p.sub(..), Ok(path!["hello", 0]));
        assert_eq!(p.sub(0..), Ok(path!["hello", 0]));
        assert_eq!(p.sub(1..), Ok(path![0]));
        assert_eq!(p.sub(2..), Ok(Path::new()));
        assert_eq!(p.sub(0..1), Ok(path!["hello"]));
        assert_eq!(p.sub(0..2), Ok(path!["hello", 0]));
        assert_eq!(p.sub(1..2), Ok(path![0]));
        assert_eq!(p.sub(1..1), Ok(Path::new()));
        assert_eq!(p.sub(..=0), Ok(path!["hello"]));

        assert_eq!(p.at(0), Ok(&PathComponent::Key("hello".into())));
        assert_eq!(p.at(1), Ok(&PathComponent::Index(0)));
        assert_eq!(p.last(), Some(&PathComponent::Index(0)));

        assert_eq!(
            p.components(),
            vec![PathComponent::Key("hello".into()), PathComponent::Index(0)]
        );
    }

    #[test]
    fn out_of_range_is_an_error() {
        let p = path!["a", 1];
        assert_eq!(
            p.sub(0..3),
            Err(RangeError {
                start: 0,
                end: 3,
                len: 2
            })
        );
        assert_eq!(
            p.sub(3..),
            Err(RangeError {
                start: 3,
                end: 2,
                len: 2
            })
        );
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = p.sub(2..1);
        assert!(reversed.is_err());
        assert_eq!(
            p.at(2),
            Err(RangeError {
                start: 2,
                end: 3,
                len: 2
            })
        );
        assert_eq!(
            format!("{}", p.at(5).unwrap_err()),
            "range 5..6 out of bounds for path of length 2"
        );
    }

    #[test]
    fn components_is_a_copy() {
        let p = path!["a", 1];
        let mut copy = p.components();
        copy[0] = PathComponent::Index(9);
        copy.push(PathComponent::Key("extra".into()));
        assert_eq!(p, path!["a", 1]);
    }

    #[test]
    fn display_is_canonical_json() {
        assert_eq!(Path::new().to_string(), "[]");
        assert_eq!(format!("{}", path!["hello", 1]), r#"["hello",1]"#);
        assert_eq!(path!["hello", 1].to_json(), r#"["hello",1]"#);
        assert_eq!(
            path!["q\"uote", "back\\slash", "tab\t", -7].to_json(),
            r#"["q\"uote","back\\slash","tab\t",-7]"#
        );
        assert_eq!(format!("{:?}", path!["a", 0]), r#"Path(["a",0])"#);
    }

    #[test]
    fn collects_and_iterates() {
        let p: Path = [PathComponent::from("a"), PathComponent::from(2)]
            .into_iter()
            .collect();
        assert_eq!(p, path!["a", 2]);

        let mut q = p.clone();
        q.extend([PathComponent::from("z")]);
        q.push_key("y");
        q.push_index(-1);
        assert_eq!(q, path!["a", 2, "z", "y", -1]);

        let owned: Vec<PathComponent> = q.into_iter().collect();
        assert_eq!(owned.len(), 5);
        assert_eq!((&p).into_iter().count(), 2);
    }

    impl Path {
        fn with_capacity_for_test(capacity: usize) -> Self {
            Self {
                components: Vec::with_capacity(capacity),
            }
        }
    }
}
