use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

const FNV_OFFSET_BASIS: u64 = 14695981039346656037;
const FNV_PRIME: u64 = 1099511628211;

/// 64-bit FNV-1a hash of a property path.
pub const fn hash_path(path: &str) -> u64 {
    let bytes = path.as_bytes();
    let mut hash = FNV_OFFSET_BASIS;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}

/// Stable identifier of a property path.
///
/// Keys are compared by hash only, so `"physics/force"` built at runtime and the
/// `const` key from [`super::paths`] address the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyKey(u64);

impl PropertyKey {
    pub const fn new(path: &str) -> Self {
        Self(hash_path(path))
    }

    pub const fn id(&self) -> u64 {
        self.0
    }
}

impl From<&str> for PropertyKey {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<&String> for PropertyKey {
    fn from(path: &String) -> Self {
        Self::new(path)
    }
}

/// A property path that carries the type of the value stored under it.
pub struct TypedProperty<T> {
    path: &'static str,
    key: PropertyKey,
    _marker: PhantomData<fn() -> T>,
}

impl<T> TypedProperty<T> {
    pub const fn new(path: &'static str) -> Self {
        Self {
            path,
            key: PropertyKey::new(path),
            _marker: PhantomData,
        }
    }

    pub const fn path(&self) -> &'static str {
        self.path
    }

    pub const fn key(&self) -> PropertyKey {
        self.key
    }
}

// Manual impls: derives would put bounds on `T`.
impl<T> Clone for TypedProperty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedProperty<T> {}

impl<T> PartialEq for TypedProperty<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for TypedProperty<T> {}

impl<T> Hash for TypedProperty<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl<T> fmt::Debug for TypedProperty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypedProperty({})", self.path)
    }
}

impl<T> From<TypedProperty<T>> for PropertyKey {
    fn from(prop: TypedProperty<T>) -> Self {
        prop.key
    }
}

impl<T> From<&TypedProperty<T>> for PropertyKey {
    fn from(prop: &TypedProperty<T>) -> Self {
        prop.key
    }
}
