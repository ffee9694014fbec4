//! Key/value property bus shared by the subsystems of one aircraft.
//!
//! Subsystems never hold references to each other; every coupling goes through
//! named properties in a [`PropertyStore`]. Reads of missing keys, or of keys
//! holding a different variant, return the caller's fallback.

mod key;
pub mod paths;
mod value;

pub use key::{hash_path, PropertyKey, TypedProperty};
pub use value::{PropertyType, PropertyValue};

use nalgebra::{Quaternion, UnitQuaternion, Vector3};
use std::collections::HashMap;

/// Per-aircraft property store. Single-threaded; owned by one aircraft instance.
#[derive(Debug, Clone, Default)]
pub struct PropertyStore {
    values: HashMap<PropertyKey, PropertyValue>,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites or creates the value stored under `key`.
    pub fn set<T: PropertyType>(&mut self, key: impl Into<PropertyKey>, value: T) {
        self.values.insert(key.into(), value.into_value());
    }

    /// Returns the stored value if present and of type `T`, otherwise `fallback`.
    pub fn get<T: PropertyType>(&self, key: impl Into<PropertyKey>, fallback: T) -> T {
        self.try_get(key).unwrap_or(fallback)
    }

    pub fn try_get<T: PropertyType>(&self, key: impl Into<PropertyKey>) -> Option<T> {
        self.values.get(&key.into()).and_then(T::from_value)
    }

    /// Typed write through a well-known path.
    pub fn write<T: PropertyType>(&mut self, prop: TypedProperty<T>, value: T) {
        self.set(prop.key(), value);
    }

    /// Typed read through a well-known path.
    pub fn read<T: PropertyType>(&self, prop: TypedProperty<T>, fallback: T) -> T {
        self.get(prop.key(), fallback)
    }

    pub fn has(&self, key: impl Into<PropertyKey>) -> bool {
        self.values.contains_key(&key.into())
    }

    pub fn raw(&self, key: impl Into<PropertyKey>) -> Option<&PropertyValue> {
        self.values.get(&key.into())
    }

    pub fn remove(&mut self, key: impl Into<PropertyKey>) -> Option<PropertyValue> {
        self.values.remove(&key.into())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Adds `delta` to a scalar, treating a missing or mistyped value as zero.
    pub fn increment(&mut self, key: impl Into<PropertyKey>, delta: f64) {
        let key = key.into();
        let current = self.get(key, 0.0);
        self.set(key, current + delta);
    }

    /// Additive contribution to a vector accumulator (`current = current + contribution`).
    pub fn accumulate(&mut self, prop: TypedProperty<Vector3<f64>>, contribution: Vector3<f64>) {
        let current = self.read(prop, Vector3::zeros());
        self.write(prop, current + contribution);
    }

    /// Stores `v` as three scalar sub-keys `prefix/x`, `prefix/y`, `prefix/z`.
    pub fn set_vec3_components(&mut self, prefix: &str, v: &Vector3<f64>) {
        self.set(format!("{prefix}/x").as_str(), v.x);
        self.set(format!("{prefix}/y").as_str(), v.y);
        self.set(format!("{prefix}/z").as_str(), v.z);
    }

    /// Reads a vector stored as scalar sub-keys; each missing axis falls back
    /// to the matching component of `fallback`.
    pub fn vec3_components(&self, prefix: &str, fallback: Vector3<f64>) -> Vector3<f64> {
        Vector3::new(
            self.get(format!("{prefix}/x").as_str(), fallback.x),
            self.get(format!("{prefix}/y").as_str(), fallback.y),
            self.get(format!("{prefix}/z").as_str(), fallback.z),
        )
    }

    /// Stores `q` as four scalar sub-keys `prefix/w`, `prefix/x`, `prefix/y`, `prefix/z`.
    pub fn set_quat_components(&mut self, prefix: &str, q: &UnitQuaternion<f64>) {
        self.set(format!("{prefix}/w").as_str(), q.w);
        self.set(format!("{prefix}/x").as_str(), q.i);
        self.set(format!("{prefix}/y").as_str(), q.j);
        self.set(format!("{prefix}/z").as_str(), q.k);
    }

    /// Reads a quaternion stored as scalar sub-keys. Returns `fallback` unless
    /// all four components are present and form a non-degenerate quaternion.
    pub fn quat_components(
        &self,
        prefix: &str,
        fallback: UnitQuaternion<f64>,
    ) -> UnitQuaternion<f64> {
        let w = self.try_get::<f64>(format!("{prefix}/w").as_str());
        let x = self.try_get::<f64>(format!("{prefix}/x").as_str());
        let y = self.try_get::<f64>(format!("{prefix}/y").as_str());
        let z = self.try_get::<f64>(format!("{prefix}/z").as_str());

        match (w, x, y, z) {
            (Some(w), Some(x), Some(y), Some(z)) => {
                UnitQuaternion::try_new(Quaternion::new(w, x, y, z), 1e-9).unwrap_or(fallback)
            }
            _ => fallback,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PropertyKey, &PropertyValue)> {
        self.values.iter()
    }
}
