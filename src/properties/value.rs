use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Tagged value held by the property store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    Scalar(f64),
    Vector(Vector3<f64>),
    Quaternion(UnitQuaternion<f64>),
    Integer(i64),
    Boolean(bool),
}

impl PropertyValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Scalar(_) => "scalar",
            PropertyValue::Vector(_) => "vector",
            PropertyValue::Quaternion(_) => "quaternion",
            PropertyValue::Integer(_) => "integer",
            PropertyValue::Boolean(_) => "boolean",
        }
    }
}

/// Rust types that can be stored as a [`PropertyValue`].
pub trait PropertyType: Sized + Copy {
    fn into_value(self) -> PropertyValue;
    fn from_value(value: &PropertyValue) -> Option<Self>;
}

impl PropertyType for f64 {
    fn into_value(self) -> PropertyValue {
        PropertyValue::Scalar(self)
    }

    fn from_value(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Scalar(v) => Some(*v),
            _ => None,
        }
    }
}

impl PropertyType for Vector3<f64> {
    fn into_value(self) -> PropertyValue {
        PropertyValue::Vector(self)
    }

    fn from_value(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Vector(v) => Some(*v),
            _ => None,
        }
    }
}

impl PropertyType for UnitQuaternion<f64> {
    fn into_value(self) -> PropertyValue {
        PropertyValue::Quaternion(self)
    }

    fn from_value(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Quaternion(q) => Some(*q),
            _ => None,
        }
    }
}

impl PropertyType for i64 {
    fn into_value(self) -> PropertyValue {
        PropertyValue::Integer(self)
    }

    fn from_value(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Integer(v) => Some(*v),
            _ => None,
        }
    }
}

impl PropertyType for bool {
    fn into_value(self) -> PropertyValue {
        PropertyValue::Boolean(self)
    }

    fn from_value(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Boolean(v) => Some(*v),
            _ => None,
        }
    }
}
