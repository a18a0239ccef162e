//! The Value type - a tree-shaped, shared, mutable object graph.
//!
//! Scalars are held inline. Containers are held behind shared handles so
//! that several parts of a program (a caller's root, a configured root, a
//! named object, an accessor returned from a lookup) can point at the same
//! sub-tree and observe each other's writes.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::Container;

/// A shared, interior-mutable handle.
pub type Shared<T> = Rc<RefCell<T>>;

/// A node in an object graph.
///
/// # Design Notes
///
/// - `Clone` copies scalars and *shares* containers. Use [`Value::deep_copy`]
///   for an independent copy.
/// - `PartialEq` is deep structural equality; [`Value::same`] is identity.
/// - Uses `BTreeMap` for deterministic key ordering.
#[derive(Clone, Default)]
pub enum Value {
    /// Absence of a value. Navigation treats it like a missing member.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed 64-bit integer.
    Integer(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    String(String),
    /// Ordered list.
    Array(Shared<Vec<Value>>),
    /// Keyed map with string keys.
    Map(Shared<BTreeMap<String, Value>>),
    /// Caller-defined backing store.
    Store(Shared<dyn Container>),
}

impl Value {
    /// Create a null value.
    pub fn null() -> Self {
        Value::Null
    }

    /// Create an empty map.
    pub fn map() -> Self {
        Value::Map(Rc::new(RefCell::new(BTreeMap::new())))
    }

    /// Create an empty array.
    pub fn array() -> Self {
        Value::Array(Rc::new(RefCell::new(Vec::new())))
    }

    /// Wrap a custom container.
    pub fn store<C: Container + 'static>(container: C) -> Self {
        Value::Store(Rc::new(RefCell::new(container)))
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this value is a map.
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Check if this value is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Check if this value can hold members.
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Map(_) | Value::Store(_))
    }

    /// See [`crate::is_empty`].
    pub fn is_empty(&self) -> bool {
        crate::compare::is_empty(self)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Number of members, for arrays and maps.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Array(arr) => arr.try_borrow().ok().map(|a| a.len()),
            Value::Map(map) => map.try_borrow().ok().map(|m| m.len()),
            _ => None,
        }
    }

    /// Identity comparison.
    ///
    /// Two containers are the same only if they are the same allocation;
    /// scalars are the same when they are equal.
    pub fn same(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
            (Value::Map(a), Value::Map(b)) => Rc::ptr_eq(a, b),
            (Value::Store(a), Value::Store(b)) => Rc::ptr_eq(a, b),
            (Value::Array(_) | Value::Map(_) | Value::Store(_), _)
            | (_, Value::Array(_) | Value::Map(_) | Value::Store(_)) => false,
            _ => self == other,
        }
    }

    /// Copy the whole tree into fresh containers.
    ///
    /// Custom stores cannot be copied generically and stay shared.
    #[must_use]
    pub fn deep_copy(&self) -> Value {
        match self {
            Value::Array(arr) => match arr.try_borrow() {
                Ok(arr) => Value::from_items(arr.iter().map(Value::deep_copy).collect()),
                Err(_) => self.clone(),
            },
            Value::Map(map) => match map.try_borrow() {
                Ok(map) => Value::from(
                    map.iter()
                        .map(|(k, v)| (k.clone(), v.deep_copy()))
                        .collect::<BTreeMap<_, _>>(),
                ),
                Err(_) => self.clone(),
            },
            _ => self.clone(),
        }
    }

    /// Wrap a list of values in a fresh array.
    pub fn from_items(items: Vec<Value>) -> Self {
        Value::Array(Rc::new(RefCell::new(items)))
    }

    /// Read a direct member through the container capability.
    ///
    /// Returns `None` for scalars, missing members, and containers that are
    /// currently mutably borrowed.
    pub fn member(&self, key: &str) -> Option<Value> {
        match self {
            Value::Array(arr) => arr.try_borrow().ok()?.get(key),
            Value::Map(map) => Container::get(&*map.try_borrow().ok()?, key),
            Value::Store(store) => store.try_borrow().ok()?.get(key),
            _ => None,
        }
    }

    /// Write a direct member through the container capability.
    pub fn set_member(&self, key: &str, value: Value) -> bool {
        let done = match self {
            Value::Array(arr) => arr.try_borrow_mut().map(|mut a| a.set(key, value)),
            Value::Map(map) => map
                .try_borrow_mut()
                .map(|mut m| Container::set(&mut *m, key, value)),
            Value::Store(store) => store.try_borrow_mut().map(|mut s| s.set(key, value)),
            _ => return false,
        };
        done.unwrap_or_else(|_| {
            log::debug!("refusing to write member '{}' of a container in use", key);
            false
        })
    }

    /// Delete a direct member through the container capability.
    pub fn delete_member(&self, key: &str) -> bool {
        let done = match self {
            Value::Array(arr) => arr.try_borrow_mut().map(|mut a| a.delete(key)),
            Value::Map(map) => map.try_borrow_mut().map(|mut m| Container::delete(&mut *m, key)),
            Value::Store(store) => store.try_borrow_mut().map(|mut s| s.delete(key)),
            _ => return false,
        };
        done.unwrap_or_else(|_| {
            log::debug!("refusing to delete member '{}' of a container in use", key);
            false
        })
    }

    /// A copy of this array's items, if it is an array.
    pub fn items(&self) -> Option<Vec<Value>> {
        match self {
            Value::Array(arr) => arr.try_borrow().ok().map(|a| a.clone()),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => {
                Rc::ptr_eq(a, b)
                    || matches!((a.try_borrow(), b.try_borrow()), (Ok(a), Ok(b)) if *a == *b)
            }
            (Value::Map(a), Value::Map(b)) => {
                Rc::ptr_eq(a, b)
                    || matches!((a.try_borrow(), b.try_borrow()), (Ok(a), Ok(b)) if *a == *b)
            }
            (Value::Store(a), Value::Store(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Integer(i) => f.debug_tuple("Integer").field(i).finish(),
            Value::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Array(arr) => match arr.try_borrow() {
                Ok(arr) => f.debug_tuple("Array").field(&*arr).finish(),
                Err(_) => f.write_str("Array(<in use>)"),
            },
            Value::Map(map) => match map.try_borrow() {
                Ok(map) => f.debug_tuple("Map").field(&*map).finish(),
                Err(_) => f.write_str("Map(<in use>)"),
            },
            Value::Store(_) => f.write_str("Store(..)"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

// Conversion from common types

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::from_items(v.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(v: BTreeMap<String, Value>) -> Self {
        Value::Map(Rc::new(RefCell::new(v)))
    }
}
