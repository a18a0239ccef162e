//! The member-access capability shared by every container in a Value graph.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::compare::parse_index;
use crate::Value;

/// Keyed access to the members of a container.
///
/// Keys are always strings. Ordered lists interpret them as indexes, keyed
/// maps use them verbatim, and custom stores are free to do whatever they
/// like (a proxy, a database row, a renamed field set).
///
/// # Example
///
/// ```rust
/// use objpath_value::{Container, Value};
///
/// /// A record with exactly two fields.
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// impl Container for Point {
///     fn get(&self, key: &str) -> Option<Value> {
///         match key {
///             "x" => Some(Value::from(self.x)),
///             "y" => Some(Value::from(self.y)),
///             _ => None,
///         }
///     }
///
///     fn set(&mut self, key: &str, value: Value) -> bool {
///         let Some(v) = value.as_i64() else {
///             return false;
///         };
///         match key {
///             "x" => self.x = v,
///             "y" => self.y = v,
///             _ => return false,
///         }
///         true
///     }
///
///     fn delete(&mut self, _key: &str) -> bool {
///         false
///     }
/// }
///
/// let point = Value::store(Point { x: 1, y: 2 });
/// assert_eq!(point.member("y"), Some(Value::from(2i64)));
/// assert!(point.set_member("x", Value::from(5i64)));
/// assert_eq!(point.member("x"), Some(Value::from(5i64)));
/// ```
pub trait Container {
    /// Read the member stored under `key`.
    fn get(&self, key: &str) -> Option<Value>;

    /// Store `value` under `key`. Returns `false` if the container refused.
    fn set(&mut self, key: &str, value: Value) -> bool;

    /// Remove the member stored under `key`. Returns `false` if the
    /// container refused.
    fn delete(&mut self, key: &str) -> bool;
}

impl Container for BTreeMap<String, Value> {
    fn get(&self, key: &str) -> Option<Value> {
        BTreeMap::get(self, key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> bool {
        self.insert(key.to_string(), value);
        true
    }

    fn delete(&mut self, key: &str) -> bool {
        self.remove(key);
        true
    }
}

/// Most `Null` holes a single list write may create.
pub const MAX_LIST_PADDING: usize = 1 << 16;

impl Container for Vec<Value> {
    fn get(&self, key: &str) -> Option<Value> {
        parse_index(key).and_then(|index| self.as_slice().get(index).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> bool {
        let Some(index) = parse_index(key) else {
            return false;
        };

        match index.cmp(&self.len()) {
            Ordering::Less => self[index] = value,
            Ordering::Equal => self.push(value),
            Ordering::Greater => {
                let padding = index - self.len();
                if padding > MAX_LIST_PADDING || self.try_reserve(padding + 1).is_err() {
                    log::debug!("refusing to pad list of {} up to index {}", self.len(), index);
                    return false;
                }
                self.resize(index, Value::Null);
                self.push(value);
            }
        }
        true
    }

    fn delete(&mut self, key: &str) -> bool {
        // Leaves a hole; structural removal is the accessor's job.
        if let Some(slot) = parse_index(key).and_then(|index| self.get_mut(index)) {
            *slot = Value::Null;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collection_literals::btree;

    fn items() -> Vec<Value> {
        vec![Value::from(10i64), Value::from(11i64), Value::from(12i64)]
    }

    // ==================== keyed map ====================

    #[test]
    fn map_get_present_and_missing() {
        let map: BTreeMap<String, Value> = btree! {
            "name".to_string() => Value::from("Alice"),
        };
        assert_eq!(Container::get(&map, "name"), Some(Value::from("Alice")));
        assert_eq!(Container::get(&map, "age"), None);
    }

    #[test]
    fn map_set_inserts_and_overwrites() {
        let mut map = BTreeMap::new();
        assert!(Container::set(&mut map, "k", Value::from(1i64)));
        assert!(Container::set(&mut map, "k", Value::from(2i64)));
        assert_eq!(map.len(), 1);
        assert_eq!(Container::get(&map, "k"), Some(Value::from(2i64)));
    }

    #[test]
    fn map_delete_is_idempotent() {
        let mut map: BTreeMap<String, Value> = btree! {
            "k".to_string() => Value::from(true),
        };
        assert!(Container::delete(&mut map, "k"));
        assert!(Container::delete(&mut map, "k"));
        assert!(map.is_empty());
    }

    // ==================== ordered list ====================

    #[test]
    fn list_get_by_index() {
        let list = items();
        assert_eq!(Container::get(&list, "1"), Some(Value::from(11i64)));
        assert_eq!(Container::get(&list, "3"), None);
        assert_eq!(Container::get(&list, "one"), None);
    }

    #[test]
    fn list_set_replaces_and_appends() {
        let mut list = items();
        assert!(Container::set(&mut list, "0", Value::from(99i64)));
        assert!(Container::set(&mut list, "3", Value::from(13i64)));
        assert_eq!(list.len(), 4);
        assert_eq!(list[0], Value::from(99i64));
        assert_eq!(list[3], Value::from(13i64));
    }

    #[test]
    fn list_set_past_end_pads_with_holes() {
        let mut list = Vec::new();
        assert!(Container::set(&mut list, "2", Value::from("c")));
        assert_eq!(list, vec![Value::Null, Value::Null, Value::from("c")]);
    }

    #[test]
    fn list_set_refuses_huge_index() {
        let mut list = items();
        assert!(!Container::set(&mut list, &usize::MAX.to_string(), Value::from(1i64)));
        assert!(!Container::set(&mut list, "4000000000", Value::from(1i64)));
        assert_eq!(list, items());
    }

    #[test]
    fn list_set_pads_up_to_limit() {
        let mut list: Vec<Value> = Vec::new();
        let key = MAX_LIST_PADDING.to_string();
        assert!(Container::set(&mut list, &key, Value::from(1i64)));
        assert_eq!(list.len(), MAX_LIST_PADDING + 1);

        let mut empty: Vec<Value> = Vec::new();
        let key = (MAX_LIST_PADDING + 1).to_string();
        assert!(!Container::set(&mut empty, &key, Value::Null));
        assert!(empty.is_empty());
    }

    #[test]
    fn list_set_rejects_non_numeric_key() {
        let mut list = items();
        assert!(!Container::set(&mut list, "foo", Value::from(1i64)));
        assert_eq!(list, items());
    }

    #[test]
    fn list_delete_leaves_hole() {
        let mut list = items();
        assert!(Container::delete(&mut list, "1"));
        assert_eq!(list.len(), 3);
        assert!(list[1].is_null());
    }

    #[test]
    fn list_delete_missing_is_noop() {
        let mut list = items();
        assert!(Container::delete(&mut list, "7"));
        assert!(Container::delete(&mut list, "foo"));
        assert_eq!(list, items());
    }
}
