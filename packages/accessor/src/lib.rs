//! objpath accessor engine
//!
//! Reads, writes and deletes values at a path inside a [`Value`] graph:
//! - `Path`: dotted/bracketed path expressions (`a.b.array[2]`, `a.list.[0]`)
//! - addressing modes: relative, root-anchored (`/a.b`), named (`@name.c`)
//! - `Accessor`: a resolved location with get/set/delete
//! - `Strategy`: pluggable member callbacks for non-plain backing stores
//! - `ObjectModel`: the operations, each with an overridable default
//!
//! Absence is never an error. Reads of missing members return `None`,
//! writes create the missing structure, deletes of missing members are
//! no-ops.
//!
//! # Example
//!
//! ```rust
//! use objpath_accessor::{delete_child_member, get_child_value, set_child_value, AccessOptions};
//! use objpath_value::Value;
//! use serde_json::json;
//!
//! let options = AccessOptions::default();
//! let root = Value::map();
//!
//! set_child_value(&root, "a.b.array[0]", Value::from(11i64), &options);
//! set_child_value(&root, "a.b.array[1]", Value::from(12i64), &options);
//! assert_eq!(root.to_json(), json!({ "a": { "b": { "array": [11, 12] } } }));
//!
//! let removed = delete_child_member(&root, "a.b.array[0]", &options);
//! assert_eq!(removed.deleted, Some(Value::from(11i64)));
//! assert_eq!(
//!     get_child_value(&root, "a.b.array[0]", &options).value,
//!     Some(Value::from(12i64))
//! );
//! ```

mod accessor;
mod model;
mod navigate;
mod options;
mod path;
mod root;

pub use accessor::{Accessor, ArraySpec};
pub use model::{
    delete_child_member, get_child_member, get_child_value, set_child_value, ChildValue,
    DefaultObjectModel, DeleteChildMember, ObjectModel, SetChildValue,
};
pub use navigate::QualifiedObject;
pub use options::{
    AccessOptions, CreateObjectFn, DeleteMemberFn, GetValueFn, NamedObjectFn, PathConfig,
    SetValueFn, Strategy,
};
pub use path::{Path, PathInput, Segment};
pub use root::{resolve_root, ResolvedRoot};

// Re-export the value layer for convenience
pub use objpath_value::Value;
