//! objpath: read, write and delete values at a path inside an object graph.
//!
//! A path such as `a.b.array[2]` names a member several levels down. Reads
//! of missing members yield `None`, writes create whatever is missing, and
//! deletes of missing members are no-ops.
//!
//! The workspace is layered:
//! - `objpath-value`: the [`Value`] graph and the [`Container`] capability
//! - `objpath-accessor`: path parsing, root resolution and the accessor engine
//!
//! # Example
//!
//! ```rust
//! use objpath::{get_child_value, set_child_value, AccessOptions, Value};
//!
//! let options = AccessOptions::default();
//! let config = Value::map();
//!
//! set_child_value(&config, "server.ports[0]", Value::from(8080i64), &options);
//! let port = get_child_value(&config, "server.ports[0]", &options).value;
//! assert_eq!(port.and_then(|v| v.as_i64()), Some(8080));
//! ```

pub use objpath_accessor::{
    delete_child_member, get_child_member, get_child_value, resolve_root, set_child_value,
    AccessOptions, Accessor, ArraySpec, ChildValue, DefaultObjectModel, DeleteChildMember,
    ObjectModel, Path, PathConfig, PathInput, QualifiedObject, ResolvedRoot, Segment,
    SetChildValue, Strategy,
};
pub use objpath_value::{
    equal, from_value, is_empty, parse_index, to_value, Container, Error, Shared, Value,
    MAX_LIST_PADDING,
};
