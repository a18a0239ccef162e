//! objpath values: the object graph
//!
//! This layer holds the data the accessor engine walks over:
//! - `Value`: a dynamically typed tree whose containers are shared handles
//! - `Container`: the get/set/delete capability every container offers
//! - comparison primitives (`equal`, `is_empty`, `parse_index`)
//! - conversions to and from `serde_json` and serde types
//!
//! Values are single-threaded (`Rc<RefCell<_>>`). Callers that share a graph
//! across threads must wrap and synchronize it themselves.
//!
//! # Example
//!
//! ```rust
//! use objpath_value::Value;
//! use serde_json::json;
//!
//! let root = Value::from(json!({ "a": { "b": 1 } }));
//! let a = root.member("a").unwrap();
//! a.set_member("c", Value::from(2i64));
//!
//! // `a` shares its map with `root`.
//! assert_eq!(root.to_json(), json!({ "a": { "b": 1, "c": 2 } }));
//! ```

mod compare;
mod container;
mod convert;
mod error;
mod value;

pub use compare::{equal, is_empty, parse_index};
pub use container::{Container, MAX_LIST_PADDING};
pub use convert::{from_value, to_value};
pub use error::Error;
pub use value::{Shared, Value};
