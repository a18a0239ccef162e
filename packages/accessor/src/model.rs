//! The caller-facing operations.

use objpath_value::Value;

use crate::accessor::{build_accessor, Accessor};
use crate::options::AccessOptions;
use crate::path::{Path, PathInput};
use crate::root::resolve_root;

/// Result of [`ObjectModel::get_child_value`].
#[derive(Debug, Clone)]
pub struct ChildValue {
    /// `None` when a link of the path is missing.
    pub accessor: Option<Accessor>,
    pub value: Option<Value>,
}

/// Result of [`ObjectModel::set_child_value`].
#[derive(Debug, Clone)]
pub struct SetChildValue {
    pub accessor: Accessor,
    pub success: bool,
}

/// Result of [`ObjectModel::delete_child_member`].
#[derive(Debug, Clone)]
pub struct DeleteChildMember {
    pub accessor: Option<Accessor>,
    pub success: bool,
    /// The value held before the delete.
    pub deleted: Option<Value>,
}

/// Path-addressed access to an object graph.
///
/// Every method has a working default. The value-level operations are
/// built on [`ObjectModel::get_child_member`], so an implementation that
/// overrides it changes how all of them resolve paths.
///
/// ```rust
/// use std::cell::Cell;
///
/// use objpath_accessor::{AccessOptions, Accessor, DefaultObjectModel, ObjectModel, PathInput};
/// use objpath_value::Value;
///
/// /// Counts lookups.
/// #[derive(Default)]
/// struct Counting {
///     lookups: Cell<usize>,
/// }
///
/// impl ObjectModel for Counting {
///     fn get_child_member(
///         &self,
///         root: &Value,
///         path: PathInput,
///         create_missing_objects: bool,
///         options: &AccessOptions,
///     ) -> Option<Accessor> {
///         self.lookups.set(self.lookups.get() + 1);
///         DefaultObjectModel.get_child_member(root, path, create_missing_objects, options)
///     }
/// }
///
/// let model = Counting::default();
/// let root = Value::map();
/// let options = AccessOptions::default();
/// model.set_child_value(&root, "a.b".into(), Value::from(1i64), &options);
/// model.get_child_value(&root, "a.b".into(), &options);
/// assert_eq!(model.lookups.get(), 2);
/// ```
pub trait ObjectModel {
    /// Resolve `path` against `root` into an accessor descriptor.
    ///
    /// With `create_missing_objects == false` nothing is mutated and a
    /// missing intermediate member yields `None`. With `true` the missing
    /// structure is created, and `None` only means a parent refused a new
    /// member; the leaf itself is not written.
    fn get_child_member(
        &self,
        root: &Value,
        path: PathInput,
        create_missing_objects: bool,
        options: &AccessOptions,
    ) -> Option<Accessor> {
        let path = Path::parse(path, options.separator());
        let resolved = resolve_root(root, path, options);
        build_accessor(root.clone(), resolved, create_missing_objects, &options.strategy)
    }

    /// Read the value at `path` without creating anything.
    fn get_child_value(
        &self,
        root: &Value,
        path: PathInput,
        options: &AccessOptions,
    ) -> ChildValue {
        let accessor = self.get_child_member(root, path, false, options);
        let value = accessor.as_ref().and_then(Accessor::get_value);
        ChildValue { accessor, value }
    }

    /// Create whatever is missing along `path`, then write `value` there.
    fn set_child_value(
        &self,
        root: &Value,
        path: PathInput,
        value: Value,
        options: &AccessOptions,
    ) -> SetChildValue {
        match self.get_child_member(root, path, true, options) {
            Some(accessor) => {
                let success = accessor.set_value(value);
                SetChildValue { accessor, success }
            }
            None => {
                log::debug!("object model produced no accessor in write mode");
                SetChildValue {
                    accessor: Accessor::unresolved(root.clone(), None, options.strategy.clone()),
                    success: false,
                }
            }
        }
    }

    /// Delete the member at `path`. A missing member is a no-op.
    fn delete_child_member(
        &self,
        root: &Value,
        path: PathInput,
        options: &AccessOptions,
    ) -> DeleteChildMember {
        let accessor = self.get_child_member(root, path, false, options);
        let deleted = accessor.as_ref().and_then(Accessor::get_value);
        let success = accessor.as_ref().is_some_and(Accessor::delete_member);
        DeleteChildMember {
            accessor,
            success,
            deleted,
        }
    }
}

/// The object model with every default in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultObjectModel;

impl ObjectModel for DefaultObjectModel {}

/// [`ObjectModel::get_child_member`] on the default model.
pub fn get_child_member(
    root: &Value,
    path: impl Into<PathInput>,
    create_missing_objects: bool,
    options: &AccessOptions,
) -> Option<Accessor> {
    DefaultObjectModel.get_child_member(root, path.into(), create_missing_objects, options)
}

/// [`ObjectModel::get_child_value`] on the default model.
pub fn get_child_value(
    root: &Value,
    path: impl Into<PathInput>,
    options: &AccessOptions,
) -> ChildValue {
    DefaultObjectModel.get_child_value(root, path.into(), options)
}

/// [`ObjectModel::set_child_value`] on the default model.
pub fn set_child_value(
    root: &Value,
    path: impl Into<PathInput>,
    value: Value,
    options: &AccessOptions,
) -> SetChildValue {
    DefaultObjectModel.set_child_value(root, path.into(), value, options)
}

/// [`ObjectModel::delete_child_member`] on the default model.
pub fn delete_child_member(
    root: &Value,
    path: impl Into<PathInput>,
    options: &AccessOptions,
) -> DeleteChildMember {
    DefaultObjectModel.delete_child_member(root, path.into(), options)
}
