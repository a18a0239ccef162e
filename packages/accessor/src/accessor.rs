//! Accessor descriptors: a resolved member location with get/set/delete.

use objpath_value::{parse_index, Value};

use crate::navigate::{member_or_create, navigate, QualifiedObject};
use crate::options::Strategy;
use crate::path::{qualify, Segment};
use crate::root::ResolvedRoot;

/// Present when the last segment addressed a list element.
#[derive(Debug, Clone)]
pub struct ArraySpec {
    /// The list itself.
    pub array: Value,
    /// The element key as written in the path; not necessarily numeric.
    pub index: String,
    /// `[index]`.
    pub name: String,
    /// Qualified name of the element, e.g. `a.b.array[0]`.
    pub full_qualified_name: String,
}

#[derive(Debug, Clone)]
enum Target {
    /// Empty path or unresolved root: reads give the start object, writes fail.
    Unresolved(Option<Value>),
    /// `parent[key]` through the strategy.
    Member { parent: Value, key: String },
    /// `name[index]`: `array` is `owner[name]`.
    Element {
        owner: Value,
        name: String,
        array: Value,
        index: String,
    },
    /// Bare `[index]` on the list reached by the previous segment.
    BareElement {
        holder: Option<(Value, String)>,
        array: Value,
        index: String,
    },
}

/// A member location, resolved once and bound to the graph.
///
/// Descriptors are snapshots: they are created fresh per lookup and hold
/// shared handles to the containers they visited, so later writes through
/// [`Accessor::set_value`] land in the caller's graph.
#[derive(Debug, Clone)]
pub struct Accessor {
    root_obj: Value,
    obj: Value,
    name: String,
    full_qualified_name: String,
    parents: Vec<QualifiedObject>,
    array_spec: Option<ArraySpec>,
    target: Target,
    strategy: Strategy,
}

impl Accessor {
    /// The descriptor for an empty path or a root that did not resolve.
    pub(crate) fn unresolved(root_obj: Value, start: Option<Value>, strategy: Strategy) -> Self {
        Self {
            obj: root_obj.clone(),
            root_obj,
            name: String::new(),
            full_qualified_name: String::new(),
            parents: Vec::new(),
            array_spec: None,
            target: Target::Unresolved(start),
            strategy,
        }
    }

    /// The object the caller passed in.
    pub fn root_obj(&self) -> &Value {
        &self.root_obj
    }

    /// Direct parent of the addressed member (for list elements, the owner
    /// of the list).
    pub fn obj(&self) -> &Value {
        &self.obj
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// For list elements this names the list, see [`ArraySpec`].
    pub fn full_qualified_name(&self) -> &str {
        &self.full_qualified_name
    }

    /// Every ancestor from the resolved root down to [`Accessor::obj`].
    pub fn parents(&self) -> &[QualifiedObject] {
        &self.parents
    }

    pub fn array_spec(&self) -> Option<&ArraySpec> {
        self.array_spec.as_ref()
    }

    /// Read the addressed member.
    pub fn get_value(&self) -> Option<Value> {
        match &self.target {
            Target::Unresolved(start) => start.clone(),
            Target::Member { parent, key } => self.strategy.get_value(parent, key),
            Target::Element { array, index, .. } => array.member(index),
            Target::BareElement { array, index, .. } => self.strategy.get_value(array, index),
        }
    }

    /// Write the addressed member. Returns the underlying setter's verdict.
    pub fn set_value(&self, value: Value) -> bool {
        match &self.target {
            Target::Unresolved(_) => false,
            Target::Member { parent, key } => self.strategy.set_value(parent, key, value),
            Target::Element { array, index, .. } => array.set_member(index, value),
            Target::BareElement { array, index, .. } => {
                self.strategy.set_value(array, index, value)
            }
        }
    }

    /// Delete the addressed member.
    ///
    /// A numeric index into a real list removes the element and shifts the
    /// rest down: the shortened list is written back where the list lives.
    /// Any other index is deleted as a key.
    pub fn delete_member(&self) -> bool {
        match &self.target {
            Target::Unresolved(_) => false,
            Target::Member { parent, key } => self.strategy.delete_member(parent, key),
            Target::Element {
                owner,
                name,
                array,
                index,
            } => match without_index(array, index) {
                Some(list) => self.strategy.set_value(owner, name, list),
                None => array.delete_member(index),
            },
            Target::BareElement {
                holder,
                array,
                index,
            } => match without_index(array, index) {
                Some(list) => holder
                    .as_ref()
                    .is_some_and(|(owner, key)| self.strategy.set_value(owner, key, list)),
                None => self.strategy.delete_member(array, index),
            },
        }
    }
}

/// A copy of `array` without the element at `index`, or `None` when
/// `array` is not a list or `index` is not numeric.
fn without_index(array: &Value, index: &str) -> Option<Value> {
    let position = parse_index(index)?;
    let mut items = array.items()?;
    if position < items.len() {
        items.remove(position);
    }
    log::trace!("re-indexing list without element {}", position);
    Some(Value::from_items(items))
}

/// Turn a resolved root into a descriptor for its last segment.
///
/// `None` only in read mode, when a link in the chain is missing.
pub(crate) fn build_accessor(
    root_obj: Value,
    resolved: ResolvedRoot,
    create: bool,
    strategy: &Strategy,
) -> Option<Accessor> {
    let ResolvedRoot { obj, segments } = resolved;
    let (start, last) = match (obj, segments.last()) {
        (Some(start), Some(last)) => (start, last),
        (start, _) => return Some(Accessor::unresolved(root_obj, start, strategy.clone())),
    };

    let nav = navigate(start, &segments, create, strategy)?;

    let accessor = match last {
        Segment::Name(name) => Accessor {
            root_obj,
            obj: nav.obj.clone(),
            name: name.clone(),
            full_qualified_name: qualify(&nav.prefix, name),
            parents: nav.parents,
            array_spec: None,
            target: Target::Member {
                parent: nav.obj,
                key: name.clone(),
            },
            strategy: strategy.clone(),
        },
        Segment::Indexed { name, index } => {
            let array =
                member_or_create(&nav.obj, name, create, strategy, &nav.prefix, Value::array)?;
            Accessor {
                root_obj,
                obj: nav.obj.clone(),
                name: name.clone(),
                full_qualified_name: qualify(&nav.prefix, name),
                parents: nav.parents,
                array_spec: Some(ArraySpec {
                    array: array.clone(),
                    index: index.clone(),
                    name: format!("[{}]", index),
                    full_qualified_name: qualify(&nav.prefix, &last.to_string()),
                }),
                target: Target::Element {
                    owner: nav.obj,
                    name: name.clone(),
                    array,
                    index: index.clone(),
                },
                strategy: strategy.clone(),
            }
        }
        Segment::Index(index) => {
            // The list entry was the last navigation step; it names this
            // descriptor and is not repeated in `parents`.
            let mut parents = nav.parents;
            let list_entry = parents.pop()?;
            let obj = parents
                .last()
                .map_or_else(|| nav.obj.clone(), |owner| owner.obj.clone());
            Accessor {
                root_obj,
                obj,
                name: list_entry.name,
                full_qualified_name: list_entry.full_qualified_name,
                parents,
                array_spec: Some(ArraySpec {
                    array: nav.obj.clone(),
                    index: index.clone(),
                    name: last.to_string(),
                    full_qualified_name: qualify(&nav.prefix, &last.to_string()),
                }),
                target: Target::BareElement {
                    holder: nav.holder,
                    array: nav.obj,
                    index: index.clone(),
                },
                strategy: strategy.clone(),
            }
        }
    };

    Some(accessor)
}
