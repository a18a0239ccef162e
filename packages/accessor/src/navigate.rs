//! Walking every segment but the last, following or creating containers.

use objpath_value::Value;

use crate::options::Strategy;
use crate::path::{qualify, Segment};

/// One visited step: the object reached, the segment that reached it, and
/// the dotted name of everything visited so far.
#[derive(Debug, Clone)]
pub struct QualifiedObject {
    pub obj: Value,
    pub name: String,
    pub full_qualified_name: String,
}

/// Where navigation stopped.
#[derive(Debug, Clone)]
pub(crate) struct Navigation {
    /// Direct parent of the last segment.
    pub obj: Value,
    /// Starts with the root entry (empty names), ends with `obj`.
    pub parents: Vec<QualifiedObject>,
    /// Qualified name of `obj`.
    pub prefix: String,
    /// The container and key `obj` is stored under; `None` at the root.
    pub holder: Option<(Value, String)>,
}

/// Walk `segments[..len - 1]` from `start`.
///
/// In read mode (`create == false`) a missing member ends the walk with
/// `None` and nothing is touched. In write mode missing members are
/// synthesized and attached through the strategy: a list when the next
/// segment is a bare `[index]`, otherwise `strategy.create_object`. A
/// parent that refuses the new member (a scalar, a read-only store) ends
/// the walk with `None`.
pub(crate) fn navigate(
    start: Value,
    segments: &[Segment],
    create: bool,
    strategy: &Strategy,
) -> Option<Navigation> {
    let mut parents = vec![QualifiedObject {
        obj: start.clone(),
        name: String::new(),
        full_qualified_name: String::new(),
    }];
    let mut obj = start;
    let mut prefix = String::new();
    let mut holder = None;

    let steps = segments.len().saturating_sub(1);
    for (position, segment) in segments[..steps].iter().enumerate() {
        let next_is_index = segments[position + 1].is_index();

        let (container, key) = match segment {
            Segment::Name(key) | Segment::Index(key) => (obj.clone(), key.as_str()),
            Segment::Indexed { name, index } => {
                let array = member_or_create(&obj, name, create, strategy, &prefix, Value::array)?;
                (array, index.as_str())
            }
        };

        let child = member_or_create(&container, key, create, strategy, &prefix, || {
            if next_is_index {
                Value::array()
            } else {
                strategy.create_object(&container, key)
            }
        })?;

        let name = segment.to_string();
        prefix = qualify(&prefix, &name);
        parents.push(QualifiedObject {
            obj: child.clone(),
            name,
            full_qualified_name: prefix.clone(),
        });
        holder = Some((container, key.to_string()));
        obj = child;
    }

    Some(Navigation {
        obj,
        parents,
        prefix,
        holder,
    })
}

/// Read `parent[key]`, synthesizing it with `make` in write mode.
///
/// A `Null` member counts as missing. `None` when the member is missing
/// in read mode, or when the new member could not be attached.
pub(crate) fn member_or_create(
    parent: &Value,
    key: &str,
    create: bool,
    strategy: &Strategy,
    at: &str,
    make: impl FnOnce() -> Value,
) -> Option<Value> {
    if let Some(found) = strategy.get_value(parent, key).filter(|v| !v.is_null()) {
        return Some(found);
    }

    if !create {
        log::debug!("member '{}' not found under '{}'", key, at);
        return None;
    }

    let child = make();
    log::trace!("creating missing member '{}' under '{}'", key, at);
    if !strategy.set_value(parent, key, child.clone()) {
        log::debug!("could not attach member '{}' under '{}'", key, at);
        return None;
    }
    Some(child)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Path;
    use serde_json::json;

    fn segments(s: &str) -> Vec<Segment> {
        Path::parse(s, ".").segments
    }

    fn fixture() -> Value {
        Value::from(json!({ "a": { "b": { "c": 1, "array": [11, 12] } } }))
    }

    #[test]
    fn records_every_step() {
        let root = fixture();
        let nav = navigate(root.clone(), &segments("a.b.c"), false, &Strategy::default()).unwrap();

        assert_eq!(nav.parents.len(), 3);
        assert!(nav.parents[0].obj.same(&root));
        assert_eq!(nav.parents[0].name, "");
        assert_eq!(nav.parents[1].name, "a");
        assert_eq!(nav.parents[2].full_qualified_name, "a.b");
        assert_eq!(nav.prefix, "a.b");

        let b = root.member("a").unwrap().member("b").unwrap();
        assert!(nav.obj.same(&b));

        let (holder, key) = nav.holder.unwrap();
        assert!(holder.same(&root.member("a").unwrap()));
        assert_eq!(key, "b");
    }

    #[test]
    fn single_segment_stays_at_root() {
        let root = fixture();
        let nav = navigate(root.clone(), &segments("a"), false, &Strategy::default()).unwrap();
        assert_eq!(nav.parents.len(), 1);
        assert!(nav.obj.same(&root));
        assert!(nav.holder.is_none());
    }

    #[test]
    fn read_mode_stops_on_missing() {
        let root = fixture();
        let before = root.deep_copy();
        assert!(navigate(root.clone(), &segments("a.x.c"), false, &Strategy::default()).is_none());
        assert_eq!(root, before);
    }

    #[test]
    fn null_member_counts_as_missing() {
        let root = Value::from(json!({ "a": null }));
        assert!(navigate(root, &segments("a.b"), false, &Strategy::default()).is_none());
    }

    #[test]
    fn write_mode_creates_maps() {
        let root = Value::map();
        let nav = navigate(root.clone(), &segments("a.b.c"), true, &Strategy::default()).unwrap();
        assert!(nav.obj.is_map());
        assert_eq!(root.to_json(), json!({ "a": { "b": {} } }));
    }

    #[test]
    fn write_mode_creates_list_before_bare_index() {
        let root = Value::map();
        navigate(root.clone(), &segments("a.list.[0]"), true, &Strategy::default()).unwrap();
        assert_eq!(root.to_json(), json!({ "a": { "list": [] } }));
    }

    #[test]
    fn write_mode_creates_indexed_containers() {
        let root = Value::map();
        navigate(root.clone(), &segments("rows[0].x"), true, &Strategy::default()).unwrap();
        assert_eq!(root.to_json(), json!({ "rows": [{}] }));
    }

    #[test]
    fn write_mode_keeps_existing() {
        let root = fixture();
        let b = root.member("a").unwrap().member("b").unwrap();
        let nav = navigate(root.clone(), &segments("a.b.z"), true, &Strategy::default()).unwrap();
        assert!(nav.obj.same(&b));
        assert_eq!(b.member("c"), Some(Value::from(1i64)));
    }

    #[test]
    fn indexed_step_descends_into_element() {
        let root = Value::from(json!({ "rows": [{ "x": 1 }, { "x": 2 }] }));
        let nav =
            navigate(root.clone(), &segments("rows[1].x"), false, &Strategy::default()).unwrap();
        assert_eq!(nav.obj.member("x"), Some(Value::from(2i64)));
        assert_eq!(nav.prefix, "rows[1]");
        let (holder, key) = nav.holder.unwrap();
        assert!(holder.same(&root.member("rows").unwrap()));
        assert_eq!(key, "1");
    }

    #[test]
    fn write_mode_stops_at_scalar() {
        let root = Value::from(json!({ "a": { "b": 1 } }));
        assert!(navigate(root.clone(), &segments("a.b.c.d"), true, &Strategy::default()).is_none());
        assert_eq!(root.to_json(), json!({ "a": { "b": 1 } }));
    }

    #[test]
    fn write_mode_stops_when_attach_refused() {
        let strategy = Strategy::default().with_set_value(|_, _, _| false);
        let root = Value::map();
        assert!(navigate(root.clone(), &segments("a.b"), true, &strategy).is_none());
        assert_eq!(root.to_json(), json!({}));
    }

    #[test]
    fn create_object_override_is_used() {
        let strategy = Strategy::default().with_create_object(|_, key| {
            Value::from(json!({ "created_for": key }))
        });
        let root = Value::map();
        navigate(root.clone(), &segments("a.b"), true, &strategy).unwrap();
        assert_eq!(root.to_json(), json!({ "a": { "created_for": "a" } }));
    }
}
