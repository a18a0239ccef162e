//! Addressing modes: relative, root-anchored (`/...`) and named (`@name...`).

use objpath_value::Value;

use crate::options::AccessOptions;
use crate::path::{Path, Segment};

/// The object navigation starts from, and what is left of the path.
#[derive(Debug, Clone)]
pub struct ResolvedRoot {
    /// `None` when the caller passed `Null` or the addressed root does not
    /// exist. That is a "not found", not an error.
    pub obj: Option<Value>,
    pub segments: Vec<Segment>,
}

/// Pick the starting object from the first segment's addressing mode.
///
/// - `/rest` restarts at `options.root_obj`; the `/` is stripped in place.
/// - `@name` restarts at `options.named_obj(name)`; the segment is consumed.
/// - anything else starts at `caller`.
pub fn resolve_root(caller: &Value, path: Path, options: &AccessOptions) -> ResolvedRoot {
    if caller.is_null() {
        return ResolvedRoot {
            obj: None,
            segments: Vec::new(),
        };
    }

    let mut segments = path.segments;
    let Some(first) = segments.first_mut() else {
        return ResolvedRoot {
            obj: Some(caller.clone()),
            segments,
        };
    };

    if strip_root_anchor(first) {
        if options.root_obj.is_none() {
            log::debug!("root-anchored path but no root object is configured");
        }
        return ResolvedRoot {
            obj: options.root_obj.clone(),
            segments,
        };
    }

    let text = first.to_string();
    if let Some(name) = text.strip_prefix('@') {
        let obj = options.named_obj(name);
        if obj.is_none() {
            log::debug!("named root '@{}' did not resolve", name);
        }
        segments.remove(0);
        return ResolvedRoot { obj, segments };
    }

    ResolvedRoot {
        obj: Some(caller.clone()),
        segments,
    }
}

/// Remove a leading `/` and re-read what is left, so `/[0]` becomes the
/// bare index `[0]`. Returns whether there was one.
fn strip_root_anchor(segment: &mut Segment) -> bool {
    let text = segment.to_string();
    match text.strip_prefix('/') {
        Some(rest) => {
            *segment = Segment::parse(rest);
            true
        }
        None => false,
    }
}
