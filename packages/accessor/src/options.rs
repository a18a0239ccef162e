//! Per-call configuration: path syntax, root redirection, member strategy.

use std::fmt;
use std::rc::Rc;

use objpath_value::Value;
use serde::{Deserialize, Serialize};

/// Serializable path syntax settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct PathConfig {
    /// Separator used when a path is given as one string.
    pub path_separator: String,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            path_separator: ".".to_string(),
        }
    }
}

pub type GetValueFn = Rc<dyn Fn(&Value, &str) -> Option<Value>>;
pub type SetValueFn = Rc<dyn Fn(&Value, &str, Value) -> bool>;
pub type DeleteMemberFn = Rc<dyn Fn(&Value, &str) -> bool>;
pub type CreateObjectFn = Rc<dyn Fn(&Value, &str) -> Value>;
pub type NamedObjectFn = Rc<dyn Fn(&str) -> Option<Value>>;

/// The low-level member callbacks the engine navigates with.
///
/// Every read, write and delete the engine performs on a parent goes
/// through here, so replacing a field redirects the engine to a different
/// backing layout without the navigator knowing. The defaults use the
/// [`objpath_value::Container`] capability of the parent.
///
/// ```rust
/// use objpath_accessor::Strategy;
/// use objpath_value::Value;
///
/// // Members live under `<name>_`.
/// let strategy = Strategy::default()
///     .with_get_value(|parent, key| parent.member(&format!("{}_", key)))
///     .with_set_value(|parent, key, value| parent.set_member(&format!("{}_", key), value));
///
/// let data = Value::map();
/// strategy.set_value(&data, "a", Value::from(1i64));
/// assert_eq!(data.member("a_"), Some(Value::from(1i64)));
/// ```
#[derive(Clone)]
pub struct Strategy {
    get_value: GetValueFn,
    set_value: SetValueFn,
    delete_member: DeleteMemberFn,
    create_object: CreateObjectFn,
}

impl Strategy {
    /// Replace member reads.
    #[must_use]
    pub fn with_get_value(mut self, f: impl Fn(&Value, &str) -> Option<Value> + 'static) -> Self {
        self.get_value = Rc::new(f);
        self
    }

    /// Replace member writes, including the attachment of synthesized
    /// containers.
    #[must_use]
    pub fn with_set_value(mut self, f: impl Fn(&Value, &str, Value) -> bool + 'static) -> Self {
        self.set_value = Rc::new(f);
        self
    }

    /// Replace member deletion.
    #[must_use]
    pub fn with_delete_member(mut self, f: impl Fn(&Value, &str) -> bool + 'static) -> Self {
        self.delete_member = Rc::new(f);
        self
    }

    /// Replace synthesis of missing keyed containers. Missing lists are
    /// always created as plain arrays.
    #[must_use]
    pub fn with_create_object(mut self, f: impl Fn(&Value, &str) -> Value + 'static) -> Self {
        self.create_object = Rc::new(f);
        self
    }

    pub fn get_value(&self, parent: &Value, key: &str) -> Option<Value> {
        (self.get_value)(parent, key)
    }

    pub fn set_value(&self, parent: &Value, key: &str, value: Value) -> bool {
        (self.set_value)(parent, key, value)
    }

    pub fn delete_member(&self, parent: &Value, key: &str) -> bool {
        (self.delete_member)(parent, key)
    }

    pub fn create_object(&self, parent: &Value, key: &str) -> Value {
        (self.create_object)(parent, key)
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Self {
            get_value: Rc::new(|parent: &Value, key: &str| parent.member(key)),
            set_value: Rc::new(|parent: &Value, key: &str, value: Value| {
                parent.set_member(key, value)
            }),
            delete_member: Rc::new(|parent: &Value, key: &str| parent.delete_member(key)),
            create_object: Rc::new(|_: &Value, _: &str| Value::map()),
        }
    }
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Strategy").finish_non_exhaustive()
    }
}

/// Everything a single operation can be configured with.
///
/// ```rust
/// use objpath_accessor::{get_child_value, AccessOptions};
/// use objpath_value::Value;
/// use serde_json::json;
///
/// let root = Value::from(json!({ "a": { "b": { "c": 1 } } }));
/// let sub = root.member("a").unwrap().member("b").unwrap();
///
/// let options = AccessOptions::default().with_root(root.clone());
/// assert_eq!(get_child_value(&sub, "/a.b.c", &options).value, Some(Value::from(1i64)));
/// ```
#[derive(Clone, Default)]
pub struct AccessOptions {
    pub config: PathConfig,
    /// Target for `/`-prefixed paths.
    pub root_obj: Option<Value>,
    named: Option<NamedObjectFn>,
    pub strategy: Strategy,
}

impl AccessOptions {
    pub fn from_config(config: PathConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.path_separator = separator.into();
        self
    }

    #[must_use]
    pub fn with_root(mut self, root: Value) -> Self {
        self.root_obj = Some(root);
        self
    }

    /// Resolver for `@name`-prefixed paths.
    #[must_use]
    pub fn with_named(mut self, f: impl Fn(&str) -> Option<Value> + 'static) -> Self {
        self.named = Some(Rc::new(f));
        self
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn separator(&self) -> &str {
        &self.config.path_separator
    }

    /// Look up a named object. `None` when no resolver is configured.
    pub fn named_obj(&self, name: &str) -> Option<Value> {
        self.named.as_ref().and_then(|f| f(name))
    }
}

impl fmt::Debug for AccessOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessOptions")
            .field("config", &self.config)
            .field("root_obj", &self.root_obj)
            .field("named", &self.named.is_some())
            .finish_non_exhaustive()
    }
}
