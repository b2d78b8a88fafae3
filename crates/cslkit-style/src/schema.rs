//! Schema registry for style node kinds.
//!
//! Each node kind can declare, exactly once, the set of attribute keys it
//! accepts, default attribute values, and the child roles it allows. A kind
//! that never declares attributes is *open*: it accepts any attribute key.
//! Defaults are applied lazily at read time, never at construction.

use crate::{Error, Result};
use hashlink::LinkedHashMap;

/// Wildcard child kind: the role accepts children of any kind.
pub const ANY_KIND: &str = "*";

/// Per-kind declaration: legal attributes, defaults, and child roles.
#[derive(Debug, Clone, Default)]
struct KindSchema {
    /// Declared attribute keys, in declaration order. `None` means the kind
    /// is open and accepts any key.
    attributes: Option<Vec<String>>,
    /// Default attribute values, applied at read time.
    defaults: LinkedHashMap<String, String>,
    /// Child role name to expected child kind ([`ANY_KIND`] for any).
    children: Option<LinkedHashMap<String, String>>,
}

/// Registry of node-kind declarations backing a [`StyleTree`](crate::StyleTree).
#[derive(Debug, Clone, Default)]
pub struct Schema {
    kinds: LinkedHashMap<String, KindSchema>,
}

impl Schema {
    /// Create an empty schema with no kinds declared.
    pub fn new() -> Self {
        <Self as Default>::default()
    }

    /// Declare the legal attribute keys for `kind`. May be called at most
    /// once per kind; a second call is an error.
    pub fn declare_attributes(&mut self, kind: &str, names: &[&str]) -> Result<()> {
        let entry = self.kinds.entry(kind.to_string()).or_insert_with(KindSchema::default);
        if entry.attributes.is_some() {
            return Err(Error::SchemaRedeclared {
                kind: kind.to_string(),
            });
        }
        entry.attributes = Some(names.iter().map(|n| (*n).to_string()).collect());
        Ok(())
    }

    /// Declare default attribute values for `kind`. Every default key must
    /// be a declared attribute of the kind (open kinds accept any key).
    pub fn declare_defaults(&mut self, kind: &str, pairs: &[(&str, &str)]) -> Result<()> {
        for (key, _) in pairs {
            if !self.allows_attribute(kind, key) {
                return Err(Error::UndeclaredAttribute {
                    kind: kind.to_string(),
                    attribute: (*key).to_string(),
                });
            }
        }
        let entry = self.kinds.entry(kind.to_string()).or_insert_with(KindSchema::default);
        for (key, value) in pairs {
            entry
                .defaults
                .insert((*key).to_string(), (*value).to_string());
        }
        Ok(())
    }

    /// Declare the legal child roles for `kind` as `(role, child kind)`
    /// pairs; use [`ANY_KIND`] when a role accepts any child. May be called
    /// at most once per kind.
    pub fn declare_children(&mut self, kind: &str, roles: &[(&str, &str)]) -> Result<()> {
        let entry = self.kinds.entry(kind.to_string()).or_insert_with(KindSchema::default);
        if entry.children.is_some() {
            return Err(Error::SchemaRedeclared {
                kind: kind.to_string(),
            });
        }
        let mut map = LinkedHashMap::new();
        for (role, child_kind) in roles {
            map.insert((*role).to_string(), (*child_kind).to_string());
        }
        entry.children = Some(map);
        Ok(())
    }

    /// Whether `kind` has no declared attribute schema and therefore
    /// accepts arbitrary attribute keys.
    pub fn is_open(&self, kind: &str) -> bool {
        self.kinds
            .get(kind)
            .is_none_or(|k| k.attributes.is_none())
    }

    /// Whether `key` is a legal attribute for `kind`.
    pub fn allows_attribute(&self, kind: &str, key: &str) -> bool {
        match self.kinds.get(kind).and_then(|k| k.attributes.as_ref()) {
            Some(names) => names.iter().any(|n| n == key),
            None => true,
        }
    }

    /// The declared default value for `kind.key`, if any.
    pub fn default(&self, kind: &str, key: &str) -> Option<&str> {
        self.kinds
            .get(kind)
            .and_then(|k| k.defaults.get(key))
            .map(String::as_str)
    }

    /// The declared child kind for `role` of `kind`, if the role exists.
    pub fn child_kind(&self, kind: &str, role: &str) -> Option<&str> {
        self.kinds
            .get(kind)
            .and_then(|k| k.children.as_ref())
            .and_then(|roles| roles.get(role))
            .map(String::as_str)
    }

    /// Whether `kind` declares any child roles at all.
    pub fn has_children(&self, kind: &str) -> bool {
        self.kinds
            .get(kind)
            .and_then(|k| k.children.as_ref())
            .is_some_and(|roles| !roles.is_empty())
    }

    /// Declared attribute keys of `kind`, in declaration order. Empty for
    /// open kinds.
    pub fn attribute_keys(&self, kind: &str) -> impl Iterator<Item = &str> {
        self.kinds
            .get(kind)
            .and_then(|k| k.attributes.as_deref())
            .unwrap_or_default()
            .iter()
            .map(String::as_str)
    }

    /// Infallible declaration used by built-in schemas. Overwrites any
    /// previous declaration for the kind.
    pub(crate) fn declare(
        &mut self,
        kind: &str,
        attributes: Option<&[&str]>,
        defaults: &[(&str, &str)],
        children: &[(&str, &str)],
    ) {
        let mut entry = KindSchema {
            attributes: attributes.map(|a| a.iter().map(|n| (*n).to_string()).collect()),
            ..KindSchema::default()
        };
        for (key, value) in defaults {
            entry
                .defaults
                .insert((*key).to_string(), (*value).to_string());
        }
        if !children.is_empty() {
            let mut map = LinkedHashMap::new();
            for (role, child_kind) in children {
                map.insert((*role).to_string(), (*child_kind).to_string());
            }
            entry.children = Some(map);
        }
        self.kinds.insert(kind.to_string(), entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_kind_restricts_attributes() {
        let mut schema = Schema::new();
        schema.declare_attributes("foo-bar", &["foo", "bar"]).unwrap();

        assert!(!schema.is_open("foo-bar"));
        assert!(schema.allows_attribute("foo-bar", "foo"));
        assert!(schema.allows_attribute("foo-bar", "bar"));
        assert!(!schema.allows_attribute("foo-bar", "baz"));
        assert_eq!(
            schema.attribute_keys("foo-bar").collect::<Vec<_>>(),
            vec!["foo", "bar"]
        );
    }

    #[test]
    fn test_undeclared_kind_is_open() {
        let schema = Schema::new();
        assert!(schema.is_open("anything"));
        assert!(schema.allows_attribute("anything", "whatever"));
        assert_eq!(schema.attribute_keys("anything").count(), 0);
    }

    #[test]
    fn test_redeclaring_attributes_fails() {
        let mut schema = Schema::new();
        schema.declare_attributes("foo", &["a"]).unwrap();
        let err = schema.declare_attributes("foo", &["b"]).unwrap_err();
        assert_eq!(
            err,
            Error::SchemaRedeclared {
                kind: "foo".to_string()
            }
        );
        // The original declaration is untouched.
        assert!(schema.allows_attribute("foo", "a"));
        assert!(!schema.allows_attribute("foo", "b"));
    }

    #[test]
    fn test_defaults_require_declared_keys() {
        let mut schema = Schema::new();
        schema.declare_attributes("foo", &["a"]).unwrap();
        schema.declare_defaults("foo", &[("a", "1")]).unwrap();
        assert_eq!(schema.default("foo", "a"), Some("1"));

        let err = schema.declare_defaults("foo", &[("b", "2")]).unwrap_err();
        assert_eq!(
            err,
            Error::UndeclaredAttribute {
                kind: "foo".to_string(),
                attribute: "b".to_string()
            }
        );
    }

    #[test]
    fn test_open_kind_accepts_any_default() {
        let mut schema = Schema::new();
        schema.declare_defaults("open", &[("x", "y")]).unwrap();
        assert_eq!(schema.default("open", "x"), Some("y"));
    }

    #[test]
    fn test_child_roles() {
        let mut schema = Schema::new();
        schema
            .declare_children("parent", &[("item", "child"), ("extra", ANY_KIND)])
            .unwrap();

        assert!(schema.has_children("parent"));
        assert_eq!(schema.child_kind("parent", "item"), Some("child"));
        assert_eq!(schema.child_kind("parent", "extra"), Some(ANY_KIND));
        assert_eq!(schema.child_kind("parent", "other"), None);
        assert!(!schema.has_children("leaf"));

        let err = schema.declare_children("parent", &[]).unwrap_err();
        assert_eq!(
            err,
            Error::SchemaRedeclared {
                kind: "parent".to_string()
            }
        );
    }
}
