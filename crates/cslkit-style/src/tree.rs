//! Arena-owned style node tree.
//!
//! The tree owns every node; nodes address each other through copyable
//! [`NodeId`]s. Parent links are lookup-only back-references resolved
//! through the tree, never ownership edges, so attribute inheritance can
//! walk upward without reference cycles.

use crate::schema::{ANY_KIND, Schema};
use crate::{Error, Result};
use hashlink::LinkedHashMap;

/// Identifier of a node inside a [`StyleTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A single node: kind, validated attributes, and role-keyed children.
#[derive(Debug, Clone)]
struct Node {
    kind: String,
    attributes: LinkedHashMap<String, String>,
    /// Child role name to ordered child ids.
    children: LinkedHashMap<String, Vec<NodeId>>,
    parent: Option<NodeId>,
}

/// A schema-validated tree of style nodes.
///
/// Construction validates attribute keys and child roles against the
/// [`Schema`] the tree was created with; reads apply the schema's declared
/// defaults lazily.
#[derive(Debug, Clone)]
pub struct StyleTree {
    schema: Schema,
    nodes: Vec<Node>,
}

impl StyleTree {
    /// Create an empty tree backed by `schema`.
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            nodes: Vec::new(),
        }
    }

    /// The schema this tree validates against.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Build a node of `kind` with the given attributes.
    ///
    /// Every attribute key must be declared for the kind unless the kind is
    /// open; an undeclared key fails with [`Error::UndeclaredAttribute`]
    /// rather than being silently dropped.
    pub fn node(&mut self, kind: &str, attributes: &[(&str, &str)]) -> Result<NodeId> {
        let mut map = LinkedHashMap::new();
        for (key, value) in attributes {
            if !self.schema.allows_attribute(kind, key) {
                return Err(Error::UndeclaredAttribute {
                    kind: kind.to_string(),
                    attribute: (*key).to_string(),
                });
            }
            map.insert((*key).to_string(), (*value).to_string());
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind: kind.to_string(),
            attributes: map,
            children: LinkedHashMap::new(),
            parent: None,
        });
        Ok(id)
    }

    /// The kind name of `id`.
    pub fn kind(&self, id: NodeId) -> &str {
        &self.nodes[id.0].kind
    }

    /// The parent of `id`, if it has been attached to one.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// The effective value of an attribute: the explicit value if present,
    /// otherwise the kind's declared default.
    pub fn attribute(&self, id: NodeId, key: &str) -> Option<&str> {
        let node = &self.nodes[id.0];
        node.attributes
            .get(key)
            .map(String::as_str)
            .or_else(|| self.schema.default(&node.kind, key))
    }

    /// Whether an attribute was explicitly set on the node (declared
    /// defaults do not count).
    pub fn has_attribute(&self, id: NodeId, key: &str) -> bool {
        self.nodes[id.0].attributes.contains_key(key)
    }

    /// Set an attribute, validated exactly like at construction.
    pub fn set_attribute(&mut self, id: NodeId, key: &str, value: &str) -> Result<()> {
        let kind = &self.nodes[id.0].kind;
        if !self.schema.allows_attribute(kind, key) {
            return Err(Error::UndeclaredAttribute {
                kind: kind.clone(),
                attribute: key.to_string(),
            });
        }
        self.nodes[id.0]
            .attributes
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// Explicitly set attribute keys of `id`, in insertion order.
    pub fn attribute_keys(&self, id: NodeId) -> impl Iterator<Item = &str> {
        self.nodes[id.0].attributes.keys().map(String::as_str)
    }

    /// Attach `child` under `role` of `parent`.
    ///
    /// The role must be declared for the parent's kind and the child's kind
    /// must match the declared child kind (or the role must accept any
    /// kind). Sets the child's parent back-reference.
    pub fn append_child(&mut self, parent: NodeId, role: &str, child: NodeId) -> Result<()> {
        let parent_kind = self.nodes[parent.0].kind.clone();
        let expected = match self.schema.child_kind(&parent_kind, role) {
            Some(expected) => expected.to_string(),
            None => {
                return Err(Error::UndeclaredChildRole {
                    kind: parent_kind,
                    role: role.to_string(),
                });
            }
        };
        let child_kind = &self.nodes[child.0].kind;
        if expected != ANY_KIND && expected != *child_kind {
            return Err(Error::ChildKindMismatch {
                kind: parent_kind,
                role: role.to_string(),
                expected,
                found: child_kind.clone(),
            });
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0]
            .children
            .entry(role.to_string())
            .or_insert_with(Vec::new)
            .push(child);
        Ok(())
    }

    /// Children of `id` under `role`, in insertion order. The iterator is
    /// lazy and restartable; callers must not mutate the tree while holding
    /// it (the borrow checker enforces this).
    pub fn children(&self, id: NodeId, role: &str) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes[id.0]
            .children
            .get(role)
            .into_iter()
            .flatten()
            .copied()
    }

    /// The first child of `id` under `role`, if any.
    pub fn first_child(&self, id: NodeId, role: &str) -> Option<NodeId> {
        self.children(id, role).next()
    }

    /// The nearest ancestor of `id` whose kind is `kind`, walking parent
    /// links through the tree.
    pub fn ancestor_of_kind(&self, id: NodeId, kind: &str) -> Option<NodeId> {
        let mut current = self.parent(id);
        while let Some(ancestor) = current {
            if self.kind(ancestor) == kind {
                return Some(ancestor);
            }
            current = self.parent(ancestor);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_schema() -> Schema {
        let mut schema = Schema::new();
        schema.declare_attributes("outer", &["variable"]).unwrap();
        schema
            .declare_children("outer", &[("inner", "inner"), ("any", ANY_KIND)])
            .unwrap();
        schema
            .declare_attributes("inner", &["form", "delimiter"])
            .unwrap();
        schema
            .declare_defaults("inner", &[("form", "long")])
            .unwrap();
        schema
    }

    #[test]
    fn test_undeclared_attribute_is_rejected() {
        let mut tree = StyleTree::new(test_schema());
        let err = tree.node("inner", &[("bogus", "x")]).unwrap_err();
        assert_eq!(
            err,
            Error::UndeclaredAttribute {
                kind: "inner".to_string(),
                attribute: "bogus".to_string()
            }
        );
    }

    #[test]
    fn test_open_kind_accepts_anything() {
        let mut tree = StyleTree::new(test_schema());
        let id = tree.node("unheard-of", &[("foo", "1"), ("bar", "2")]).unwrap();
        assert_eq!(tree.attribute(id, "foo"), Some("1"));
        assert_eq!(
            tree.attribute_keys(id).collect::<Vec<_>>(),
            vec!["foo", "bar"]
        );
    }

    #[test]
    fn test_defaults_are_applied_at_read_time() {
        let mut tree = StyleTree::new(test_schema());
        let id = tree.node("inner", &[]).unwrap();
        assert_eq!(tree.attribute(id, "form"), Some("long"));
        assert!(!tree.has_attribute(id, "form"));

        tree.set_attribute(id, "form", "short").unwrap();
        assert_eq!(tree.attribute(id, "form"), Some("short"));
        assert!(tree.has_attribute(id, "form"));
    }

    #[test]
    fn test_children_and_parent_links() {
        let mut tree = StyleTree::new(test_schema());
        let outer = tree.node("outer", &[("variable", "author")]).unwrap();
        let a = tree.node("inner", &[]).unwrap();
        let b = tree.node("inner", &[]).unwrap();
        tree.append_child(outer, "inner", a).unwrap();
        tree.append_child(outer, "inner", b).unwrap();

        assert_eq!(tree.children(outer, "inner").collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(tree.parent(a), Some(outer));
        assert_eq!(tree.parent(outer), None);
        assert_eq!(tree.first_child(outer, "inner"), Some(a));
        // Restartable: a second pass sees the same sequence.
        assert_eq!(tree.children(outer, "inner").count(), 2);
        assert_eq!(tree.children(outer, "inner").count(), 2);
    }

    #[test]
    fn test_undeclared_role_is_rejected() {
        let mut tree = StyleTree::new(test_schema());
        let outer = tree.node("outer", &[]).unwrap();
        let a = tree.node("inner", &[]).unwrap();
        let err = tree.append_child(outer, "bogus", a).unwrap_err();
        assert_eq!(
            err,
            Error::UndeclaredChildRole {
                kind: "outer".to_string(),
                role: "bogus".to_string()
            }
        );
    }

    #[test]
    fn test_child_kind_mismatch_is_rejected() {
        let mut tree = StyleTree::new(test_schema());
        let outer = tree.node("outer", &[]).unwrap();
        let other = tree.node("outer", &[]).unwrap();
        let err = tree.append_child(outer, "inner", other).unwrap_err();
        assert!(matches!(err, Error::ChildKindMismatch { .. }));

        // A wildcard role accepts any kind.
        tree.append_child(outer, "any", other).unwrap();
        assert_eq!(tree.first_child(outer, "any"), Some(other));
    }

    #[test]
    fn test_leaf_kind_rejects_children() {
        let mut tree = StyleTree::new(test_schema());
        let inner = tree.node("inner", &[]).unwrap();
        let other = tree.node("inner", &[]).unwrap();
        let err = tree.append_child(inner, "inner", other).unwrap_err();
        assert!(matches!(err, Error::UndeclaredChildRole { .. }));
    }

    #[test]
    fn test_ancestor_of_kind() {
        let mut tree = StyleTree::new(test_schema());
        let outer = tree.node("outer", &[]).unwrap();
        let mid = tree.node("inner", &[]).unwrap();
        tree.append_child(outer, "inner", mid).unwrap();
        let leaf = tree.node("inner", &[]).unwrap();
        tree.append_child(outer, "any", leaf).unwrap();

        assert_eq!(tree.ancestor_of_kind(mid, "outer"), Some(outer));
        assert_eq!(tree.ancestor_of_kind(mid, "inner"), None);
        assert_eq!(tree.ancestor_of_kind(outer, "outer"), None);
    }
}
