//! CSL name-rendering node kinds and formatting decisions.
//!
//! This module declares the schema for the name-rendering subtree of a CSL
//! style (`names`, `name`, `name-part`, `et-al`, `label`, `substitute`) and
//! implements the interpretive queries a renderer needs: list truncation,
//! delimiter placement before the final name, sort-order inversion, the
//! "and" connector, and the et-al term.
//!
//! Every query is a pure function of the node's attributes plus the
//! caller-supplied name-list length and subsequent-citation flag; nothing
//! here mutates formatting state across calls.

use crate::schema::{ANY_KIND, Schema};
use crate::tree::{NodeId, StyleTree};
use crate::{Error, Result};

/// Node kind names for the name-rendering subtree.
pub mod kind {
    pub const NAMES: &str = "names";
    pub const NAME: &str = "name";
    pub const NAME_PART: &str = "name-part";
    pub const ET_AL: &str = "et-al";
    pub const LABEL: &str = "label";
    pub const SUBSTITUTE: &str = "substitute";
}

/// Affix and font attributes shared by most rendering elements.
const FORMAT_ATTRS: [&str; 9] = [
    "prefix",
    "suffix",
    "display",
    "font-style",
    "font-variant",
    "font-weight",
    "text-decoration",
    "vertical-align",
    "text-case",
];

/// The ellipsis marker rendered before a final name when `et-al-use-last`
/// is in effect.
pub const ELLIPSIS: &str = "…";

/// Build the schema for the name-rendering node kinds.
///
/// `name` declares the defaults `form=long`, `delimiter=", "`,
/// `delimiter-precedes-last=contextual`, `initialize=true`, and
/// `sort-separator=", "`; `et-al` defaults its `term` to `et-al`.
/// `substitute` stays an open kind hosting arbitrary fallback elements.
pub fn style_schema() -> Schema {
    let mut schema = Schema::new();

    let mut names_attrs = vec!["variable", "delimiter"];
    names_attrs.extend(FORMAT_ATTRS);
    schema.declare(
        kind::NAMES,
        Some(names_attrs.as_slice()),
        &[],
        &[
            ("name", kind::NAME),
            ("et-al", kind::ET_AL),
            ("label", kind::LABEL),
            ("substitute", kind::SUBSTITUTE),
        ],
    );

    let mut name_attrs = vec![
        "and",
        "delimiter",
        "delimiter-precedes-et-al",
        "delimiter-precedes-last",
        "et-al-min",
        "et-al-use-first",
        "et-al-subsequent-min",
        "et-al-subsequent-use-first",
        "et-al-use-last",
        "form",
        "initialize",
        "initialize-with",
        "name-as-sort-order",
        "sort-separator",
    ];
    name_attrs.extend(FORMAT_ATTRS);
    schema.declare(
        kind::NAME,
        Some(name_attrs.as_slice()),
        &[
            ("form", "long"),
            ("delimiter", ", "),
            ("delimiter-precedes-last", "contextual"),
            ("initialize", "true"),
            ("sort-separator", ", "),
        ],
        &[("name-part", kind::NAME_PART)],
    );

    let mut part_attrs = vec!["name"];
    part_attrs.extend(FORMAT_ATTRS);
    schema.declare(kind::NAME_PART, Some(part_attrs.as_slice()), &[], &[]);

    let mut et_al_attrs = vec!["term"];
    et_al_attrs.extend(FORMAT_ATTRS);
    schema.declare(
        kind::ET_AL,
        Some(et_al_attrs.as_slice()),
        &[("term", "et-al")],
        &[],
    );

    let mut label_attrs = vec!["variable", "form", "plural"];
    label_attrs.extend(FORMAT_ATTRS);
    schema.declare(kind::LABEL, Some(label_attrs.as_slice()), &[], &[]);

    // Open kind: accepts any attributes, hosts arbitrary child elements.
    schema.declare(kind::SUBSTITUTE, None, &[], &[("element", ANY_KIND)]);

    schema
}

/// Policy for the delimiter between the penultimate and the last name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DelimiterPrecedesLast {
    #[default]
    Contextual,
    Always,
    Never,
    AfterInvertedName,
}

impl DelimiterPrecedesLast {
    /// Parse an attribute value leniently: `always` and `never` match
    /// case-insensitively, `contextual` and `after-inverted-name` match as
    /// case-insensitive prefixes, and anything else falls back to the
    /// contextual default.
    pub fn from_attr(value: &str) -> Self {
        let lower = value.to_ascii_lowercase();
        if lower == "never" {
            Self::Never
        } else if lower == "always" {
            Self::Always
        } else if lower.starts_with("after-inverted-name") {
            Self::AfterInvertedName
        } else {
            Self::Contextual
        }
    }

    /// The attribute value this policy is written as.
    pub fn as_attr(&self) -> &'static str {
        match self {
            Self::Contextual => "contextual",
            Self::Always => "always",
            Self::Never => "never",
            Self::AfterInvertedName => "after-inverted-name",
        }
    }
}

/// Lenient integer parse for attribute values: leading whitespace is
/// skipped, digits are read from the front, and anything unparsable is 0.
fn lenient_u32(value: Option<&str>) -> u32 {
    let digits: String = value
        .unwrap_or_default()
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// Read-only view of a `names` node.
#[derive(Debug, Clone, Copy)]
pub struct NamesNode<'a> {
    tree: &'a StyleTree,
    node: NodeId,
}

impl<'a> NamesNode<'a> {
    /// Wrap a `names` node; fails if `node` is of any other kind.
    pub fn new(tree: &'a StyleTree, node: NodeId) -> Result<Self> {
        if tree.kind(node) != kind::NAMES {
            return Err(Error::WrongNodeKind {
                expected: kind::NAMES.to_string(),
                found: tree.kind(node).to_string(),
            });
        }
        Ok(Self { tree, node })
    }

    /// The bibliographic field(s) this element renders (e.g. "author").
    pub fn variable(&self) -> Option<&'a str> {
        self.tree.attribute(self.node, "variable")
    }

    /// Delimiter between rendered variables; empty when unset.
    pub fn delimiter(&self) -> &'a str {
        self.tree.attribute(self.node, "delimiter").unwrap_or("")
    }

    /// The `name` child, if present.
    pub fn name(&self) -> Option<NodeId> {
        self.tree.first_child(self.node, "name")
    }

    /// The `et-al` child, if present.
    pub fn et_al(&self) -> Option<NodeId> {
        self.tree.first_child(self.node, "et-al")
    }

    /// The `substitute` child, if present.
    pub fn substitute(&self) -> Option<NodeId> {
        self.tree.first_child(self.node, "substitute")
    }

    /// The `label` children, in order.
    pub fn labels(&self) -> impl Iterator<Item = NodeId> + 'a {
        self.tree.children(self.node, "label")
    }
}

/// Formatting decisions read from a `name` node.
///
/// Borrows the tree immutably; every method is idempotent. Integer
/// attributes are parsed leniently (unset or unparsable reads as 0).
#[derive(Debug, Clone, Copy)]
pub struct NameFormat<'a> {
    tree: &'a StyleTree,
    node: NodeId,
}

impl<'a> NameFormat<'a> {
    /// Wrap a `name` node; fails if `node` is of any other kind.
    pub fn new(tree: &'a StyleTree, node: NodeId) -> Result<Self> {
        if tree.kind(node) != kind::NAME {
            return Err(Error::WrongNodeKind {
                expected: kind::NAME.to_string(),
                found: tree.kind(node).to_string(),
            });
        }
        Ok(Self { tree, node })
    }

    fn attr(&self, key: &str) -> Option<&'a str> {
        self.tree.attribute(self.node, key)
    }

    fn has_attr(&self, key: &str) -> bool {
        self.tree.has_attribute(self.node, key)
    }

    /// Name form, `long` or `short`; defaults to `long`.
    pub fn form(&self) -> &'a str {
        self.attr("form").unwrap_or("long")
    }

    /// Delimiter between names; defaults to `", "`.
    pub fn delimiter(&self) -> &'a str {
        self.attr("delimiter").unwrap_or(", ")
    }

    /// Delimiter between family and given names in sort order; defaults to
    /// `", "`.
    pub fn sort_separator(&self) -> &'a str {
        self.attr("sort-separator").unwrap_or(", ")
    }

    /// The `initialize-with` affix, when initialization applies.
    pub fn initialize_with(&self) -> Option<&'a str> {
        self.attr("initialize-with")
    }

    /// Whether given names should be abbreviated to initials: true unless
    /// the `initialize` attribute is the string "false" (case-insensitive).
    pub fn should_initialize(&self) -> bool {
        !self
            .attr("initialize")
            .is_some_and(|v| v.eq_ignore_ascii_case("false"))
    }

    /// The et-al threshold in effect: `et-al-subsequent-min` for subsequent
    /// cites when set, otherwise `et-al-min`; 0 when unset.
    pub fn truncate_limit(&self, subsequent: bool) -> u32 {
        if subsequent && self.has_attr("et-al-subsequent-min") {
            lenient_u32(self.attr("et-al-subsequent-min"))
        } else {
            lenient_u32(self.attr("et-al-min"))
        }
    }

    /// How many names survive truncation: `et-al-subsequent-use-first` for
    /// subsequent cites when set, otherwise `et-al-use-first`; 0 when unset.
    pub fn truncate_cut(&self, subsequent: bool) -> u32 {
        if subsequent && self.has_attr("et-al-subsequent-use-first") {
            lenient_u32(self.attr("et-al-subsequent-use-first"))
        } else {
            lenient_u32(self.attr("et-al-use-first"))
        }
    }

    /// Whether a list of `name_count` names should be truncated.
    pub fn should_truncate(&self, name_count: usize, subsequent: bool) -> bool {
        let limit = self.truncate_limit(subsequent);
        limit != 0 && name_count as u32 >= limit
    }

    /// Truncate a name list, preserving order. A cut of 0 (unset) returns
    /// the list unchanged; a cut past the end returns the whole list.
    pub fn truncate<'n, T>(&self, names: &'n [T], subsequent: bool) -> &'n [T] {
        let cut = self.truncate_cut(subsequent) as usize;
        if cut == 0 {
            names
        } else {
            &names[..cut.min(names.len())]
        }
    }

    /// The `delimiter-precedes-last` policy, parsed leniently; defaults to
    /// contextual.
    pub fn delimiter_precedes_last_policy(&self) -> DelimiterPrecedesLast {
        self.attr("delimiter-precedes-last")
            .map(DelimiterPrecedesLast::from_attr)
            .unwrap_or_default()
    }

    pub fn delimiter_always_precedes_last(&self) -> bool {
        self.delimiter_precedes_last_policy() == DelimiterPrecedesLast::Always
    }

    pub fn delimiter_never_precedes_last(&self) -> bool {
        self.delimiter_precedes_last_policy() == DelimiterPrecedesLast::Never
    }

    pub fn delimiter_contextually_precedes_last(&self) -> bool {
        self.delimiter_precedes_last_policy() == DelimiterPrecedesLast::Contextual
    }

    pub fn delimiter_precedes_last_after_inverted_name(&self) -> bool {
        self.delimiter_precedes_last_policy() == DelimiterPrecedesLast::AfterInvertedName
    }

    /// Whether the delimiter is inserted between the penultimate and the
    /// last of `name_count` names.
    ///
    /// Without an `and` connector the delimiter always separates the final
    /// name. With one, the policy decides: `never`/`always` are absolute;
    /// `after-inverted-name` inserts it only after a name rendered in sort
    /// order (all names inverted, or a two-name list with the first
    /// inverted); the contextual default mirrors natural list punctuation
    /// ("A and B" vs "A, B, and C").
    pub fn delimiter_precedes_last(&self, name_count: usize) -> bool {
        if !self.has_attr("and") {
            return true;
        }
        match self.delimiter_precedes_last_policy() {
            DelimiterPrecedesLast::Never => false,
            DelimiterPrecedesLast::Always => true,
            DelimiterPrecedesLast::AfterInvertedName => {
                if self.is_sort_order() {
                    self.is_all_names_sort_order() || name_count == 2
                } else {
                    false
                }
            }
            DelimiterPrecedesLast::Contextual => name_count > 2,
        }
    }

    /// Whether any `name-as-sort-order` value is set.
    pub fn is_sort_order(&self) -> bool {
        self.has_attr("name-as-sort-order")
    }

    /// Whether only the first name is rendered in sort order.
    pub fn is_first_name_sort_order(&self) -> bool {
        self.attr("name-as-sort-order")
            .is_some_and(|v| v.eq_ignore_ascii_case("first"))
    }

    /// Whether all names are rendered in sort order.
    pub fn is_all_names_sort_order(&self) -> bool {
        self.attr("name-as-sort-order")
            .is_some_and(|v| v.eq_ignore_ascii_case("all"))
    }

    /// The connector before the final name: the literal `and` attribute
    /// value, with the reserved value `symbol` mapped to `&`.
    pub fn connector(&self) -> Option<&'a str> {
        match self.attr("and") {
            Some("symbol") => Some("&"),
            other => other,
        }
    }

    /// Whether a list-final ellipsis is used when truncating
    /// (`et-al-use-last` is the string "true").
    pub fn uses_ellipsis(&self) -> bool {
        self.attr("et-al-use-last") == Some("true")
    }

    /// The ellipsis marker.
    pub fn ellipsis(&self) -> &'static str {
        ELLIPSIS
    }

    /// The et-al term key: delegates to the nearest ancestor `names`
    /// element's `et-al` child, falling back to `et-al`.
    pub fn et_al_term(&self) -> &'a str {
        self.tree
            .ancestor_of_kind(self.node, kind::NAMES)
            .and_then(|names| self.tree.first_child(names, "et-al"))
            .and_then(|et_al| self.tree.attribute(et_al, "term"))
            .unwrap_or("et-al")
    }
}
