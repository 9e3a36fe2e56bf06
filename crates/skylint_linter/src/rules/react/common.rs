//! Naming helpers shared by JSX rules.
//!
//! An attribute is checked against the element that owns it. The element's
//! name is either a plain identifier (`<Foo>`), a member chain
//! (`<Layout.Content>`), or a namespaced name (`<fbt:param>`).

use skylint_js_cst::CstNode;

/// Node kinds that own JSX attributes.
pub const ELEMENT_KINDS: &[&str] = &["jsx_opening_element", "jsx_self_closing_element"];

/// The shape of an element name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeNameShape {
    /// `Foo`, `div`, `fbt:param`.
    Simple(String),
    /// `object.property`; `object` may itself be dotted.
    Namespaced { object: String, property: String },
}

impl NodeNameShape {
    /// Read the shape from an element's `name` node.
    ///
    /// Never fails: any shape that is not a complete member expression falls
    /// back to the node's own text.
    pub fn from_name_node(name: &CstNode) -> Self {
        match member_parts(name) {
            Some((object, property)) => NodeNameShape::Namespaced {
                object: dotted_name(&object),
                property: property.text().to_string(),
            },
            None => NodeNameShape::Simple(name.text().to_string()),
        }
    }

    /// Derive the identity of the construct this name denotes.
    pub fn identity(&self) -> ConstructIdentity {
        match self {
            NodeNameShape::Simple(name) => {
                let leaf = name.rsplit(':').next().unwrap_or(name);
                ConstructIdentity {
                    raw_name: name.clone(),
                    is_namespaced: false,
                    display_name: name.clone(),
                    is_primitive: is_primitive_name(leaf),
                }
            }
            NodeNameShape::Namespaced { object, property } => ConstructIdentity {
                raw_name: property.clone(),
                is_namespaced: true,
                display_name: format!("{object}.{property}"),
                is_primitive: is_primitive_name(property),
            },
        }
    }
}

/// Derived identity of the construct that owns an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConstructIdentity {
    /// Leaf name (`Content` for `Layout.Content`).
    pub raw_name: String,
    pub is_namespaced: bool,
    /// Name matched against allow/disallow lists (`Layout.Content`).
    pub display_name: String,
    /// Lowercase leaf: a built-in element such as `div`, never checked.
    pub is_primitive: bool,
}

impl ConstructIdentity {
    pub fn simple(name: &str) -> Self {
        NodeNameShape::Simple(name.to_string()).identity()
    }

    pub fn namespaced(object: &str, property: &str) -> Self {
        NodeNameShape::Namespaced {
            object: object.to_string(),
            property: property.to_string(),
        }
        .identity()
    }
}

/// Components start with an uppercase letter; intrinsic elements do not.
pub fn is_primitive_name(leaf: &str) -> bool {
    leaf.chars().next().is_some_and(char::is_lowercase)
}

/// The element (opening or self-closing tag) that owns `attribute`.
pub fn owning_element<'a>(attribute: &CstNode<'a>) -> Option<CstNode<'a>> {
    attribute
        .parent()
        .filter(|parent| ELEMENT_KINDS.contains(&parent.kind()))
}

/// Name of the element that owns `attribute`. `None` for fragments and
/// recovered trees without a name.
pub fn element_name_shape(attribute: &CstNode) -> Option<NodeNameShape> {
    let element = owning_element(attribute)?;
    let name = element.child_by_field_name("name")?;
    Some(NodeNameShape::from_name_node(&name))
}

/// The attribute's name as written (`className`, `xlink:href`).
pub fn attribute_name<'a>(attribute: &CstNode<'a>) -> Option<&'a str> {
    attribute.first_named_child().map(|name| name.text())
}

fn member_parts<'a>(node: &CstNode<'a>) -> Option<(CstNode<'a>, CstNode<'a>)> {
    if !matches!(node.kind(), "member_expression" | "nested_identifier") {
        return None;
    }
    // Older grammars expose the parts positionally rather than as fields.
    let mut parts = node.named_children().filter(|c| c.kind() != "comment");
    let object = node.child_by_field_name("object").or_else(|| parts.next())?;
    let property = node
        .child_by_field_name("property")
        .or_else(|| parts.last())?;
    (object.range() != property.range()).then_some((object, property))
}

fn dotted_name(node: &CstNode) -> String {
    match member_parts(node) {
        Some((object, property)) => format!("{}.{}", dotted_name(&object), property.text()),
        None => node.text().to_string(),
    }
}
