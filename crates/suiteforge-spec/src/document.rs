//! Narrow tree-query interface over the parsed specification document.
//!
//! Generic XML handling with no knowledge of the schema beyond the root
//! sentinel: fetch exactly one child, fetch all children of a tag, fetch
//! trimmed text, read an attribute. The model loader is the only consumer;
//! the `roxmltree` document lives just long enough to build the owned model.

use crate::error::SpecificationError;
use roxmltree::{Document, Node};

/// Required tag of the document's top-level element.
pub const ROOT_TAG: &str = "TestSuite";

/// Parse specification text and verify the root sentinel.
///
/// # Errors
/// [`SpecificationError::Parse`] for malformed XML and
/// [`SpecificationError::UnexpectedRoot`] when the top-level element is not
/// [`ROOT_TAG`].
pub fn parse(text: &str) -> Result<Document<'_>, SpecificationError> {
    let doc = Document::parse(text).map_err(|e| SpecificationError::Parse(e.to_string()))?;
    let root = doc.root_element();
    if root.tag_name().name() != ROOT_TAG {
        return Err(SpecificationError::UnexpectedRoot {
            expected: ROOT_TAG.to_string(),
            found: root.tag_name().name().to_string(),
        });
    }
    Ok(doc)
}

/// Fetch the single child element with the given tag.
///
/// # Errors
/// Missing or duplicate children are specification errors naming both the
/// tag and its parent.
pub fn child<'a, 'input>(
    parent: Node<'a, 'input>,
    tag: &str,
) -> Result<Node<'a, 'input>, SpecificationError> {
    let found = children(parent, tag);
    match found.as_slice() {
        [] => Err(SpecificationError::MissingElement {
            tag: tag.to_string(),
            parent: parent.tag_name().name().to_string(),
        }),
        [only] => Ok(*only),
        _ => Err(SpecificationError::DuplicateElement {
            tag: tag.to_string(),
            parent: parent.tag_name().name().to_string(),
        }),
    }
}

/// All child elements with the given tag, in document order.
pub fn children<'a, 'input>(parent: Node<'a, 'input>, tag: &str) -> Vec<Node<'a, 'input>> {
    parent
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == tag)
        .collect()
}

/// Whether the parent has at least one child element with the given tag.
pub fn has_child(parent: Node<'_, '_>, tag: &str) -> bool {
    !children(parent, tag).is_empty()
}

/// Trimmed text content of a node.
///
/// # Errors
/// [`SpecificationError::EmptyText`] when the node carries no non-blank text.
pub fn text<'a>(node: Node<'a, '_>) -> Result<&'a str, SpecificationError> {
    match node.text().map(str::trim) {
        Some(t) if !t.is_empty() => Ok(t),
        _ => Err(SpecificationError::EmptyText {
            tag: node.tag_name().name().to_string(),
        }),
    }
}

/// Trimmed text of the single `tag` child of `parent`.
pub fn child_text<'a>(parent: Node<'a, '_>, tag: &str) -> Result<&'a str, SpecificationError> {
    text(child(parent, tag)?)
}

/// Attribute value, if present.
pub fn attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute(name)
}
