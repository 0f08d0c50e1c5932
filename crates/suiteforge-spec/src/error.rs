//! Error types for specification loading and selection.
//!
//! Two fatal families: [`SpecificationError`] for malformed, missing, or
//! structurally invalid specification content, and
//! [`SelectionExhausted`] for weights that fail to cover the draw range.
//! Neither is retried; both abort the run with a message naming the
//! offending element so the author can correct the specification.

use crate::selector::SelectionExhausted;

/// Malformed, missing, or structurally invalid specification content.
#[derive(Debug, thiserror::Error)]
pub enum SpecificationError {
    /// Specification file does not exist or could not be read.
    #[error("specification file could not be read: {path}: {source}")]
    NotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The document is not well-formed XML.
    #[error("specification could not be parsed: {0}")]
    Parse(String),

    /// The document's root element is not the expected sentinel.
    #[error("root element is not '{expected}': found '{found}'")]
    UnexpectedRoot { expected: String, found: String },

    /// A required element is absent from its parent.
    #[error("element '{tag}' was not found in element '{parent}'")]
    MissingElement { tag: String, parent: String },

    /// More than one element where exactly one is allowed.
    #[error("element '{tag}' appears more than once in element '{parent}'")]
    DuplicateElement { tag: String, parent: String },

    /// An element that must carry text content is empty.
    #[error("element '{tag}' has no text content")]
    EmptyText { tag: String },

    /// A numeric element holds something other than an integer.
    #[error("text in '{tag}' element is not a number: '{value}'")]
    NotANumber { tag: String, value: String },

    /// The test-case count is negative.
    #[error("count must not be a negative number: {value}")]
    NegativeCount { value: i64 },

    /// A weight attribute is non-integer or outside `[0, 100]`.
    #[error("weight on element '{element}' must be an integer between 0 and 100, not '{value}'")]
    BadWeight { element: String, value: String },

    /// A collection that must be non-empty is empty.
    #[error("{owner} '{name}' must contain at least one {child}")]
    EmptyCollection {
        owner: &'static str,
        name: String,
        child: &'static str,
    },

    /// An unknown creation mode on a coverable.
    #[error("coverable '{name}' has an unknown mode '{mode}' (expected 'create' or 'select')")]
    BadCreationMode { name: String, mode: String },

    /// No fixture class declared for a role a table builder needs.
    #[error("no fixture declared for role '{role}'")]
    MissingFixture { role: String },

    /// A required policy property did not resolve for this scenario.
    #[error("property '{name}' was not resolved under '{owner}'")]
    MissingProperty { name: String, owner: String },

    /// The coverable playing the dwelling role is absent from the product.
    #[error("dwelling coverable '{name}' was not found in the product")]
    MissingCoverable { name: String },
}

/// Top-level error of the spec crate: everything that can abort generation
/// before a table row is produced.
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    #[error(transparent)]
    Specification(#[from] SpecificationError),

    #[error(transparent)]
    Selection(#[from] SelectionExhausted),
}
