//! Specification model and weighted selection engine.
//!
//! The spec crate owns everything that happens before a table row exists:
//! loading the XML product specification into an immutable typed model,
//! validating its structure, and deciding, through one seeded random
//! stream, which optional elements participate in a test case and which
//! alternative value each selected element takes.

pub mod document;
pub mod error;
pub mod model;
pub mod selector;

pub use error::{SpecError, SpecificationError};
pub use model::{
    Alternative, Coverable, Coverage, CoverageTerm, CreationMode, Fixture, Policy, Product,
    Property, Question, QuestionSet, Specification, Weighted,
};
pub use selector::{SelectionExhausted, Selector, Weight};
