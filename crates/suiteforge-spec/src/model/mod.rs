//! Typed, immutable view over the parsed product specification.
//!
//! The whole document is converted into owned entities at load time, so the
//! model carries no parser lifetimes and every scalar is computed exactly
//! once. Structural invariants (required elements, non-empty collections,
//! weight ranges) are enforced during loading, before any table row exists.
//! Traversal accessors that depend on randomness take the run's
//! [`Selector`] by `&mut` and consume exactly one draw per decision point,
//! in document order.

mod load;

use crate::error::SpecificationError;
use crate::selector::{SelectionExhausted, Selector, Weight};
use std::path::Path;

/// A weighted element that can be included in or excluded from a scenario.
pub trait Weighted {
    /// Inclusion weight in `[0, 100]`.
    fn weight(&self) -> Weight;
}

/// Apply one inclusion draw per item in document order, keeping the
/// included ones. Order is preserved; exactly `items.len()` draws are
/// consumed.
pub fn select_included<'a, T: Weighted>(items: &'a [T], selector: &mut Selector) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| selector.included(item.weight()))
        .collect()
}

/// One weighted alternative value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternative {
    weight: Weight,
    value: String,
}

impl Alternative {
    #[inline]
    #[must_use]
    pub fn weight(&self) -> Weight {
        self.weight
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

fn choose_alternative<'a>(
    element: &str,
    alternatives: &'a [Alternative],
    selector: &mut Selector,
) -> Result<&'a str, SelectionExhausted> {
    selector.choose(
        element,
        alternatives.iter().map(|a| (a.weight(), a.value.as_str())),
    )
}

/// A named property with an inclusion weight and weighted values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    name: String,
    weight: Weight,
    values: Vec<Alternative>,
}

impl Property {
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Decide inclusion and, when included, select a value.
    ///
    /// Consumes one draw for inclusion and one more for the value when the
    /// property is included; `None` means the property sat out.
    pub fn resolve(&self, selector: &mut Selector) -> Result<Option<&str>, SelectionExhausted> {
        if !selector.included(self.weight) {
            return Ok(None);
        }
        choose_alternative(&self.name, &self.values, selector).map(Some)
    }
}

impl Weighted for Property {
    fn weight(&self) -> Weight {
        self.weight
    }
}

/// An underwriting question; always answered, never excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    code: String,
    answers: Vec<Alternative>,
}

impl Question {
    #[inline]
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Select the answer via one alternative draw.
    pub fn answer(&self, selector: &mut Selector) -> Result<&str, SelectionExhausted> {
        choose_alternative(&self.code, &self.answers, selector)
    }
}

/// A question set: code plus at least one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    code: String,
    questions: Vec<Question>,
}

impl QuestionSet {
    #[inline]
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

/// A coverage term; always resolved once its coverage is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageTerm {
    code: String,
    terms: Vec<Alternative>,
}

impl CoverageTerm {
    #[inline]
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Select the term value via one alternative draw.
    pub fn value(&self, selector: &mut Selector) -> Result<&str, SelectionExhausted> {
        choose_alternative(&self.code, &self.terms, selector)
    }
}

/// An insurance coverage with an inclusion weight and its terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coverage {
    code: String,
    weight: Weight,
    terms: Vec<CoverageTerm>,
}

impl Coverage {
    #[inline]
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    #[must_use]
    pub fn terms(&self) -> &[CoverageTerm] {
        &self.terms
    }
}

impl Weighted for Coverage {
    fn weight(&self) -> Weight {
        self.weight
    }
}

/// How a coverable enters the policy in the generated fixture commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreationMode {
    /// The coverable already exists on the submission and is selected.
    #[default]
    Select,
    /// The coverable is created by the fixture.
    Create,
}

impl CreationMode {
    /// The fixture command verb for this mode.
    #[inline]
    #[must_use]
    pub fn verb(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Create => "create",
        }
    }
}

/// An insurable entity carrying properties and coverages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coverable {
    name: String,
    mode: CreationMode,
    weight: Weight,
    properties: Vec<Property>,
    coverages: Vec<Coverage>,
}

impl Coverable {
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn mode(&self) -> CreationMode {
        self.mode
    }

    #[inline]
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    #[inline]
    #[must_use]
    pub fn coverages(&self) -> &[Coverage] {
        &self.coverages
    }

    /// Coverages that survive their inclusion draw, in document order.
    pub fn selected_coverages(&self, selector: &mut Selector) -> Vec<&Coverage> {
        select_included(&self.coverages, selector)
    }

    /// Resolve this coverable's properties in one pass in document order,
    /// keeping `(name, value)` pairs for the included ones.
    pub fn resolve_properties(
        &self,
        selector: &mut Selector,
    ) -> Result<Vec<(&str, &str)>, SelectionExhausted> {
        resolve_properties(&self.properties, selector)
    }
}

impl Weighted for Coverable {
    fn weight(&self) -> Weight {
        self.weight
    }
}

fn resolve_properties<'a>(
    properties: &'a [Property],
    selector: &mut Selector,
) -> Result<Vec<(&'a str, &'a str)>, SelectionExhausted> {
    let mut resolved = Vec::new();
    for property in properties {
        if let Some(value) = property.resolve(selector)? {
            resolved.push((property.name(), value));
        }
    }
    Ok(resolved)
}

/// The policy block: weighted properties plus the quote/bind markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    properties: Vec<Property>,
    quote: bool,
    bind: bool,
}

impl Policy {
    #[inline]
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Presence of Bind implies the scenario also quotes.
    #[inline]
    #[must_use]
    pub fn should_quote(&self) -> bool {
        self.quote || self.bind
    }

    #[inline]
    #[must_use]
    pub fn should_bind(&self) -> bool {
        self.bind
    }

    /// Resolve all policy properties in one pass in document order.
    pub fn resolve_properties(
        &self,
        selector: &mut Selector,
    ) -> Result<Vec<(&str, &str)>, SelectionExhausted> {
        resolve_properties(&self.properties, selector)
    }
}

/// The product block: code, dwelling designation, question sets, coverables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    code: String,
    dwelling_name: String,
    question_sets: Vec<QuestionSet>,
    coverables: Vec<Coverable>,
}

impl Product {
    #[inline]
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Name of the coverable that plays the dwelling role.
    #[inline]
    #[must_use]
    pub fn dwelling_name(&self) -> &str {
        &self.dwelling_name
    }

    #[inline]
    #[must_use]
    pub fn question_sets(&self) -> &[QuestionSet] {
        &self.question_sets
    }

    #[inline]
    #[must_use]
    pub fn coverables(&self) -> &[Coverable] {
        &self.coverables
    }

    /// The coverable designated as the dwelling.
    ///
    /// # Errors
    /// [`SpecificationError::MissingCoverable`] when no coverable carries
    /// the designated name.
    pub fn dwelling(&self) -> Result<&Coverable, SpecificationError> {
        self.coverables
            .iter()
            .find(|c| c.name == self.dwelling_name)
            .ok_or_else(|| SpecificationError::MissingCoverable {
                name: self.dwelling_name.clone(),
            })
    }

    /// Coverables that survive their inclusion draw, in document order.
    pub fn selected_coverables(&self, selector: &mut Selector) -> Vec<&Coverable> {
        select_included(&self.coverables, selector)
    }
}

/// A role-to-fixture-class binding from the Fixtures section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    role: String,
    class: String,
}

impl Fixture {
    #[inline]
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    #[inline]
    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }
}

/// The root entity: everything the suite generator needs, loaded once and
/// never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specification {
    count: u32,
    seed: u64,
    suite_name: String,
    suite_id: String,
    project: String,
    author: String,
    description: String,
    fixtures: Vec<Fixture>,
    policy: Policy,
    product: Product,
}

impl Specification {
    /// Load a specification from a file on disk.
    ///
    /// # Errors
    /// Unreadable files, malformed XML, a wrong root element, and every
    /// structural defect surface as [`SpecificationError`].
    pub fn load_path(path: impl AsRef<Path>) -> Result<Self, SpecificationError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| {
            SpecificationError::NotFound {
                path: path.display().to_string(),
                source,
            }
        })?;
        Self::load_str(&text)
    }

    /// Load a specification from document text.
    pub fn load_str(text: &str) -> Result<Self, SpecificationError> {
        let doc = crate::document::parse(text)?;
        load::from_document(&doc)
    }

    /// Number of test cases to generate.
    #[inline]
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Seed for the run's selection stream.
    #[inline]
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    #[must_use]
    pub fn suite_name(&self) -> &str {
        &self.suite_name
    }

    #[inline]
    #[must_use]
    pub fn suite_id(&self) -> &str {
        &self.suite_id
    }

    #[inline]
    #[must_use]
    pub fn project(&self) -> &str {
        &self.project
    }

    #[inline]
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    #[must_use]
    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    /// Fixture class bound to a workflow role.
    ///
    /// # Errors
    /// [`SpecificationError::MissingFixture`] when no binding exists; every
    /// role a table builder needs must resolve or generation fails.
    pub fn fixture_class(&self, role: &str) -> Result<&str, SpecificationError> {
        self.fixtures
            .iter()
            .find(|f| f.role == role)
            .map(|f| f.class.as_str())
            .ok_or_else(|| SpecificationError::MissingFixture {
                role: role.to_string(),
            })
    }

    #[inline]
    #[must_use]
    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    #[inline]
    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }
}
