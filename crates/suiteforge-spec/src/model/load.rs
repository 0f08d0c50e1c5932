//! Conversion of the parsed document into the owned model.
//!
//! All structural validation happens here: required elements, non-empty
//! collections, weight ranges, creation modes. A defect anywhere aborts
//! loading with an error naming the offending element.

use super::{
    Alternative, Coverable, Coverage, CoverageTerm, CreationMode, Fixture, Policy, Product,
    Property, Question, QuestionSet, Specification,
};
use crate::document;
use crate::error::SpecificationError;
use crate::selector::Weight;
use roxmltree::{Document, Node};

const DEFAULT_DWELLING: &str = "HOPDwelling";

pub(super) fn from_document(doc: &Document<'_>) -> Result<Specification, SpecificationError> {
    let root = doc.root_element();

    let count = parse_count(root)?;
    let seed = parse_seed(root)?;
    let suite_name = document::child_text(root, "SuiteName")?.to_string();
    let suite_id = document::child_text(root, "SuiteId")?.to_string();
    let project = document::child_text(root, "ProjectName")?.to_string();
    let author = document::child_text(root, "Author")?.to_string();
    let description = document::child_text(root, "Description")?.to_string();
    let fixtures = load_fixtures(root)?;
    let policy = load_policy(document::child(root, "Policy")?)?;
    let product = load_product(document::child(root, "Product")?)?;

    Ok(Specification {
        count,
        seed,
        suite_name,
        suite_id,
        project,
        author,
        description,
        fixtures,
        policy,
        product,
    })
}

fn parse_count(root: Node<'_, '_>) -> Result<u32, SpecificationError> {
    let text = document::child_text(root, "Count")?;
    let value: i64 = text.parse().map_err(|_| SpecificationError::NotANumber {
        tag: "Count".to_string(),
        value: text.to_string(),
    })?;
    if value < 0 {
        return Err(SpecificationError::NegativeCount { value });
    }
    u32::try_from(value).map_err(|_| SpecificationError::NotANumber {
        tag: "Count".to_string(),
        value: text.to_string(),
    })
}

fn parse_seed(root: Node<'_, '_>) -> Result<u64, SpecificationError> {
    let text = document::child_text(root, "Seed")?;
    let value: i64 = text.parse().map_err(|_| SpecificationError::NotANumber {
        tag: "Seed".to_string(),
        value: text.to_string(),
    })?;
    #[allow(clippy::cast_sign_loss)]
    Ok(value as u64)
}

/// Weight attribute of an element, defaulting to 100 when absent.
fn weight_of(node: Node<'_, '_>) -> Result<Weight, SpecificationError> {
    let Some(raw) = document::attribute(node, "weight") else {
        return Ok(Weight::MAX);
    };
    raw.parse::<i64>()
        .ok()
        .and_then(Weight::new)
        .ok_or_else(|| SpecificationError::BadWeight {
            element: node.tag_name().name().to_string(),
            value: raw.to_string(),
        })
}

fn load_fixtures(root: Node<'_, '_>) -> Result<Vec<Fixture>, SpecificationError> {
    let fixtures_element = document::child(root, "Fixtures")?;
    let fixtures = document::children(fixtures_element, "Fixture")
        .into_iter()
        .map(|node| {
            Ok(Fixture {
                role: document::child_text(node, "Role")?.to_string(),
                class: document::child_text(node, "FixtureClass")?.to_string(),
            })
        })
        .collect::<Result<Vec<_>, SpecificationError>>()?;
    if fixtures.is_empty() {
        return Err(SpecificationError::EmptyCollection {
            owner: "fixtures section",
            name: "Fixtures".to_string(),
            child: "Fixture",
        });
    }
    Ok(fixtures)
}

fn load_policy(node: Node<'_, '_>) -> Result<Policy, SpecificationError> {
    let properties = load_properties(node)?;
    Ok(Policy {
        properties,
        quote: document::has_child(node, "Quote"),
        bind: document::has_child(node, "Bind"),
    })
}

fn load_product(node: Node<'_, '_>) -> Result<Product, SpecificationError> {
    let code = document::child_text(node, "ProductCode")?.to_string();
    let dwelling_name = if document::has_child(node, "DwellingCoverable") {
        document::child_text(node, "DwellingCoverable")?.to_string()
    } else {
        DEFAULT_DWELLING.to_string()
    };
    let question_sets = document::children(node, "QuestionSet")
        .into_iter()
        .map(load_question_set)
        .collect::<Result<Vec<_>, _>>()?;
    let coverables = document::children(node, "Coverable")
        .into_iter()
        .map(load_coverable)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Product {
        code,
        dwelling_name,
        question_sets,
        coverables,
    })
}

fn load_question_set(node: Node<'_, '_>) -> Result<QuestionSet, SpecificationError> {
    let code = document::child_text(node, "QuestionSetCode")?.to_string();
    let questions = document::children(node, "Question")
        .into_iter()
        .map(load_question)
        .collect::<Result<Vec<_>, _>>()?;
    if questions.is_empty() {
        return Err(SpecificationError::EmptyCollection {
            owner: "question set",
            name: code,
            child: "Question",
        });
    }
    Ok(QuestionSet { code, questions })
}

fn load_question(node: Node<'_, '_>) -> Result<Question, SpecificationError> {
    let code = document::child_text(node, "QuestionCode")?.to_string();
    let answers = load_alternatives(node, "Answer")?;
    if answers.is_empty() {
        return Err(SpecificationError::EmptyCollection {
            owner: "question",
            name: code,
            child: "Answer",
        });
    }
    Ok(Question { code, answers })
}

fn load_coverable(node: Node<'_, '_>) -> Result<Coverable, SpecificationError> {
    let name = document::child_text(node, "CoverableName")?.to_string();
    let mode = match document::attribute(node, "mode") {
        None => CreationMode::default(),
        Some("select") => CreationMode::Select,
        Some("create") => CreationMode::Create,
        Some(other) => {
            return Err(SpecificationError::BadCreationMode {
                name,
                mode: other.to_string(),
            })
        }
    };
    let weight = weight_of(node)?;
    let properties = load_properties(node)?;
    let coverages = document::children(node, "Coverage")
        .into_iter()
        .map(load_coverage)
        .collect::<Result<Vec<_>, _>>()?;
    if coverages.is_empty() {
        return Err(SpecificationError::EmptyCollection {
            owner: "coverable",
            name,
            child: "Coverage",
        });
    }
    Ok(Coverable {
        name,
        mode,
        weight,
        properties,
        coverages,
    })
}

fn load_coverage(node: Node<'_, '_>) -> Result<Coverage, SpecificationError> {
    let code = document::child_text(node, "CoverageCode")?.to_string();
    let weight = weight_of(node)?;
    let terms = document::children(node, "CoverageTerm")
        .into_iter()
        .map(load_coverage_term)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Coverage {
        code,
        weight,
        terms,
    })
}

fn load_coverage_term(node: Node<'_, '_>) -> Result<CoverageTerm, SpecificationError> {
    let code = document::child_text(node, "CoverageTermCode")?.to_string();
    let terms = load_alternatives(node, "Term")?;
    if terms.is_empty() {
        return Err(SpecificationError::EmptyCollection {
            owner: "coverage term",
            name: code,
            child: "Term",
        });
    }
    Ok(CoverageTerm { code, terms })
}

fn load_properties(parent: Node<'_, '_>) -> Result<Vec<Property>, SpecificationError> {
    document::children(parent, "Property")
        .into_iter()
        .map(load_property)
        .collect()
}

fn load_property(node: Node<'_, '_>) -> Result<Property, SpecificationError> {
    let name = document::child_text(node, "PropertyName")?.to_string();
    let weight = weight_of(node)?;
    let values = load_alternatives(node, "Value")?;
    if values.is_empty() {
        return Err(SpecificationError::EmptyCollection {
            owner: "property",
            name,
            child: "Value",
        });
    }
    Ok(Property {
        name,
        weight,
        values,
    })
}

fn load_alternatives(
    parent: Node<'_, '_>,
    tag: &'static str,
) -> Result<Vec<Alternative>, SpecificationError> {
    document::children(parent, tag)
        .into_iter()
        .map(|node| {
            Ok(Alternative {
                weight: weight_of(node)?,
                value: document::text(node)?.to_string(),
            })
        })
        .collect()
}
