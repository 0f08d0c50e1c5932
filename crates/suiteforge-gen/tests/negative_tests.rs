//! Failure paths: structural defects and selection exhaustion must abort
//! the run with an error naming the offender, before any output exists.

mod common;

use suiteforge_gen::suite::generate_suite;
use suiteforge_gen::synthesize;
use suiteforge_spec::{Selector, SpecError, Specification, SpecificationError};

#[test]
fn missing_fixture_role_aborts_the_scenario() {
    let text = common::BASE.replace(
        "<Fixture><Role>CreateCoverages</Role><FixtureClass>fixtures.policy.CreateCoveragesFixture</FixtureClass></Fixture>",
        "",
    );
    let spec = common::load(&text);
    let mut selector = Selector::from_seed(spec.seed());

    let err = synthesize(&spec, 1, &mut selector).unwrap_err();
    match err {
        SpecError::Specification(SpecificationError::MissingFixture { role }) => {
            assert_eq!(role, "CreateCoverages");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unresolved_account_number_aborts_the_scenario() {
    let text = common::BASE.replace("AccountNumber", "AccountNr");
    let spec = common::load(&text);
    let mut selector = Selector::from_seed(spec.seed());

    let err = synthesize(&spec, 1, &mut selector).unwrap_err();
    match err {
        SpecError::Specification(SpecificationError::MissingProperty { name, owner }) => {
            assert_eq!(name, "AccountNumber");
            assert_eq!(owner, "Policy");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_dwelling_coverable_aborts_the_scenario() {
    let text = common::BASE.replace(
        "<CoverableName>HOPDwelling</CoverableName>",
        "<CoverableName>HOPBarn</CoverableName>",
    );
    let spec = common::load(&text);
    let mut selector = Selector::from_seed(spec.seed());

    let err = synthesize(&spec, 1, &mut selector).unwrap_err();
    match err {
        SpecError::Specification(SpecificationError::MissingCoverable { name }) => {
            assert_eq!(name, "HOPDwelling");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn uncovered_weights_raise_selection_exhausted() {
    // Every roof value at weight 0: the property is always included but no
    // draw in [1,100] can land on an alternative.
    let text = common::BASE
        .replace(r#"<Value weight="50">Asphalt</Value>"#, r#"<Value weight="0">Asphalt</Value>"#)
        .replace(r#"<Value weight="50">Slate</Value>"#, r#"<Value weight="0">Slate</Value>"#);
    let spec = common::load(&text);
    let mut selector = Selector::from_seed(spec.seed());

    let err = synthesize(&spec, 1, &mut selector).unwrap_err();
    match err {
        SpecError::Selection(exhausted) => {
            assert_eq!(exhausted.element, "RoofType");
            assert_eq!(exhausted.total, 0);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn structural_defects_fail_at_load_before_any_row() {
    // Empty question set.
    let text = common::BASE.replace(
        r#"<Question>
        <QuestionCode>BusinessOnPremises</QuestionCode>
        <Answer weight="40">true</Answer>
        <Answer weight="60">false</Answer>
      </Question>
      <Question>
        <QuestionCode>PriorLosses</QuestionCode>
        <Answer weight="50">0</Answer>
        <Answer weight="50">1</Answer>
      </Question>"#,
        "",
    );
    assert!(matches!(
        Specification::load_str(&text).unwrap_err(),
        SpecificationError::EmptyCollection { owner: "question set", .. }
    ));

    // Coverage term without terms.
    let text = common::BASE.replace(
        r#"<Term weight="50">250000</Term>
          <Term weight="50">500000</Term>"#,
        "",
    );
    assert!(matches!(
        Specification::load_str(&text).unwrap_err(),
        SpecificationError::EmptyCollection { owner: "coverage term", .. }
    ));

    // Out-of-range weight.
    let text = common::BASE.replace(r#"<Coverable weight="100">"#, r#"<Coverable weight="101">"#);
    assert!(matches!(
        Specification::load_str(&text).unwrap_err(),
        SpecificationError::BadWeight { .. }
    ));
}

#[test]
fn sink_failures_surface_as_io_errors() {
    let spec = common::base_spec();
    let dir = tempfile::tempdir().expect("tempdir");

    // A file where the suite directory should be makes persistence fail.
    let clash = dir.path().join("HomeownersSmoke");
    std::fs::write(&clash, "not a directory").expect("write clash file");

    let err = generate_suite(&spec, dir.path()).unwrap_err();
    assert!(matches!(err, suiteforge_gen::SuiteError::Io(_)));
}
