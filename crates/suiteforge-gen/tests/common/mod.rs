//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use suiteforge_spec::Specification;

/// Baseline product specification: seed 42, one case, no Quote/Bind
/// markers, one dwelling coverable with a 50/50 property and one coverage.
pub const BASE: &str = r#"
<TestSuite>
  <Count>1</Count>
  <Seed>42</Seed>
  <SuiteName>HomeownersSmoke</SuiteName>
  <SuiteId>HOS</SuiteId>
  <ProjectName>PolicyCenter</ProjectName>
  <Author>QA</Author>
  <Description>Smoke scenarios for the homeowners product</Description>
  <Fixtures>
    <Fixture><Role>CreateSubmission</Role><FixtureClass>fixtures.policy.CreateSubmissionFixture</FixtureClass></Fixture>
    <Fixture><Role>AnswerQuestions</Role><FixtureClass>fixtures.policy.AnswerQuestionsFixture</FixtureClass></Fixture>
    <Fixture><Role>UpdateDwelling</Role><FixtureClass>fixtures.policy.UpdateDwellingFixture</FixtureClass></Fixture>
    <Fixture><Role>CreateCoverages</Role><FixtureClass>fixtures.policy.CreateCoveragesFixture</FixtureClass></Fixture>
    <Fixture><Role>QuoteIssue</Role><FixtureClass>fixtures.policy.QuoteIssueFixture</FixtureClass></Fixture>
  </Fixtures>
  <Policy>
    <Property>
      <PropertyName>AccountNumber</PropertyName>
      <Value>C000531294</Value>
    </Property>
    <Property>
      <PropertyName>SubmissionDate</PropertyName>
      <Value>2021-01-02</Value>
    </Property>
  </Policy>
  <Product>
    <ProductCode>HOPHomeowners</ProductCode>
    <QuestionSet>
      <QuestionSetCode>HOPPreQual</QuestionSetCode>
      <Question>
        <QuestionCode>BusinessOnPremises</QuestionCode>
        <Answer weight="40">true</Answer>
        <Answer weight="60">false</Answer>
      </Question>
      <Question>
        <QuestionCode>PriorLosses</QuestionCode>
        <Answer weight="50">0</Answer>
        <Answer weight="50">1</Answer>
      </Question>
    </QuestionSet>
    <Coverable weight="100">
      <CoverableName>HOPDwelling</CoverableName>
      <Property>
        <PropertyName>RoofType</PropertyName>
        <Value weight="50">Asphalt</Value>
        <Value weight="50">Slate</Value>
      </Property>
      <Coverage weight="100">
        <CoverageCode>HOPCovA</CoverageCode>
        <CoverageTerm>
          <CoverageTermCode>HOPCovALimit</CoverageTermCode>
          <Term weight="50">250000</Term>
          <Term weight="50">500000</Term>
        </CoverageTerm>
      </Coverage>
    </Coverable>
  </Product>
</TestSuite>"#;

pub fn load(text: &str) -> Specification {
    Specification::load_str(text).expect("specification should load")
}

pub fn base_spec() -> Specification {
    load(BASE)
}
