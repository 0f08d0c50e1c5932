//! QuoteIssue: quote and, with a Bind marker, issue the submission.

use crate::scenario::CaseIds;
use crate::table::{Role, Row, Table};
use suiteforge_spec::{SpecError, Specification};

const ROLE: Role = Role::QuoteIssue;

/// Built only when the policy carries a Quote or Bind marker (the
/// synthesizer gates emission). The `Issue()` column appears only when the
/// Bind marker is present; Bind alone still quotes.
pub(super) fn build(spec: &Specification, ids: &CaseIds) -> Result<Table, SpecError> {
    let fixture = spec.fixture_class(ROLE.as_str())?;

    let mut headings = vec![
        "TestId".to_string(),
        "Submission ID".to_string(),
        "Quote()".to_string(),
    ];
    let mut unique = vec![false, true, false];
    let mut values = vec![
        ids.role_test_id(ROLE),
        ids.submission_id(),
        "true".to_string(),
    ];
    if spec.policy().should_bind() {
        headings.push("Issue()".to_string());
        unique.push(false);
        values.push("true".to_string());
    }

    let mut table = Table::column(ROLE, fixture, Row::flagged(headings, unique));
    table.push(Row::plain(values));
    Ok(table)
}
