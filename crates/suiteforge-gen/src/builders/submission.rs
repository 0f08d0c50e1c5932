//! CreateSubmission: one column table opening the policy lifecycle.

use crate::dates;
use crate::scenario::CaseIds;
use crate::table::{Role, Row, Table};
use suiteforge_spec::{Selector, SpecError, Specification, SpecificationError};

const ROLE: Role = Role::CreateSubmission;

/// Policy properties are resolved in one pass in document order; the
/// account number must resolve, the submission date falls back to today.
pub(super) fn build(
    spec: &Specification,
    ids: &CaseIds,
    selector: &mut Selector,
) -> Result<Table, SpecError> {
    let fixture = spec.fixture_class(ROLE.as_str())?;
    let resolved = spec.policy().resolve_properties(selector)?;

    let account_number = lookup(&resolved, "AccountNumber").ok_or_else(|| {
        SpecificationError::MissingProperty {
            name: "AccountNumber".to_string(),
            owner: "Policy".to_string(),
        }
    })?;
    let submission_date = lookup(&resolved, "SubmissionDate")
        .map(str::to_string)
        .unwrap_or_else(dates::current_date);

    let mut table = Table::column(
        ROLE,
        fixture,
        Row::flagged(
            vec![
                "TestId".to_string(),
                "Submission ID".to_string(),
                "Account Number".to_string(),
                "Submission Date".to_string(),
                "Valid()".to_string(),
            ],
            vec![false, true, false, false, false],
        ),
    );
    table.push(Row::plain(vec![
        ids.row_test_id(ROLE, 1),
        ids.submission_id(),
        account_number.to_string(),
        submission_date,
        "true".to_string(),
    ]));
    Ok(table)
}

fn lookup<'a>(resolved: &[(&'a str, &'a str)], name: &str) -> Option<&'a str> {
    resolved
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, value)| *value)
}
