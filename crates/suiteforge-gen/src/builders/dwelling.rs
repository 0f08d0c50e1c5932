//! UpdateDwelling: one row updating the dwelling coverable's properties.

use crate::scenario::CaseIds;
use crate::table::{Role, Row, Table};
use suiteforge_spec::{Selector, SpecError, Specification};

const ROLE: Role = Role::UpdateDwelling;

/// Headings and values come from a single resolution pass over the dwelling
/// coverable's properties, so a column is present exactly when its property
/// was included.
pub(super) fn build(
    spec: &Specification,
    ids: &CaseIds,
    selector: &mut Selector,
) -> Result<Table, SpecError> {
    let fixture = spec.fixture_class(ROLE.as_str())?;
    let dwelling = spec.product().dwelling()?;
    let resolved = dwelling.resolve_properties(selector)?;

    let mut headings = vec!["TestId".to_string(), "Submission ID".to_string()];
    let mut unique = vec![false, true];
    let mut values = vec![ids.role_test_id(ROLE), ids.submission_id()];
    for (name, value) in resolved {
        headings.push(name.to_string());
        unique.push(false);
        values.push(value.to_string());
    }
    headings.push("Valid()".to_string());
    unique.push(false);
    values.push("true".to_string());

    let mut table = Table::column(ROLE, fixture, Row::flagged(headings, unique));
    table.push(Row::plain(values));
    Ok(table)
}
