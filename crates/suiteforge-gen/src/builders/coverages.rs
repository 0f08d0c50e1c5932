//! CreateCoverages: the action sequence covering every included coverable.

use crate::scenario::CaseIds;
use crate::table::{Role, Table};
use suiteforge_spec::{Selector, SpecError, Specification};

const ROLE: Role = Role::CreateCoverages;

/// Command order per included coverable: the coverable's `select`/`create`
/// row, one `set` per included property, then per included coverage a
/// `create coverage` row and one `with` per coverage term. The coverage
/// sequence ordinal counts created coverages across the whole table.
pub(super) fn build(
    spec: &Specification,
    ids: &CaseIds,
    selector: &mut Selector,
) -> Result<Table, SpecError> {
    let fixture = spec.fixture_class(ROLE.as_str())?;
    let test_id = ids.role_test_id(ROLE);

    let mut table = Table::action(ROLE, fixture);
    table.set("TestId", &test_id);
    table.select_submission(&ids.submission_id());

    let mut coverage_ordinal = 0;
    for coverable in spec.product().selected_coverables(selector) {
        table.add_coverable(coverable.mode().verb(), coverable.name());
        for (name, value) in coverable.resolve_properties(selector)? {
            table.set(name, value);
        }
        for coverage in coverable.selected_coverages(selector) {
            coverage_ordinal += 1;
            let sequence_id = format!("{test_id}-{coverage_ordinal}");
            table.create_coverage(&sequence_id, coverage.code());
            for term in coverage.terms() {
                table.with_term(term.code(), term.value(selector)?);
            }
        }
    }

    table.commit();
    Ok(table)
}
