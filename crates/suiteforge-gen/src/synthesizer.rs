//! Scenario synthesis: fixed-order table production for one test case.

use crate::builders;
use crate::scenario::{CaseIds, Scenario};
use crate::table::Role;
use suiteforge_spec::{Selector, SpecError, Specification};

/// Tables of one scenario, in lifecycle order. QuoteIssue participates only
/// when the policy carries a Quote or Bind marker.
const LIFECYCLE: [Role; 4] = [
    Role::CreateSubmission,
    Role::AnswerQuestions,
    Role::UpdateDwelling,
    Role::CreateCoverages,
];

/// Synthesize scenario `number` (1-based).
///
/// The builders run in a fixed order and every selection decision draws
/// from the shared stream, so the produced tables are fully determined by
/// (specification, seed, number-of-preceding-draws).
///
/// # Errors
/// The first accessor failure aborts the scenario; nothing partial is
/// returned.
pub fn synthesize(
    spec: &Specification,
    number: u32,
    selector: &mut Selector,
) -> Result<Scenario, SpecError> {
    let ids = CaseIds::new(spec.suite_id(), number);

    let mut tables = Vec::with_capacity(5);
    for role in LIFECYCLE {
        tables.push(builders::build(role, spec, &ids, selector)?);
    }
    if spec.policy().should_quote() {
        tables.push(builders::build(Role::QuoteIssue, spec, &ids, selector)?);
    }

    tracing::debug!(
        case = number,
        tables = tables.len(),
        draws = selector.draws(),
        "scenario synthesized"
    );

    Ok(Scenario {
        number,
        submission_id: ids.submission_id(),
        tables,
    })
}
