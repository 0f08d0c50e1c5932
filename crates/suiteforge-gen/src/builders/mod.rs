//! Role-specific table builders.
//!
//! One builder per workflow role, each assembling rows from the model's
//! selection-applying accessors. [`build`] is the single assembly entry
//! point the synthesizer dispatches through; any accessor failure aborts
//! the scenario with no partial table.

mod coverages;
mod dwelling;
mod questions;
mod quote;
mod submission;

use crate::scenario::CaseIds;
use crate::table::{Role, Table};
use suiteforge_spec::{Selector, SpecError, Specification};

/// Assemble the table for one role of one scenario.
///
/// # Errors
/// Specification and selection failures propagate unchanged; the caller
/// abandons the scenario.
pub fn build(
    role: Role,
    spec: &Specification,
    ids: &CaseIds,
    selector: &mut Selector,
) -> Result<Table, SpecError> {
    match role {
        Role::CreateSubmission => submission::build(spec, ids, selector),
        Role::AnswerQuestions => questions::build(spec, ids, selector),
        Role::UpdateDwelling => dwelling::build(spec, ids, selector),
        Role::CreateCoverages => coverages::build(spec, ids, selector),
        Role::QuoteIssue => quote::build(spec, ids),
    }
}
