//! AnswerQuestions: one data row per question across all question sets.

use crate::scenario::CaseIds;
use crate::table::{Role, Row, Table};
use suiteforge_spec::{Selector, SpecError, Specification};

const ROLE: Role = Role::AnswerQuestions;

/// Questions are never excluded; only their answer is selected, one
/// alternative draw per question in document order.
pub(super) fn build(
    spec: &Specification,
    ids: &CaseIds,
    selector: &mut Selector,
) -> Result<Table, SpecError> {
    let fixture = spec.fixture_class(ROLE.as_str())?;
    let mut table = Table::column(
        ROLE,
        fixture,
        Row::flagged(
            vec![
                "TestId".to_string(),
                "Submission ID".to_string(),
                "Question Set Code".to_string(),
                "Question Code".to_string(),
                "Answer".to_string(),
                "Valid()".to_string(),
            ],
            vec![false, true, false, false, false, false],
        ),
    );

    let mut row_number = 0;
    for set in spec.product().question_sets() {
        for question in set.questions() {
            let answer = question.answer(selector)?;
            row_number += 1;
            table.push(Row::plain(vec![
                ids.row_test_id(ROLE, row_number),
                ids.submission_id(),
                set.code().to_string(),
                question.code().to_string(),
                answer.to_string(),
                "true".to_string(),
            ]));
        }
    }
    Ok(table)
}
