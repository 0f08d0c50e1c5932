//! Per-case identifiers and the transient scenario artifact.
//!
//! Identifiers are derived deterministically from the suite id and the
//! 1-based case number, never from the selection stream, so they stay
//! stable no matter which elements the draws include.

use crate::table::{Role, Table};
use serde::Serialize;

/// Identifier derivations for one test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseIds {
    suite_id: String,
    number: u32,
}

impl CaseIds {
    #[must_use]
    pub fn new(suite_id: impl Into<String>, number: u32) -> Self {
        Self {
            suite_id: suite_id.into(),
            number,
        }
    }

    /// 1-based case number.
    #[inline]
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Case number as a zero-padded four-digit string.
    #[must_use]
    pub fn case_number(&self) -> String {
        format!("{:04}", self.number)
    }

    /// Case-level public id: `<suiteId>-<nnnn>`.
    #[must_use]
    pub fn public_id(&self) -> String {
        format!("{}-{}", self.suite_id, self.case_number())
    }

    /// Case-level test id: `TEST-<suiteId>-<nnnn>`.
    #[must_use]
    pub fn test_id(&self) -> String {
        format!("TEST-{}", self.public_id())
    }

    /// Role-specific public id: `<suiteId>-<nnnn>-<roleAbbrev>`.
    #[must_use]
    pub fn role_public_id(&self, role: Role) -> String {
        format!("{}-{}", self.public_id(), role.abbreviation())
    }

    /// Role-specific test id: `TEST-<suiteId>-<nnnn>-<roleAbbrev>`.
    #[must_use]
    pub fn role_test_id(&self, role: Role) -> String {
        format!("TEST-{}", self.role_public_id(role))
    }

    /// Role test id suffixed with a 1-based data-row number, used by the
    /// repeating column tables.
    #[must_use]
    pub fn row_test_id(&self, role: Role, row: usize) -> String {
        format!("{}-{row}", self.role_test_id(role))
    }

    /// Submission id, constant across all tables of this case and unique
    /// across the suite: `SUBMISSION-<nnnn>`.
    #[must_use]
    pub fn submission_id(&self) -> String {
        format!("SUBMISSION-{}", self.case_number())
    }
}

/// One synthesized test case: a sequence number, its submission id, and the
/// ordered fixture tables. Created, persisted, then discarded.
#[derive(Debug, Clone, Serialize)]
pub struct Scenario {
    pub number: u32,
    pub submission_id: String,
    pub tables: Vec<Table>,
}

impl Scenario {
    /// The table generated for a role, if the scenario emitted one.
    #[must_use]
    pub fn table(&self, role: Role) -> Option<&Table> {
        self.tables.iter().find(|t| t.role == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_number_is_zero_padded() {
        assert_eq!(CaseIds::new("HOB", 3).case_number(), "0003");
        assert_eq!(CaseIds::new("HOB", 1204).case_number(), "1204");
    }

    #[test]
    fn ids_derive_from_suite_and_number() {
        let ids = CaseIds::new("HOB", 12);
        assert_eq!(ids.public_id(), "HOB-0012");
        assert_eq!(ids.test_id(), "TEST-HOB-0012");
        assert_eq!(ids.role_public_id(Role::CreateSubmission), "HOB-0012-CS");
        assert_eq!(ids.role_test_id(Role::QuoteIssue), "TEST-HOB-0012-QI");
        assert_eq!(ids.row_test_id(Role::AnswerQuestions, 2), "TEST-HOB-0012-AQ-2");
        assert_eq!(ids.submission_id(), "SUBMISSION-0012");
    }
}
