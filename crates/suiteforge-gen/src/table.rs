//! Fixture table protocol: the two table archetypes and their row shapes.
//!
//! A column table is a fixture-path row, one heading row, then data rows.
//! An action table is a fixture-path row followed by an open-ended command
//! sequence (`set`, `select`, `create`, `with`, `commit`). Cell-level
//! uniqueness flags ride along with every row and are carried unchanged to
//! the renderer.

use serde::Serialize;

/// The five workflow roles, one table per role per scenario.
///
/// A closed variant set: each role carries its fixed archetype, title, and
/// two-letter abbreviation, and the synthesizer dispatches over it in a
/// fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    CreateSubmission,
    AnswerQuestions,
    UpdateDwelling,
    CreateCoverages,
    QuoteIssue,
}

impl Role {
    /// Role name as it appears in the specification's Fixtures section.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreateSubmission => "CreateSubmission",
            Self::AnswerQuestions => "AnswerQuestions",
            Self::UpdateDwelling => "UpdateDwelling",
            Self::CreateCoverages => "CreateCoverages",
            Self::QuoteIssue => "QuoteIssue",
        }
    }

    /// Two-letter abbreviation used in role-specific identifiers.
    #[must_use]
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::CreateSubmission => "CS",
            Self::AnswerQuestions => "AQ",
            Self::UpdateDwelling => "UD",
            Self::CreateCoverages => "CC",
            Self::QuoteIssue => "QI",
        }
    }

    /// Heading text above the rendered table.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::CreateSubmission => "Create Submission",
            Self::AnswerQuestions => "Create Answers to Pre-Qualification Questions",
            Self::UpdateDwelling => "Update Dwelling",
            Self::CreateCoverages => "Create Coverages",
            Self::QuoteIssue => "Quote and Issue",
        }
    }

    /// Table archetype this role emits.
    #[must_use]
    pub fn kind(self) -> TableKind {
        match self {
            Self::CreateCoverages => TableKind::Action,
            _ => TableKind::Column,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Table archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TableKind {
    /// Fixed headings, data rows underneath.
    Column,
    /// Ordered command sequence.
    Action,
}

/// One table row: cell values plus a parallel list of uniqueness flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub cells: Vec<String>,
    pub unique: Vec<bool>,
}

impl Row {
    /// Row with no unique cells.
    #[must_use]
    pub fn plain(cells: Vec<String>) -> Self {
        let unique = vec![false; cells.len()];
        Self { cells, unique }
    }

    /// Row with explicit uniqueness flags; the lists must be parallel.
    #[must_use]
    pub fn flagged(cells: Vec<String>, unique: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), unique.len(), "cells and flags must be parallel");
        Self { cells, unique }
    }
}

/// One fixture table of a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub role: Role,
    pub kind: TableKind,
    /// Full fixture-class path, rendered as the table's first row.
    pub fixture: String,
    rows: Vec<Row>,
}

impl Table {
    /// Column table with its heading row in place.
    #[must_use]
    pub fn column(role: Role, fixture: impl Into<String>, headings: Row) -> Self {
        Self {
            role,
            kind: TableKind::Column,
            fixture: fixture.into(),
            rows: vec![headings],
        }
    }

    /// Empty action table; command rows are appended through the command
    /// helpers below.
    #[must_use]
    pub fn action(role: Role, fixture: impl Into<String>) -> Self {
        Self {
            role,
            kind: TableKind::Action,
            fixture: fixture.into(),
            rows: Vec::new(),
        }
    }

    /// Rows below the fixture-path row (headings included for column
    /// tables).
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Data rows of a column table: everything under the heading row.
    #[must_use]
    pub fn data_rows(&self) -> &[Row] {
        match self.kind {
            TableKind::Column => &self.rows[1..],
            TableKind::Action => &self.rows,
        }
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// `set <name> <value>` command row.
    pub fn set(&mut self, name: &str, value: &str) {
        self.push(Row::plain(cmd(["set", name, value, ""])));
    }

    /// `select submission <id>` command row; the id cell is flagged unique.
    pub fn select_submission(&mut self, submission_id: &str) {
        self.push(Row::flagged(
            cmd(["select", "submission", submission_id, ""]),
            vec![false, false, true, false],
        ));
    }

    /// `select coverable <name>` or `create coverable <name>` command row.
    pub fn add_coverable(&mut self, verb: &str, name: &str) {
        self.push(Row::plain(cmd([verb, "coverable", name, ""])));
    }

    /// `create coverage <sequenceId> <code>` command row.
    pub fn create_coverage(&mut self, sequence_id: &str, code: &str) {
        self.push(Row::plain(cmd(["create", "coverage", sequence_id, code])));
    }

    /// `with <termCode> <value>` command row.
    pub fn with_term(&mut self, term_code: &str, value: &str) {
        self.push(Row::plain(cmd(["with", term_code, value, ""])));
    }

    /// Trailing `commit` command row.
    pub fn commit(&mut self) {
        self.push(Row::plain(cmd(["commit", "", "", ""])));
    }
}

fn cmd(cells: [&str; 4]) -> Vec<String> {
    cells.iter().map(|c| (*c).to_string()).collect()
}
