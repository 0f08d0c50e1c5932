//! HTML rendering of one scenario into a GFIT-style test case page.
//!
//! Page shape: title and metadata from the specification, a header table
//! binding the case's Test Id and PublicID, then an `h2` heading and a
//! bordered table per fixture table. Unique cells render with
//! `class="unique"` so the runner can highlight identifying columns.

use crate::scenario::{CaseIds, Scenario};
use crate::table::{Row, Table};
use std::fmt::Write as _;
use suiteforge_spec::Specification;

/// Render one scenario as a complete HTML page.
#[must_use]
pub fn render_scenario(spec: &Specification, scenario: &Scenario) -> String {
    let ids = CaseIds::new(spec.suite_id(), scenario.number);
    let mut page = String::new();

    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    let _ = writeln!(page, "<title>{}</title>", escape(spec.suite_name()));
    page.push_str("</head>\n<body>\n");
    let _ = writeln!(page, "<h1>{}</h1>", escape(spec.suite_name()));
    let _ = writeln!(page, "<p>Project: {}</p>", escape(spec.project()));
    let _ = writeln!(page, "<p>Author: {}</p>", escape(spec.author()));
    let _ = writeln!(page, "<p>{}</p>", escape(spec.description()));

    render_header_table(&mut page, &ids);
    for table in &scenario.tables {
        render_table(&mut page, table);
    }

    page.push_str("</body>\n</html>\n");
    page
}

/// The header table sets the case-level Test Id and PublicID on the runner;
/// the PublicID value cell is flagged unique.
fn render_header_table(page: &mut String, ids: &CaseIds) {
    page.push_str("<table border=\"1\">\n");
    render_row(
        page,
        &Row::plain(vec![
            "set".to_string(),
            "Test Id".to_string(),
            "to".to_string(),
            ids.test_id(),
            String::new(),
        ]),
    );
    render_row(
        page,
        &Row::flagged(
            vec![
                "set".to_string(),
                "PublicID".to_string(),
                "to".to_string(),
                ids.public_id(),
                String::new(),
            ],
            vec![false, false, false, true, false],
        ),
    );
    page.push_str("</table>\n");
}

fn render_table(page: &mut String, table: &Table) {
    let _ = writeln!(page, "<h2>{}</h2>", escape(table.role.title()));
    page.push_str("<table border=\"1\">\n");
    // Fixture-path row first, then the table's own rows.
    render_row(page, &Row::plain(vec![table.fixture.clone()]));
    for row in table.rows() {
        render_row(page, row);
    }
    page.push_str("</table>\n");
}

fn render_row(page: &mut String, row: &Row) {
    page.push_str("<tr>");
    for (cell, unique) in row.cells.iter().zip(&row.unique) {
        if *unique {
            let _ = write!(page, "<td class=\"unique\">{}</td>", escape(cell));
        } else {
            let _ = write!(page, "<td>{}</td>", escape(cell));
        }
    }
    page.push_str("</tr>\n");
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
