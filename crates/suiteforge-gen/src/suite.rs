//! Suite-level generation: the per-run loop, output sink, and run report.

use crate::error::SuiteError;
use crate::render;
use crate::scenario::Scenario;
use crate::synthesizer;
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use suiteforge_spec::{Selector, Specification};

/// Receives each synthesized scenario and persists it.
///
/// Persistence failures surface as `io::Error`; the suite builder treats
/// them as fatal to the run.
pub trait ScenarioSink {
    fn persist(&mut self, spec: &Specification, scenario: &Scenario) -> io::Result<()>;
}

/// Writes each scenario as `<library>/<suiteName>/<nnnn>_<suiteId>.html`.
#[derive(Debug)]
pub struct HtmlSink {
    library: PathBuf,
}

impl HtmlSink {
    #[must_use]
    pub fn new(library: impl Into<PathBuf>) -> Self {
        Self {
            library: library.into(),
        }
    }

    /// Directory holding this suite's test case files.
    #[must_use]
    pub fn suite_dir(&self, spec: &Specification) -> PathBuf {
        self.library.join(spec.suite_name())
    }

    /// Full path of one test case file.
    #[must_use]
    pub fn case_path(&self, spec: &Specification, scenario: &Scenario) -> PathBuf {
        self.suite_dir(spec)
            .join(format!("{:04}_{}.html", scenario.number, spec.suite_id()))
    }
}

impl ScenarioSink for HtmlSink {
    fn persist(&mut self, spec: &Specification, scenario: &Scenario) -> io::Result<()> {
        std::fs::create_dir_all(self.suite_dir(spec))?;
        let path = self.case_path(spec, scenario);
        std::fs::write(&path, render::render_scenario(spec, scenario))?;
        tracing::debug!(path = %path.display(), "test case written");
        Ok(())
    }
}

/// Summary of one completed run.
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub suite_name: String,
    pub suite_id: String,
    pub cases: u32,
    pub tables: usize,
    pub draws: u64,
}

impl SuiteReport {
    /// Plain-text report for the CLI.
    #[must_use]
    pub fn render_text(&self) -> String {
        format!(
            "Suite: {} ({})\nCases: {}\nTables: {}\nDraws: {}\n",
            self.suite_name, self.suite_id, self.cases, self.tables, self.draws
        )
    }
}

/// Drives one suite-generation run: seeds the selector once, synthesizes
/// scenario 1..=count strictly sequentially, and hands each scenario to the
/// sink.
pub struct SuiteBuilder<'a, S> {
    spec: &'a Specification,
    sink: S,
}

impl<'a, S: ScenarioSink> SuiteBuilder<'a, S> {
    #[must_use]
    pub fn new(spec: &'a Specification, sink: S) -> Self {
        Self { spec, sink }
    }

    /// Generate the whole suite.
    ///
    /// # Errors
    /// The first specification, selection, or sink failure aborts the run;
    /// scenarios already persisted stay on disk, the failed one is not
    /// emitted.
    pub fn generate(mut self) -> Result<SuiteReport, SuiteError> {
        let mut selector = Selector::from_seed(self.spec.seed());
        let mut tables = 0;

        for number in 1..=self.spec.count() {
            let scenario = synthesizer::synthesize(self.spec, number, &mut selector)?;
            tables += scenario.tables.len();
            self.sink.persist(self.spec, &scenario)?;
        }

        let report = SuiteReport {
            suite_name: self.spec.suite_name().to_string(),
            suite_id: self.spec.suite_id().to_string(),
            cases: self.spec.count(),
            tables,
            draws: selector.draws(),
        };
        tracing::info!(
            suite = %report.suite_name,
            cases = report.cases,
            draws = report.draws,
            "suite generated"
        );
        Ok(report)
    }
}

/// Generate to a library directory with the default HTML sink.
///
/// # Errors
/// See [`SuiteBuilder::generate`].
pub fn generate_suite(
    spec: &Specification,
    library: impl AsRef<Path>,
) -> Result<SuiteReport, SuiteError> {
    SuiteBuilder::new(spec, HtmlSink::new(library.as_ref())).generate()
}
