//! Run-level error type for suite generation.

use suiteforge_spec::SpecError;

/// Everything that can abort a suite-generation run: specification and
/// selection failures from the model, and I/O failures surfaced by the
/// output sink.
#[derive(Debug, thiserror::Error)]
pub enum SuiteError {
    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error("output could not be written: {0}")]
    Io(#[from] std::io::Error),
}

impl From<suiteforge_spec::SpecificationError> for SuiteError {
    fn from(err: suiteforge_spec::SpecificationError) -> Self {
        Self::Spec(err.into())
    }
}

impl From<suiteforge_spec::SelectionExhausted> for SuiteError {
    fn from(err: suiteforge_spec::SelectionExhausted) -> Self {
        Self::Spec(err.into())
    }
}
