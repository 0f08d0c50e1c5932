//! Fixture table synthesis and rendering.
//!
//! Turns the selection decisions of `suiteforge-spec` into ordered,
//! role-specific fixture tables (one policy lifecycle per test case) and
//! renders each test case as a GFIT-style HTML file.

pub mod builders;
pub mod error;
pub mod render;
pub mod scenario;
pub mod suite;
pub mod synthesizer;
pub mod table;

mod dates;

pub use error::SuiteError;
pub use scenario::{CaseIds, Scenario};
pub use suite::{HtmlSink, ScenarioSink, SuiteBuilder, SuiteReport};
pub use synthesizer::synthesize;
pub use table::{Role, Row, Table, TableKind};
