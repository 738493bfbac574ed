//! Builds command strings for the FileMaker XML/URL web publishing protocol
//! and hands them to a pluggable [`QueryExecutor`].
//!
//! ```rust,ignore
//! let mut fm = Facade::new(executor);
//! fm.set_default_layout("Contacts");
//! fm.add_where("Last Name", "O'Brien", FindOperator::Cn)
//!   .add_sort("First Name", SortOrder::Ascend);
//! let result = fm.select(Some(50), None, None)?;
//! ```

pub mod config;
pub mod error;
pub mod executor;
pub mod facade;
pub mod logging;
pub mod query;
pub mod types;

pub use config::FacadeConfig;
pub use error::{Error, Result};
pub use executor::QueryExecutor;
pub use facade::Facade;
pub use query::{QueryComposer, QueryState, Script, SortCriteria, WhereCriteria};
pub use types::{
  Command, FindOperator, QueryResult, Request, Row, ScriptParamSyntax, ScriptParameter,
  SortCriterion, SortOrder, WhereCriterion,
};
