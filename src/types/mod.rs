mod criteria;
mod request;
mod script;

pub(crate) use criteria::encode;
pub use criteria::{FindOperator, SortCriterion, SortOrder, WhereCriterion};
pub use request::{Command, QueryResult, Request, Row};
pub use script::{ScriptParamSyntax, ScriptParameter};
