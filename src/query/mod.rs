mod composer;
mod criteria;
mod script;

pub use composer::{Pagination, QueryComposer, QueryState};
pub use criteria::{SortCriteria, WhereCriteria};
pub use script::Script;
