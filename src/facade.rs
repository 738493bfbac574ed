//! CRUD facade over a [`QueryExecutor`].
//!
//! The facade keeps find, sort and script state between calls and renders a
//! fresh command for every CRUD call. Only the layout check can fail locally;
//! anything else comes from the executor unchanged.

use crate::config::FacadeConfig;
use crate::error::Result;
use crate::executor::QueryExecutor;
use crate::query::{Pagination, QueryComposer, QueryState};
use crate::types::{
  Command, QueryResult, Request, ScriptParamSyntax, ScriptParameter, SortCriterion,
  WhereCriterion,
};

pub struct Facade<E> {
  executor: E,
  state: QueryState,
}

impl<E: QueryExecutor> Facade<E> {
  pub fn new(executor: E) -> Self {
    Self {
      executor,
      state: QueryState::new(),
    }
  }

  pub fn from_config(executor: E, config: &FacadeConfig) -> Self {
    let mut facade = Self::new(executor);
    facade.state.default_layout = config.layout.default.clone();
    facade.state.script.set_syntax(config.script.param_syntax);
    facade
  }

  pub fn set_default_layout(&mut self, layout: impl Into<String>) -> &mut Self {
    self.state.default_layout = layout.into();
    self
  }

  pub fn default_layout(&self) -> &str {
    &self.state.default_layout
  }

  /// Layout targeted by the most recent call.
  pub fn layout(&self) -> &str {
    &self.state.layout
  }

  pub fn resolve_layout(&mut self, layout: Option<&str>) -> Result<&str> {
    self.state.resolve_layout(layout)
  }

  pub fn add_where(&mut self, field: &str, value: &str, op: impl AsRef<str>) -> &mut Self {
    self.state.where_criteria.add(field, value, op);
    self
  }

  pub fn where_criteria(&self) -> &[WhereCriterion] {
    self.state.where_criteria.get_all()
  }

  pub fn set_where_criteria(&mut self, criteria: Vec<WhereCriterion>) -> &mut Self {
    self.state.where_criteria.set_all(criteria);
    self
  }

  pub fn add_sort(&mut self, field: &str, order: impl AsRef<str>) -> &mut Self {
    self.state.sort_criteria.add(field, order);
    self
  }

  pub fn sort_criteria(&self) -> &[SortCriterion] {
    self.state.sort_criteria.get_all()
  }

  pub fn set_sort_criteria(&mut self, criteria: Vec<SortCriterion>) -> &mut Self {
    self.state.sort_criteria.set_all(criteria);
    self
  }

  /// Drops accumulated find and sort criteria.
  pub fn clear_criteria(&mut self) -> &mut Self {
    self.state.where_criteria.clear();
    self.state.sort_criteria.clear();
    self
  }

  pub fn set_script_name(&mut self, name: impl Into<String>) -> &mut Self {
    self.state.script.set_name(name);
    self
  }

  pub fn script_name(&self) -> &str {
    self.state.script.name()
  }

  pub fn set_script_param_syntax(&mut self, syntax: ScriptParamSyntax) -> &mut Self {
    self.state.script.set_syntax(syntax);
    self
  }

  pub fn add_script_parameter(&mut self, name: &str, value: &str) -> &mut Self {
    self.state.script.add_parameter(name, value);
    self
  }

  pub fn script_parameters(&self) -> &[ScriptParameter] {
    self.state.script.parameters()
  }

  pub fn set_script_parameters(&mut self, parameters: Vec<ScriptParameter>) -> &mut Self {
    self.state.script.set_parameters(parameters);
    self
  }

  /// The `&-script=...` block that select and script calls append.
  pub fn script_command(&self) -> String {
    self.state.script.command()
  }

  pub fn state(&self) -> &QueryState {
    &self.state
  }

  pub fn executor(&self) -> &E {
    &self.executor
  }

  pub fn executor_mut(&mut self) -> &mut E {
    &mut self.executor
  }

  pub fn into_executor(self) -> E {
    self.executor
  }

  pub fn insert<I, K, V>(&mut self, fields: I, layout: Option<&str>) -> Result<QueryResult>
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
  {
    self.state.resolve_layout(layout)?;
    let command = self.state.compose_insert(collect_fields(fields));
    self.dispatch(command)
  }

  pub fn update<I, K, V>(
    &mut self,
    rec_id: impl ToString,
    fields: I,
    layout: Option<&str>,
  ) -> Result<QueryResult>
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
  {
    self.state.resolve_layout(layout)?;
    let command = self
      .state
      .compose_update(&rec_id.to_string(), collect_fields(fields));
    self.dispatch(command)
  }

  pub fn delete(&mut self, rec_id: impl ToString, layout: Option<&str>) -> Result<QueryResult> {
    self.state.resolve_layout(layout)?;
    let command = self.state.compose_delete(&rec_id.to_string());
    self.dispatch(command)
  }

  pub fn duplicate(&mut self, rec_id: impl ToString, layout: Option<&str>) -> Result<QueryResult> {
    self.state.resolve_layout(layout)?;
    let command = self.state.compose_duplicate(&rec_id.to_string());
    self.dispatch(command)
  }

  /// Find with the accumulated criteria, or find all when there are none.
  pub fn select(
    &mut self,
    max: Option<u32>,
    skip: Option<u32>,
    layout: Option<&str>,
  ) -> Result<QueryResult> {
    self.state.resolve_layout(layout)?;
    self.state.pagination = Pagination::new(max, skip);
    let command = self.state.compose_select();
    self.dispatch(command)
  }

  /// Run a script outside of a find. `script` replaces the configured name
  /// when given.
  pub fn execute_script(
    &mut self,
    script: Option<&str>,
    layout: Option<&str>,
  ) -> Result<QueryResult> {
    if let Some(name) = script.filter(|s| !s.is_empty()) {
      self.state.script.set_name(name);
    }
    self.state.resolve_layout(layout)?;
    let command = self.state.compose_script();
    self.dispatch(command)
  }

  fn dispatch(&mut self, command: Command) -> Result<QueryResult> {
    let request = Request::new(self.state.layout.clone(), command);
    tracing::debug!(
      "Executing on layout {}: {}",
      request.layout,
      request.query_string()
    );
    let result = self.executor.execute(&request);
    match &result {
      Ok(r) => tracing::debug!(
        "Layout {} returned {} of {} rows",
        request.layout,
        r.fetch_size,
        r.count
      ),
      Err(e) => tracing::debug!("Layout {} failed: {}", request.layout, e),
    }
    result
  }
}

fn collect_fields<I, K, V>(fields: I) -> Vec<(String, String)>
where
  I: IntoIterator<Item = (K, V)>,
  K: Into<String>,
  V: Into<String>,
{
  fields
    .into_iter()
    .map(|(k, v)| (k.into(), v.into()))
    .collect()
}
