use serde::{Deserialize, Serialize};

use super::{Script, SortCriteria, WhereCriteria};
use crate::error::{Error, Result};
use crate::types::Command;

/// Renders commands in the server's URL query grammar.
pub trait QueryComposer {
  /// `-max`, `-skip`, the find block, the sort block and, when a script
  /// name is set, the script block.
  fn compose_select(&self) -> Command;

  /// `-findany` followed by the script block.
  fn compose_script(&self) -> Command;

  fn compose_insert(&self, fields: Vec<(String, String)>) -> Command;

  fn compose_update(&self, rec_id: &str, fields: Vec<(String, String)>) -> Command;

  fn compose_delete(&self, rec_id: &str) -> Command;

  fn compose_duplicate(&self, rec_id: &str) -> Command;
}

/// Row window for a select. Zero means "not set", like an absent value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
  #[serde(default)]
  pub max: Option<u32>,
  #[serde(default)]
  pub skip: Option<u32>,
}

impl Pagination {
  pub fn new(max: Option<u32>, skip: Option<u32>) -> Self {
    Self { max, skip }
  }

  fn render(&self) -> Vec<String> {
    let mut parts = Vec::new();
    if let Some(max) = self.max.filter(|n| *n > 0) {
      parts.push(format!("-max={}", max));
    }
    if let Some(skip) = self.skip.filter(|n| *n > 0) {
      parts.push(format!("-skip={}", skip));
    }
    parts
  }
}

/// Accumulated state behind a facade.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
  #[serde(default)]
  pub layout: String,
  #[serde(default)]
  pub default_layout: String,
  #[serde(default)]
  pub where_criteria: WhereCriteria,
  #[serde(default)]
  pub sort_criteria: SortCriteria,
  #[serde(default)]
  pub script: Script,
  #[serde(default)]
  pub pagination: Pagination,
}

impl QueryState {
  pub fn new() -> Self {
    Self::default()
  }

  /// An explicit, non-empty name wins, then the default layout. Fails when
  /// neither is set.
  pub fn resolve_layout(&mut self, explicit: Option<&str>) -> Result<&str> {
    let layout = match explicit.filter(|l| !l.is_empty()) {
      Some(layout) => layout.to_string(),
      None => self.default_layout.clone(),
    };
    if layout.is_empty() {
      return Err(Error::missing_layout());
    }
    self.layout = layout;
    Ok(&self.layout)
  }
}

fn with_flags(
  mut fields: Vec<(String, String)>,
  flags: &[(&str, &str)],
) -> Vec<(String, String)> {
  fields.extend(flags.iter().map(|(k, v)| (k.to_string(), v.to_string())));
  fields
}

impl QueryComposer for QueryState {
  fn compose_select(&self) -> Command {
    let mut parts = self.pagination.render();
    parts.push(self.where_criteria.render());
    if let Some(sort) = self.sort_criteria.render() {
      parts.push(sort);
    }
    let mut command = parts.join("&");
    if self.script.has_name() {
      command.push_str(&self.script.command());
    }
    Command::Raw(command)
  }

  fn compose_script(&self) -> Command {
    Command::Raw(format!("-findany{}", self.script.command()))
  }

  fn compose_insert(&self, fields: Vec<(String, String)>) -> Command {
    Command::Params(with_flags(fields, &[("-new", "")]))
  }

  fn compose_update(&self, rec_id: &str, fields: Vec<(String, String)>) -> Command {
    Command::Params(with_flags(fields, &[("-edit", ""), ("-recid", rec_id)]))
  }

  fn compose_delete(&self, rec_id: &str) -> Command {
    Command::Params(with_flags(Vec::new(), &[("-delete", ""), ("-recid", rec_id)]))
  }

  fn compose_duplicate(&self, rec_id: &str) -> Command {
    Command::Params(with_flags(Vec::new(), &[("-dup", ""), ("-recid", rec_id)]))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn raw(command: Command) -> String {
    match command {
      Command::Raw(s) => s,
      other => panic!("Expected raw command, got {:?}", other),
    }
  }

  #[test]
  fn select_all_without_state() {
    let state = QueryState::new();
    assert_eq!(raw(state.compose_select()), "-findall");
  }

  #[test]
  fn select_with_pagination_and_find() {
    let mut state = QueryState::new();
    state.pagination = Pagination::new(Some(10), Some(20));
    state.where_criteria.add("Status", "Open", "eq");
    assert_eq!(
      raw(state.compose_select()),
      "-max=10&-skip=20&Status=Open&Status.op=eq&-find"
    );
  }

  #[test]
  fn zero_pagination_is_omitted() {
    let mut state = QueryState::new();
    state.pagination = Pagination::new(Some(0), Some(5));
    assert_eq!(raw(state.compose_select()), "-skip=5&-findall");
  }

  #[test]
  fn select_with_sort_and_script() {
    let mut state = QueryState::new();
    state.sort_criteria.add("Name", "descend");
    state.script.set_name("After Find").add_parameter("mode", "full");
    assert_eq!(
      raw(state.compose_select()),
      "-findall&-sortfield.1=Name&-sortorder.1=descend&-script=After%20Find&-script.param=$mode=\"full\" ; "
    );
  }

  #[test]
  fn script_parameters_without_name_are_not_sent_on_select() {
    let mut state = QueryState::new();
    state.script.add_parameter("mode", "full");
    assert_eq!(raw(state.compose_select()), "-findall");
  }

  #[test]
  fn compose_script_uses_findany() {
    let mut state = QueryState::new();
    state.script.set_name("Cleanup");
    assert_eq!(raw(state.compose_script()), "-findany&-script=Cleanup");
  }

  #[test]
  fn crud_commands() {
    let state = QueryState::new();
    let fields = vec![("Status".to_string(), "Closed".to_string())];
    assert_eq!(
      state.compose_insert(fields.clone()).query_string(),
      "Status=Closed&-new="
    );
    assert_eq!(
      state.compose_update("12", fields).query_string(),
      "Status=Closed&-edit=&-recid=12"
    );
    assert_eq!(state.compose_delete("7").query_string(), "-delete=&-recid=7");
    assert_eq!(state.compose_duplicate("7").query_string(), "-dup=&-recid=7");
  }

  #[test]
  fn resolve_layout_prefers_explicit() {
    let mut state = QueryState::new();
    state.default_layout = "Default".into();
    assert_eq!(state.resolve_layout(Some("Tasks")).unwrap(), "Tasks");
    assert_eq!(state.resolve_layout(None).unwrap(), "Default");
    assert_eq!(state.resolve_layout(Some("")).unwrap(), "Default");
  }

  #[test]
  fn resolve_layout_fails_without_default() {
    let mut state = QueryState::new();
    let err = state.resolve_layout(None).unwrap_err();
    assert!(err.is_configuration());
  }
}
