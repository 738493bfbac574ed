use serde::{Deserialize, Serialize};

use crate::types::{encode, ScriptParamSyntax, ScriptParameter};

/// A server-side script invocation with its named parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
  #[serde(default)]
  name: String,
  #[serde(default)]
  parameters: Vec<ScriptParameter>,
  #[serde(default)]
  syntax: ScriptParamSyntax,
}

impl Script {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      ..Default::default()
    }
  }

  pub fn with_syntax(mut self, syntax: ScriptParamSyntax) -> Self {
    self.syntax = syntax;
    self
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
    self.name = name.into();
    self
  }

  pub fn syntax(&self) -> ScriptParamSyntax {
    self.syntax
  }

  pub fn set_syntax(&mut self, syntax: ScriptParamSyntax) -> &mut Self {
    self.syntax = syntax;
    self
  }

  /// Parameters with an empty name are dropped without error.
  pub fn add_parameter(&mut self, name: &str, value: &str) -> &mut Self {
    match ScriptParameter::new(name, value) {
      Some(param) => self.parameters.push(param),
      None => tracing::warn!("Dropping script parameter with empty name"),
    }
    self
  }

  pub fn parameters(&self) -> &[ScriptParameter] {
    &self.parameters
  }

  pub fn set_parameters(&mut self, parameters: Vec<ScriptParameter>) -> &mut Self {
    self.parameters = parameters;
    self
  }

  pub fn has_name(&self) -> bool {
    !self.name.is_empty()
  }

  /// `&-script=<name>` plus `&-script.param=...` when parameters exist.
  pub fn command(&self) -> String {
    let mut command = format!("&-script={}", encode(&self.name));
    if !self.parameters.is_empty() {
      command.push_str("&-script.param=");
      for param in &self.parameters {
        command.push_str(&self.syntax.render(param));
      }
    }
    command
  }
}
