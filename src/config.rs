use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::types::ScriptParamSyntax;

/// Replace `$NAME` and `${NAME}` with the variable's value, or nothing when
/// unset. Substituted values are copied through without being scanned again.
fn expand_env_vars(input: &str) -> String {
  let mut out = String::with_capacity(input.len());
  let mut rest = input;

  while let Some(pos) = rest.find('$') {
    out.push_str(&rest[..pos]);
    let after = &rest[pos + 1..];

    if let Some(braced) = after.strip_prefix('{') {
      let Some(end) = braced.find('}') else {
        // Unterminated `${`, keep it as written
        out.push_str(&rest[pos..]);
        return out;
      };
      out.push_str(&std::env::var(&braced[..end]).unwrap_or_default());
      rest = &braced[end + 1..];
      continue;
    }

    let name_len = after
      .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
      .unwrap_or(after.len());
    if name_len == 0 {
      out.push('$');
    } else {
      out.push_str(&std::env::var(&after[..name_len]).unwrap_or_default());
    }
    rest = &after[name_len..];
  }

  out.push_str(rest);
  out
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FacadeConfig {
  #[serde(default)]
  pub layout: LayoutSection,
  #[serde(default)]
  pub script: ScriptSection,
  #[serde(default)]
  pub logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutSection {
  /// Used by CRUD calls that do not name a layout
  #[serde(default)]
  pub default: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScriptSection {
  /// Packing of `-script.param`, must match what the server scripts parse
  #[serde(default)]
  pub param_syntax: ScriptParamSyntax,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
  #[serde(default = "default_level")]
  pub level: String,
}
fn default_level() -> String {
  "info".into()
}
impl Default for LoggingSection {
  fn default() -> Self {
    Self {
      level: default_level(),
    }
  }
}

impl FacadeConfig {
  pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
    let content = std::fs::read_to_string(&path)?;
    Self::from_yaml(&content)
  }

  pub fn from_yaml(content: &str) -> Result<Self> {
    let expanded = expand_env_vars(content);
    Ok(serde_yaml::from_str(&expanded)?)
  }

  pub fn find_and_load() -> Result<Option<Self>> {
    for p in ["fmfacade.yaml", "fmfacade.yml"] {
      if Path::new(p).exists() {
        tracing::info!("Loading config from {}", p);
        return Ok(Some(Self::from_file(p)?));
      }
    }
    Ok(None)
  }
}
