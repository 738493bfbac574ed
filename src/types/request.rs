use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::criteria::encode;
use crate::error::{Error, Result};

/// A single record as returned by the server, keyed by field name.
pub type Row = Map<String, Value>;

/// The command part of a request.
///
/// [`Command::query_string`] is the final, percent-encoded query string for
/// both variants. Executors append it to the endpoint URL as-is and must not
/// encode it again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
  /// Ordered flag/value pairs holding raw text. Each key and value is
  /// encoded exactly once by `query_string`.
  Params(Vec<(String, String)>),
  /// A query string that was encoded while it was composed. Rendered
  /// verbatim.
  Raw(String),
}

impl Command {
  pub fn query_string(&self) -> String {
    match self {
      Self::Params(pairs) => pairs
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&"),
      Self::Raw(s) => s.clone(),
    }
  }
}

/// Everything an executor needs for one round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
  pub layout: String,
  pub command: Command,
}

impl Request {
  pub fn new(layout: impl Into<String>, command: Command) -> Self {
    Self {
      layout: layout.into(),
      command,
    }
  }

  pub fn query_string(&self) -> String {
    self.command.query_string()
  }
}

/// Parsed server response handed back by an executor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
  #[serde(default)]
  pub url: String,
  #[serde(default)]
  pub error: i32,
  #[serde(default, rename = "errortext")]
  pub error_text: String,
  #[serde(default, rename = "errortype")]
  pub error_type: String,
  #[serde(default)]
  pub count: u64,
  #[serde(default, rename = "fetchsize")]
  pub fetch_size: u64,
  #[serde(default)]
  pub rows: Vec<Row>,
}

impl QueryResult {
  pub fn is_ok(&self) -> bool {
    self.error == 0
  }

  /// Turns a non-zero server error code into `Error::ServerQuery`.
  pub fn into_result(self) -> Result<Self> {
    if self.is_ok() {
      Ok(self)
    } else {
      Err(Error::ServerQuery {
        code: self.error,
        text: self.error_text,
      })
    }
  }
}
