use serde::{Deserialize, Serialize};

use super::criteria::encode;

/// How script parameters are packed into the single `-script.param` value.
///
/// The two forms target different server-side parsers. `Quoted` produces
/// `$name="value" ; ` per parameter, suitable for a script that evaluates the
/// parameter as a list of variable assignments. `Delimited` produces
/// `name=value||||` per parameter for scripts that split on `||||`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptParamSyntax {
  #[default]
  Quoted,
  Delimited,
}

impl ScriptParamSyntax {
  pub fn render(&self, param: &ScriptParameter) -> String {
    match self {
      Self::Quoted => format!("${}=\"{}\" ; ", param.name, param.value),
      Self::Delimited => format!("{}={}||||", param.name, param.value),
    }
  }
}

/// A named script parameter, stored percent-encoded. Double quotes in the
/// value are escaped as `\"` before encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptParameter {
  pub name: String,
  pub value: String,
}

impl ScriptParameter {
  /// Returns `None` when the encoded name is empty.
  pub fn new(name: &str, value: &str) -> Option<Self> {
    let name = encode(name);
    if name.is_empty() {
      return None;
    }
    Some(Self {
      name,
      value: encode(&value.replace('"', "\\\"")),
    })
  }

  pub fn decoded_name(&self) -> Option<String> {
    urlencoding::decode(&self.name).ok().map(|s| s.into_owned())
  }

  /// Reverses the encoding and the quote escape.
  pub fn decoded_value(&self) -> Option<String> {
    urlencoding::decode(&self.value)
      .ok()
      .map(|s| s.replace("\\\"", "\""))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn quotes_escaped_before_encoding() {
    let p = ScriptParameter::new("x", "has \"quotes\"").unwrap();
    assert_eq!(p.name, "x");
    assert_eq!(p.value, "has%20%5C%22quotes%5C%22");
    assert_eq!(p.decoded_value().as_deref(), Some("has \"quotes\""));
  }

  #[test]
  fn empty_name_is_rejected() {
    assert!(ScriptParameter::new("", "value").is_none());
  }

  #[test]
  fn name_is_encoded() {
    let p = ScriptParameter::new("customer id", "7").unwrap();
    assert_eq!(p.name, "customer%20id");
    assert_eq!(p.decoded_name().as_deref(), Some("customer id"));
  }

  #[test]
  fn syntax_render() {
    let p = ScriptParameter::new("id", "a b").unwrap();
    assert_eq!(ScriptParamSyntax::Quoted.render(&p), "$id=\"a%20b\" ; ");
    assert_eq!(ScriptParamSyntax::Delimited.render(&p), "id=a%20b||||");
  }

  #[test]
  fn syntax_from_yaml() {
    let s: ScriptParamSyntax = serde_yaml::from_str("delimited").unwrap();
    assert_eq!(s, ScriptParamSyntax::Delimited);
  }
}
