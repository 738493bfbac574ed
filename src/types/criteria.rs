use serde::{Deserialize, Serialize};

/// A single find request criterion. `field` and `value` are stored
/// percent-encoded, exactly as they will appear on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhereCriterion {
  pub field: String,
  pub value: String,
  #[serde(default)]
  pub op: String,
}

impl WhereCriterion {
  pub fn new(field: &str, value: &str, op: impl AsRef<str>) -> Self {
    Self {
      field: encode(field),
      value: encode(value),
      op: op.as_ref().to_string(),
    }
  }

  pub fn render(&self) -> String {
    if self.op.is_empty() {
      format!("{}={}", self.field, self.value)
    } else {
      format!("{}={}&{}.op={}", self.field, self.value, self.field, self.op)
    }
  }
}

/// Find operators understood by the server. The builders accept any string,
/// this enum only saves callers from spelling them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindOperator {
  Eq,
  Cn,
  Bw,
  Ew,
  Gt,
  Gte,
  Lt,
  Lte,
  Neq,
}

impl FindOperator {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Eq => "eq",
      Self::Cn => "cn",
      Self::Bw => "bw",
      Self::Ew => "ew",
      Self::Gt => "gt",
      Self::Gte => "gte",
      Self::Lt => "lt",
      Self::Lte => "lte",
      Self::Neq => "neq",
    }
  }
}

impl AsRef<str> for FindOperator {
  fn as_ref(&self) -> &str {
    self.as_str()
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
  #[default]
  Ascend,
  Descend,
}

impl SortOrder {
  /// Anything other than exactly `descend` sorts ascending.
  pub fn parse_lenient(order: &str) -> Self {
    if order == "descend" {
      Self::Descend
    } else {
      Self::Ascend
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Ascend => "ascend",
      Self::Descend => "descend",
    }
  }
}

impl AsRef<str> for SortOrder {
  fn as_ref(&self) -> &str {
    self.as_str()
  }
}

/// A sort entry. `field` is stored percent-encoded. Without an order the
/// server default applies and no `-sortorder` pair is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortCriterion {
  pub field: String,
  #[serde(default)]
  pub order: Option<SortOrder>,
}

impl SortCriterion {
  pub fn new(field: &str, order: impl AsRef<str>) -> Self {
    let order = order.as_ref();
    Self {
      field: encode(field),
      order: (!order.is_empty()).then(|| SortOrder::parse_lenient(order)),
    }
  }

  /// Render with the given 1-based precedence.
  pub fn render(&self, precedence: usize) -> String {
    match self.order {
      Some(order) => format!(
        "-sortfield.{}={}&-sortorder.{}={}",
        precedence,
        self.field,
        precedence,
        order.as_str()
      ),
      None => format!("-sortfield.{}={}", precedence, self.field),
    }
  }
}

pub(crate) fn encode(s: &str) -> String {
  urlencoding::encode(s).into_owned()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn criterion_is_encoded_on_insert() {
    let c = WhereCriterion::new("Last Name", "O'Brien", "cn");
    assert_eq!(c.field, "Last%20Name");
    assert_eq!(c.value, "O%27Brien");
    assert_eq!(c.render(), "Last%20Name=O%27Brien&Last%20Name.op=cn");
  }

  #[test]
  fn criterion_without_operator() {
    let c = WhereCriterion::new("Status", "Open", "");
    assert_eq!(c.render(), "Status=Open");
  }

  #[test]
  fn unknown_operator_passes_through() {
    let c = WhereCriterion::new("Qty", "5", "between");
    assert_eq!(c.render(), "Qty=5&Qty.op=between");
  }

  #[test]
  fn find_operator_strings() {
    assert_eq!(FindOperator::Gte.as_str(), "gte");
    assert_eq!(FindOperator::Neq.as_ref(), "neq");
    let c = WhereCriterion::new("a", "b", FindOperator::Bw);
    assert_eq!(c.op, "bw");
  }

  #[test]
  fn sort_order_is_lenient() {
    assert_eq!(SortOrder::parse_lenient("descend"), SortOrder::Descend);
    assert_eq!(SortOrder::parse_lenient("DESCEND"), SortOrder::Ascend);
    assert_eq!(SortOrder::parse_lenient("desc"), SortOrder::Ascend);
    assert_eq!(SortOrder::parse_lenient("ascend"), SortOrder::Ascend);
  }

  #[test]
  fn sort_render() {
    let plain = SortCriterion::new("Last Name", "");
    assert_eq!(plain.order, None);
    assert_eq!(plain.render(1), "-sortfield.1=Last%20Name");

    let desc = SortCriterion::new("Created", "descend");
    assert_eq!(desc.render(2), "-sortfield.2=Created&-sortorder.2=descend");

    let other = SortCriterion::new("Created", "sideways");
    assert_eq!(other.render(3), "-sortfield.3=Created&-sortorder.3=ascend");
  }
}
