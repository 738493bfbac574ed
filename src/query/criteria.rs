use serde::{Deserialize, Serialize};

use crate::types::{SortCriterion, WhereCriterion};

/// Ordered find criteria. Insertion order is rendering order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WhereCriteria {
  criteria: Vec<WhereCriterion>,
}

impl WhereCriteria {
  pub fn new() -> Self {
    Self::default()
  }

  /// Start a criteria set from a single criterion.
  pub fn new_with(field: &str, value: &str, op: impl AsRef<str>) -> Self {
    let mut criteria = Self::new();
    criteria.add(field, value, op);
    criteria
  }

  pub fn add(&mut self, field: &str, value: &str, op: impl AsRef<str>) -> &mut Self {
    self.criteria.push(WhereCriterion::new(field, value, op));
    self
  }

  pub fn get_all(&self) -> &[WhereCriterion] {
    &self.criteria
  }

  pub fn set_all(&mut self, criteria: Vec<WhereCriterion>) -> &mut Self {
    self.criteria = criteria;
    self
  }

  pub fn len(&self) -> usize {
    self.criteria.len()
  }

  pub fn is_empty(&self) -> bool {
    self.criteria.is_empty()
  }

  pub fn clear(&mut self) {
    self.criteria.clear();
  }

  /// `field=value[&field.op=op]...&-find`, or `-findall` when empty.
  pub fn render(&self) -> String {
    if self.criteria.is_empty() {
      return "-findall".into();
    }
    let mut out = self
      .criteria
      .iter()
      .map(WhereCriterion::render)
      .collect::<Vec<_>>()
      .join("&");
    out.push_str("&-find");
    out
  }
}

impl From<Vec<WhereCriterion>> for WhereCriteria {
  fn from(criteria: Vec<WhereCriterion>) -> Self {
    Self { criteria }
  }
}

/// Ordered sort criteria. Position decides precedence, starting at 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortCriteria {
  criteria: Vec<SortCriterion>,
}

impl SortCriteria {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn new_with(field: &str, order: impl AsRef<str>) -> Self {
    let mut criteria = Self::new();
    criteria.add(field, order);
    criteria
  }

  pub fn add(&mut self, field: &str, order: impl AsRef<str>) -> &mut Self {
    self.criteria.push(SortCriterion::new(field, order));
    self
  }

  pub fn get_all(&self) -> &[SortCriterion] {
    &self.criteria
  }

  pub fn set_all(&mut self, criteria: Vec<SortCriterion>) -> &mut Self {
    self.criteria = criteria;
    self
  }

  pub fn len(&self) -> usize {
    self.criteria.len()
  }

  pub fn is_empty(&self) -> bool {
    self.criteria.is_empty()
  }

  pub fn clear(&mut self) {
    self.criteria.clear();
  }

  /// `None` when there is nothing to sort by.
  pub fn render(&self) -> Option<String> {
    if self.criteria.is_empty() {
      return None;
    }
    Some(
      self
        .criteria
        .iter()
        .enumerate()
        .map(|(i, c)| c.render(i + 1))
        .collect::<Vec<_>>()
        .join("&"),
    )
  }
}

impl From<Vec<SortCriterion>> for SortCriteria {
  fn from(criteria: Vec<SortCriterion>) -> Self {
    Self { criteria }
  }
}
