use std::fmt::Display;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
  #[serde(alias = "es")]
  Esm,
  Cjs,
}

impl OutputFormat {
  #[inline]
  pub fn is_cjs(&self) -> bool {
    matches!(self, Self::Cjs)
  }

  #[inline]
  pub fn is_esm(&self) -> bool {
    matches!(self, Self::Esm)
  }
}

impl Display for OutputFormat {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Esm => write!(f, "es"),
      Self::Cjs => write!(f, "cjs"),
    }
  }
}
