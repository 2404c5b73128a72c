use crate::OutputFormat;

/// `build.lib` can be switched off explicitly, which is not the same as leaving it unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibConfig {
  Disabled,
  Enabled(LibOptions),
}

impl LibConfig {
  pub fn is_enabled(&self) -> bool {
    matches!(self, Self::Enabled(_))
  }

  pub fn as_options(&self) -> Option<&LibOptions> {
    match self {
      Self::Enabled(options) => Some(options),
      Self::Disabled => None,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibOptions {
  pub entry: String,
  pub name: String,
  pub file_name: String,
  pub formats: Vec<OutputFormat>,
}
