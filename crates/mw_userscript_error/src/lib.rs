mod userscript_error;

use std::ops::{Deref, DerefMut};

pub use crate::userscript_error::UserscriptError;

#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

impl From<UserscriptError> for BuildError {
  fn from(error: UserscriptError) -> Self {
    Self(vec![error.into()])
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

#[test]
fn build_error_collects_typed_errors() {
  let mut errors = BuildError::from(UserscriptError::TemplatePlaceholderCount { count: 0 });
  errors.push(anyhow::anyhow!("second"));

  assert_eq!(errors.len(), 2);
  assert!(errors[0].downcast_ref::<UserscriptError>().is_some());
  assert_eq!(errors[1].to_string(), "second");
}
