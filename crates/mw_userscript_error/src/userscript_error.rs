use thiserror::Error;

/// Failures raised by the userscript plugin.
///
/// Everything except [`UserscriptError::LibAlreadyConfigured`] aborts the build. That one is
/// only ever reported as a warning.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserscriptError {
  #[error("Userscript template does not have exactly one 'script' tag (found {count}).")]
  TemplatePlaceholderCount { count: usize },

  #[error("Userscript template must place 'script'; on its own indented line.")]
  TemplateScriptNotOnOwnLine,

  #[error(
    "config.lib already set. Not touching it! Set `ignoreBuildOptions` to `true` to remove this warning."
  )]
  LibAlreadyConfigured,

  #[error("{chunk} imports are being used!")]
  UnhoistedChunkInUse { chunk: String },

  #[error("`{statement}` not found!")]
  UnhoistedRequireNotFound { statement: String },

  #[error("Malformed import clause `{clause}` for external module \"{module}\": {reason}")]
  MalformedImportClause { module: String, clause: String, reason: &'static str },

  #[error("Unrecognized import of external module \"{module}\": `{statement}`")]
  UnrecognizedExternalImport { module: String, statement: String },

  #[error("Cannot edit {start}..{end}: the range was already edited")]
  OverlappingEdit { start: usize, end: usize },

  #[error("Cannot move {start}..{end} to {index}: the target lies inside the range")]
  InvalidRelocation { start: usize, end: usize, index: usize },

  #[error("Invalid range {start}..{end} for source of length {len}")]
  InvalidRange { start: usize, end: usize, len: usize },
}
