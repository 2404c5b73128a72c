use crate::External;

#[derive(Debug, Default, Clone)]
pub struct RollupOptions {
  pub external: Option<External>,
  pub output: Option<RollupOutputOptions>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RollupOutputOptions {
  pub chunk_file_names: Option<String>,
  pub minify_internal_exports: Option<bool>,
  pub entry_file_names: Option<String>,
}
