use std::num::NonZeroU64;

use crate::externals::Externals;

#[allow(clippy::struct_excessive_bools)] // Using raw booleans is more clear in this case
#[derive(Debug)]
pub struct NormalizedPluginOptions {
  pub name: String,
  pub entry: String,
  pub template: Option<String>,
  pub banner: Option<String>,
  pub footer: Option<String>,
  /// Module names as configured. This is what `'modules'` expands to.
  pub using: Vec<String>,
  /// `using` plus the names implied by it.
  pub externals: Externals,
  pub ignore_build_options: bool,
  pub resource_loader_debug_cookie_age: Option<NonZeroU64>,
  pub esm_chunks: bool,
  pub esm_unhoist_chunks: Option<Vec<String>>,
  /// Always empty or ending with `/`.
  pub base_url: String,
}
